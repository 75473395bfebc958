//! Occupancy styling for every region of a floor.

use crate::model::{Snapshot, StallRecord};
use crate::registry::{FloorPlan, Region};
use ratatui::style::Color;

const AVAILABLE_FILL: Color = Color::Rgb(0x82, 0x9A, 0x68);
const AVAILABLE_STROKE: Color = Color::Rgb(0x4E, 0x63, 0x3A);
const OCCUPIED_FILL: Color = Color::Rgb(0xB5, 0x4A, 0x3C);
const OCCUPIED_STROKE: Color = Color::Rgb(0x7A, 0x2A, 0x20);
const SELECTED_FILL: Color = Color::Rgb(0xC3, 0xD3, 0xE0);
const SELECTED_STROKE: Color = Color::Rgb(0x9E, 0x68, 0x3C);
const HOVER_STROKE: Color = Color::Rgb(0xED, 0xED, 0xED);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayState {
    Available,
    Occupied,
    Selected,
}

impl OverlayState {
    /// Selection wins over occupancy; a missing record is never shown as occupied.
    #[must_use]
    pub fn classify(record: Option<&StallRecord>, is_selected: bool) -> Self {
        if is_selected {
            return OverlayState::Selected;
        }
        match record {
            Some(stall) if stall.is_occupied() => OverlayState::Occupied,
            _ => OverlayState::Available,
        }
    }

    #[must_use]
    pub fn style(self) -> OverlayStyle {
        match self {
            OverlayState::Available => OverlayStyle {
                fill: AVAILABLE_FILL,
                stroke: AVAILABLE_STROKE,
            },
            OverlayState::Occupied => OverlayStyle {
                fill: OCCUPIED_FILL,
                stroke: OCCUPIED_STROKE,
            },
            OverlayState::Selected => OverlayStyle {
                fill: SELECTED_FILL,
                stroke: SELECTED_STROKE,
            },
        }
    }

    #[must_use]
    pub fn legend(self) -> &'static str {
        match self {
            OverlayState::Available => "Available",
            OverlayState::Occupied => "Occupied",
            OverlayState::Selected => "Selected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayStyle {
    pub fill: Color,
    pub stroke: Color,
}

/// Resolved drawing instructions for one region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionOverlay<'a> {
    pub region: &'a Region,
    pub state: OverlayState,
    pub style: OverlayStyle,
    pub label: &'a str,
    /// Label anchor in native space.
    pub anchor: (f64, f64),
    /// `false` when the snapshot has no record for this code.
    pub listed: bool,
}

/// Styles every region of `plan` against `snapshot`.
///
/// Records are matched by stall code among the rows filed under the plan's floor. `hovered` brightens the outline without
/// changing the fill.
#[must_use]
pub fn compute_overlays<'a>(
    plan: &'a FloorPlan,
    snapshot: &Snapshot,
    selected: Option<&str>,
    hovered: Option<&str>,
) -> Vec<RegionOverlay<'a>> {
    let same = |a: &str, b: Option<&str>| b.is_some_and(|b| a.eq_ignore_ascii_case(b.trim()));

    plan.regions()
        .iter()
        .map(|region| {
            let code = region.stall_code.as_str();
            let record = snapshot.stall(plan.floor, code);
            let state = OverlayState::classify(record, same(code, selected));
            let mut style = state.style();
            if same(code, hovered) {
                style.stroke = HOVER_STROKE;
            }
            RegionOverlay {
                region,
                state,
                style,
                label: code,
                anchor: region.shape.center(),
                listed: record.is_some(),
            }
        })
        .collect()
}

/// Vacant / occupied / unlisted counts for one floor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OccupancySummary {
    pub vacant: usize,
    pub occupied: usize,
    pub unlisted: usize,
}

impl OccupancySummary {
    #[must_use]
    pub fn of(plan: &FloorPlan, snapshot: &Snapshot) -> Self {
        plan.regions()
            .iter()
            .fold(Self::default(), |mut acc, region| {
                match snapshot.stall(plan.floor, &region.stall_code) {
                    Some(stall) if stall.is_occupied() => acc.occupied += 1,
                    Some(_) => acc.vacant += 1,
                    None => acc.unlisted += 1,
                }
                acc
            })
    }
}
