//! Static floor plans: every stall outline, in the native pixel space of its floor's art.
//!
//! The second and third floor tables were measured on the floor-plan images at 843×487 and
//! 858×482. Swapping the art for a different drawing or resolution means re-measuring every
//! outline in `second.rs` / `third.rs`; scaling alone is handled by the resolver.

mod ground;
mod second;
mod third;

use crate::error::RegistryError;
use crate::geometry::{Shape, ShapeKind};
use crate::model::Floor;
use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::OnceLock;

/// One authored table row: a stall code bound to its outline.
#[derive(Debug, Clone)]
pub struct RegionDef {
    pub code: Cow<'static, str>,
    pub kind: ShapeKind,
    pub coords: Cow<'static, [i32]>,
}

pub(crate) const fn rect(code: &'static str, coords: &'static [i32]) -> RegionDef {
    RegionDef {
        code: Cow::Borrowed(code),
        kind: ShapeKind::Rect,
        coords: Cow::Borrowed(coords),
    }
}

pub(crate) const fn poly(code: &'static str, coords: &'static [i32]) -> RegionDef {
    RegionDef {
        code: Cow::Borrowed(code),
        kind: ShapeKind::Polygon,
        coords: Cow::Borrowed(coords),
    }
}

impl RegionDef {
    fn check(&self, floor: Floor, index: usize) -> Result<(), RegistryError> {
        let code = self.code.to_string();
        let len = self.coords.len();
        if len % 2 != 0 {
            return Err(RegistryError::OddCoordinateCount { floor, index, code });
        }
        match self.kind {
            ShapeKind::Rect if len != 4 => Err(RegistryError::RectArity {
                floor,
                index,
                code,
                len,
            }),
            ShapeKind::Polygon if len < 6 => {
                Err(RegistryError::PolygonTooSmall { floor, index, code })
            }
            _ => Ok(()),
        }
    }

    fn to_shape(&self) -> Option<Shape> {
        let coords: Vec<f64> = self.coords.iter().map(|&c| f64::from(c)).collect();
        match self.kind {
            ShapeKind::Rect => match coords.as_slice() {
                &[x1, y1, x2, y2] => Some(Shape::Rect([x1, y1, x2, y2])),
                _ => None,
            },
            ShapeKind::Polygon if coords.len() >= 6 && coords.len() % 2 == 0 => {
                Some(Shape::Polygon(coords))
            }
            ShapeKind::Polygon => None,
        }
    }
}

/// A stall outline placed on a floor plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Position in the authored table.
    pub index: usize,
    pub stall_code: String,
    pub shape: Shape,
}

#[derive(Debug, Clone)]
pub struct FloorPlan {
    pub floor: Floor,
    /// Native width of the reference art in pixels.
    pub width: f64,
    /// Native height of the reference art in pixels.
    pub height: f64,
    regions: Vec<Region>,
}

impl FloorPlan {
    fn from_defs(floor: Floor, width: f64, height: f64, defs: &[RegionDef]) -> Self {
        let regions = defs
            .iter()
            .enumerate()
            .filter_map(|(index, def)| {
                def.to_shape().map(|shape| Region {
                    index,
                    stall_code: def.code.to_string(),
                    shape,
                })
            })
            .collect();
        Self {
            floor,
            width,
            height,
            regions,
        }
    }

    /// Regions in authored order.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    #[must_use]
    pub fn region(&self, code: &str) -> Option<&Region> {
        self.regions
            .iter()
            .find(|r| r.stall_code.eq_ignore_ascii_case(code.trim()))
    }

    /// First region, in authored order, containing the native-space point.
    #[must_use]
    pub fn region_at(&self, x: f64, y: f64) -> Option<&Region> {
        self.regions.iter().find(|r| r.shape.contains(x, y))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

fn table(floor: Floor) -> (f64, f64, Vec<RegionDef>) {
    match floor {
        Floor::Ground => (ground::WIDTH, ground::HEIGHT, ground::booths()),
        Floor::Second => (second::WIDTH, second::HEIGHT, second::REGIONS.to_vec()),
        Floor::Third => (third::WIDTH, third::HEIGHT, third::REGIONS.to_vec()),
    }
}

/// The shared, lazily built plan for a floor.
#[must_use]
pub fn floor_plan(floor: Floor) -> &'static FloorPlan {
    static PLANS: [OnceLock<FloorPlan>; 3] = [OnceLock::new(), OnceLock::new(), OnceLock::new()];
    PLANS[floor.position()].get_or_init(|| {
        let (width, height, defs) = table(floor);
        FloorPlan::from_defs(floor, width, height, &defs)
    })
}

/// Checks one authored table for malformed outlines and repeated codes.
pub fn validate_defs(floor: Floor, defs: &[RegionDef]) -> Result<(), RegistryError> {
    let mut seen = HashSet::new();
    for (index, def) in defs.iter().enumerate() {
        def.check(floor, index)?;
        if !seen.insert(def.code.to_ascii_lowercase()) {
            return Err(RegistryError::DuplicateCode {
                floor,
                index,
                code: def.code.to_string(),
            });
        }
    }
    Ok(())
}

/// Validates every floor's table.
pub fn validate_registry() -> Result<(), RegistryError> {
    for floor in Floor::ALL {
        let (_, _, defs) = table(floor);
        validate_defs(floor, &defs)?;
    }
    Ok(())
}
