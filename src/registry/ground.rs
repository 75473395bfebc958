//! Ground floor booths: a uniform grid, numbered row-major from `b1`.
//!
//! There is no measured art for this floor; the grid defines its own native space.

use super::RegionDef;
use crate::geometry::ShapeKind;
use std::borrow::Cow;

pub const GROUND_COLUMNS: usize = 10;
pub const GROUND_ROWS: usize = 7;

/// Booth numbers that are never issued (stairwells and the main entrance bay).
pub const GROUND_GAPS: [u32; 5] = [13, 26, 39, 52, 65];

const LAST_BOOTH: u32 = 75;

const ORIGIN: i32 = 30;
const CELL_W: i32 = 60;
const CELL_H: i32 = 50;
const GUTTER: i32 = 10;
const ROW_GAP: i32 = 20;
/// Extra spacing for the central aisle, inserted before this row.
const AISLE_ROW: usize = 3;
const AISLE: i32 = 40;

pub const WIDTH: f64 = 750.0;
pub const HEIGHT: f64 = 570.0;

fn cell(row: usize, col: usize) -> [i32; 4] {
    let x1 = ORIGIN + col as i32 * (CELL_W + GUTTER);
    let aisle = if row >= AISLE_ROW { AISLE } else { 0 };
    let y1 = ORIGIN + row as i32 * (CELL_H + ROW_GAP) + aisle;
    [x1, y1, x1 + CELL_W, y1 + CELL_H]
}

pub(super) fn booths() -> Vec<RegionDef> {
    let codes = (1..=LAST_BOOTH).filter(|n| !GROUND_GAPS.contains(n));
    let cells = (0..GROUND_ROWS).flat_map(|row| (0..GROUND_COLUMNS).map(move |col| (row, col)));

    codes
        .zip(cells)
        .map(|(n, (row, col))| RegionDef {
            code: Cow::Owned(format!("b{n}")),
            kind: ShapeKind::Rect,
            coords: Cow::Owned(cell(row, col).to_vec()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering_skips_gaps_and_fills_the_grid() {
        let booths = booths();
        assert_eq!(booths.len(), GROUND_ROWS * GROUND_COLUMNS);
        assert_eq!(booths[0].code, "b1");
        assert_eq!(booths[12].code, "b14");
        assert_eq!(booths.last().map(|b| b.code.as_ref()), Some("b75"));
        assert!(booths.iter().all(|b| b.code != "b13"));
    }

    #[test]
    fn grid_fits_native_space() {
        let [_, _, x2, y2] = cell(GROUND_ROWS - 1, GROUND_COLUMNS - 1);
        assert!(f64::from(x2) <= WIDTH);
        assert!(f64::from(y2) <= HEIGHT);
    }
}
