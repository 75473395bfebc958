//! Third floor, measured on the 858×482 plan. `d` stalls, food court and cinema.

use super::{poly, rect, RegionDef};

pub const WIDTH: f64 = 858.0;
pub const HEIGHT: f64 = 482.0;

#[rustfmt::skip]
pub(super) const REGIONS: &[RegionDef] = &[
    poly("Food Court", &[40, 40, 300, 40, 300, 200, 240, 260, 40, 260]),
    // north row
    rect("d1", &[330, 40, 365, 150]),
    rect("d2", &[365, 40, 400, 150]),
    rect("d3", &[400, 40, 435, 150]),
    rect("d4", &[435, 40, 470, 150]),
    rect("d5", &[505, 150, 470, 40]),
    rect("d6", &[505, 40, 540, 150]),
    rect("d7", &[540, 40, 575, 150]),
    rect("d8", &[575, 40, 610, 150]),
    rect("d9", &[610, 40, 645, 150]),
    rect("d10", &[680, 40, 645, 150]),
    rect("d11", &[680, 40, 715, 150]),
    rect("d12", &[715, 40, 750, 150]),
    // east column
    rect("d13", &[770, 40, 830, 110]),
    rect("d14", &[770, 110, 830, 180]),
    rect("d15", &[770, 180, 830, 250]),
    rect("d16", &[830, 320, 770, 250]),
    // island row
    rect("d17", &[330, 200, 365, 300]),
    rect("d18", &[365, 200, 400, 300]),
    rect("d19", &[400, 200, 435, 300]),
    rect("d20", &[435, 200, 470, 300]),
    rect("d21", &[470, 200, 505, 300]),
    rect("d22", &[505, 200, 540, 300]),
    rect("d23", &[540, 200, 575, 300]),
    rect("d24", &[575, 200, 610, 300]),
    rect("d25", &[610, 200, 645, 300]),
    rect("d26", &[645, 200, 680, 300]),
    rect("d27", &[680, 200, 715, 300]),
    rect("d28", &[715, 200, 750, 300]),
    poly("Cinema", &[40, 300, 260, 300, 300, 340, 300, 450, 40, 450]),
    // south row
    rect("d29", &[330, 350, 380, 450]),
    rect("d30", &[380, 350, 430, 450]),
    rect("d31", &[430, 350, 480, 450]),
    rect("d32", &[480, 350, 530, 450]),
    rect("d33", &[530, 350, 580, 450]),
    rect("d34", &[580, 350, 630, 450]),
    rect("d35", &[630, 350, 680, 450]),
    rect("d36", &[680, 350, 730, 450]),
    poly("d37", &[740, 350, 830, 330, 830, 450, 740, 450]),
    // food court kiosk on the chamfer
    poly("d38", &[255, 265, 315, 205, 325, 215, 265, 275]),
];
