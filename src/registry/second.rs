//! Second floor, measured on the 843×487 plan. `c` stalls plus the supermarket.

use super::{poly, rect, RegionDef};

pub const WIDTH: f64 = 843.0;
pub const HEIGHT: f64 = 487.0;

#[rustfmt::skip]
pub(super) const REGIONS: &[RegionDef] = &[
    // north row
    rect("c1", &[353, 54, 378, 183]),
    rect("c2", &[378, 54, 403, 183]),
    rect("c3", &[403, 54, 428, 183]),
    rect("c4", &[453, 183, 428, 54]),
    rect("c5", &[453, 54, 478, 183]),
    rect("c6", &[478, 54, 503, 183]),
    rect("c7", &[503, 54, 528, 183]),
    rect("c8", &[528, 54, 553, 183]),
    rect("c9", &[578, 54, 553, 183]),
    rect("c10", &[578, 54, 603, 183]),
    // east wing, along the angled wall
    poly("c11", &[630, 54, 760, 54, 740, 120, 630, 120]),
    poly("c12", &[630, 120, 740, 120, 720, 186, 630, 186]),
    poly("c13", &[630, 186, 720, 186, 700, 252, 630, 252]),
    poly("c14", &[630, 252, 700, 252, 680, 318, 630, 318]),
    poly("c15", &[760, 54, 810, 54, 810, 186, 720, 186, 740, 120]),
    // south row
    rect("c16", &[353, 300, 378, 430]),
    rect("c17", &[378, 300, 403, 430]),
    rect("c18", &[403, 300, 428, 430]),
    rect("c19", &[428, 300, 453, 430]),
    rect("c20", &[478, 430, 453, 300]),
    rect("c21", &[478, 300, 503, 430]),
    rect("c22", &[503, 300, 528, 430]),
    rect("c23", &[528, 300, 553, 430]),
    rect("c24", &[553, 300, 578, 430]),
    rect("c25", &[578, 300, 603, 430]),
    // corridor kiosks
    rect("c26", &[420, 215, 470, 265]),
    rect("c27", &[520, 215, 570, 265]),
    // south-east corner
    poly("c28", &[630, 340, 700, 340, 720, 430, 630, 430]),
    poly("c29", &[700, 340, 810, 340, 810, 430, 720, 430]),
    // west notch beside the supermarket
    rect("c30", &[210, 250, 330, 330]),
    rect("c31", &[330, 430, 210, 345]),
    poly("Super Market", &[40, 54, 330, 54, 330, 230, 190, 230, 190, 430, 40, 430]),
];
