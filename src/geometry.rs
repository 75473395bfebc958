//! Containment tests over floor-plan pixel coordinates.
//!
//! Coordinates are flat `x,y` sequences as authored in the region tables.

/// Ray-casting point-in-polygon test over a flat `[x0, y0, x1, y1, ...]` vertex list.
///
/// The polygon must have at least three vertices. Points lying exactly on an edge may
/// land on either side.
#[must_use]
pub fn point_in_polygon(x: f64, y: f64, coords: &[f64]) -> bool {
    debug_assert!(
        coords.len() >= 6 && coords.len() % 2 == 0,
        "polygon needs 3+ vertices"
    );
    let n = coords.len() / 2;
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (coords[2 * i], coords[2 * i + 1]);
        let (xj, yj) = (coords[2 * j], coords[2 * j + 1]);
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Inclusive rectangle containment. Corners may be given in any order.
#[must_use]
pub fn rect_contains(x: f64, y: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
    x1.min(x2) <= x && x <= x1.max(x2) && y1.min(y2) <= y && y <= y1.max(y2)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rect,
    Polygon,
}

/// Outline of one region in native pixel space.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Two opposite corners `[x1, y1, x2, y2]`, in whatever order they were authored.
    Rect([f64; 4]),
    /// Flat vertex list, implicitly closed.
    Polygon(Vec<f64>),
}

impl Shape {
    #[must_use]
    pub fn coordinates(&self) -> &[f64] {
        match self {
            Shape::Rect(c) => c.as_slice(),
            Shape::Polygon(c) => c.as_slice(),
        }
    }

    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        match self {
            Shape::Rect([x1, y1, x2, y2]) => rect_contains(x, y, *x1, *y1, *x2, *y2),
            Shape::Polygon(coords) => point_in_polygon(x, y, coords),
        }
    }

    /// Label anchor: rectangle midpoint, or the mean of the polygon's vertices.
    ///
    /// The vertex mean is not the area centroid; for the authored shapes it stays inside.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        match self {
            Shape::Rect([x1, y1, x2, y2]) => ((x1 + x2) / 2.0, (y1 + y2) / 2.0),
            Shape::Polygon(coords) => {
                let n = (coords.len() / 2) as f64;
                let (sx, sy) = coords
                    .chunks_exact(2)
                    .fold((0.0, 0.0), |(sx, sy), p| (sx + p[0], sy + p[1]));
                (sx / n, sy / n)
            }
        }
    }

    /// Normalized bounds as `(min_x, min_y, max_x, max_y)`.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        self.coordinates().chunks_exact(2).fold(
            (
                f64::INFINITY,
                f64::INFINITY,
                f64::NEG_INFINITY,
                f64::NEG_INFINITY,
            ),
            |(min_x, min_y, max_x, max_y), p| {
                (min_x.min(p[0]), min_y.min(p[1]), max_x.max(p[0]), max_y.max(p[1]))
            },
        )
    }

    /// Closed outline as a vertex loop, used for stroking.
    #[must_use]
    pub fn outline(&self) -> Vec<(f64, f64)> {
        match self {
            Shape::Rect(_) => {
                let (min_x, min_y, max_x, max_y) = self.bounds();
                vec![(min_x, min_y), (max_x, min_y), (max_x, max_y), (min_x, max_y)]
            }
            Shape::Polygon(coords) => coords.chunks_exact(2).map(|p| (p[0], p[1])).collect(),
        }
    }
}
