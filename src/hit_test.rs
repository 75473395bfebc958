//! Maps a pointer position on the displayed floor plan back to a stall region.

use crate::registry::{FloorPlan, Region};

/// Pointer position in client (screen) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub client_x: f64,
    pub client_y: f64,
}

impl Pointer {
    #[must_use]
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }

    /// Center of a terminal cell, so clicks land mid-cell rather than on its corner.
    #[must_use]
    pub fn from_cell(column: u16, row: u16) -> Self {
        Self::new(f64::from(column) + 0.5, f64::from(row) + 0.5)
    }
}

/// On-screen bounding box of the displayed floor-plan image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ImageBox {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

impl From<ratatui::layout::Rect> for ImageBox {
    fn from(area: ratatui::layout::Rect) -> Self {
        Self::new(
            f64::from(area.x),
            f64::from(area.y),
            f64::from(area.width),
            f64::from(area.height),
        )
    }
}

/// Displayed-to-native scale factors for one floor plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Scale {
    /// `None` when the image is not visible.
    #[must_use]
    pub fn between(plan: &FloorPlan, image: &ImageBox) -> Option<Self> {
        if image.is_empty() {
            return None;
        }
        Some(Self {
            x: plan.width / image.width,
            y: plan.height / image.height,
        })
    }

    #[must_use]
    pub fn apply(self, x: f64, y: f64) -> (f64, f64) {
        (x * self.x, y * self.y)
    }

    /// Native-to-displayed factors.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            x: 1.0 / self.x,
            y: 1.0 / self.y,
        }
    }
}

/// Converts a pointer position into the plan's native pixel space.
#[must_use]
pub fn to_native(pointer: Pointer, image: &ImageBox, plan: &FloorPlan) -> Option<(f64, f64)> {
    let scale = Scale::between(plan, image)?;
    let x = pointer.client_x - image.left;
    let y = pointer.client_y - image.top;
    Some(scale.apply(x, y))
}

/// Converts a native-space point to client coordinates, the inverse of [`to_native`].
#[must_use]
pub fn to_client(x: f64, y: f64, image: &ImageBox, plan: &FloorPlan) -> Option<Pointer> {
    let scale = Scale::between(plan, image)?.inverse();
    let (dx, dy) = scale.apply(x, y);
    Some(Pointer::new(dx + image.left, dy + image.top))
}

/// Region under the pointer, first match in authored order.
#[must_use]
pub fn resolve_region<'a>(
    pointer: Pointer,
    image: &ImageBox,
    plan: &'a FloorPlan,
) -> Option<&'a Region> {
    let (x, y) = to_native(pointer, image, plan)?;
    plan.region_at(x, y)
}

/// Stall code under the pointer. `None` means empty floor space, not an error.
#[must_use]
pub fn resolve_click<'a>(
    pointer: Pointer,
    image: &ImageBox,
    plan: &'a FloorPlan,
) -> Option<&'a str> {
    resolve_region(pointer, image, plan).map(|r| r.stall_code.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Floor;
    use crate::registry::floor_plan;

    #[test]
    fn scale_round_trips() {
        let plan = floor_plan(Floor::Second);
        let image = ImageBox::new(12.0, 7.0, 97.0, 31.0);
        for (x, y) in [(360.0, 100.0), (0.0, 0.0), (842.5, 486.0), (123.456, 78.9)] {
            let pointer = to_client(x, y, &image, plan).unwrap();
            let (nx, ny) = to_native(pointer, &image, plan).unwrap();
            assert!((nx - x).abs() < 1e-9 && (ny - y).abs() < 1e-9);
        }
    }

    #[test]
    fn native_sized_image_is_identity() {
        let plan = floor_plan(Floor::Second);
        let image = ImageBox::new(0.0, 0.0, plan.width, plan.height);
        assert_eq!(resolve_click(Pointer::new(360.0, 100.0), &image, plan), Some("c1"));
    }

    #[test]
    fn empty_image_box_resolves_nothing() {
        let plan = floor_plan(Floor::Second);
        let image = ImageBox::new(0.0, 0.0, 0.0, 40.0);
        assert_eq!(resolve_click(Pointer::new(0.0, 0.0), &image, plan), None);
    }

    #[test]
    fn cell_pointer_is_centered() {
        assert_eq!(Pointer::from_cell(3, 4), Pointer::new(3.5, 4.5));
    }
}
