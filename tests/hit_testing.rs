use pretty_assertions::assert_eq;
use stall_map::hit_test::{resolve_click, resolve_region, to_native, ImageBox, Pointer, Scale};
use stall_map::model::Floor;
use stall_map::registry::floor_plan;

fn native_box(floor: Floor) -> ImageBox {
    let plan = floor_plan(floor);
    ImageBox::new(0.0, 0.0, plan.width, plan.height)
}

#[test]
fn c1_resolves_at_native_scale() {
    let plan = floor_plan(Floor::Second);
    let region = plan.region("c1").unwrap();
    assert_eq!(region.shape.coordinates(), &[353.0, 54.0, 378.0, 183.0]);

    let image = native_box(Floor::Second);
    assert_eq!(resolve_click(Pointer::new(360.0, 100.0), &image, plan), Some("c1"));
    assert_ne!(resolve_click(Pointer::new(10.0, 10.0), &image, plan), Some("c1"));
}

#[test]
fn scaled_and_offset_image_maps_back_to_native() {
    let plan = floor_plan(Floor::Second);
    // Shown at 1.5x with the image box offset inside the page.
    let image = ImageBox::new(40.0, 120.0, plan.width * 1.5, plan.height * 1.5);
    let pointer = Pointer::new(40.0 + 360.0 * 1.5, 120.0 + 100.0 * 1.5);

    let (x, y) = to_native(pointer, &image, plan).unwrap();
    assert!((x - 360.0).abs() < 1e-9 && (y - 100.0).abs() < 1e-9);
    assert_eq!(resolve_click(pointer, &image, plan), Some("c1"));
}

#[test]
fn terminal_sized_box_uses_independent_axes() {
    let plan = floor_plan(Floor::Third);
    let image = ImageBox::new(1.0, 4.0, 100.0, 30.0);
    let scale = Scale::between(plan, &image).unwrap();
    assert!((scale.x - 8.58).abs() < 1e-9);
    assert!((scale.y - 482.0 / 30.0).abs() < 1e-9);
}

#[test]
fn mixed_corner_rects_still_hit() {
    let plan = floor_plan(Floor::Second);
    let image = native_box(Floor::Second);
    // c4 and c20 are authored bottom-right corner first.
    assert_eq!(resolve_click(Pointer::new(440.0, 120.0), &image, plan), Some("c4"));
    assert_eq!(resolve_click(Pointer::new(465.0, 400.0), &image, plan), Some("c20"));
}

#[test]
fn non_convex_supermarket_leaves_its_notch_to_stalls() {
    let plan = floor_plan(Floor::Second);
    let image = native_box(Floor::Second);
    assert_eq!(
        resolve_click(Pointer::new(100.0, 400.0), &image, plan),
        Some("Super Market")
    );
    assert_eq!(resolve_click(Pointer::new(250.0, 290.0), &image, plan), Some("c30"));
    assert_eq!(resolve_click(Pointer::new(200.0, 240.0), &image, plan), None);
}

#[test]
fn polygon_stalls_on_the_third_floor() {
    let plan = floor_plan(Floor::Third);
    let image = native_box(Floor::Third);
    assert_eq!(resolve_click(Pointer::new(100.0, 100.0), &image, plan), Some("Food Court"));
    assert_eq!(resolve_click(Pointer::new(290.0, 240.0), &image, plan), Some("d38"));
    assert_eq!(resolve_click(Pointer::new(800.0, 420.0), &image, plan), Some("d37"));
    assert_eq!(resolve_click(Pointer::new(100.0, 400.0), &image, plan), Some("Cinema"));
}

#[test]
fn shared_edges_go_to_the_first_authored_region() {
    let plan = floor_plan(Floor::Second);
    let image = native_box(Floor::Second);
    assert_eq!(resolve_click(Pointer::new(378.0, 100.0), &image, plan), Some("c1"));
}

#[test]
fn empty_space_and_outside_clicks_miss() {
    let plan = floor_plan(Floor::Second);
    let image = native_box(Floor::Second);
    for (x, y) in [(10.0, 10.0), (500.0, 200.0), (-5.0, 100.0), (900.0, 100.0)] {
        assert_eq!(resolve_click(Pointer::new(x, y), &image, plan), None, "({x}, {y})");
    }
}

#[test]
fn resolution_is_deterministic() {
    let plan = floor_plan(Floor::Ground);
    let image = ImageBox::new(3.0, 2.0, 87.0, 41.0);
    for column in 0..95u16 {
        for row in 0..45u16 {
            let pointer = Pointer::from_cell(column, row);
            let first = resolve_region(pointer, &image, plan).map(|r| r.index);
            let again = resolve_region(pointer, &image, plan).map(|r| r.index);
            assert_eq!(first, again);
        }
    }
}

#[test]
fn ground_booths_resolve_by_cell() {
    let plan = floor_plan(Floor::Ground);
    let image = native_box(Floor::Ground);
    // First row starts at (30, 30) with 60x50 booths every 70px.
    assert_eq!(resolve_click(Pointer::new(60.0, 55.0), &image, plan), Some("b1"));
    assert_eq!(resolve_click(Pointer::new(130.0, 55.0), &image, plan), Some("b2"));
    // Gutter between b1 and b2.
    assert_eq!(resolve_click(Pointer::new(95.0, 55.0), &image, plan), None);
}
