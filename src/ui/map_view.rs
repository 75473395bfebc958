use crate::overlay::RegionOverlay;
use crate::registry::FloorPlan;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine, Points},
        Widget,
    },
};

const LABEL_STYLE: Style = Style::new()
    .fg(Color::Rgb(0x1F, 0x2F, 0x3C))
    .add_modifier(Modifier::BOLD);
const UNLISTED_LABEL_STYLE: Style = Style::new()
    .fg(Color::Rgb(0x1F, 0x2F, 0x3C))
    .add_modifier(Modifier::DIM);

/// Floor plan drawn as braille overlays, stretched over the whole area.
///
/// Native y grows downward and canvas y grows upward, so every y is flipped.
pub struct MapView<'a> {
    plan: &'a FloorPlan,
    overlays: &'a [RegionOverlay<'a>],
}

impl<'a> MapView<'a> {
    #[must_use]
    pub fn new(plan: &'a FloorPlan, overlays: &'a [RegionOverlay<'a>]) -> Self {
        Self { plan, overlays }
    }

    fn flip(&self, y: f64) -> f64 {
        self.plan.height - y
    }

    /// Samples each region on the braille dot grid and keeps the dots inside it.
    fn fill_points(&self, area: Rect) -> Vec<(Color, Vec<(f64, f64)>)> {
        let step_x = self.plan.width / (f64::from(area.width) * 2.0);
        let step_y = self.plan.height / (f64::from(area.height) * 4.0);

        self.overlays
            .iter()
            .map(|overlay| {
                let shape = &overlay.region.shape;
                let (min_x, min_y, max_x, max_y) = shape.bounds();
                let mut points = Vec::new();
                let mut y = min_y + step_y / 2.0;
                while y < max_y {
                    let mut x = min_x + step_x / 2.0;
                    while x < max_x {
                        if shape.contains(x, y) {
                            points.push((x, self.flip(y)));
                        }
                        x += step_x;
                    }
                    y += step_y;
                }
                (overlay.style.fill, points)
            })
            .collect()
    }

    fn stroke(&self, ctx: &mut Context<'_>, overlay: &RegionOverlay<'_>) {
        let outline = overlay.region.shape.outline();
        for (i, &(x1, y1)) in outline.iter().enumerate() {
            let (x2, y2) = outline[(i + 1) % outline.len()];
            ctx.draw(&CanvasLine {
                x1,
                y1: self.flip(y1),
                x2,
                y2: self.flip(y2),
                color: overlay.style.stroke,
            });
        }
    }
}

impl Widget for MapView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let fills = self.fill_points(area);
        // Native units covered by one terminal column, for centering labels.
        let column_width = self.plan.width / f64::from(area.width);

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, self.plan.width])
            .y_bounds([0.0, self.plan.height])
            .paint(|ctx| {
                for (color, points) in &fills {
                    ctx.draw(&Points {
                        coords: points,
                        color: *color,
                    });
                }
                ctx.layer();
                for overlay in self.overlays {
                    self.stroke(ctx, overlay);
                }
                ctx.layer();
                for overlay in self.overlays {
                    let (x, y) = overlay.anchor;
                    let half = overlay.label.chars().count() as f64 * column_width / 2.0;
                    let style = if overlay.listed {
                        LABEL_STYLE
                    } else {
                        UNLISTED_LABEL_STYLE
                    };
                    ctx.print(
                        (x - half).max(0.0),
                        self.flip(y),
                        Span::styled(overlay.label.to_string(), style),
                    );
                }
            })
            .render(area, buf);
    }
}
