use crate::coordinator::{DetailKind, SelectionPolicy, StallDetail};
use crate::model::Floor;
use crate::overlay::OverlayState;
use crate::ui::app::App;
use crate::ui::map_view::MapView;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

const BRAND_DARK: Color = Color::Rgb(0x1F, 0x2F, 0x3C);
const BRAND_SELECT_BG: Color = Color::Rgb(0xC3, 0xD3, 0xE0);
const BRAND_GREEN: Color = Color::Rgb(0x82, 0x9A, 0x68);
const BRAND_ORANGE: Color = Color::Rgb(0x9E, 0x68, 0x3C);
const BRAND_RED: Color = Color::Rgb(0xB5, 0x4A, 0x3C);
const BRAND_MUTED: Color = Color::Rgb(0x71, 0x65, 0x65);

const HEADER_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_DARK)
    .add_modifier(Modifier::BOLD);
const LABEL_STYLE: Style = Style::new().fg(BRAND_MUTED);

/// Draws the whole screen and returns the map's inner area, which is where clicks land.
pub fn draw_dashboard(frame: &mut Frame, app: &App) -> Rect {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Floor tabs
        Constraint::Min(10),   // Map + sidebar
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app);

    let main = Layout::horizontal([Constraint::Min(40), Constraint::Length(30)]).split(chunks[1]);
    let map_area = draw_map(frame, main[0], app);
    draw_sidebar(frame, main[1], app);

    let help = match app.coordinator.detail() {
        Some(detail) if detail.kind == DetailKind::Selection => {
            " Enter Confirm | Esc Cancel | q Quit "
        }
        Some(_) => " Esc Close | q Quit ",
        None => " Click/Enter Open | ←→ Stall | Tab/1-3 Floor | r Refresh | q Quit ",
    };
    draw_footer(frame, chunks[2], help);

    if let Some(detail) = app.coordinator.detail() {
        draw_detail(frame, detail);
    }

    map_area
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::horizontal([Constraint::Min(30), Constraint::Length(44)]).split(area);

    let titles = Floor::ALL.iter().map(|f| format!(" {} ", f.title()));
    let tabs = Tabs::new(titles)
        .select(app.coordinator.active_floor().position())
        .style(HEADER_STYLE)
        .highlight_style(SELECTED_STYLE)
        .block(
            Block::default()
                .title(" Stall Map ")
                .borders(Borders::ALL),
        );
    frame.render_widget(tabs, chunks[0]);

    let summary = app.coordinator.summary();
    let counts = Line::from(vec![
        Span::styled(format!(" {} vacant", summary.vacant), Style::default().fg(BRAND_GREEN)),
        Span::raw(" | "),
        Span::styled(format!("{} occupied", summary.occupied), Style::default().fg(BRAND_RED)),
        Span::raw(" | "),
        Span::styled(format!("{} unlisted ", summary.unlisted), LABEL_STYLE),
    ]);
    let counts = Paragraph::new(counts).block(Block::default().borders(Borders::ALL));
    frame.render_widget(counts, chunks[1]);
}

fn draw_map(frame: &mut Frame, area: Rect, app: &App) -> Rect {
    let plan = app.coordinator.plan();
    let block = Block::default()
        .title(format!(
            " {} ({} stalls) ",
            plan.floor.title(),
            plan.len()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BRAND_ORANGE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let overlays = app.coordinator.overlays();
    frame.render_widget(MapView::new(plan, &overlays), inner);
    inner
}

fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(6), // Legend
        Constraint::Min(6),    // Hovered stall
        Constraint::Length(5), // Status
    ])
    .split(area);

    let legend: Vec<Line> = [
        OverlayState::Available,
        OverlayState::Occupied,
        OverlayState::Selected,
    ]
    .iter()
    .map(|state| {
        Line::from(vec![
            Span::styled("██ ", Style::default().fg(state.style().fill)),
            Span::raw(state.legend()),
        ])
    })
    .chain(std::iter::once(Line::from(Span::styled(
        "No record = available",
        LABEL_STYLE,
    ))))
    .collect();
    frame.render_widget(
        Paragraph::new(legend).block(Block::default().title(" Legend ").borders(Borders::ALL)),
        chunks[0],
    );

    let hovered = app.coordinator.hovered().map_or_else(
        || vec![Line::from(Span::styled("-", LABEL_STYLE))],
        |code| stall_lines(app, code),
    );
    frame.render_widget(
        Paragraph::new(hovered)
            .wrap(Wrap { trim: true })
            .block(Block::default().title(" Stall ").borders(Borders::ALL)),
        chunks[1],
    );

    let mode = match app.coordinator.policy() {
        SelectionPolicy::ViewOnly => "view".to_string(),
        SelectionPolicy::Selectable { allow_occupied: false } => "select (vacant)".to_string(),
        SelectionPolicy::Selectable { allow_occupied: true } => "select (any)".to_string(),
    };
    let data = match (app.coordinator.is_loaded(), app.coordinator.last_error()) {
        (_, Some(err)) => Span::styled(format!("stale: {err}"), Style::default().fg(BRAND_RED)),
        (false, None) => Span::styled("loading…", LABEL_STYLE),
        (true, None) if app.coordinator.is_live() => {
            Span::styled("live", Style::default().fg(BRAND_GREEN))
        }
        (true, None) => Span::raw("loaded"),
    };
    let status = vec![
        Line::from(vec![Span::styled("Mode: ", LABEL_STYLE), Span::raw(mode)]),
        Line::from(vec![Span::styled("Data: ", LABEL_STYLE), data]),
    ];
    frame.render_widget(
        Paragraph::new(status)
            .wrap(Wrap { trim: true })
            .block(Block::default().title(" Status ").borders(Borders::ALL)),
        chunks[2],
    );
}

fn field(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{name}: "), LABEL_STYLE),
        Span::raw(value),
    ])
}

fn stall_lines(app: &App, code: &str) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(code.to_string(), HEADER_STYLE))];
    let floor = app.coordinator.active_floor();
    match app.coordinator.snapshot().stall(floor, code) {
        Some(stall) => {
            let status = if stall.is_occupied() {
                Span::styled("Occupied", Style::default().fg(BRAND_RED))
            } else {
                Span::styled("Vacant", Style::default().fg(BRAND_GREEN))
            };
            lines.push(Line::from(vec![Span::styled("Status: ", LABEL_STYLE), status]));
            lines.push(field("Rent", format!("{:.2}/mo", stall.monthly_rent)));
        }
        None => lines.push(Line::from(Span::styled("No backend record", LABEL_STYLE))),
    }
    lines
}

fn detail_lines(detail: &StallDetail) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    match &detail.record {
        Some(stall) => {
            let status = if stall.is_occupied() { "Occupied" } else { "Vacant" };
            lines.push(field("Status", status.to_string()));
            lines.push(field("Floor", stall.floor.title().to_string()));
            lines.push(field("Monthly rent", format!("{:.2}", stall.monthly_rent)));
            if let Some(size) = stall.floor_size {
                lines.push(field("Floor size", format!("{size} sqm")));
            }
            if let Some(reader) = &stall.electricity_reader {
                lines.push(field("Electricity reader", reader.clone()));
            }
        }
        None => lines.push(field("Status", "Available (no record)".to_string())),
    }

    if let Some(tenant) = &detail.tenant {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("── Tenant ──", LABEL_STYLE)));
        lines.push(field("Business", tenant.business_name.clone()));
        lines.push(field("Contact", tenant.contact_person.clone()));
        if !tenant.email.is_empty() {
            lines.push(field("Email", tenant.email.clone()));
        }
        if !tenant.phone.is_empty() {
            lines.push(field("Phone", tenant.phone.clone()));
        }
        let lease = format!(
            "{} → {}",
            tenant.lease_start.as_deref().unwrap_or("-"),
            tenant.lease_end.as_deref().unwrap_or("-")
        );
        lines.push(field("Lease", lease));
    }

    if detail.kind == DetailKind::Selection {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Enter to assign this stall, Esc to pick another",
            Style::default().fg(BRAND_ORANGE),
        )));
    }
    lines
}

fn draw_detail(frame: &mut Frame, detail: &StallDetail) {
    let [area] = Layout::horizontal([Constraint::Length(52)])
        .flex(Flex::Center)
        .areas(frame.area());
    let [area] = Layout::vertical([Constraint::Length(16)])
        .flex(Flex::Center)
        .areas(area);

    let title = match detail.kind {
        DetailKind::View => format!(" Stall {} ", detail.stall_code),
        DetailKind::Selection => format!(" Select stall {} ", detail.stall_code),
    };
    let popup = Paragraph::new(detail_lines(detail))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .title_style(HEADER_STYLE)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BRAND_ORANGE)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, help: &str) {
    let footer = Paragraph::new(help)
        .style(Style::default().fg(BRAND_MUTED))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}
