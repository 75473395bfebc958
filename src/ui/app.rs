use crate::config::MapConfig;
use crate::coordinator::{ClickOutcome, Coordinator, RefreshOutcome};
use crate::hit_test::{ImageBox, Pointer};
use crate::model::{Floor, StallRecord};
use crate::provider::{DataProvider, Fetcher};
use color_eyre::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{layout::Rect, DefaultTerminal, Frame};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// How long to wait for input before checking for fetched data.
const TICK: Duration = Duration::from_millis(100);

pub struct App {
    pub coordinator: Coordinator,
    fetcher: Fetcher,
    /// Inner map area from the last frame; the displayed image box for hit-testing.
    pub map_area: Rect,
    confirmed: Option<StallRecord>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(provider: Arc<dyn DataProvider>, config: &MapConfig) -> Self {
        let coordinator = Coordinator::new(config).on_select(|code, stall| {
            debug!(%code, rent = stall.monthly_rent, "picked");
        });

        Self {
            coordinator,
            fetcher: Fetcher::new(provider),
            map_area: Rect::default(),
            confirmed: None,
            should_quit: false,
        }
    }

    /// Runs until quit. Returns the stall confirmed in the picker, if any.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<Option<StallRecord>> {
        let generation = self.coordinator.mount(self.fetcher.provider().as_ref());
        self.fetcher.request(generation);

        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
            self.apply_fetched();
        }

        self.coordinator.unmount();
        Ok(self.confirmed)
    }

    fn draw(&mut self, frame: &mut Frame) {
        self.map_area = super::dashboard::draw_dashboard(frame, self);
    }

    fn handle_events(&mut self) -> Result<()> {
        if !event::poll(TICK)? {
            return Ok(());
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if self.coordinator.detail().is_some() {
                    self.handle_detail_keys(key.code);
                } else {
                    self.handle_map_keys(key.code);
                }
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
        Ok(())
    }

    fn handle_map_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.switch_floor(self.coordinator.active_floor().next()),
            KeyCode::Char('1') => self.switch_floor(Floor::Ground),
            KeyCode::Char('2') => self.switch_floor(Floor::Second),
            KeyCode::Char('3') => self.switch_floor(Floor::Third),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Up | KeyCode::Char('k') => {
                self.coordinator.step_hover(-1);
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Down | KeyCode::Char('j') => {
                self.coordinator.step_hover(1);
            }
            KeyCode::Enter => {
                if let Some(code) = self.coordinator.hovered().map(str::to_string) {
                    self.coordinator.activate(&code);
                }
            }
            KeyCode::Char('r') => self.refresh(),
            _ => {}
        }
    }

    fn handle_detail_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace => self.close_detail(),
            KeyCode::Enter => match self.coordinator.pending_selection() {
                // The record as of now, not as of the click.
                Some(stall) => {
                    self.confirmed = Some(stall.clone());
                    self.should_quit = true;
                }
                None => self.close_detail(),
            },
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let pointer = Pointer::from_cell(mouse.column, mouse.row);
        let image = ImageBox::from(self.map_area);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let outcome = self.coordinator.click(pointer, &image);
                if outcome != ClickOutcome::Miss {
                    debug!(?outcome, "map click");
                }
            }
            MouseEventKind::Moved => self.coordinator.hover(pointer, &image),
            _ => {}
        }
    }

    fn close_detail(&mut self) {
        self.coordinator.close_detail();
    }

    fn switch_floor(&mut self, floor: Floor) {
        if let Some(generation) = self.coordinator.switch_floor(floor) {
            self.fetcher.request(generation);
        }
    }

    fn refresh(&mut self) {
        let generation = self.coordinator.begin_refresh();
        self.fetcher.request(generation);
    }

    fn apply_fetched(&mut self) {
        for outcome in self.fetcher.drain() {
            let applied = self
                .coordinator
                .apply_refresh(outcome.generation, outcome.result);
            if applied == RefreshOutcome::Stale {
                debug!(generation = outcome.generation, "ignored stale fetch");
            }
        }
        if let Some(generation) = self.coordinator.poll_changes() {
            self.fetcher.request(generation);
        }
    }
}
