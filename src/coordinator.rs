//! Selection and detail state for the floor map.
//!
//! One coordinator serves both the read-only directory map and the stall picker; the
//! difference is its [`SelectionPolicy`]. Data arrives as whole [`Snapshot`]s tagged with
//! the refresh generation that requested them, and only the latest generation is applied.

use crate::config::MapConfig;
use crate::error::ProviderError;
use crate::hit_test::{resolve_click, ImageBox, Pointer};
use crate::model::{Floor, Snapshot, StallRecord, TenantRecord};
use crate::overlay::{compute_overlays, OccupancySummary, RegionOverlay};
use crate::provider::{DataProvider, TableChange};
use crate::registry::{floor_plan, FloorPlan};
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Directory map: every stall opens its detail view.
    ViewOnly,
    /// Stall picker: vacant stalls are emitted to the caller; occupied ones only when allowed.
    Selectable { allow_occupied: bool },
}

impl SelectionPolicy {
    /// Whether a stall with this record may be handed to the selection callback.
    #[must_use]
    pub fn admits(self, record: Option<&StallRecord>) -> bool {
        match (self, record) {
            (SelectionPolicy::ViewOnly, _) | (_, None) => false,
            (SelectionPolicy::Selectable { allow_occupied }, Some(stall)) => {
                allow_occupied || !stall.is_occupied()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapState {
    Idle,
    FloorSelected,
    RegionResolved,
    DetailOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKind {
    View,
    Selection,
}

/// What the open dialog shows.
#[derive(Debug, Clone, PartialEq)]
pub struct StallDetail {
    pub kind: DetailKind,
    pub stall_code: String,
    /// `None` when the backend has no row for this code.
    pub record: Option<StallRecord>,
    /// Only looked up for occupied stalls.
    pub tenant: Option<TenantRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Empty floor space.
    Miss,
    /// Not mounted, or a dialog already has focus.
    Ignored,
    /// Detail view opened.
    Opened,
    /// Stall emitted to the selection callback.
    Selected,
    /// Occupied stall in a picker that does not allow it.
    Blocked,
    /// Picker click on a region the backend does not list.
    Unlisted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied,
    /// A newer refresh was requested since; the result was dropped.
    Stale,
    /// The read failed; the previous snapshot stays on screen.
    Failed,
}

pub type SelectCallback = Box<dyn FnMut(&str, &StallRecord)>;

pub struct Coordinator {
    policy: SelectionPolicy,
    initial_floor: Floor,
    state: MapState,
    active_floor: Floor,
    selected: Option<String>,
    hovered: Option<String>,
    detail: Option<StallDetail>,
    snapshot: Arc<Snapshot>,
    generation: u64,
    loaded: bool,
    last_error: Option<String>,
    changes: Option<Receiver<TableChange>>,
    on_select: Option<SelectCallback>,
}

impl Coordinator {
    #[must_use]
    pub fn new(config: &MapConfig) -> Self {
        Self {
            policy: config.policy,
            initial_floor: config.initial_floor,
            state: MapState::Idle,
            active_floor: config.initial_floor,
            selected: None,
            hovered: None,
            detail: None,
            snapshot: Arc::new(Snapshot::default()),
            generation: 0,
            loaded: false,
            last_error: None,
            changes: None,
            on_select: None,
        }
    }

    /// Registers the outward "stall selected" event.
    #[must_use]
    pub fn on_select<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&str, &StallRecord) + 'static,
    {
        self.on_select = Some(Box::new(callback));
        self
    }

    /// Resets the selection, subscribes to changes and returns the generation to fetch.
    pub fn mount(&mut self, provider: &dyn DataProvider) -> u64 {
        self.active_floor = self.initial_floor;
        self.selected = None;
        self.hovered = None;
        self.detail = None;
        self.changes = provider.subscribe();
        self.state = MapState::FloorSelected;
        info!(
            floor = %self.active_floor,
            live = self.changes.is_some(),
            "floor map mounted"
        );
        self.begin_refresh()
    }

    /// Drops the subscription. Fetches still in flight will be discarded as stale.
    pub fn unmount(&mut self) {
        self.changes = None;
        self.detail = None;
        self.selected = None;
        self.state = MapState::Idle;
        self.generation += 1;
        info!("floor map unmounted");
    }

    /// Starts a new refresh generation; earlier ones become stale.
    pub fn begin_refresh(&mut self) -> u64 {
        self.generation += 1;
        debug!(generation = self.generation, "refresh requested");
        self.generation
    }

    /// Applies a finished read if it belongs to the latest generation.
    pub fn apply_refresh(
        &mut self,
        generation: u64,
        result: Result<Snapshot, ProviderError>,
    ) -> RefreshOutcome {
        if generation != self.generation || self.state == MapState::Idle {
            debug!(generation, latest = self.generation, "dropping stale refresh");
            return RefreshOutcome::Stale;
        }

        match result {
            Ok(snapshot) => {
                debug!(
                    generation,
                    stalls = snapshot.stalls().len(),
                    tenants = snapshot.tenants().len(),
                    "snapshot applied"
                );
                self.snapshot = Arc::new(snapshot);
                self.loaded = true;
                self.last_error = None;
                self.refresh_detail();
                RefreshOutcome::Applied
            }
            Err(err) => {
                warn!(generation, error = %err, "refresh failed, keeping previous snapshot");
                self.last_error = Some(err.to_string());
                RefreshOutcome::Failed
            }
        }
    }

    /// Synchronous refresh, for callers without a worker thread.
    pub fn refresh_now(&mut self, provider: &dyn DataProvider) -> RefreshOutcome {
        let generation = self.begin_refresh();
        let result = crate::provider::load_snapshot(provider);
        self.apply_refresh(generation, result)
    }

    /// Drains pending change notifications. A burst of changes yields one refresh.
    pub fn poll_changes(&mut self) -> Option<u64> {
        let changes = self.changes.as_ref()?;
        let tables: Vec<_> = changes.try_iter().map(|c| c.table).collect();
        if tables.is_empty() {
            return None;
        }
        debug!(?tables, "backend tables changed");
        Some(self.begin_refresh())
    }

    /// Switches floors, clearing any selection, and returns the generation to fetch.
    pub fn switch_floor(&mut self, floor: Floor) -> Option<u64> {
        if self.state == MapState::Idle {
            return None;
        }
        self.active_floor = floor;
        self.selected = None;
        self.hovered = None;
        self.detail = None;
        self.state = MapState::FloorSelected;
        info!(%floor, "floor switched");
        Some(self.begin_refresh())
    }

    /// Resolves a click on the displayed plan and applies the selection policy.
    pub fn click(&mut self, pointer: Pointer, image: &ImageBox) -> ClickOutcome {
        if !self.accepts_input() {
            return ClickOutcome::Ignored;
        }
        match resolve_click(pointer, image, self.plan()) {
            Some(code) => self.activate(code),
            None => ClickOutcome::Miss,
        }
    }

    /// Runs the selection policy for a region, as if it had been clicked.
    pub fn activate(&mut self, code: &str) -> ClickOutcome {
        if !self.accepts_input() {
            return ClickOutcome::Ignored;
        }
        let Some(region) = self.plan().region(code) else {
            return ClickOutcome::Miss;
        };
        let code = region.stall_code.clone();
        self.hovered = Some(code.clone());
        self.state = MapState::RegionResolved;

        let record = self.snapshot.stall(self.active_floor, &code).cloned();
        match self.policy {
            SelectionPolicy::ViewOnly => {
                let tenant = match &record {
                    Some(stall) if stall.is_occupied() => self.snapshot.tenant_for(&code).cloned(),
                    _ => None,
                };
                self.open(DetailKind::View, code, record, tenant);
                ClickOutcome::Opened
            }
            SelectionPolicy::Selectable { allow_occupied } => {
                let Some(stall) = record else {
                    debug!(%code, "no stall record, nothing to select");
                    self.state = MapState::FloorSelected;
                    return ClickOutcome::Unlisted;
                };
                if stall.is_occupied() && !allow_occupied {
                    debug!(%code, "occupied stall is not selectable");
                    self.state = MapState::FloorSelected;
                    return ClickOutcome::Blocked;
                }
                if let Some(callback) = self.on_select.as_mut() {
                    callback(&code, &stall);
                }
                info!(%code, "stall selected");
                self.open(DetailKind::Selection, code, Some(stall), None);
                ClickOutcome::Selected
            }
        }
    }

    fn open(
        &mut self,
        kind: DetailKind,
        code: String,
        record: Option<StallRecord>,
        tenant: Option<TenantRecord>,
    ) {
        self.selected = Some(code.clone());
        self.detail = Some(StallDetail {
            kind,
            stall_code: code,
            record,
            tenant,
        });
        self.state = MapState::DetailOpen;
    }

    /// Closes the dialog and clears the selection.
    pub fn close_detail(&mut self) {
        if self.state != MapState::DetailOpen {
            return;
        }
        self.detail = None;
        self.selected = None;
        self.state = MapState::FloorSelected;
    }

    /// Keeps an open dialog in step with a freshly applied snapshot.
    ///
    /// A pending selection is withdrawn once the stall no longer passes the picker's
    /// policy, so nothing stale can be confirmed.
    fn refresh_detail(&mut self) {
        let Some(detail) = self.detail.as_mut() else {
            return;
        };
        let record = self
            .snapshot
            .stall(self.active_floor, &detail.stall_code)
            .cloned();
        if detail.kind == DetailKind::Selection && !self.policy.admits(record.as_ref()) {
            warn!(code = %detail.stall_code, "selected stall is no longer available");
            self.detail = None;
            self.selected = None;
            self.state = MapState::FloorSelected;
            return;
        }
        detail.tenant = match (&record, detail.kind) {
            (Some(stall), DetailKind::View) if stall.is_occupied() => {
                self.snapshot.tenant_for(&detail.stall_code).cloned()
            }
            _ => None,
        };
        detail.record = record;
    }

    /// Tracks the region under the pointer.
    pub fn hover(&mut self, pointer: Pointer, image: &ImageBox) {
        if !self.accepts_input() {
            return;
        }
        self.hovered = resolve_click(pointer, image, self.plan()).map(str::to_string);
    }

    /// Moves the hover by `delta` regions in authored order, wrapping around.
    pub fn step_hover(&mut self, delta: isize) {
        if !self.accepts_input() {
            return;
        }
        let regions = self.plan().regions();
        if regions.is_empty() {
            return;
        }
        let len = regions.len() as isize;
        let next = match self.hovered_position() {
            Some(current) => (current as isize + delta).rem_euclid(len),
            None if delta < 0 => len - 1,
            None => 0,
        };
        self.hovered = Some(regions[next as usize].stall_code.clone());
    }

    fn hovered_position(&self) -> Option<usize> {
        let hovered = self.hovered.as_deref()?;
        self.plan()
            .regions()
            .iter()
            .position(|r| r.stall_code == hovered)
    }

    fn accepts_input(&self) -> bool {
        !matches!(self.state, MapState::Idle | MapState::DetailOpen)
    }

    #[must_use]
    pub fn plan(&self) -> &'static FloorPlan {
        floor_plan(self.active_floor)
    }

    #[must_use]
    pub fn overlays(&self) -> Vec<RegionOverlay<'static>> {
        compute_overlays(
            self.plan(),
            &self.snapshot,
            self.selected.as_deref(),
            self.hovered.as_deref(),
        )
    }

    #[must_use]
    pub fn summary(&self) -> OccupancySummary {
        OccupancySummary::of(self.plan(), &self.snapshot)
    }

    #[must_use]
    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    #[must_use]
    pub fn state(&self) -> MapState {
        self.state
    }

    #[must_use]
    pub fn active_floor(&self) -> Floor {
        self.active_floor
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    #[must_use]
    pub fn detail(&self) -> Option<&StallDetail> {
        self.detail.as_ref()
    }

    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// `true` once any snapshot has been applied.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The stall a confirm would hand over: the open selection's current record.
    #[must_use]
    pub fn pending_selection(&self) -> Option<&StallRecord> {
        self.detail
            .as_ref()
            .filter(|d| d.kind == DetailKind::Selection)
            .and_then(|d| d.record.as_ref())
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.changes.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OccupancyStatus;
    use crate::provider::MemoryProvider;
    use pretty_assertions::assert_eq;

    fn stall(code: &str, floor: Floor, status: OccupancyStatus) -> StallRecord {
        StallRecord {
            id: format!("id-{code}"),
            stall_code: code.to_string(),
            floor,
            monthly_rent: 3500.0,
            occupancy_status: status,
            floor_size: None,
            electricity_reader: None,
        }
    }

    fn view_only() -> Coordinator {
        Coordinator::new(&MapConfig::default())
    }

    #[test]
    fn mount_resets_to_initial_floor() {
        let provider = MemoryProvider::default();
        let mut map = view_only();
        assert_eq!(map.state(), MapState::Idle);
        let generation = map.mount(&provider);
        assert_eq!(generation, 1);
        assert_eq!(map.state(), MapState::FloorSelected);
        assert_eq!(map.active_floor(), Floor::Ground);
        assert_eq!((map.selected(), map.hovered()), (None, None));
        assert!(map.is_live());
    }

    #[test]
    fn latest_generation_wins() {
        let provider = MemoryProvider::default();
        let mut map = view_only();
        let first = map.mount(&provider);
        let second = map.switch_floor(Floor::Second).unwrap();

        let newer = Snapshot::new(
            vec![stall("c1", Floor::Second, OccupancyStatus::Occupied)],
            Vec::new(),
        );
        assert_eq!(map.apply_refresh(second, Ok(newer)), RefreshOutcome::Applied);

        // The first floor's fetch resolves late and must not overwrite.
        let older = Snapshot::default();
        assert_eq!(map.apply_refresh(first, Ok(older)), RefreshOutcome::Stale);
        assert!(map.snapshot().stall(Floor::Second, "c1").is_some());
    }

    #[test]
    fn failed_refresh_keeps_previous_snapshot() {
        let provider = MemoryProvider::new(
            vec![stall("b1", Floor::Ground, OccupancyStatus::Occupied)],
            Vec::new(),
        );
        let mut map = view_only();
        map.mount(&provider);
        assert_eq!(map.refresh_now(&provider), RefreshOutcome::Applied);

        provider.set_failing(true);
        assert_eq!(map.refresh_now(&provider), RefreshOutcome::Failed);
        assert!(map.last_error().is_some());
        assert!(map
            .snapshot()
            .stall(Floor::Ground, "b1")
            .unwrap()
            .is_occupied());

        provider.set_failing(false);
        assert_eq!(map.refresh_now(&provider), RefreshOutcome::Applied);
        assert_eq!(map.last_error(), None);
    }

    #[test]
    fn view_only_opens_vacant_and_occupied() {
        let tenant = TenantRecord {
            business_name: "Sari-Sari".to_string(),
            contact_person: "Jun".to_string(),
            email: String::new(),
            phone: String::new(),
            stall_number: "b2".to_string(),
            lease_start: None,
            lease_end: None,
            status: None,
        };
        let provider = MemoryProvider::new(
            vec![
                stall("b1", Floor::Ground, OccupancyStatus::Vacant),
                stall("b2", Floor::Ground, OccupancyStatus::Occupied),
            ],
            vec![tenant.clone()],
        );
        let mut map = view_only();
        map.mount(&provider);
        map.refresh_now(&provider);

        assert_eq!(map.activate("b1"), ClickOutcome::Opened);
        assert_eq!(map.detail().unwrap().tenant, None);
        assert_eq!(map.selected(), Some("b1"));
        map.close_detail();
        assert_eq!(map.state(), MapState::FloorSelected);
        assert_eq!(map.selected(), None);

        assert_eq!(map.activate("b2"), ClickOutcome::Opened);
        assert_eq!(map.detail().unwrap().tenant, Some(tenant));
    }

    #[test]
    fn clicks_are_ignored_while_dialog_open() {
        let provider = MemoryProvider::default();
        let mut map = view_only();
        map.mount(&provider);
        assert_eq!(map.activate("b1"), ClickOutcome::Opened);
        assert_eq!(map.activate("b3"), ClickOutcome::Ignored);
        assert_eq!(map.detail().unwrap().stall_code, "b1");
    }

    #[test]
    fn unmounted_map_ignores_everything() {
        let provider = MemoryProvider::default();
        let mut map = view_only();
        let generation = map.mount(&provider);
        map.unmount();
        assert_eq!(map.activate("b1"), ClickOutcome::Ignored);
        assert_eq!(map.switch_floor(Floor::Third), None);
        assert_eq!(
            map.apply_refresh(generation, Ok(Snapshot::default())),
            RefreshOutcome::Stale
        );
    }

    #[test]
    fn change_bursts_collapse_into_one_refresh() {
        let provider = MemoryProvider::default();
        let mut map = view_only();
        let mounted = map.mount(&provider);
        assert_eq!(map.poll_changes(), None);

        provider.set_stalls(Vec::new());
        provider.set_tenants(Vec::new());
        assert_eq!(map.poll_changes(), Some(mounted + 1));
        assert_eq!(map.poll_changes(), None);
    }

    #[test]
    fn open_detail_follows_new_snapshot() {
        let provider = MemoryProvider::new(
            vec![stall("b4", Floor::Ground, OccupancyStatus::Vacant)],
            Vec::new(),
        );
        let mut map = view_only();
        map.mount(&provider);
        map.refresh_now(&provider);
        map.activate("b4");

        provider.set_stalls(vec![stall("b4", Floor::Ground, OccupancyStatus::Occupied)]);
        map.refresh_now(&provider);
        let record = map.detail().unwrap().record.as_ref().unwrap();
        assert!(record.is_occupied());
    }

    #[test]
    fn selection_withdrawn_when_stall_becomes_occupied() {
        let provider = MemoryProvider::new(
            vec![stall("b1", Floor::Ground, OccupancyStatus::Vacant)],
            Vec::new(),
        );
        let mut map = Coordinator::new(&MapConfig::picker(false));
        map.mount(&provider);
        map.refresh_now(&provider);
        assert_eq!(map.activate("b1"), ClickOutcome::Selected);
        assert!(map.pending_selection().is_some());

        provider.set_stalls(vec![stall("b1", Floor::Ground, OccupancyStatus::Occupied)]);
        assert_eq!(map.refresh_now(&provider), RefreshOutcome::Applied);
        assert_eq!(map.state(), MapState::FloorSelected);
        assert_eq!(map.detail(), None);
        assert_eq!(map.selected(), None);
        assert_eq!(map.pending_selection(), None);
    }

    #[test]
    fn selection_withdrawn_when_stall_disappears() {
        let provider = MemoryProvider::new(
            vec![stall("b1", Floor::Ground, OccupancyStatus::Vacant)],
            Vec::new(),
        );
        let mut map = Coordinator::new(&MapConfig::picker(true));
        map.mount(&provider);
        map.refresh_now(&provider);
        assert_eq!(map.activate("b1"), ClickOutcome::Selected);

        provider.set_stalls(Vec::new());
        map.refresh_now(&provider);
        assert_eq!(map.detail(), None);
        assert_eq!(map.state(), MapState::FloorSelected);
    }

    #[test]
    fn permissive_picker_keeps_selection_with_fresh_record() {
        let provider = MemoryProvider::new(
            vec![stall("b1", Floor::Ground, OccupancyStatus::Vacant)],
            Vec::new(),
        );
        let mut map = Coordinator::new(&MapConfig::picker(true));
        map.mount(&provider);
        map.refresh_now(&provider);
        map.activate("b1");

        provider.set_stalls(vec![stall("b1", Floor::Ground, OccupancyStatus::Occupied)]);
        map.refresh_now(&provider);
        assert_eq!(map.state(), MapState::DetailOpen);
        assert!(map.pending_selection().unwrap().is_occupied());
    }

    #[test]
    fn directory_detail_has_no_pending_selection() {
        let provider = MemoryProvider::default();
        let mut map = view_only();
        map.mount(&provider);
        map.activate("b1");
        assert_eq!(map.pending_selection(), None);
    }

    #[test]
    fn hover_steps_wrap_in_authored_order() {
        let provider = MemoryProvider::default();
        let mut map = view_only();
        map.mount(&provider);
        map.switch_floor(Floor::Second);

        map.step_hover(-1);
        assert_eq!(map.hovered(), Some("Super Market"));
        map.step_hover(1);
        assert_eq!(map.hovered(), Some("c1"));
        map.step_hover(2);
        assert_eq!(map.hovered(), Some("c3"));
    }

    #[test]
    fn floor_switch_clears_selection() {
        let provider = MemoryProvider::default();
        let mut map = view_only();
        map.mount(&provider);
        map.activate("b7");
        map.close_detail();
        map.step_hover(1);
        map.switch_floor(Floor::Third);
        assert_eq!(map.state(), MapState::FloorSelected);
        assert_eq!((map.selected(), map.hovered()), (None, None));
        assert_eq!(map.plan().floor, Floor::Third);
    }
}
