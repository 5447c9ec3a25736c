//! The draft store: the single in-progress campaign draft, its partial
//! updates, and synchronous change notification.
//!
//! Exactly one draft exists per wizard session. Screens never hold the
//! draft themselves; they read a snapshot, edit local working state, and on
//! Continue merge their slice back through a [`DraftPatch`]. The store
//! performs no validation (that is the caller's job before merging), but it
//! does maintain two structural contracts:
//!
//! - a merged budget string is clamped to 4 fraction digits, and
//! - target-map entries whose KPI id is no longer selected are pruned, so a
//!   deselected KPI cannot leave a stale target behind.
//!
//! [`SharedDraftStore`] is the handle screens receive as a prop. It is
//! constructed when the wizard is entered and dropped when the wizard is
//! left; a wizard screen cannot be mounted without one, which turns the
//! "screen mounted outside the draft's provisioning scope" failure into a
//! compile error.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use common::model::campaign::CampaignDraft;

use super::format::clamp_budget_precision;

/// A shallow partial update of the draft. Only fields carrying `Some` are
/// merged; everything else keeps its current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftPatch {
    pub campaign_name: Option<String>,
    pub brand_name: Option<String>,
    pub selected_content_types: Option<Vec<String>>,
    pub selected_platforms: Option<Vec<String>>,
    pub selected_primary_kpis: Option<Vec<String>>,
    pub selected_secondary_kpis: Option<Vec<String>>,
    pub primary_targets: Option<BTreeMap<String, String>>,
    pub secondary_targets: Option<BTreeMap<String, String>>,
    pub total_budget: Option<String>,
    pub end_date: Option<String>,
}

impl DraftPatch {
    /// The basics step slice: campaign and brand name.
    pub fn basics(campaign_name: String, brand_name: String) -> Self {
        DraftPatch {
            campaign_name: Some(campaign_name),
            brand_name: Some(brand_name),
            ..DraftPatch::default()
        }
    }

    /// The content-requirements step slice.
    pub fn content_requirements(content_types: Vec<String>, platforms: Vec<String>) -> Self {
        DraftPatch {
            selected_content_types: Some(content_types),
            selected_platforms: Some(platforms),
            ..DraftPatch::default()
        }
    }

    /// The success-metrics step slice: both KPI selections and both target
    /// maps.
    pub fn success_metrics(
        primary_kpis: Vec<String>,
        secondary_kpis: Vec<String>,
        primary_targets: BTreeMap<String, String>,
        secondary_targets: BTreeMap<String, String>,
    ) -> Self {
        DraftPatch {
            selected_primary_kpis: Some(primary_kpis),
            selected_secondary_kpis: Some(secondary_kpis),
            primary_targets: Some(primary_targets),
            secondary_targets: Some(secondary_targets),
            ..DraftPatch::default()
        }
    }

    /// The budget-and-timeline step slice.
    pub fn budget_timeline(total_budget: String, end_date: String) -> Self {
        DraftPatch {
            total_budget: Some(total_budget),
            end_date: Some(end_date),
            ..DraftPatch::default()
        }
    }
}

pub type ObserverId = usize;

type Observer = Box<dyn Fn(&CampaignDraft)>;

/// Holds the draft and its observers. Most callers go through
/// [`SharedDraftStore`]; the plain struct exists so the merge semantics are
/// testable without a component tree.
pub struct DraftStore {
    draft: CampaignDraft,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: ObserverId,
}

impl DraftStore {
    pub fn new() -> Self {
        DraftStore {
            draft: CampaignDraft::default(),
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// A snapshot clone of the current draft.
    pub fn get(&self) -> CampaignDraft {
        self.draft.clone()
    }

    /// Shallow-merges `patch` into the draft and returns the new snapshot.
    /// Observers are notified synchronously, in subscription order, before
    /// this call returns.
    pub fn merge(&mut self, patch: DraftPatch) -> CampaignDraft {
        let draft = &mut self.draft;
        if let Some(name) = patch.campaign_name {
            draft.campaign_name = name;
        }
        if let Some(brand) = patch.brand_name {
            draft.brand_name = brand;
        }
        if let Some(types) = patch.selected_content_types {
            draft.selected_content_types = types;
        }
        if let Some(platforms) = patch.selected_platforms {
            draft.selected_platforms = platforms;
        }
        if let Some(kpis) = patch.selected_primary_kpis {
            draft.selected_primary_kpis = kpis;
        }
        if let Some(kpis) = patch.selected_secondary_kpis {
            draft.selected_secondary_kpis = kpis;
        }
        if let Some(targets) = patch.primary_targets {
            draft.primary_targets = targets;
        }
        if let Some(targets) = patch.secondary_targets {
            draft.secondary_targets = targets;
        }
        if let Some(budget) = patch.total_budget {
            draft.total_budget = clamp_budget_precision(&budget);
        }
        if let Some(date) = patch.end_date {
            draft.end_date = date;
        }

        // A target entry may only exist for a KPI that is still selected.
        let selected = draft.selected_primary_kpis.clone();
        draft.primary_targets.retain(|kpi, _| selected.contains(kpi));
        let selected = draft.selected_secondary_kpis.clone();
        draft
            .secondary_targets
            .retain(|kpi, _| selected.contains(kpi));

        self.notify();
        self.draft.clone()
    }

    /// Restores the zero-value draft and notifies observers.
    pub fn reset(&mut self) {
        self.draft = CampaignDraft::default();
        self.notify();
    }

    /// Registers `observer`; it runs synchronously after every merge/reset.
    /// Observers must not call back into the store from the notification
    /// (queue a message instead, the way the app relays re-renders).
    pub fn subscribe(&mut self, observer: impl Fn(&CampaignDraft) + 'static) -> ObserverId {
        let id = self.next_observer;
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) {
        self.observers.retain(|(observer_id, _)| *observer_id != id);
    }

    fn notify(&self) {
        for (_, observer) in &self.observers {
            observer(&self.draft);
        }
    }
}

impl Default for DraftStore {
    fn default() -> Self {
        DraftStore::new()
    }
}

/// Clonable handle to a [`DraftStore`], usable as a Yew prop. Equality is
/// handle identity: two clones of the same session's store compare equal,
/// stores of different sessions never do.
#[derive(Clone)]
pub struct SharedDraftStore(Rc<RefCell<DraftStore>>);

impl std::fmt::Debug for SharedDraftStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedDraftStore")
            .field(&Rc::as_ptr(&self.0))
            .finish()
    }
}

impl SharedDraftStore {
    pub fn new() -> Self {
        SharedDraftStore(Rc::new(RefCell::new(DraftStore::new())))
    }

    pub fn snapshot(&self) -> CampaignDraft {
        self.0.borrow().get()
    }

    pub fn merge(&self, patch: DraftPatch) -> CampaignDraft {
        self.0.borrow_mut().merge(patch)
    }

    pub fn reset(&self) {
        self.0.borrow_mut().reset();
    }

    pub fn subscribe(&self, observer: impl Fn(&CampaignDraft) + 'static) -> ObserverId {
        self.0.borrow_mut().subscribe(observer)
    }

    pub fn unsubscribe(&self, id: ObserverId) {
        self.0.borrow_mut().unsubscribe(id);
    }
}

impl Default for SharedDraftStore {
    fn default() -> Self {
        SharedDraftStore::new()
    }
}

impl PartialEq for SharedDraftStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn merge_applies_only_the_patched_fields() {
        let mut store = DraftStore::new();
        store.merge(DraftPatch::basics("Nike Summer".into(), "Nike".into()));
        store.merge(DraftPatch::budget_timeline("2.5".into(), "2026-09-01".into()));

        let draft = store.get();
        assert_eq!(draft.campaign_name, "Nike Summer");
        assert_eq!(draft.brand_name, "Nike");
        assert_eq!(draft.total_budget, "2.5");
        assert_eq!(draft.end_date, "2026-09-01");
        assert!(draft.selected_platforms.is_empty());
    }

    #[test]
    fn later_merges_override_earlier_fields_of_the_same_name() {
        let mut store = DraftStore::new();
        store.merge(DraftPatch::basics("First".into(), "Nike".into()));
        store.merge(DraftPatch {
            campaign_name: Some("Second".into()),
            ..DraftPatch::default()
        });

        let draft = store.get();
        assert_eq!(draft.campaign_name, "Second");
        // Untouched field of the first merge persists.
        assert_eq!(draft.brand_name, "Nike");
    }

    #[test]
    fn reset_restores_the_zero_value_draft() {
        let mut store = DraftStore::new();
        store.merge(DraftPatch::basics("Nike Summer".into(), "Nike".into()));
        store.merge(DraftPatch::content_requirements(
            vec!["video".into()],
            vec!["instagram".into()],
        ));
        store.reset();
        assert_eq!(store.get(), CampaignDraft::default());
    }

    #[test]
    fn budget_round_trips_at_four_decimals() {
        let mut store = DraftStore::new();
        store.merge(DraftPatch::budget_timeline("1.2345".into(), "2026-09-01".into()));
        assert_eq!(store.get().total_budget, "1.2345");

        store.merge(DraftPatch::budget_timeline("1.23456".into(), "2026-09-01".into()));
        assert_eq!(store.get().total_budget, "1.2345");
    }

    #[test]
    fn deselecting_a_kpi_prunes_its_target() {
        let mut store = DraftStore::new();
        let mut targets = BTreeMap::new();
        targets.insert("views".into(), "100000".into());
        targets.insert("reach".into(), "5000".into());
        store.merge(DraftPatch::success_metrics(
            vec!["views".into(), "reach".into()],
            vec![],
            targets.clone(),
            BTreeMap::new(),
        ));

        // Re-merge with "reach" deselected but its target still in the map.
        store.merge(DraftPatch::success_metrics(
            vec!["views".into()],
            vec![],
            targets,
            BTreeMap::new(),
        ));

        let draft = store.get();
        assert_eq!(draft.selected_primary_kpis, vec!["views".to_string()]);
        assert!(draft.primary_targets.contains_key("views"));
        assert!(!draft.primary_targets.contains_key("reach"));
    }

    #[test]
    fn observers_run_synchronously_on_merge_and_reset() {
        let mut store = DraftStore::new();
        let seen = Rc::new(Cell::new(0));
        let last_name = Rc::new(RefCell::new(String::new()));
        let (seen2, name2) = (seen.clone(), last_name.clone());
        store.subscribe(move |draft| {
            seen2.set(seen2.get() + 1);
            *name2.borrow_mut() = draft.campaign_name.clone();
        });

        store.merge(DraftPatch::basics("Nike Summer".into(), "Nike".into()));
        assert_eq!(seen.get(), 1);
        assert_eq!(&*last_name.borrow(), "Nike Summer");

        store.reset();
        assert_eq!(seen.get(), 2);
        assert_eq!(&*last_name.borrow(), "");
    }

    #[test]
    fn unsubscribed_observers_stop_receiving() {
        let mut store = DraftStore::new();
        let seen = Rc::new(Cell::new(0));
        let seen2 = seen.clone();
        let id = store.subscribe(move |_| seen2.set(seen2.get() + 1));

        store.merge(DraftPatch::default());
        store.unsubscribe(id);
        store.merge(DraftPatch::default());
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn shared_handles_compare_by_identity() {
        let store = SharedDraftStore::new();
        let clone = store.clone();
        assert_eq!(store, clone);
        assert_ne!(store, SharedDraftStore::new());

        clone.merge(DraftPatch::basics("Nike Summer".into(), "Nike".into()));
        assert_eq!(store.snapshot().campaign_name, "Nike Summer");
    }
}
