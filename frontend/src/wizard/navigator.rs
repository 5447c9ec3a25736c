//! The wizard navigator: current step plus the validated forward /
//! unvalidated backward transitions over the fixed step table.

use common::model::campaign::CampaignDraft;

use super::step::WizardStep;
use super::validate::{validate, ValidationError};

/// Sequences the wizard against the current draft. The navigator never
/// performs I/O; entering the success step merely arms a one-shot
/// submission ticket that the app shell consumes to fire the gateway call.
pub struct Navigator {
    step: WizardStep,
    submission_armed: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Navigator {
            step: WizardStep::Basics,
            submission_armed: false,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Moves to the next step iff the current step validates against
    /// `draft`. On failure the navigator stays put and the reason is
    /// returned as a value; a validation failure is normal user-input flow,
    /// not an error path. Advancing from the terminal step is a no-op.
    ///
    /// Completing the budget step (and thereby entering the success step)
    /// arms the submission ticket.
    pub fn advance(
        &mut self,
        draft: &CampaignDraft,
        today: &str,
    ) -> Result<WizardStep, ValidationError> {
        validate(self.step, draft, today)?;
        if let Some(next) = self.step.next() {
            if next == WizardStep::Success {
                self.submission_armed = true;
            }
            self.step = next;
        }
        Ok(self.step)
    }

    /// Moves to the previous step without validating. The draft already
    /// holds whatever was merged, so nothing is lost. Stops at the first
    /// step.
    pub fn retreat(&mut self) -> WizardStep {
        if let Some(back) = self.step.back() {
            self.step = back;
        }
        self.step
    }

    /// Yields `true` exactly once per completed budget step. The caller
    /// fires the submission when it gets `true`; re-rendering or re-entering
    /// the success screen does not produce another ticket unless the budget
    /// step is completed again.
    pub fn take_submission_ticket(&mut self) -> bool {
        std::mem::take(&mut self.submission_armed)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::store::{DraftPatch, DraftStore};
    use std::collections::BTreeMap;

    const TODAY: &str = "2026-08-26";
    const TOMORROW: &str = "2026-08-27";

    #[test]
    fn invalid_advance_is_a_no_op_on_navigator_state() {
        let mut navigator = Navigator::new();
        let draft = CampaignDraft::default();

        let result = navigator.advance(&draft, TODAY);
        assert!(result.is_err());
        assert_eq!(navigator.step(), WizardStep::Basics);
        assert!(!navigator.take_submission_ticket());
    }

    #[test]
    fn advance_stops_at_the_failing_step() {
        let mut store = DraftStore::new();
        store.merge(DraftPatch::basics("Nike Summer".into(), "Nike".into()));

        let mut navigator = Navigator::new();
        assert_eq!(
            navigator.advance(&store.get(), TODAY),
            Ok(WizardStep::ContentRequirements)
        );

        // Platforms still empty: stuck on content requirements.
        let result = navigator.advance(&store.get(), TODAY);
        assert!(result.is_err());
        assert_eq!(navigator.step(), WizardStep::ContentRequirements);
    }

    #[test]
    fn retreat_always_succeeds_and_stops_at_basics() {
        let mut navigator = Navigator::new();
        assert_eq!(navigator.retreat(), WizardStep::Basics);

        let mut store = DraftStore::new();
        store.merge(DraftPatch::basics("Nike Summer".into(), "Nike".into()));
        navigator.advance(&store.get(), TODAY).unwrap();
        assert_eq!(navigator.retreat(), WizardStep::Basics);
    }

    fn complete_draft(store: &mut DraftStore) {
        store.merge(DraftPatch::basics("Nike Summer".into(), "Nike".into()));
        store.merge(DraftPatch::content_requirements(
            vec!["video".into()],
            vec!["instagram".into()],
        ));
        let mut targets = BTreeMap::new();
        targets.insert("views".into(), "100000".into());
        store.merge(DraftPatch::success_metrics(
            vec!["views".into()],
            vec![],
            targets,
            BTreeMap::new(),
        ));
        store.merge(DraftPatch::budget_timeline("2.5".into(), TOMORROW.into()));
    }

    #[test]
    fn happy_path_reaches_success_with_the_full_draft() {
        let mut store = DraftStore::new();
        complete_draft(&mut store);

        let mut navigator = Navigator::new();
        let steps: Vec<_> = (0..4)
            .map(|_| navigator.advance(&store.get(), TODAY).unwrap())
            .collect();
        assert_eq!(
            steps,
            vec![
                WizardStep::ContentRequirements,
                WizardStep::SuccessMetrics,
                WizardStep::BudgetTimeline,
                WizardStep::Success,
            ]
        );

        let draft = store.get();
        assert_eq!(draft.campaign_name, "Nike Summer");
        assert_eq!(draft.selected_content_types, vec!["video".to_string()]);
        assert_eq!(draft.selected_platforms, vec!["instagram".to_string()]);
        assert_eq!(draft.primary_targets.get("views").unwrap(), "100000");
        assert_eq!(draft.total_budget, "2.5");
        assert_eq!(draft.end_date, TOMORROW);
    }

    #[test]
    fn submission_ticket_fires_exactly_once() {
        let mut store = DraftStore::new();
        complete_draft(&mut store);

        let mut navigator = Navigator::new();
        for _ in 0..4 {
            navigator.advance(&store.get(), TODAY).unwrap();
        }
        assert!(navigator.take_submission_ticket());
        assert!(!navigator.take_submission_ticket());

        // Advancing on the terminal step is a no-op and does not re-arm.
        assert_eq!(navigator.advance(&store.get(), TODAY), Ok(WizardStep::Success));
        assert!(!navigator.take_submission_ticket());
    }

    #[test]
    fn recompleting_the_budget_step_rearms_the_ticket() {
        let mut store = DraftStore::new();
        complete_draft(&mut store);

        let mut navigator = Navigator::new();
        for _ in 0..4 {
            navigator.advance(&store.get(), TODAY).unwrap();
        }
        assert!(navigator.take_submission_ticket());

        navigator.retreat();
        assert_eq!(navigator.step(), WizardStep::BudgetTimeline);
        assert_eq!(navigator.advance(&store.get(), TODAY), Ok(WizardStep::Success));
        assert!(navigator.take_submission_ticket());
    }

    #[test]
    fn end_date_today_passes_the_budget_gate() {
        let mut store = DraftStore::new();
        complete_draft(&mut store);
        store.merge(DraftPatch::budget_timeline("2.5".into(), TODAY.into()));

        let mut navigator = Navigator::new();
        for _ in 0..3 {
            navigator.advance(&store.get(), TODAY).unwrap();
        }
        assert_eq!(navigator.advance(&store.get(), TODAY), Ok(WizardStep::Success));
    }
}
