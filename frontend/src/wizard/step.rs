//! The closed set of wizard steps and their fixed ordering.
//!
//! The step identifier used to be a loosely-typed tab string compared by
//! equality at every call site; here the order lives in one table and the
//! string ids survive only for logging and element ids.

use std::fmt;

/// One page of the campaign creation wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Basics,
    ContentRequirements,
    SuccessMetrics,
    BudgetTimeline,
    Success,
}

/// Fixed step order. `next`/`back` walk this table; there is no other
/// transition source.
const ORDER: [WizardStep; 5] = [
    WizardStep::Basics,
    WizardStep::ContentRequirements,
    WizardStep::SuccessMetrics,
    WizardStep::BudgetTimeline,
    WizardStep::Success,
];

impl WizardStep {
    /// Zero-based position in the wizard, used for the progress dots.
    pub fn index(self) -> usize {
        ORDER.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Number of data-entry steps (everything before the success screen).
    pub fn data_step_count() -> usize {
        ORDER.len() - 1
    }

    /// The following step, or `None` on the terminal success step.
    pub fn next(self) -> Option<WizardStep> {
        ORDER.get(self.index() + 1).copied()
    }

    /// The preceding step, or `None` on the first step.
    pub fn back(self) -> Option<WizardStep> {
        self.index().checked_sub(1).map(|i| ORDER[i])
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WizardStep::Basics => "campaign-basics",
            WizardStep::ContentRequirements => "content-requirements",
            WizardStep::SuccessMetrics => "success-metrics",
            WizardStep::BudgetTimeline => "budget-timeline",
            WizardStep::Success => "campaign-success",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_walk_the_fixed_order() {
        let mut step = WizardStep::Basics;
        let mut visited = vec![step];
        while let Some(next) = step.next() {
            step = next;
            visited.push(step);
        }
        assert_eq!(visited, ORDER.to_vec());
    }

    #[test]
    fn back_is_the_inverse_of_next() {
        for window in ORDER.windows(2) {
            assert_eq!(window[0].next(), Some(window[1]));
            assert_eq!(window[1].back(), Some(window[0]));
        }
        assert_eq!(WizardStep::Basics.back(), None);
        assert_eq!(WizardStep::Success.next(), None);
    }

    #[test]
    fn string_ids_are_unique() {
        for (i, a) in ORDER.iter().enumerate() {
            for b in &ORDER[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }
}
