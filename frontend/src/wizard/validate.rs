//! Per-step field validation for the campaign draft.
//!
//! Every function here is pure and total: no panics for any input, absent
//! keys simply fail the non-empty checks. The navigator consults `validate`
//! before allowing a forward transition; screens use the same predicates to
//! gate their Continue buttons, so the two can never disagree.
//!
//! `today` is injected as an ISO `YYYY-MM-DD` string rather than read from
//! the clock, which keeps the date rules natively testable. The app shell
//! supplies it from `js_sys::Date`.

use std::fmt;

use common::model::campaign::CampaignDraft;
use regex::Regex;

use super::step::WizardStep;

/// Why a step refused to validate. User-correctable, never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingCampaignName,
    MissingBrandName,
    NoContentTypes,
    NoPlatforms,
    NoPrimaryKpis,
    /// A selected primary KPI has no target value. Carries the KPI id.
    MissingKpiTarget(String),
    InvalidBudget,
    InvalidEndDate,
    EndDateInPast,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingCampaignName => write!(f, "Enter a campaign name"),
            ValidationError::MissingBrandName => write!(f, "Enter a brand name"),
            ValidationError::NoContentTypes => write!(f, "Select at least one content type"),
            ValidationError::NoPlatforms => write!(f, "Select at least one platform"),
            ValidationError::NoPrimaryKpis => write!(f, "Select at least one primary KPI"),
            ValidationError::MissingKpiTarget(kpi) => {
                write!(f, "Set a target for the {} KPI", kpi)
            }
            ValidationError::InvalidBudget => write!(f, "Enter a budget greater than zero"),
            ValidationError::InvalidEndDate => write!(f, "Enter a valid end date"),
            ValidationError::EndDateInPast => {
                write!(f, "The end date cannot be earlier than today")
            }
        }
    }
}

/// Validates the draft slice belonging to `step`. The terminal success step
/// has no fields and always passes.
pub fn validate(
    step: WizardStep,
    draft: &CampaignDraft,
    today: &str,
) -> Result<(), ValidationError> {
    match step {
        WizardStep::Basics => basics(draft),
        WizardStep::ContentRequirements => content_requirements(draft),
        WizardStep::SuccessMetrics => success_metrics(draft),
        WizardStep::BudgetTimeline => budget_timeline(draft, today),
        WizardStep::Success => Ok(()),
    }
}

pub fn basics(draft: &CampaignDraft) -> Result<(), ValidationError> {
    if draft.campaign_name.trim().is_empty() {
        return Err(ValidationError::MissingCampaignName);
    }
    if draft.brand_name.trim().is_empty() {
        return Err(ValidationError::MissingBrandName);
    }
    Ok(())
}

pub fn content_requirements(draft: &CampaignDraft) -> Result<(), ValidationError> {
    if draft.selected_content_types.is_empty() {
        return Err(ValidationError::NoContentTypes);
    }
    if draft.selected_platforms.is_empty() {
        return Err(ValidationError::NoPlatforms);
    }
    Ok(())
}

/// Primary KPIs must be selected and every selected one needs a non-empty
/// target. Secondary KPIs and targets impose no constraint.
pub fn success_metrics(draft: &CampaignDraft) -> Result<(), ValidationError> {
    if draft.selected_primary_kpis.is_empty() {
        return Err(ValidationError::NoPrimaryKpis);
    }
    for kpi in &draft.selected_primary_kpis {
        let filled = draft
            .primary_targets
            .get(kpi)
            .is_some_and(|target| !target.trim().is_empty());
        if !filled {
            return Err(ValidationError::MissingKpiTarget(kpi.clone()));
        }
    }
    Ok(())
}

pub fn budget_timeline(draft: &CampaignDraft, today: &str) -> Result<(), ValidationError> {
    let budget = draft.total_budget.trim();
    let amount: f64 = budget.parse().unwrap_or(0.0);
    if !(amount.is_finite() && amount > 0.0) {
        return Err(ValidationError::InvalidBudget);
    }

    let end_date = draft.end_date.trim();
    if !is_calendar_date(end_date) {
        return Err(ValidationError::InvalidEndDate);
    }
    // Lexicographic order equals chronological order on well-formed ISO dates.
    if end_date < today {
        return Err(ValidationError::EndDateInPast);
    }
    Ok(())
}

/// Checks that `value` is a real `YYYY-MM-DD` calendar date, leap years
/// included.
pub fn is_calendar_date(value: &str) -> bool {
    let shape = Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap();
    let Some(caps) = shape.captures(value) else {
        return false;
    };
    let year: u32 = caps[1].parse().unwrap_or(0);
    let month: u32 = caps[2].parse().unwrap_or(0);
    let day: u32 = caps[3].parse().unwrap_or(0);

    (1..=12).contains(&month) && day >= 1 && day <= days_in_month(year, month)
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    const TODAY: &str = "2026-08-26";

    fn valid_draft() -> CampaignDraft {
        let mut draft = CampaignDraft {
            campaign_name: "Nike Summer".into(),
            brand_name: "Nike".into(),
            total_budget: "2.5".into(),
            end_date: "2026-09-01".into(),
            ..CampaignDraft::default()
        };
        draft.selected_content_types.push("video".into());
        draft.selected_platforms.push("instagram".into());
        draft.selected_primary_kpis.push("views".into());
        draft
            .primary_targets
            .insert("views".into(), "100000".into());
        draft
    }

    #[test]
    fn zero_value_draft_fails_every_data_step() {
        let draft = CampaignDraft::default();
        assert!(basics(&draft).is_err());
        assert!(content_requirements(&draft).is_err());
        assert!(success_metrics(&draft).is_err());
        assert!(budget_timeline(&draft, TODAY).is_err());
        assert_eq!(validate(WizardStep::Success, &draft, TODAY), Ok(()));
    }

    #[test]
    fn basics_requires_both_names_after_trimming() {
        let mut draft = valid_draft();
        draft.campaign_name = "   ".into();
        assert_eq!(basics(&draft), Err(ValidationError::MissingCampaignName));

        draft.campaign_name = "Nike Summer".into();
        draft.brand_name = String::new();
        assert_eq!(basics(&draft), Err(ValidationError::MissingBrandName));
    }

    #[test]
    fn basics_is_idempotent_on_an_unmodified_draft() {
        let draft = valid_draft();
        assert_eq!(basics(&draft), basics(&draft));
        let empty = CampaignDraft::default();
        assert_eq!(basics(&empty), basics(&empty));
    }

    #[test]
    fn content_requirements_needs_both_selections() {
        let mut draft = valid_draft();
        draft.selected_platforms.clear();
        assert_eq!(
            content_requirements(&draft),
            Err(ValidationError::NoPlatforms)
        );
        draft.selected_content_types.clear();
        assert_eq!(
            content_requirements(&draft),
            Err(ValidationError::NoContentTypes)
        );
    }

    #[test]
    fn every_primary_kpi_needs_a_target() {
        let mut draft = valid_draft();
        draft.selected_primary_kpis.push("reach".into());
        assert_eq!(
            success_metrics(&draft),
            Err(ValidationError::MissingKpiTarget("reach".into()))
        );

        draft.primary_targets.insert("reach".into(), "  ".into());
        assert_eq!(
            success_metrics(&draft),
            Err(ValidationError::MissingKpiTarget("reach".into()))
        );

        draft.primary_targets.insert("reach".into(), "5000".into());
        assert_eq!(success_metrics(&draft), Ok(()));
    }

    #[test]
    fn secondary_kpis_impose_no_constraint() {
        let mut draft = valid_draft();
        draft.selected_secondary_kpis.push("likes".into());
        // No secondary target at all: still fine.
        assert_eq!(success_metrics(&draft), Ok(()));
    }

    #[test]
    fn budget_must_parse_positive() {
        let mut draft = valid_draft();
        for bad in ["", "0", "-1", "abc", "NaN", "inf"] {
            draft.total_budget = bad.into();
            assert_eq!(
                budget_timeline(&draft, TODAY),
                Err(ValidationError::InvalidBudget),
                "budget {:?} should fail",
                bad
            );
        }
        draft.total_budget = "0.0001".into();
        assert_eq!(budget_timeline(&draft, TODAY), Ok(()));
    }

    #[test]
    fn end_date_boundary_is_inclusive_of_today() {
        let mut draft = valid_draft();
        draft.end_date = TODAY.into();
        assert_eq!(budget_timeline(&draft, TODAY), Ok(()));

        draft.end_date = "2026-08-25".into();
        assert_eq!(
            budget_timeline(&draft, TODAY),
            Err(ValidationError::EndDateInPast)
        );
    }

    #[test]
    fn malformed_dates_are_rejected_without_panicking() {
        let mut draft = valid_draft();
        for bad in [
            "", "tomorrow", "2026-13-01", "2026-00-10", "2026-02-30", "26-08-26", "2026/08/26",
        ] {
            draft.end_date = bad.into();
            assert_eq!(
                budget_timeline(&draft, TODAY),
                Err(ValidationError::InvalidEndDate),
                "date {:?} should fail",
                bad
            );
        }
    }

    #[test]
    fn leap_day_is_a_valid_date() {
        assert!(is_calendar_date("2028-02-29"));
        assert!(!is_calendar_date("2027-02-29"));
        assert!(is_calendar_date("2000-02-29"));
        assert!(!is_calendar_date("2100-02-29"));
    }
}
