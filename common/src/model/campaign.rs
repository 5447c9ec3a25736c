use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The single in-progress campaign record threaded through the creation
/// wizard.
///
/// One slice of this struct belongs to each wizard step:
///
/// - **Basics**: `campaign_name`, `brand_name`
/// - **Content Requirements**: `selected_content_types`, `selected_platforms`
/// - **Success Metrics**: `selected_primary_kpis`, `selected_secondary_kpis`
///   and the per-KPI target maps
/// - **Budget & Timeline**: `total_budget`, `end_date`
///
/// `Default` is the zero-value draft: every string empty, every collection
/// empty. Screens only ever write their own slice (through a merge on the
/// draft store), so a field group untouched by one step survives all of the
/// other steps unchanged.
///
/// Serialization uses the camelCase key names the campaigns API expects.
/// The KPI selection lists carry explicit renames because the wire keys
/// spell the acronym in caps (`selectedPrimaryKPIs`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDraft {
    pub campaign_name: String,
    pub brand_name: String,

    /// Selected content-type ids (`"video"`, `"photo"`, ...). Duplicate-free,
    /// insertion-ordered; the selection order is what the summary displays.
    pub selected_content_types: Vec<String>,
    /// Selected platform ids (`"instagram"`, `"x"`). Duplicate-free.
    pub selected_platforms: Vec<String>,

    #[serde(rename = "selectedPrimaryKPIs")]
    pub selected_primary_kpis: Vec<String>,
    #[serde(rename = "selectedSecondaryKPIs")]
    pub selected_secondary_kpis: Vec<String>,

    /// Numeric-string target per selected primary KPI id. A key present here
    /// is also present in `selected_primary_kpis`; the draft store prunes
    /// stale entries when a KPI is deselected.
    pub primary_targets: BTreeMap<String, String>,
    pub secondary_targets: BTreeMap<String, String>,

    /// Decimal string, at most 4 fraction digits (ETH amounts).
    pub total_budget: String,
    /// ISO calendar date, `YYYY-MM-DD`.
    pub end_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero_value() {
        let draft = CampaignDraft::default();
        assert!(draft.campaign_name.is_empty());
        assert!(draft.brand_name.is_empty());
        assert!(draft.selected_content_types.is_empty());
        assert!(draft.selected_platforms.is_empty());
        assert!(draft.selected_primary_kpis.is_empty());
        assert!(draft.selected_secondary_kpis.is_empty());
        assert!(draft.primary_targets.is_empty());
        assert!(draft.secondary_targets.is_empty());
        assert!(draft.total_budget.is_empty());
        assert!(draft.end_date.is_empty());
    }

    #[test]
    fn serializes_with_wire_key_names() {
        let mut draft = CampaignDraft {
            campaign_name: "Nike Summer".into(),
            brand_name: "Nike".into(),
            total_budget: "2.5".into(),
            end_date: "2026-09-30".into(),
            ..CampaignDraft::default()
        };
        draft.selected_primary_kpis.push("views".into());
        draft
            .primary_targets
            .insert("views".into(), "100000".into());

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["campaignName"], "Nike Summer");
        assert_eq!(json["selectedPrimaryKPIs"][0], "views");
        assert_eq!(json["primaryTargets"]["views"], "100000");
        assert_eq!(json["totalBudget"], "2.5");
        assert_eq!(json["endDate"], "2026-09-30");
    }

    #[test]
    fn round_trips_through_json() {
        let mut draft = CampaignDraft::default();
        draft.selected_platforms.push("instagram".into());
        draft.secondary_targets.insert("likes".into(), "500".into());
        draft.total_budget = "1.2345".into();

        let json = serde_json::to_string(&draft).unwrap();
        let back: CampaignDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(back, draft);
    }
}
