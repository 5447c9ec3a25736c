use serde::{Deserialize, Serialize};

use crate::model::campaign::CampaignDraft;

/// Payload sent to the campaigns API when a finished draft is submitted.
///
/// `submission_id` is generated once per wizard session and re-sent verbatim
/// on retries, so the backing service can deduplicate a double submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitCampaignRequest {
    pub submission_id: String,
    pub campaign: CampaignDraft,
}

/// Outcome of a submission attempt as reported by the campaigns API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSaveResult {
    pub success: bool,
    #[serde(default)]
    pub campaign_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CampaignSaveResult {
    /// A failed result carrying only an error message. Used by the frontend
    /// gateway to fold transport faults into the same shape the API returns.
    pub fn failure(error: impl Into<String>) -> Self {
        CampaignSaveResult {
            success: false,
            campaign_id: String::new(),
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_result_deserializes_without_optional_fields() {
        let result: CampaignSaveResult =
            serde_json::from_str(r#"{"success":true,"campaignId":"82391"}"#).unwrap();
        assert!(result.success);
        assert_eq!(result.campaign_id, "82391");
        assert_eq!(result.error, None);
    }

    #[test]
    fn failure_carries_the_message() {
        let result = CampaignSaveResult::failure("pool unreachable");
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("pool unreachable"));
    }
}
