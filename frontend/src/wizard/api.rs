//! Submission gateway: hands a finished draft to the campaigns API.
//!
//! Fire-and-forget from the navigator's point of view: the success screen
//! mounts immediately and the outcome arrives later through the callback.
//! Every failure mode (transport fault, non-2xx status, undecodable body)
//! is folded into a failed [`CampaignSaveResult`]; the draft itself is
//! never touched, so a retry re-sends the same data and the same
//! idempotency key.

use gloo_console::{error, log};
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

use common::model::submit::{CampaignSaveResult, SubmitCampaignRequest};

const CAMPAIGNS_ENDPOINT: &str = "/api/campaigns";

/// POSTs `request` to the campaigns API and reports the outcome through
/// `done`. Never blocks and never panics.
pub fn submit_campaign(request: SubmitCampaignRequest, done: Callback<CampaignSaveResult>) {
    spawn_local(async move {
        let submission_id = request.submission_id.clone();
        let result = send(&request).await;
        if result.success {
            log!("campaign submission saved", submission_id, result.campaign_id.clone());
        } else {
            error!(
                "campaign submission failed",
                submission_id,
                result.error.clone().unwrap_or_default()
            );
        }
        done.emit(result);
    });
}

async fn send(request: &SubmitCampaignRequest) -> CampaignSaveResult {
    let http_request = match Request::post(CAMPAIGNS_ENDPOINT).json(request) {
        Ok(http_request) => http_request,
        Err(err) => return CampaignSaveResult::failure(err.to_string()),
    };

    match http_request.send().await {
        Ok(response) if response.ok() => match response.json::<CampaignSaveResult>().await {
            Ok(result) => result,
            Err(err) => CampaignSaveResult::failure(err.to_string()),
        },
        Ok(response) => {
            // The API may still answer a structured result on error statuses.
            let body = response.text().await.unwrap_or_default();
            serde_json::from_str::<CampaignSaveResult>(&body).unwrap_or_else(|_| {
                CampaignSaveResult::failure(format!("HTTP {}: {}", response.status(), body))
            })
        }
        Err(err) => CampaignSaveResult::failure(err.to_string()),
    }
}
