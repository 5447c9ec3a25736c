//! Terminal wizard screen: the campaign summary, the shareable link, and
//! the submission status with its retry affordance.
//!
//! The submission itself was already fired when the budget step completed;
//! this screen only reflects where it stands. The draft snapshot it renders
//! is the exact data that was (or will be re-) sent, so a failed submission
//! loses nothing.

use wasm_bindgen_futures::{spawn_local, JsFuture};
use yew::prelude::*;

use common::model::campaign::CampaignDraft;

use crate::app::messages::WizardMsg;
use crate::app::state::SubmissionStatus;
use crate::wizard::catalog::kpi_name;
use crate::wizard::format::{format_budget_display, format_compact};

pub enum Msg {
    ToggleSummary,
    CopyLink,
    SetCopied(bool),
    Retry,
    BackToDashboard,
    CreateAnother,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub snapshot: CampaignDraft,
    pub submission: SubmissionStatus,
    pub events: Callback<WizardMsg>,
}

pub struct CampaignSuccessScreen {
    summary_expanded: bool,
    copied: bool,
}

impl CampaignSuccessScreen {
    fn share_link(submission: &SubmissionStatus) -> String {
        match submission {
            SubmissionStatus::Saved { campaign_id } => {
                format!("base.influnest.pay/{}", campaign_id)
            }
            _ => "base.influnest.pay/pending".to_string(),
        }
    }
}

impl Component for CampaignSuccessScreen {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            summary_expanded: false,
            copied: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleSummary => {
                self.summary_expanded = !self.summary_expanded;
                true
            }
            Msg::CopyLink => {
                if let Some(window) = web_sys::window() {
                    let clipboard = window.navigator().clipboard();
                    let text = Self::share_link(&ctx.props().submission);
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        if JsFuture::from(clipboard.write_text(&text)).await.is_ok() {
                            link.send_message(Msg::SetCopied(true));
                            gloo_timers::future::TimeoutFuture::new(2000).await;
                            link.send_message(Msg::SetCopied(false));
                        }
                    });
                }
                false
            }
            Msg::SetCopied(copied) => {
                self.copied = copied;
                true
            }
            Msg::Retry => {
                ctx.props().events.emit(WizardMsg::Retry);
                false
            }
            Msg::BackToDashboard => {
                ctx.props().events.emit(WizardMsg::ExitToDashboard);
                false
            }
            Msg::CreateAnother => {
                ctx.props().events.emit(WizardMsg::Restart);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let draft = &ctx.props().snapshot;

        html! {
            <div class="screen">
                <div class="screen-header success-header">
                    <div class="success-badge">{"\u{2713}"}</div>
                    <h1>{"Campaign Created!"}</h1>
                    <p>{"Your campaign is ready to be shared with brands"}</p>
                </div>

                { self.build_summary(ctx, draft) }
                { self.build_link_card(ctx) }
                { build_status_card(ctx) }

                <div class="card info-card">
                    <h3>{"\u{26A1} Next Steps"}</h3>
                    <p>
                        {"The campaign will only be finalized when a brand completes \
                          their registration and makes the payment to the campaign \
                          pool. You'll be notified once the campaign is fully funded \
                          and ready to start."}
                    </p>
                </div>

                <button
                    class="btn btn-primary btn-block"
                    onclick={link.callback(|_| Msg::BackToDashboard)}
                >
                    {"Back to Dashboard"}
                </button>
                <button
                    class="btn btn-outline btn-block"
                    onclick={link.callback(|_| Msg::CreateAnother)}
                >
                    {"+ Create Another Campaign"}
                </button>
            </div>
        }
    }
}

impl CampaignSuccessScreen {
    fn build_summary(&self, ctx: &Context<Self>, draft: &CampaignDraft) -> Html {
        let link = ctx.link();
        let body = self.summary_expanded.then(|| {
            let primary_rows = draft.selected_primary_kpis.iter().map(|kpi| {
                let target = draft.primary_targets.get(kpi).map(String::as_str).unwrap_or("0");
                html! {
                    <div class="summary-row small">
                        <span>{ kpi_name(kpi) }</span>
                        <span>{ format_compact(target) }</span>
                    </div>
                }
            });
            let secondary = (!draft.selected_secondary_kpis.is_empty()).then(|| {
                let rows = draft.selected_secondary_kpis.iter().map(|kpi| {
                    let target = draft.secondary_targets.get(kpi).map(String::as_str).unwrap_or("0");
                    html! {
                        <div class="summary-row small">
                            <span>{ kpi_name(kpi) }</span>
                            <span>{ format_compact(target) }</span>
                        </div>
                    }
                });
                html! {
                    <>
                        <p class="summary-section">{"Secondary KPIs"}</p>
                        { for rows }
                    </>
                }
            });
            html! {
                <div class="summary-body">
                    <div class="summary-row">
                        <span>{"Campaign Name"}</span>
                        <span>{ draft.campaign_name.clone() }</span>
                    </div>
                    <div class="summary-row">
                        <span>{"Brand"}</span>
                        <span>{ draft.brand_name.clone() }</span>
                    </div>
                    <div class="summary-row">
                        <span>{"Budget"}</span>
                        <span>{ format!("\u{039E} {}", format_budget_display(&draft.total_budget)) }</span>
                    </div>
                    <div class="summary-row">
                        <span>{"End Date"}</span>
                        <span>{ draft.end_date.clone() }</span>
                    </div>
                    <div class="summary-row">
                        <span>{"Content Types"}</span>
                        <span>{ draft.selected_content_types.join(", ") }</span>
                    </div>
                    <div class="summary-row">
                        <span>{"Platforms"}</span>
                        <span>{ draft.selected_platforms.join(", ") }</span>
                    </div>
                    <p class="summary-section">{"Primary KPIs"}</p>
                    { for primary_rows }
                    { secondary.unwrap_or_default() }
                </div>
            }
        });

        html! {
            <div class="card">
                <div class="summary-toggle" onclick={link.callback(|_| Msg::ToggleSummary)}>
                    <h2>{"Campaign Summary"}</h2>
                    <span class={classes!("chevron", self.summary_expanded.then_some("open"))}>
                        {"\u{2192}"}
                    </span>
                </div>
                { body.unwrap_or_default() }
            </div>
        }
    }

    fn build_link_card(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let share_link = Self::share_link(&ctx.props().submission);
        html! {
            <div class="card">
                <h2>{"Campaign Link"}</h2>
                <p class="field-hint">
                    {"Share this link with brands to start receiving applications"}
                </p>
                <div class="share-row">
                    <code class="share-link">{ share_link }</code>
                    <button
                        class={classes!("btn", "btn-small", self.copied.then_some("copied"))}
                        onclick={link.callback(|_| Msg::CopyLink)}
                    >
                        { if self.copied { "\u{2713} Copied!" } else { "Copy" } }
                    </button>
                </div>
            </div>
        }
    }
}

fn build_status_card(ctx: &Context<CampaignSuccessScreen>) -> Html {
    let link = ctx.link();
    let (dot_class, label, detail) = match &ctx.props().submission {
        SubmissionStatus::Idle | SubmissionStatus::Pending => (
            "dot-pending",
            "Pending",
            "Saving your campaign\u{2026}".to_string(),
        ),
        SubmissionStatus::Saved { campaign_id } => (
            "dot-saved",
            "Saved",
            format!("Campaign {} is waiting for brand registration", campaign_id),
        ),
        SubmissionStatus::Failed { error } => ("dot-failed", "Failed", error.clone()),
    };

    html! {
        <div class="card status-card">
            <div class="status-text">
                <h3>{"Campaign Status"}</h3>
                <p>{ detail }</p>
            </div>
            <div class="status-indicator">
                <span class={classes!("status-dot", dot_class)}></span>
                <span>{ label }</span>
                {
                    if matches!(ctx.props().submission, SubmissionStatus::Failed { .. }) {
                        html! {
                            <button
                                class="btn btn-small"
                                onclick={link.callback(|_| Msg::Retry)}
                            >
                                {"Retry"}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
