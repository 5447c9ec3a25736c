//! First wizard step: campaign and brand name.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::messages::WizardMsg;
use crate::wizard::store::{DraftPatch, SharedDraftStore};

pub enum Msg {
    SetCampaignName(String),
    SetBrandName(String),
    Continue,
    ExitToDashboard,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub store: SharedDraftStore,
    pub events: Callback<WizardMsg>,
}

/// Local working copy of the basics slice, seeded from the store snapshot
/// so revisiting the step shows what was merged before.
pub struct BasicsScreen {
    campaign_name: String,
    brand_name: String,
}

impl BasicsScreen {
    fn is_valid(&self) -> bool {
        !self.campaign_name.trim().is_empty() && !self.brand_name.trim().is_empty()
    }
}

impl Component for BasicsScreen {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let snapshot = ctx.props().store.snapshot();
        Self {
            campaign_name: snapshot.campaign_name,
            brand_name: snapshot.brand_name,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetCampaignName(value) => {
                self.campaign_name = value;
                true
            }
            Msg::SetBrandName(value) => {
                self.brand_name = value;
                true
            }
            Msg::Continue => {
                ctx.props().events.emit(WizardMsg::Continue(DraftPatch::basics(
                    self.campaign_name.clone(),
                    self.brand_name.clone(),
                )));
                false
            }
            Msg::ExitToDashboard => {
                ctx.props().events.emit(WizardMsg::ExitToDashboard);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="screen">
                <div class="screen-topbar">
                    <button class="link-btn" onclick={link.callback(|_| Msg::ExitToDashboard)}>
                        {"\u{2190} Back to dashboard"}
                    </button>
                </div>

                <div class="screen-header">
                    <h1>{"Campaign Basics"}</h1>
                    <p>{"Name your campaign and the brand behind it"}</p>
                </div>

                <div class="card form-card">
                    <label for="campaign-name">{"Campaign Name *"}</label>
                    <input
                        id="campaign-name"
                        type="text"
                        value={self.campaign_name.clone()}
                        placeholder="Nike Summer Collection"
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::SetCampaignName(input.value())
                        })}
                    />

                    <label for="brand-name">{"Brand Name *"}</label>
                    <input
                        id="brand-name"
                        type="text"
                        value={self.brand_name.clone()}
                        placeholder="Nike"
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::SetBrandName(input.value())
                        })}
                    />
                </div>

                <button
                    class="btn btn-primary btn-block"
                    disabled={!self.is_valid()}
                    onclick={link.callback(|_| Msg::Continue)}
                >
                    {"Continue \u{2192}"}
                </button>
            </div>
        }
    }
}
