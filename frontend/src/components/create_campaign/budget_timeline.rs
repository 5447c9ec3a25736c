//! Fourth wizard step: total budget (ETH, up to 4 decimals) and campaign
//! end date. The Create button completes the wizard; the navigator fires
//! the submission when the step validates.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::helpers::today_iso;
use crate::app::messages::WizardMsg;
use crate::wizard::format::{format_budget_display, sanitize_budget};
use crate::wizard::store::{DraftPatch, SharedDraftStore};
use crate::wizard::validate::is_calendar_date;

pub enum Msg {
    SetBudget(String),
    SetEndDate(String),
    Create,
    Back,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub store: SharedDraftStore,
    pub events: Callback<WizardMsg>,
}

pub struct BudgetTimelineScreen {
    total_budget: String,
    end_date: String,
}

impl BudgetTimelineScreen {
    fn date_in_past(&self, today: &str) -> bool {
        is_calendar_date(&self.end_date) && self.end_date.as_str() < today
    }

    fn is_valid(&self, today: &str) -> bool {
        let amount: f64 = self.total_budget.trim().parse().unwrap_or(0.0);
        amount.is_finite()
            && amount > 0.0
            && is_calendar_date(&self.end_date)
            && self.end_date.as_str() >= today
    }
}

impl Component for BudgetTimelineScreen {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let snapshot = ctx.props().store.snapshot();
        Self {
            total_budget: if snapshot.total_budget.is_empty() {
                "0".into()
            } else {
                snapshot.total_budget
            },
            end_date: snapshot.end_date,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetBudget(raw) => {
                self.total_budget = sanitize_budget(&raw);
                true
            }
            Msg::SetEndDate(value) => {
                self.end_date = value;
                true
            }
            Msg::Create => {
                ctx.props()
                    .events
                    .emit(WizardMsg::Continue(DraftPatch::budget_timeline(
                        self.total_budget.clone(),
                        self.end_date.clone(),
                    )));
                false
            }
            Msg::Back => {
                ctx.props().events.emit(WizardMsg::Back);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let today = today_iso();
        let date_in_past = self.date_in_past(&today);

        html! {
            <div class="screen">
                <div class="screen-header">
                    <h1>{"Budget & Timeline"}</h1>
                    <p>{"Set your campaign budget and timeline"}</p>
                </div>

                <div class="card form-card">
                    <label for="total-budget">{"Total Budget (ETH) *"}</label>
                    <div class="input-prefix">
                        <span class="prefix">{"\u{039E}"}</span>
                        <input
                            id="total-budget"
                            type="text"
                            value={format_budget_display(&self.total_budget)}
                            placeholder="0.0"
                            oninput={link.callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                Msg::SetBudget(input.value())
                            })}
                        />
                    </div>
                    <p class="field-hint">{"Up to 4 decimal places (e.g. 1.2345 ETH)"}</p>

                    <label for="end-date">{"End Date *"}</label>
                    <input
                        id="end-date"
                        type="date"
                        class={classes!(date_in_past.then_some("invalid"))}
                        value={self.end_date.clone()}
                        min={today.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::SetEndDate(input.value())
                        })}
                    />
                    {
                        if date_in_past {
                            html! {
                                <p class="field-error">
                                    {"The end date cannot be earlier than today"}
                                </p>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class="button-row">
                    <button class="btn btn-outline" onclick={link.callback(|_| Msg::Back)}>
                        {"\u{2190} Back"}
                    </button>
                    <button
                        class="btn btn-primary"
                        disabled={!self.is_valid(&today)}
                        onclick={link.callback(|_| Msg::Create)}
                    >
                        {"Create"}
                    </button>
                </div>
            </div>
        }
    }
}
