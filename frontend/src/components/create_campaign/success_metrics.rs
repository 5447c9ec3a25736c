//! Third wizard step: primary and secondary KPIs with per-KPI numeric
//! targets. Primary KPIs are required and each selected one needs a target;
//! the secondary section is optional.

use std::collections::BTreeMap;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::messages::WizardMsg;
use crate::wizard::catalog::{KpiMetric, PRIMARY_KPIS, SECONDARY_KPIS};
use crate::wizard::store::{DraftPatch, SharedDraftStore};

pub enum Msg {
    TogglePrimary(String),
    ToggleSecondary(String),
    SetPrimaryTarget(String, String),
    SetSecondaryTarget(String, String),
    Continue,
    Back,
    ExitToDashboard,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub store: SharedDraftStore,
    pub events: Callback<WizardMsg>,
}

pub struct SuccessMetricsScreen {
    selected_primary: Vec<String>,
    selected_secondary: Vec<String>,
    primary_targets: BTreeMap<String, String>,
    secondary_targets: BTreeMap<String, String>,
}

fn toggle(selection: &mut Vec<String>, id: String) {
    if let Some(pos) = selection.iter().position(|s| *s == id) {
        selection.remove(pos);
    } else {
        selection.push(id);
    }
}

impl SuccessMetricsScreen {
    fn is_valid(&self) -> bool {
        !self.selected_primary.is_empty()
            && self.selected_primary.iter().all(|kpi| {
                self.primary_targets
                    .get(kpi)
                    .is_some_and(|target| !target.trim().is_empty())
            })
    }
}

impl Component for SuccessMetricsScreen {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let snapshot = ctx.props().store.snapshot();
        let selected_primary = if snapshot.selected_primary_kpis.is_empty() {
            vec!["views".into()]
        } else {
            snapshot.selected_primary_kpis
        };
        let selected_secondary = if snapshot.selected_secondary_kpis.is_empty() {
            vec!["likes".into()]
        } else {
            snapshot.selected_secondary_kpis
        };
        let primary_targets = if snapshot.primary_targets.is_empty() {
            BTreeMap::from([("views".to_string(), "1".to_string())])
        } else {
            snapshot.primary_targets
        };
        let secondary_targets = if snapshot.secondary_targets.is_empty() {
            BTreeMap::from([("likes".to_string(), String::new())])
        } else {
            snapshot.secondary_targets
        };
        Self {
            selected_primary,
            selected_secondary,
            primary_targets,
            secondary_targets,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::TogglePrimary(id) => {
                toggle(&mut self.selected_primary, id);
                true
            }
            Msg::ToggleSecondary(id) => {
                toggle(&mut self.selected_secondary, id);
                true
            }
            Msg::SetPrimaryTarget(id, value) => {
                self.primary_targets.insert(id, value);
                true
            }
            Msg::SetSecondaryTarget(id, value) => {
                self.secondary_targets.insert(id, value);
                true
            }
            Msg::Continue => {
                // Stale targets of deselected KPIs may still sit in the
                // local maps; the store prunes them on merge.
                ctx.props()
                    .events
                    .emit(WizardMsg::Continue(DraftPatch::success_metrics(
                        self.selected_primary.clone(),
                        self.selected_secondary.clone(),
                        self.primary_targets.clone(),
                        self.secondary_targets.clone(),
                    )));
                false
            }
            Msg::Back => {
                ctx.props().events.emit(WizardMsg::Back);
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
                    <h1>{"Success Metrics (KPIs)"}</h1>
                </div>

                <div class="card form-card">
                    <h2>{"Primary KPIs *"}</h2>
                    { for PRIMARY_KPIS.iter().map(|kpi| self.kpi_row(ctx, kpi, true)) }
                </div>

                <div class="card form-card">
                    <h2>{"Secondary KPIs (Optional)"}</h2>
                    { for SECONDARY_KPIS.iter().map(|kpi| self.kpi_row(ctx, kpi, false)) }
                </div>

                <div class="button-row">
                    <button class="btn btn-outline" onclick={link.callback(|_| Msg::Back)}>
                        {"\u{2190} Back"}
                    </button>
                    <button
                        class="btn btn-primary"
                        disabled={!self.is_valid()}
                        onclick={link.callback(|_| Msg::Continue)}
                    >
                        {"Continue \u{2192}"}
                    </button>
                </div>
            </div>
        }
    }
}

impl SuccessMetricsScreen {
    /// One KPI card plus, when selected, its target input underneath.
    fn kpi_row(&self, ctx: &Context<Self>, kpi: &KpiMetric, primary: bool) -> Html {
        let link = ctx.link();
        let selection = if primary {
            &self.selected_primary
        } else {
            &self.selected_secondary
        };
        let targets = if primary {
            &self.primary_targets
        } else {
            &self.secondary_targets
        };
        let selected = selection.iter().any(|id| id == kpi.id);

        let card_style = if selected {
            format!(
                "border-color: {}; background: {}; color: {};",
                kpi.border, kpi.background, kpi.accent
            )
        } else {
            String::new()
        };

        let toggle_id = kpi.id.to_string();
        let ontoggle = if primary {
            link.callback(move |_| Msg::TogglePrimary(toggle_id.clone()))
        } else {
            link.callback(move |_| Msg::ToggleSecondary(toggle_id.clone()))
        };

        let target_input = selected.then(|| {
            let input_id = kpi.id.to_string();
            let oninput = if primary {
                link.callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SetPrimaryTarget(input_id.clone(), input.value())
                })
            } else {
                link.callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SetSecondaryTarget(input_id.clone(), input.value())
                })
            };
            html! {
                <input
                    type="number"
                    min="0"
                    value={targets.get(kpi.id).cloned().unwrap_or_default()}
                    placeholder={if primary { "100000" } else { "0" }}
                    {oninput}
                />
            }
        });

        html! {
            <div class="kpi-row">
                <div class="card toggle-card kpi" style={card_style} onclick={ontoggle}>
                    <span class="toggle-glyph">{ kpi.glyph.text() }</span>
                    <span class="toggle-name">{ kpi.name }</span>
                </div>
                { target_input.unwrap_or_default() }
            </div>
        }
    }
}
