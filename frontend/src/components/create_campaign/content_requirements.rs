//! Second wizard step: content types and target platforms, picked from the
//! static catalogs as toggle cards.

use yew::prelude::*;

use crate::app::messages::WizardMsg;
use crate::wizard::catalog::{CONTENT_TYPES, PLATFORMS};
use crate::wizard::store::{DraftPatch, SharedDraftStore};

pub enum Msg {
    ToggleContentType(String),
    TogglePlatform(String),
    Continue,
    Back,
    ExitToDashboard,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub store: SharedDraftStore,
    pub events: Callback<WizardMsg>,
}

pub struct ContentRequirementsScreen {
    selected_content_types: Vec<String>,
    selected_platforms: Vec<String>,
}

/// Adds `id` to the selection or removes it, preserving selection order.
fn toggle(selection: &mut Vec<String>, id: String) {
    if let Some(pos) = selection.iter().position(|s| *s == id) {
        selection.remove(pos);
    } else {
        selection.push(id);
    }
}

impl Component for ContentRequirementsScreen {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let snapshot = ctx.props().store.snapshot();
        // First visit starts from the usual defaults; a revisit shows the
        // merged selection.
        let selected_content_types = if snapshot.selected_content_types.is_empty() {
            vec!["video".into(), "stories".into()]
        } else {
            snapshot.selected_content_types
        };
        let selected_platforms = if snapshot.selected_platforms.is_empty() {
            vec!["instagram".into()]
        } else {
            snapshot.selected_platforms
        };
        Self {
            selected_content_types,
            selected_platforms,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleContentType(id) => {
                toggle(&mut self.selected_content_types, id);
                true
            }
            Msg::TogglePlatform(id) => {
                toggle(&mut self.selected_platforms, id);
                true
            }
            Msg::Continue => {
                ctx.props()
                    .events
                    .emit(WizardMsg::Continue(DraftPatch::content_requirements(
                        self.selected_content_types.clone(),
                        self.selected_platforms.clone(),
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
        let is_valid =
            !self.selected_content_types.is_empty() && !self.selected_platforms.is_empty();

        let content_cards = CONTENT_TYPES.iter().map(|content_type| {
            let selected = self
                .selected_content_types
                .iter()
                .any(|id| id == content_type.id);
            let id = content_type.id.to_string();
            html! {
                <div
                    class={classes!("card", "toggle-card", selected.then_some("selected"))}
                    onclick={link.callback(move |_| Msg::ToggleContentType(id.clone()))}
                >
                    <div class="toggle-glyph">{ content_type.glyph.text() }</div>
                    <p class="toggle-name">{ content_type.name }</p>
                    <p class="toggle-description">{ content_type.description }</p>
                </div>
            }
        });

        let platform_cards = PLATFORMS.iter().map(|platform| {
            let selected = self.selected_platforms.iter().any(|id| id == platform.id);
            let id = platform.id.to_string();
            html! {
                <div
                    class={classes!("card", "toggle-card", "platform", selected.then_some("selected"))}
                    onclick={link.callback(move |_| Msg::TogglePlatform(id.clone()))}
                >
                    <div class="toggle-glyph">{ platform.glyph.text() }</div>
                    <p class="toggle-name">{ platform.name }</p>
                </div>
            }
        });

        html! {
            <div class="screen">
                <div class="screen-topbar">
                    <button class="link-btn" onclick={link.callback(|_| Msg::ExitToDashboard)}>
                        {"\u{2190} Back to dashboard"}
                    </button>
                </div>

                <div class="screen-header">
                    <h1>{"Content Requirements"}</h1>
                    <p>{"Define content types, platforms, and specifications"}</p>
                </div>

                <h2>{"Content Types"}</h2>
                <div class="grid-2">{ for content_cards }</div>

                <h2>{"Target Platforms"}</h2>
                <div class="grid-2">{ for platform_cards }</div>

                <div class="button-row">
                    <button class="btn btn-outline" onclick={link.callback(|_| Msg::Back)}>
                        {"\u{2190} Back"}
                    </button>
                    <button
                        class="btn btn-primary"
                        disabled={!is_valid}
                        onclick={link.callback(|_| Msg::Continue)}
                    >
                        {"Continue \u{2192}"}
                    </button>
                </div>
            </div>
        }
    }
}
