//! Bottom navigation bar, shown once a wallet is connected.

use yew::prelude::*;

/// The places the bar can take the user. A closed set: the bar cannot ask
/// for a screen the app does not handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Dashboard,
    NewCampaign,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub wizard_active: bool,
    pub on_select: Callback<NavTarget>,
}

pub struct BottomNavigation;

impl Component for BottomNavigation {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        BottomNavigation
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let dashboard = props.on_select.clone();
        let create = props.on_select.clone();

        html! {
            <nav class="bottom-nav">
                <button
                    class={classes!("nav-btn", (!props.wizard_active).then_some("active"))}
                    onclick={Callback::from(move |_| dashboard.emit(NavTarget::Dashboard))}
                >
                    {"Dashboard"}
                </button>
                <button
                    class={classes!("nav-btn", props.wizard_active.then_some("active"))}
                    onclick={Callback::from(move |_| create.emit(NavTarget::NewCampaign))}
                >
                    {"+ New Campaign"}
                </button>
            </nav>
        }
    }
}
