//! Dashboard: the entry point into the campaign creation wizard.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Shortened wallet address for the greeting, if connected.
    pub address: Option<String>,
    pub on_create: Callback<()>,
}

pub struct DashboardScreen;

impl Component for DashboardScreen {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        DashboardScreen
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_create = ctx.props().on_create.clone();
        let greeting = match &ctx.props().address {
            Some(address) => format!("Welcome back, {}", address),
            None => "Welcome back".to_string(),
        };

        html! {
            <div class="screen">
                <div class="screen-header">
                    <h1>{"Dashboard"}</h1>
                    <p>{ greeting }</p>
                </div>

                <div class="card cta-card">
                    <h2>{"Start a new campaign"}</h2>
                    <p>{"Define your content, KPIs and budget, then share one \
                         link with brands."}</p>
                    <button
                        class="btn btn-primary"
                        onclick={Callback::from(move |_| on_create.emit(()))}
                    >
                        {"+ New Campaign"}
                    </button>
                </div>
            </div>
        }
    }
}
