//! Landing screen shown before the wallet is connected.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub connected: bool,
    pub on_get_started: Callback<()>,
}

pub struct WelcomeScreen;

impl Component for WelcomeScreen {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        WelcomeScreen
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_get_started = ctx.props().on_get_started.clone();
        html! {
            <div class="screen welcome">
                <div class="screen-header">
                    <h1>{"Create campaigns, get funded on-chain"}</h1>
                    <p>{"InfluNest connects influencers and brands through \
                         transparent, on-chain campaign pools."}</p>
                </div>

                <div class="card feature-list">
                    <div class="feature">
                        <span class="toggle-glyph">{"\u{26A1}"}</span>
                        <p>{"Set up a campaign with KPIs and budget in minutes"}</p>
                    </div>
                    <div class="feature">
                        <span class="toggle-glyph">{"\u{1F45B}"}</span>
                        <p>{"Brands fund the pool, payouts follow your targets"}</p>
                    </div>
                    <div class="feature">
                        <span class="toggle-glyph">{"\u{2713}"}</span>
                        <p>{"Share one link to start receiving applications"}</p>
                    </div>
                </div>

                <button
                    class="btn btn-primary btn-block"
                    onclick={Callback::from(move |_| on_get_started.emit(()))}
                >
                    {
                        if ctx.props().connected {
                            "Go to Dashboard"
                        } else {
                            "Get Started"
                        }
                    }
                </button>
            </div>
        }
    }
}
