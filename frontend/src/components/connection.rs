//! Wallet connection screen. The actual provider handshake lives in the
//! external wallet widget; the wizard only needs the resulting connection
//! status and display address, so this screen stands in for the provider
//! and reports a connected address upward.

use uuid::Uuid;
use yew::prelude::*;

pub enum Msg {
    Connect,
    Back,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_connected: Callback<String>,
    pub on_back: Callback<()>,
}

pub struct ConnectionScreen;

impl Component for ConnectionScreen {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        ConnectionScreen
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Connect => {
                let address = format!("0x{}", Uuid::new_v4().simple());
                ctx.props().on_connected.emit(address);
                false
            }
            Msg::Back => {
                ctx.props().on_back.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="screen">
                <div class="screen-header">
                    <h1>{"Connect your wallet"}</h1>
                    <p>{"Campaign pools are funded and paid out on-chain, so \
                         creating a campaign needs a connected wallet."}</p>
                </div>

                <div class="card connect-card">
                    <span class="toggle-glyph">{"\u{1F45B}"}</span>
                    <button
                        class="btn btn-primary"
                        onclick={link.callback(|_| Msg::Connect)}
                    >
                        {"Connect Wallet"}
                    </button>
                </div>

                <button class="link-btn" onclick={link.callback(|_| Msg::Back)}>
                    {"\u{2190} Back"}
                </button>
            </div>
        }
    }
}
