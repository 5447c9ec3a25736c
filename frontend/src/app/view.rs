//! View rendering for the root component: the header with the wallet chip,
//! the active screen, and the bottom navigation.
//!
//! Which wizard screen is mounted follows the navigator's current step; the
//! screens themselves never pick their successor.

use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{App, Screen};
use crate::components::connection::ConnectionScreen;
use crate::components::create_campaign::basics::BasicsScreen;
use crate::components::create_campaign::budget_timeline::BudgetTimelineScreen;
use crate::components::create_campaign::content_requirements::ContentRequirementsScreen;
use crate::components::create_campaign::success::CampaignSuccessScreen;
use crate::components::create_campaign::success_metrics::SuccessMetricsScreen;
use crate::components::dashboard::DashboardScreen;
use crate::components::navigation::{BottomNavigation, NavTarget};
use crate::components::welcome::WelcomeScreen;
use crate::wizard::step::WizardStep;

pub fn view(app: &App, ctx: &Context<App>) -> Html {
    let link = ctx.link();
    html! {
        <div class="app-shell">
            { build_header(app, link) }
            <main class="app-main">{ build_main(app, link) }</main>
            { build_bottom_nav(app, link) }
        </div>
    }
}

fn build_header(app: &App, link: &Scope<App>) -> Html {
    let wallet_chip = if app.wallet.connected {
        html! {
            <div class="wallet-chip">
                <span class="wallet-address">
                    { app.wallet.short_address().unwrap_or_default() }
                </span>
                <button
                    class="link-btn"
                    onclick={link.callback(|_| Msg::WalletDisconnected)}
                >
                    {"Disconnect"}
                </button>
            </div>
        }
    } else {
        html! {
            <button
                class="btn btn-small"
                onclick={link.callback(|_| Msg::Navigate(Screen::Connection))}
            >
                {"Connect"}
            </button>
        }
    };

    html! {
        <header class="app-header">
            <h1 class="app-title">{"InfluNest"}</h1>
            { wallet_chip }
        </header>
    }
}

fn build_main(app: &App, link: &Scope<App>) -> Html {
    match app.screen {
        Screen::Home => {
            let connected = app.wallet.connected;
            html! {
                <WelcomeScreen
                    {connected}
                    on_get_started={link.callback(move |_| {
                        if connected {
                            Msg::Navigate(Screen::Dashboard)
                        } else {
                            Msg::Navigate(Screen::Connection)
                        }
                    })}
                />
            }
        }
        Screen::Connection => html! {
            <ConnectionScreen
                on_connected={link.callback(Msg::WalletConnected)}
                on_back={link.callback(|_| Msg::Navigate(Screen::Home))}
            />
        },
        Screen::Dashboard => html! {
            <DashboardScreen
                address={app.wallet.short_address()}
                on_create={link.callback(|_| Msg::StartCampaign)}
            />
        },
        Screen::Wizard => build_wizard(app, link),
    }
}

fn build_wizard(app: &App, link: &Scope<App>) -> Html {
    let Some(session) = &app.session else {
        // A wizard screen must never exist outside a draft session; if it
        // does, something provisioned the screen wrongly. Say so instead of
        // rendering over an undefined draft.
        return html! {
            <div class="card form-card">
                <h2>{"No active campaign draft"}</h2>
                <p>{"The wizard was opened without a draft session. \
                     Go back to the dashboard and start a new campaign."}</p>
            </div>
        };
    };

    let events = link.callback(Msg::Wizard);
    let store = session.store.clone();
    let step = session.navigator.step();

    let screen = match step {
        WizardStep::Basics => html! {
            <BasicsScreen {store} {events} />
        },
        WizardStep::ContentRequirements => html! {
            <ContentRequirementsScreen {store} {events} />
        },
        WizardStep::SuccessMetrics => html! {
            <SuccessMetricsScreen {store} {events} />
        },
        WizardStep::BudgetTimeline => html! {
            <BudgetTimelineScreen {store} {events} />
        },
        WizardStep::Success => html! {
            <CampaignSuccessScreen
                snapshot={session.store.snapshot()}
                submission={app.submission.clone()}
                {events}
            />
        },
    };

    html! {
        <>
            { build_progress(step) }
            { screen }
        </>
    }
}

/// Progress dots over the data-entry steps; the terminal success screen
/// shows them all filled.
fn build_progress(step: WizardStep) -> Html {
    let dots = (0..WizardStep::data_step_count()).map(|i| {
        html! {
            <span class={classes!("dot", (i <= step.index()).then_some("filled"))}></span>
        }
    });
    html! {
        <div class="progress-dots">{ for dots }</div>
    }
}

fn build_bottom_nav(app: &App, link: &Scope<App>) -> Html {
    let visible =
        app.wallet.connected && matches!(app.screen, Screen::Dashboard | Screen::Wizard);
    if !visible {
        return html! {};
    }

    html! {
        <BottomNavigation
            wizard_active={app.screen == Screen::Wizard}
            on_select={link.callback(|target| match target {
                NavTarget::Dashboard => Msg::Navigate(Screen::Dashboard),
                NavTarget::NewCampaign => Msg::StartCampaign,
            })}
        />
    }
}
