//! Update function for the root component, Elm style: receives the current
//! [`App`] state and a [`Msg`], mutates, and returns whether to re-render.
//!
//! All draft mutation and navigation happens synchronously inside these
//! handlers. The only asynchronous boundary is the submission gateway call,
//! fired when the navigator hands out its one-shot ticket; its outcome
//! comes back later as [`Msg::SubmissionFinished`].

use gloo_console::{error, log};
use uuid::Uuid;
use yew::prelude::*;

use common::model::submit::SubmitCampaignRequest;

use super::helpers::{show_toast, today_iso};
use super::messages::{Msg, WizardMsg};
use super::state::{App, Screen, SubmissionStatus, WalletStatus, WizardSession};
use crate::wizard::api;
use crate::wizard::navigator::Navigator;

pub fn update(app: &mut App, ctx: &Context<App>, msg: Msg) -> bool {
    match msg {
        Msg::Navigate(screen) => {
            if screen == Screen::Wizard && app.session.is_none() {
                // Navigating into the wizard without a provisioned session is
                // an integration bug, not a user action.
                error!("wizard navigation without a draft session; ignoring");
                return false;
            }
            if app.screen == Screen::Wizard && screen != Screen::Wizard {
                close_session(app);
            }
            app.screen = screen;
            true
        }
        Msg::WalletConnected(address) => {
            log!("wallet connected", address.clone());
            app.wallet = WalletStatus {
                connected: true,
                address: Some(address),
            };
            app.screen = Screen::Dashboard;
            true
        }
        Msg::WalletDisconnected => {
            if app.screen == Screen::Wizard {
                close_session(app);
            }
            app.wallet = WalletStatus::default();
            app.screen = Screen::Home;
            true
        }
        Msg::StartCampaign => {
            if !app.wallet.connected {
                show_toast("Connect your wallet to create a campaign.");
                app.screen = Screen::Connection;
                return true;
            }
            open_session(app, ctx);
            app.screen = Screen::Wizard;
            true
        }
        Msg::Wizard(msg) => wizard_update(app, ctx, msg),
        Msg::SubmissionFinished(result) => {
            app.submission = if result.success {
                SubmissionStatus::Saved {
                    campaign_id: result.campaign_id,
                }
            } else {
                let error = result
                    .error
                    .unwrap_or_else(|| "the campaign service did not respond".into());
                show_toast("Saving the campaign failed. Your data is kept, use Retry.");
                SubmissionStatus::Failed { error }
            };
            true
        }
        Msg::DraftChanged => true,
    }
}

fn wizard_update(app: &mut App, ctx: &Context<App>, msg: WizardMsg) -> bool {
    // Disjoint field borrows: the session and the submission status are
    // updated side by side in several arms.
    let App {
        screen,
        session,
        submission,
        ..
    } = app;
    let Some(session) = session.as_mut() else {
        error!("wizard event without a draft session; ignoring");
        return false;
    };

    match msg {
        WizardMsg::Continue(patch) => {
            let snapshot = session.store.merge(patch);
            match session.navigator.advance(&snapshot, &today_iso()) {
                Ok(step) => {
                    log!("wizard advanced to", step.as_str());
                    if session.navigator.take_submission_ticket() {
                        *submission = SubmissionStatus::Pending;
                        submit(session, ctx);
                    }
                }
                Err(reason) => {
                    // Normal user-input flow: stay on the step, keep the
                    // draft, tell the user what is missing.
                    show_toast(&reason.to_string());
                }
            }
            true
        }
        WizardMsg::Back => {
            session.navigator.retreat();
            true
        }
        WizardMsg::Retry => {
            if matches!(submission, SubmissionStatus::Failed { .. }) {
                *submission = SubmissionStatus::Pending;
                submit(session, ctx);
                true
            } else {
                false
            }
        }
        WizardMsg::Restart => {
            session.store.reset();
            session.navigator = Navigator::new();
            session.submission_id = Uuid::new_v4().to_string();
            *submission = SubmissionStatus::Idle;
            true
        }
        WizardMsg::ExitToDashboard => {
            *screen = Screen::Dashboard;
            close_session(app);
            true
        }
    }
}

/// Provisions a fresh wizard session and relays store notifications into
/// the component queue so every merge re-renders before the next input is
/// handled.
fn open_session(app: &mut App, ctx: &Context<App>) {
    let mut session = WizardSession::new();
    let link = ctx.link().clone();
    session.observer = Some(
        session
            .store
            .subscribe(move |_| link.send_message(Msg::DraftChanged)),
    );
    app.session = Some(session);
    app.submission = SubmissionStatus::Idle;
}

/// Ends the wizard lifetime: detaches the observer, resets the draft to its
/// zero value, and drops the session.
fn close_session(app: &mut App) {
    if let Some(session) = app.session.take() {
        if let Some(id) = session.observer {
            session.store.unsubscribe(id);
        }
        session.store.reset();
    }
    app.submission = SubmissionStatus::Idle;
}

fn submit(session: &WizardSession, ctx: &Context<App>) {
    let request = SubmitCampaignRequest {
        submission_id: session.submission_id.clone(),
        campaign: session.store.snapshot(),
    };
    api::submit_campaign(request, ctx.link().callback(Msg::SubmissionFinished));
}
