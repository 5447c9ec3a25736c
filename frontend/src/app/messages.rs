use common::model::submit::CampaignSaveResult;

use super::state::Screen;
use crate::wizard::store::DraftPatch;

/// Events the wizard screens emit upward. A closed set instead of optional
/// per-screen callbacks: a screen can only ask for things the app knows how
/// to handle.
#[derive(Clone, PartialEq)]
pub enum WizardMsg {
    /// Merge this step's slice into the draft and try to advance.
    Continue(DraftPatch),
    /// Step back without validating.
    Back,
    /// Re-send a failed submission with the same idempotency key.
    Retry,
    /// "Create another campaign": reset the draft and restart at basics.
    Restart,
    /// Leave the wizard, discarding the session.
    ExitToDashboard,
}

pub enum Msg {
    Navigate(Screen),
    WalletConnected(String),
    WalletDisconnected,
    /// Dashboard / bottom-nav entry point: provisions a wizard session.
    StartCampaign,
    Wizard(WizardMsg),
    SubmissionFinished(CampaignSaveResult),
    /// Ping from the draft store observer; re-render with the new snapshot.
    DraftChanged,
}
