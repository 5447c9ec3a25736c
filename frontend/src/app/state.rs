//! Root application state: the active screen, the wallet status, the
//! wizard session (when one is open), and the submission status shown on
//! the success screen.

use uuid::Uuid;

use crate::wizard::navigator::Navigator;
use crate::wizard::store::{ObserverId, SharedDraftStore};

/// Top-level screens outside the wizard's own step sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Connection,
    Dashboard,
    Wizard,
}

/// Connection status of the external wallet/identity provider. The wizard
/// only ever reads `connected` and the display address; signing and wallet
/// internals stay behind the provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletStatus {
    pub connected: bool,
    pub address: Option<String>,
}

impl WalletStatus {
    /// Shortened `0x1234…abcd` form for the header chip.
    pub fn short_address(&self) -> Option<String> {
        self.address.as_ref().map(|addr| {
            if addr.len() > 10 {
                format!("{}\u{2026}{}", &addr[..6], &addr[addr.len() - 4..])
            } else {
                addr.clone()
            }
        })
    }
}

/// Where the one submission per completed draft currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionStatus {
    Idle,
    Pending,
    Saved { campaign_id: String },
    Failed { error: String },
}

/// Everything with wizard lifetime: the draft store, the navigator, and the
/// idempotency key sent with the submission. Created when the wizard is
/// entered, dropped when it is left; the draft cannot outlive its session.
pub struct WizardSession {
    pub store: SharedDraftStore,
    pub navigator: Navigator,
    pub submission_id: String,
    pub observer: Option<ObserverId>,
}

impl WizardSession {
    pub fn new() -> Self {
        WizardSession {
            store: SharedDraftStore::new(),
            navigator: Navigator::new(),
            submission_id: Uuid::new_v4().to_string(),
            observer: None,
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub wallet: WalletStatus,
    pub session: Option<WizardSession>,
    pub submission: SubmissionStatus,
}

impl App {
    pub fn new() -> Self {
        App {
            screen: Screen::Home,
            wallet: WalletStatus::default(),
            session: None,
            submission: SubmissionStatus::Idle,
        }
    }
}
