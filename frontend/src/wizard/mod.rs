//! The campaign creation wizard core: the draft store shared by the wizard
//! screens, the per-step validators, the step table and navigator that
//! sequence them, and the submission gateway that persists a finished
//! draft.

pub mod api;
pub mod catalog;
pub mod format;
pub mod navigator;
pub mod step;
pub mod store;
pub mod validate;
