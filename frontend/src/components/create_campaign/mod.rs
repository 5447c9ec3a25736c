//! The five wizard screens, one per step. Each screen edits a local
//! working copy of its draft slice and emits `WizardMsg` events upward;
//! merging and navigation stay with the app root.

pub mod basics;
pub mod budget_timeline;
pub mod content_requirements;
pub mod success;
pub mod success_metrics;
