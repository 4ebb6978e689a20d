pub mod reconcile;
pub mod time_projection;

pub use reconcile::{HomeSlot, Reconciliation, reconcile, reconcile_with_projection};
pub use time_projection::{LocalKickoff, TimeProjection, to_target_local};
