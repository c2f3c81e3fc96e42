/// Server services
pub mod activities;
pub mod players;

pub use activities::{ActivityFilter, ActivityService};
pub use players::{PlayerService, SkipReason};
