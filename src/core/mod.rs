// Core component exports
pub mod eligibility;
pub mod interactions;
pub mod queue;

pub use eligibility::{age_in_years, BirthDateWindow, ADULT_AGE};
pub use interactions::{check_distinct, InteractionEngine, InteractionError};
pub use queue::{build_exclusions, SwipeQueueGenerator};
