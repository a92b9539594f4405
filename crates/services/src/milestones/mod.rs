mod feed;
mod tracker;
mod workflow;

// Public API of the milestone subsystem.
pub use feed::ResponseFeed;
pub use tracker::{AnswerOutcome, MilestoneTracker, Position, RestoreReport};
pub use workflow::{MilestoneService, PendingSave};
