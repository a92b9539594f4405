#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod milestones;

pub use milestone_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, MilestoneError, TrackerError};
pub use milestones::{
    AnswerOutcome, MilestoneService, MilestoneTracker, PendingSave, Position, ResponseFeed,
    RestoreReport,
};
