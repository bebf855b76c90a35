//! Game sessions
//!
//! A [`Session`] ties one board to a dictionary and tracks a single player's
//! accepted words, score and lifecycle.

mod scoring;
mod session;
mod summary;

pub use scoring::points_for_length;
pub use session::{Session, SessionState, Submission, SubmissionStatus};
pub use summary::GameSummary;
