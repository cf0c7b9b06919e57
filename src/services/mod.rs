pub mod duplicate_guard;
pub mod local_estimate;
pub mod session_history;

pub use duplicate_guard::{fingerprint, DuplicateGuard};
pub use session_history::{AttemptRecord, AttemptRow, SessionHistory};
