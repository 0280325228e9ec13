//! Admission decisions for submission candidates.
//!
//! The gate is the one piece of policy between capture and submission: a
//! candidate is admitted only if the tracker recorded a successful load
//! for its URL. The decision reads the latest snapshot of the table at
//! call time and is never re-evaluated afterwards — a renavigation that
//! lands while an admitted submission is in flight does not undo it.

use std::fmt;

use crate::models::{IndexRequest, SubmissionCandidate};
use crate::tracker::NavigationTracker;

/// Lowest status code that disqualifies a page from indexing. Redirect
/// and error classes alike leave no directly usable page content.
const STATUS_CUTOFF: u16 = 300;

/// Why a candidate was not submitted.
///
/// Not a failure: rejection is a deliberate non-submission outcome and is
/// surfaced to neither the user nor the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// No completed navigation was ever observed for the URL.
    NoStatusRecorded,
    /// The last observed status was >= 300.
    StatusNotSuccessful(u16),
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::NoStatusRecorded => write!(f, "no status recorded"),
            RejectionReason::StatusNotSuccessful(code) => {
                write!(f, "status {} not successful", code)
            }
        }
    }
}

/// Outcome of the admission check.
#[derive(Debug)]
pub enum Admission {
    /// Candidate may be submitted; payload unchanged, version tag attached.
    Admitted(IndexRequest),
    Rejected(RejectionReason),
}

/// Decide whether `candidate` may be submitted.
///
/// Pure aside from the tracker read. Callers on async paths must make the
/// decision before any await point so the snapshot is the one current at
/// admission time.
pub fn try_admit(tracker: &NavigationTracker, candidate: SubmissionCandidate) -> Admission {
    match tracker.lookup_status(&candidate.url) {
        None => Admission::Rejected(RejectionReason::NoStatusRecorded),
        Some(code) if code >= STATUS_CUTOFF => {
            Admission::Rejected(RejectionReason::StatusNotSuccessful(code))
        }
        Some(_) => Admission::Admitted(IndexRequest::from_candidate(candidate)),
    }
}
