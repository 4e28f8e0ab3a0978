//! Runner states and submission outcomes

use crate::domain::Badge;

use super::feedback::Feedback;

/// Where the runner is in the mission sequence
///
/// `AwaitingAdvance` is the post-success display window: the solved mission is
/// still shown, but submissions are ignored until the scheduler redeems the
/// advance ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerState {
    /// Mission at this index is displayed and accepting answers
    Active(usize),
    /// Mission at this index was just solved; the advance is pending
    AwaitingAdvance(usize),
    /// Every mission is solved
    Finished,
}

/// One-shot handle for the deferred advance after a correct answer
///
/// The scheduler (presentation layer) holds this across the display delay and
/// redeems it with [`MissionRunner::advance`]. It cannot be constructed
/// outside the runner; dropping it leaves the runner awaiting, which cancels
/// the advance.
///
/// [`MissionRunner::advance`]: super::MissionRunner::advance
#[derive(Debug)]
pub struct AdvanceTicket {
    pub(super) mission_index: usize,
}

impl AdvanceTicket {
    /// Index of the mission this ticket was issued for
    pub fn mission_index(&self) -> usize {
        self.mission_index
    }
}

/// Why a submission was ignored without touching any state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The previous correct answer's advance is still pending
    AdvancePending,
    /// All missions are already solved
    Finished,
}

/// Outcome of one answer submission
#[derive(Debug)]
pub enum Submission {
    /// The answer matched; the runner is now awaiting the deferred advance
    Correct {
        badge: Badge,
        feedback: Feedback,
        advance: AdvanceTicket,
    },
    /// The answer did not match; the mission stays active, retries are free
    Incorrect { feedback: Feedback },
    /// Nothing happened (terminal state or pending advance)
    Ignored(IgnoreReason),
}
