//! Mission Runner - session lifecycle for one playthrough
//!
//! Owns the catalog, the current position in the mission sequence, and the
//! badge log. The presentation layer renders whatever the runner reports and
//! forwards submitted answers to it; all mutation goes through [`submit`] and
//! [`advance`].
//!
//! [`submit`]: MissionRunner::submit
//! [`advance`]: MissionRunner::advance

mod feedback;
mod progress;
mod state;

pub use feedback::{Feedback, FinalSummary, Tone};
pub use progress::{AwardedBadge, Progress};
pub use state::{AdvanceTicket, IgnoreReason, RunnerState, Submission};

use crate::domain::{Catalog, Mission};

/// The mission state machine
///
/// Missions are completed strictly in catalog order: the active index only
/// moves after a correct answer, so mission k+1 cannot be attempted before
/// mission k is solved. After N correct answers in sequence the active index
/// and the completed count are both N.
pub struct MissionRunner {
    catalog: Catalog,
    state: RunnerState,
    completed: usize,
    badges: Vec<AwardedBadge>,
}

impl MissionRunner {
    /// Start a fresh session on the first mission
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: RunnerState::Active(0),
            completed: 0,
            badges: Vec::new(),
        }
    }

    /// Submit an answer for the active mission
    ///
    /// The raw text is normalized by trimming leading and trailing whitespace
    /// only, then compared against the mission's accepted literal(s). A match
    /// awards the badge and parks the runner in the awaiting-advance window;
    /// the returned [`AdvanceTicket`] must be redeemed (after the display
    /// delay) to move on. Submissions while the window is open, or after the
    /// last mission, are ignored rather than erroring.
    pub fn submit(&mut self, raw: &str) -> Submission {
        let answer = raw.trim();

        match self.state {
            RunnerState::Active(index) => {
                // the active index is always in bounds for a validated catalog
                let Some(mission) = self.catalog.get(index) else {
                    tracing::warn!(index, "active index out of bounds");
                    return Submission::Ignored(IgnoreReason::Finished);
                };
                if mission.answer.accepts(answer) {
                    let awarded = AwardedBadge::for_mission(mission);
                    let badge = awarded.badge.clone();
                    tracing::debug!(
                        mission = %mission.id,
                        badge = %badge,
                        "mission solved"
                    );

                    self.badges.push(awarded);
                    self.completed += 1;
                    self.state = RunnerState::AwaitingAdvance(index);

                    Submission::Correct {
                        badge,
                        feedback: Feedback::success(),
                        advance: AdvanceTicket {
                            mission_index: index,
                        },
                    }
                } else {
                    tracing::debug!(mission = %mission.id, "answer rejected");
                    Submission::Incorrect {
                        feedback: Feedback::failure(),
                    }
                }
            }
            RunnerState::AwaitingAdvance(_) => {
                tracing::debug!("submission ignored: advance pending");
                Submission::Ignored(IgnoreReason::AdvancePending)
            }
            RunnerState::Finished => Submission::Ignored(IgnoreReason::Finished),
        }
    }

    /// Redeem an advance ticket, moving to the next mission or finishing
    ///
    /// A stale ticket (the runner is not awaiting that mission's advance) is
    /// ignored, so a late or duplicate callback cannot skip a mission.
    pub fn advance(&mut self, ticket: AdvanceTicket) -> RunnerState {
        match self.state {
            RunnerState::AwaitingAdvance(index) if index == ticket.mission_index => {
                let next = index + 1;
                self.state = if next < self.catalog.len() {
                    tracing::debug!(index = next, "advancing to next mission");
                    RunnerState::Active(next)
                } else {
                    tracing::debug!(missions = self.completed, "all missions complete");
                    RunnerState::Finished
                };
            }
            _ => {
                tracing::warn!(
                    index = ticket.mission_index,
                    "stale advance ticket ignored"
                );
            }
        }
        self.state
    }

    /// The mission currently displayed, `None` once everything is solved
    ///
    /// Still reports the solved mission during the awaiting-advance window,
    /// since that is what the player is looking at.
    pub fn active_mission(&self) -> Option<&Mission> {
        match self.state {
            RunnerState::Active(index) | RunnerState::AwaitingAdvance(index) => {
                self.catalog.get(index)
            }
            RunnerState::Finished => None,
        }
    }

    pub fn state(&self) -> RunnerState {
        self.state
    }

    pub fn progress(&self) -> Progress {
        Progress {
            completed: self.completed,
            total: self.catalog.len(),
        }
    }

    /// Badges earned so far, in completion order
    pub fn awarded_badges(&self) -> &[AwardedBadge] {
        &self.badges
    }

    pub fn is_finished(&self) -> bool {
        self.state == RunnerState::Finished
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
