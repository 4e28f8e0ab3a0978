//! Progress reporting: completed counts and the append-only badge log

use chrono::{DateTime, Utc};

use crate::domain::{Badge, Mission, MissionId};

/// Snapshot of session progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    /// Completed missions over total, in `[0, 1]`
    ///
    /// Monotonically non-decreasing over a session; `total` is never zero
    /// because empty catalogs are rejected at construction.
    pub fn fraction(&self) -> f64 {
        self.completed as f64 / self.total as f64
    }
}

/// A badge that was earned during this session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardedBadge {
    pub mission_id: MissionId,
    pub badge: Badge,
    pub earned_at: DateTime<Utc>,
}

impl AwardedBadge {
    pub(super) fn for_mission(mission: &Mission) -> Self {
        Self {
            mission_id: mission.id,
            badge: mission.badge.clone(),
            earned_at: Utc::now(),
        }
    }
}
