use serde::{Deserialize, Serialize};

/// Sequence number of a mission, used for display only (missions are
/// addressed by position in the catalog, never by id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissionId(pub u32);

impl std::fmt::Display for MissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reward label granted when a mission is solved, display-only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Badge(String);

impl Badge {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The accepted answer(s) for a mission
///
/// Either a single literal or a list of alternative literals. Comparison is
/// exact string equality: no case-folding, no whitespace collapsing inside
/// the answer. The untagged serde shape keeps mission packs compatible with
/// the original data format (a plain string or an array of strings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerKey {
    /// One accepted literal
    Single(String),
    /// Alternative literals, any exact match succeeds
    AnyOf(Vec<String>),
}

impl AnswerKey {
    /// Check whether a (pre-trimmed) answer matches any accepted literal
    pub fn accepts(&self, answer: &str) -> bool {
        match self {
            Self::Single(expected) => expected == answer,
            Self::AnyOf(alternatives) => alternatives.iter().any(|a| a == answer),
        }
    }

    /// The canonical accepted answer (first alternative), used in listings
    pub fn canonical(&self) -> Option<&str> {
        match self {
            Self::Single(expected) => Some(expected.as_str()),
            Self::AnyOf(alternatives) => alternatives.first().map(String::as_str),
        }
    }

    /// True if there is no literal that could ever match
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(_) => false,
            Self::AnyOf(alternatives) => alternatives.is_empty(),
        }
    }
}

/// An immutable mission template
///
/// Completion state is tracked by the runner, not on the template, so a
/// catalog can be shared and replayed freely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    /// Sequence number shown to the player
    pub id: MissionId,

    /// Mission heading
    pub title: String,

    /// What the player is asked to fix
    pub description: String,

    /// The broken snippet shown to the player
    pub broken_code: String,

    /// Accepted answer(s)
    #[serde(rename = "correctAnswer")]
    pub answer: AnswerKey,

    /// Badge awarded on success
    pub badge: Badge,
}
