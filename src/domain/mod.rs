//! Core domain types for htmlquest

mod catalog;
mod mission;

pub use catalog::{Catalog, CatalogError};
pub use mission::{AnswerKey, Badge, Mission, MissionId};
