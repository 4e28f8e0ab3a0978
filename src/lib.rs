//! htmlquest - a terminal quiz game about broken HTML
//!
//! A fixed sequence of "broken HTML" missions is presented one at a time; the
//! player types the repaired snippet, earns a badge per solved mission, and
//! sees a progress bar fill until the final message.
//!
//! The crate splits into two layers:
//!
//! 1. **`domain`**: immutable mission templates and the validated catalog
//!    (built-in dataset or a JSON mission pack).
//!
//! 2. **`runner`**: the mission state machine. It owns all session state and
//!    exposes submit/advance/reporting operations; the presentation layer
//!    (the `htmlquest` binary, or anything else) renders what it reports.

pub mod domain;
pub mod runner;

pub use domain::*;
