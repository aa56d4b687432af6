//! Domain types for brevet time queries.
//!
//! Every parameter the user can supply is validated into a closed type
//! here before it gets anywhere near an outbound URL. All types enforce
//! their invariants at construction time.

mod action;
mod format;
mod query;
mod top;

pub use action::{Action, InvalidAction};
pub use format::{Format, InvalidFormat};
pub use query::TimesQuery;
pub use top::{InvalidTopK, TopK};
