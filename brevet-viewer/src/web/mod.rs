//! Web layer for the brevet times viewer.
//!
//! A single page drives everything: the query form submits back to `/`,
//! the handler runs at most one remote fetch, and the outcome is
//! rendered into the results block of the same page.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::TimesPageParams;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
