//! Query action type.

use std::fmt;

/// Error returned when parsing an unknown action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action: {input}")]
pub struct InvalidAction {
    input: String,
}

/// One of the three fixed queries the brevet times API answers.
///
/// The wire identifiers are exactly `listAll`, `listOpenOnly`, and
/// `listCloseOnly`; anything else is rejected rather than passed
/// through to the remote API.
///
/// # Examples
///
/// ```
/// use brevet_viewer::domain::Action;
///
/// let action = Action::parse("listAll").unwrap();
/// assert_eq!(action.as_str(), "listAll");
///
/// // Unknown identifiers are rejected
/// assert!(Action::parse("listall").is_err());
/// assert!(Action::parse("dropTables").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// All control open and close times.
    ListAll,
    /// Open times only.
    ListOpenOnly,
    /// Close times only.
    ListCloseOnly,
}

impl Action {
    /// Parse an action from its wire identifier.
    pub fn parse(s: &str) -> Result<Self, InvalidAction> {
        match s {
            "listAll" => Ok(Action::ListAll),
            "listOpenOnly" => Ok(Action::ListOpenOnly),
            "listCloseOnly" => Ok(Action::ListCloseOnly),
            _ => Err(InvalidAction { input: s.to_string() }),
        }
    }

    /// Returns the wire identifier for this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ListAll => "listAll",
            Action::ListOpenOnly => "listOpenOnly",
            Action::ListCloseOnly => "listCloseOnly",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
