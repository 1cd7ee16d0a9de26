//! Tracker commands and the raw-event boundary.
//!
//! Inside the crate every update is a [`Command`], a tagged enum whose
//! variants carry exactly the payload they need. Front-ends that speak in
//! loosely-typed events (a JSON message, a form submission) go through
//! [`RawEvent`], which is checked once when converted.

use serde::{Deserialize, Serialize};

use crate::core::pool::clamp_count;
use crate::core::Category;
use crate::error::CommandError;

/// An update to the tracker's state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Declare the pool total, or clear it with `None`.
    ///
    /// Negative totals clamp to zero.
    SetTotal(Option<i64>),

    /// Replace one category's count.
    SetCategory(Category, u32),
}

impl Command {
    /// Boundary name of `SetTotal`.
    pub const SET_TOTAL: &'static str = "SET_TOTAL";

    /// Boundary name of `SetCategory`.
    pub const SET_CATEGORY: &'static str = "SET_CATEGORY";

    /// Boundary name of this command.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Command::SetTotal(_) => Self::SET_TOTAL,
            Command::SetCategory(..) => Self::SET_CATEGORY,
        }
    }
}

/// An update as received from an integrating layer.
///
/// ```
/// use stamina_calc::core::Category;
/// use stamina_calc::tracker::{Command, RawEvent};
///
/// let raw = RawEvent::new("SET_CATEGORY").with_category("hand").with_value(4);
/// assert_eq!(Command::try_from(raw).unwrap(), Command::SetCategory(Category::Hand, 4));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    /// Command name, `SET_TOTAL` or `SET_CATEGORY`.
    pub kind: String,

    /// Category name, required for `SET_CATEGORY` only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// New value. Absent on `SET_TOTAL` clears the total.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

impl RawEvent {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }
}

impl TryFrom<RawEvent> for Command {
    type Error = CommandError;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        match raw.kind.as_str() {
            Command::SET_TOTAL => {
                if let Some(category) = raw.category {
                    return Err(CommandError::UnexpectedCategory {
                        kind: Command::SET_TOTAL,
                        category,
                    });
                }
                Ok(Command::SetTotal(raw.value))
            }
            Command::SET_CATEGORY => {
                let name = raw.category.ok_or(CommandError::MissingCategory {
                    kind: Command::SET_CATEGORY,
                })?;
                let category = name.parse::<Category>()?;
                let value = raw.value.ok_or(CommandError::MissingValue {
                    kind: Command::SET_CATEGORY,
                })?;
                Ok(Command::SetCategory(category, clamp_count(value)))
            }
            _ => Err(CommandError::UnknownKind(raw.kind)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_total_event() {
        let cmd = Command::try_from(RawEvent::new("SET_TOTAL").with_value(10)).unwrap();
        assert_eq!(cmd, Command::SetTotal(Some(10)));
        assert_eq!(cmd.kind(), "SET_TOTAL");
    }

    #[test]
    fn test_set_total_without_value_clears() {
        let cmd = Command::try_from(RawEvent::new("SET_TOTAL")).unwrap();
        assert_eq!(cmd, Command::SetTotal(None));
    }

    #[test]
    fn test_set_total_rejects_category() {
        let raw = RawEvent::new("SET_TOTAL").with_category("hand").with_value(3);
        let err = Command::try_from(raw).unwrap_err();
        assert!(matches!(err, CommandError::UnexpectedCategory { .. }));
    }

    #[test]
    fn test_set_category_missing_category() {
        let err = Command::try_from(RawEvent::new("SET_CATEGORY").with_value(3)).unwrap_err();
        assert_eq!(
            err,
            CommandError::MissingCategory {
                kind: "SET_CATEGORY"
            }
        );
        assert_eq!(err.to_string(), "SET_CATEGORY requires a category");
    }

    #[test]
    fn test_set_category_missing_value() {
        let raw = RawEvent::new("SET_CATEGORY").with_category("lost");
        let err = Command::try_from(raw).unwrap_err();
        assert_eq!(
            err,
            CommandError::MissingValue {
                kind: "SET_CATEGORY"
            }
        );
    }

    #[test]
    fn test_set_category_unknown_name() {
        let raw = RawEvent::new("SET_CATEGORY").with_category("deck").with_value(1);
        let err = Command::try_from(raw).unwrap_err();
        assert_eq!(err, CommandError::UnknownCategory("deck".into()));
    }

    #[test]
    fn test_set_category_negative_value_clamps() {
        let raw = RawEvent::new("SET_CATEGORY").with_category("active").with_value(-2);
        let cmd = Command::try_from(raw).unwrap();
        assert_eq!(cmd, Command::SetCategory(Category::Active, 0));
    }

    #[test]
    fn test_unknown_kind() {
        let err = Command::try_from(RawEvent::new("CHECK")).unwrap_err();
        assert_eq!(err, CommandError::UnknownKind("CHECK".into()));
    }

    #[test]
    fn test_raw_event_from_json() {
        let raw: RawEvent =
            serde_json::from_str(r#"{"kind":"SET_CATEGORY","category":"discarded","value":4}"#)
                .unwrap();
        let cmd = Command::try_from(raw).unwrap();
        assert_eq!(cmd, Command::SetCategory(Category::Discarded, 4));
    }
}
