//! Declared pool size.

use serde::{Deserialize, Serialize};

/// The total number of cards the player says they have.
///
/// `Undeclared` is its own state and is distinct from `Declared(0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolDeclaration {
    /// No total has been supplied.
    #[default]
    Undeclared,
    /// The player declared this many cards.
    Declared(u32),
}

impl PoolDeclaration {
    /// Normalize a raw total input.
    ///
    /// Negative values clamp to zero and values past `u32::MAX` saturate.
    /// `None` means the total was cleared.
    ///
    /// ```
    /// use stamina_calc::core::PoolDeclaration;
    ///
    /// assert_eq!(PoolDeclaration::from_input(Some(-5)), PoolDeclaration::Declared(0));
    /// assert_eq!(PoolDeclaration::from_input(Some(12)), PoolDeclaration::Declared(12));
    /// assert_eq!(PoolDeclaration::from_input(None), PoolDeclaration::Undeclared);
    /// ```
    #[must_use]
    pub fn from_input(input: Option<i64>) -> Self {
        match input {
            None => PoolDeclaration::Undeclared,
            Some(n) => PoolDeclaration::Declared(clamp_count(n)),
        }
    }

    /// The declared total, if any.
    #[must_use]
    pub const fn total(self) -> Option<u32> {
        match self {
            PoolDeclaration::Undeclared => None,
            PoolDeclaration::Declared(n) => Some(n),
        }
    }

    #[must_use]
    pub const fn is_declared(self) -> bool {
        matches!(self, PoolDeclaration::Declared(_))
    }
}

impl From<Option<u32>> for PoolDeclaration {
    fn from(total: Option<u32>) -> Self {
        total.map_or(PoolDeclaration::Undeclared, PoolDeclaration::Declared)
    }
}

impl std::fmt::Display for PoolDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoolDeclaration::Undeclared => f.write_str("undeclared"),
            PoolDeclaration::Declared(n) => write!(f, "{} cards", n),
        }
    }
}

/// Clamp a signed input into the range of a card count.
pub(crate) fn clamp_count(n: i64) -> u32 {
    u32::try_from(n.max(0)).unwrap_or(u32::MAX)
}
