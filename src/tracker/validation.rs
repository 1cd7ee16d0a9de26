//! Validation state: how the placed cards compare to the declared pool.

use serde::{Deserialize, Serialize};

use crate::core::PoolDeclaration;

/// Consistency between the declared pool and the cards placed in categories.
///
/// The state is never transitioned explicitly. It is whatever
/// [`ValidationState::evaluate`] returns for the current inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationState {
    /// No total declared.
    Undeclared,
    /// Fewer cards placed than declared.
    Under,
    /// More cards placed than declared.
    Over,
    /// Placed cards match the declared total.
    Balanced,
}

impl ValidationState {
    /// Evaluate the state for a declaration and a placed total.
    ///
    /// ```
    /// use stamina_calc::core::PoolDeclaration;
    /// use stamina_calc::tracker::ValidationState;
    ///
    /// let pool = PoolDeclaration::Declared(12);
    /// assert_eq!(ValidationState::evaluate(pool, 10), ValidationState::Under);
    /// assert_eq!(ValidationState::evaluate(pool, 12), ValidationState::Balanced);
    /// assert_eq!(ValidationState::evaluate(pool, 13), ValidationState::Over);
    /// ```
    #[must_use]
    pub fn evaluate(pool: PoolDeclaration, placed: u64) -> Self {
        match pool {
            PoolDeclaration::Undeclared => ValidationState::Undeclared,
            PoolDeclaration::Declared(total) => match placed.cmp(&u64::from(total)) {
                std::cmp::Ordering::Less => ValidationState::Under,
                std::cmp::Ordering::Greater => ValidationState::Over,
                std::cmp::Ordering::Equal => ValidationState::Balanced,
            },
        }
    }

    #[must_use]
    pub const fn is_balanced(self) -> bool {
        matches!(self, ValidationState::Balanced)
    }
}

impl std::fmt::Display for ValidationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValidationState::Undeclared => "undeclared",
            ValidationState::Under => "under",
            ValidationState::Over => "over",
            ValidationState::Balanced => "balanced",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undeclared_ignores_placed() {
        for placed in [0, 5, 12, 1000] {
            assert_eq!(
                ValidationState::evaluate(PoolDeclaration::Undeclared, placed),
                ValidationState::Undeclared
            );
        }
    }

    #[test]
    fn test_zero_pool_with_nothing_placed_is_balanced() {
        let state = ValidationState::evaluate(PoolDeclaration::Declared(0), 0);
        assert_eq!(state, ValidationState::Balanced);
        assert!(state.is_balanced());
    }

    #[test]
    fn test_placed_beyond_u32() {
        let placed = u64::from(u32::MAX) + 1;
        assert_eq!(
            ValidationState::evaluate(PoolDeclaration::Declared(u32::MAX), placed),
            ValidationState::Over
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ValidationState::Over), "over");
        assert_eq!(format!("{}", ValidationState::Balanced), "balanced");
    }
}
