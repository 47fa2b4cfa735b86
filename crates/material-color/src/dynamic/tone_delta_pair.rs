//! Tone distance constraints between two roles

use super::role::Role;

/// Which way role A sits relative to role B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TonePolarity {
    /// A is darker than B.
    Darker,
    /// A is lighter than B.
    Lighter,
    /// A is closer to the background than B.
    Nearer,
    /// A is farther from the background than B.
    Farther,
    /// A is darker in light mode and lighter in dark mode.
    RelativeDarker,
    /// A is lighter in light mode and darker in dark mode.
    RelativeLighter,
}

/// How strictly the delta is enforced under the 2025 rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaConstraint {
    /// Exactly `delta` apart.
    Exact,
    /// At most `delta` apart.
    Nearer,
    /// At least `delta` apart.
    Farther,
}

/// Keeps two roles a fixed number of tones apart, e.g. a container and its
/// accent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneDeltaPair {
    pub role_a: Role,
    pub role_b: Role,
    pub delta: f64,
    pub polarity: TonePolarity,
    /// Under the 2021 rules, move both roles out of the 50..60 band together.
    pub stay_together: bool,
    pub constraint: Option<DeltaConstraint>,
}

impl ToneDeltaPair {
    pub const fn new(
        role_a: Role,
        role_b: Role,
        delta: f64,
        polarity: TonePolarity,
        stay_together: bool,
    ) -> Self {
        Self {
            role_a,
            role_b,
            delta,
            polarity,
            stay_together,
            constraint: None,
        }
    }

    pub fn with_constraint(mut self, constraint: DeltaConstraint) -> Self {
        self.constraint = Some(constraint);
        self
    }

    /// The role of the pair that is not `role`.
    pub fn other(&self, role: Role) -> Role {
        if role == self.role_a {
            self.role_b
        } else {
            self.role_a
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_role() {
        let pair = ToneDeltaPair::new(
            Role::PrimaryContainer,
            Role::Primary,
            10.0,
            TonePolarity::Nearer,
            false,
        );
        assert_eq!(pair.other(Role::Primary), Role::PrimaryContainer);
        assert_eq!(pair.other(Role::PrimaryContainer), Role::Primary);
        assert_eq!(pair.constraint, None);
        assert_eq!(
            pair.with_constraint(DeltaConstraint::Farther).constraint,
            Some(DeltaConstraint::Farther)
        );
    }
}
