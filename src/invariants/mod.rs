//! First-class invariants for the game session.
//!
//! Invariants are logical properties that must hold across every recorded
//! move and history jump. They are asserted after each successful move in
//! debug builds and are testable independently.

mod alternating_marks;
mod history_consistent;
mod monotonic_grid;

pub use alternating_marks::AlternatingMarksInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_grid::MonotonicGridInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples so related invariants compose into a single
/// verification step.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set.
    ///
    /// Returns `Ok(())` when all hold, or the collected violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B> InvariantSet<S> for (A, B)
where
    A: Invariant<S>,
    B: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !A::holds(state) {
            violations.push(InvariantViolation::new(A::description()));
        }
        if !B::holds(state) {
            violations.push(InvariantViolation::new(B::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, A, B, C> InvariantSet<S> for (A, B, C)
where
    A: Invariant<S>,
    B: Invariant<S>,
    C: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !A::holds(state) {
            violations.push(InvariantViolation::new(A::description()));
        }
        if !B::holds(state) {
            violations.push(InvariantViolation::new(B::description()));
        }
        if !C::holds(state) {
            violations.push(InvariantViolation::new(C::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All session invariants as a composable set.
pub type GameInvariants = (
    MonotonicGridInvariant,
    AlternatingMarksInvariant,
    HistoryConsistentInvariant,
);
