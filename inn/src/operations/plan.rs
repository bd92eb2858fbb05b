//! Plan types for ledger operations.
//!
//! This module defines the plan structures that describe what actions
//! will be taken during an operation, without actually performing them.

use crate::reservation::{NewReservation, Reservation};

/// A single action to be taken during plan execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Insert a priced reservation; the store assigns its code.
    CreateReservation(NewReservation),

    /// Delete a persisted reservation.
    DeleteReservation(Reservation),
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::CreateReservation(r) => format!(
                "Create reservation for {} in room {} ({}, {} guest(s)) at {}",
                r.guest,
                r.room,
                r.stay,
                r.guests.total(),
                r.rate
            ),
            Self::DeleteReservation(r) => format!(
                "Delete reservation {} for {} in room {} ({})",
                r.code(),
                r.guest(),
                r.room(),
                r.stay()
            ),
        }
    }
}

/// A complete operation plan describing all actions to be taken.
///
/// Plans are generated during the planning phase and can be inspected,
/// logged, or executed. An empty plan means there is nothing to do, for
/// example because the guest cancelled at room selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use inn::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Book room HBB");
    /// assert_eq!(plan.description, "Book room HBB");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use inn::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Test")
    ///     .add_warning("This is a warning");
    ///
    /// assert_eq!(plan.warnings.len(), 1);
    /// ```
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns the reservation this plan would create, if any.
    #[must_use]
    pub fn pending_reservation(&self) -> Option<&NewReservation> {
        self.actions.iter().find_map(|action| match action {
            PlanAction::CreateReservation(r) => Some(r),
            PlanAction::DeleteReservation(_) => None,
        })
    }

    /// Returns the reservation this plan would delete, if any.
    #[must_use]
    pub fn doomed_reservation(&self) -> Option<&Reservation> {
        self.actions.iter().find_map(|action| match action {
            PlanAction::DeleteReservation(r) => Some(r),
            PlanAction::CreateReservation(_) => None,
        })
    }
}
