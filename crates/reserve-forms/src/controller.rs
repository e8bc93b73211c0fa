// File: src/controller.rs
// Purpose: Routes input and submit events through the validators to the page

use reserve_validation::{FieldSource, FormReport, FormValidator, ValidationOutcome};

use crate::display::{render_outcome, ErrorDisplay};
use crate::success::SuccessSignal;

/// What happened on a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResult {
    pub report: FormReport,
    /// The browser's own submission is always suppressed.
    pub default_prevented: bool,
    /// `true` when the success signal fired for this attempt.
    pub success_fired: bool,
}

/// Controller for the reservation form.
///
/// Owns the validators (built once at startup) and the two presentation
/// collaborators. The validators are never mutated by events.
pub struct ReservationForm<D, S> {
    validator: FormValidator,
    display: D,
    success: S,
}

impl<D, S> ReservationForm<D, S>
where
    D: ErrorDisplay,
    S: SuccessSignal,
{
    pub fn new(validator: FormValidator, display: D, success: S) -> Self {
        Self {
            validator,
            display,
            success,
        }
    }

    /// Live validation for one keystroke in `field`.
    ///
    /// Fields without a validator yield `None` and have their error
    /// indicator cleared, the same as a passing value.
    pub fn on_input(&mut self, field: &str, value: Option<&str>) -> Option<ValidationOutcome> {
        let outcome = self.validator.validate_field(field, value);
        let message = outcome.as_ref().and_then(|outcome| outcome.as_deref());
        render_outcome(&mut self.display, field, message);
        outcome
    }

    /// Validates every field, renders each outcome in registration order and
    /// fires the success signal exactly once when all fields pass.
    pub fn on_submit<F>(&mut self, data: &F) -> SubmitResult
    where
        F: FieldSource + ?Sized,
    {
        let report = self.validator.validate_all(data);
        for field in &report.fields {
            render_outcome(&mut self.display, &field.field, field.error.as_deref());
        }

        tracing::debug!(
            fields = report.len(),
            errors = report.errors().count(),
            "reservation form submitted"
        );

        let success_fired = report.is_valid();
        if success_fired {
            tracing::info!("reservation accepted");
            self.success.fire();
        }

        SubmitResult {
            report,
            default_prevented: true,
            success_fired,
        }
    }

    pub fn validator(&self) -> &FormValidator {
        &self.validator
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn success(&self) -> &S {
        &self.success
    }

    pub fn into_parts(self) -> (FormValidator, D, S) {
        (self.validator, self.display, self.success)
    }
}
