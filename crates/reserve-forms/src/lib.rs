//! Reservation form page behavior
//!
//! The page glue (DOM lookups, event listeners) implements the small traits in
//! this crate and hands every input and submit event to a [`ReservationForm`].
//! The controller asks the validation engine, renders each outcome through an
//! [`ErrorDisplay`], and fires a [`SuccessSignal`] once per passing submit.

pub mod controller;
pub mod display;
pub mod success;

pub use controller::{ReservationForm, SubmitResult};
pub use display::{render_outcome, ErrorAttributes, ErrorDisplay, DATA_ERROR, DATA_ERROR_VISIBLE};
pub use success::{SuccessSignal, SuccessSurface, TimedSuccess, SUCCESS_REVERT_DELAY};

pub use reserve_validation as validation;
pub use reserve_validation::{
    reservation_form, FieldSource, FormConfig, FormReport, FormValidator, ValidationOutcome,
};
