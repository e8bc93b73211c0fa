//! Reservation form validation engine
//!
//! A small rule engine: each field owns an ordered list of [`Rule`]s, a
//! [`FieldValidator`] reports the message of the first rule that fails, and
//! a [`FormValidator`] answers both live single-field queries and whole-form
//! submit checks. Invalid input is data (`Some(message)`), never an error.
//!
//! Used by the page controller in `reserve-forms`, the WASM bindings and the
//! `reserve` command line tool.

pub mod config;
pub mod email;
pub mod error;
pub mod field;
pub mod form;
pub mod numeric;
pub mod rule;

pub use config::{reservation_form, FieldConfig, FormConfig, RuleConfig};
pub use email::is_valid_email;
pub use error::ConfigError;
pub use field::{FieldValidator, ValidationOutcome};
pub use form::{FieldReport, FieldSource, FormReport, FormValidator};
pub use numeric::is_numeric;
pub use rule::{Rule, RuleKind};
