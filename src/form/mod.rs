//! The bank-details sub-form.
//!
//! # Data Flow
//! ```text
//! keystroke  → on_field_change → FormState (buffer, errors, ifsc revision)
//! Validate   → validate_ifsc   → UserService::validate_ifsc → bank name + branch
//! Save       → submit          → validate_form → UserService::update_profile
//!                              → SharedUser merge → leave edit mode
//! render     → view            → FormView
//! ```
//!
//! # States
//! - Editing / not editing (verified records never edit)
//! - IFSC validated / not validated for the current code

pub mod controller;
pub mod fields;
pub mod state;
pub mod validation;
pub mod view;

pub use controller::{
    BankDetailsForm, ChangeOutcome, FormError, IgnoreReason, LookupOutcome, SubmitOutcome,
};
pub use fields::{Field, FieldErrors, FormData, UnknownField};
pub use state::FormState;
pub use validation::validate_form;
pub use view::{ButtonView, FieldView, FormView};
