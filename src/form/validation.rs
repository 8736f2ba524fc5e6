//! Field validation.

use crate::bank::is_valid_ifsc;
use crate::form::fields::{FieldErrors, FormData};
use crate::form::Field;

pub const ACCOUNT_HOLDER_NAME_REQUIRED: &str = "Account holder name is required";
pub const ACCOUNT_NUMBER_REQUIRED: &str = "Account number is required";
pub const INVALID_IFSC_FORMAT: &str = "Invalid IFSC code format";
pub const BANK_NAME_REQUIRED: &str = "Bank name is required";
pub const BRANCH_REQUIRED: &str = "Branch is required";

/// Validate every field of the buffer. An empty result means the form is valid.
pub fn validate_form(data: &FormData) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if data.account_holder_name.is_empty() {
        errors.set(Field::AccountHolderName, ACCOUNT_HOLDER_NAME_REQUIRED);
    }
    if data.account_number.is_empty() {
        errors.set(Field::AccountNumber, ACCOUNT_NUMBER_REQUIRED);
    }
    if !is_valid_ifsc(&data.ifsc_code) {
        errors.set(Field::IfscCode, INVALID_IFSC_FORMAT);
    }
    if data.bank_name.is_empty() {
        errors.set(Field::BankName, BANK_NAME_REQUIRED);
    }
    if data.branch.is_empty() {
        errors.set(Field::Branch, BRANCH_REQUIRED);
    }

    errors
}
