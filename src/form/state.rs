//! Local state of one form instance.

use crate::bank::{normalize_ifsc, BankDetails};
use crate::form::fields::{FieldErrors, FormData};
use crate::form::Field;
use crate::service::IfscLookup;

/// Everything the form tracks between user actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// Edit buffer.
    pub form_data: FormData,

    /// Inline errors.
    pub errors: FieldErrors,

    /// Inputs are enabled.
    pub is_editing: bool,

    /// `bank_name`/`branch` were confirmed for the current IFSC code.
    pub is_ifsc_validated: bool,

    /// An IFSC lookup is outstanding.
    pub is_validating_ifsc: bool,

    /// A profile update is outstanding.
    pub is_submitting: bool,

    /// Bumped on every IFSC edit.
    pub ifsc_revision: u64,
}

impl FormState {
    /// Initial state for the stored details. Verified records start read-only.
    pub fn new(details: Option<&BankDetails>) -> Self {
        let is_verified = details.map(|d| d.is_verified).unwrap_or(false);
        Self {
            form_data: FormData::from_details(details),
            errors: FieldErrors::default(),
            is_editing: !is_verified,
            is_ifsc_validated: false,
            is_validating_ifsc: false,
            is_submitting: false,
            ifsc_revision: 0,
        }
    }

    /// Store a typed value. Editing the IFSC code drops any derived values.
    pub(crate) fn apply_change(&mut self, field: Field, raw: &str) {
        let value = if field == Field::IfscCode {
            normalize_ifsc(raw)
        } else {
            raw.to_string()
        };
        *self.form_data.slot_mut(field) = value;
        self.errors.clear(field);

        if field == Field::IfscCode {
            self.ifsc_revision += 1;
            if self.is_ifsc_validated || self.form_data.has_derived() {
                self.invalidate_ifsc();
            }
        }
    }

    pub(crate) fn invalidate_ifsc(&mut self) {
        self.is_ifsc_validated = false;
        self.form_data.clear_derived();
    }

    pub(crate) fn accept_lookup(&mut self, lookup: &IfscLookup) {
        self.form_data.bank_name = lookup.bank_name.clone();
        self.form_data.branch = lookup.branch.clone();
        self.is_ifsc_validated = true;
        self.errors.clear(Field::IfscCode);
        self.errors.clear(Field::BankName);
        self.errors.clear(Field::Branch);
    }
}
