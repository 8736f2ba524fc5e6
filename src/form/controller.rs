//! Bank-details form controller.
//!
//! # Responsibilities
//! - Apply typed input under the edit/verified/loading rules
//! - Run the IFSC lookup and attach bank name and branch
//! - Validate and submit the record, then merge it into the shared user
//! - Report every remote outcome through the notifier
//!
//! # Design Decisions
//! - Handlers take `&self`; state sits behind a mutex never held across `.await`
//! - In-flight flags make a second concurrent trigger a no-op
//! - Flags are released by guards, so a dropped future cannot leave them set

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

use crate::bank::{is_valid_ifsc, normalize_ifsc, BankDetails};
use crate::config::FormConfig;
use crate::context::{ContextError, FormContext};
use crate::form::fields::{Field, FieldErrors, FormData};
use crate::form::state::FormState;
use crate::form::validation::{validate_form, INVALID_IFSC_FORMAT};
use crate::notify::{Notifier, Toast};
use crate::observability::metrics;
use crate::service::{IfscLookup, ProfileUpdate, ServiceError, UserService};

const LOOKUP_FAILED_MESSAGE: &str = "Invalid IFSC code. Please try again.";
const SAVE_FAILED_MESSAGE: &str = "Failed to save bank details. Please try again.";
const SAVED_MESSAGE: &str =
    "Your bank details have been successfully updated and are pending verification.";

/// Why a user action had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Bank name and branch only come from a lookup.
    DerivedField,
    /// The form is not in edit mode.
    NotEditing,
    /// The record is verified and read-only.
    Verified,
    /// A save is running somewhere in the shared context.
    Loading,
    /// The same action is already outstanding on this form.
    InFlight,
    /// Submission needs a validated IFSC code first.
    IfscNotValidated,
}

/// Result of typing into a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOutcome {
    Applied,
    Ignored(IgnoreReason),
}

/// Result of an IFSC lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Bank name and branch are attached to the code.
    Validated(IfscLookup),
    /// The code is malformed; no request was made.
    InvalidFormat,
    /// The service rejected the code or could not be reached.
    Failed(ServiceError),
    /// The code was edited while the request was outstanding.
    Stale,
    Ignored(IgnoreReason),
}

/// Result of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The service stored the record shown here.
    Saved(BankDetails),
    /// Local validation failed; errors are shown inline.
    Invalid(FieldErrors),
    /// The service refused or could not be reached; edit mode is kept.
    Failed(ServiceError),
    Ignored(IgnoreReason),
}

/// Faults that are programming errors rather than user-facing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("cannot merge saved bank details: {0}")]
    Context(#[from] ContextError),
}

#[derive(Debug, Clone, Copy)]
enum Flight {
    Lookup,
    Submit,
}

/// Clears an in-flight flag on drop.
struct InFlightGuard<'a> {
    state: &'a Mutex<FormState>,
    flight: Flight,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match self.flight {
            Flight::Lookup => state.is_validating_ifsc = false,
            Flight::Submit => state.is_submitting = false,
        }
    }
}

/// Bank account details sub-form with IFSC lookup.
pub struct BankDetailsForm {
    state: Mutex<FormState>,
    context: FormContext,
    service: Arc<dyn UserService>,
    notifier: Arc<dyn Notifier>,
    options: FormConfig,
}

impl BankDetailsForm {
    /// Create a form seeded from the shared user's bank details.
    pub fn new(
        context: FormContext,
        service: Arc<dyn UserService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let state = context
            .user
            .with(|user| FormState::new(user.and_then(|u| u.bank_details.as_ref())));
        Self {
            state: Mutex::new(state),
            context,
            service,
            notifier,
            options: FormConfig::default(),
        }
    }

    /// Replace the default form options.
    pub fn with_config(mut self, options: FormConfig) -> Self {
        self.options = options;
        self
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> FormState {
        self.lock().clone()
    }

    pub fn form_data(&self) -> FormData {
        self.lock().form_data.clone()
    }

    pub fn errors(&self) -> FieldErrors {
        self.lock().errors.clone()
    }

    pub fn is_verified(&self) -> bool {
        self.context.user.is_bank_verified()
    }

    pub fn is_loading(&self) -> bool {
        self.context.loading.is_loading()
    }

    /// Edit mode is on and the record is not verified.
    pub fn is_editing(&self) -> bool {
        let editing = self.lock().is_editing;
        editing && !self.is_verified()
    }

    pub fn is_ifsc_validated(&self) -> bool {
        self.lock().is_ifsc_validated
    }

    pub fn is_validating_ifsc(&self) -> bool {
        self.lock().is_validating_ifsc
    }

    /// Why inputs are currently disabled, if they are.
    fn input_block(&self, state: &FormState) -> Option<IgnoreReason> {
        if self.is_loading() {
            Some(IgnoreReason::Loading)
        } else if !state.is_editing {
            Some(IgnoreReason::NotEditing)
        } else if self.is_verified() {
            Some(IgnoreReason::Verified)
        } else {
            None
        }
    }

    /// Apply a typed value to one field.
    pub fn on_field_change(&self, field: Field, raw_value: &str) -> ChangeOutcome {
        if field.is_derived() {
            return ChangeOutcome::Ignored(IgnoreReason::DerivedField);
        }

        let mut state = self.lock();
        if let Some(reason) = self.input_block(&state) {
            tracing::debug!(field = %field, ?reason, "Ignoring input on disabled field");
            return ChangeOutcome::Ignored(reason);
        }
        state.apply_change(field, raw_value);
        ChangeOutcome::Applied
    }

    /// Validate the whole buffer and show the errors inline.
    pub fn validate_form(&self) -> bool {
        let mut state = self.lock();
        state.errors = validate_form(&state.form_data);
        state.errors.is_empty()
    }

    /// Resolve the current IFSC code to a bank name and branch.
    pub async fn validate_ifsc(&self) -> LookupOutcome {
        let (code, revision) = {
            let mut state = self.lock();
            if let Some(reason) = self.input_block(&state) {
                return LookupOutcome::Ignored(reason);
            }
            if state.is_validating_ifsc {
                return LookupOutcome::Ignored(IgnoreReason::InFlight);
            }
            if !is_valid_ifsc(&state.form_data.ifsc_code) {
                state.errors.set(Field::IfscCode, INVALID_IFSC_FORMAT);
                state.invalidate_ifsc();
                metrics::record_ifsc_lookup("invalid_format");
                return LookupOutcome::InvalidFormat;
            }
            state.is_validating_ifsc = true;
            (normalize_ifsc(&state.form_data.ifsc_code), state.ifsc_revision)
        };
        let _in_flight = InFlightGuard {
            state: &self.state,
            flight: Flight::Lookup,
        };

        tracing::debug!(ifsc = %code, "Looking up IFSC code");
        let result = self.service.validate_ifsc(&code).await;

        let (outcome, toast) = {
            let mut state = self.lock();
            if self.options.discard_stale_lookups && state.ifsc_revision != revision {
                tracing::info!(ifsc = %code, "Discarding lookup for an edited IFSC code");
                metrics::record_ifsc_lookup("stale");
                return LookupOutcome::Stale;
            }

            match result {
                Ok(lookup) => {
                    state.accept_lookup(&lookup);
                    tracing::info!(
                        ifsc = %code,
                        bank_name = %lookup.bank_name,
                        branch = %lookup.branch,
                        "IFSC code validated"
                    );
                    metrics::record_ifsc_lookup("validated");
                    let toast = Toast::info(
                        "IFSC Validated",
                        format!("Bank: {}, Branch: {}", lookup.bank_name, lookup.branch),
                    );
                    (LookupOutcome::Validated(lookup), toast)
                }
                Err(e) => {
                    state.invalidate_ifsc();
                    tracing::warn!(ifsc = %code, error = %e, "IFSC lookup failed");
                    metrics::record_ifsc_lookup("failed");
                    let toast = Toast::destructive(
                        "IFSC Validation Failed",
                        e.user_message().unwrap_or(LOOKUP_FAILED_MESSAGE),
                    );
                    (LookupOutcome::Failed(e), toast)
                }
            }
        };

        self.notifier.notify(toast);
        outcome
    }

    /// Validate and save the buffer.
    ///
    /// Returns `Err` only when the shared user record is missing after a
    /// successful save.
    pub async fn submit(&self) -> Result<SubmitOutcome, FormError> {
        let details = {
            let mut state = self.lock();
            if !state.is_editing {
                return Ok(SubmitOutcome::Ignored(IgnoreReason::NotEditing));
            }
            if !state.is_ifsc_validated {
                return Ok(SubmitOutcome::Ignored(IgnoreReason::IfscNotValidated));
            }
            if self.is_verified() {
                return Ok(SubmitOutcome::Ignored(IgnoreReason::Verified));
            }
            if state.is_submitting {
                return Ok(SubmitOutcome::Ignored(IgnoreReason::InFlight));
            }
            if self.is_loading() {
                return Ok(SubmitOutcome::Ignored(IgnoreReason::Loading));
            }

            state.errors = validate_form(&state.form_data);
            if !state.errors.is_empty() {
                tracing::debug!(errors = state.errors.len(), "Submission blocked by validation");
                metrics::record_submission("invalid");
                return Ok(SubmitOutcome::Invalid(state.errors.clone()));
            }

            state.is_submitting = true;
            state.form_data.to_bank_details(false)
        };
        let _in_flight = InFlightGuard {
            state: &self.state,
            flight: Flight::Submit,
        };
        let _loading = self.context.loading.begin();

        let result = self
            .service
            .update_profile(ProfileUpdate {
                bank_details: details,
            })
            .await;

        match result {
            Ok(updated) => {
                let saved = updated.bank_details;
                self.context
                    .user
                    .update(|prev| prev.with_bank_details(saved.clone()))?;
                {
                    let mut state = self.lock();
                    state.is_editing = false;
                    state.invalidate_ifsc();
                }
                tracing::info!(ifsc = %saved.ifsc_code, "Bank details saved");
                metrics::record_submission("saved");
                self.notifier
                    .notify(Toast::info("Bank Details Saved", SAVED_MESSAGE));
                Ok(SubmitOutcome::Saved(saved))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Saving bank details failed");
                metrics::record_submission("failed");
                self.notifier.notify(Toast::destructive(
                    "Error",
                    e.user_message().unwrap_or(SAVE_FAILED_MESSAGE),
                ));
                Ok(SubmitOutcome::Failed(e))
            }
        }
    }

    /// Enter edit mode. Verified records stay read-only.
    pub fn begin_edit(&self) -> bool {
        if self.is_verified() || self.is_loading() {
            return false;
        }
        self.lock().is_editing = true;
        true
    }
}
