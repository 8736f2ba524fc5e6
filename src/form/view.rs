//! Rendered surface of the form.
//!
//! A framework-neutral description of what the user sees: field values,
//! which inputs are enabled, inline errors and the available buttons.

use std::fmt;

use crate::form::controller::BankDetailsForm;
use crate::form::state::FormState;
use crate::form::Field;

/// One labeled input with its inline error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: Field,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub disabled: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub enabled: bool,
}

/// Snapshot of the form as rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub title: &'static str,
    pub verified: bool,
    pub fields: Vec<FieldView>,
    pub validate_button: ButtonView,
    /// Shown only outside edit mode on unverified records.
    pub edit_button: Option<ButtonView>,
    /// Shown only in edit mode.
    pub save_button: Option<ButtonView>,
}

impl FormView {
    pub fn build(state: &FormState, verified: bool, loading: bool) -> Self {
        let inputs_disabled = loading || !state.is_editing || verified;

        let fields = Field::ALL
            .into_iter()
            .map(|field| FieldView {
                field,
                label: field.label(),
                placeholder: field.placeholder(),
                value: state.form_data.get(field).to_string(),
                disabled: field.is_derived() || inputs_disabled,
                error: state.errors.get(field).map(str::to_string),
            })
            .collect();

        let validate_button = ButtonView {
            label: if state.is_validating_ifsc {
                "Validating..."
            } else {
                "Validate"
            },
            enabled: !inputs_disabled && !state.is_validating_ifsc,
        };

        let edit_button = (!state.is_editing && !verified).then_some(ButtonView {
            label: "Edit",
            enabled: !loading,
        });

        let save_button = state.is_editing.then_some(ButtonView {
            label: if loading { "Saving..." } else { "Save Bank Details" },
            enabled: !loading && !verified && state.is_ifsc_validated,
        });

        Self {
            title: "Bank Details",
            verified,
            fields,
            validate_button,
            edit_button,
            save_button,
        }
    }

    pub fn field(&self, field: Field) -> Option<&FieldView> {
        self.fields.iter().find(|view| view.field == field)
    }
}

impl fmt::Display for ButtonView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.enabled {
            write!(f, "[{}]", self.label)
        } else {
            write!(f, "({})", self.label)
        }
    }
}

impl fmt::Display for FormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        if self.verified {
            write!(f, " (verified)")?;
        }
        writeln!(f)?;

        for field in &self.fields {
            let value = if field.value.is_empty() {
                format!("<{}>", field.placeholder)
            } else {
                field.value.clone()
            };
            let lock = if field.disabled { " [locked]" } else { "" };
            writeln!(f, "  {}: {}{}", field.label, value, lock)?;
            if let Some(error) = &field.error {
                writeln!(f, "    ! {}", error)?;
            }
        }

        let mut buttons = vec![self.validate_button.to_string()];
        buttons.extend(self.edit_button.iter().map(ToString::to_string));
        buttons.extend(self.save_button.iter().map(ToString::to_string));
        writeln!(f, "  {}", buttons.join(" "))
    }
}

impl BankDetailsForm {
    /// Current rendered surface.
    pub fn view(&self) -> FormView {
        let verified = self.is_verified();
        let loading = self.is_loading();
        FormView::build(&self.snapshot(), verified, loading)
    }
}
