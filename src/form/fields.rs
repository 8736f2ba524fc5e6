//! Field identifiers, the edit buffer and per-field errors.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::bank::BankDetails;

/// One of the five inputs of the bank-details form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    AccountHolderName,
    AccountNumber,
    IfscCode,
    BankName,
    Branch,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 5] = [
        Field::AccountHolderName,
        Field::AccountNumber,
        Field::IfscCode,
        Field::BankName,
        Field::Branch,
    ];

    /// Input name, as used on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Field::AccountHolderName => "accountHolderName",
            Field::AccountNumber => "accountNumber",
            Field::IfscCode => "ifscCode",
            Field::BankName => "bankName",
            Field::Branch => "branch",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::AccountHolderName => "Account Holder Name",
            Field::AccountNumber => "Account Number",
            Field::IfscCode => "IFSC Code",
            Field::BankName => "Bank Name",
            Field::Branch => "Branch",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::AccountHolderName => "Enter account holder name",
            Field::AccountNumber => "Enter account number",
            Field::IfscCode => "Enter IFSC code",
            Field::BankName => "Bank name (auto-filled after IFSC validation)",
            Field::Branch => "Branch (auto-filled after IFSC validation)",
        }
    }

    /// Filled in by an IFSC lookup, never typed.
    pub fn is_derived(self) -> bool {
        matches!(self, Field::BankName | Field::Branch)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised field name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// The form's edit buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub account_holder_name: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub bank_name: String,
    pub branch: String,
}

impl FormData {
    /// Buffer seeded from stored details, or empty.
    pub fn from_details(details: Option<&BankDetails>) -> Self {
        match details {
            Some(details) => Self {
                account_holder_name: details.account_holder_name.clone(),
                account_number: details.account_number.clone(),
                ifsc_code: details.ifsc_code.clone(),
                bank_name: details.bank_name.clone(),
                branch: details.branch.clone(),
            },
            None => Self::default(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::AccountHolderName => &self.account_holder_name,
            Field::AccountNumber => &self.account_number,
            Field::IfscCode => &self.ifsc_code,
            Field::BankName => &self.bank_name,
            Field::Branch => &self.branch,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::AccountHolderName => &mut self.account_holder_name,
            Field::AccountNumber => &mut self.account_number,
            Field::IfscCode => &mut self.ifsc_code,
            Field::BankName => &mut self.bank_name,
            Field::Branch => &mut self.branch,
        }
    }

    pub fn has_derived(&self) -> bool {
        !self.bank_name.is_empty() || !self.branch.is_empty()
    }

    pub fn clear_derived(&mut self) {
        self.bank_name.clear();
        self.branch.clear();
    }

    /// Record to send to the profile service.
    pub fn to_bank_details(&self, is_verified: bool) -> BankDetails {
        BankDetails {
            account_holder_name: self.account_holder_name.clone(),
            account_number: self.account_number.clone(),
            ifsc_code: self.ifsc_code.clone(),
            bank_name: self.bank_name.clone(),
            branch: self.branch.clone(),
            is_verified,
        }
    }
}

/// Inline error messages keyed by field. Absent means no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    messages: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            self.messages.remove(&field);
        } else {
            self.messages.insert(field, message);
        }
    }

    pub fn clear(&mut self, field: Field) {
        self.messages.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.messages
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}
