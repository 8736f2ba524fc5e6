//! Bank details and user profile records.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Reads a text attribute that the backend may send as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Bank account details attached to a user profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BankDetails {
    /// Name on the account.
    #[serde(deserialize_with = "null_as_empty")]
    pub account_holder_name: String,

    /// Account number, stored as entered.
    #[serde(deserialize_with = "null_as_empty")]
    pub account_number: String,

    /// IFSC routing code, upper-cased.
    #[serde(deserialize_with = "null_as_empty")]
    pub ifsc_code: String,

    /// Bank name resolved from the IFSC code.
    #[serde(deserialize_with = "null_as_empty")]
    pub bank_name: String,

    /// Branch resolved from the IFSC code.
    #[serde(deserialize_with = "null_as_empty")]
    pub branch: String,

    /// Set by the backend once the account has been confirmed out-of-band.
    pub is_verified: bool,
}

/// Shared user record. Only `bank_details` is owned by this crate.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Backend identifier of the user, kept in whatever JSON form it arrives.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub id: Value,

    /// Bank details, absent until first saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_details: Option<BankDetails>,

    /// Remaining profile attributes, preserved as received.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl UserProfile {
    /// Whether the backend has verified the attached bank details.
    pub fn is_bank_verified(&self) -> bool {
        self.bank_details
            .as_ref()
            .map(|details| details.is_verified)
            .unwrap_or(false)
    }

    /// Copy of this profile with its bank details replaced.
    pub fn with_bank_details(&self, bank_details: BankDetails) -> Self {
        Self {
            bank_details: Some(bank_details),
            ..self.clone()
        }
    }
}
