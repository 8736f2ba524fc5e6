//! Request and response bodies of the profile service.

use serde::{Deserialize, Serialize};

use crate::bank::BankDetails;

/// Result of resolving an IFSC code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IfscLookup {
    pub bank_name: String,
    pub branch: String,
}

/// Partial profile update carrying only bank details.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub bank_details: BankDetails,
}

/// Profile as returned after an update. Other attributes are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedProfile {
    pub bank_details: BankDetails,
}

/// Error body some endpoints send alongside a failure status.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_body_shape() {
        let update = ProfileUpdate {
            bank_details: BankDetails {
                ifsc_code: "HDFC0001234".to_string(),
                ..BankDetails::default()
            },
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["bankDetails"]["ifscCode"], "HDFC0001234");
        assert_eq!(json["bankDetails"]["isVerified"], false);
    }

    #[test]
    fn test_updated_profile_ignores_other_fields() {
        let json = r#"{"id":"u-1","bankDetails":{"accountNumber":"42","isVerified":false},"email":"x@y.z"}"#;
        let updated: UpdatedProfile = serde_json::from_str(json).unwrap();
        assert_eq!(updated.bank_details.account_number, "42");
    }
}
