//! Bank account domain types.
//!
//! # Responsibilities
//! - Model the bank-details record exchanged with the profile service
//! - Model the user profile that owns it
//! - Recognise and normalise IFSC routing codes
//!
//! # Design Decisions
//! - Wire format is camelCase JSON, matching the profile service
//! - Unknown profile attributes are carried through untouched

pub mod ifsc;
pub mod types;

pub use ifsc::{is_valid_ifsc, normalize_ifsc};
pub use types::{BankDetails, UserProfile};
