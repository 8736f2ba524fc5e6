//! Remote user-profile service.
//!
//! # Data Flow
//! ```text
//! BankDetailsForm
//!     → UserService::validate_ifsc (IFSC → bank name + branch)
//!     → UserService::update_profile (bank details → saved record)
//!
//! HttpUserService
//!     → reqwest client (bearer auth, X-Request-Id)
//!     → tokio timeout per call
//!     → ServiceError with the backend's message when it sends one
//! ```
//!
//! # Design Decisions
//! - The form depends on the trait only; tests swap in fakes
//! - No retries: a failed call is reported once and the user retries

pub mod client;
pub mod types;

use async_trait::async_trait;
use thiserror::Error;

use crate::bank::UserProfile;

pub use client::HttpUserService;
pub use types::{IfscLookup, ProfileUpdate, UpdatedProfile};

/// Errors returned by the profile service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The service answered with a non-success status.
    #[error("service returned status {status}")]
    Status {
        status: u16,
        /// Human-readable message from the error body, if any.
        message: Option<String>,
    },

    /// The request could not be sent or the response not read.
    #[error("request failed: {0}")]
    Transport(String),

    /// The request did not complete in time.
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// The response body did not have the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The request could not be built.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ServiceError {
    /// Message the backend supplied for the user, if any.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            ServiceError::Status {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Operations the bank-details form consumes from the profile backend.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Fetch the signed-in user's profile.
    async fn get_profile(&self) -> ServiceResult<UserProfile>;

    /// Resolve an IFSC code to its bank and branch.
    async fn validate_ifsc(&self, code: &str) -> ServiceResult<IfscLookup>;

    /// Save the given bank details and return the stored record.
    async fn update_profile(&self, update: ProfileUpdate) -> ServiceResult<UpdatedProfile>;
}
