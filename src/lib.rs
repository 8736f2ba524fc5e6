//! Bank account details sub-form with IFSC lookup.
//!
//! The form keeps a local edit buffer of a user's bank details, resolves the
//! IFSC routing code through the profile service, and saves the record back
//! as unverified. Collaborators are injected: the profile service, the
//! notification sink and the shared form context.

// Domain
pub mod bank;
pub mod form;

// Collaborators
pub mod context;
pub mod notify;
pub mod service;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use bank::{BankDetails, UserProfile};
pub use config::AppConfig;
pub use context::FormContext;
pub use form::BankDetailsForm;
pub use service::{HttpUserService, UserService};
