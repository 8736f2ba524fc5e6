//! Shared form context injected into every sub-form.
//!
//! # Responsibilities
//! - Hold the authoritative user record shared by all profile sub-forms
//! - Hold the loading flag that disables inputs while any sub-form saves
//!
//! # Design Decisions
//! - Passed explicitly to each form instead of living in a global
//! - Both handles are cheap to clone and point at the same state

pub mod loading;
pub mod user;

use thiserror::Error;

use crate::bank::UserProfile;

pub use loading::{LoadingFlag, LoadingGuard};
pub use user::SharedUser;

/// Errors raised by context operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// The shared user record has not been loaded.
    #[error("User data is not available")]
    UserUnavailable,
}

/// Collaborators shared by the profile sub-forms.
#[derive(Debug, Clone, Default)]
pub struct FormContext {
    pub user: SharedUser,
    pub loading: LoadingFlag,
}

impl FormContext {
    /// Context seeded with a loaded user record.
    pub fn with_user(user: UserProfile) -> Self {
        Self {
            user: SharedUser::new(Some(user)),
            loading: LoadingFlag::default(),
        }
    }
}
