//! Shared user record.

use std::sync::{Arc, PoisonError, RwLock};

use crate::bank::UserProfile;
use crate::context::ContextError;

/// Handle to the user record shared across sub-forms.
#[derive(Debug, Clone, Default)]
pub struct SharedUser {
    inner: Arc<RwLock<Option<UserProfile>>>,
}

impl SharedUser {
    /// Create a handle holding the given record.
    pub fn new(user: Option<UserProfile>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(user)),
        }
    }

    /// Snapshot of the current record.
    pub fn get(&self) -> Option<UserProfile> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the record outright.
    pub fn set(&self, user: Option<UserProfile>) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = user;
    }

    /// Read a value derived from the current record.
    pub fn with<R>(&self, f: impl FnOnce(Option<&UserProfile>) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(guard.as_ref())
    }

    /// Functional update: build the next record from the current one.
    ///
    /// Fails without calling `f` when no record is loaded.
    pub fn update(
        &self,
        f: impl FnOnce(&UserProfile) -> UserProfile,
    ) -> Result<(), ContextError> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let next = match guard.as_ref() {
            Some(current) => f(current),
            None => return Err(ContextError::UserUnavailable),
        };
        *guard = Some(next);
        Ok(())
    }

    /// Whether the record's bank details are verified.
    pub fn is_bank_verified(&self) -> bool {
        self.with(|user| user.map(UserProfile::is_bank_verified).unwrap_or(false))
    }
}
