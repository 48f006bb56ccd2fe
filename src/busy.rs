//! In-flight guard
//!
//! One request per store at a time. The flag doubles as the `disabled`
//! state of the control that started the request.

use leptos::prelude::*;

use crate::error::{AppError, AppResult};

pub struct BusyGuard(RwSignal<bool>);

impl BusyGuard {
    pub fn acquire(flag: RwSignal<bool>) -> AppResult<Self> {
        if flag.get_untracked() {
            return Err(AppError::Busy);
        }
        flag.set(true);
        Ok(Self(flag))
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        // the owning component may be gone by the time a request settles
        let _ = self.0.try_set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_is_rejected_until_release() {
        let flag = RwSignal::new(false);

        let guard = BusyGuard::acquire(flag).unwrap();
        assert!(flag.get_untracked());
        assert!(matches!(BusyGuard::acquire(flag), Err(AppError::Busy)));

        drop(guard);
        assert!(!flag.get_untracked());
        assert!(BusyGuard::acquire(flag).is_ok());
    }
}
