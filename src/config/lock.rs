#[cfg(feature = "std")]
use std::sync as impl_;

#[cfg(not(feature = "std"))]
use spin as impl_;

use alloc::boxed::Box;

/// A slot written at most once, holding a value leaked for the rest of the
/// program.
#[repr(transparent)]
pub(crate) struct InstallOnce<T: 'static + Send + Sync>(impl_::RwLock<Option<&'static T>>);

impl<T: 'static + Send + Sync> InstallOnce<T> {
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self(impl_::RwLock::new(None))
    }

    #[inline]
    pub(crate) fn get(&'static self) -> Option<&'static T> {
        #[cfg(not(feature = "std"))]
        let guard = self.0.read();

        #[cfg(feature = "std")]
        let guard = self.0.read().unwrap_or_else(impl_::PoisonError::into_inner);

        *guard
    }

    /// Stores `value`, or hands it back when the slot is already taken.
    pub(crate) fn install(&'static self, value: T) -> Result<(), T> {
        #[cfg(not(feature = "std"))]
        let mut guard = self.0.write();

        #[cfg(feature = "std")]
        let mut guard = self.0.write().unwrap_or_else(impl_::PoisonError::into_inner);

        if guard.is_some() {
            return Err(value);
        }
        *guard = Some(Box::leak(Box::new(value)));
        Ok(())
    }
}
