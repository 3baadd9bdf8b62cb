use alloc::{string::String, sync::Arc};
use core::{
    any::{Any, TypeId},
    fmt,
};

use hashbrown::HashMap;

type StoredFormatter = Arc<dyn Fn(&(dyn Any + Send + Sync)) -> Option<String> + Send + Sync>;

/// Custom formatters registered per Rust type.
#[derive(Clone, Default)]
pub(crate) struct FormatterMap {
    /// # Invariant
    ///
    /// The formatter stored under `TypeId::of::<T>()` only ever succeeds on
    /// values of type `T`.
    map: HashMap<TypeId, (&'static str, StoredFormatter), rustc_hash::FxBuildHasher>,
}

impl fmt::Debug for FormatterMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.map.values().map(|(name, _)| name))
            .finish()
    }
}

impl FormatterMap {
    pub(crate) fn insert<T, F>(&mut self, formatter: F)
    where
        T: 'static,
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        let stored: StoredFormatter =
            Arc::new(move |value: &(dyn Any + Send + Sync)| value.downcast_ref::<T>().map(&formatter));
        self.map
            .insert(TypeId::of::<T>(), (core::any::type_name::<T>(), stored));
    }

    pub(crate) fn format(&self, type_id: TypeId, value: &(dyn Any + Send + Sync)) -> Option<String> {
        let (_, formatter) = self.map.get(&type_id)?;
        formatter(value)
    }

    pub(crate) fn contains(&self, type_id: TypeId) -> bool {
        self.map.contains_key(&type_id)
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
    }
}
