use alloc::sync::Arc;
use core::{
    any::{Any, TypeId},
    fmt,
};

use crate::handlers::ObjectHandler;

type RenderFn = fn(&(dyn Any + Send + Sync), &mut fmt::Formatter<'_>) -> fmt::Result;

/// A type-erased user object together with the handler that renders it.
///
/// Cloning is cheap: the object itself is shared.
#[derive(Clone)]
pub struct ObjectValue {
    inner: Arc<dyn Any + Send + Sync>,
    type_id: TypeId,
    type_name: &'static str,
    render: RenderFn,
}

fn render_erased<T, H>(value: &(dyn Any + Send + Sync), f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: 'static,
    H: ObjectHandler<T>,
{
    match value.downcast_ref::<T>() {
        Some(value) => H::render(value, f),
        None => Err(fmt::Error),
    }
}

impl ObjectValue {
    /// Wraps `value`, to be rendered by the handler `H`.
    pub fn new<T, H>(value: T) -> Self
    where
        T: Send + Sync + 'static,
        H: ObjectHandler<T>,
    {
        Self {
            inner: Arc::new(value),
            type_id: TypeId::of::<T>(),
            type_name: core::any::type_name::<T>(),
            render: render_erased::<T, H>,
        }
    }

    /// The [`TypeId`] of the wrapped object.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// The full type name of the wrapped object.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the wrapped object if it is of type `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    pub(crate) fn as_any(&self) -> &(dyn Any + Send + Sync) {
        &*self.inner
    }
}

impl fmt::Display for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.render)(&*self.inner, f)
    }
}

impl fmt::Debug for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectValue")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Strips the module path from a type name, keeping generic arguments.
///
/// `alloc::vec::Vec<u8>` becomes `Vec<u8>`, `my_crate::errors::Oops` becomes
/// `Oops`.
pub fn short_type_name(full: &'static str) -> &'static str {
    let base_end = full.find('<').unwrap_or(full.len());
    match full[..base_end].rfind("::") {
        Some(index) => &full[index + 2..],
        None => full,
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, string::String};

    use super::*;
    use crate::handlers;

    #[test]
    fn test_object_renders_through_handler() {
        let object = ObjectValue::new::<_, handlers::Debug>(String::from("x"));
        assert_eq!(format!("{object}"), "\"x\"");
        assert_eq!(object.type_id(), TypeId::of::<String>());
        assert_eq!(object.downcast_ref::<String>().map(String::as_str), Some("x"));
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("alloc::vec::Vec<u8>"), "Vec<u8>");
        assert_eq!(short_type_name("u8"), "u8");
        assert_eq!(
            short_type_name("core::option::Option<alloc::string::String>"),
            "Option<alloc::string::String>"
        );
    }

    static_assertions::assert_impl_all!(ObjectValue: Send, Sync, Clone);
}
