use alloc::boxed::Box;
use alloc::sync::Arc;
use core::fmt;

use crate::Reflect;
use crate::info::{ReflectKind, Typed};
use crate::ops::Indirect;
use crate::reflection::impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Option

impl<T: Typed> Typed for Option<T> {
    const KIND: ReflectKind = ReflectKind::Indirect;
}

impl<T: Typed> Reflect for Option<T> {
    impl_reflect_cast_fn!(Indirect);

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => f.debug_tuple("Some").field(&value.as_reflect()).finish(),
            None => f.write_str("None"),
        }
    }
}

impl<T: Typed> Indirect for Option<T> {
    #[inline]
    fn is_present(&self) -> bool {
        self.is_some()
    }

    #[inline]
    fn target(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(Reflect::as_reflect)
    }

    #[inline]
    fn target_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn target_kind(&self) -> ReflectKind {
        T::KIND
    }
}

// -----------------------------------------------------------------------------
// Box

impl<T: Typed> Typed for Box<T> {
    const KIND: ReflectKind = ReflectKind::Indirect;
}

impl<T: Typed> Reflect for Box<T> {
    impl_reflect_cast_fn!(Indirect);

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).reflect_debug(f)
    }
}

impl<T: Typed> Indirect for Box<T> {
    #[inline]
    fn is_present(&self) -> bool {
        true
    }

    #[inline]
    fn target(&self) -> Option<&dyn Reflect> {
        Some((**self).as_reflect())
    }

    #[inline]
    fn target_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some((**self).as_reflect_mut())
    }

    #[inline]
    fn target_kind(&self) -> ReflectKind {
        T::KIND
    }
}

// -----------------------------------------------------------------------------
// Arc

impl<T: Typed> Typed for Arc<T> {
    const KIND: ReflectKind = ReflectKind::Indirect;
}

impl<T: Typed> Reflect for Arc<T> {
    impl_reflect_cast_fn!(Indirect);

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).reflect_debug(f)
    }
}

impl<T: Typed> Indirect for Arc<T> {
    #[inline]
    fn is_present(&self) -> bool {
        true
    }

    #[inline]
    fn target(&self) -> Option<&dyn Reflect> {
        Some((**self).as_reflect())
    }

    /// Only available while this is the sole owner of the value.
    #[inline]
    fn target_mut(&mut self) -> Option<&mut dyn Reflect> {
        Arc::get_mut(self).map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn target_kind(&self) -> ReflectKind {
        T::KIND
    }
}
