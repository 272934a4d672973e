//! Types that can be reflected but never traversed or read as a scalar.
//!
//! Records may hold fields of these types; path resolution reports them as
//! [`ReflectKind::Unsupported`] and bulk traversal skips them.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;
use std::collections::HashSet;

use crate::Reflect;
use crate::info::{ReflectKind, Typed};
use crate::ops::{ReflectMut, ReflectRef};

macro_rules! impl_reflect_unsupported {
    (@body) => {
        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> ReflectKind {
            ReflectKind::Unsupported
        }

        #[inline]
        fn reflect_ref(&self) -> ReflectRef<'_> {
            ReflectRef::Unsupported(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> ReflectMut<'_> {
            ReflectMut::Unsupported(self)
        }
    };
    ($($ty:ty),* $(,)?) => {
        $(
            impl Typed for $ty {
                const KIND: ReflectKind = ReflectKind::Unsupported;
            }

            impl Reflect for $ty {
                impl_reflect_unsupported!(@body);

                fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Debug::fmt(self, f)
                }
            }
        )*
    };
}

impl_reflect_unsupported!(u8, u16, u32, u64, u128, usize, i8, i16, i128, isize, char, ());

// Containers print their type path only, their items may not be `Debug`.

impl<T: Typed> Typed for Vec<T> {
    const KIND: ReflectKind = ReflectKind::Unsupported;
}

impl<T: Typed> Reflect for Vec<T> {
    impl_reflect_unsupported!(@body);
}

impl<T: Typed, const N: usize> Typed for [T; N] {
    const KIND: ReflectKind = ReflectKind::Unsupported;
}

impl<T: Typed, const N: usize> Reflect for [T; N] {
    impl_reflect_unsupported!(@body);
}

impl<T: Typed + Ord> Typed for BTreeSet<T> {
    const KIND: ReflectKind = ReflectKind::Unsupported;
}

impl<T: Typed + Ord> Reflect for BTreeSet<T> {
    impl_reflect_unsupported!(@body);
}

impl<T, S> Typed for HashSet<T, S>
where
    T: Typed,
    S: Send + Sync + 'static,
{
    const KIND: ReflectKind = ReflectKind::Unsupported;
}

impl<T, S> Reflect for HashSet<T, S>
where
    T: Typed,
    S: Send + Sync + 'static,
{
    impl_reflect_unsupported!(@body);
}
