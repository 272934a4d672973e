use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use std::collections::HashMap as StdHashMap;

use hashbrown::HashMap as HashbrownMap;

use crate::Reflect;
use crate::info::{ReflectKind, Typed};
use crate::ops::{Map, MapIter};
use crate::reflection::impl_reflect_cast_fn;

/// Formats any reflected map as `{key: value, ..}`.
pub fn map_debug(map: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map().entries(map.iter()).finish()
}

macro_rules! impl_reflect_map {
    ($ty:ident < K, V $(, $s:ident)? > where K: $($key_bound:path),+) => {
        impl<K, V $(, $s)?> Typed for $ty<K, V $(, $s)?>
        where
            K: Typed $(+ $key_bound)+,
            V: Typed,
            $($s: BuildHasher + Send + Sync + 'static,)?
        {
            const KIND: ReflectKind = ReflectKind::Map;
        }

        impl<K, V $(, $s)?> Reflect for $ty<K, V $(, $s)?>
        where
            K: Typed $(+ $key_bound)+,
            V: Typed,
            $($s: BuildHasher + Send + Sync + 'static,)?
        {
            impl_reflect_cast_fn!(Map);

            #[inline]
            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                map_debug(self, f)
            }
        }

        impl<K, V $(, $s)?> Map for $ty<K, V $(, $s)?>
        where
            K: Typed $(+ $key_bound)+,
            V: Typed,
            $($s: BuildHasher + Send + Sync + 'static,)?
        {
            fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect> {
                let key = key.downcast_ref::<K>()?;
                $ty::get(self, key).map(Reflect::as_reflect)
            }

            fn get_mut(&mut self, key: &dyn Reflect) -> Option<&mut dyn Reflect> {
                let key = key.downcast_ref::<K>()?;
                $ty::get_mut(self, key).map(Reflect::as_reflect_mut)
            }

            #[inline]
            fn len(&self) -> usize {
                $ty::len(self)
            }

            fn iter(&self) -> MapIter<'_> {
                Box::new(
                    $ty::iter(self).map(|(key, value)| (key.as_reflect(), value.as_reflect())),
                )
            }

            #[inline]
            fn key_kind(&self) -> ReflectKind {
                K::KIND
            }

            #[inline]
            fn value_kind(&self) -> ReflectKind {
                V::KIND
            }

            #[inline]
            fn has_scalar_values(&self) -> bool {
                V::SCALAR
            }
        }
    };
}

impl_reflect_map!(StdHashMap<K, V, S> where K: Eq, Hash);
impl_reflect_map!(HashbrownMap<K, V, S> where K: Eq, Hash);
impl_reflect_map!(BTreeMap<K, V> where K: Ord);
