use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::Reflect;
use crate::info::{ReflectKind, Typed};
use crate::ops::{ReflectMut, ReflectRef, Scalar, ScalarRef};

macro_rules! impl_reflect_scalar {
    ($ty:ty => $kind:ident, |$this:ident| $view:expr) => {
        impl Typed for $ty {
            const KIND: ReflectKind = ReflectKind::$kind;
        }

        impl $crate::Reflect for $ty {
            fn set(
                &mut self,
                value: ::alloc::boxed::Box<dyn $crate::Reflect>,
            ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
                *self = value.take::<Self>()?;
                Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> ReflectKind {
                ReflectKind::$kind
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                let $this = self;
                ReflectRef::Scalar(ScalarRef::$kind($view))
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Scalar(self)
            }

            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }
        }
    };
}

impl_reflect_scalar!(i32 => Int, |v| *v);
impl_reflect_scalar!(i64 => Int64, |v| *v);
impl_reflect_scalar!(f32 => Float32, |v| *v);
impl_reflect_scalar!(f64 => Float64, |v| *v);
impl_reflect_scalar!(bool => Bool, |v| *v);
impl_reflect_scalar!(String => String, |v| v.as_str());

// -----------------------------------------------------------------------------
// Scalar

// The kind follows the held value, so no single kind can be declared.
impl Typed for Scalar {
    const KIND: ReflectKind = ReflectKind::Unsupported;
    const SCALAR: bool = true;
}

impl Reflect for Scalar {
    /// Accepts any scalar, which may change the kind of `self`.
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        let scalar = match value.reflect_ref() {
            ReflectRef::Scalar(scalar) => scalar.to_scalar(),
            _ => return Err(value),
        };
        *self = scalar;
        Ok(())
    }

    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        self.kind()
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Scalar(self.as_scalar_ref())
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Scalar(self)
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{ReflectKind, classify};
    use crate::ops::{ReflectMut, ReflectRef, Scalar, ScalarRef};
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn scalar_views() {
        assert!(matches!(7_i32.reflect_ref(), ReflectRef::Scalar(ScalarRef::Int(7))));
        assert!(matches!(
            String::from("t2").reflect_ref(),
            ReflectRef::Scalar(ScalarRef::String("t2"))
        ));

        let mut flag = false;
        let ReflectMut::Scalar(target) = flag.reflect_mut() else {
            panic!("bool is a scalar");
        };
        target.set(true.into_boxed_reflect()).unwrap();
        assert!(flag);
    }

    #[test]
    fn set_rejects_other_types() {
        let mut value = 1_i32;
        let rejected = value.set(1_i64.into_boxed_reflect()).unwrap_err();
        assert!(rejected.is::<i64>());
        assert_eq!(value, 1);
    }

    #[test]
    fn scalar_enum_reports_held_kind() {
        let value = Scalar::Float64(2.5);
        assert_eq!(classify(&value), ReflectKind::Float64);
        assert!(matches!(value.reflect_ref(), ReflectRef::Scalar(ScalarRef::Float64(2.5))));
        assert_eq!(classify(&Scalar::from("x")), ReflectKind::String);
    }

    #[test]
    fn scalar_enum_set_takes_any_scalar() {
        let mut value = Scalar::Int(1);
        value.set(3.0_f64.into_boxed_reflect()).unwrap();
        assert_eq!(value, Scalar::Float64(3.0));

        value.set(Scalar::Bool(true).into_boxed_reflect()).unwrap();
        assert_eq!(value, Scalar::Bool(true));

        let rejected = value.set(vec![1_u8].into_boxed_reflect()).unwrap_err();
        assert!(rejected.is::<Vec<u8>>());
        assert_eq!(value, Scalar::Bool(true));
    }
}
