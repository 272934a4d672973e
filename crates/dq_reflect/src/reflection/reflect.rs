use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::ReflectKind;
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime field access in [`dq_reflect`].
///
/// A `Reflect` value reports its shape through [`reflect_kind`] and hands out
/// a borrowed view of that shape through [`reflect_ref`] / [`reflect_mut`]:
/// a [`Record`] with named fields, an [`Indirect`] optional reference, a
/// single-level [`Map`], a terminal scalar, or an unsupported value.
///
/// # Recommendations
///
/// Use [the derive macro for `Reflect`] on records. Every other supported type
/// is already implemented by this crate, see [`impls`](crate::impls).
///
/// # Type Casting
///
/// ```rust
/// # use dq_reflect::{Reflect, ops::ReflectRef};
/// let value: Box<dyn Reflect> = 10_i64.into_boxed_reflect();
///
/// assert!(value.is::<i64>());
/// assert_eq!(value.downcast_ref::<i64>(), Some(&10));
/// assert!(matches!(value.reflect_ref(), ReflectRef::Scalar(_)));
/// ```
///
/// # Manual Implementation
///
/// ```rust, ignore
/// fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
///     *self = value.take::<Self>()?;
///     Ok(())
/// }
///
/// fn reflect_kind(&self) -> ReflectKind {
///     ReflectKind::Record
/// }
///
/// fn reflect_ref(&self) -> ReflectRef<'_> {
///     ReflectRef::Record(self)
/// }
///
/// fn reflect_mut(&mut self) -> ReflectMut<'_> {
///     ReflectMut::Record(self)
/// }
/// ```
///
/// [`dq_reflect`]: crate
/// [`reflect_kind`]: Reflect::reflect_kind
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
/// [`Record`]: crate::ops::Record
/// [`Indirect`]: crate::ops::Indirect
/// [`Map`]: crate::ops::Map
/// [the derive macro for `Reflect`]: crate::derive::Reflect
pub trait Reflect: Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    ///
    /// # Example
    ///
    /// ```
    /// use dq_reflect::Reflect;
    ///
    /// let x = 32;
    /// let r: &dyn Reflect = x.as_reflect();
    /// ```
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable, fully-reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, fully-reflected value.
    #[inline(always)]
    fn into_reflect(self: Box<Self>) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        self
    }

    /// Boxes this value as a `Box<dyn Reflect>`.
    ///
    /// ```
    /// use dq_reflect::Reflect;
    ///
    /// let r = 32.into_boxed_reflect();
    /// assert!(r.is::<i32>());
    /// ```
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Return the [`TypeId`] of underlying type.
    ///
    /// `Box<dyn Reflect>::type_id` returns the id of the box, not of the value
    /// inside, so prefer this method.
    ///
    /// ```
    /// use dq_reflect::Reflect;
    /// use core::any::{Any, TypeId};
    ///
    /// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
    ///
    /// assert!(x.type_id() != TypeId::of::<i32>());
    /// assert!(x.ty_id() == TypeId::of::<i32>());
    /// ```
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the type path of the underlying type.
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Performs a type-checked assignment of a reflected value to this value.
    ///
    /// Returns the input back if its type is not `Self`.
    ///
    /// ```
    /// # use dq_reflect::Reflect;
    /// let mut x = 1.0_f64;
    /// x.set(2.0_f64.into_boxed_reflect()).unwrap();
    /// assert_eq!(x, 2.0);
    ///
    /// assert!(x.set(2_i32.into_boxed_reflect()).is_err());
    /// ```
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns the shape category of this value.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable view of this value's shape.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable view of this value's shape.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Debug formatter for the value.
    ///
    /// The default prints the type path only.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reflect({})", self.reflect_type_path())
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    ///
    /// ```
    /// # use dq_reflect::Reflect;
    /// let mut x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// *x.downcast_mut::<i32>().unwrap() += 2;
    /// assert_eq!(x.downcast_ref::<i32>(), Some(&12));
    /// ```
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            #[expect(unsafe_code, reason = "type is already checked")]
            Ok(unsafe { <Box<dyn Any>>::downcast::<T>(self).unwrap_unchecked() })
        } else {
            Err(self)
        }
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    ///
    /// ```
    /// # use dq_reflect::Reflect;
    /// let x: Box<dyn Reflect> = String::from("t2").into_boxed_reflect();
    /// assert_eq!(x.take::<String>().unwrap(), "t2");
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Macro

/// Implements `set`, `reflect_kind`, `reflect_ref` and `reflect_mut` for a
/// container kind whose view variant holds `self` directly.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
