//! Integer domain boundary
//!
//! Integer-only policies accept any element that can present itself as an
//! integer without loss. Typed integers always can; a [`Value`] can only when
//! it holds `Int`. Anything else is rejected here, at the call boundary, so
//! policy logic never sees an out-of-domain element.

use crate::error::{Error, Result};
use crate::value::Value;

/// Elements that integer-only policies can classify
pub trait IntegerDomain {
    /// Lossless integer view of this element
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the element is not an integer.
    fn to_integer(&self) -> Result<i128>;
}

macro_rules! impl_integer_domain {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntegerDomain for $t {
                #[inline]
                fn to_integer(&self) -> Result<i128> {
                    // Widening; every source type is at most 64 bits.
                    Ok(*self as i128)
                }
            }
        )*
    };
}

impl_integer_domain!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl IntegerDomain for Value {
    fn to_integer(&self) -> Result<i128> {
        match self {
            Value::Int(i) => Ok(i128::from(*i)),
            other => Err(Error::type_mismatch("Int", other.type_name())),
        }
    }
}
