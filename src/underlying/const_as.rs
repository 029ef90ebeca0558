use super::*;

/// One line of the [`const_as`] function.
macro_rules! const_as_line {
  ($x:ident, $t:ty, $u:ty) => {
    if const { T::BITS == <$t>::BITS && U::BITS == <$u>::BITS } {
      // SAFETY: Because T, U, $t, $u, are guaranteed to be `uX`, then `$t` is `T` and `$u` is `U`;
      // therefore both transmute_copy are no-ops.
      let t = unsafe { ::core::mem::transmute_copy::<T, $t>(&$x) };
      let u = t as $u;
      return unsafe { ::core::mem::transmute_copy::<$u, U>(&u) }
    }
  }
}

/// A type-generic and `const` version of the keyword `as`, for casting between [`Bits`]
/// storage types. Narrowing keeps the low bits, widening zero-extends.
///
/// This is what lets the float constants (`ONE`, `INFINITY`, `PI`, ...) be computed on a `u64`
/// view of the encoding and then stored in whatever type the format uses, in a `const` context.
///
/// ```ignore
/// # use soft_tower::underlying::const_as;
/// assert_eq!(const_as::<u64, u16>(0x3c00), 0x3c00u16);
/// assert_eq!(const_as::<u8, u64>(0xff), 0xffu64);
/// ```
pub const fn const_as<T: Bits, U: Bits>(x: T) -> U {
  const_as_line!(x, u8, u8);
  const_as_line!(x, u8, u16);
  const_as_line!(x, u8, u32);
  const_as_line!(x, u8, u64);
  const_as_line!(x, u16, u8);
  const_as_line!(x, u16, u16);
  const_as_line!(x, u16, u32);
  const_as_line!(x, u16, u64);
  const_as_line!(x, u32, u8);
  const_as_line!(x, u32, u16);
  const_as_line!(x, u32, u32);
  const_as_line!(x, u32, u64);
  const_as_line!(x, u64, u8);
  const_as_line!(x, u64, u16);
  const_as_line!(x, u64, u32);
  const_as_line!(x, u64, u64);
  unreachable!() // cannot be const { unreachable!() }
}
