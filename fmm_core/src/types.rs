//! Core types and small vector helpers shared by the grid, generator and gradient code.
//!
//! Vectors are plain `[T; N]` arrays so that every operation stays generic over the
//! grid dimension without a dedicated point type per `N`.

use num_traits::{Float, NumCast};

/// Integer coordinate of a grid cell, one signed component per axis.
///
/// Signed so that neighbor offsets may step outside the grid before being bounds-tested.
pub type GridIndex<const N: usize> = [i32; N];

/// Number of cells along each axis of a grid.
pub type GridSize<const N: usize> = [usize; N];

/// Total number of cells in a grid of the given size.
///
/// Returns `None` if the product overflows `usize`.
#[inline]
pub fn checked_linear_size<const N: usize>(size: &GridSize<N>) -> Option<usize> {
    size.iter().try_fold(1usize, |acc, &s| acc.checked_mul(s))
}

/// Total number of cells in a grid of the given size.
///
/// Does not check for overflow; use [`checked_linear_size`] for untrusted sizes.
#[inline]
pub fn linear_size<const N: usize>(size: &GridSize<N>) -> usize {
    size.iter().product()
}

/// Convert an integer coordinate component to the scalar type.
///
/// Every `i32` is representable (possibly rounded) in both `f32` and `f64`.
#[inline]
pub fn scalar_from_i32<T: Float>(v: i32) -> T {
    <T as NumCast>::from(v).unwrap_or_else(T::nan)
}

/// Convert an `f64` constant to the scalar type.
#[inline]
pub fn scalar_from_f64<T: Float>(v: f64) -> T {
    <T as NumCast>::from(v).unwrap_or_else(T::nan)
}

/// Array with every component set to `v`.
#[inline]
pub fn filled<T: Copy, const N: usize>(v: T) -> [T; N] {
    [v; N]
}

/// Component-wise `u - v`.
#[inline]
pub fn sub<T: Float, const N: usize>(u: &[T; N], v: &[T; N]) -> [T; N] {
    let mut r = *u;
    for (x, &y) in r.iter_mut().zip(v.iter()) {
        *x = *x - y;
    }
    r
}

/// Euclidean length of `v`.
#[inline]
pub fn magnitude<T: Float, const N: usize>(v: &[T; N]) -> T {
    v.iter().fold(T::zero(), |acc, &x| acc + x * x).sqrt()
}

/// Euclidean distance between `u` and `v`.
#[inline]
pub fn distance<T: Float, const N: usize>(u: &[T; N], v: &[T; N]) -> T {
    magnitude(&sub(u, v))
}

/// Scale `v` to unit length.
///
/// Returns the zero vector if `v` has zero length.
#[inline]
pub fn normalized<T: Float, const N: usize>(v: &[T; N]) -> [T; N] {
    let mag = magnitude(v);
    if mag == T::zero() {
        return [T::zero(); N];
    }
    let mut n = *v;
    for x in n.iter_mut() {
        *x = *x / mag;
    }
    n
}
