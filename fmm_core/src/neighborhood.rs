//! Axis-aligned unit offsets used for one-sided differencing.

/// The 2N face-neighbor offsets of an N-dimensional cell.
///
/// Offset `2i` is `+1` along axis `i` and offset `2i + 1` is `-1` along axis `i`; every
/// other component is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborhoodOffsets<const N: usize> {
    /// `pairs[i] = [+e_i, -e_i]`.
    pairs: [[[i32; N]; 2]; N],
}

impl<const N: usize> NeighborhoodOffsets<N> {
    /// Build the offset table for dimension `N`.
    pub fn new() -> Self {
        let mut pairs = [[[0i32; N]; 2]; N];
        for (axis, pair) in pairs.iter_mut().enumerate() {
            pair[0][axis] = 1;
            pair[1][axis] = -1;
        }
        Self { pairs }
    }

    /// Number of offsets, always `2 * N`.
    #[inline]
    pub const fn len(&self) -> usize {
        2 * N
    }

    /// True only for the degenerate zero-dimensional table.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Offset number `k`, `0 <= k < 2N`.
    #[inline]
    pub fn offset(&self, k: usize) -> [i32; N] {
        self.pairs[k / 2][k % 2]
    }

    /// The `+1` offset along `axis`.
    #[inline]
    pub fn positive(&self, axis: usize) -> [i32; N] {
        self.pairs[axis][0]
    }

    /// The `-1` offset along `axis`.
    #[inline]
    pub fn negative(&self, axis: usize) -> [i32; N] {
        self.pairs[axis][1]
    }

    /// All offsets in table order.
    pub fn iter(&self) -> impl Iterator<Item = [i32; N]> + '_ {
        (0..self.len()).map(move |k| self.offset(k))
    }
}

impl<const N: usize> Default for NeighborhoodOffsets<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Add `offset` to `index` component-wise.
#[inline]
pub fn offset_index<const N: usize>(index: &[i32; N], offset: &[i32; N]) -> [i32; N] {
    let mut r = *index;
    for (x, &o) in r.iter_mut().zip(offset.iter()) {
        *x += o;
    }
    r
}
