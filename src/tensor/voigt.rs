/// Maps a pair of Cartesian indices (x=0, y=1, z=2) to the Voigt index
///
/// ```text
/// ┌          ┐   ┌          ┐
/// │ xx xy xz │   │ 0  5  4  │
/// │ yx yy yz │ → │ 5  1  3  │
/// │ zx zy zz │   │ 4  3  2  │
/// └          ┘   └          ┘
/// ```
pub const VOIGT: [[usize; 3]; 3] = [[0, 5, 4], [5, 1, 3], [4, 3, 2]];

/// Maps a Voigt index to the canonical pair of Cartesian indices (i ≤ j)
pub const VOIGT_PAIR: [(usize, usize); 6] = [(0, 0), (1, 1), (2, 2), (1, 2), (0, 2), (0, 1)];

/// Returns the Voigt index corresponding to the (i,j) pair of Cartesian indices
///
/// **Note:** `i` and `j` must be in {0, 1, 2}.
#[inline]
pub fn voigt_index(i: usize, j: usize) -> usize {
    VOIGT[i][j]
}

/// Returns the canonical (i ≤ j) pair of Cartesian indices of a Voigt index
///
/// **Note:** `m` must be in {0, ..., 5}.
#[inline]
pub fn voigt_pair(m: usize) -> (usize, usize) {
    VOIGT_PAIR[m]
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
