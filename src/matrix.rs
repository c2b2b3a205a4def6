use std::fmt;

use crate::{LengthError, Quat, Vec3};

mod ops;

/// A 3x3 matrix with [`f32`] elements, stored in row-major order.
///
/// # Construction
///
/// - [`Mat3::new`] takes all 9 elements, row by row, and [`Mat3::from_array`] does the same with
///   a flat array.
/// - [`Mat3::from_rows`] and [`Mat3::from_columns`] (also available as [`Mat3::merge`]) stack three
///   vectors.
/// - [`Mat3::from_diagonal`] creates a diagonal matrix.
/// - [`Mat3::ZERO`] (also the [`Default`] value) and [`Mat3::IDENTITY`] are predefined.
///
/// # Element Access
///
/// [`Mat3`] implements [`Index`] and [`IndexMut`] for `(row, col)` tuples, matching common
/// mathematical notation. Indices are 0-based, and an index outside of `0..3` panics.
/// [`Mat3::get`] returns an [`Option`] instead.
///
/// ```
/// # use triad::*;
/// let mut mat = Mat3::IDENTITY;
/// mat[(0, 2)] = 4.0;
/// assert_eq!(mat[(0, 2)], 4.0);
/// assert_eq!(mat.row(0), vec3(1.0, 0.0, 4.0));
/// assert_eq!(mat.get(0, 3), None);
/// ```
///
/// # Rotations
///
/// A [`Mat3`] does not have to be a rotation matrix. The conversions to quaternions
/// ([`Mat3::to_quat`] and [`Quat::from_mat3`]) assume that it is one, ie. that it is orthonormal
/// with a determinant of 1, and produce meaningless results otherwise.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(transparent)]
pub struct Mat3([f32; 9]);

impl Mat3 {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([0.0; 9]);

    /// The identity matrix.
    ///
    /// Multiplying any vector with this matrix returns the vector unchanged.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0,
        0.0, 1.0, 0.0,
        0.0, 0.0, 1.0,
    ]);

    /// Creates a matrix from its elements, given row by row.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        m00: f32, m01: f32, m02: f32,
        m10: f32, m11: f32, m12: f32,
        m20: f32, m21: f32, m22: f32,
    ) -> Self {
        Self([
            m00, m01, m02,
            m10, m11, m12,
            m20, m21, m22,
        ])
    }

    /// Creates a matrix from a flat array of its elements in row-major order.
    #[inline]
    pub const fn from_array(elements: [f32; 9]) -> Self {
        Self(elements)
    }

    /// Returns the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix whose rows are `r0`, `r1` and `r2`.
    ///
    /// This is the inverse of [`Mat3::row`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use triad::*;
    /// let mat = Mat3::new(
    ///     1.0, 2.0, 3.0,
    ///     4.0, 5.0, 6.0,
    ///     7.0, 8.0, 9.0,
    /// );
    /// assert_eq!(Mat3::from_rows(mat.row(0), mat.row(1), mat.row(2)), mat);
    /// ```
    #[doc(alias = "from_vectors")]
    pub fn from_rows(r0: Vec3, r1: Vec3, r2: Vec3) -> Self {
        #[rustfmt::skip]
        let mat = Self::new(
            r0.x, r0.y, r0.z,
            r1.x, r1.y, r1.z,
            r2.x, r2.y, r2.z,
        );
        mat
    }

    /// Creates a matrix whose columns are `c0`, `c1` and `c2`.
    ///
    /// This is the inverse of [`Mat3::col`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use triad::*;
    /// let rows = Mat3::from_rows(Vec3::X, Vec3::Z, -Vec3::Y);
    /// let cols = Mat3::from_columns(Vec3::X, -Vec3::Z, Vec3::Y);
    /// assert_eq!(rows, cols);
    /// ```
    #[doc(alias = "from_vectors")]
    pub fn from_columns(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::from_rows(c0, c1, c2).transpose()
    }

    /// Combines three vectors into a matrix, using them as its columns.
    ///
    /// Equivalent to [`Mat3::from_columns`].
    #[inline]
    pub fn merge(v1: Vec3, v2: Vec3, v3: Vec3) -> Self {
        Self::from_columns(v1, v2, v3)
    }

    /// Creates a matrix with the given diagonal and zero elsewhere.
    ///
    /// # Examples
    ///
    /// ```
    /// # use triad::*;
    /// let mat = Mat3::from_diagonal(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(mat.trace(), 6.0);
    /// assert_eq!(mat.diagonal(), vec3(1.0, 2.0, 3.0));
    /// ```
    pub fn from_diagonal(diagonal: Vec3) -> Self {
        let mut mat = Self::ZERO;
        for i in 0..3 {
            mat[(i, i)] = diagonal[i];
        }
        mat
    }

    /// Returns the elements in row-major order.
    #[inline]
    pub const fn as_array(&self) -> &[f32; 9] {
        &self.0
    }

    /// Returns the elements in row-major order, mutably.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [f32; 9] {
        &mut self.0
    }

    #[inline]
    pub const fn into_array(self) -> [f32; 9] {
        self.0
    }

    /// Returns the rows as nested arrays.
    pub fn to_rows(self) -> [[f32; 3]; 3] {
        bytemuck::cast(self.0)
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&f32> {
        if row < 3 && col < 3 {
            Some(&self.0[row * 3 + col])
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut f32> {
        if row < 3 && col < 3 {
            Some(&mut self.0[row * 3 + col])
        } else {
            None
        }
    }

    /// Returns the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..3`.
    #[inline]
    pub fn coeff(&self, row: usize, col: usize) -> f32 {
        self[(row, col)]
    }

    /// Sets the element at `(row, col)` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..3`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self[(row, col)] = value;
    }

    /// Sets the `i`-th diagonal element to `value`.
    #[inline]
    pub fn set_diagonal(&mut self, i: usize, value: f32) {
        self[(i, i)] = value;
    }

    /// Returns the row at index `idx` as a vector.
    pub fn row(&self, idx: usize) -> Vec3 {
        Vec3::new(self[(idx, 0)], self[(idx, 1)], self[(idx, 2)])
    }

    /// Returns the column at index `idx` as a vector.
    pub fn col(&self, idx: usize) -> Vec3 {
        Vec3::new(self[(0, idx)], self[(1, idx)], self[(2, idx)])
    }

    /// Returns the diagonal elements as a vector.
    pub fn diagonal(&self) -> Vec3 {
        Vec3::new(self[(0, 0)], self[(1, 1)], self[(2, 2)])
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use triad::*;
    /// let mat = Mat3::new(
    ///     0.0, 1.0, 2.0,
    ///     3.0, 4.0, 5.0,
    ///     6.0, 7.0, 8.0,
    /// );
    /// assert_eq!(mat.transpose(), Mat3::new(
    ///     0.0, 3.0, 6.0,
    ///     1.0, 4.0, 7.0,
    ///     2.0, 5.0, 8.0,
    /// ));
    /// ```
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut out = Self::ZERO;
        for row in 0..3 {
            for col in 0..3 {
                out[(col, row)] = self[(row, col)];
            }
        }
        out
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use triad::*;
    /// assert_eq!(Mat3::IDENTITY.trace(), 3.0);
    /// ```
    pub fn trace(&self) -> f32 {
        self[(0, 0)] + self[(1, 1)] + self[(2, 2)]
    }

    /// Returns the [determinant] of the matrix, computed by cofactor expansion along the first
    /// row.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[doc(alias = "det")]
    pub fn determinant(&self) -> f32 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.to_rows();
        a * (e * i - f * h) + b * (f * g - d * i) + c * (d * h - e * g)
    }

    /// Converts this rotation matrix to a quaternion using the trace formula.
    ///
    /// Computes `w = sqrt(1 + trace) / 2` and derives the vector part by dividing the differences
    /// of opposing off-diagonal elements by `4w`. The result is normalized.
    ///
    /// This loses precision as the rotation angle approaches 180° (`trace` close to -1), where
    /// `w` approaches 0; a rotation of exactly 180° yields `NaN`s. [`Quat::from_mat3`] does not
    /// have this problem and should be preferred when the input can be an arbitrary rotation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use triad::*;
    /// assert_eq!(Mat3::IDENTITY.to_quat(), Quat::IDENTITY);
    ///
    /// let half_turn = Mat3::from_diagonal(vec3(1.0, -1.0, -1.0));
    /// assert!(half_turn.to_quat().w.is_nan());
    /// assert_eq!(Quat::from_mat3(&half_turn), Quat::new(0.0, 1.0, 0.0, 0.0));
    /// ```
    #[doc(alias = "to_quaternion")]
    pub fn to_quat(&self) -> Quat {
        const UNSTABLE_MARGIN: f32 = 1e-3;

        let trace = self.trace();
        if 1.0 + trace < UNSTABLE_MARGIN {
            log::debug!(
                "trace-based quaternion conversion of {self:?} is unstable (trace = {trace})"
            );
        }

        let w = 0.5 * (1.0 + trace).sqrt();
        let w4 = 4.0 * w;
        Quat::new(
            w,
            (self[(2, 1)] - self[(1, 2)]) / w4,
            (self[(0, 2)] - self[(2, 0)]) / w4,
            (self[(1, 0)] - self[(0, 1)]) / w4,
        )
        .normalized()
    }
}

impl From<[f32; 9]> for Mat3 {
    #[inline]
    fn from(elements: [f32; 9]) -> Self {
        Self::from_array(elements)
    }
}

impl From<[[f32; 3]; 3]> for Mat3 {
    #[inline]
    fn from(rows: [[f32; 3]; 3]) -> Self {
        Self(bytemuck::cast(rows))
    }
}

impl From<Mat3> for [f32; 9] {
    #[inline]
    fn from(mat: Mat3) -> Self {
        mat.into_array()
    }
}

impl TryFrom<&[f32]> for Mat3 {
    type Error = LengthError;

    fn try_from(slice: &[f32]) -> Result<Self, Self::Error> {
        let array = <[f32; 9]>::try_from(slice).map_err(|_| LengthError::new(9, slice.len()))?;
        Ok(Self(array))
    }
}

impl fmt::Debug for Mat3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rows stay on one line, even with `{:#?}`.
        struct FormatRow([f32; 3]);
        impl fmt::Debug for FormatRow {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let [a, b, c] = self.0;
                write!(f, "[{a:?}, {b:?}, {c:?}]")
            }
        }

        f.debug_list()
            .entries(self.to_rows().map(FormatRow))
            .finish()
    }
}
