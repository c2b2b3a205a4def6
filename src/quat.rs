mod ops;

use crate::{consts::sqr, LengthError, Mat3, Vec3, RAD_TO_DEG};

/// A quaternion with a real part `w` and an imaginary (vector) part `(x, y, z)`.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
/// Note that `q` and `-q` represent the same rotation; use [`Quat::approx_eq_rotation`] to compare
/// rotations regardless of sign.
///
/// No normalization is performed implicitly. Call [`Quat::normalize`] or [`Quat::normalized`]
/// after operations that may introduce drift, like long chains of products.
///
/// Components are laid out (and indexed) in `w, x, y, z` order.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Quat {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for Quat {
    /// Returns [`Quat::IDENTITY`].
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is used to rotate.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Creates a quaternion from its components in `w, x, y, z` order.
    #[inline]
    pub const fn from_array([w, x, y, z]: [f32; 4]) -> Self {
        Self::new(w, x, y, z)
    }

    /// Creates a quaternion from its real part and its imaginary part.
    #[inline]
    pub const fn from_parts(w: f32, axis: Vec3) -> Self {
        Self::new(w, axis.x, axis.y, axis.z)
    }

    /// Returns the components in `w, x, y, z` order.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.w, self.x, self.y, self.z]
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [f32; 4] {
        bytemuck::cast_mut(self)
    }

    /// Creates a quaternion from roll, pitch and yaw angles, in radians.
    ///
    /// The resulting rotation first rolls around the X axis, then pitches around the Y axis, and
    /// finally yaws around the Z axis (all axes are fixed in the reference frame).
    ///
    /// # Examples
    ///
    /// ```
    /// # use triad::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// assert_eq!(Quat::from_angles(0.0, 0.0, 0.0), Quat::IDENTITY);
    ///
    /// let yaw = Quat::from_angles(0.0, 0.0, FRAC_PI_2);
    /// assert_approx_eq!(yaw.rotate(Vec3::X), Vec3::Y).abs(1e-6);
    /// ```
    #[doc(alias = "euler")]
    pub fn from_angles(roll: f32, pitch: f32, yaw: f32) -> Self {
        let (sr, cr) = (roll * 0.5).sin_cos();
        let (sp, cp) = (pitch * 0.5).sin_cos();
        let (sy, cy) = (yaw * 0.5).sin_cos();

        Self::new(
            cr * cp * cy + sr * sp * sy,
            sr * cp * cy - cr * sp * sy,
            cr * sp * cy + sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
        )
    }

    /// Converts a rotation matrix to a quaternion, using [Shoemake's algorithm].
    ///
    /// If the trace of `mat` is positive, the real part is derived from it directly. Otherwise, the
    /// largest diagonal element selects which imaginary component is computed first, so the value
    /// everything else is divided by is never close to zero. This keeps the conversion accurate
    /// for all rotations, including those by (close to) 180°, unlike [`Mat3::to_quat`].
    ///
    /// `mat` is assumed to be orthonormal with a determinant of 1. The result is a unit quaternion
    /// if it is. No normalization is performed.
    ///
    /// [Shoemake's algorithm]: https://www.euclideanspace.com/maths/geometry/rotations/conversions/matrixToQuaternion/
    ///
    /// # Examples
    ///
    /// ```
    /// # use triad::*;
    /// let half_turn_y = Mat3::from_diagonal(vec3(-1.0, 1.0, -1.0));
    /// assert_eq!(Quat::from_mat3(&half_turn_y), Quat::new(0.0, 0.0, 1.0, 0.0));
    /// ```
    #[doc(alias = "from_matrix")]
    pub fn from_mat3(mat: &Mat3) -> Self {
        let m = |row: usize, col: usize| mat[(row, col)];

        let trace = mat.trace();
        if trace > 0.0 {
            log::trace!("from_mat3: trace {trace} > 0, deriving w first");

            let s = (trace + 1.0).sqrt();
            let t = 0.5 / s;
            return Self::new(
                0.5 * s,
                (m(2, 1) - m(1, 2)) * t,
                (m(0, 2) - m(2, 0)) * t,
                (m(1, 0) - m(0, 1)) * t,
            );
        }

        // Ties keep the first index.
        let mut i = 0;
        if m(1, 1) > m(0, 0) {
            i = 1;
        }
        if m(2, 2) > m(i, i) {
            i = 2;
        }
        let j = (i + 1) % 3;
        let k = (j + 1) % 3;
        log::trace!("from_mat3: trace {trace} <= 0, deriving imaginary component {i} first");

        let s = (m(i, i) - m(j, j) - m(k, k) + 1.0).sqrt();
        let t = 0.5 / s;

        let mut v = [0.0; 3];
        v[i] = 0.5 * s;
        v[j] = (m(j, i) + m(i, j)) * t;
        v[k] = (m(k, i) + m(i, k)) * t;
        let w = (m(k, j) - m(j, k)) * t;

        Self::from_parts(w, Vec3::from(v))
    }

    /// Converts this quaternion to a rotation matrix.
    ///
    /// `self` is assumed to be a unit quaternion. Otherwise, the resulting matrix will not be
    /// orthonormal. Use [`Quat::is_unit_norm`] to check and [`Quat::normalized`] to fix that.
    ///
    /// # Examples
    ///
    /// ```
    /// # use triad::*;
    /// assert_eq!(Quat::IDENTITY.to_rotation_matrix(), Mat3::IDENTITY);
    /// ```
    pub fn to_rotation_matrix(&self) -> Mat3 {
        let Self { w, x, y, z } = *self;

        #[rustfmt::skip]
        let mat = Mat3::new(
            1.0 - 2.0 * (sqr(y) + sqr(z)), 2.0 * (x * y - w * z),         2.0 * (x * z + w * y),
            2.0 * (x * y + w * z),         1.0 - 2.0 * (sqr(x) + sqr(z)), 2.0 * (y * z - w * x),
            2.0 * (x * z - w * y),         2.0 * (y * z + w * x),         1.0 - 2.0 * (sqr(x) + sqr(y)),
        );
        mat
    }

    /// Resets this quaternion to [`Quat::IDENTITY`].
    pub fn clear(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Returns the squared norm of this quaternion.
    pub fn norm2(&self) -> f32 {
        sqr(self.w) + sqr(self.x) + sqr(self.y) + sqr(self.z)
    }

    /// Returns the norm (length) of this quaternion.
    #[doc(alias = "length")]
    pub fn norm(&self) -> f32 {
        self.norm2().sqrt()
    }

    /// Scales this quaternion to unit length, in place.
    ///
    /// A zero quaternion results in `NaN` components.
    pub fn normalize(&mut self) -> &mut Self {
        let norm = self.norm();
        *self /= norm;
        self
    }

    /// Returns a copy of this quaternion scaled to unit length.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Returns the conjugate of this quaternion, which has its imaginary part negated.
    ///
    /// For unit quaternions, this is also the inverse, ie. the opposite rotation.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Returns the rotation angle of this unit quaternion, in radians.
    ///
    /// Rounding errors can push `w` slightly outside of `-1.0..=1.0`, in which case the result is
    /// `NaN`.
    pub fn angle(&self) -> f32 {
        2.0 * self.w.acos()
    }

    /// Returns the rotation angle of this unit quaternion, in degrees.
    pub fn angle_degrees(&self) -> f32 {
        self.angle() * RAD_TO_DEG
    }

    /// Returns the imaginary part `(x, y, z)`.
    ///
    /// For a unit quaternion, this is the rotation axis scaled by the sine of half the rotation
    /// angle.
    #[doc(alias = "vec")]
    pub fn axis(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Replaces the imaginary part, leaving `w` unchanged.
    pub fn set_axis(&mut self, axis: Vec3) {
        self.x = axis.x;
        self.y = axis.y;
        self.z = axis.z;
    }

    /// Returns whether this is exactly [`Quat::IDENTITY`].
    ///
    /// To check whether a quaternion has unit length, use [`Quat::is_unit_norm`] instead.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Returns whether the norm of this quaternion is within `tolerance` of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// # use triad::*;
    /// let q = Quat::new(0.5, 0.5, 0.5, 0.5);
    /// assert!(q.is_unit_norm(1e-6));
    /// assert!(!q.is_identity());
    /// assert!(!(q * 2.0).is_unit_norm(1e-6));
    /// ```
    pub fn is_unit_norm(&self, tolerance: f32) -> bool {
        (self.norm() - 1.0).abs() <= tolerance
    }

    /// Rotates `v` by this quaternion.
    ///
    /// Computes the imaginary part of `self * v * self.conjugate()` with two Hamilton products.
    /// `self` should be a unit quaternion, otherwise `v` is scaled by its squared norm.
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        (*self * v * self.conjugate()).axis()
    }

    /// Returns a reference to the component at `index` (in `w, x, y, z` order), or [`None`] if
    /// `index` is out of bounds.
    pub fn get(&self, index: usize) -> Option<&f32> {
        self.as_array().get(index)
    }

    /// Sets the component at `index` (in `w, x, y, z` order) to `value`.
    ///
    /// An out-of-bounds `index` leaves the quaternion unchanged.
    pub fn set(&mut self, index: usize, value: f32) {
        if let Some(component) = self.as_mut_array().get_mut(index) {
            *component = value;
        }
    }

    /// Returns whether `self` and `other` represent the same rotation, within an absolute
    /// `tolerance` per component.
    ///
    /// Both `other` and `-other` are compared against.
    ///
    /// # Examples
    ///
    /// ```
    /// # use triad::*;
    /// let q = Quat::from_angles(0.1, 0.2, 0.3);
    /// assert!(q.approx_eq_rotation(&-q, 0.0));
    /// assert!(!q.approx_eq_rotation(&Quat::IDENTITY, 1e-3));
    /// ```
    pub fn approx_eq_rotation(&self, other: &Self, tolerance: f32) -> bool {
        use crate::approx::ApproxEq;

        self.abs_diff_eq(other, tolerance) || self.abs_diff_eq(&-*other, tolerance)
    }
}

impl From<[f32; 4]> for Quat {
    #[inline]
    fn from(array: [f32; 4]) -> Self {
        Self::from_array(array)
    }
}

impl From<Quat> for [f32; 4] {
    #[inline]
    fn from(q: Quat) -> Self {
        q.to_array()
    }
}

impl TryFrom<&[f32]> for Quat {
    type Error = LengthError;

    fn try_from(slice: &[f32]) -> Result<Self, Self::Error> {
        let array = <[f32; 4]>::try_from(slice).map_err(|_| LengthError::new(4, slice.len()))?;
        Ok(Self::from_array(array))
    }
}

/// Uses [`Quat::to_rotation_matrix`].
impl From<Quat> for Mat3 {
    fn from(q: Quat) -> Self {
        q.to_rotation_matrix()
    }
}

/// Uses [`Quat::from_mat3`].
impl From<Mat3> for Quat {
    fn from(mat: Mat3) -> Self {
        Quat::from_mat3(&mat)
    }
}
