use std::fmt;

use crate::{consts::sqr, LengthError};

mod ops;

/// A 3-dimensional vector with [`f32`] components.
///
/// # Construction
///
/// - [`Vec3::new`] and the freestanding [`vec3`] function create a vector from its components.
/// - [`Vec3::splat`] copies one value into every component.
/// - [`Vec3::ZERO`] (also the [`Default`] value), [`Vec3::X`], [`Vec3::Y`] and [`Vec3::Z`] are
///   predefined.
/// - [`Vec3::NAN`] has every component set to `NaN`, marking the vector as *undefined*.
/// - Vectors convert from and into `[f32; 3]`, and can be created from a slice via [`TryFrom`].
///
/// # Undefined vectors
///
/// No operation on [`Vec3`] reports errors. Normalizing a zero vector, dividing by zero, or raising
/// a negative component to a fractional power produces infinite or `NaN` components, which
/// propagate through every following operation. Callers that need to know can check
/// [`Vec3::is_nan`] or [`Vec3::is_finite`], and can mark a result as undefined themselves with
/// [`Vec3::set_undefined`].
#[derive(Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    /// A vector with every component set to 0.
    pub const ZERO: Self = Self::splat(0.0);
    /// A vector with every component set to 1.
    pub const ONE: Self = Self::splat(1.0);
    /// A vector with every component set to `NaN`.
    pub const NAN: Self = Self::splat(f32::NAN);
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with each component initialized to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use triad::*;
    /// assert_eq!(Vec3::splat(2.0), vec3(2.0, 2.0, 2.0));
    /// ```
    #[doc(alias = "identical")]
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Returns a reference to the components as an array `[x, y, z]`.
    #[inline]
    pub fn as_array(&self) -> &[f32; 3] {
        bytemuck::cast_ref(self)
    }

    /// Returns a mutable reference to the components as an array `[x, y, z]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use triad::*;
    /// let mut v = vec3(1.0, 2.0, 3.0);
    /// v.as_mut_array()[1] = 777.0;
    /// assert_eq!(v, vec3(1.0, 777.0, 3.0));
    /// ```
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [f32; 3] {
        bytemuck::cast_mut(self)
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Applies a closure to each component, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use triad::*;
    /// let v = vec3(1.0, 2.0, 3.0).map(|c| c * 10.0);
    /// assert_eq!(v, vec3(10.0, 20.0, 30.0));
    /// ```
    pub fn map<F>(self, mut f: F) -> Self
    where
        F: FnMut(f32) -> f32,
    {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Combines the components of `self` and `other` pairwise using `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use triad::*;
    /// let v = vec3(1.0, 2.0, 3.0).zip_map(vec3(4.0, 5.0, 6.0), f32::max);
    /// assert_eq!(v, vec3(4.0, 5.0, 6.0));
    /// ```
    pub fn zip_map<F>(self, other: Self, mut f: F) -> Self
    where
        F: FnMut(f32, f32) -> f32,
    {
        Self::new(f(self.x, other.x), f(self.y, other.y), f(self.z, other.z))
    }

    /// Returns `true` if every component is exactly 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use triad::*;
    /// assert!(Vec3::default().is_nil());
    /// assert!(vec3(-0.0, 0.0, 0.0).is_nil());
    /// assert!(!vec3(0.0, 1e-30, 0.0).is_nil());
    /// ```
    #[doc(alias = "is_zero")]
    pub fn is_nil(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Returns `true` if any component is `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use triad::*;
    /// assert!(Vec3::NAN.is_nan());
    /// assert!(vec3(1.0, f32::NAN, 0.0).is_nan());
    /// assert!(!Vec3::X.is_nan());
    /// ```
    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns `true` if no component is infinite or `NaN`.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Marks this vector as undefined by setting every component to `NaN`.
    pub fn set_undefined(&mut self) {
        *self = Self::NAN;
    }

    /// Sets every component to `NaN`.
    ///
    /// Same as [`Vec3::set_undefined`].
    #[inline]
    pub fn set_nan(&mut self) {
        self.set_undefined();
    }

    /// Sets every component to 0.
    pub fn clear(&mut self) {
        *self = Self::ZERO;
    }

    /// Returns the squared norm (length) of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use triad::*;
    /// assert_eq!(vec3(4.0, 0.0, 3.0).norm2(), 25.0);
    /// ```
    #[doc(alias = "length2")]
    pub fn norm2(&self) -> f32 {
        sqr(self.x) + sqr(self.y) + sqr(self.z)
    }

    /// Returns the Euclidean norm (length) of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use triad::*;
    /// assert_eq!(vec3(4.0, 0.0, 3.0).norm(), 5.0);
    /// assert_eq!(Vec3::Z.norm(), 1.0);
    /// ```
    #[doc(alias = "length", alias = "magnitude")]
    pub fn norm(&self) -> f32 {
        self.norm2().sqrt()
    }

    /// Divides this vector by its norm in place, and returns it for chaining.
    ///
    /// A zero vector ends up with `NaN` components.
    ///
    /// # Examples
    ///
    /// ```
    /// # use triad::*;
    /// let mut v = vec3(0.0, 0.0, 4.0);
    /// v.normalize();
    /// assert_eq!(v, Vec3::Z);
    /// ```
    #[doc(alias = "normalise")]
    pub fn normalize(&mut self) -> &mut Self {
        let norm = self.norm();
        *self /= norm;
        self
    }

    /// Returns a copy of this vector divided by its norm, a unit vector.
    ///
    /// A zero vector results in `NaN` components.
    ///
    /// # Examples
    ///
    /// ```
    /// # use triad::*;
    /// assert_eq!(vec3(0.0, 0.0, 4.0).normalized(), Vec3::Z);
    /// assert!(Vec3::ZERO.normalized().is_nan());
    /// ```
    #[doc(alias = "normalised")]
    #[must_use]
    pub fn normalized(self) -> Self {
        self / self.norm()
    }

    /// Computes the dot product of `self` and `other`, summing all three component products.
    ///
    /// # Examples
    ///
    /// ```
    /// # use triad::*;
    /// let a = vec3(1.0, 3.0, -5.0);
    /// let b = vec3(4.0, -2.0, -1.0);
    /// assert_eq!(a.dot(b), 3.0);
    /// ```
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the dot product of the projections of `self` and `other` onto the XY plane.
    ///
    /// The Z components are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use triad::*;
    /// let a = vec3(1.0, 3.0, -5.0);
    /// let b = vec3(4.0, -2.0, -1.0);
    /// assert_eq!(a.dot_xy(b), -2.0);
    /// ```
    pub fn dot_xy(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the (right-handed) cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs. Swapping the arguments negates it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use triad::*;
    /// assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    /// assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        #[rustfmt::skip]
        let cross = Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        );
        cross
    }

    /// Returns the sum of the components.
    pub fn sum(self) -> f32 {
        self.x + self.y + self.z
    }

    /// Replaces every component that is exactly 0 with 1.
    ///
    /// Useful before dividing by the vector element-wise, eg. when it holds per-axis slopes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use triad::*;
    /// assert_eq!(vec3(0.0, -2.0, 0.0).replace_zeros(), vec3(1.0, -2.0, 1.0));
    /// ```
    #[doc(alias = "no_zeros")]
    #[must_use]
    pub fn replace_zeros(self) -> Self {
        self.map(|c| if c == 0.0 { 1.0 } else { c })
    }

    /// Raises each component to the power `n`.
    ///
    /// Negative components with a non-integer `n` yield `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use triad::*;
    /// assert_eq!(vec3(1.0, 2.0, 3.0).powf(2.0), vec3(1.0, 4.0, 9.0));
    /// assert!(vec3(-1.0, 2.0, 3.0).powf(0.5).x.is_nan());
    /// ```
    #[doc(alias = "power")]
    #[must_use]
    pub fn powf(self, n: f32) -> Self {
        self.map(|c| c.powf(n))
    }

    /// Computes the square root of each component.
    #[must_use]
    pub fn sqrt(self) -> Self {
        self.map(f32::sqrt)
    }

    /// Computes the absolute value of each component.
    #[must_use]
    pub fn abs(self) -> Self {
        self.map(f32::abs)
    }

    /// Element-wise minimum between `self` and `other`.
    pub fn min(self, other: Self) -> Self {
        self.zip_map(other, f32::min)
    }

    /// Element-wise maximum between `self` and `other`.
    pub fn max(self, other: Self) -> Self {
        self.zip_map(other, f32::max)
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl TryFrom<&[f32]> for Vec3 {
    type Error = LengthError;

    fn try_from(slice: &[f32]) -> Result<Self, Self::Error> {
        let array = <[f32; 3]>::try_from(slice).map_err(|_| LengthError::new(3, slice.len()))?;
        Ok(array.into())
    }
}

impl fmt::Debug for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("")
            .field(&self.x)
            .field(&self.y)
            .field(&self.z)
            .finish()
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay(f32);
        impl fmt::Debug for DebugViaDisplay {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        f.debug_tuple("")
            .field(&DebugViaDisplay(self.x))
            .field(&DebugViaDisplay(self.y))
            .field(&DebugViaDisplay(self.z))
            .finish()
    }
}

/// Constructs a [`Vec3`] from its three components.
#[inline]
pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn access() {
        let mut v = vec3(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
        v[1] = 777.0;
        assert_eq!(v.y, 777.0);
        assert_eq!(v.as_array(), &[1.0, 777.0, 3.0]);
        assert_eq!(<[f32; 3]>::from(v), [1.0, 777.0, 3.0]);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let _ = Vec3::X[std::hint::black_box(3)];
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec3::Z), "(0, 0, 1)");
        assert_eq!(format!("{:?}", Vec3::Z), "(0.0, 0.0, 1.0)");
    }

    #[test]
    fn from_slice() {
        let v = Vec3::try_from(&[1.0f32, 2.0, 3.0][..]).unwrap();
        assert_eq!(v, vec3(1.0, 2.0, 3.0));

        let err = Vec3::try_from(&[1.0f32, 2.0][..]).unwrap_err();
        assert_eq!(err.expected(), 3);
        assert_eq!(err.actual(), 2);
        assert_eq!(err.to_string(), "expected a slice of 3 elements, got 2");
    }

    #[test]
    fn nil() {
        assert!(Vec3::default().is_nil());
        assert!(Vec3::ZERO.is_nil());
        assert!(!Vec3::X.is_nil());

        let mut v = vec3(1.0, 2.0, 3.0);
        v.clear();
        assert!(v.is_nil());
    }

    #[test]
    fn undefined() {
        let mut v = vec3(1.0, 2.0, 3.0);
        assert!(!v.is_nan());
        assert!(v.is_finite());
        v.set_undefined();
        assert!(v.is_nan());
        assert!(v.x.is_nan() && v.y.is_nan() && v.z.is_nan());
        assert!(!v.is_finite());

        let mut w = Vec3::X;
        w.set_nan();
        assert!(w.x.is_nan() && w.y.is_nan() && w.z.is_nan());

        // Undefined vectors propagate through arithmetic.
        assert!((v + Vec3::ONE).is_nan());
        assert!((v * 0.0).is_nan());
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1.0, 3.0, -5.0).dot(vec3(4.0, -2.0, -1.0)), 3.0);
        assert_eq!(vec3(1.0, 3.0, -5.0).dot(vec3(1.0, 3.0, -5.0)), 35.0);
        assert_eq!(Vec3::Z.dot(Vec3::Z), 1.0);
        assert_eq!(Vec3::X.dot(Vec3::Y), 0.0);

        // The XY variant ignores Z entirely.
        assert_eq!(Vec3::Z.dot_xy(Vec3::Z), 0.0);
        assert_eq!(vec3(1.0, 2.0, 100.0).dot_xy(vec3(3.0, 4.0, -100.0)), 11.0);
    }

    #[test]
    fn dot_matches_norm() {
        let v = vec3(-2.5, 1.0, 7.0);
        assert_eq!(v.dot(v), v.norm2());
    }

    #[test]
    fn cross() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);

        let a = vec3(1.0, -2.0, 0.5);
        let b = vec3(3.0, 4.0, -1.0);
        assert_eq!(a.cross(b), -b.cross(a));
        assert_approx_eq!(a.cross(b).dot(a), 0.0).abs(1e-6);
        assert_approx_eq!(a.cross(b).dot(b), 0.0).abs(1e-6);
        assert!(a.cross(a).is_nil());
    }

    #[test]
    fn normalize() {
        let v = vec3(3.0, -4.0, 12.0);
        assert_approx_eq!(v.normalized().norm(), 1.0).abs(1e-6);
        assert_approx_eq!(v.normalized(), vec3(3.0, -4.0, 12.0) / 13.0).abs(1e-6);

        let mut w = v;
        w.normalize().normalize();
        assert_approx_eq!(w, v.normalized()).abs(1e-6);

        assert!(Vec3::ZERO.normalized().is_nan());
    }

    #[test]
    fn component_functions() {
        let v = vec3(-4.0, 0.0, 9.0);
        assert_eq!(v.sum(), 5.0);
        assert_eq!(v.abs(), vec3(4.0, 0.0, 9.0));
        assert_eq!(v.abs().sqrt(), vec3(2.0, 0.0, 3.0));
        assert_eq!(v.replace_zeros(), vec3(-4.0, 1.0, 9.0));
        assert_eq!(v.powf(2.0), vec3(16.0, 0.0, 81.0));
        assert_eq!(v.min(Vec3::ZERO), vec3(-4.0, 0.0, 0.0));
        assert_eq!(v.max(Vec3::ZERO), vec3(0.0, 0.0, 9.0));
    }
}
