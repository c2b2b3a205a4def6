//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{approx::ApproxEq, Quat};

use super::Vec3;

impl Index<usize> for Vec3 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_array()[index]
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_array()[index]
    }
}

impl PartialEq<[f32; 3]> for Vec3 {
    fn eq(&self, other: &[f32; 3]) -> bool {
        self.as_array() == other
    }
}

impl ApproxEq for Vec3 {
    type Tolerance = f32;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f32) -> bool {
        self.as_array().abs_diff_eq(other.as_array(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f32) -> bool {
        self.as_array().rel_diff_eq(other.as_array(), rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.as_array().ulps_diff_eq(other.as_array(), ulps_tolerance)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        self.map(f32::neg)
    }
}

/// Element-wise operations with another vector, and scalar operations applied to every component.
macro_rules! arith {
    ($($trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident, $op:tt;)+) => {
        $(
            impl $trait for Vec3 {
                type Output = Vec3;

                #[inline]
                fn $method(self, rhs: Vec3) -> Self::Output {
                    self.zip_map(rhs, |l, r| l $op r)
                }
            }

            impl $trait<f32> for Vec3 {
                type Output = Vec3;

                #[inline]
                fn $method(self, rhs: f32) -> Self::Output {
                    self.map(|l| l $op rhs)
                }
            }

            impl $assign_trait for Vec3 {
                #[inline]
                fn $assign_method(&mut self, rhs: Vec3) {
                    *self = *self $op rhs;
                }
            }

            impl $assign_trait<f32> for Vec3 {
                #[inline]
                fn $assign_method(&mut self, rhs: f32) {
                    *self = *self $op rhs;
                }
            }
        )+
    };
}

arith! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
    Mul::mul, MulAssign::mul_assign, *;
    Div::div, DivAssign::div_assign, /;
}

/// Scalar-Vector multiplication (scaling).
impl Mul<Vec3> for f32 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}

/// Adds the scalar to every component.
impl Add<Vec3> for f32 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        rhs + self
    }
}

/// Subtracts every component from the scalar.
impl Sub<Vec3> for f32 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Self::Output {
        rhs.map(|c| self - c)
    }
}

/// Hamilton product of the pure quaternion `(0, self)` with `rhs`.
impl Mul<Quat> for Vec3 {
    type Output = Quat;

    fn mul(self, rhs: Quat) -> Self::Output {
        Quat::from_parts(0.0, self) * rhs
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec3, Quat, Vec3};

    #[test]
    fn elementwise() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(4.0, 5.0, 6.0);
        assert_eq!(a + b, vec3(5.0, 7.0, 9.0));
        assert_eq!(b - a, vec3(3.0, 3.0, 3.0));
        assert_eq!(a * b, vec3(4.0, 10.0, 18.0));
        assert_eq!(b / a, vec3(4.0, 2.5, 2.0));
        assert_eq!(-a, vec3(-1.0, -2.0, -3.0));
    }

    #[test]
    fn scalar() {
        let a = vec3(1.0, 2.0, 4.0);
        assert_eq!(a * 2.0, vec3(2.0, 4.0, 8.0));
        assert_eq!(2.0 * a, vec3(2.0, 4.0, 8.0));
        assert_eq!(a / 2.0, vec3(0.5, 1.0, 2.0));
        assert_eq!(a + 1.0, vec3(2.0, 3.0, 5.0));
        assert_eq!(1.0 + a, vec3(2.0, 3.0, 5.0));
        assert_eq!(a - 1.0, vec3(0.0, 1.0, 3.0));
        assert_eq!(1.0 - a, vec3(0.0, -1.0, -3.0));
    }

    #[test]
    fn assign() {
        let mut v = vec3(1.0, 2.0, 3.0);
        v += Vec3::ONE;
        assert_eq!(v, vec3(2.0, 3.0, 4.0));
        v -= vec3(2.0, 0.0, 0.0);
        assert_eq!(v, vec3(0.0, 3.0, 4.0));
        v *= 2.0;
        assert_eq!(v, vec3(0.0, 6.0, 8.0));
        v *= vec3(1.0, 0.5, 0.25);
        assert_eq!(v, vec3(0.0, 3.0, 2.0));
        v /= 2.0;
        assert_eq!(v, vec3(0.0, 1.5, 1.0));
        v /= vec3(1.0, 3.0, 2.0);
        assert_eq!(v, vec3(0.0, 0.5, 0.5));
    }

    #[test]
    fn division_by_zero_propagates() {
        let v = vec3(1.0, -1.0, 0.0) / 0.0;
        assert_eq!(v.x, f32::INFINITY);
        assert_eq!(v.y, f32::NEG_INFINITY);
        assert!(v.z.is_nan());
    }

    #[test]
    fn pure_quaternion_product() {
        let v = vec3(1.0, 2.0, 3.0);
        let q = Quat::new(0.5, -1.0, 0.25, 2.0);
        assert_eq!(v * q, Quat::from_parts(0.0, v) * q);

        // The vector on the left and on the right give different results, since the Hamilton
        // product is not commutative.
        assert_approx_eq!(Vec3::X * Quat::new(0.0, 0.0, 1.0, 0.0), Quat::new(0.0, 0.0, 0.0, 1.0));
        assert_approx_eq!(Quat::new(0.0, 0.0, 1.0, 0.0) * Vec3::X, Quat::new(0.0, 0.0, 0.0, -1.0));
    }
}
