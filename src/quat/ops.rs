//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{approx::ApproxEq, Vec3};

use super::Quat;

impl Index<usize> for Quat {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_array()[index]
    }
}

impl IndexMut<usize> for Quat {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_array()[index]
    }
}

impl ApproxEq for Quat {
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

/// Hamilton product.
///
/// Composes two rotations: `a * b` first rotates by `b`, then by `a`.
impl Mul for Quat {
    type Output = Quat;

    fn mul(self, rhs: Quat) -> Self::Output {
        let Quat { w: aw, x: ax, y: ay, z: az } = self;
        let Quat { w: bw, x: bx, y: by, z: bz } = rhs;
        Quat::new(
            aw * bw - ax * bx - ay * by - az * bz,
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
        )
    }
}

impl MulAssign for Quat {
    fn mul_assign(&mut self, rhs: Quat) {
        *self = *self * rhs;
    }
}

/// Hamilton product of `self` with the pure quaternion `(0, rhs)`.
impl Mul<Vec3> for Quat {
    type Output = Quat;

    fn mul(self, rhs: Vec3) -> Self::Output {
        self * Quat::from_parts(0.0, rhs)
    }
}

impl Mul<f32> for Quat {
    type Output = Quat;

    fn mul(self, rhs: f32) -> Self::Output {
        Quat::from_array(self.to_array().map(|c| c * rhs))
    }
}

impl MulAssign<f32> for Quat {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Mul<Quat> for f32 {
    type Output = Quat;

    fn mul(self, rhs: Quat) -> Self::Output {
        rhs * self
    }
}

impl Div<f32> for Quat {
    type Output = Quat;

    fn div(self, rhs: f32) -> Self::Output {
        Quat::from_array(self.to_array().map(|c| c / rhs))
    }
}

impl DivAssign<f32> for Quat {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl Add for Quat {
    type Output = Quat;

    fn add(self, rhs: Quat) -> Self::Output {
        Quat::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Quat {
    fn add_assign(&mut self, rhs: Quat) {
        *self = *self + rhs;
    }
}

impl Sub for Quat {
    type Output = Quat;

    fn sub(self, rhs: Quat) -> Self::Output {
        Quat::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Quat {
    fn sub_assign(&mut self, rhs: Quat) {
        *self = *self - rhs;
    }
}

impl Neg for Quat {
    type Output = Quat;

    fn neg(self) -> Self::Output {
        Quat::from_array(self.to_array().map(f32::neg))
    }
}
