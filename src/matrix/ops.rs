//! Implementations of `std::ops`.

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{approx::ApproxEq, Vec3};

use super::Mat3;

impl Index<(usize, usize)> for Mat3 {
    type Output = f32;

    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < 3 && col < 3,
            "matrix index ({row}, {col}) out of bounds for a 3x3 matrix"
        );
        &self.as_array()[row * 3 + col]
    }
}

impl IndexMut<(usize, usize)> for Mat3 {
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < 3 && col < 3,
            "matrix index ({row}, {col}) out of bounds for a 3x3 matrix"
        );
        &mut self.as_mut_array()[row * 3 + col]
    }
}

impl ApproxEq for Mat3 {
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

/// Matrix-Vector multiplication.
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        Vec3::new(self.row(0).dot(rhs), self.row(1).dot(rhs), self.row(2).dot(rhs))
    }
}

/// Matrix-Matrix multiplication.
impl Mul<Mat3> for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Self::Output {
        let mut out = Mat3::ZERO;
        for row in 0..3 {
            for col in 0..3 {
                out[(row, col)] = self.row(row).dot(rhs.col(col));
            }
        }
        out
    }
}

impl MulAssign<Mat3> for Mat3 {
    fn mul_assign(&mut self, rhs: Mat3) {
        *self = *self * rhs;
    }
}

/// Matrix-Scalar multiplication.
impl Mul<f32> for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: f32) -> Self::Output {
        Mat3::from_array(self.into_array().map(|elem| elem * rhs))
    }
}

impl MulAssign<f32> for Mat3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

/// Scalar-Matrix multiplication.
impl Mul<Mat3> for f32 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Self::Output {
        rhs * self
    }
}

impl Add for Mat3 {
    type Output = Mat3;

    fn add(mut self, rhs: Mat3) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign for Mat3 {
    fn add_assign(&mut self, rhs: Mat3) {
        for (l, r) in self.as_mut_array().iter_mut().zip(rhs.as_array()) {
            *l += r;
        }
    }
}

impl Sub for Mat3 {
    type Output = Mat3;

    fn sub(mut self, rhs: Mat3) -> Self::Output {
        self -= rhs;
        self
    }
}

impl SubAssign for Mat3 {
    fn sub_assign(&mut self, rhs: Mat3) {
        for (l, r) in self.as_mut_array().iter_mut().zip(rhs.as_array()) {
            *l -= r;
        }
    }
}

impl Neg for Mat3 {
    type Output = Mat3;

    fn neg(self) -> Self::Output {
        Mat3::from_array(self.into_array().map(f32::neg))
    }
}
