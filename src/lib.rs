//! Small, self-contained 3D linear algebra: vectors, 3x3 matrices and quaternions.
//!
//! # Overview
//!
//! The crate provides three plain value types:
//!
//! - [`Vec3`], a 3-component `f32` vector.
//! - [`Mat3`], a 3x3 `f32` matrix stored in row-major order.
//! - [`Quat`], a quaternion with a scalar part `w` and a vector part `(x, y, z)`.
//!
//! Rotations can be expressed as a rotation matrix, a unit quaternion, or a triple of Euler
//! angles, and the crate converts between all three:
//!
//! - [`Quat::from_angles`] builds a quaternion from roll, pitch and yaw.
//! - [`Quat::to_rotation_matrix`] turns a unit quaternion into a rotation matrix.
//! - [`Quat::from_mat3`] recovers a quaternion from a rotation matrix, using a branching algorithm
//!   that stays accurate for rotations close to 180°.
//! - [`Mat3::to_quat`] is the plain trace-based conversion, which is only accurate away from 180°.
//!
//! ```
//! # use triad::*;
//! use std::f32::consts::FRAC_PI_2;
//!
//! let q = Quat::from_angles(0.0, 0.0, FRAC_PI_2);
//! let rotated = q.to_rotation_matrix() * Vec3::X;
//! assert_approx_eq!(rotated, Vec3::Y).abs(1e-6);
//! ```
//!
//! # Goals & Non-Goals
//!
//! - Only the fixed sizes needed for 3D orientation are supported. There are no general N×N
//!   matrices, no decompositions, and no SIMD.
//! - Numeric operations never fail. Invalid input (a zero-length vector being normalized, an
//!   out-of-domain `acos`, a non-rotation matrix) results in `NaN` or infinite components, which
//!   flow through subsequent computations. Use [`Vec3::is_nan`] or [`Vec3::is_finite`] to detect
//!   them.
//! - Matrices passed to the matrix-to-quaternion conversions are assumed to be orthonormal. This is
//!   not checked.
//! - All types are [`bytemuck::Pod`], so slices of them can be uploaded to the GPU or passed over
//!   FFI without copying.

pub mod approx;
pub mod consts;
mod error;
mod matrix;
mod quat;
mod vector;

pub use consts::{DEG_TO_RAD, RAD_TO_DEG};
pub use error::LengthError;
pub use matrix::*;
pub use quat::*;
pub use vector::*;
