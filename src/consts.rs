//! Numeric constants and helpers shared by all types.

use std::f32::consts::PI;

/// Multiplying an angle in radians with this value converts it to degrees.
pub const RAD_TO_DEG: f32 = 180.0 / PI;

/// Multiplying an angle in degrees with this value converts it to radians.
pub const DEG_TO_RAD: f32 = PI / 180.0;

#[inline]
pub(crate) fn sqr(f: f32) -> f32 {
    f * f
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn angle_units() {
        assert_approx_eq!(PI * RAD_TO_DEG, 180.0).rel(1e-6);
        assert_approx_eq!(180.0 * DEG_TO_RAD, PI).rel(1e-6);
        assert_approx_eq!(RAD_TO_DEG * DEG_TO_RAD, 1.0).rel(1e-6);
        assert_eq!(sqr(-3.0), 9.0);
    }
}
