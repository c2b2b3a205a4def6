//! Randomized checks of the conversions between rotation representations.

use std::f32::consts::{FRAC_PI_2, PI};

use triad::{assert_approx_eq, vec3, Mat3, Quat, Vec3};

const ITERATIONS: usize = 1000;
const MAX_DELTA: f32 = 1e-5;

fn init_logger() {
    env_logger::builder()
        .is_test(true)
        .filter_module("triad", log::LevelFilter::Trace)
        .try_init()
        .ok();
}

fn random_angle(rng: &mut fastrand::Rng) -> f32 {
    (rng.f32() * 2.0 - 1.0) * PI
}

fn random_rotation(rng: &mut fastrand::Rng) -> Quat {
    Quat::from_angles(random_angle(rng), random_angle(rng), random_angle(rng))
}

fn random_vector(rng: &mut fastrand::Rng) -> Vec3 {
    vec3(rng.f32() - 0.5, rng.f32() - 0.5, rng.f32() - 0.5) * 10.0
}

/// Returns `q` or `-q`, whichever has a non-negative real part.
fn canonical(q: Quat) -> Quat {
    if q.w < 0.0 {
        -q
    } else {
        q
    }
}

#[test]
fn quat_matrix_quat_round_trip() {
    init_logger();
    let mut rng = fastrand::Rng::with_seed(0x5eed_0001);

    for _ in 0..ITERATIONS {
        let q = canonical(random_rotation(&mut rng));
        let recovered = Quat::from_mat3(&q.to_rotation_matrix());
        assert!(
            recovered.approx_eq_rotation(&q, MAX_DELTA),
            "{q:?} recovered as {recovered:?}"
        );
    }
}

#[test]
fn matrix_quat_matrix_round_trip() {
    init_logger();
    let mut rng = fastrand::Rng::with_seed(0x5eed_0002);

    for _ in 0..ITERATIONS {
        let mat = random_rotation(&mut rng).to_rotation_matrix();
        let recovered = Quat::from_mat3(&mat).to_rotation_matrix();
        assert_approx_eq!(recovered, mat, "matrix round trip").abs(MAX_DELTA);
    }
}

#[test]
fn hamilton_product_is_associative() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0003);

    for _ in 0..ITERATIONS {
        let (a, b, c) = (
            random_rotation(&mut rng),
            random_rotation(&mut rng),
            random_rotation(&mut rng),
        );
        assert_approx_eq!((a * b) * c, a * (b * c)).abs(MAX_DELTA);
    }
}

#[test]
fn product_with_conjugate_is_identity() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0004);

    for _ in 0..ITERATIONS {
        let q = random_rotation(&mut rng);
        assert_approx_eq!(q * q.conjugate(), Quat::IDENTITY).abs(MAX_DELTA);
        assert_approx_eq!(q.conjugate() * q, Quat::IDENTITY).abs(MAX_DELTA);
    }
}

#[test]
fn product_matches_matrix_composition() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0005);

    for _ in 0..ITERATIONS {
        let (a, b) = (random_rotation(&mut rng), random_rotation(&mut rng));
        assert_approx_eq!(
            (a * b).to_rotation_matrix(),
            a.to_rotation_matrix() * b.to_rotation_matrix()
        )
        .abs(MAX_DELTA);
    }
}

#[test]
fn rotate_matches_matrix() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0006);

    for _ in 0..ITERATIONS {
        let q = random_rotation(&mut rng);
        let v = random_vector(&mut rng);
        let rotated = q.rotate(v);
        assert_approx_eq!(rotated, q.to_rotation_matrix() * v).abs(1e-4);
        assert_approx_eq!(rotated.norm(), v.norm()).rel(1e-5);
    }
}

#[test]
fn vector_laws() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0007);

    assert!(Vec3::default().is_nil());
    for _ in 0..ITERATIONS {
        let (a, b) = (random_vector(&mut rng), random_vector(&mut rng));
        assert_eq!(a.cross(b), -b.cross(a));
        assert_approx_eq!(a.normalized().norm(), 1.0).abs(1e-6);
        // The cross product is orthogonal to both operands.
        assert_approx_eq!(a.cross(b).dot(a), 0.0).abs(1e-3);
    }
}

#[test]
fn euler_angles() {
    assert_eq!(Quat::from_angles(0.0, 0.0, 0.0), Quat::IDENTITY);
    assert_eq!(Quat::IDENTITY.to_rotation_matrix(), Mat3::identity());
    assert_eq!(Mat3::identity().to_quat(), Quat::IDENTITY);
    assert_eq!(Quat::from_mat3(&Mat3::identity()), Quat::IDENTITY);
    assert_eq!(Mat3::identity().determinant(), 1.0);
    assert_eq!(Mat3::identity().trace(), 3.0);

    let yaw = Quat::from_angles(0.0, 0.0, FRAC_PI_2);
    assert_approx_eq!(yaw.to_rotation_matrix() * Vec3::X, Vec3::Y).abs(1e-6);

    let pitch = Quat::from_angles(0.0, FRAC_PI_2, 0.0);
    assert_approx_eq!(pitch.to_rotation_matrix() * Vec3::Z, Vec3::X).abs(1e-6);

    let roll = Quat::from_angles(FRAC_PI_2, 0.0, 0.0);
    assert_approx_eq!(roll.to_rotation_matrix() * Vec3::Y, Vec3::Z).abs(1e-6);
}

#[test]
fn half_turns() {
    init_logger();

    for axis in [Vec3::X, Vec3::Y, Vec3::Z, vec3(1.0, 1.0, 0.0), vec3(-1.0, 2.0, 3.0)] {
        let axis = axis.normalized();
        let mat = Quat::from_parts(0.0, axis).to_rotation_matrix();
        assert_approx_eq!(mat.trace(), -1.0).abs(1e-5);

        let q = Quat::from_mat3(&mat);
        assert!(q.axis().is_finite() && q.w.is_finite(), "{q:?}");
        assert!(
            q.approx_eq_rotation(&Quat::from_parts(0.0, axis), MAX_DELTA),
            "axis {axis}: {q:?}"
        );
    }

    // The trace formula divides by `4w`, which is exactly 0 here.
    let exact = Mat3::from_diagonal(vec3(1.0, -1.0, -1.0));
    assert_eq!(Quat::from_mat3(&exact), Quat::new(0.0, 1.0, 0.0, 0.0));
    assert!(exact.to_quat().w.is_nan());
}

#[test]
fn close_to_half_turn() {
    init_logger();
    let mut rng = fastrand::Rng::with_seed(0x5eed_0008);

    for _ in 0..ITERATIONS {
        let axis = random_vector(&mut rng).normalized();
        let angle = PI - rng.f32() * 1e-3;
        let (sin, cos) = (angle * 0.5).sin_cos();
        let q = Quat::from_parts(cos, axis * sin);

        let recovered = Quat::from_mat3(&q.to_rotation_matrix());
        assert!(
            recovered.approx_eq_rotation(&q, MAX_DELTA),
            "{q:?} recovered as {recovered:?}"
        );
    }
}
