use core::f64::consts::TAU;
use core::fmt::Display;

use quatrix::{
    almost_equal, AlmostEqual, AlmostEqualContext, FloatScalar, LinalgError, Matrix, Matrix2,
    Matrix3, Matrix4, Quaternion, Vector, Vector2, Vector3, Vector4,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ITERATIONS: usize = 200;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_cafe)
}

fn ctx() -> AlmostEqualContext<f64> {
    AlmostEqualContext::default()
}

// Products of random matrices lose a few more digits than the defaults allow
fn loose() -> AlmostEqualContext<f64> {
    AlmostEqualContext::new(1.0e-9, 1.0e-9)
}

fn loose_f32() -> AlmostEqualContext<f32> {
    AlmostEqualContext::new(1.0e-4, 1.0e-4)
}

fn lit<T: FloatScalar>(x: f64) -> T {
    num_traits::cast(x).unwrap()
}

fn uniform<T: FloatScalar>(rng: &mut StdRng, lo: f64, hi: f64) -> T {
    lit(rng.gen_range(lo..hi))
}

fn random_vector<T: FloatScalar, const N: usize>(rng: &mut StdRng) -> Vector<T, N> {
    let mut v = Vector::zeros();
    for i in 0..N {
        v[i] = uniform(rng, -10.0, 10.0);
    }
    v
}

fn random_unit_vector3<T: FloatScalar>(rng: &mut StdRng) -> Vector3<T> {
    loop {
        let v: Vector3<T> = random_vector(rng);
        if v.magnitude() > lit::<T>(0.1) {
            return v.normalize();
        }
    }
}

/// Diagonally dominant, so always comfortably invertible.
fn random_invertible<T: FloatScalar, const N: usize>(rng: &mut StdRng) -> Matrix<T, N, N> {
    let mut m = Matrix::zeros();
    for i in 0..N {
        for j in 0..N {
            m[(i, j)] = uniform(rng, -1.0, 1.0);
        }
        let shift: T = lit(if rng.gen_bool(0.5) { 4.0 } else { -4.0 });
        m[(i, i)] = m[(i, i)] + shift;
    }
    m
}

fn random_unit_quaternion<T: FloatScalar>(rng: &mut StdRng) -> Quaternion<T> {
    Quaternion::from_axis_angle(&random_unit_vector3(rng), uniform(rng, -TAU, TAU))
}

fn assert_almost<T: FloatScalar, A: AlmostEqual<T> + Display>(
    ctx: &AlmostEqualContext<T>,
    got: &A,
    want: &A,
    msg: &str,
) {
    assert!(got.almost_eq(ctx, want), "{msg}: got {got}, want {want}");
}

// ── Identity laws ───────────────────────────────────────────────────

// `tight` covers the identity and the two inverses, `wide` the products
// that pass through random vectors.
macro_rules! identity_and_inverse_laws {
    ($name:ident, $t:ty, $n:literal, $tight:expr, $wide:expr) => {
        #[test]
        fn $name() {
            let (tight, wide): (AlmostEqualContext<$t>, AlmostEqualContext<$t>) = ($tight, $wide);
            let mut rng = rng();
            let id = Matrix::<$t, $n, $n>::eye();
            for _ in 0..ITERATIONS {
                let m: Matrix<$t, $n, $n> = random_invertible(&mut rng);
                assert_eq!(m * id, m);
                assert_eq!(id * m, m);

                let inv = m.inverse().unwrap();
                assert_almost(&tight, &(m * inv), &id, "m * inverse");
                assert_almost(&wide, &(inv * m), &id, "inverse * m");

                let gj = m.inverse_gauss_jordan().unwrap();
                assert_almost(&tight, &gj, &inv, "Gauss-Jordan vs adjugate");

                let mut in_place = m;
                in_place.invert_in_place().unwrap();
                assert_eq!(in_place, inv);

                let v: Vector<$t, $n> = random_vector(&mut rng);
                assert_almost(&wide, &(inv * (m * v)), &v, "inverse undoes transform");
            }
        }
    };
}

identity_and_inverse_laws!(laws_2x2, f64, 2, loose(), loose());
identity_and_inverse_laws!(laws_3x3, f64, 3, loose(), loose());
identity_and_inverse_laws!(laws_4x4, f64, 4, loose(), loose());
identity_and_inverse_laws!(laws_2x2_f32, f32, 2, AlmostEqualContext::default(), loose_f32());
identity_and_inverse_laws!(laws_3x3_f32, f32, 3, AlmostEqualContext::default(), loose_f32());
identity_and_inverse_laws!(laws_4x4_f32, f32, 4, AlmostEqualContext::default(), loose_f32());

#[test]
fn transpose_laws() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a: Matrix4<f64> = random_invertible(&mut rng);
        let b: Matrix4<f64> = random_invertible(&mut rng);
        assert_eq!(a.transpose().transpose(), a);
        assert_almost(&ctx(), &(a * b).transpose(), &(b.transpose() * a.transpose()), "(ab)^T");
        assert_eq!(a.transpose().trace(), a.trace());
    }
}

#[test]
fn determinant_is_multiplicative() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a: Matrix3<f64> = random_invertible(&mut rng);
        let b: Matrix3<f64> = random_invertible(&mut rng);
        let lhs = (a * b).det();
        let rhs = a.det() * b.det();
        assert!(loose().relative * lhs.abs() >= (lhs - rhs).abs(), "{lhs} vs {rhs}");
        assert!((a.transpose().det() - a.det()).abs() <= 1.0e-9 * a.det().abs());
    }
}

#[test]
fn singular_matrices_are_rejected() {
    // Third column is all zeros
    let m = Matrix4::new([
        [1.0, 2.0, 0.0, 4.0],
        [5.0, 6.0, 0.0, 8.0],
        [2.0, 4.0, 0.0, 8.0],
        [0.0, 1.0, 0.0, 1.0],
    ]);
    assert_eq!(m.det(), 0.0);
    assert_eq!(m.inverse(), Err(LinalgError::Singular));
    assert_eq!(m.inverse_gauss_jordan(), Err(LinalgError::Singular));

    let mut copy = m;
    assert!(copy.invert_in_place().is_err());
    assert_eq!(copy, m);
}

#[test]
fn tolerance_rejects_vanishing_determinant() {
    let m = Matrix3::new([[1.0e-300, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    assert_eq!(m.det(), 1.0e-300);
    assert!(m.inverse().is_ok());
    assert_eq!(m.inverse_with_tolerance(&ctx()), Err(LinalgError::Singular));
    assert!(Matrix3::<f64>::eye().inverse_with_tolerance(&ctx()).is_ok());
}

// ── Row operations ──────────────────────────────────────────────────

#[test]
fn row_operations_reject_every_bad_index() {
    let m = Matrix3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    for bad in [3, 4, 100, usize::MAX] {
        let err = Err(LinalgError::RowOutOfRange { row: bad, rows: 3 });
        for good in 0..3 {
            assert_eq!(m.exchange_rows(bad, good), err);
            assert_eq!(m.exchange_rows(good, bad), err);
            assert_eq!(m.add_row_scaled(bad, good, good, 2.0), err);
            assert_eq!(m.add_row_scaled(good, bad, good, 2.0), err);
            assert_eq!(m.add_row_scaled(good, good, bad, 2.0), err);
        }
        assert_eq!(m.scale_row(bad, 2.0), err);
        assert_eq!(m.try_row(bad), Err(LinalgError::RowOutOfRange { row: bad, rows: 3 }));
        assert_eq!(m.try_col(bad), Err(LinalgError::ColumnOutOfRange { col: bad, cols: 3 }));
        assert!(m.try_get(bad, 0).is_err());
        assert!(m.try_get(0, bad).is_err());
    }
}

#[test]
fn row_operations_preserve_solution_space() {
    // Row-reducing [A | I] by hand gives the same inverse
    let a = Matrix2::new([[2.0, 1.0], [6.0, 4.0]]);
    let mut left = a;
    let mut right = Matrix2::eye();

    left.add_row_scaled_in_place(1, 0, 1, -3.0).unwrap();
    right.add_row_scaled_in_place(1, 0, 1, -3.0).unwrap();
    left.add_row_scaled_in_place(0, 1, 0, -1.0).unwrap();
    right.add_row_scaled_in_place(0, 1, 0, -1.0).unwrap();
    left.scale_row_in_place(0, 0.5).unwrap();
    right.scale_row_in_place(0, 0.5).unwrap();

    assert_eq!(left, Matrix2::eye());
    assert_eq!(right, a.inverse().unwrap());
}

// ── Transforms ──────────────────────────────────────────────────────

#[test]
fn translation_moves_points_not_directions() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let t: Vector3<f64> = random_vector(&mut rng);
        let p: Vector3<f64> = random_vector(&mut rng);
        let m = Matrix4::translation(&t);

        let moved = m * Vector4::from_point(&p);
        assert_almost(&ctx(), &moved.xyz(), &(p + t), "point");
        assert_eq!(moved.w(), 1.0);

        let d = Vector4::from_direction(&p);
        assert_eq!(m * d, d);
    }

    let m = Matrix3::translation(&Vector2::new(2.0, -3.0));
    assert_eq!(m * Vector3::new(1.0, 1.0, 1.0), Vector3::new(3.0, -2.0, 1.0));
}

#[test]
fn rotation_matrices_agree_with_quaternions() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let axis: Vector3<f64> = random_unit_vector3(&mut rng);
        let angle = rng.gen_range(-TAU..TAU);
        let q = Quaternion::from_axis_angle(&axis, angle);

        assert_almost(&ctx(), &q.to_rotation_matrix3(), &Matrix3::rotation(&axis, angle), "3x3");
        assert_almost(&ctx(), &q.to_rotation_matrix4(), &Matrix4::rotation(&axis, angle), "4x4");

        let v: Vector3<f64> = random_vector(&mut rng);
        assert_almost(&loose(), &(q * v), &(Matrix3::rotation(&axis, angle) * v), "rotate");
    }
}

fn check_look_at<T: FloatScalar>(ctx: AlmostEqualContext<T>) {
    let mut rng = rng();
    let mut checked = 0;
    while checked < ITERATIONS {
        let origin: Vector3<T> = random_vector(&mut rng);
        let target: Vector3<T> = random_vector(&mut rng);
        let up: Vector3<T> = random_unit_vector3(&mut rng);

        let forward = target - origin;
        if forward.magnitude() < lit::<T>(0.5)
            || forward.normalize().cross(&up).magnitude() < lit::<T>(0.1)
        {
            continue;
        }
        checked += 1;

        let m = Matrix4::look_at(&origin, &target, &up);
        let q = Quaternion::look_at(&origin, &target, &up);
        assert_almost(&ctx, &q.to_rotation_matrix3(), &m.block(0, 0), "look_at");

        // The eye lands at the origin and the target straight down -z
        let (zero, one) = (T::zero(), T::one());
        let eye = m * Vector4::from_point(&origin);
        assert_almost(&ctx, &eye, &Vector4::new(zero, zero, zero, one), "eye");
        let seen = (m * Vector4::from_point(&target)).xyz();
        assert_almost(&ctx, &seen, &Vector3::new(zero, zero, -forward.magnitude()), "target");
    }
}

#[test]
fn look_at_equivalence() {
    check_look_at::<f64>(loose());
}

#[test]
fn look_at_equivalence_f32() {
    check_look_at::<f32>(loose_f32());
}

// ── Quaternions ─────────────────────────────────────────────────────

fn check_matrix_round_trip<T: FloatScalar>(ctx: AlmostEqualContext<T>) {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let q: Quaternion<T> = random_unit_quaternion(&mut rng);

        let back = Quaternion::from_rotation_matrix3(&q.to_rotation_matrix3());
        assert!(
            back.almost_eq(&ctx, &q) || back.is_negation_of(&ctx, &q),
            "3x3 round trip: {back} vs {q}"
        );

        let back = Quaternion::from_rotation_matrix4(&q.to_rotation_matrix4());
        assert!(
            back.almost_eq(&ctx, &q) || back.is_negation_of(&ctx, &q),
            "4x4 round trip: {back} vs {q}"
        );
    }
}

#[test]
fn quaternion_matrix_round_trip() {
    check_matrix_round_trip::<f64>(loose());
}

#[test]
fn quaternion_matrix_round_trip_f32() {
    check_matrix_round_trip::<f32>(AlmostEqualContext::default());
}

#[test]
fn quaternion_axis_angle_round_trip() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let q: Quaternion<f64> = random_unit_quaternion(&mut rng);
        let (axis, angle) = q.to_axis_angle();
        let back = Quaternion::from_axis_angle(&axis, angle);
        assert!(back.almost_eq(&loose(), &q) || back.is_negation_of(&loose(), &q));
    }
}

#[test]
fn quaternion_algebraic_laws() {
    let mut rng = rng();
    let id = Quaternion::identity();
    for _ in 0..ITERATIONS {
        let a: Quaternion<f64> = random_unit_quaternion(&mut rng);
        let b: Quaternion<f64> = random_unit_quaternion(&mut rng);
        let c: Quaternion<f64> = random_unit_quaternion(&mut rng);

        assert_eq!(a.conjugate().conjugate(), a);
        assert_eq!(a * id, a);
        assert_eq!(id * a, a);
        assert_almost(&ctx(), &(a * a.inverse()), &id, "a * a^-1");
        assert_almost(&loose(), &((a * b) * c), &(a * (b * c)), "associativity");
        assert_almost(&ctx(), &(a * b).conjugate(), &(b.conjugate() * a.conjugate()), "conj");
        assert!(((a * b).magnitude() - 1.0).abs() < 1.0e-12);
    }
}

#[test]
fn composition_order() {
    let x = Vector3::new(1.0, 0.0, 0.0);
    let y = Vector3::new(0.0, 1.0, 0.0);
    let qx = Quaternion::from_axis_angle(&x, 45.0_f64.to_radians());
    let qy = Quaternion::from_axis_angle(&y, 45.0_f64.to_radians());

    let expected = Quaternion::new(
        0.35355339059327373,
        0.3535533905932738,
        -0.14644660940672624,
        0.8535533905932737,
    );
    assert_almost(&ctx(), &(qy * qx), &expected, "qy * qx");

    // Matrices compose the same way
    let mq = (qy * qx).to_rotation_matrix3();
    let mm = qy.to_rotation_matrix3() * qx.to_rotation_matrix3();
    assert_almost(&ctx(), &mq, &mm, "matrix composition");
}

fn check_slerp_endpoints<T: FloatScalar>(ctx: AlmostEqualContext<T>) {
    let unit = AlmostEqualContext::<T>::default();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let q0: Quaternion<T> = random_unit_quaternion(&mut rng);
        let mut q1: Quaternion<T> = random_unit_quaternion(&mut rng);

        let start = q0.interpolate_spherical_linear(&q1, T::zero());
        assert_almost(&ctx, &start, &q0.normalize(), "alpha = 0");

        let end = q0.interpolate_spherical_linear(&q1, T::one());
        if q0.dot(&q1) < T::zero() {
            q1 = -q1;
        }
        assert_almost(&ctx, &end, &q1.normalize(), "alpha = 1");

        let mid = q0.interpolate_spherical_linear(&q1, lit(0.5));
        assert!(almost_equal(&unit, mid.magnitude(), T::one()), "|mid| = {:?}", mid.magnitude());
    }
}

#[test]
fn slerp_endpoint_law() {
    check_slerp_endpoints::<f64>(loose());
}

#[test]
fn slerp_endpoint_law_f32() {
    check_slerp_endpoints::<f32>(AlmostEqualContext::default());
}

#[test]
fn slerp_near_identical_f32() {
    // dot = cos(0.002) is above 1 - 1e-5, so this takes the normalized lerp
    let y = Vector3::new(0.0_f32, 1.0, 0.0);
    let q0 = Quaternion::from_axis_angle(&y, 0.0);
    let q1 = Quaternion::from_axis_angle(&y, 0.004);
    assert!(q0.dot(&q1) > 1.0 - f32::RELATIVE_EPSILON);

    let ctx = AlmostEqualContext::<f32>::default();
    let mid = q0.interpolate_spherical_linear(&q1, 0.5);
    assert_almost(&ctx, &mid, &Quaternion::from_axis_angle(&y, 0.002), "mid");
    assert!(almost_equal(&ctx, mid.magnitude(), 1.0));
    assert_almost(&ctx, &q0.interpolate_spherical_linear(&q1, 1.0), &q1, "end");
}

#[test]
fn slerp_antipodal_sign_correction() {
    let y = Vector3::new(0.0, 1.0, 0.0);
    let q0 = Quaternion::from_axis_angle(&y, 0.0);
    let q1 = Quaternion::from_axis_angle(&y, 181.0_f64.to_radians());

    assert!(q0.dot(&q1) < 0.0);
    let end = q0.interpolate_spherical_linear(&q1, 1.0);
    assert_almost(&ctx(), &end, &-q1, "antipodal end");

    // The path goes the short way, through a 179° turn the other direction
    let mid = q0.interpolate_spherical_linear(&q1, 0.5);
    let (_, angle) = mid.to_axis_angle();
    assert!((angle - 89.5_f64.to_radians()).abs() < 1.0e-9);
}

#[test]
fn forty_five_degrees_about_x() {
    let q = Quaternion::from_axis_angle(&Vector3::new(1.0, 0.0, 0.0), 45.0_f64.to_radians());
    let expected = Quaternion::new(0.3826834323650898, 0.0, 0.0, 0.9238795325112867);
    assert_almost(&ctx(), &q, &expected, "45° about X");

    let qf = Quaternion::from_axis_angle(&Vector3::new(1.0_f32, 0.0, 0.0), 45.0_f32.to_radians());
    assert!(qf.almost_eq(
        &AlmostEqualContext::default(),
        &Quaternion::new(0.38268343, 0.0, 0.0, 0.9238795)
    ));
}

// ── Vectors ─────────────────────────────────────────────────────────

#[test]
fn vector_laws() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a: Vector3<f64> = random_vector(&mut rng);
        let b: Vector3<f64> = random_vector(&mut rng);

        let c = a.cross(&b);
        assert!(c.dot(&a).abs() <= 1.0e-9 * a.magnitude_squared().max(1.0) * b.magnitude());
        assert!(c.dot(&b).abs() <= 1.0e-9 * b.magnitude_squared().max(1.0) * a.magnitude());
        assert_eq!(b.cross(&a), -c);

        let (left, right) = Vector3::ortho_normalize(&a, &b);
        assert_eq!(left, a);
        assert!(right.dot(&a).abs() <= 1.0e-9 * a.magnitude());
        assert!((right.magnitude() - 1.0).abs() < 1.0e-12);

        assert_almost(&ctx(), &a.interpolate_linear(&b, 0.0), &a, "lerp 0");
        assert_almost(&ctx(), &a.interpolate_linear(&b, 1.0), &b, "lerp 1");
        assert!((a.distance(&b) - (b - a).magnitude()).abs() < 1.0e-12);
    }
}

#[test]
fn degenerate_normalize_is_zero() {
    assert_eq!(Vector3::<f64>::zeros().normalize(), Vector3::zeros());
    assert_eq!(Vector4::<f32>::zeros().normalize(), Vector4::zeros());
    let z = Quaternion::new(0.0, 0.0, 0.0, 0.0);
    assert_eq!(z.normalize(), z);
}

#[test]
fn display_formats() {
    assert_eq!(format!("{}", Vector2::new(0.0_f64, 1.0)), "[VectorI2D 0.0 1.0]");
    assert_eq!(
        format!("{}", Quaternion::new(0.0_f64, 1.0, 2.0, 3.0)),
        "[QuaternionI4D 0.0 1.0 2.0 3.0]"
    );
    assert_eq!(
        format!("{}", Matrix2::new([[1.0_f32, 2.0], [3.0, 4.0]])),
        "[MatrixI2x2F [1.0 2.0] [3.0 4.0]]"
    );
}
