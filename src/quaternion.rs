use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::Float;

use crate::almost::{AlmostEqual, AlmostEqualContext};
use crate::matrix::{Matrix3, Matrix4};
use crate::traits::{FloatScalar, Scalar};
use crate::vector::{Vector3, Vector4};

/// Quaternion `x·i + y·j + z·k + w`.
///
/// Components are stored vector part first: `(x, y, z, w)`, with `w` the
/// scalar part. Addition, subtraction and scaling act component-wise as on a
/// 4-vector; `*` between quaternions is the Hamilton product.
///
/// Rotations use unit quaternions. `q` and `-q` describe the same rotation,
/// so results of a matrix round trip should be compared with
/// [`almost_eq`](AlmostEqual::almost_eq) *or*
/// [`is_negation_of`](Self::is_negation_of).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quaternion<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

// ── Constructors ─────────────────────────────────────────────────────

impl<T: Scalar> Quaternion<T> {
    /// Create a quaternion from components.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Identity quaternion `(0, 0, 0, 1)`.
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// Reinterpret a 4-vector `(x, y, z, w)` as a quaternion.
    #[inline]
    pub fn from_vector4(v: &Vector4<T>) -> Self {
        Self::new(v.x(), v.y(), v.z(), v.w())
    }

    /// Components as a 4-vector `(x, y, z, w)`.
    #[inline]
    pub fn to_vector4(&self) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, self.w)
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
        Self::new(f(self.x, rhs.x), f(self.y, rhs.y), f(self.z, rhs.z), f(self.w, rhs.w))
    }
}

impl<T: Scalar> Default for Quaternion<T> {
    /// The identity.
    fn default() -> Self {
        Self::identity()
    }
}

// ── 4-vector algebra ────────────────────────────────────────────────

impl<T: Scalar> Quaternion<T> {
    /// Every component multiplied by `k`.
    #[inline]
    pub fn scale(&self, k: T) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k, self.w * k)
    }

    /// `self + q * k`.
    #[inline]
    pub fn add_scaled(&self, q: &Self, k: T) -> Self {
        self.zip_with(q, |a, b| a + b * k)
    }

    /// Four-component dot product.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// Squared magnitude.
    #[inline]
    pub fn magnitude_squared(&self) -> T {
        self.dot(self)
    }

    /// `(-x, -y, -z, w)`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(T::zero() - self.x, T::zero() - self.y, T::zero() - self.z, self.w)
    }
}

impl<T: FloatScalar> Quaternion<T> {
    /// Magnitude.
    #[inline]
    pub fn magnitude(&self) -> T {
        Float::sqrt(self.magnitude_squared())
    }

    /// Unit quaternion in the same direction. The zero quaternion stays zero.
    pub fn normalize(&self) -> Self {
        let m = self.magnitude();
        if m == T::zero() {
            trace_event!("normalizing zero quaternion");
            return *self;
        }
        self.scale(T::one() / m)
    }

    /// Normalize in place.
    #[inline]
    pub fn normalize_in_place(&mut self) -> &mut Self {
        *self = self.normalize();
        self
    }

    /// Multiplicative inverse `conjugate / |q|²`.
    ///
    /// For a unit quaternion this is the conjugate. The zero quaternion has
    /// no inverse and maps to zero.
    pub fn inverse(&self) -> Self {
        let m2 = self.magnitude_squared();
        if m2 == T::zero() {
            trace_event!("inverting zero quaternion");
            return *self;
        }
        self.conjugate().scale(T::one() / m2)
    }

    /// True if every component of `self` is almost equal to the negated
    /// component of `other`.
    pub fn is_negation_of(&self, ctx: &AlmostEqualContext<T>, other: &Self) -> bool {
        self.almost_eq(ctx, &-*other)
    }
}

// ── Rotations ───────────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Rotation of `angle` radians about the unit vector `axis`:
    /// `(axis * sin(angle / 2), cos(angle / 2))`.
    ///
    /// ```
    /// use quatrix::{AlmostEqual, AlmostEqualContext, Quaternion, Vector3};
    /// let q = Quaternion::from_axis_angle(&Vector3::new(1.0, 0.0, 0.0), core::f64::consts::FRAC_PI_4);
    /// let expected = Quaternion::new(0.3826834323650898, 0.0, 0.0, 0.9238795325112867);
    /// assert!(q.almost_eq(&AlmostEqualContext::default(), &expected));
    /// ```
    pub fn from_axis_angle(axis: &Vector3<T>, angle: T) -> Self {
        let (s, c) = (angle / T::two()).sin_cos();
        Self::new(axis.x() * s, axis.y() * s, axis.z() * s, c)
    }

    /// Axis and angle of the rotation, angle in `[0, 2π]`.
    ///
    /// `self` is normalized first. When there is no rotation the axis is
    /// `+X` and the angle zero.
    pub fn to_axis_angle(&self) -> (Vector3<T>, T) {
        let q = self.normalize();
        let v = Vector3::new(q.x, q.y, q.z);
        let s = v.magnitude();
        if s == T::zero() {
            return (Vector3::new(T::one(), T::zero(), T::zero()), T::zero());
        }
        (v * (T::one() / s), T::two() * Float::atan2(s, q.w))
    }

    /// Unit quaternion for a rotation matrix (Shepperd's method).
    ///
    /// Picks the largest of `w`, `x`, `y`, `z` to divide by, so the result
    /// stays accurate near 180° rotations. The sign of the result is not
    /// specified.
    pub fn from_rotation_matrix3(m: &Matrix3<T>) -> Self {
        let (m00, m01, m02) = (m[(0, 0)], m[(0, 1)], m[(0, 2)]);
        let (m10, m11, m12) = (m[(1, 0)], m[(1, 1)], m[(1, 2)]);
        let (m20, m21, m22) = (m[(2, 0)], m[(2, 1)], m[(2, 2)]);
        let one = T::one();
        let four = T::two() * T::two();
        let trace = m00 + m11 + m22;

        if trace > T::zero() {
            // s = 4w
            let s = Float::sqrt(trace + one) * T::two();
            Self::new((m21 - m12) / s, (m02 - m20) / s, (m10 - m01) / s, s / four)
        } else if m00 >= m11 && m00 >= m22 {
            // s = 4x
            let s = Float::sqrt(one + m00 - m11 - m22) * T::two();
            Self::new(s / four, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
        } else if m11 >= m22 {
            // s = 4y
            let s = Float::sqrt(one + m11 - m00 - m22) * T::two();
            Self::new((m01 + m10) / s, s / four, (m12 + m21) / s, (m02 - m20) / s)
        } else {
            // s = 4z
            let s = Float::sqrt(one + m22 - m00 - m11) * T::two();
            Self::new((m02 + m20) / s, (m12 + m21) / s, s / four, (m10 - m01) / s)
        }
    }

    /// Unit quaternion for the rotation in the upper-left 3×3 block of `m`.
    pub fn from_rotation_matrix4(m: &Matrix4<T>) -> Self {
        Self::from_rotation_matrix3(&m.block(0, 0))
    }

    /// 3×3 rotation matrix. `self` must be a unit quaternion.
    pub fn to_rotation_matrix3(&self) -> Matrix3<T> {
        let two = T::two();
        let one = T::one();
        let Self { x, y, z, w } = *self;

        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Matrix3::new([
            [one - two * (yy + zz), two * (xy - wz), two * (xz + wy)],
            [two * (xy + wz), one - two * (xx + zz), two * (yz - wx)],
            [two * (xz - wy), two * (yz + wx), one - two * (xx + yy)],
        ])
    }

    /// Homogeneous 4×4 rotation matrix. `self` must be a unit quaternion.
    pub fn to_rotation_matrix4(&self) -> Matrix4<T> {
        let mut m = Matrix4::eye();
        m.set_block(0, 0, &self.to_rotation_matrix3());
        m
    }

    /// Orientation looking from `origin` toward `target` with `up` as the
    /// approximate up direction.
    ///
    /// Its rotation matrix equals the rotation part of
    /// [`Matrix4::look_at`] for the same arguments.
    pub fn look_at(origin: &Vector3<T>, target: &Vector3<T>, up: &Vector3<T>) -> Self {
        let forward = (*target - *origin).normalize();
        let side = forward.cross(up).normalize();
        let true_up = side.cross(&forward);
        Self::from_rotation_matrix3(&Matrix3::from_rows(&[side, true_up, -forward]))
    }
}

// ── Interpolation ───────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// `self + (q - self) * alpha`, component-wise. Not renormalized.
    #[inline]
    pub fn interpolate_linear(&self, q: &Self, alpha: T) -> Self {
        self.zip_with(q, |a, b| a + (b - a) * alpha)
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// Both inputs are normalized first. When their dot product is negative
    /// `q` is negated, so `alpha = 1` yields `-normalize(q)` in that case.
    /// Nearly parallel inputs fall back to a normalized linear interpolation.
    ///
    /// ```
    /// use quatrix::{AlmostEqual, AlmostEqualContext, Quaternion, Vector3};
    /// let y = Vector3::new(0.0_f64, 1.0, 0.0);
    /// let q0 = Quaternion::from_axis_angle(&y, 0.0);
    /// let q1 = Quaternion::from_axis_angle(&y, 181.0_f64.to_radians());
    /// assert!(q0.dot(&q1) < 0.0);
    ///
    /// let end = q0.interpolate_spherical_linear(&q1, 1.0);
    /// assert!(end.almost_eq(&AlmostEqualContext::default(), &-q1));
    /// ```
    pub fn interpolate_spherical_linear(&self, q: &Self, alpha: T) -> Self {
        let q0 = self.normalize();
        let mut q1 = q.normalize();

        let mut dot = q0.dot(&q1);
        if dot < T::zero() {
            q1 = -q1;
            dot = -dot;
        }

        if dot > T::one() - T::RELATIVE_EPSILON {
            trace_event!(dot = ?dot, "slerp inputs nearly parallel, using lerp");
            return q0.interpolate_linear(&q1, alpha).normalize();
        }

        let theta = Float::acos(dot);
        let sin_theta = Float::sin(theta);
        let a = Float::sin((T::one() - alpha) * theta) / sin_theta;
        let b = Float::sin(alpha * theta) / sin_theta;
        q0.scale(a).add_scaled(&q1, b)
    }
}

// ── Approximate equality ────────────────────────────────────────────

impl<T: AbsDiffEq<Epsilon = T> + Copy> AbsDiffEq for Quaternion<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

impl<T: RelativeEq<Epsilon = T> + Copy> RelativeEq for Quaternion<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
            && self.w.relative_eq(&other.w, epsilon, max_relative)
    }
}

impl<T: UlpsEq<Epsilon = T> + Copy> UlpsEq for Quaternion<T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
            && self.w.ulps_eq(&other.w, epsilon, max_ulps)
    }
}

// ── Operators ────────────────────────────────────────────────────────

impl<T: Scalar> Add for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl<T: Scalar> AddAssign for Quaternion<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> Sub for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a - b)
    }
}

impl<T: Scalar> SubAssign for Quaternion<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(T::zero() - self.x, T::zero() - self.y, T::zero() - self.z, T::zero() - self.w)
    }
}

impl<T: Scalar> Mul<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, k: T) -> Self {
        self.scale(k)
    }
}

// Hamilton product: (a * b) rotates by b, then by a
impl<T: Scalar> Mul for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);
        Self::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }
}

impl<T: Scalar> Mul<&Quaternion<T>> for &Quaternion<T> {
    type Output = Quaternion<T>;

    #[inline]
    fn mul(self, rhs: &Quaternion<T>) -> Quaternion<T> {
        *self * *rhs
    }
}

impl<T: Scalar> MulAssign for Quaternion<T> {
    /// `self = self * rhs`.
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Rotate a vector by a unit quaternion: v + 2w(u × v) + 2(u × (u × v))
impl<T: Scalar> Mul<Vector3<T>> for Quaternion<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, v: Vector3<T>) -> Vector3<T> {
        let two = T::one() + T::one();
        let u = Vector3::new(self.x, self.y, self.z);
        let uv = u.cross(&v);
        let uuv = u.cross(&uv);
        v + uv * (two * self.w) + uuv * two
    }
}

impl<T: Scalar> Mul<&Vector3<T>> for &Quaternion<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, v: &Vector3<T>) -> Vector3<T> {
        *self * *v
    }
}

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Quaternion<$t>> for $t {
                type Output = Quaternion<$t>;

                #[inline]
                fn mul(self, q: Quaternion<$t>) -> Quaternion<$t> {
                    q.scale(self)
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i32, i64);

// ── Conversions & Display ───────────────────────────────────────────

impl<T: Scalar> From<Vector4<T>> for Quaternion<T> {
    fn from(v: Vector4<T>) -> Self {
        Self::from_vector4(&v)
    }
}

impl<T: Scalar> From<Quaternion<T>> for Vector4<T> {
    fn from(q: Quaternion<T>) -> Self {
        q.to_vector4()
    }
}

impl<T: Scalar> fmt::Display for Quaternion<T> {
    /// `[QuaternionI4{tag} x y z w]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[QuaternionI4{} {:?} {:?} {:?} {:?}]",
            T::TAG,
            self.x,
            self.y,
            self.z,
            self.w
        )
    }
}
