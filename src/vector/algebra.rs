use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::Float;

use crate::traits::{FloatScalar, Scalar};
use super::{Vector, Vector3};

// ── Products and magnitudes ─────────────────────────────────────────

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Dot product of two vectors.
    ///
    /// ```
    /// use quatrix::Vector3;
    /// let a = Vector3::new(1.0, 2.0, 3.0);
    /// let b = Vector3::new(4.0, 5.0, 6.0);
    /// assert_eq!(a.dot(&b), 32.0); // 1*4 + 2*5 + 3*6
    /// ```
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self.data[i] * rhs.data[i];
        }
        sum
    }

    /// Squared magnitude (dot product with self). No sqrt, works with integers.
    #[inline]
    pub fn magnitude_squared(&self) -> T {
        self.dot(self)
    }

    /// `self * k`.
    #[inline]
    pub fn scale(&self, k: T) -> Self {
        *self * k
    }

    /// `self = self * k`.
    #[inline]
    pub fn scale_in_place(&mut self, k: T) -> &mut Self {
        *self = self.scale(k);
        self
    }

    /// `self + v * k`.
    #[inline]
    pub fn add_scaled(&self, v: &Self, k: T) -> Self {
        self.zip_map(v, |a, b| a + b * k)
    }

    /// `self = self + v * k`.
    #[inline]
    pub fn add_scaled_in_place(&mut self, v: &Self, k: T) -> &mut Self {
        *self = self.add_scaled(v, k);
        self
    }
}

impl<T: Scalar> Vector3<T> {
    /// Cross product of two 3-vectors.
    ///
    /// ```
    /// use quatrix::Vector3;
    /// let x = Vector3::new(1.0, 0.0, 0.0);
    /// let y = Vector3::new(0.0, 1.0, 0.0);
    /// assert_eq!(x.cross(&y), Vector3::new(0.0, 0.0, 1.0)); // x × y = z
    /// ```
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        Self::new(
            self.y() * rhs.z() - self.z() * rhs.y(),
            self.z() * rhs.x() - self.x() * rhs.z(),
            self.x() * rhs.y() - self.y() * rhs.x(),
        )
    }
}

// ── Component-wise absolute value and clamping ──────────────────────

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Component-wise absolute value.
    #[inline]
    pub fn absolute(&self) -> Self {
        self.map(|c| c.abs_of())
    }

    /// Component-wise absolute value, in place.
    #[inline]
    pub fn absolute_in_place(&mut self) -> &mut Self {
        *self = self.absolute();
        self
    }

    /// Clamp every component into `[minimum, maximum]`.
    #[inline]
    pub fn clamp(&self, minimum: T, maximum: T) -> Self {
        self.map(|c| c.max_of(minimum).min_of(maximum))
    }

    /// Raise every component to at least `minimum`.
    #[inline]
    pub fn clamp_minimum(&self, minimum: T) -> Self {
        self.map(|c| c.max_of(minimum))
    }

    /// Lower every component to at most `maximum`.
    #[inline]
    pub fn clamp_maximum(&self, maximum: T) -> Self {
        self.map(|c| c.min_of(maximum))
    }

    /// Clamp component `i` into `[minimum[i], maximum[i]]`.
    pub fn clamp_by_vector(&self, minimum: &Self, maximum: &Self) -> Self {
        self.clamp_minimum_by_vector(minimum)
            .clamp_maximum_by_vector(maximum)
    }

    /// Raise component `i` to at least `minimum[i]`.
    #[inline]
    pub fn clamp_minimum_by_vector(&self, minimum: &Self) -> Self {
        self.zip_map(minimum, |c, lo| c.max_of(lo))
    }

    /// Lower component `i` to at most `maximum[i]`.
    #[inline]
    pub fn clamp_maximum_by_vector(&self, maximum: &Self) -> Self {
        self.zip_map(maximum, |c, hi| c.min_of(hi))
    }
}

// ── Floating-point operations ───────────────────────────────────────

impl<T: FloatScalar, const N: usize> Vector<T, N> {
    /// Euclidean length.
    #[inline]
    pub fn magnitude(&self) -> T {
        Float::sqrt(self.magnitude_squared())
    }

    /// Unit vector in the same direction.
    ///
    /// The zero vector normalizes to itself rather than to NaN.
    pub fn normalize(&self) -> Self {
        let m = self.magnitude();
        if m == T::zero() {
            trace_event!(len = N, "normalizing zero vector");
            return Self::zeros();
        }
        *self * (T::one() / m)
    }

    /// Normalize in place. See [`normalize`](Self::normalize).
    #[inline]
    pub fn normalize_in_place(&mut self) -> &mut Self {
        *self = self.normalize();
        self
    }

    /// `self + (v - self) * alpha`.
    ///
    /// `alpha = 0` gives `self`, `alpha = 1` gives `v`.
    #[inline]
    pub fn interpolate_linear(&self, v: &Self, alpha: T) -> Self {
        self.zip_map(v, |a, b| a + (b - a) * alpha)
    }

    /// Distance between the points `self` and `v`.
    #[inline]
    pub fn distance(&self, v: &Self) -> T {
        (*self - *v).magnitude()
    }

    /// Projection of `self` onto `q`: `q * (dot(self, q) / dot(q, q))`.
    ///
    /// Projecting onto the zero vector gives the zero vector.
    pub fn projection(&self, q: &Self) -> Self {
        let qq = q.magnitude_squared();
        if qq == T::zero() {
            return Self::zeros();
        }
        *q * (self.dot(q) / qq)
    }

    /// Gram-Schmidt step for a pair of vectors.
    ///
    /// Returns `(v0, v1')` where `v0` is returned unchanged and
    /// `v1' = normalize(v1 - projection(v1, v0))` is a unit vector orthogonal
    /// to `v0`.
    ///
    /// ```
    /// use quatrix::Vector3;
    /// let v0 = Vector3::new(0.0, 1.0, 0.0);
    /// let v1 = Vector3::new(0.5, 0.5, 0.0);
    /// let (left, right) = Vector3::ortho_normalize(&v0, &v1);
    /// assert_eq!(left, v0);
    /// assert_eq!(right, Vector3::new(1.0, 0.0, 0.0));
    /// ```
    pub fn ortho_normalize(v0: &Self, v1: &Self) -> (Self, Self) {
        (*v0, (*v1 - v1.projection(v0)).normalize())
    }

    /// In-place form of [`ortho_normalize`](Self::ortho_normalize).
    /// Only `v1` is rewritten.
    pub fn ortho_normalize_in_place(v0: &Self, v1: &mut Self) {
        *v1 = Self::ortho_normalize(v0, v1).1;
    }
}

// ── Approximate equality ────────────────────────────────────────────

impl<T: AbsDiffEq<Epsilon = T> + Copy, const N: usize> AbsDiffEq for Vector<T, N> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: RelativeEq<Epsilon = T> + Copy, const N: usize> RelativeEq for Vector<T, N> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T: UlpsEq<Epsilon = T> + Copy, const N: usize> UlpsEq for Vector<T, N> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}
