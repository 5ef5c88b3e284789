mod algebra;
mod ops;

use core::fmt;
use core::ops::{Index, IndexMut};

use crate::linalg::LinalgError;
use crate::traits::Scalar;

/// Fixed-size vector with `N` components in `x, y, z, w` order.
///
/// Stack-allocated `Copy` value type. The zero vector is the default, except
/// for 4-vectors, whose `w` component defaults to 1 so that a fresh 4-vector
/// is the homogeneous origin point.
///
/// # Examples
///
/// ```
/// use quatrix::{Vector2, Vector3, Vector4};
///
/// let v = Vector3::new(3.0_f64, 4.0, 0.0);
/// assert_eq!(v.y(), 4.0);
/// assert_eq!(v.dot(&v), 25.0);
/// assert_eq!(v.magnitude(), 5.0);
///
/// let mut p = Vector4::<f64>::default();
/// p.copy_from(&Vector2::new(1.0, 2.0));
/// assert_eq!(p, Vector4::new(1.0, 2.0, 0.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize> {
    pub(crate) data: [T; N],
}

/// A 2-component vector.
pub type Vector2<T> = Vector<T, 2>;
/// A 3-component vector.
///
/// Adds `cross()` in addition to all `Vector` methods.
pub type Vector3<T> = Vector<T, 3>;
/// A 4-component vector, doubling as a homogeneous point or direction.
pub type Vector4<T> = Vector<T, 4>;

impl<T, const N: usize> Vector<T, N> {
    /// Create a vector from a component array.
    #[inline]
    pub const fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    /// Number of components.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// `true` only for the degenerate zero-length vector type.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// View the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over the components in `x, y, z, w` order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// The zero vector (all components zero, including `w`).
    #[inline]
    pub fn zeros() -> Self {
        Self {
            data: [T::zero(); N],
        }
    }

    /// Vector with every component set to `value`.
    #[inline]
    pub fn fill(value: T) -> Self {
        Self { data: [value; N] }
    }

    /// Copy the leading components of `src` into `self`.
    ///
    /// The first `min(N, K)` components are adopted; any remaining
    /// components of `self` keep their current values.
    pub fn copy_from<const K: usize>(&mut self, src: &Vector<T, K>) -> &mut Self {
        let n = N.min(K);
        self.data[..n].copy_from_slice(&src.data[..n]);
        self
    }

    /// Range-checked component read.
    #[must_use = "the range check result must be inspected"]
    pub fn try_get(&self, index: usize) -> Result<T, LinalgError> {
        self.data
            .get(index)
            .copied()
            .ok_or(LinalgError::ComponentOutOfRange { index, len: N })
    }

    /// Range-checked component write.
    #[must_use = "the range check result must be inspected"]
    pub fn try_set(&mut self, index: usize, value: T) -> Result<&mut Self, LinalgError> {
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(self)
            }
            None => Err(LinalgError::ComponentOutOfRange { index, len: N }),
        }
    }

    /// Apply `f` to every component.
    #[inline]
    pub fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self {
            data: self.data.map(f),
        }
    }

    /// Combine two vectors component by component.
    #[inline]
    pub fn zip_map(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
        let mut out = *self;
        for i in 0..N {
            out.data[i] = f(self.data[i], rhs.data[i]);
        }
        out
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    /// Zero vector, with `w = 1` for 4-vectors.
    fn default() -> Self {
        let mut v = Self::zeros();
        if N == 4 {
            if let Some(w) = v.data.get_mut(3) {
                *w = T::one();
            }
        }
        v
    }
}

// ── Per-size constructors and labelled accessors ────────────────────

macro_rules! impl_accessors {
    ($n:literal; $($get:ident, $set:ident => $i:literal),*) => {
        impl<T: Scalar> Vector<T, $n> {
            /// Create a vector from its components.
            #[inline]
            pub const fn new($($get: T),*) -> Self {
                Self { data: [$($get),*] }
            }

            $(
                #[inline]
                pub fn $get(&self) -> T {
                    self.data[$i]
                }

                #[inline]
                pub fn $set(&mut self, value: T) -> &mut Self {
                    self.data[$i] = value;
                    self
                }
            )*
        }
    };
}

impl_accessors!(2; x, set_x => 0, y, set_y => 1);
impl_accessors!(3; x, set_x => 0, y, set_y => 1, z, set_z => 2);
impl_accessors!(4; x, set_x => 0, y, set_y => 1, z, set_z => 2, w, set_w => 3);

impl<T: Scalar> Vector4<T> {
    /// Homogeneous point `(x, y, z, 1)`. Affected by translation.
    #[inline]
    pub fn from_point(p: &Vector3<T>) -> Self {
        Self::new(p.x(), p.y(), p.z(), T::one())
    }

    /// Homogeneous direction `(x, y, z, 0)`. Unaffected by translation.
    #[inline]
    pub fn from_direction(d: &Vector3<T>) -> Self {
        Self::new(d.x(), d.y(), d.z(), T::zero())
    }

    /// The `x, y, z` part, dropping `w`.
    #[inline]
    pub fn xyz(&self) -> Vector3<T> {
        Vector3::new(self.x(), self.y(), self.z())
    }
}

impl<T: Scalar> Vector3<T> {
    /// The `x, y` part, dropping `z`.
    #[inline]
    pub fn xy(&self) -> Vector2<T> {
        Vector2::new(self.x(), self.y())
    }
}

// ── Indexing ────────────────────────────────────────────────────────

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        assert!(i < N, "component {i} out of range for vector of length {N}");
        &self.data[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        assert!(i < N, "component {i} out of range for vector of length {N}");
        &mut self.data[i]
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.data
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    /// `[VectorI{N}{tag} c0 c1 ...]`, e.g. `[VectorI2D 0.0 1.0]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[VectorI{}{}", N, T::TAG)?;
        for c in &self.data {
            write!(f, " {:?}", c)?;
        }
        write!(f, "]")
    }
}
