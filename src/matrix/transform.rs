//! Affine transform constructors: axis-angle rotation, translation and
//! look-at view matrices.

use crate::matrix::{Matrix3, Matrix4};
use crate::traits::FloatScalar;
use crate::vector::{Vector2, Vector3};

impl<T: FloatScalar> Matrix3<T> {
    /// Rotation by `angle` radians about `axis` (Rodrigues' formula).
    ///
    /// `axis` must already be a unit vector.
    ///
    /// ```
    /// use quatrix::{AlmostEqual, AlmostEqualContext, Matrix3, Vector3};
    /// let r = Matrix3::rotation(&Vector3::new(0.0, 0.0, 1.0), core::f64::consts::FRAC_PI_2);
    /// let v = r * Vector3::new(1.0, 0.0, 0.0);
    /// assert!(v.almost_eq(&AlmostEqualContext::default(), &Vector3::new(0.0, 1.0, 0.0)));
    /// ```
    pub fn rotation(axis: &Vector3<T>, angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let t = T::one() - c;
        let (x, y, z) = (axis.x(), axis.y(), axis.z());

        Self::new([
            [t * x * x + c, t * x * y - s * z, t * x * z + s * y],
            [t * x * y + s * z, t * y * y + c, t * y * z - s * x],
            [t * x * z - s * y, t * y * z + s * x, t * z * z + c],
        ])
    }

    /// Homogeneous 2D translation by `v`.
    pub fn translation(v: &Vector2<T>) -> Self {
        let mut m = Self::eye();
        m[(0, 2)] = v.x();
        m[(1, 2)] = v.y();
        m
    }
}

impl<T: FloatScalar> Matrix4<T> {
    /// Homogeneous rotation by `angle` radians about the unit vector `axis`.
    ///
    /// The upper-left 3×3 block equals [`Matrix3::rotation`].
    pub fn rotation(axis: &Vector3<T>, angle: T) -> Self {
        let mut m = Self::eye();
        m.set_block(0, 0, &Matrix3::rotation(axis, angle));
        m
    }

    /// Homogeneous 3D translation by `v`.
    ///
    /// Moves points (`w = 1`) and leaves directions (`w = 0`) unchanged.
    ///
    /// ```
    /// use quatrix::{Matrix4, Vector3, Vector4};
    /// let t = Matrix4::translation(&Vector3::new(1.0, 2.0, 3.0));
    /// let p = Vector4::from_point(&Vector3::new(1.0, 1.0, 1.0));
    /// assert_eq!(t * p, Vector4::new(2.0, 3.0, 4.0, 1.0));
    /// ```
    pub fn translation(v: &Vector3<T>) -> Self {
        let mut m = Self::eye();
        m[(0, 3)] = v.x();
        m[(1, 3)] = v.y();
        m[(2, 3)] = v.z();
        m
    }

    /// View matrix placing `origin` at the origin and looking toward `target`,
    /// with `up` as the approximate up direction (gluLookAt).
    ///
    /// The rotation rows are `side`, `up'` and `-forward`, where
    /// `forward = normalize(target - origin)`,
    /// `side = normalize(forward × up)` and `up' = side × forward`. The result
    /// is that rotation composed with a translation by `-origin`.
    ///
    /// `up` must not be parallel to `target - origin`.
    pub fn look_at(origin: &Vector3<T>, target: &Vector3<T>, up: &Vector3<T>) -> Self {
        let forward = (*target - *origin).normalize();
        let side = forward.cross(up).normalize();
        let true_up = side.cross(&forward);

        let mut rotation = Self::eye();
        rotation.set_block(0, 0, &Matrix3::from_rows(&[side, true_up, -forward]));
        rotation * Self::translation(&-*origin)
    }
}
