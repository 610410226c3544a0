use core::ops::Mul;

use bytemuck::{Pod, Zeroable};

use super::{ProjectionAxis, ProjectionError, Vec3, Vec4};

/// Determinant of a row-major 2x2 matrix.
#[inline]
pub fn det2(m: [f32; 4]) -> f32 {
    m[0] * m[3] - m[1] * m[2]
}

/// Determinant of a row-major 3x3 matrix (cofactor expansion along row 0).
#[inline]
pub fn det3(m: [f32; 9]) -> f32 {
    m[0] * det2([m[4], m[5], m[7], m[8]]) - m[1] * det2([m[3], m[5], m[6], m[8]])
        + m[2] * det2([m[3], m[4], m[6], m[7]])
}

/// A 4x4 transform matrix of `f32`s.
///
/// Storage is row-major: row `i`, column `j` lives at index `4 * i + j`.
/// Translations occupy row 3, so the rows are the transformed basis vectors
/// and [`Matrix4::transform`] treats its argument as a row vector
/// (`v * M`). Products therefore apply left to right:
/// `(a * b).transform(v) == b.transform(a.transform(v))`.
///
/// Every operation returns a new value; operands are never mutated.
/// The raw 16 floats ([`Matrix4::as_array`], or `bytemuck::bytes_of`) are the
/// uniform-buffer payload handed to the GPU layer.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Matrix4([f32; 16]);

impl Default for Matrix4 {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 16]> for Matrix4 {
    #[inline]
    fn from(m: [f32; 16]) -> Self {
        Self(m)
    }
}

// ── factories ─────────────────────────────────────────────────────────────

impl Matrix4 {
    #[rustfmt::skip]
    pub const ZERO: Self = Self([
        0., 0., 0., 0.,
        0., 0., 0., 0.,
        0., 0., 0., 0.,
        0., 0., 0., 0.,
    ]);

    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        1., 0., 0., 0.,
        0., 1., 0., 0.,
        0., 0., 1., 0.,
        0., 0., 0., 1.,
    ]);

    #[inline]
    pub const fn from_array(m: [f32; 16]) -> Self {
        Self(m)
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    #[rustfmt::skip]
    pub const fn translation(x: f32, y: f32, z: f32) -> Self {
        Self([
            1., 0., 0., 0.,
            0., 1., 0., 0.,
            0., 0., 1., 0.,
             x,  y,  z, 1.,
        ])
    }

    /// Uniform scale on all three axes.
    #[rustfmt::skip]
    pub const fn scale(s: f32) -> Self {
        Self([
             s, 0., 0., 0.,
            0.,  s, 0., 0.,
            0., 0.,  s, 0.,
            0., 0., 0., 1.,
        ])
    }

    /// Rotation about +X by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_x(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self([
            1.,   0.,  0., 0.,
            0.,  cos, sin, 0.,
            0., -sin, cos, 0.,
            0.,   0.,  0., 1.,
        ])
    }

    /// Rotation about +Y by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_y(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self([
            cos, 0., -sin, 0.,
             0., 1.,   0., 0.,
            sin, 0.,  cos, 0.,
             0., 0.,   0., 1.,
        ])
    }

    /// Rotation about +Z by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_z(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self([
             cos, sin, 0., 0.,
            -sin, cos, 0., 0.,
              0.,  0., 1., 0.,
              0.,  0., 0., 1.,
        ])
    }

    /// Maps the box `[left, right] x [bottom, top] x [near, far]` onto the
    /// canonical clip cube.
    ///
    /// Returns [`ProjectionError::InvalidBounds`] when any axis has zero extent.
    #[rustfmt::skip]
    pub fn orthographic_off_center(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Result<Self, ProjectionError> {
        if left == right {
            return Err(ProjectionError::InvalidBounds { axis: ProjectionAxis::X });
        }
        if bottom == top {
            return Err(ProjectionError::InvalidBounds { axis: ProjectionAxis::Y });
        }
        if near == far {
            return Err(ProjectionError::InvalidBounds { axis: ProjectionAxis::Z });
        }

        let left_right = 1.0 / (left - right);
        let bottom_top = 1.0 / (bottom - top);
        let near_far = 1.0 / (near - far);

        let sx = -2.0 * left_right;
        let sy = -2.0 * bottom_top;
        let sz = 2.0 * near_far;

        let tx = (left + right) * left_right;
        let ty = (top + bottom) * bottom_top;
        let tz = (far + near) * near_far;

        Ok(Self([
            sx, 0., 0., 0.,
            0., sy, 0., 0.,
            0., 0., sz, 0.,
            tx, ty, tz, 1.,
        ]))
    }

    /// Symmetric perspective projection.
    ///
    /// Requires `fov_y` in `(0, π)`, a positive finite `aspect_ratio`,
    /// `near > 0` and `far > near`.
    #[rustfmt::skip]
    pub fn perspective_field_of_view(
        fov_y: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) -> Result<Self, ProjectionError> {
        if !(fov_y > 0.0 && fov_y < core::f32::consts::PI) {
            return Err(ProjectionError::InvalidFieldOfView(fov_y));
        }
        if !(aspect_ratio > 0.0 && aspect_ratio.is_finite()) {
            return Err(ProjectionError::InvalidAspectRatio(aspect_ratio));
        }
        if !(near > 0.0 && far > near && far.is_finite()) {
            return Err(ProjectionError::InvalidDepthRange { near, far });
        }

        let top = (fov_y / 2.0).tan() * near;
        let right = top * aspect_ratio;
        let depth = far - near;

        Ok(Self([
            near / right,         0.,                           0.,  0.,
                      0., near / top,                           0.,  0.,
                      0.,         0.,       -(far + near) / depth, -1.,
                      0.,         0., -2.0 * (far * near) / depth,  0.,
        ]))
    }

    /// View matrix for a camera at `eye` looking at `target`.
    ///
    /// `up` must not be parallel to `eye - target`; that case produces
    /// non-finite output and is not checked.
    #[rustfmt::skip]
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (eye - target).normalize();
        let right = up.cross(forward).normalize();
        let camera_up = forward.cross(right).normalize();

        let tx = eye.dot(right);
        let ty = eye.dot(up);
        let tz = eye.dot(forward);

        Self([
            right.x, camera_up.x, forward.x, 0.,
            right.y, camera_up.y, forward.y, 0.,
            right.z, camera_up.z, forward.z, 0.,
                -tx,         -ty,       -tz, 1.,
        ])
    }
}

// ── access ────────────────────────────────────────────────────────────────

impl Matrix4 {
    #[inline]
    pub const fn as_array(&self) -> &[f32; 16] {
        &self.0
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 16] {
        self.0
    }

    #[inline]
    pub const fn get(&self, row: usize, col: usize) -> f32 {
        self.0[4 * row + col]
    }

    #[inline]
    pub const fn row(&self, i: usize) -> Vec4 {
        let m = &self.0;
        Vec4::new(m[4 * i], m[4 * i + 1], m[4 * i + 2], m[4 * i + 3])
    }

    #[inline]
    pub const fn column(&self, j: usize) -> Vec4 {
        let m = &self.0;
        Vec4::new(m[j], m[j + 4], m[j + 8], m[j + 12])
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }
}

// ── composition / derivation ──────────────────────────────────────────────

impl Matrix4 {
    /// Row-by-column product: `result[i][j] = a.row(i) · b.column(j)`.
    pub fn multiply(a: &Matrix4, b: &Matrix4) -> Matrix4 {
        let mut out = [0.0f32; 16];
        for i in 0..4 {
            let row = a.row(i);
            for j in 0..4 {
                out[4 * i + j] = row.dot(b.column(j));
            }
        }
        Matrix4(out)
    }

    pub fn transpose(&self) -> Matrix4 {
        let mut out = [0.0f32; 16];
        for i in 0..4 {
            for j in 0..4 {
                out[4 * j + i] = self.0[4 * i + j];
            }
        }
        Matrix4(out)
    }

    /// Determinant of the 3x3 submatrix left after deleting `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> f32 {
        debug_assert!(row < 4 && col < 4);

        let mut sub = [0.0f32; 9];
        let mut k = 0;
        for i in (0..4).filter(|&i| i != row) {
            for j in (0..4).filter(|&j| j != col) {
                sub[k] = self.0[4 * i + j];
                k += 1;
            }
        }
        det3(sub)
    }

    /// Cofactor expansion along row 0.
    pub fn determinant(&self) -> f32 {
        (0..4)
            .map(|j| checkerboard(0, j) * self.0[j] * self.minor(0, j))
            .sum()
    }

    /// Matrix of signed minors.
    pub fn cofactor(&self) -> Matrix4 {
        let mut out = [0.0f32; 16];
        for i in 0..4 {
            for j in 0..4 {
                out[4 * i + j] = checkerboard(i, j) * self.minor(i, j);
            }
        }
        Matrix4(out)
    }

    #[inline]
    pub fn adjugate(&self) -> Matrix4 {
        self.cofactor().transpose()
    }

    /// Returns `None` when the determinant is exactly zero.
    pub fn invert(&self) -> Option<Matrix4> {
        let det = self.determinant();
        if det == 0.0 {
            return None;
        }
        Some(self.adjugate().scaled(1.0 / det))
    }

    /// Applies the matrix to `v`: `result[j] = self.column(j) · v`.
    pub fn transform(&self, v: Vec4) -> Vec4 {
        Vec4::new(
            self.column(0).dot(v),
            self.column(1).dot(v),
            self.column(2).dot(v),
            self.column(3).dot(v),
        )
    }

    /// Transforms a point (`w = 1`) and applies the perspective divide.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.transform(Vec4::point(p)).perspective_divide()
    }

    fn scaled(mut self, s: f32) -> Matrix4 {
        for v in &mut self.0 {
            *v *= s;
        }
        self
    }
}

#[inline]
fn checkerboard(row: usize, col: usize) -> f32 {
    if (row + col) % 2 == 0 { 1.0 } else { -1.0 }
}

impl Mul for Matrix4 {
    type Output = Matrix4;

    #[inline]
    fn mul(self, rhs: Matrix4) -> Matrix4 {
        Matrix4::multiply(&self, &rhs)
    }
}

impl Mul<Vec4> for Matrix4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.transform(rhs)
    }
}
