//! In general, transformations make it possible to work in the most
//! convenient coordinate space.
//!
//! ## 4 x 4 Matrices
//!
//! The **Matrix4x4** structure provides a low-level representation of
//! 4 x 4 matrices. It is an integral part of the **Transform** class.
//!
//! ## Transformations
//!
//! A transformation is a mapping from points to points and from
//! vectors to vectors. When a new **Transform** is created, it
//! defaults to the *identity transformation*. Area lights carry one
//! to place their emissive sample in world space.
//!
//! ```rust
//! use rs_lighting::core::geometry::{Point3f, Vector3f};
//! use rs_lighting::core::transform::Transform;
//!
//! let t = Transform::translate(&Vector3f::new(2.0, -4.0, 4.0));
//! let p = t.transform_point(&Point3f::default());
//! assert_eq!(p, Point3f::new(2.0, -4.0, 4.0));
//! ```

// std
use std::ops::Mul;
// lighting
use crate::core::geometry::{Point3f, Vector3f};
use crate::core::pbrt::Float;

#[derive(Debug, Copy, Clone)]
pub struct Matrix4x4 {
    pub m: [[Float; 4]; 4],
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Matrix4x4 {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }
}

impl Matrix4x4 {
    /// Build a matrix from its rows.
    pub fn from_rows(m: [[Float; 4]; 4]) -> Self {
        Matrix4x4 { m }
    }
}

impl PartialEq for Matrix4x4 {
    fn eq(&self, rhs: &Matrix4x4) -> bool {
        self.m == rhs.m
    }
}

/// The product of two matrices.
pub fn mtx_mul(m1: &Matrix4x4, m2: &Matrix4x4) -> Matrix4x4 {
    let mut r: Matrix4x4 = Matrix4x4::default();
    for i in 0..4 {
        for j in 0..4 {
            r.m[i][j] = m1.m[i][0] * m2.m[0][j]
                + m1.m[i][1] * m2.m[1][j]
                + m1.m[i][2] * m2.m[2][j]
                + m1.m[i][3] * m2.m[3][j];
        }
    }
    r
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Transform {
    pub m: Matrix4x4,
}

impl Transform {
    pub fn from_rows(m: [[Float; 4]; 4]) -> Self {
        Transform {
            m: Matrix4x4::from_rows(m),
        }
    }
    pub fn translate(delta: &Vector3f) -> Transform {
        Transform::from_rows([
            [1.0, 0.0, 0.0, delta.x],
            [0.0, 1.0, 0.0, delta.y],
            [0.0, 0.0, 1.0, delta.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
    /// Homogeneous point transform, divides by `w` when it is not one.
    pub fn transform_point(&self, p: &Point3f) -> Point3f {
        let x: Float = p.x;
        let y: Float = p.y;
        let z: Float = p.z;
        let xp: Float =
            self.m.m[0][0] * x + self.m.m[0][1] * y + self.m.m[0][2] * z + self.m.m[0][3];
        let yp: Float =
            self.m.m[1][0] * x + self.m.m[1][1] * y + self.m.m[1][2] * z + self.m.m[1][3];
        let zp: Float =
            self.m.m[2][0] * x + self.m.m[2][1] * y + self.m.m[2][2] * z + self.m.m[2][3];
        let wp: Float =
            self.m.m[3][0] * x + self.m.m[3][1] * y + self.m.m[3][2] * z + self.m.m[3][3];
        if wp == 1.0 as Float {
            Point3f {
                x: xp,
                y: yp,
                z: zp,
            }
        } else {
            let inv: Float = 1.0 as Float / wp;
            Point3f {
                x: inv * xp,
                y: inv * yp,
                z: inv * zp,
            }
        }
    }
    pub fn transform_vector(&self, v: &Vector3f) -> Vector3f {
        let x: Float = v.x;
        let y: Float = v.y;
        let z: Float = v.z;
        Vector3f {
            x: self.m.m[0][0] * x + self.m.m[0][1] * y + self.m.m[0][2] * z,
            y: self.m.m[1][0] * x + self.m.m[1][1] * y + self.m.m[1][2] * z,
            z: self.m.m[2][0] * x + self.m.m[2][1] * y + self.m.m[2][2] * z,
        }
    }
}

impl Mul for Transform {
    type Output = Transform;
    fn mul(self, rhs: Transform) -> Transform {
        Transform {
            m: mtx_mul(&self.m, &rhs.m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_moves_points_not_vectors() {
        let t = Transform::translate(&Vector3f::new(1.0, 2.0, 3.0));
        assert_eq!(
            t.transform_point(&Point3f::new(1.0, 1.0, 1.0)),
            Point3f::new(2.0, 3.0, 4.0)
        );
        assert_eq!(
            t.transform_vector(&Vector3f::new(1.0, 1.0, 1.0)),
            Vector3f::new(1.0, 1.0, 1.0)
        );
    }

    #[test]
    fn composition_applies_right_to_left() {
        // swap x and y, then translate
        let swap = Transform::from_rows([
            [0.0, 1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let t = Transform::translate(&Vector3f::new(10.0, 0.0, 0.0)) * swap;
        assert_eq!(
            t.transform_point(&Point3f::new(1.0, 2.0, 3.0)),
            Point3f::new(12.0, 1.0, 3.0)
        );
        assert_eq!(
            t.transform_vector(&Vector3f::new(1.0, 2.0, 3.0)),
            Vector3f::new(2.0, 1.0, 3.0)
        );
    }

    #[test]
    fn homogeneous_divide() {
        let mut rows = Matrix4x4::default().m;
        rows[3][3] = 2.0;
        let t = Transform::from_rows(rows);
        assert_eq!(
            t.transform_point(&Point3f::new(2.0, 4.0, 6.0)),
            Point3f::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn default_is_identity() {
        let p = Point3f::new(0.5, -1.0, 3.0);
        assert_eq!(Transform::default().transform_point(&p), p);
        assert_eq!(Transform::default() * Transform::default(), Transform::default());
    }
}
