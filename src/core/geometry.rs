//! Almost all nontrivial graphics programs are built on a foundation
//! of geometric classes. These classes represent mathematical
//! constructs like points, vectors, and rays.
//!
//! # Points
//!
//! A **point** is a zero-dimensional location in 2D or 3D space. The
//! shading point position and the light positions are **Point3f**.
//!
//! ```rust
//! use rs_lighting::core::geometry::Point3f;
//!
//! let light_position = Point3f {
//!     x: 0.0,
//!     y: 10.0,
//!     z: 0.0,
//! };
//! println!("light {:?}", light_position);
//! ```
//!
//! # Vectors
//!
//! **Vector3f** represents directions: the view vector, the direction
//! to a light, the half vector between both.
//!
//! # Normals
//!
//! A surface **normal** is a vector that is perpendicular to a
//! surface at a particular position. Lights compare it against the
//! view vector and the direction to the light.
//!
//! # Rays
//!
//! A **ray** is a semi-infinite line specified by its origin and
//! direction. Light probes use rays from the shading point to find
//! the parallax-corrected lookup direction on their bounding sphere.

// lighting
use std::ops;

use crate::core::pbrt::Float;
use crate::core::pbrt::{clamp_t, quadratic};
use crate::core::pbrt::INV_PI;

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector2f {
    pub x: Float,
    pub y: Float,
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Vector3f {
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Vector3f { x, y, z }
    }
    pub fn length_squared(&self) -> Float {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
    pub fn length(&self) -> Float {
        self.length_squared().sqrt()
    }
    /// Compute a new vector pointing in the same direction but with unit
    /// length.
    pub fn normalize(&self) -> Vector3f {
        *self / self.length()
    }
}

impl From<Point3f> for Vector3f {
    fn from(p: Point3f) -> Self {
        Vector3f {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

impl From<Normal3f> for Vector3f {
    fn from(n: Normal3f) -> Self {
        Vector3f {
            x: n.x,
            y: n.y,
            z: n.z,
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point2f {
    pub x: Float,
    pub y: Float,
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point2i {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Point3f {
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Point3f { x, y, z }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Normal3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Normal3f {
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Normal3f { x, y, z }
    }
    pub fn length_squared(&self) -> Float {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
    pub fn length(&self) -> Float {
        self.length_squared().sqrt()
    }
    /// Compute a new normal pointing in the same direction but with unit
    /// length.
    pub fn normalize(&self) -> Normal3f {
        *self / self.length()
    }
}

// unary minus

impl_op!(-|a: Vector3f| -> Vector3f {
    Vector3f {
        x: -a.x,
        y: -a.y,
        z: -a.z,
    }
});

// addition and subtraction

impl_op_ex!(+|a: &Vector3f, b: &Vector3f| -> Vector3f {
    Vector3f {
        x: a.x + b.x,
        y: a.y + b.y,
        z: a.z + b.z,
    }
});

impl_op_ex!(-|a: &Vector3f, b: &Vector3f| -> Vector3f {
    Vector3f {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
});

impl_op_ex!(+|a: &Point3f, b: &Vector3f| -> Point3f {
    Point3f {
        x: a.x + b.x,
        y: a.y + b.y,
        z: a.z + b.z,
    }
});

impl_op_ex!(-|a: &Point3f, b: &Vector3f| -> Point3f {
    Point3f {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
});

impl_op_ex!(-|a: &Point3f, b: &Point3f| -> Vector3f {
    Vector3f {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
});

impl_op_ex!(-|a: &Point2f, b: &Vector2f| -> Point2f {
    Point2f {
        x: a.x - b.x,
        y: a.y - b.y,
    }
});

// scaling

impl_op_ex!(*|a: &Vector3f, b: Float| -> Vector3f {
    Vector3f {
        x: a.x * b,
        y: a.y * b,
        z: a.z * b,
    }
});

impl_op_ex!(*|a: &Normal3f, b: Float| -> Normal3f {
    Normal3f {
        x: a.x * b,
        y: a.y * b,
        z: a.z * b,
    }
});

impl_op_ex!(*|a: &Point2f, b: Float| -> Point2f {
    Point2f {
        x: a.x * b,
        y: a.y * b,
    }
});

impl_op_ex!(/|a: &Vector3f, b: Float| -> Vector3f {
    let inv: Float = 1.0 as Float / b;
    Vector3f {
        x: a.x * inv,
        y: a.y * inv,
        z: a.z * inv,
    }
});

impl_op_ex!(/|a: &Normal3f, b: Float| -> Normal3f {
    let inv: Float = 1.0 as Float / b;
    Normal3f {
        x: a.x * inv,
        y: a.y * inv,
        z: a.z * inv,
    }
});

/// Product of the Euclidean magnitudes of the two vectors and the
/// cosine of the angle between them. A return value of zero means
/// both vectors are orthogonal, a value of one means they are
/// codirectional (for unit vectors).
pub fn vec3_dot_vec3f(v1: &Vector3f, v2: &Vector3f) -> Float {
    v1.x * v2.x + v1.y * v2.y + v1.z * v2.z
}

/// Dot product of a normal and a vector.
pub fn nrm_dot_vec3f(n1: &Normal3f, v2: &Vector3f) -> Float {
    n1.x * v2.x + n1.y * v2.y + n1.z * v2.z
}

/// Compute a new vector pointing in the same direction but with unit
/// length.
pub fn vec3_normalize(v: &Vector3f) -> Vector3f {
    *v / v.length()
}

/// Component-wise linear interpolation, `a` at `t = 0`, `b` at `t = 1`.
pub fn vec3_lerp(t: Float, a: &Vector3f, b: &Vector3f) -> Vector3f {
    *a * (1.0 as Float - t) + *b * t
}

/// Mirror the incident direction `i` about the normal `n` (both
/// pointing the way a shading language's `reflect` expects).
pub fn vec3_reflect(i: &Vector3f, n: &Normal3f) -> Vector3f {
    let nv: Vector3f = Vector3f::from(*n);
    *i - nv * (2.0 as Float * vec3_dot_vec3f(&nv, i))
}

/// The distance between two points.
pub fn pnt3_distancef(p1: &Point3f, p2: &Point3f) -> Float {
    (*p1 - *p2).length()
}

/// Calculate appropriate direction vector from two angles.
pub fn spherical_direction(sin_theta: Float, cos_theta: Float, phi: Float) -> Vector3f {
    Vector3f {
        x: sin_theta * phi.cos(),
        y: sin_theta * phi.sin(),
        z: cos_theta,
    }
}

/// Map a world space direction (y up) onto the [0,1]^2 latitude-longitude
/// parameterization used by light probe images. `v = 0` is the zenith
/// (+y), `u` wraps around the horizon starting at -x.
pub fn direction_to_lat_long(w: &Vector3f) -> Point2f {
    let p: Vector3f = vec3_normalize(w);
    Point2f {
        x: (1.0 as Float + (-p.z).atan2(p.x) * INV_PI) * 0.5 as Float,
        y: clamp_t(p.y, -1.0 as Float, 1.0 as Float).acos() * INV_PI,
    }
}

#[derive(Debug, Default, Copy, Clone)]
pub struct Ray {
    /// origin
    pub o: Point3f,
    /// direction
    pub d: Vector3f,
}

impl Ray {
    pub fn position(&self, t: Float) -> Point3f {
        self.o + self.d * t
    }
}

/// Intersect a ray with a sphere. Returns the nearest hit in front of
/// the origin; for an origin inside the sphere that is the exit point.
pub fn ray_sphere_intersect(ray: &Ray, center: &Point3f, radius: Float) -> Option<Point3f> {
    let m: Vector3f = ray.o - *center;
    let a: Float = ray.d.length_squared();
    let b: Float = 2.0 as Float * vec3_dot_vec3f(&m, &ray.d);
    let c: Float = m.length_squared() - radius * radius;
    let (t0, t1) = quadratic(a, b, c)?;
    if t1 < 0.0 as Float {
        return None;
    }
    let t: Float = if t0 >= 0.0 as Float { t0 } else { t1 };
    Some(ray.position(t))
}
