//! The surface attributes lights are evaluated against.

// lighting
use crate::core::geometry::nrm_dot_vec3f;
use crate::core::geometry::{Normal3f, Point3f, Vector3f};
use crate::core::pbrt::{Float, Spectrum};

/// Shading data for one surface sample. `n` and `v` are expected to be
/// unit length; `v` points away from the surface towards the viewer.
#[derive(Debug, Default, Copy, Clone)]
pub struct ShadingPoint {
    pub p_w: Point3f,
    pub n: Normal3f,
    pub v: Vector3f,
    pub linear_roughness: Float,
    pub specular: Spectrum,
    pub n_dot_v: Float,
}

impl ShadingPoint {
    /// Fills in `n_dot_v` from the given normal and view vector. It is
    /// not clamped.
    pub fn new(
        p_w: &Point3f,
        n: &Normal3f,
        v: &Vector3f,
        linear_roughness: Float,
        specular: &Spectrum,
    ) -> Self {
        ShadingPoint {
            p_w: *p_w,
            n: *n,
            v: *v,
            linear_roughness,
            specular: *specular,
            n_dot_v: nrm_dot_vec3f(n, v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn n_dot_v_is_signed() {
        let n = Normal3f::new(0.0, 1.0, 0.0);
        let sd = ShadingPoint::new(
            &Point3f::default(),
            &n,
            &Vector3f::new(0.0, -1.0, 0.0),
            0.5,
            &Spectrum::new(0.04),
        );
        assert_eq!(sd.n_dot_v, -1.0);
    }
}
