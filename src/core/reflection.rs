//! Reflection helpers shared by the probe evaluator and the shading
//! loop: dominant direction estimates for image based lighting and a
//! small Lambert plus GGX BRDF for analytic lights.

// lighting
use crate::core::geometry::{vec3_lerp, vec3_normalize};
use crate::core::geometry::{Normal3f, Vector3f};
use crate::core::microfacet::{f_schlick, TrowbridgeReitzDistribution};
use crate::core::pbrt::{saturate, Float, Spectrum, INV_PI};

/// Direction the diffuse lobe of a rough surface leans towards. Smooth
/// surfaces tilt further from the normal towards the viewer. The
/// coefficients come from a fit against reference integrations and
/// must not be tuned.
pub fn diffuse_dominant_dir(
    n: &Normal3f,
    v: &Vector3f,
    n_dot_v: Float,
    linear_roughness: Float,
) -> Vector3f {
    let a: Float = 1.02341 * linear_roughness - 1.51174;
    let b: Float = -0.511705 * linear_roughness + 0.755868;
    let lerp_factor: Float = saturate((n_dot_v * a + b) * linear_roughness);
    vec3_normalize(&vec3_lerp(lerp_factor, &Vector3f::from(*n), v))
}

/// Peak of a GGX specular lobe, somewhere between the normal and the
/// mirror direction `r`.
pub fn specular_dominant_dir(n: &Normal3f, r: &Vector3f, linear_roughness: Float) -> Vector3f {
    let smoothness: Float = saturate(1.0 as Float - linear_roughness);
    let lerp_factor: Float = smoothness * (smoothness.sqrt() + linear_roughness);
    vec3_normalize(&vec3_lerp(lerp_factor, &Vector3f::from(*n), r))
}

pub fn lambert_diffuse(albedo: &Spectrum) -> Spectrum {
    *albedo * INV_PI
}

/// Cook-Torrance specular term from the clamped cosines of a light
/// sample. Not multiplied by `n_dot_l`.
pub fn ggx_specular(
    specular: &Spectrum,
    linear_roughness: Float,
    n_dot_v: Float,
    n_dot_l: Float,
    n_dot_h: Float,
    l_dot_h: Float,
) -> Spectrum {
    let ggx = TrowbridgeReitzDistribution::new(linear_roughness);
    let d: Float = ggx.d(n_dot_h);
    let vis: Float = ggx.vis(n_dot_v, n_dot_l);
    let f: Spectrum = Spectrum::rgb(
        f_schlick(specular.c[0], 1.0, l_dot_h),
        f_schlick(specular.c[1], 1.0, l_dot_h),
        f_schlick(specular.c[2], 1.0, l_dot_h),
    );
    f * (d * vis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::vec3_reflect;

    fn up() -> Normal3f {
        Normal3f::new(0.0, 1.0, 0.0)
    }

    #[test]
    fn dominant_directions_are_unit() {
        let v = Vector3f::new(0.6, 0.8, 0.0);
        for &r in &[0.0 as Float, 0.3, 0.7, 1.0] {
            let d = diffuse_dominant_dir(&up(), &v, 0.8, r);
            assert!((d.length() - 1.0).abs() < 1e-5);
            let refl = vec3_reflect(&-v, &up());
            let s = specular_dominant_dir(&up(), &refl, r);
            assert!((s.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn specular_extremes() {
        let v = Vector3f::new(0.6, 0.8, 0.0);
        let refl = vec3_reflect(&-v, &up());
        // mirror surfaces keep the reflection vector
        let s = specular_dominant_dir(&up(), &refl, 0.0);
        assert!((s - refl).length() < 1e-5);
        // fully rough surfaces collapse onto the normal
        let s = specular_dominant_dir(&up(), &refl, 1.0);
        assert!((s - Vector3f::new(0.0, 1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn diffuse_of_zero_roughness_is_the_normal() {
        let v = Vector3f::new(0.6, 0.8, 0.0);
        let d = diffuse_dominant_dir(&up(), &v, 0.8, 0.0);
        assert!((d - Vector3f::new(0.0, 1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn brdf_terms_are_finite_and_positive() {
        let s = ggx_specular(&Spectrum::new(0.04), 0.5, 1.0, 1.0, 1.0, 1.0);
        assert!(!s.has_nans());
        assert!(s.c[0] > 0.0);
        let d = lambert_diffuse(&Spectrum::new(1.0));
        assert!((d.c[1] - INV_PI).abs() < 1e-7);
    }
}
