//! The isotropic Trowbridge-Reitz (GGX) microfacet model used to
//! pre-integrate the split-sum lookup table and to shade analytic
//! lights. All directions are given in a local frame where the normal
//! is +z unless the function takes explicit cosines.

// std
use std::f32::consts::PI;
// lighting
use crate::core::geometry::{spherical_direction, Point2f, Vector3f};
use crate::core::pbrt::Float;

/// Perceptually linear roughness is squared to get the GGX width.
pub fn roughness_to_alpha(linear_roughness: Float) -> Float {
    linear_roughness * linear_roughness
}

/// GGX normal distribution evaluated for the cosine between normal and
/// half vector.
pub fn d_ggx(n_dot_h: Float, alpha: Float) -> Float {
    let a2: Float = alpha * alpha;
    let f: Float = (n_dot_h * a2 - n_dot_h) * n_dot_h + 1.0 as Float;
    a2 / (PI * f * f)
}

/// Height-correlated Smith masking-shadowing, already divided by the
/// `4 * NdotL * NdotV` denominator of the microfacet BRDF.
pub fn v_smith_ggx_correlated(n_dot_v: Float, n_dot_l: Float, alpha: Float) -> Float {
    let a2: Float = alpha * alpha;
    let lambda_v: Float = n_dot_l * ((n_dot_v - a2 * n_dot_v) * n_dot_v + a2).sqrt();
    let lambda_l: Float = n_dot_v * ((n_dot_l - a2 * n_dot_l) * n_dot_l + a2).sqrt();
    0.5 as Float / (lambda_v + lambda_l)
}

/// Schlick's approximation of the Fresnel term.
pub fn f_schlick(f0: Float, f90: Float, u: Float) -> Float {
    f0 + (f90 - f0) * (1.0 as Float - u).powi(5)
}

/// Sample a half vector around +z proportionally to `D(h) * cos(h)`.
pub fn importance_sample_ggx(u: &Point2f, alpha: Float) -> Vector3f {
    let phi: Float = 2.0 as Float * PI * u.y;
    let tan_theta2: Float = alpha * alpha * u.x / (1.0 as Float - u.x);
    let cos_theta: Float = 1.0 as Float / (1.0 as Float + tan_theta2).sqrt();
    let sin_theta: Float = (0.0 as Float).max(1.0 - cos_theta * cos_theta).sqrt();
    spherical_direction(sin_theta, cos_theta, phi)
}

pub struct TrowbridgeReitzDistribution {
    pub alpha: Float,
}

impl TrowbridgeReitzDistribution {
    pub fn new(linear_roughness: Float) -> Self {
        TrowbridgeReitzDistribution {
            alpha: roughness_to_alpha(linear_roughness),
        }
    }
    pub fn d(&self, n_dot_h: Float) -> Float {
        d_ggx(n_dot_h, self.alpha)
    }
    pub fn vis(&self, n_dot_v: Float, n_dot_l: Float) -> Float {
        v_smith_ggx_correlated(n_dot_v, n_dot_l, self.alpha)
    }
    pub fn sample_wh(&self, u: &Point2f) -> Vector3f {
        importance_sample_ggx(u, self.alpha)
    }
}
