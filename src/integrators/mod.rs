//! Accumulates the contribution of every light in a [Scene] at a
//! shading point, and does so for many points in parallel.
//!
//! Analytic lights are shaded with a Lambert diffuse and a GGX
//! specular lobe, both weighted by the clamped `n_dot_l` of the
//! [LightSample]. Probe samples are already integrated over the
//! hemisphere and are added as they are, with the diffuse part tinted
//! by the albedo.

// others
use log::warn;
use rayon::prelude::*;
// lighting
use crate::core::interaction::ShadingPoint;
use crate::core::light::{evaluate_area_light, evaluate_light, Light, LightSample};
use crate::core::pbrt::{Float, Spectrum};
use crate::core::reflection::{ggx_specular, lambert_diffuse};
use crate::core::scene::Scene;
use crate::lights::probe::evaluate_light_probe;

/// Outgoing radiance towards `sd.v`.
pub fn shade(scene: &Scene, sd: &ShadingPoint, albedo: &Spectrum) -> Spectrum {
    let mut l: Spectrum = Spectrum::default();
    let n_dot_v: Float = sd.n_dot_v.max(1e-4 as Float);
    for light in &scene.lights {
        let ls: LightSample = match light {
            Light::Area(area) => evaluate_area_light(area, sd),
            _ => evaluate_light(light, sd),
        };
        let n_dot_l: Float = ls.n_dot_l.max(0.0 as Float);
        if n_dot_l == 0.0 as Float {
            continue;
        }
        let fd: Spectrum = lambert_diffuse(albedo);
        let fs: Spectrum = ggx_specular(
            &sd.specular,
            sd.linear_roughness,
            n_dot_v,
            n_dot_l,
            ls.n_dot_h.max(0.0 as Float),
            ls.l_dot_h.max(0.0 as Float),
        );
        l += (ls.diffuse * fd + ls.specular * fs) * n_dot_l;
    }
    for probe in &scene.probes {
        let ls: LightSample = evaluate_light_probe(probe, sd, &scene.dfg);
        l += ls.diffuse * *albedo + ls.specular;
    }
    l
}

/// Shade all points in parallel. Results are in input order; NaN and
/// infinite values are reported and replaced by black.
pub fn render(scene: &Scene, points: &[ShadingPoint], albedo: &Spectrum) -> Vec<Spectrum> {
    points
        .par_iter()
        .enumerate()
        .map(|(i, sd)| {
            let l: Spectrum = shade(scene, sd, albedo);
            if l.has_nans() {
                warn!(
                    "Not-a-number radiance value returned for point {}. Setting to black.",
                    i
                );
                Spectrum::default()
            } else if l.y().is_infinite() {
                warn!(
                    "Infinite luminance value returned for point {}. Setting to black.",
                    i
                );
                Spectrum::default()
            } else {
                l
            }
        })
        .collect()
}
