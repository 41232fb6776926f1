// lighting
use crate::core::geometry::vec3_normalize;
use crate::core::geometry::Vector3f;
use crate::core::interaction::ShadingPoint;
use crate::core::light::{LightSample, DIRECTIONAL_LIGHT_DISTANCE};
use crate::core::pbrt::Spectrum;
use crate::core::transform::Transform;

/// Infinitely distant light. `direction` is the way the light travels,
/// so the surface sees it coming from `-direction`.
#[derive(Debug, Default, Copy, Clone)]
pub struct DirectionalLight {
    pub direction: Vector3f,
    pub intensity: Spectrum,
}

impl DirectionalLight {
    pub fn new(light_to_world: &Transform, intensity: &Spectrum, direction: &Vector3f) -> Self {
        DirectionalLight {
            direction: vec3_normalize(&light_to_world.transform_vector(direction)),
            intensity: *intensity,
        }
    }
    /// Radiance arrives unattenuated. The returned position is only a
    /// marker placed far along the light direction.
    pub fn evaluate(&self, sd: &ShadingPoint) -> LightSample {
        let l: Vector3f = -self.direction;
        LightSample {
            diffuse: self.intensity,
            specular: self.intensity,
            l,
            pos_w: sd.p_w + l * DIRECTIONAL_LIGHT_DISTANCE,
            distance: DIRECTIONAL_LIGHT_DISTANCE,
            ..LightSample::default()
        }
    }
}
