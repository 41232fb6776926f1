// std
use std::f32::consts::PI;
// lighting
use crate::core::geometry::vec3_dot_vec3f;
use crate::core::geometry::{Point3f, Vector3f};
use crate::core::interaction::ShadingPoint;
use crate::core::light::{distance_falloff, light_vector, LightSample};
use crate::core::pbrt::{saturate, Float, Spectrum};
use crate::core::transform::Transform;

/// Point light, optionally restricted to a cone. A plain point light is
/// a spot light with an opening half-angle of pi.
#[derive(Debug, Copy, Clone)]
pub struct PointLight {
    pub pos_w: Point3f,
    pub intensity: Spectrum,
    /// Cone axis, pointing away from the light.
    pub direction: Vector3f,
    /// Half-angle of the cone in radians.
    pub opening_angle: Float,
    pub cos_opening_angle: Float,
    /// Width in radians of the soft band inside the cone edge. Zero
    /// gives a hard edge.
    pub penumbra_angle: Float,
}

impl Default for PointLight {
    fn default() -> Self {
        PointLight {
            pos_w: Point3f::default(),
            intensity: Spectrum::new(1.0),
            direction: Vector3f::new(0.0, 0.0, -1.0),
            opening_angle: PI,
            cos_opening_angle: -1.0,
            penumbra_angle: 0.0,
        }
    }
}

impl PointLight {
    pub fn new(light_to_world: &Transform, intensity: &Spectrum) -> Self {
        PointLight {
            pos_w: light_to_world.transform_point(&Point3f::default()),
            intensity: *intensity,
            ..PointLight::default()
        }
    }
    /// `opening_angle` and `penumbra_angle` are in radians.
    pub fn new_spot(
        light_to_world: &Transform,
        intensity: &Spectrum,
        direction: &Vector3f,
        opening_angle: Float,
        penumbra_angle: Float,
    ) -> Self {
        let opening_angle: Float = opening_angle.max(0.0).min(PI);
        PointLight {
            pos_w: light_to_world.transform_point(&Point3f::default()),
            intensity: *intensity,
            direction: light_to_world.transform_vector(direction).normalize(),
            opening_angle,
            cos_opening_angle: opening_angle.cos(),
            penumbra_angle: penumbra_angle.max(0.0),
        }
    }
    pub fn falloff(&self, l: &Vector3f, dist_squared: Float) -> Float {
        let mut falloff: Float = distance_falloff(dist_squared);
        let cos_theta: Float = -vec3_dot_vec3f(l, &self.direction);
        if cos_theta < self.cos_opening_angle {
            falloff = 0.0 as Float;
        } else if self.penumbra_angle > 0.0 as Float {
            // ramp from zero at the cone edge to one a penumbra further in
            let delta_angle: Float = self.opening_angle - cos_theta.min(1.0).acos();
            falloff *= saturate(delta_angle / self.penumbra_angle);
        }
        falloff
    }
    pub fn evaluate(&self, sd: &ShadingPoint) -> LightSample {
        let (l, distance, dist_squared) = light_vector(&sd.p_w, &self.pos_w);
        let falloff: Float = self.falloff(&l, dist_squared);
        LightSample {
            diffuse: self.intensity * falloff,
            specular: self.intensity * falloff,
            l,
            pos_w: self.pos_w,
            distance,
            ..LightSample::default()
        }
    }
}
