// lighting
use crate::core::geometry::vec3_dot_vec3f;
use crate::core::geometry::{Point3f, Vector3f};
use crate::core::interaction::ShadingPoint;
use crate::core::light::{distance_falloff, light_vector, LightSample};
use crate::core::pbrt::{clamp_t, Float, Spectrum};
use crate::core::transform::Transform;

/// One-sided emitter approximated by a single point with a facing
/// direction and a surface area.
#[derive(Debug, Copy, Clone)]
pub struct AreaLight {
    /// Light position before `trans_mat` is applied.
    pub pos_w: Point3f,
    pub direction: Vector3f,
    pub intensity: Spectrum,
    pub surface_area: Float,
    pub trans_mat: Transform,
}

impl AreaLight {
    pub fn new(
        trans_mat: &Transform,
        pos_w: &Point3f,
        direction: &Vector3f,
        intensity: &Spectrum,
        surface_area: Float,
    ) -> Self {
        AreaLight {
            pos_w: *pos_w,
            direction: direction.normalize(),
            intensity: *intensity,
            surface_area,
            trans_mat: *trans_mat,
        }
    }
    /// The reported position has `trans_mat` applied while direction
    /// and falloff use the untransformed `pos_w`.
    pub fn evaluate(&self, sd: &ShadingPoint) -> LightSample {
        let pos_w: Point3f = self.trans_mat.transform_point(&self.pos_w);
        let (l, distance, dist_squared) = light_vector(&sd.p_w, &self.pos_w);
        // front face only
        let cos_theta: Float = clamp_t(-vec3_dot_vec3f(&l, &self.direction), 0.0, 1.0);
        let falloff: Float = cos_theta * self.surface_area * distance_falloff(dist_squared);
        LightSample {
            diffuse: self.intensity * falloff,
            specular: self.intensity * falloff,
            l,
            pos_w,
            distance,
            ..LightSample::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Normal3f;

    fn origin() -> ShadingPoint {
        ShadingPoint::new(
            &Point3f::default(),
            &Normal3f::new(0.0, 1.0, 0.0),
            &Vector3f::new(0.0, 1.0, 0.0),
            0.5,
            &Spectrum::new(0.04),
        )
    }

    #[test]
    fn facing_away_is_black() {
        let light = AreaLight::new(
            &Transform::default(),
            &Point3f::new(0.0, 2.0, 0.0),
            &Vector3f::new(0.0, 1.0, 0.0),
            &Spectrum::new(5.0),
            2.0,
        );
        let ls = light.evaluate(&origin());
        assert!(ls.diffuse.is_black());
        assert!(ls.specular.is_black());
    }

    #[test]
    fn edge_on_is_black() {
        // emitter normal perpendicular to the direction to the surface
        let light = AreaLight::new(
            &Transform::default(),
            &Point3f::new(0.0, 2.0, 0.0),
            &Vector3f::new(1.0, 0.0, 0.0),
            &Spectrum::new(5.0),
            2.0,
        );
        let ls = light.evaluate(&origin());
        assert_eq!(ls.diffuse.c[0], 0.0);
        assert!(ls.diffuse.is_black());
        assert!(ls.specular.is_black());
        assert!((ls.distance - 2.0).abs() < 1e-6);
    }

    #[test]
    fn facing_towards_scales_with_area() {
        let light = AreaLight::new(
            &Transform::default(),
            &Point3f::new(0.0, 2.0, 0.0),
            &Vector3f::new(0.0, -1.0, 0.0),
            &Spectrum::new(5.0),
            2.0,
        );
        let ls = light.evaluate(&origin());
        let expected = 5.0 * 2.0 * distance_falloff(4.0);
        assert!((ls.diffuse.c[0] - expected).abs() < 1e-5);
        assert!((ls.distance - 2.0).abs() < 1e-6);
    }

    #[test]
    fn position_is_transformed_but_direction_is_not() {
        let light = AreaLight::new(
            &Transform::translate(&Vector3f::new(3.0, 0.0, 0.0)),
            &Point3f::new(0.0, 2.0, 0.0),
            &Vector3f::new(0.0, -1.0, 0.0),
            &Spectrum::new(1.0),
            1.0,
        );
        let ls = light.evaluate(&origin());
        assert_eq!(ls.pos_w, Point3f::new(3.0, 2.0, 0.0));
        assert!((ls.l - Vector3f::new(0.0, 1.0, 0.0)).length() < 1e-6);
    }
}
