//! In order for objects in a scene to be visible, there must be a
//! source of illumination so that some light is reflected from them
//! to the camera sensor.
//!
//! Every light kind turns a [ShadingPoint] into a [LightSample]. The
//! set of analytic lights is closed, so dispatch is a plain `match`
//! over [Light].

// others
use strum_macros::{Display, EnumIter, EnumString};
// lighting
use crate::core::geometry::{nrm_dot_vec3f, vec3_dot_vec3f, vec3_normalize};
use crate::core::geometry::{Point3f, Vector3f};
use crate::core::interaction::ShadingPoint;
use crate::core::pbrt::{Float, Spectrum};
use crate::lights::area::AreaLight;
use crate::lights::distant::DirectionalLight;
use crate::lights::point::PointLight;

/// Added to the squared distance so the inverse square law stays
/// finite at the light's position.
pub const MIN_LIGHT_DISTANCE: Float = 0.01;

/// How far the synthetic position of a directional light is placed
/// from the shading point.
pub const DIRECTIONAL_LIGHT_DISTANCE: Float = 1e6;

/// Light vectors shorter than this (squared) are treated as zero.
pub const MIN_LIGHT_DISTANCE_SQUARED: Float = 1e-5;

/// Result of evaluating one light at one shading point. The three dot
/// products are signed; clamp them where negative values are invalid.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct LightSample {
    pub diffuse: Spectrum,
    pub specular: Spectrum,
    /// Unit direction from the surface towards the light.
    pub l: Vector3f,
    pub pos_w: Point3f,
    pub distance: Float,
    pub n_dot_h: Float,
    pub n_dot_l: Float,
    pub l_dot_h: Float,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum LightType {
    Directional,
    Point,
    Area,
    Probe,
}

#[derive(Debug, Clone)]
pub enum Light {
    Directional(DirectionalLight),
    Point(PointLight),
    Area(AreaLight),
}

impl Light {
    pub fn get_type(&self) -> LightType {
        match self {
            Light::Directional(_) => LightType::Directional,
            Light::Point(_) => LightType::Point,
            Light::Area(_) => LightType::Area,
        }
    }
}

/// Inverse square falloff, `1 / (0.01^2 + d^2)`.
pub fn distance_falloff(distance_squared: Float) -> Float {
    1.0 as Float / (MIN_LIGHT_DISTANCE * MIN_LIGHT_DISTANCE + distance_squared)
}

/// Fill in the half vector terms of a sample whose `l` is already set.
pub fn calc_common_light_properties(sd: &ShadingPoint, ls: &mut LightSample) {
    let h: Vector3f = vec3_normalize(&(sd.v + ls.l));
    ls.n_dot_h = nrm_dot_vec3f(&sd.n, &h);
    ls.n_dot_l = nrm_dot_vec3f(&sd.n, &ls.l);
    ls.l_dot_h = vec3_dot_vec3f(&ls.l, &h);
}

/// Direction and distance from `p` to `p_light`. Coincident points give
/// a zero direction and a zero distance instead of NaNs.
pub fn light_vector(p: &Point3f, p_light: &Point3f) -> (Vector3f, Float, Float) {
    let l: Vector3f = *p_light - *p;
    let dist_squared: Float = l.length_squared();
    if dist_squared > MIN_LIGHT_DISTANCE_SQUARED {
        let distance: Float = dist_squared.sqrt();
        (l / distance, distance, dist_squared)
    } else {
        (Vector3f::default(), 0.0 as Float, dist_squared)
    }
}

/// Evaluate a directional or point/spot light. Area lights have their
/// own entry point, [evaluate_area_light], and come back with zero
/// radiance and a zero direction here.
pub fn evaluate_light(light: &Light, sd: &ShadingPoint) -> LightSample {
    let mut ls: LightSample = match light {
        Light::Directional(l) => l.evaluate(sd),
        Light::Point(l) => l.evaluate(sd),
        _ => LightSample::default(),
    };
    calc_common_light_properties(sd, &mut ls);
    ls
}

pub fn evaluate_area_light(light: &AreaLight, sd: &ShadingPoint) -> LightSample {
    let mut ls: LightSample = light.evaluate(sd);
    calc_common_light_properties(sd, &mut ls);
    ls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Normal3f;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn shading_point(n: Normal3f, v: Vector3f) -> ShadingPoint {
        ShadingPoint::new(&Point3f::default(), &n, &v, 0.5, &Spectrum::new(0.04))
    }

    #[test]
    fn falloff_is_bounded_and_decreasing() {
        let max = 1.0 / (MIN_LIGHT_DISTANCE * MIN_LIGHT_DISTANCE);
        assert!((distance_falloff(0.0) - max).abs() < 1e-2);
        let mut last = distance_falloff(0.0);
        for i in 1..100 {
            let d = i as Float * 0.1;
            let f = distance_falloff(d * d);
            assert!(f < last);
            assert!(f <= max);
            last = f;
        }
    }

    #[test]
    fn common_properties_for_unit_vectors() {
        let dirs = [
            Vector3f::new(0.0, 1.0, 0.0),
            Vector3f::new(0.6, 0.8, 0.0),
            Vector3f::new(0.0, 0.0, -1.0),
            vec3_normalize(&Vector3f::new(1.0, -2.0, 3.0)),
        ];
        for v in dirs.iter() {
            for l in dirs.iter() {
                if (*v + *l).length() < 1e-3 {
                    continue;
                }
                let sd = shading_point(Normal3f::new(0.0, 1.0, 0.0), *v);
                let mut ls = LightSample {
                    l: *l,
                    ..LightSample::default()
                };
                calc_common_light_properties(&sd, &mut ls);
                for d in &[ls.n_dot_h, ls.n_dot_l, ls.l_dot_h] {
                    assert!(*d >= -1.0 - 1e-5 && *d <= 1.0 + 1e-5);
                }
            }
        }
    }

    #[test]
    fn negative_terms_are_not_clamped() {
        let sd = shading_point(Normal3f::new(0.0, 1.0, 0.0), Vector3f::new(0.0, 1.0, 0.0));
        let mut ls = LightSample {
            l: vec3_normalize(&Vector3f::new(1.0, -1.0, 0.0)),
            ..LightSample::default()
        };
        calc_common_light_properties(&sd, &mut ls);
        assert!(ls.n_dot_l < 0.0);
    }

    #[test]
    fn coincident_light_vector_is_zero() {
        let p = Point3f::new(1.0, 2.0, 3.0);
        let (l, d, _) = light_vector(&p, &Point3f::new(1.0, 2.0, 3.001));
        assert_eq!(l, Vector3f::default());
        assert_eq!(d, 0.0);
    }

    #[test]
    fn light_type_names() {
        let names: Vec<String> = LightType::iter().map(|t| t.to_string()).collect();
        assert_eq!(names, vec!["directional", "point", "area", "probe"]);
        assert_eq!(LightType::from_str("area").unwrap(), LightType::Area);
    }
}
