//! Factories that turn named parameter lists into lights, probes and
//! the shared DFG table. Parameter names follow the scene description
//! conventions: `from`/`to` place and aim a light, `I` is the intensity
//! of point and spot lights, `L` the radiance of distant and area
//! lights and `scale` multiplies either.

// std
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
// others
use log::info;
use strum_macros::{Display, EnumIter, EnumString};
// lighting
use crate::core::dfg::DfgTable;
use crate::core::error::{LightingError, Result};
use crate::core::geometry::{Point3f, Vector3f};
use crate::core::light::Light;
use crate::core::paramset::ParamSet;
use crate::core::pbrt::{radians, Float, Spectrum};
use crate::core::transform::Transform;
use crate::lights::area::AreaLight;
use crate::lights::distant::DirectionalLight;
use crate::lights::point::PointLight;
use crate::lights::probe::{LightProbe, ProbeImage};

/// Light names accepted by [make_light].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum LightSourceName {
    Distant,
    Point,
    Spot,
    Area,
}

fn default_to() -> Point3f {
    Point3f::new(0.0, 0.0, 1.0)
}

pub fn make_light(name: &str, params: &ParamSet, light_to_world: &Transform) -> Result<Light> {
    let kind: LightSourceName = LightSourceName::from_str(name)
        .map_err(|_| LightingError::UnknownLight(name.to_string()))?;
    let light: Result<Light> = build_light(kind, params, light_to_world);
    params.report_unused();
    let light: Light = light?;
    info!("Created {} light", kind);
    Ok(light)
}

// every parameter of a kind is looked up before any of them is validated
fn build_light(
    kind: LightSourceName,
    params: &ParamSet,
    light_to_world: &Transform,
) -> Result<Light> {
    let sc: Spectrum = params.find_one_spectrum("scale", Spectrum::new(1.0));
    let from: Point3f = params.find_one_point3f("from", Point3f::default());
    match kind {
        LightSourceName::Distant => {
            let l: Spectrum = params.find_one_spectrum("L", Spectrum::new(1.0));
            let to: Point3f = params.find_one_point3f("to", default_to());
            let dir: Vector3f = to - from;
            check_direction(&dir)?;
            Ok(Light::Directional(DirectionalLight::new(
                light_to_world,
                &(l * sc),
                &dir,
            )))
        }
        LightSourceName::Point => {
            let i: Spectrum = params.find_one_spectrum("I", Spectrum::new(1.0));
            let tr: Transform = *light_to_world * Transform::translate(&Vector3f::from(from));
            Ok(Light::Point(PointLight::new(&tr, &(i * sc))))
        }
        LightSourceName::Spot => {
            let i: Spectrum = params.find_one_spectrum("I", Spectrum::new(1.0));
            let coneangle: Float = params.find_one_float("coneangle", 30.0);
            let conedelta: Float = params.find_one_float("conedelta", 5.0);
            let to: Point3f = params.find_one_point3f("to", default_to());
            if coneangle <= 0.0 || coneangle > 180.0 {
                return Err(LightingError::InvalidParameter {
                    name: String::from("coneangle"),
                    message: format!("{} is not in (0, 180] degrees", coneangle),
                });
            }
            let dir: Vector3f = to - from;
            check_direction(&dir)?;
            let tr: Transform = *light_to_world * Transform::translate(&Vector3f::from(from));
            Ok(Light::Point(PointLight::new_spot(
                &tr,
                &(i * sc),
                &dir,
                radians(coneangle),
                radians(conedelta.max(0.0)),
            )))
        }
        LightSourceName::Area => {
            let l: Spectrum = params.find_one_spectrum("L", Spectrum::new(1.0));
            let area: Float = params.find_one_float("area", 1.0);
            let to: Point3f = params.find_one_point3f("to", default_to());
            if area <= 0.0 {
                return Err(LightingError::InvalidParameter {
                    name: String::from("area"),
                    message: format!("{} is not a positive surface area", area),
                });
            }
            let dir: Vector3f = to - from;
            check_direction(&dir)?;
            Ok(Light::Area(AreaLight::new(
                light_to_world,
                &from,
                &dir,
                &(l * sc),
                area,
            )))
        }
    }
}

fn check_direction(dir: &Vector3f) -> Result<()> {
    if dir.length_squared() == 0.0 as Float {
        return Err(LightingError::InvalidParameter {
            name: String::from("to"),
            message: String::from("\"from\" and \"to\" must differ"),
        });
    }
    Ok(())
}

pub fn make_light_probe(params: &ParamSet, light_to_world: &Transform) -> Result<LightProbe> {
    let diffusemap: String = params.find_one_filename("diffusemap", String::new());
    let specularmap: String = params.find_one_filename("specularmap", String::new());
    let from: Point3f = params.find_one_point3f("from", Point3f::default());
    let radius: Float = params.find_one_float("radius", -1.0);
    let sc: Spectrum = params.find_one_spectrum("scale", Spectrum::new(1.0));
    params.report_unused();
    if diffusemap.is_empty() {
        return Err(LightingError::MissingParameter(String::from("diffusemap")));
    }
    if specularmap.is_empty() {
        return Err(LightingError::MissingParameter(String::from("specularmap")));
    }
    let diffuse = Arc::new(ProbeImage::from_file(Path::new(&diffusemap))?);
    let specular = if specularmap == diffusemap {
        diffuse.clone()
    } else {
        Arc::new(ProbeImage::from_file(Path::new(&specularmap))?)
    };
    let tr: Transform = *light_to_world * Transform::translate(&Vector3f::from(from));
    info!(
        "Created {} light probe (radius {})",
        if radius < 0.0 { "global" } else { "local" },
        radius
    );
    Ok(LightProbe::new(&tr, radius, &sc, diffuse, specular))
}

/// A table loaded from `filename` ignores `size` and `samples`; they
/// are reported as unused.
pub fn make_dfg_table(params: &ParamSet) -> Result<Arc<DfgTable>> {
    let filename: String = params.find_one_filename("filename", String::new());
    if !filename.is_empty() {
        params.report_unused();
        return Ok(Arc::new(DfgTable::from_file(Path::new(&filename))?));
    }
    let size: i32 = params.find_one_int("size", 64);
    let samples: i32 = params.find_one_int("samples", 512);
    params.report_unused();
    if samples <= 0 {
        return Err(LightingError::InvalidParameter {
            name: String::from("samples"),
            message: format!("{} is not a positive sample count", samples),
        });
    }
    Ok(Arc::new(DfgTable::integrate(size, samples as u32)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::light::LightType;
    use strum::IntoEnumIterator;

    #[test]
    fn every_name_builds_a_light() {
        for name in LightSourceName::iter() {
            let light = make_light(&name.to_string(), &ParamSet::default(), &Transform::default());
            assert!(light.is_ok(), "{}", name);
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        match make_light("goniometric", &ParamSet::default(), &Transform::default()) {
            Err(LightingError::UnknownLight(name)) => assert_eq!(name, "goniometric"),
            _ => panic!("expected an unknown light error"),
        }
    }

    #[test]
    fn spot_parameters() {
        let mut ps = ParamSet::default();
        ps.add_point3f("from", Point3f::new(0.0, 5.0, 0.0));
        ps.add_point3f("to", Point3f::new(0.0, 0.0, 0.0));
        ps.add_float("coneangle", 40.0);
        ps.add_float("conedelta", 10.0);
        ps.add_rgb_spectrum("I", Spectrum::new(2.0));
        ps.add_rgb_spectrum("scale", Spectrum::new(3.0));
        let light = make_light("spot", &ps, &Transform::default()).unwrap();
        assert_eq!(light.get_type(), LightType::Point);
        match light {
            Light::Point(spot) => {
                assert_eq!(spot.pos_w, Point3f::new(0.0, 5.0, 0.0));
                assert!((spot.direction - Vector3f::new(0.0, -1.0, 0.0)).length() < 1e-6);
                assert!((spot.opening_angle - radians(40.0)).abs() < 1e-6);
                assert!((spot.penumbra_angle - radians(10.0)).abs() < 1e-6);
                assert_eq!(spot.intensity, Spectrum::new(6.0));
            }
            _ => panic!("spot lights are point lights"),
        }
    }

    #[test]
    fn distant_direction_points_from_to() {
        let mut ps = ParamSet::default();
        ps.add_point3f("from", Point3f::new(0.0, 10.0, 0.0));
        ps.add_point3f("to", Point3f::new(0.0, 0.0, 0.0));
        match make_light("distant", &ps, &Transform::default()).unwrap() {
            Light::Directional(l) => {
                assert!((l.direction - Vector3f::new(0.0, -1.0, 0.0)).length() < 1e-6)
            }
            _ => panic!("expected a directional light"),
        }
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut ps = ParamSet::default();
        ps.add_float("area", -1.0);
        assert!(make_light("area", &ps, &Transform::default()).is_err());
        let mut ps = ParamSet::default();
        ps.add_point3f("to", Point3f::default());
        assert!(make_light("distant", &ps, &Transform::default()).is_err());
        let mut ps = ParamSet::default();
        ps.add_float("coneangle", 0.0);
        assert!(make_light("spot", &ps, &Transform::default()).is_err());
    }

    #[test]
    fn rejected_lights_still_consume_their_parameters() {
        let mut ps = ParamSet::default();
        ps.add_point3f("to", Point3f::new(0.0, -1.0, 0.0));
        ps.add_rgb_spectrum("I", Spectrum::new(2.0));
        ps.add_float("coneangle", 200.0);
        ps.add_float("conedelat", 5.0);
        assert!(make_light("spot", &ps, &Transform::default()).is_err());
        assert_eq!(ps.unused(), vec![String::from("conedelat")]);
        let mut ps = ParamSet::default();
        ps.add_float("area", 0.0);
        ps.add_point3f("to", Point3f::new(0.0, 1.0, 0.0));
        assert!(make_light("area", &ps, &Transform::default()).is_err());
        assert!(ps.unused().is_empty());
    }

    #[test]
    fn probe_needs_both_maps() {
        let mut ps = ParamSet::default();
        ps.add_string("diffusemap", "irradiance.hdr");
        match make_light_probe(&ps, &Transform::default()) {
            Err(LightingError::MissingParameter(name)) => assert_eq!(name, "specularmap"),
            _ => panic!("expected a missing parameter error"),
        }
    }

    #[test]
    fn dfg_from_parameters() {
        let mut ps = ParamSet::default();
        ps.add_int("size", 4);
        ps.add_int("samples", 16);
        let dfg = make_dfg_table(&ps).unwrap();
        assert_eq!(dfg.width(), 4);
        let mut ps = ParamSet::default();
        ps.add_int("samples", 0);
        assert!(make_dfg_table(&ps).is_err());
        assert!(ps.unused().is_empty());
    }

    #[test]
    fn dfg_file_ignores_integration_parameters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dfg.exr");
        DfgTable::integrate(2, 8).unwrap().write(&path).unwrap();
        let mut ps = ParamSet::default();
        ps.add_string("filename", &path.to_string_lossy());
        ps.add_int("sampels", 64);
        let dfg = make_dfg_table(&ps).unwrap();
        assert_eq!(dfg.width(), 2);
        assert_eq!(ps.unused(), vec![String::from("sampels")]);
    }
}
