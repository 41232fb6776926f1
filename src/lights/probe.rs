//! Image based lighting from a light probe. Each probe carries a
//! diffuse irradiance map and a prefiltered specular map, both in the
//! latitude-longitude layout of [direction_to_lat_long]. The split-sum
//! response comes from a shared [DfgTable].

// std
use std::path::Path;
use std::sync::Arc;
// others
use log::info;
// lighting
use crate::core::dfg::{DfgTable, DFG_BIAS, DFG_DIFFUSE, DFG_SCALE};
use crate::core::error::Result;
use crate::core::geometry::{direction_to_lat_long, pnt3_distancef, ray_sphere_intersect};
use crate::core::geometry::{vec3_normalize, vec3_reflect};
use crate::core::geometry::{Point2f, Point2i, Point3f, Ray, Vector3f};
use crate::core::imageio::read_image;
use crate::core::interaction::ShadingPoint;
use crate::core::light::{calc_common_light_properties, LightSample, LightType};
use crate::core::mipmap::{ImageWrap, MipMap};
use crate::core::pbrt::{Float, Spectrum};
use crate::core::reflection::{diffuse_dominant_dir, specular_dominant_dir};
use crate::core::transform::Transform;

/// A lat-long environment image with its mip chain.
#[derive(Debug, Clone)]
pub struct ProbeImage {
    map: MipMap<Spectrum>,
}

impl ProbeImage {
    /// Build the mip chain by box filtering `texels`.
    pub fn from_texels(resolution: &Point2i, texels: &[Spectrum]) -> Result<Self> {
        Ok(ProbeImage {
            map: MipMap::new(*resolution, texels, ImageWrap::Repeat)?,
        })
    }
    /// Use an already prefiltered chain, finest level first.
    pub fn from_levels(levels: &[(Point2i, Vec<Spectrum>)]) -> Result<Self> {
        Ok(ProbeImage {
            map: MipMap::from_levels(levels, ImageWrap::Repeat)?,
        })
    }
    pub fn from_file(path: &Path) -> Result<Self> {
        let (resolution, texels) = read_image(path)?;
        let image = ProbeImage::from_texels(&resolution, &texels)?;
        info!(
            "Loaded probe image {:?} ({}x{}, {} mips)",
            path,
            resolution.x,
            resolution.y,
            image.mip_count()
        );
        Ok(image)
    }
    pub fn mip_count(&self) -> usize {
        self.map.levels()
    }
    pub fn sample(&self, w: &Vector3f, lod: Float) -> Spectrum {
        let st: Point2f = direction_to_lat_long(w);
        self.map.lookup_lod(&st, lod)
    }
}

#[derive(Debug, Clone)]
pub struct LightProbe {
    pub pos_w: Point3f,
    /// Negative for a global probe at infinity, otherwise the radius of
    /// the sphere used for parallax correction.
    pub radius: Float,
    pub intensity: Spectrum,
    pub diffuse: Arc<ProbeImage>,
    pub specular: Arc<ProbeImage>,
}

impl LightProbe {
    pub fn new(
        light_to_world: &Transform,
        radius: Float,
        intensity: &Spectrum,
        diffuse: Arc<ProbeImage>,
        specular: Arc<ProbeImage>,
    ) -> Self {
        LightProbe {
            pos_w: light_to_world.transform_point(&Point3f::default()),
            radius,
            intensity: *intensity,
            diffuse,
            specular,
        }
    }
    pub fn get_type(&self) -> LightType {
        LightType::Probe
    }
    /// Direction to look the probe images up with. Local probes
    /// reproject the ray from `p` onto their sphere; a ray that misses
    /// keeps its own direction.
    pub fn parallax_direction(&self, p: &Point3f, w: &Vector3f) -> Vector3f {
        if self.radius < 0.0 as Float {
            return *w;
        }
        let ray: Ray = Ray { o: *p, d: *w };
        match ray_sphere_intersect(&ray, &self.pos_w, self.radius) {
            Some(hit) => vec3_normalize(&(hit - self.pos_w)),
            None => *w,
        }
    }
}

/// Map roughness onto the specular mip chain.
pub fn linear_roughness_to_lod(linear_roughness: Float, mip_count: usize) -> Float {
    linear_roughness.sqrt() * (mip_count as Float - 1.0 as Float)
}

pub fn evaluate_light_probe(probe: &LightProbe, sd: &ShadingPoint, dfg: &DfgTable) -> LightSample {
    let l: Vector3f = vec3_reflect(&-sd.v, &sd.n);
    let roughness: Float = sd.linear_roughness;

    // diffuse
    let dominant: Vector3f = diffuse_dominant_dir(&sd.n, &sd.v, sd.n_dot_v, roughness);
    let w: Vector3f = probe.parallax_direction(&sd.p_w, &dominant);
    let diffuse_lookup: Spectrum = probe.diffuse.sample(&w, 0.0);
    let diffuse: Spectrum = diffuse_lookup * dfg.lookup(sd.n_dot_v, roughness)[DFG_DIFFUSE];

    // specular
    let dominant: Vector3f = specular_dominant_dir(&sd.n, &l, roughness);
    let lod: Float = linear_roughness_to_lod(roughness, probe.specular.mip_count());
    let ld: Spectrum = probe.specular.sample(&dominant, lod);
    let n_dot_v: Float = sd.n_dot_v.max(0.5 as Float / dfg.width() as Float);
    let pre_integrated: Spectrum = dfg.lookup(n_dot_v, roughness);
    let specular: Spectrum =
        ld * (sd.specular * pre_integrated[DFG_SCALE] + pre_integrated[DFG_BIAS]);

    let mut ls = LightSample {
        diffuse: diffuse * probe.intensity,
        specular: specular * probe.intensity,
        l,
        pos_w: probe.pos_w,
        distance: pnt3_distancef(&probe.pos_w, &sd.p_w),
        ..LightSample::default()
    };
    calc_common_light_properties(sd, &mut ls);
    ls
}
