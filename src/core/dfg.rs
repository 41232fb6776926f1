//! Pre-integrated BRDF response for split-sum image based lighting.
//!
//! The table is indexed by `(n_dot_v, linear_roughness)`, both in
//! [0, 1], and stores three channels:
//!
//! - 0: scale applied to the specular reflectance
//! - 1: bias added on top of it
//! - 2: energy renormalized Disney diffuse response
//!
//! One table is built per process and shared read-only by all probes.

// std
use std::path::Path;
// others
use log::{debug, info};
use rayon::prelude::*;
// lighting
use crate::core::error::{LightingError, Result};
use crate::core::geometry::{vec3_dot_vec3f, vec3_normalize, Point2f, Point2i, Vector3f};
use crate::core::imageio::{read_image_linear, write_exr};
use crate::core::lowdiscrepancy::hammersley_2d;
use crate::core::microfacet::{f_schlick, roughness_to_alpha, TrowbridgeReitzDistribution};
use crate::core::mipmap::{ImageWrap, MipMap};
use crate::core::pbrt::{lerp, saturate, Float, Spectrum};
use crate::core::sampling::cosine_sample_hemisphere;

pub const DFG_SCALE: usize = 0;
pub const DFG_BIAS: usize = 1;
pub const DFG_DIFFUSE: usize = 2;

#[derive(Debug, Clone)]
pub struct DfgTable {
    lut: MipMap<Spectrum>,
}

impl DfgTable {
    /// Row-major texels, `n_dot_v` along x and roughness along y.
    pub fn from_texels(resolution: &Point2i, texels: Vec<Spectrum>) -> Result<Self> {
        let lut: MipMap<Spectrum> =
            MipMap::from_levels(&[(*resolution, texels)], ImageWrap::Clamp)?;
        Ok(DfgTable { lut })
    }
    /// Load a table from any image format `image` decodes. Stored
    /// values are used as they are, no transfer curve is applied.
    pub fn from_file(path: &Path) -> Result<Self> {
        let (resolution, texels) = read_image_linear(path)?;
        info!(
            "Loaded DFG table {:?} ({}x{})",
            path, resolution.x, resolution.y
        );
        DfgTable::from_texels(&resolution, texels)
    }
    /// Save the table as 32-bit float OpenEXR.
    pub fn write(&self, path: &Path) -> Result<()> {
        let (w, h) = (self.width(), self.height());
        let mut texels: Vec<Spectrum> = Vec::with_capacity((w * h) as usize);
        for t in 0..h {
            for s in 0..w {
                texels.push(self.lut.texel(0, s as isize, t as isize));
            }
        }
        write_exr(path, &Point2i { x: w, y: h }, &texels)
    }
    /// Numerically integrate a `size` x `size` table with `sample_count`
    /// Hammersley samples per texel.
    pub fn integrate(size: i32, sample_count: u32) -> Result<Self> {
        if size <= 0 {
            return Err(LightingError::InvalidParameter {
                name: String::from("size"),
                message: format!("{} is not a positive table size", size),
            });
        }
        if sample_count == 0 {
            return Err(LightingError::InvalidParameter {
                name: String::from("samples"),
                message: String::from("at least one sample is needed"),
            });
        }
        info!(
            "Integrating {}x{} DFG table with {} samples per texel",
            size, size, sample_count
        );
        let rows: Vec<Vec<Spectrum>> = (0..size)
            .into_par_iter()
            .map(|t| {
                let linear_roughness: Float = (t as Float + 0.5) / size as Float;
                (0..size)
                    .map(|s| {
                        let n_dot_v: Float = (s as Float + 0.5) / size as Float;
                        let (scale, bias) =
                            integrate_specular(n_dot_v, linear_roughness, sample_count);
                        let diffuse = integrate_diffuse(n_dot_v, linear_roughness, sample_count);
                        Spectrum::rgb(scale, bias, diffuse)
                    })
                    .collect()
            })
            .collect();
        let texels: Vec<Spectrum> = rows.into_iter().flatten().collect();
        debug!("DFG table done");
        DfgTable::from_texels(&Point2i { x: size, y: size }, texels)
    }
    pub fn width(&self) -> i32 {
        self.lut.width()
    }
    pub fn height(&self) -> i32 {
        self.lut.height()
    }
    /// Bilinear lookup; coordinates outside [0, 1] clamp to the border.
    pub fn lookup(&self, n_dot_v: Float, linear_roughness: Float) -> Spectrum {
        self.lut.triangle(
            0,
            &Point2f {
                x: n_dot_v,
                y: linear_roughness,
            },
        )
    }
}

// the view vector for a given n_dot_v in a frame where the normal is +z
fn view_vector(n_dot_v: Float) -> Vector3f {
    Vector3f {
        x: (1.0 as Float - n_dot_v * n_dot_v).max(0.0).sqrt(),
        y: 0.0,
        z: n_dot_v,
    }
}

/// Split-sum scale and bias of a GGX lobe with height correlated Smith
/// visibility.
fn integrate_specular(n_dot_v: Float, linear_roughness: Float, sample_count: u32) -> (Float, Float) {
    let ggx = TrowbridgeReitzDistribution::new(linear_roughness);
    let v: Vector3f = view_vector(n_dot_v);
    let mut a: Float = 0.0;
    let mut b: Float = 0.0;
    for i in 0..sample_count {
        let u: Point2f = hammersley_2d(i, sample_count);
        let h: Vector3f = ggx.sample_wh(&u);
        let v_dot_h_raw: Float = vec3_dot_vec3f(&v, &h);
        let l: Vector3f = h * (2.0 as Float * v_dot_h_raw) - v;
        let n_dot_l: Float = saturate(l.z);
        let n_dot_h: Float = saturate(h.z);
        let v_dot_h: Float = saturate(v_dot_h_raw);
        if n_dot_l > 0.0 as Float && n_dot_h > 0.0 as Float {
            let vis: Float = ggx.vis(n_dot_v, n_dot_l);
            // pdf = D * n_dot_h / (4 * v_dot_h)
            let g_vis: Float = 4.0 as Float * vis * n_dot_l * v_dot_h / n_dot_h;
            let fc: Float = (1.0 as Float - v_dot_h).powi(5);
            a += (1.0 as Float - fc) * g_vis;
            b += fc * g_vis;
        }
    }
    (a / sample_count as Float, b / sample_count as Float)
}

/// Disney diffuse with the renormalization that keeps the combined
/// diffuse and specular response from exceeding one.
pub fn disney_diffuse(n_dot_v: Float, n_dot_l: Float, l_dot_h: Float, linear_roughness: Float) -> Float {
    let energy_bias: Float = lerp(linear_roughness, 0.0 as Float, 0.5 as Float);
    let energy_factor: Float = lerp(linear_roughness, 1.0 as Float, 1.0 as Float / 1.51 as Float);
    let fd90: Float = energy_bias + 2.0 as Float * l_dot_h * l_dot_h * linear_roughness;
    let light_scatter: Float = f_schlick(1.0, fd90, n_dot_l);
    let view_scatter: Float = f_schlick(1.0, fd90, n_dot_v);
    light_scatter * view_scatter * energy_factor
}

fn integrate_diffuse(n_dot_v: Float, linear_roughness: Float, sample_count: u32) -> Float {
    let v: Vector3f = view_vector(n_dot_v);
    let mut sum: Float = 0.0;
    for i in 0..sample_count {
        let u: Point2f = hammersley_2d(i, sample_count);
        // cosine weighted, so the cosine and 1/pi cancel against the pdf
        let l: Vector3f = cosine_sample_hemisphere(&u);
        if l.z > 0.0 as Float {
            let h: Vector3f = vec3_normalize(&(v + l));
            let l_dot_h: Float = saturate(vec3_dot_vec3f(&l, &h));
            sum += disney_diffuse(n_dot_v, l.z, l_dot_h, linear_roughness);
        }
    }
    sum / sample_count as Float
}
