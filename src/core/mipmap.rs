//! To limit the potential number of texels that need to be accessed,
//! filtering methods use an image pyramid of increasingly lower
//! resolution prefiltered versions of the original image to
//! accelerate their operation.
//!
//! Light probes use the pyramid directly: roughness picks a level of
//! detail and the lookup blends the two nearest levels.

// std
use std::f32::consts::PI;
use std::ops::{Add, AddAssign, Mul};
// others
use log::debug;
use num;
// lighting
use crate::core::error::{LightingError, Result};
use crate::core::geometry::{Point2f, Point2i};
use crate::core::memory::BlockedArray;
use crate::core::pbrt::{clamp_t, is_power_of_2, lerp, mod_t, round_up_pow2_32};
use crate::core::pbrt::{Float, Spectrum};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ImageWrap {
    Repeat,
    Black,
    Clamp,
}

#[derive(Debug, Default, Copy, Clone)]
struct ResampleWeight {
    first_texel: i32,
    weight: [Float; 4],
}

/// Windowed sinc used to resample images to power-of-two resolutions.
pub fn lanczos(x: Float, tau: Float) -> Float {
    let mut x: Float = x.abs();
    if x < 1e-5 as Float {
        return 1.0 as Float;
    }
    if x > 1.0 as Float {
        return 0.0 as Float;
    }
    x *= PI;
    let s: Float = (x * tau).sin() / (x * tau);
    let lanczos: Float = x.sin() / x;
    s * lanczos
}

#[derive(Debug, Clone)]
pub struct MipMap<T> {
    pub wrap_mode: ImageWrap,
    pub resolution: Point2i,
    pub pyramid: Vec<BlockedArray<T>>,
}

impl<T> MipMap<T>
where
    T: std::default::Default
        + num::Zero
        + std::clone::Clone
        + Add<T, Output = T>
        + AddAssign
        + Clampable
        + Copy
        + Mul<Float, Output = T>,
{
    /// Build the full pyramid from a single row-major base image. Images
    /// that are not a power of two in both directions are resampled
    /// first.
    pub fn new(res: Point2i, img: &[T], wrap_mode: ImageWrap) -> Result<Self> {
        if res.x <= 0 || res.y <= 0 || img.len() != (res.x * res.y) as usize {
            return Err(LightingError::InvalidImage(format!(
                "{} texels for a {}x{} image",
                img.len(),
                res.x,
                res.y
            )));
        }
        let mut resolution = res;
        let mut resampled_image: Vec<T> = Vec::new();
        if !is_power_of_2(resolution.x) || !is_power_of_2(resolution.y) {
            // resample image to power-of-two resolution
            let res_pow_2: Point2i = Point2i {
                x: round_up_pow2_32(resolution.x),
                y: round_up_pow2_32(resolution.y),
            };
            debug!("Resampling MipMap from {:?} to {:?}", resolution, res_pow_2);
            // resample image in $s$ direction
            let s_weights: Vec<ResampleWeight> = resample_weights(resolution.x, res_pow_2.x);
            resampled_image = vec![T::default(); (res_pow_2.x * res_pow_2.y) as usize];
            for t in 0..resolution.y {
                for s in 0..res_pow_2.x {
                    // compute texel $(s,t)$ in $s$-zoomed image
                    let mut texel: T = T::default();
                    for j in 0..4 {
                        let mut orig_s: i32 = s_weights[s as usize].first_texel + j as i32;
                        orig_s = match wrap_mode {
                            ImageWrap::Repeat => mod_t(orig_s, resolution.x),
                            ImageWrap::Clamp => clamp_t(orig_s, 0_i32, resolution.x - 1_i32),
                            ImageWrap::Black => orig_s,
                        };
                        if orig_s >= 0_i32 && orig_s < resolution.x {
                            texel += img[(t * resolution.x + orig_s) as usize]
                                * s_weights[s as usize].weight[j];
                        }
                    }
                    resampled_image[(t * res_pow_2.x + s) as usize] = texel;
                }
            }
            // resample image in $t$ direction
            let t_weights: Vec<ResampleWeight> = resample_weights(resolution.y, res_pow_2.y);
            let mut work_data: Vec<T> = vec![T::default(); res_pow_2.y as usize];
            for s in 0..res_pow_2.x {
                for t in 0..res_pow_2.y {
                    work_data[t as usize] = T::default();
                    for j in 0..4 {
                        let mut offset: i32 = t_weights[t as usize].first_texel + j as i32;
                        offset = match wrap_mode {
                            ImageWrap::Repeat => mod_t(offset, resolution.y),
                            ImageWrap::Clamp => clamp_t(offset, 0_i32, resolution.y - 1_i32),
                            ImageWrap::Black => offset,
                        };
                        if offset >= 0_i32 && offset < resolution.y {
                            work_data[t as usize] += resampled_image
                                [(offset * res_pow_2.x + s) as usize]
                                * t_weights[t as usize].weight[j];
                        }
                    }
                }
                for t in 0..res_pow_2.y {
                    resampled_image[(t * res_pow_2.x + s) as usize] = Clampable::clamp(
                        work_data[t as usize],
                        0.0 as Float,
                        std::f32::INFINITY as Float,
                    );
                }
            }
            resolution = res_pow_2;
        }
        let mut mipmap = MipMap::<T> {
            wrap_mode,
            resolution,
            pyramid: Vec::new(),
        };
        // initialize levels of MipMap for image
        let n_levels = 1 + (std::cmp::max(resolution.x, resolution.y) as Float).log2() as usize;
        // initialize most detailed level of MipMap
        let img_data: &[T] = if resampled_image.is_empty() {
            img
        } else {
            &resampled_image[..]
        };
        mipmap.pyramid.push(BlockedArray::new_from(
            resolution.x as usize,
            resolution.y as usize,
            img_data,
        ));
        for i in 1..n_levels {
            // initialize $i$th MipMap level from $i-1$st level
            let s_res = std::cmp::max(1, mipmap.pyramid[i - 1].u_size() / 2);
            let t_res = std::cmp::max(1, mipmap.pyramid[i - 1].v_size() / 2);
            let mut ba = BlockedArray::<T>::new(s_res, t_res);
            // filter 4 texels from finer level of pyramid
            for t in 0..t_res {
                for s in 0..s_res {
                    let (si, ti) = (s as isize, t as isize);
                    ba[(s, t)] = (mipmap.texel(i - 1, 2 * si, 2 * ti)
                        + mipmap.texel(i - 1, 2 * si + 1, 2 * ti)
                        + mipmap.texel(i - 1, 2 * si, 2 * ti + 1)
                        + mipmap.texel(i - 1, 2 * si + 1, 2 * ti + 1))
                        * 0.25 as Float;
                }
            }
            mipmap.pyramid.push(ba);
        }
        Ok(mipmap)
    }
    /// Use caller supplied, already prefiltered levels (finest first)
    /// instead of box filtering the base image.
    pub fn from_levels(levels: &[(Point2i, Vec<T>)], wrap_mode: ImageWrap) -> Result<Self> {
        if levels.is_empty() {
            return Err(LightingError::InvalidImage(String::from(
                "a mip chain needs at least one level",
            )));
        }
        let mut pyramid: Vec<BlockedArray<T>> = Vec::with_capacity(levels.len());
        for (i, (res, texels)) in levels.iter().enumerate() {
            if res.x <= 0 || res.y <= 0 || texels.len() != (res.x * res.y) as usize {
                return Err(LightingError::InvalidImage(format!(
                    "mip level {} has {} texels for {}x{}",
                    i,
                    texels.len(),
                    res.x,
                    res.y
                )));
            }
            pyramid.push(BlockedArray::new_from(
                res.x as usize,
                res.y as usize,
                &texels[..],
            ));
        }
        Ok(MipMap {
            wrap_mode,
            resolution: levels[0].0,
            pyramid,
        })
    }
    pub fn width(&self) -> i32 {
        self.resolution.x
    }
    pub fn height(&self) -> i32 {
        self.resolution.y
    }
    pub fn levels(&self) -> usize {
        self.pyramid.len()
    }
    pub fn texel(&self, level: usize, s: isize, t: isize) -> T {
        let l = &self.pyramid[level];
        let (u_size, v_size) = (l.u_size() as isize, l.v_size() as isize);
        let (ss, tt): (usize, usize) = match self.wrap_mode {
            ImageWrap::Repeat => (mod_t(s, u_size) as usize, mod_t(t, v_size) as usize),
            ImageWrap::Clamp => (
                clamp_t(s, 0, u_size - 1) as usize,
                clamp_t(t, 0, v_size - 1) as usize,
            ),
            ImageWrap::Black => {
                if s < 0 || s >= u_size || t < 0 || t >= v_size {
                    return num::Zero::zero();
                }
                (s as usize, t as usize)
            }
        };
        l[(ss, tt)]
    }
    /// Bilinear interpolation of the four texels around `st` in one
    /// level.
    pub fn triangle(&self, level: usize, st: &Point2f) -> T {
        let level: usize = clamp_t(level, 0_usize, self.levels() - 1_usize);
        let s: Float = st.x * self.pyramid[level].u_size() as Float - 0.5;
        let t: Float = st.y * self.pyramid[level].v_size() as Float - 0.5;
        let s0: isize = s.floor() as isize;
        let t0: isize = t.floor() as isize;
        let ds: Float = s - s0 as Float;
        let dt: Float = t - t0 as Float;
        let tmp1: T = self.texel(level, s0 + 1, t0 + 1) * (ds * dt);
        let tmp2: T = self.texel(level, s0 + 1, t0) * (ds * (1.0 - dt));
        let tmp3: T = self.texel(level, s0, t0 + 1) * ((1.0 - ds) * dt);
        let tmp4: T = self.texel(level, s0, t0) * ((1.0 - ds) * (1.0 - dt));
        tmp4 + tmp3 + tmp2 + tmp1
    }
    /// Trilinear lookup at an explicit, fractional level of detail.
    pub fn lookup_lod(&self, st: &Point2f, lod: Float) -> T {
        let max_level: Float = (self.levels() - 1) as Float;
        // NaN compares false everywhere and ends up at level 0
        let lod: Float = if lod > 0.0 as Float {
            lod.min(max_level)
        } else {
            0.0 as Float
        };
        let i_level: usize = lod.floor() as usize;
        if i_level + 1 >= self.levels() {
            return self.triangle(self.levels() - 1, st);
        }
        let delta: Float = lod - i_level as Float;
        lerp(
            delta,
            self.triangle(i_level, st),
            self.triangle(i_level + 1, st),
        )
    }
}

fn resample_weights(old_res: i32, new_res: i32) -> Vec<ResampleWeight> {
    assert!(new_res >= old_res);
    let mut wt: Vec<ResampleWeight> = Vec::with_capacity(new_res as usize);
    let filterwidth: Float = 2.0 as Float;
    for i in 0..new_res {
        // compute image resampling weights for _i_th texel
        let center: Float = (i as Float + 0.5 as Float) * old_res as Float / new_res as Float;
        let mut rw: ResampleWeight = ResampleWeight::default();
        rw.first_texel = ((center - filterwidth) + 0.5 as Float).floor() as i32;
        for j in 0..4 {
            let pos: Float = rw.first_texel as Float + j as Float + 0.5 as Float;
            rw.weight[j] = lanczos((pos - center) / filterwidth, 2.0 as Float);
        }
        // normalize filter weights for texel resampling
        let inv_sum_wts: Float =
            1.0 as Float / (rw.weight[0] + rw.weight[1] + rw.weight[2] + rw.weight[3]);
        for w in rw.weight.iter_mut() {
            *w *= inv_sum_wts;
        }
        wt.push(rw);
    }
    wt
}

pub trait Clampable {
    fn clamp(self, min: Float, max: Float) -> Self;
}

impl Clampable for Float {
    fn clamp(self, min: Float, max: Float) -> Float {
        clamp_t(self, min, max)
    }
}

impl Clampable for Spectrum {
    fn clamp(self, min: Float, max: Float) -> Spectrum {
        Spectrum::rgb(
            clamp_t(self.c[0], min, max),
            clamp_t(self.c[1], min, max),
            clamp_t(self.c[2], min, max),
        )
    }
}
