//! Radiance, intensity and reflectance are carried around as RGB
//! triples. Light evaluation never inspects individual wavelengths, so
//! a three component **RGBSpectrum** is all the engine needs.

// std
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Sub};
// others
use num::Zero;
// lighting
use crate::core::pbrt::clamp_t;
use crate::core::pbrt::{inverse_gamma_correct, Float};

#[derive(Debug, Default, Copy, Clone)]
pub struct RGBSpectrum {
    pub c: [Float; 3],
}

impl RGBSpectrum {
    pub fn new(v: Float) -> Self {
        RGBSpectrum { c: [v, v, v] }
    }
    pub fn rgb(r: Float, g: Float, b: Float) -> RGBSpectrum {
        RGBSpectrum { c: [r, g, b] }
    }
    pub fn from_rgb(rgb: &[Float; 3]) -> RGBSpectrum {
        RGBSpectrum::rgb(rgb[0], rgb[1], rgb[2])
    }
    pub fn to_rgb(&self) -> [Float; 3] {
        self.c
    }
    /// Convert 8-bit sRGB encoded values to linear RGB.
    pub fn from_srgb(rgb: &[u8; 3]) -> RGBSpectrum {
        fn convert(v: u8) -> Float {
            inverse_gamma_correct(v as Float / 255.0)
        }
        RGBSpectrum::rgb(convert(rgb[0]), convert(rgb[1]), convert(rgb[2]))
    }
    /// Luminance.
    pub fn y(&self) -> Float {
        let y_weight: [Float; 3] = [0.212_671, 0.715_160, 0.072_169];
        y_weight[0] * self.c[0] + y_weight[1] * self.c[1] + y_weight[2] * self.c[2]
    }
    pub fn is_black(&self) -> bool {
        self.c.iter().all(|c| *c == 0.0 as Float)
    }
    pub fn clamp(&self, low: Float, high: Float) -> RGBSpectrum {
        RGBSpectrum::rgb(
            clamp_t(self.c[0], low, high),
            clamp_t(self.c[1], low, high),
            clamp_t(self.c[2], low, high),
        )
    }
    pub fn max_component_value(&self) -> Float {
        self.c[0].max(self.c[1]).max(self.c[2])
    }
    pub fn has_nans(&self) -> bool {
        self.c.iter().any(|c| c.is_nan())
    }
}

impl PartialEq for RGBSpectrum {
    fn eq(&self, rhs: &RGBSpectrum) -> bool {
        self.c == rhs.c
    }
}

impl Add for RGBSpectrum {
    type Output = RGBSpectrum;
    fn add(self, rhs: RGBSpectrum) -> RGBSpectrum {
        RGBSpectrum {
            c: [
                self.c[0] + rhs.c[0],
                self.c[1] + rhs.c[1],
                self.c[2] + rhs.c[2],
            ],
        }
    }
}

impl Add<Float> for RGBSpectrum {
    type Output = RGBSpectrum;
    fn add(self, rhs: Float) -> RGBSpectrum {
        RGBSpectrum {
            c: [self.c[0] + rhs, self.c[1] + rhs, self.c[2] + rhs],
        }
    }
}

impl AddAssign for RGBSpectrum {
    fn add_assign(&mut self, rhs: RGBSpectrum) {
        self.c[0] += rhs.c[0];
        self.c[1] += rhs.c[1];
        self.c[2] += rhs.c[2];
    }
}

impl Mul for RGBSpectrum {
    type Output = RGBSpectrum;
    fn mul(self, rhs: RGBSpectrum) -> RGBSpectrum {
        RGBSpectrum {
            c: [
                self.c[0] * rhs.c[0],
                self.c[1] * rhs.c[1],
                self.c[2] * rhs.c[2],
            ],
        }
    }
}

impl Mul<Float> for RGBSpectrum {
    type Output = RGBSpectrum;
    fn mul(self, rhs: Float) -> RGBSpectrum {
        RGBSpectrum {
            c: [self.c[0] * rhs, self.c[1] * rhs, self.c[2] * rhs],
        }
    }
}

impl MulAssign for RGBSpectrum {
    fn mul_assign(&mut self, rhs: RGBSpectrum) {
        self.c[0] *= rhs.c[0];
        self.c[1] *= rhs.c[1];
        self.c[2] *= rhs.c[2];
    }
}

impl Sub for RGBSpectrum {
    type Output = RGBSpectrum;
    fn sub(self, rhs: RGBSpectrum) -> RGBSpectrum {
        RGBSpectrum {
            c: [
                self.c[0] - rhs.c[0],
                self.c[1] - rhs.c[1],
                self.c[2] - rhs.c[2],
            ],
        }
    }
}

impl Div<Float> for RGBSpectrum {
    type Output = RGBSpectrum;
    fn div(self, rhs: Float) -> RGBSpectrum {
        let inv: Float = 1.0 as Float / rhs;
        RGBSpectrum {
            c: [self.c[0] * inv, self.c[1] * inv, self.c[2] * inv],
        }
    }
}

impl Zero for RGBSpectrum {
    fn zero() -> RGBSpectrum {
        RGBSpectrum::new(0.0 as Float)
    }

    fn is_zero(&self) -> bool {
        self.is_black()
    }
}

impl Index<usize> for RGBSpectrum {
    type Output = Float;
    fn index(&self, index: usize) -> &Float {
        &self.c[index]
    }
}

impl IndexMut<usize> for RGBSpectrum {
    fn index_mut(&mut self, index: usize) -> &mut Float {
        &mut self.c[index]
    }
}

impl From<Float> for RGBSpectrum {
    fn from(f: Float) -> Self {
        RGBSpectrum::new(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_is_component_wise() {
        let a = RGBSpectrum::rgb(1.0, 2.0, 3.0);
        let b = RGBSpectrum::rgb(2.0, 2.0, 2.0);
        assert_eq!(a * b, RGBSpectrum::rgb(2.0, 4.0, 6.0));
        assert_eq!(a + b, RGBSpectrum::rgb(3.0, 4.0, 5.0));
        assert_eq!(a - b, RGBSpectrum::rgb(-1.0, 0.0, 1.0));
        assert_eq!(a * 0.5, RGBSpectrum::rgb(0.5, 1.0, 1.5));
        assert_eq!(b / 2.0, RGBSpectrum::new(1.0));
    }

    #[test]
    fn luminance_of_white_is_one() {
        assert!((RGBSpectrum::new(1.0).y() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn black_and_nans() {
        assert!(RGBSpectrum::default().is_black());
        assert!(!RGBSpectrum::rgb(0.0, 0.1, 0.0).is_black());
        assert!(RGBSpectrum::rgb(0.0, Float::NAN, 0.0).has_nans());
        // division by zero is not trapped
        assert!((RGBSpectrum::new(0.0) / 0.0).has_nans());
    }

    #[test]
    fn srgb_endpoints() {
        assert_eq!(RGBSpectrum::from_srgb(&[0, 0, 0]), RGBSpectrum::new(0.0));
        let white = RGBSpectrum::from_srgb(&[255, 255, 255]);
        assert!((white.c[0] - 1.0).abs() < 1e-5);
    }
}
