//! Low-discrepancy point sets. The lookup table integrator only needs
//! the Hammersley set, built on the van der Corput radical inverse in
//! base 2.

// lighting
use crate::core::geometry::Point2f;
use crate::core::pbrt::Float;

/// Largest representable floating-point number less than one.
pub const ONE_MINUS_EPSILON: Float = 0.999_999_94;

/// The bits of an integer quantity can be efficiently reversed with a
/// series of logical bit operations.
pub fn reverse_bits_32(n: u32) -> u32 {
    let mut n = (n << 16) | (n >> 16);
    n = ((n & 0x00ff_00ff) << 8) | ((n & 0xff00_ff00) >> 8);
    n = ((n & 0x0f0f_0f0f) << 4) | ((n & 0xf0f0_f0f0) >> 4);
    n = ((n & 0x3333_3333) << 2) | ((n & 0xcccc_cccc) >> 2);
    n = ((n & 0x5555_5555) << 1) | ((n & 0xaaaa_aaaa) >> 1);
    n
}

/// Radical inverse in base 2.
pub fn van_der_corput(i: u32) -> Float {
    // 1/2^32
    (reverse_bits_32(i) as Float * 2.328_306_4e-10 as Float).min(ONE_MINUS_EPSILON)
}

/// The *i*th of *n* points of the 2D Hammersley set.
pub fn hammersley_2d(i: u32, n: u32) -> Point2f {
    Point2f {
        x: i as Float / n as Float,
        y: van_der_corput(i),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_reversal() {
        assert_eq!(reverse_bits_32(1), 0x8000_0000);
        assert_eq!(reverse_bits_32(0x8000_0000), 1);
        assert_eq!(reverse_bits_32(0xf0), 0x0f00_0000);
    }

    #[test]
    fn hammersley_points_stay_in_unit_square() {
        assert_eq!(van_der_corput(1), 0.5);
        assert_eq!(van_der_corput(2), 0.25);
        assert_eq!(van_der_corput(3), 0.75);
        let n = 64;
        for i in 0..n {
            let p = hammersley_2d(i, n);
            assert!(p.x >= 0.0 && p.x < 1.0);
            assert!(p.y >= 0.0 && p.y < 1.0);
        }
    }
}
