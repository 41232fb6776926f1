// lighting
use crate::core::geometry::{Point2f, Vector2f, Vector3f};
use crate::core::pbrt::Float;
use crate::core::pbrt::{PI_OVER_2, PI_OVER_4};

/// Cosine-weighted hemisphere sampling using Malley's method.
pub fn cosine_sample_hemisphere(u: &Point2f) -> Vector3f {
    let d: Point2f = concentric_sample_disk(u);
    let z: Float = (0.0 as Float)
        .max(1.0 as Float - d.x * d.x - d.y * d.y)
        .sqrt();
    Vector3f { x: d.x, y: d.y, z }
}

/// Uniformly distribute samples over a unit disk.
pub fn concentric_sample_disk(u: &Point2f) -> Point2f {
    // map uniform random numbers to $[-1,1]^2$
    let u_offset: Point2f = *u * 2.0 as Float - Vector2f { x: 1.0, y: 1.0 };
    // handle degeneracy at the origin
    if u_offset.x == 0.0 as Float && u_offset.y == 0.0 as Float {
        return Point2f::default();
    }
    // apply concentric mapping to point
    let theta: Float;
    let r: Float;
    if u_offset.x.abs() > u_offset.y.abs() {
        r = u_offset.x;
        theta = PI_OVER_4 * (u_offset.y / u_offset.x);
    } else {
        r = u_offset.y;
        theta = PI_OVER_2 - PI_OVER_4 * (u_offset.x / u_offset.y);
    }
    Point2f {
        x: theta.cos(),
        y: theta.sin(),
    } * r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disk_samples_stay_inside() {
        for i in 0..16 {
            for j in 0..16 {
                let u = Point2f {
                    x: (i as Float + 0.5) / 16.0,
                    y: (j as Float + 0.5) / 16.0,
                };
                let d = concentric_sample_disk(&u);
                assert!(d.x * d.x + d.y * d.y <= 1.0 + 1e-5);
            }
        }
        let center = concentric_sample_disk(&Point2f { x: 0.5, y: 0.5 });
        assert_eq!(center, Point2f::default());
    }

    #[test]
    fn hemisphere_samples_are_unit_and_upper() {
        let w = cosine_sample_hemisphere(&Point2f { x: 0.3, y: 0.8 });
        assert!((w.length() - 1.0).abs() < 1e-5);
        assert!(w.z >= 0.0);
        let pole = cosine_sample_hemisphere(&Point2f { x: 0.5, y: 0.5 });
        assert_eq!(pole, Vector3f::new(0.0, 0.0, 1.0));
    }
}
