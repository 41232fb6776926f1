//! In order for objects in a scene to be visible, there must be a
//! source of illumination so that some light is reflected from them
//! to the camera sensor.
//!
//! - AreaLight
//! - DirectionalLight
//! - LightProbe
//! - PointLight (also used for spot lights)
//!
//! ## Directional Lights
//!
//! A directional light, also known as distant light, describes an
//! emitter that deposits illumination from the same direction at
//! every point in space.
//!
//! ```rust
//! use rs_lighting::core::geometry::{Normal3f, Point3f, Vector3f};
//! use rs_lighting::core::interaction::ShadingPoint;
//! use rs_lighting::core::light::{evaluate_light, Light};
//! use rs_lighting::core::pbrt::Spectrum;
//! use rs_lighting::core::transform::Transform;
//! use rs_lighting::lights::distant::DirectionalLight;
//!
//! let sun = Light::Directional(DirectionalLight::new(
//!     &Transform::default(),
//!     &Spectrum::new(1.0),
//!     &Vector3f::new(0.0, -1.0, 0.0),
//! ));
//! let sd = ShadingPoint::new(
//!     &Point3f::default(),
//!     &Normal3f::new(0.0, 1.0, 0.0),
//!     &Vector3f::new(0.0, 1.0, 0.0),
//!     0.5,
//!     &Spectrum::new(0.04),
//! );
//! let ls = evaluate_light(&sun, &sd);
//! assert_eq!(ls.n_dot_l, 1.0);
//! ```
//!
//! ## Point Lights and Spotlights
//!
//! Point lights emit the same amount of light in all directions and
//! fall off with the inverse square of the distance. Restricting them
//! to a cone turns them into spotlights; the penumbra softens the
//! cone's edge.
//!
//! ```rust
//! use rs_lighting::core::geometry::Vector3f;
//! use rs_lighting::core::pbrt::{radians, Spectrum};
//! use rs_lighting::core::transform::Transform;
//! use rs_lighting::lights::point::PointLight;
//!
//! let light_to_world = Transform::translate(&Vector3f::new(0.0, 10.0, 0.0));
//! let spot = PointLight::new_spot(
//!     &light_to_world,
//!     &Spectrum::new(100.0),
//!     &Vector3f::new(0.0, -1.0, 0.0),
//!     radians(30.0),
//!     radians(5.0),
//! );
//! println!("spot = {:?}", spot);
//! ```
//!
//! ## Area Lights
//!
//! A one-sided emitter reduced to a single point with a facing
//! direction and a surface area.
//!
//! ## Light Probes
//!
//! Image based lighting from a pair of lat-long maps: a diffuse
//! irradiance map and a specular map whose mip levels hold
//! increasingly rough reflections. A negative radius makes the probe
//! global, otherwise lookups are corrected for parallax against a
//! sphere of that radius around the probe.

pub mod area;
pub mod distant;
pub mod point;
pub mod probe;
