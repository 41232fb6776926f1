//! # rs_lighting
//!
//! Shading point light evaluation for a real-time renderer. Given the
//! shading data of a surface sample and one light, compute where the
//! light comes from and how much diffuse and specular radiance it
//! delivers.
//!
//! Supported lights:
//!
//! 1. [directional lights][distant]
//! 2. [point and spot lights][point]
//! 3. [area lights][area]
//! 4. [light probes][probe] with split-sum image based lighting
//!
//! The analytic lights are dispatched through
//! [evaluate_light](core::light::evaluate_light) and
//! [evaluate_area_light](core::light::evaluate_area_light), probes
//! through [evaluate_light_probe](lights::probe::evaluate_light_probe).
//! The [integrators] module sums all of them for many points in
//! parallel.
//!
//! [distant]: lights/distant/struct.DirectionalLight.html
//! [point]: lights/point/struct.PointLight.html
//! [area]: lights/area/struct.AreaLight.html
//! [probe]: lights/probe/struct.LightProbe.html

#[macro_use]
extern crate impl_ops;

pub mod core;
pub mod integrators;
pub mod lights;
