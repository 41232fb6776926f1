//! Math, image and parameter foundations plus the light sample record
//! and the dispatcher every evaluator feeds into.

pub mod api;
pub mod dfg;
pub mod error;
pub mod geometry;
pub mod imageio;
pub mod interaction;
pub mod light;
pub mod lowdiscrepancy;
pub mod memory;
pub mod microfacet;
pub mod mipmap;
pub mod paramset;
pub mod pbrt;
pub mod reflection;
pub mod sampling;
pub mod scene;
pub mod spectrum;
pub mod transform;
