//! # Scene
//!
//! Everything a shading point can be lit by: the analytic lights, the
//! light probes and the one DFG table the probes share.

// std
use std::sync::Arc;
// others
use log::debug;
// lighting
use crate::core::dfg::DfgTable;
use crate::core::light::Light;
use crate::lights::probe::LightProbe;

#[derive(Debug, Clone)]
pub struct Scene {
    pub lights: Vec<Light>,
    pub probes: Vec<LightProbe>,
    pub dfg: Arc<DfgTable>,
}

impl Scene {
    pub fn new(lights: Vec<Light>, probes: Vec<LightProbe>, dfg: Arc<DfgTable>) -> Self {
        debug!(
            "Scene with {} light(s) and {} probe(s)",
            lights.len(),
            probes.len()
        );
        Scene {
            lights,
            probes,
            dfg,
        }
    }
}
