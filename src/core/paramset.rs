//! Bundle up parameters and their values in a generic way.

// std
use std::cell::Cell;
// others
use log::warn;
// lighting
use crate::core::geometry::Point3f;
use crate::core::pbrt::{Float, Spectrum};

pub struct ParamSetItem<T> {
    pub name: String,
    pub values: Vec<T>,
    pub n_values: usize,
    pub looked_up: Cell<bool>,
}

impl<T> ParamSetItem<T> {
    fn new(name: String, values: Vec<T>) -> Self {
        let n_values: usize = values.len();
        ParamSetItem {
            name,
            values,
            n_values,
            looked_up: Cell::new(false),
        }
    }
}

#[derive(Default)]
pub struct ParamSet {
    pub ints: Vec<ParamSetItem<i32>>,
    pub floats: Vec<ParamSetItem<Float>>,
    pub point3fs: Vec<ParamSetItem<Point3f>>,
    pub spectra: Vec<ParamSetItem<Spectrum>>,
    pub strings: Vec<ParamSetItem<String>>,
}

impl ParamSet {
    pub fn add_float(&mut self, name: &str, value: Float) {
        self.floats.push(ParamSetItem::new(name.to_string(), vec![value]));
    }
    pub fn add_int(&mut self, name: &str, value: i32) {
        self.ints.push(ParamSetItem::new(name.to_string(), vec![value]));
    }
    pub fn add_point3f(&mut self, name: &str, value: Point3f) {
        self.point3fs.push(ParamSetItem::new(name.to_string(), vec![value]));
    }
    pub fn add_rgb_spectrum(&mut self, name: &str, value: Spectrum) {
        self.spectra.push(ParamSetItem::new(name.to_string(), vec![value]));
    }
    pub fn add_string(&mut self, name: &str, value: &str) {
        self.strings
            .push(ParamSetItem::new(name.to_string(), vec![value.to_string()]));
    }
    pub fn find_one_float(&self, name: &str, d: Float) -> Float {
        lookup_one(&self.floats, name, d)
    }
    pub fn find_one_int(&self, name: &str, d: i32) -> i32 {
        lookup_one(&self.ints, name, d)
    }
    pub fn find_one_point3f(&self, name: &str, d: Point3f) -> Point3f {
        lookup_one(&self.point3fs, name, d)
    }
    pub fn find_one_spectrum(&self, name: &str, d: Spectrum) -> Spectrum {
        lookup_one(&self.spectra, name, d)
    }
    pub fn find_one_string(&self, name: &str, d: String) -> String {
        lookup_one(&self.strings, name, d)
    }
    pub fn find_one_filename(&self, name: &str, d: String) -> String {
        let filename: String = self.find_one_string(name, String::new());
        if filename.is_empty() {
            return d;
        }
        filename
    }
    /// Names of parameters nobody asked for, most likely typos.
    pub fn unused(&self) -> Vec<String> {
        fn collect<T>(items: &[ParamSetItem<T>], names: &mut Vec<String>) {
            for item in items {
                if !item.looked_up.get() {
                    names.push(item.name.clone());
                }
            }
        }
        let mut names: Vec<String> = Vec::new();
        collect(&self.ints, &mut names);
        collect(&self.floats, &mut names);
        collect(&self.point3fs, &mut names);
        collect(&self.spectra, &mut names);
        collect(&self.strings, &mut names);
        names
    }
    pub fn report_unused(&self) {
        for name in self.unused() {
            warn!("Parameter \"{}\" not used", name);
        }
    }
}

pub fn lookup_one<T>(vec: &[ParamSetItem<T>], name: &str, d: T) -> T
where
    T: Clone,
{
    for v in vec {
        if v.name == name && v.n_values == 1_usize {
            v.looked_up.set(true);
            return v.values[0].clone();
        }
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_lookups() {
        let mut ps = ParamSet::default();
        ps.add_float("radius", 2.5);
        ps.add_rgb_spectrum("I", Spectrum::new(3.0));
        ps.add_string("diffusemap", "irradiance.hdr");
        assert_eq!(ps.find_one_float("radius", -1.0), 2.5);
        assert_eq!(ps.find_one_float("scale", 1.0), 1.0);
        assert_eq!(ps.find_one_spectrum("I", Spectrum::new(1.0)), Spectrum::new(3.0));
        assert_eq!(
            ps.find_one_filename("diffusemap", String::new()),
            "irradiance.hdr"
        );
        assert_eq!(ps.find_one_filename("specularmap", String::from("x")), "x");
    }

    #[test]
    fn unused_parameters_are_reported() {
        let mut ps = ParamSet::default();
        ps.add_float("coneangle", 30.0);
        ps.add_float("conedelat", 5.0);
        let _ = ps.find_one_float("coneangle", 30.0);
        let _ = ps.find_one_float("conedelta", 5.0);
        assert_eq!(ps.unused(), vec![String::from("conedelat")]);
    }
}
