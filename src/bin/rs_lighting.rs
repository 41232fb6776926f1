//! Light a unit sphere, seen orthographically along -z, with a single
//! light and write the result as an 8-bit image.

// std
use std::path::PathBuf;
use std::sync::Arc;
// others
use clap::Parser;
use log::info;
// lighting
use rs_lighting::core::api::{make_dfg_table, make_light, make_light_probe};
use rs_lighting::core::dfg::DfgTable;
use rs_lighting::core::error::LightingError;
use rs_lighting::core::geometry::{Normal3f, Point2i, Point3f, Vector3f};
use rs_lighting::core::imageio::write_image;
use rs_lighting::core::interaction::ShadingPoint;
use rs_lighting::core::paramset::ParamSet;
use rs_lighting::core::pbrt::{Float, Spectrum};
use rs_lighting::core::scene::Scene;
use rs_lighting::core::transform::Transform;
use rs_lighting::integrators::render;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn parse_triple(s: &str) -> Result<[Float; 3], String> {
    let values: Vec<Float> = s
        .split(',')
        .map(|v| v.trim().parse::<Float>().map_err(|e| format!("{:?}: {}", v, e)))
        .collect::<Result<Vec<Float>, String>>()?;
    if values.len() != 3 {
        return Err(format!("expected x,y,z but got {:?}", s));
    }
    Ok([values[0], values[1], values[2]])
}

/// Render a lit sphere for a single light (distant, point, spot, area
/// or probe).
#[derive(Parser)]
#[command(name = "rs_lighting", version = VERSION)]
struct Cli {
    /// light type: distant, point, spot, area or probe
    #[arg(short = 'l', long = "light", default_value = "distant")]
    light: String,
    /// light position (x,y,z)
    #[arg(long, default_value = "0,5,5", value_parser = parse_triple, allow_hyphen_values = true)]
    from: [Float; 3],
    /// point the light is aimed at (x,y,z)
    #[arg(long, default_value = "0,0,0", value_parser = parse_triple, allow_hyphen_values = true)]
    to: [Float; 3],
    /// intensity (I) or radiance (L) of the light, probe scale
    #[arg(short = 'i', long, default_value_t = 1.0)]
    intensity: Float,
    /// spot light cone half-angle in degrees
    #[arg(long, default_value_t = 30.0)]
    cone_angle: Float,
    /// spot light penumbra width in degrees
    #[arg(long, default_value_t = 5.0)]
    cone_delta: Float,
    /// area light surface area
    #[arg(long, default_value_t = 1.0)]
    area: Float,
    /// lat-long irradiance map for probes
    #[arg(long)]
    diffuse_map: Option<PathBuf>,
    /// lat-long prefiltered specular map for probes
    #[arg(long)]
    specular_map: Option<PathBuf>,
    /// probe parallax radius, negative for a global probe
    #[arg(long, default_value_t = -1.0, allow_hyphen_values = true)]
    radius: Float,
    /// linear roughness of the sphere
    #[arg(long, default_value_t = 0.5)]
    roughness: Float,
    /// specular reflectance at normal incidence
    #[arg(long, default_value_t = 0.04)]
    specular: Float,
    /// diffuse albedo
    #[arg(long, default_value_t = 0.8)]
    albedo: Float,
    /// image width and height in pixels
    #[arg(short = 'r', long, default_value_t = 256)]
    resolution: u32,
    /// use specified number of threads for rendering
    #[arg(short = 't', long = "nthreads", default_value_t = 0)]
    nthreads: u8,
    /// size of the integrated DFG table
    #[arg(long, default_value_t = 64)]
    dfg_size: i32,
    /// samples per DFG texel
    #[arg(long, default_value_t = 512)]
    dfg_samples: i32,
    /// read the DFG table from this image instead of integrating it
    #[arg(long)]
    dfg: Option<PathBuf>,
    /// write the integrated DFG table to this file (32-bit float OpenEXR)
    #[arg(long)]
    write_dfg: Option<PathBuf>,
    /// output image
    #[arg(short = 'o', long, default_value = "lighting.png")]
    output: PathBuf,
}

fn build_scene(args: &Cli) -> Result<Scene, LightingError> {
    let mut dfg_params = ParamSet::default();
    if let Some(ref path) = args.dfg {
        dfg_params.add_string("filename", &path.to_string_lossy());
    } else {
        dfg_params.add_int("size", args.dfg_size);
        dfg_params.add_int("samples", args.dfg_samples);
    }
    let dfg: Arc<DfgTable> = make_dfg_table(&dfg_params)?;
    if let Some(ref path) = args.write_dfg {
        dfg.write(path)?;
        info!("Wrote DFG table to {:?}", path);
    }
    let mut params = ParamSet::default();
    params.add_point3f("from", Point3f::new(args.from[0], args.from[1], args.from[2]));
    let light_to_world: Transform = Transform::default();
    if args.light == "probe" {
        if let Some(ref path) = args.diffuse_map {
            params.add_string("diffusemap", &path.to_string_lossy());
        }
        if let Some(ref path) = args.specular_map {
            params.add_string("specularmap", &path.to_string_lossy());
        }
        params.add_float("radius", args.radius);
        params.add_rgb_spectrum("scale", Spectrum::new(args.intensity));
        let probe = make_light_probe(&params, &light_to_world)?;
        return Ok(Scene::new(Vec::new(), vec![probe], dfg));
    }
    let to: Point3f = Point3f::new(args.to[0], args.to[1], args.to[2]);
    match args.light.as_str() {
        "distant" | "area" => {
            params.add_point3f("to", to);
            params.add_rgb_spectrum("L", Spectrum::new(args.intensity));
            if args.light == "area" {
                params.add_float("area", args.area);
            }
        }
        "spot" => {
            params.add_point3f("to", to);
            params.add_rgb_spectrum("I", Spectrum::new(args.intensity));
            params.add_float("coneangle", args.cone_angle);
            params.add_float("conedelta", args.cone_delta);
        }
        _ => {
            params.add_rgb_spectrum("I", Spectrum::new(args.intensity));
        }
    }
    let light = make_light(&args.light, &params, &light_to_world)?;
    Ok(Scene::new(vec![light], Vec::new(), dfg))
}

fn run(args: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let num_threads: usize = if args.nthreads == 0_u8 {
        num_cpus::get()
    } else {
        args.nthreads as usize
    };
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;
    let scene: Scene = build_scene(args)?;
    let res: u32 = args.resolution.max(1);
    let albedo: Spectrum = Spectrum::new(args.albedo);
    let specular: Spectrum = Spectrum::new(args.specular);
    let view: Vector3f = Vector3f::new(0.0, 0.0, 1.0);
    println!("Rendering with {:?} thread(s) ...", num_threads);
    let mut pixels: Vec<Spectrum> = Vec::with_capacity((res * res) as usize);
    for y in pbr::PbIter::new(0..res) {
        let v: Float = 1.0 - 2.0 * (y as Float + 0.5) / res as Float;
        let mut points: Vec<ShadingPoint> = Vec::with_capacity(res as usize);
        let mut inside: Vec<bool> = Vec::with_capacity(res as usize);
        for x in 0..res {
            let u: Float = 2.0 * (x as Float + 0.5) / res as Float - 1.0;
            let r2: Float = u * u + v * v;
            inside.push(r2 <= 1.0);
            let z: Float = (1.0 - r2).max(0.0).sqrt();
            points.push(ShadingPoint::new(
                &Point3f::new(u, v, z),
                &Normal3f::new(u, v, z).normalize(),
                &view,
                args.roughness,
                &specular,
            ));
        }
        let row: Vec<Spectrum> = render(&scene, &points, &albedo);
        for (l, hit) in row.into_iter().zip(inside.into_iter()) {
            pixels.push(if hit { l } else { Spectrum::default() });
        }
    }
    let resolution = Point2i {
        x: res as i32,
        y: res as i32,
    };
    write_image(&args.output, &resolution, &pixels)?;
    println!("Wrote {:?}", args.output);
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Cli::parse();
    println!(
        "rs_lighting version {} [Detected {} cores]",
        VERSION,
        num_cpus::get()
    );
    if let Err(e) = run(&args) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}
