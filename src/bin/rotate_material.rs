use optoacoustic::prelude::*;
use std::error::Error;
use std::fs::{self, File};
use std::path::Path;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "rotate_material",
    about = "Rotates the crystal axes of a material and prints the stiffness, photoelastic and loss tensors"
)]
struct Options {
    /// Directory with the material data files (the built-in catalog is used otherwise)
    #[structopt(long)]
    data_dir: Option<String>,

    /// Prints c11, c12 and c66 for this number of angles from zero up to THETA
    #[structopt(long)]
    sweep: Option<usize>,

    /// Writes the rotated material to this JSON file
    #[structopt(long)]
    output: Option<String>,

    /// Lists the available materials and exits
    #[structopt(long)]
    list: bool,

    /// Name of the material
    #[structopt(default_value = "Si_2016_Smith")]
    name: String,

    /// Rotation angle in degrees
    #[structopt(default_value = "45")]
    theta: f64,

    /// Rotation axis: x-axis, y-axis or z-axis
    #[structopt(default_value = "z-axis")]
    axis: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // parse options
    let options = Options::from_args();

    // load materials
    let registry = match &options.data_dir {
        Some(dir) => MaterialRegistry::read_dir(dir)?,
        None => MaterialRegistry::builtin()?,
    };
    if options.list {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }
    let material = registry.get(&options.name)?;

    // rotate
    let axis: Axis = options.axis.parse()?;
    let theta = options.theta.to_radians();
    let rotated = material.rotate(theta, axis)?;

    // message
    let thin_line = format!("{:─^1$}", "", 80);
    println!("{}", thin_line);
    println!("{}", material);
    println!("{}", thin_line);
    println!("{}", rotated);
    println!("{}", thin_line);

    // sweep
    if let Some(n) = options.sweep {
        if n < 2 {
            return Err("sweep requires at least 2 angles".into());
        }
        let thetas: Vec<_> = (0..n).map(|i| theta * (i as f64) / ((n - 1) as f64)).collect();
        let results = material.rotation_sweep(&thetas, axis)?;
        println!("{:>12} {:>16} {:>16} {:>16}", "θ [deg]", "c11' [Pa]", "c12' [Pa]", "c66' [Pa]");
        for (t, res) in thetas.iter().zip(&results) {
            let c = res.stiffness();
            println!(
                "{:>12.4} {:>16.6e} {:>16.6e} {:>16.6e}",
                t.to_degrees(),
                c.get(0, 0),
                c.get(0, 1),
                c.get(5, 5)
            );
        }
    }

    // output
    if let Some(out) = &options.output {
        let path = Path::new(out);
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &rotated).map_err(|_| "cannot write file")?;
        println!("rotated material written to {}", out);
    }
    Ok(())
}
