use gravtree::{Scenario, ScenarioConfig, SnapshotWriter};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "two_body.yaml")]
    file_name: String,

    /// Directory for particles.csv and tree.csv
    #[arg(short, long, default_value = "out")]
    out_dir: PathBuf,

    /// Override the number of frames instead of running to t_end
    #[arg(long)]
    frames: Option<usize>,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build(scenario_cfg).context("building scenario")?;
    let mut writer = SnapshotWriter::create(&args.out_dir)
        .with_context(|| format!("creating output files in {}", args.out_dir.display()))?;

    let frames = args.frames.unwrap_or_else(|| scenario.parameters.frames());
    println!(
        "{} particles, {} frames, dt={}, G={}",
        scenario.system.particles.len(),
        frames,
        scenario.parameters.dt,
        scenario.parameters.g
    );

    let mut approximations: u64 = 0;
    let mut collisions: usize = 0;
    for frame in 0..frames {
        let outcome = scenario.step()?;

        writer.write_particles(frame, &scenario.system)?;
        if let Some(tree) = &outcome.tree {
            writer.write_tree(frame, tree)?;
        }

        for c in &outcome.report.collisions {
            eprintln!(
                "collision between {} and {} (separation {:.3e}) at t={:.4}",
                c.a, c.b, c.separation, scenario.system.t
            );
        }
        collisions += outcome.report.collisions.len();
        approximations += outcome.report.approximations;
    }

    println!(
        "done: t={:.4}, {} center-of-mass approximations, {} collisions detected",
        scenario.system.t, approximations, collisions
    );

    Ok(())
}
