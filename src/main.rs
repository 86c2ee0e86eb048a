use springsim::{ScenarioConfig, Scenario};
use springsim::{bench_step, bench_step_curve};
use springsim::simulation::diagnostics::energy;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use ftlog::{
    appender::{FileAppender, Period},
    LevelFilter, LoggerGuard,
};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Scenario file name under `scenarios/`
    #[arg(short, default_value = "hanging_lattice.yaml")]
    file_name: String,

    /// Override the number of steps configured in the scenario
    #[arg(short, long)]
    steps: Option<usize>,

    /// Run the step benchmark instead of a scenario
    #[arg(long)]
    bench: bool,

    /// Print the benchmark as CSV over many lattice sizes
    #[arg(long)]
    curve: bool,

    /// The name of the log-file to use
    #[arg(short, long, default_value = "springsim.log")]
    log_name: String,
}

/// Route logs to `logs/<file_name>`, with warnings from the appender itself
/// going to a sibling `-err` file
fn configure_logger(file_name: &str) -> Result<(LoggerGuard, PathBuf)> {
    let root_dir = PathBuf::from(".").canonicalize()?;
    let logs_dir = root_dir.join("logs");
    if !logs_dir.exists() {
        std::fs::create_dir(&logs_dir).with_context(|| format!("creating {logs_dir:?}"))?;
    }
    let log_path = logs_dir.join(file_name);

    let writer = FileAppender::builder().path(&log_path).rotate(Period::Day).build();

    let err_stem = log_path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow!("log file name {file_name:?} has no usable stem"))?;
    let err_path = log_path.with_file_name(format!("{err_stem}-err"));

    let guard = ftlog::Builder::new()
        .max_log_level(LevelFilter::Info)
        .root(writer)
        .filter("ftlog::appender", "ftlog-appender", LevelFilter::Warn)
        .appender("ftlog-appender", FileAppender::new(err_path))
        .try_init()
        .map_err(|e| anyhow!("failed to start logger: {e}"))?;

    Ok((guard, log_path))
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path).with_context(|| format!("opening {config_path:?}"))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader).with_context(|| format!("parsing {config_path:?}"))?;

    Ok(scenario_cfg)
}

fn run_scenario(mut scenario: Scenario) -> Result<()> {
    let steps = scenario.steps;
    let log_every = (steps / 10).max(1);

    let e0 = energy(&scenario.state, &scenario.parameters);
    ftlog::info!("t = {:.4}, energy = {:.6} ({:?})", scenario.state.t, e0.total(), e0);

    for step in 1..=steps {
        let report = scenario.step().with_context(|| format!("step {step} rejected"))?;
        if report.degenerate_springs > 0 {
            ftlog::warn!("step {step}: skipped {} degenerate springs", report.degenerate_springs);
        }
        if report.escaped > 0 {
            ftlog::warn!("step {step}: {} particles still outside the cube", report.escaped);
        }
        if step % log_every == 0 {
            let e = energy(&scenario.state, &scenario.parameters);
            ftlog::info!(
                "t = {:.4}, energy = {:.6}, boundary hits = {}",
                scenario.state.t,
                e.total(),
                report.boundary_hits
            );
        }
    }

    // Final state for whatever consumes it downstream
    println!("i,x,y,z,vx,vy,vz");
    for i in 0..scenario.state.particle_count() {
        let x = scenario.state.position(i);
        let v = scenario.state.velocity(i);
        println!("{i},{},{},{},{},{},{}", x.x, x.y, x.z, v.x, v.y, v.z);
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (_guard, log_path) = configure_logger(&args.log_name)?;
    ftlog::info!("Log file: {log_path:?}");

    if args.bench {
        if args.curve {
            bench_step_curve()?;
        } else {
            bench_step()?;
        }
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg).with_context(|| format!("building {}", args.file_name))?;
    if let Some(steps) = args.steps {
        scenario.steps = steps;
    }

    run_scenario(scenario)
}
