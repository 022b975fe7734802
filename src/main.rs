use anyhow::Result;
use clap::Parser;
use formica_lib::app::App;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the simulation in
    #[arg(short, long, value_enum, default_value = "headless")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Seed overriding the one in the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many steps even if the colony is still active
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    max_steps: Option<u64>,

    /// Print the final report as JSON instead of a status line
    #[arg(long)]
    json: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    /// Step as fast as possible
    Headless,
    /// Pace steps, births and deaths with the configured delays
    Realtime,
}

#[tokio::main]
async fn main() -> Result<()> {
    formica_core::init_logging();
    let args = Args::parse();

    let mut config = App::load_config(&args.config)?;
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }

    let mut app = App::new(config)?.with_max_steps(args.max_steps);
    app.shutdown.install_ctrl_c_handler();

    let report = match args.mode {
        Mode::Headless => app.run_headless(),
        Mode::Realtime => app.run_realtime().await,
    };

    if args.json {
        println!("{}", report.to_json_pretty()?);
    } else {
        println!("{report}");
    }

    Ok(())
}
