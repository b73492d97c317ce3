use clap::{Parser, Subcommand};
use simple_invite::{config, gallery::Gallery, generate, output, replay};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "simple-invite")]
#[command(about = "Gallery section generator for single-page invitations")]
#[command(long_about = "\
Gallery section generator for single-page invitations

The content directory holds a config.toml listing the gallery photos, the
carousel gesture thresholds, and the palette:

  content/
  ├── config.toml        # [gallery], [gesture], [theme]
  └── images/
      ├── 01.jpg
      └── 02.jpg

Recorded pointer traces (JSON arrays of touch_*/mouse_* events) can be
replayed through the carousel with 'simple-invite replay trace.json'.

Run 'simple-invite gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the gallery page into the output directory
    Build,
    /// Validate config.toml without building
    Check,
    /// Replay a recorded pointer trace through the carousel
    Replay {
        /// Trace file (JSON array of raw pointer events)
        trace: PathBuf,
        /// Slide to start on (0-based)
        #[arg(long, default_value_t = 0)]
        start: usize,
        /// Print the final render state as JSON instead of the step log
        #[arg(long)]
        json: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Loading {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            output::print_check_output(&site_config);
            let index = generate::generate(&site_config, &cli.output)?;
            println!("==> Build complete: {}", index.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            output::print_check_output(&site_config);
            println!("==> Config is valid");
        }
        Command::Replay { trace, start, json } => {
            let site_config = config::load_config(&cli.source)?;
            let mut gallery = Gallery::from_config(&site_config);
            if start > 0 {
                gallery.jump_to(start)?;
            }
            let events = replay::load_trace(&trace)?;
            tracing::info!(events = events.len(), start, "replaying trace");
            let report = replay::replay(&mut gallery, &events);
            if json {
                println!("{}", serde_json::to_string_pretty(&report.final_state)?);
            } else {
                output::print_replay_output(&report);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
