use bounded_crop::config::{load_config_or_default, Config, ConfigFormat, CropOverrides};
use bounded_crop::*;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bcrop")]
#[command(about = "Trim image borders without going below a minimum size")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML or JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Trim an image and write the result
    Crop {
        /// Image to trim
        #[arg(short, long)]
        input: PathBuf,

        /// Where to write the trimmed image
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        trim: TrimArgs,

        /// Write a JSON report of the decision
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Report what a trim would do without writing an image
    Check {
        /// Image to inspect
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        trim: TrimArgs,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the default configuration to a file
    Config {
        /// Destination file
        #[arg(short, long)]
        output: PathBuf,

        #[arg(short, long, value_enum, default_value = "toml")]
        format: ConfigFormat,
    },
}

/// Trim and floor overrides; unset flags fall back to the configuration
#[derive(Args)]
struct TrimArgs {
    #[arg(long)]
    top: Option<u32>,

    #[arg(long)]
    bottom: Option<u32>,

    #[arg(long)]
    left: Option<u32>,

    #[arg(long)]
    right: Option<u32>,

    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    min_width: Option<u32>,

    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    min_height: Option<u32>,

    /// Whether an output of exactly the minimum size is allowed
    #[arg(long, value_enum)]
    floor: Option<FloorPolicy>,
}

impl TrimArgs {
    fn overrides(&self) -> CropOverrides {
        CropOverrides {
            top: self.top,
            bottom: self.bottom,
            left: self.left,
            right: self.right,
            min_width: self.min_width,
            min_height: self.min_height,
            floor: self.floor,
        }
    }

    fn resolve(&self, config: &Config) -> anyhow::Result<(TrimSpec, BoundedCropper)> {
        let resolved = config.with_overrides(&self.overrides())?;
        let cropper = BoundedCropper::new()
            .with_minimum(resolved.minimum)
            .with_floor(resolved.floor);
        Ok((resolved.trim, cropper))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config_or_default(cli.config.as_deref());

    let logging_config = config.logging.clone().with_verbosity(cli.verbose);
    let _guard = logging::init_logging(&logging_config)?;

    logging::new_correlation_id();
    let span = bounded_crop::correlation_span!(tracing::Level::INFO, "bcrop");
    let _entered = span.enter();

    match cli.command {
        Commands::Crop { input, output, trim, report } => {
            handle_crop(&config, input, output, trim, report)?;
        }
        Commands::Check { input, trim, json } => {
            handle_check(&config, input, trim, json)?;
        }
        Commands::Config { output, format } => {
            Config::default().save_to_file(&output, format)?;
            println!("Default configuration written to {}", output.display());
        }
    }

    Ok(())
}

fn handle_crop(
    config: &Config,
    input: PathBuf,
    output: PathBuf,
    args: TrimArgs,
    report_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    let (trim, cropper) = args.resolve(config)?;
    let report = crop_file(&cropper, &input, &output, &trim)?;

    println!("{}", report.summary());

    if let Some(path) = report_path {
        save_report(&report, &path)?;
        println!("Report saved to {}", path.display());
    }

    Ok(())
}

fn handle_check(config: &Config, input: PathBuf, args: TrimArgs, json: bool) -> anyhow::Result<()> {
    let (trim, cropper) = args.resolve(config)?;
    let report = check_file(&cropper, &input, &trim)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.summary());
    }

    Ok(())
}
