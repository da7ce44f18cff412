use clap::{Parser, Subcommand};
use imgshrink::{config, output, process};
use std::path::{Path, PathBuf};
use tracing::Level;

/// Flags shared by commands that write JSON instead of the text listing.
#[derive(clap::Args, Clone)]
struct ReportArgs {
    /// Print a JSON report on stdout instead of the text listing
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
#[command(name = "imgshrink")]
#[command(about = "Batch-resize JPEG and PNG images into a sibling data folder")]
#[command(long_about = "\
Batch-resize JPEG and PNG images into a sibling data folder

Every .jpg, .jpeg and .png file under the source directory is resized to a
fixed width (height follows the aspect ratio) and written as JPEG to a
`data` directory next to it, keeping its file name:

  photos/
  ├── config.toml          # Optional settings (see gen-config)
  ├── beach.jpg            # → photos/data/beach.jpg
  └── trip/
      └── map.png          # → photos/trip/data/map.png

Native dimensions are read straight from the JPEG SOF marker or the PNG
IHDR chunk. A file that fails is reported and the batch continues.")]
#[command(version)]
struct Cli {
    /// Source directory to scan recursively
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resize every image under the source directory
    Resize {
        /// Output width in pixels (0 = keep native width) [config: resize.width]
        #[arg(long)]
        width: Option<u32>,

        /// JPEG quality 1-100 [config: resize.quality]
        #[arg(long)]
        quality: Option<u32>,

        /// Name of the output directory next to each image [config: output.dir_name]
        #[arg(long)]
        output_dir_name: Option<String>,

        #[command(flatten)]
        report: ReportArgs,
    },
    /// Print image dimensions as read from the file headers
    Identify(ReportArgs),
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Resize {
            width,
            quality,
            output_dir_name,
            report,
        } => {
            let mut settings = config::load_config(&cli.source)?;
            if let Some(width) = width {
                settings.resize.width = width;
            }
            if let Some(quality) = quality {
                settings.resize.quality = quality;
            }
            if let Some(name) = output_dir_name {
                settings.output.dir_name = name;
            }
            settings.validate()?;

            let options = process::ProcessOptions {
                resize: settings.resize_config(),
                output_dir_name: settings.output.dir_name.clone(),
            };

            let result = if report.json {
                process::process(&cli.source, &options, None)?
            } else {
                run_with_printer(&cli.source, &options)?
            };

            if report.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!();
                println!("{}", output::format_report_summary(&result));
            }

            if result.has_failures() {
                return Err(format!("{} file(s) failed", result.failed()).into());
            }
        }
        Command::Identify(report) => {
            let dir_name = config::load_config(&cli.source)?.output.dir_name;
            let files = process::identify(&cli.source, &dir_name)?;
            if report.json {
                println!("{}", serde_json::to_string_pretty(&files)?);
            } else {
                output::print_identify_output(&files, &cli.source);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Run the batch with a printer thread draining progress events.
fn run_with_printer(
    source: &Path,
    options: &process::ProcessOptions,
) -> Result<process::ProcessReport, Box<dyn std::error::Error>> {
    let (tx, rx) = std::sync::mpsc::channel();
    let root = source.to_path_buf();
    let printer = std::thread::spawn(move || {
        for event in rx {
            output::print_process_event(&event, &root);
        }
    });
    let result = process::process(source, options, Some(tx));
    printer
        .join()
        .map_err(|_| "progress printer thread panicked")?;
    Ok(result?)
}

/// Diagnostics go to stderr so stdout stays clean for listings and JSON.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
