// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};
use weather_analyzer::utils::logging::{Status, heading};
use weather_analyzer::utils::{format_celsius, format_thousands};
use weather_analyzer::{AnalysisOutcome, Config, FileScanner, JsonExporter, PipelineOrchestrator};

#[derive(Parser)]
#[command(name = "weather_analyzer")]
#[command(version)]
#[command(about = "Temperature analysis for yearly weather station CSV files", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load every yearly file, compute statistics and write the text reports
    Analyze {
        #[arg(short, long, value_name = "DIR", env = "WEATHER_DATA_DIR")]
        data_dir: Option<PathBuf>,

        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Also export the results as JSON into this directory
        #[arg(long, value_name = "DIR")]
        json: Option<PathBuf>,

        #[arg(long)]
        pretty: bool,
    },

    /// List the CSV files that would be analysed
    Scan {
        #[arg(short, long, value_name = "DIR", env = "WEATHER_DATA_DIR")]
        data_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    colored::control::set_override(cli.color);
    weather_analyzer::utils::logging::init_logger(cli.color, cli.verbose);

    let config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::default_config()
    };

    match cli.command {
        Commands::Analyze {
            data_dir,
            output_dir,
            json,
            pretty,
        } => {
            let mut config = config;
            if let Some(dir) = data_dir {
                config.data.data_folder = dir;
            }
            if let Some(dir) = output_dir {
                config.output.output_dir = dir;
            }
            cmd_analyze(config, json, pretty, cli.color)?;
        }
        Commands::Scan { data_dir } => {
            let mut config = config;
            if let Some(dir) = data_dir {
                config.data.data_folder = dir;
            }
            cmd_scan(&config)?;
        }
    }

    Ok(())
}

fn cmd_analyze(config: Config, json: Option<PathBuf>, pretty: bool, color: bool) -> Result<()> {
    println!("{}", heading("Australian Weather Station Temperature Analysis"));

    let orchestrator = PipelineOrchestrator::new(config)?.with_progress(true, color);
    let outcome = match orchestrator.run() {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{}", Status::Failed.line(&format!("Error during analysis: {}", e)));
            eprintln!("Please check that:");
            eprintln!(
                "1. The '{}' folder exists",
                orchestrator.config().data.data_folder.display()
            );
            eprintln!("2. CSV files are present in the folder");
            eprintln!("3. CSV files contain columns: STATION_NAME and monthly temperature columns");
            return Err(anyhow::Error::new(e).context("Analysis failed"));
        }
    };

    if let Some(dir) = json {
        let exporter = JsonExporter::new(&dir, pretty)?;
        let manifest = exporter.export(&outcome.report, &outcome.stats, &outcome.written)?;
        println!(
            "{}",
            Status::Note.line(&format!(
                "JSON export written to {} at {}",
                dir.display(),
                manifest.exported_at
            ))
        );
    }

    print_preview(&outcome);
    Ok(())
}

fn print_preview(outcome: &AnalysisOutcome) {
    let report = &outcome.report;

    println!();
    println!("{}", Status::Done.line("ANALYSIS COMPLETE!"));
    println!(
        "Analysed {} records from {} stations",
        format_thousands(report.overview.total_records),
        report.overview.station_count()
    );

    println!("\nOutput files created:");
    for path in &outcome.written {
        println!("• {}", path.display());
    }

    println!("\n{}", heading("KEY RESULTS PREVIEW"));
    println!("Seasonal Averages:");
    for average in &report.seasonal {
        println!("  {}: {}", average.season, format_celsius(average.mean));
    }

    println!("\nLargest Temperature Range:");
    for range in &report.largest_range {
        println!(
            "  Station {}: {}",
            range.station,
            format_celsius(Some(range.range))
        );
    }

    match &report.stability {
        Some(stability) => {
            println!("\nMost Stable Station:");
            for station in &stability.most_stable {
                println!(
                    "  Station {}: StdDev {}",
                    station.station,
                    format_celsius(Some(station.std_dev))
                );
            }

            println!("\nMost Variable Station:");
            for station in &stability.most_variable {
                println!(
                    "  Station {}: StdDev {}",
                    station.station,
                    format_celsius(Some(station.std_dev))
                );
            }
        }
        None => println!(
            "\n{}",
            Status::Caution.line("No stations with sufficient data for stability analysis")
        ),
    }
}

fn cmd_scan(config: &Config) -> Result<()> {
    let scanner = FileScanner::new(config.data.clone());
    let files = scanner
        .scan_directory(&config.data.data_folder)
        .context("Failed to scan data folder")?;

    println!(
        "{}",
        heading(&format!(
            "{} CSV files in {}",
            files.len(),
            config.data.data_folder.display()
        ))
    );

    let mut usable = 0;
    for file in &files {
        match file.year() {
            Some(year) => {
                usable += 1;
                println!("  {}  year {}  ({} bytes)", file.file_name, year, file.size);
            }
            None => println!(
                "  {}",
                Status::Caution.line(&format!(
                    "{}: could not extract year, will be skipped",
                    file.file_name
                ))
            ),
        }
    }

    println!("\n{}", Status::Note.line(&format!("{} of {} files usable", usable, files.len())));
    Ok(())
}
