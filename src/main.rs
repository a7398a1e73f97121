use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use eda_analyzer::{
    analysis::{head, sample_rows, Analyzer},
    io::{self, CsvFormat, DatasetReader},
    models::Dataset,
    visualization::{
        format_correlation_heatmap, format_histograms, format_missing_matrix, print_dtypes,
        print_missing_table, print_overview, print_profiles, print_quality_flags, print_rows,
        print_top_categories, FlagStyle, HISTOGRAM_BINS,
    },
    EdaConfig,
};

#[derive(Parser)]
#[command(
    name = "eda-cli",
    about = "EDA CLI - exploratory data analysis for delimited files",
    version,
    author
)]
struct Cli {
    /// TOML file with thresholds and report settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Field delimiter of the input file (overrides the config file)
    #[arg(short, long, global = true)]
    delimiter: Option<char>,

    /// Read date and timestamp columns as datetimes instead of text
    #[arg(long, global = true)]
    parse_dates: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display dataset overview and quality flags
    Overview {
        /// Path to the CSV file
        #[arg(value_parser = existing_file)]
        file: PathBuf,
    },

    /// Generate a full report with tables, charts and CSV/JSON exports
    Report {
        /// Path to the CSV file
        #[arg(value_parser = existing_file)]
        file: PathBuf,

        /// Output directory for report files
        #[arg(short, long, default_value = "./eda_report")]
        output_dir: PathBuf,

        /// Maximum number of numeric columns to draw histograms for
        #[arg(long)]
        max_hist_columns: Option<usize>,

        /// Number of top category values to show
        #[arg(long)]
        top_k_categories: Option<usize>,

        /// Report title
        #[arg(long, default_value = "EDA Report")]
        title: String,

        /// Minimum share of missing values to highlight a column
        #[arg(long)]
        min_missing_share: Option<f64>,
    },

    /// Display the first N rows
    Head {
        /// Path to the CSV file
        #[arg(value_parser = existing_file)]
        file: PathBuf,

        /// Number of rows to display
        #[arg(short, long, default_value = "5")]
        n: usize,
    },

    /// Display N random rows
    Sample {
        /// Path to the CSV file
        #[arg(value_parser = existing_file)]
        file: PathBuf,

        /// Number of rows to sample
        #[arg(short, long, default_value = "5")]
        n: usize,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Display descriptive statistics for every column
    Profile {
        /// Path to the CSV file
        #[arg(value_parser = existing_file)]
        file: PathBuf,
    },
}

fn existing_file(s: &str) -> std::result::Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.is_file() {
        Ok(path)
    } else {
        Err(format!("file '{s}' does not exist"))
    }
}

fn load_config(cli: &Cli) -> Result<EdaConfig> {
    let mut config = match &cli.config {
        Some(path) => EdaConfig::from_toml_file(path)?,
        None => EdaConfig::default(),
    };
    if let Some(d) = cli.delimiter {
        if !d.is_ascii() {
            anyhow::bail!("Delimiter must be a single ASCII character, got '{d}'");
        }
        config.delimiter = d;
    }
    if cli.parse_dates {
        config.parse_dates = true;
    }
    Ok(config)
}

fn load_dataset(path: &Path, config: &EdaConfig) -> Result<Dataset> {
    let reader = CsvFormat {
        options: config.load_options(),
    };
    Ok(reader.read(path)?)
}

fn saved(path: &Path) {
    println!("  {} {}", "Saved to:".dimmed(), path.display());
}

fn run_report(
    file: &Path,
    output_dir: &Path,
    title: &str,
    config: EdaConfig,
) -> Result<()> {
    let dataset = load_dataset(file, &config)?;
    std::fs::create_dir_all(output_dir)?;

    println!("\n{}", format!("=== {title} ===").bold().cyan());
    println!("  Input:  {}", file.display());
    println!("  Output: {}", output_dir.display());

    let analyzer = Analyzer::new(&dataset, config);
    let report = analyzer.report();
    let config = analyzer.config();

    println!(
        "\n  Dataset: {} rows \u{00d7} {} columns",
        report.summary.n_rows, report.summary.n_cols
    );

    print_quality_flags(&report.quality_flags, FlagStyle::Warnings);

    if !report.missing.is_empty() {
        print_missing_table(&report.missing);
        let missing_file = output_dir.join("missing_values.csv");
        io::write_missing_table(&report.missing, &missing_file)?;
        println!();
        saved(&missing_file);

        if !report.problematic_columns.is_empty() {
            println!(
                "\n{} Problematic columns (>={}% missing): {}",
                "Warning:".yellow().bold(),
                config.min_missing_share * 100.0,
                report.problematic_columns.join(", ")
            );
        }
    }

    if !report.correlation.is_empty() {
        println!("\n{}", "Correlation Matrix".bold().green());
        println!("{}", "=".repeat(50));
        println!("  {} numeric columns", report.correlation.size());
        let corr_file = output_dir.join("correlation.csv");
        io::write_correlation(&report.correlation, &corr_file)?;
        saved(&corr_file);
    }

    if !report.top_categories.is_empty() {
        print_top_categories(&report.top_categories, config.top_k, report.summary.n_rows);
    }

    println!("\n{}", "Generating Charts".bold().green());
    println!("{}", "=".repeat(50));

    let hist_file = output_dir.join("histograms.txt");
    std::fs::write(
        &hist_file,
        format_histograms(&dataset, config.max_hist_columns, HISTOGRAM_BINS),
    )?;
    println!("  {} Histograms: {}", "\u{2713}".green(), hist_file.display());

    if !report.correlation.is_empty() {
        let heatmap_file = output_dir.join("correlation_heatmap.txt");
        std::fs::write(&heatmap_file, format_correlation_heatmap(&report.correlation))?;
        println!(
            "  {} Correlation heatmap: {}",
            "\u{2713}".green(),
            heatmap_file.display()
        );
    }

    if !report.missing.is_empty() {
        let matrix_file = output_dir.join("missing_matrix.txt");
        std::fs::write(&matrix_file, format_missing_matrix(&dataset))?;
        println!(
            "  {} Missing values matrix: {}",
            "\u{2713}".green(),
            matrix_file.display()
        );
    }

    let json_file = output_dir.join("report.json");
    io::write_json(&report, &json_file, true)?;
    println!("  {} JSON report: {}", "\u{2713}".green(), json_file.display());

    info!(output = %output_dir.display(), "report written");
    println!(
        "\n{} Report generated in: {}",
        "Success:".green().bold(),
        output_dir.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Overview { file } => {
            let dataset = load_dataset(&file, &config)?;
            let analyzer = Analyzer::new(&dataset, config);
            let summary = analyzer.summary();

            print_overview(&summary);
            print_dtypes(&summary);
            print_quality_flags(&analyzer.quality_flags(), FlagStyle::Marks);
        }

        Commands::Report {
            file,
            output_dir,
            max_hist_columns,
            top_k_categories,
            title,
            min_missing_share,
        } => {
            let mut config = config;
            if let Some(v) = max_hist_columns {
                config.max_hist_columns = v;
            }
            if let Some(v) = top_k_categories {
                config.top_k = v;
            }
            if let Some(v) = min_missing_share {
                config.min_missing_share = v;
            }
            run_report(&file, &output_dir, &title, config)?;
        }

        Commands::Head { file, n } => {
            let dataset = load_dataset(&file, &config)?;
            print_rows(&dataset, &head(&dataset, n), &format!("First {n} rows"));
        }

        Commands::Sample { file, n, seed } => {
            let dataset = load_dataset(&file, &config)?;
            let rows = sample_rows(&dataset, n, seed);
            let title = match seed {
                Some(s) => format!("Random sample of {n} rows (seed={s})"),
                None => format!("Random sample of {n} rows"),
            };
            print_rows(&dataset, &rows, &title);
        }

        Commands::Profile { file } => {
            let dataset = load_dataset(&file, &config)?;
            print_profiles(&Analyzer::new(&dataset, config).profiles());
        }
    }

    Ok(())
}
