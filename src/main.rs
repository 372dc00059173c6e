use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vqimg::models::AppConfig;
use vqimg::services::{ArtifactInfo, CodecPipeline};

const CONFIG_ENV: &str = "VQIMG_CONFIG";

#[derive(Parser)]
#[command(name = "vqimg")]
#[command(about = "Palette image compressor with a compact binary container")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a PNG into a palette artifact
    Compress {
        /// Input PNG file
        #[arg(short, long)]
        input: PathBuf,

        /// Output artifact file
        #[arg(short, long)]
        output: PathBuf,

        /// Number of palette colors (1-256)
        #[arg(short = 'k', long)]
        colors: Option<u16>,

        /// Seed for k-means++ initialization
        #[arg(long)]
        seed: Option<u64>,

        /// Iteration cap for k-means
        #[arg(long)]
        max_iterations: Option<u32>,

        /// Initialization: "kmeans++" or "popularity"
        #[arg(long)]
        init: Option<String>,

        /// Train on a single thread
        #[arg(long)]
        no_parallel: bool,
    },
    /// Decompress an artifact into a PNG
    Decompress {
        /// Input artifact file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,

        /// Write an indexed (palette) PNG
        #[arg(long)]
        indexed: bool,
    },
    /// Show the header and validity of an artifact
    Inspect {
        /// Artifact file
        #[arg(short, long)]
        input: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vqimg=info,vq_codec=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Compress {
            input,
            output,
            colors,
            seed,
            max_iterations,
            init,
            no_parallel,
        }) => {
            let mut config = AppConfig::load(cli.config.as_deref());
            let compression = &mut config.compression;
            if let Some(colors) = colors {
                compression.palette_size = colors;
            }
            if let Some(seed) = seed {
                compression.seed = seed;
            }
            if let Some(max_iterations) = max_iterations {
                compression.max_iterations = max_iterations;
            }
            if let Some(init) = init {
                compression.initialization = init;
            }
            if no_parallel {
                compression.parallel = false;
            }
            run_compress_command(&config, &input, &output)
        }
        Some(Commands::Decompress {
            input,
            output,
            indexed,
        }) => {
            let mut config = AppConfig::load(cli.config.as_deref());
            config.decompression.indexed_png |= indexed;
            run_decompress_command(&config, &input, &output)
        }
        Some(Commands::Inspect { input, json }) => run_inspect_command(&input, json),
        None => {
            run_status_command(cli.config.as_deref());
            Ok(())
        }
    }
}

fn run_compress_command(config: &AppConfig, input: &Path, output: &Path) -> anyhow::Result<()> {
    let pipeline = CodecPipeline::from_config(config)?;
    let report = pipeline
        .compress_file(input, output)
        .with_context(|| format!("Failed to compress {}", input.display()))?;

    println!(
        "Compressed {} -> {} using {} colors",
        input.display(),
        output.display(),
        report.palette_size
    );
    println!(
        "  {}x{}, {} distinct colors, {} iterations{}",
        report.width,
        report.height,
        report.distinct_colors,
        report.iterations,
        if report.converged { "" } else { " (not converged)" }
    );
    println!(
        "  {} -> {} bytes ({:.2}x)",
        report.raw_bytes,
        report.artifact_bytes,
        report.ratio()
    );
    match report.psnr_db {
        Some(db) => println!("  PSNR {db:.2} dB"),
        None => println!("  PSNR inf (exact)"),
    }
    Ok(())
}

fn run_decompress_command(config: &AppConfig, input: &Path, output: &Path) -> anyhow::Result<()> {
    let pipeline = CodecPipeline::from_config(config)?;
    pipeline
        .decompress_file(input, output)
        .with_context(|| format!("Failed to decompress {}", input.display()))?;

    println!("Decompressed {} -> {}", input.display(), output.display());
    Ok(())
}

fn run_inspect_command(input: &Path, json: bool) -> anyhow::Result<()> {
    let info = CodecPipeline::inspect_file(input)
        .with_context(|| format!("Failed to inspect {}", input.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print_artifact_info(&info);
    }

    if let Some(error) = &info.error {
        anyhow::bail!("{} is not a valid artifact: {error}", input.display());
    }
    Ok(())
}

fn print_artifact_info(info: &ArtifactInfo) {
    println!("{}", info.path.display());
    println!("  Dimensions:     {}x{}", info.width, info.height);
    println!("  Palette size:   {}", info.palette_size);
    match info.expected_bytes {
        Some(expected) => println!("  Expected bytes: {expected}"),
        None => println!("  Expected bytes: (overflows)"),
    }
    println!("  Actual bytes:   {}", info.actual_bytes);
    match &info.error {
        Some(error) => println!("  Status:         invalid ({error})"),
        None => {
            println!("  Status:         ok");
            println!("  Palette:        {}", info.palette.join(" "));
        }
    }
}

fn run_status_command(config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("vqimg v{VERSION}");
    println!("Palette image compressor\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV} = {}",
        std::env::var(CONFIG_ENV).as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG     = {}",
        std::env::var("RUST_LOG")
            .as_deref()
            .unwrap_or("vqimg=info,vq_codec=warn (default)")
    );

    let source = match config_path {
        Some(path) if path.exists() => path.display().to_string(),
        Some(path) => format!("{} (not found, using defaults)", path.display()),
        None => "defaults".to_string(),
    };
    let config = AppConfig::load(config_path);
    let compression = &config.compression;

    println!("\nConfiguration: {source}");
    println!("  palette_size   = {}", compression.palette_size);
    println!("  max_iterations = {}", compression.max_iterations);
    println!("  seed           = {}", compression.seed);
    println!("  initialization = {}", compression.initialization);
    println!("  parallel       = {}", compression.parallel);
    println!("  indexed_png    = {}", config.decompression.indexed_png);

    println!("\nRun 'vqimg --help' for usage.");
}
