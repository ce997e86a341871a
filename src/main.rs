//! Landgrid CLI - land/ocean world grid generator.
//!
//! Classify a latitude/longitude grid against GeoJSON land polygons and
//! export the result as a land mask.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use landgrid::export::{export_grid_mask_png, export_grid_mask_raw, MaskExportOptions};
use landgrid::grid::{Axis, GridConfig};
use landgrid::GridGenerator;

/// Land/ocean world grid generator.
#[derive(Parser)]
#[command(name = "landgrid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a world grid against land polygons and export the mask.
    Generate {
        /// GeoJSON file with land polygons. Without it every cell is ocean.
        #[arg(short, long)]
        land: Option<PathBuf>,

        /// Cell size in degrees. Overrides the config file.
        #[arg(short, long)]
        grid_size: Option<f64>,

        /// JSON grid configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory for generated files.
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Base name for output files.
        #[arg(short, long, default_value = "landmask")]
        name: String,

        /// Export format.
        #[arg(short, long, default_value = "png")]
        format: ExportFormat,
    },

    /// Display cell counts and memory use for a grid size.
    Info {
        /// Cell size in degrees.
        #[arg(short, long, default_value = "1.0")]
        grid_size: f64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    /// 8-bit grayscale PNG, north up.
    Png,
    /// One byte per cell, rows north to south.
    Raw,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            land,
            grid_size,
            config,
            output,
            name,
            format,
        } => {
            run_generate(land, grid_size, config, output, name, format);
        }
        Commands::Info { grid_size } => {
            run_info(grid_size);
        }
    }
}

fn run_generate(
    land: Option<PathBuf>,
    grid_size: Option<f64>,
    config: Option<PathBuf>,
    output: PathBuf,
    name: String,
    format: ExportFormat,
) {
    let mut grid_config = match &config {
        Some(path) => GridConfig::from_json_file(path).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }),
        None => GridConfig::default(),
    };
    if let Some(size) = grid_size {
        grid_config.grid_size = size;
    }

    if let Err(e) = grid_config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!("Landgrid - Land/Ocean Grid Generator");
    println!("====================================");
    println!("Grid size: {}°", grid_config.grid_size);
    println!("Output: {}", output.display());

    let start = Instant::now();
    let mut generator = GridGenerator::with_config(grid_config);

    if let Some(path) = &land {
        println!("\nLoading land data from {}...", path.display());
        let count = generator.load_land_data(path).unwrap_or_else(|e| {
            eprintln!("Error loading land data: {}", e);
            std::process::exit(1);
        });
        println!("  Loaded {} polygons", count);
    } else {
        println!("\nNo land data given: every cell will be ocean");
    }

    println!("Classifying grid...");
    generator.generate_world_grid().unwrap_or_else(|e| {
        eprintln!("Error during generation: {}", e);
        std::process::exit(1);
    });

    let grid = generator.get_grid().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let gen_time = start.elapsed();
    println!("Generation completed in {:.2?}", gen_time);
    println!(
        "Cells: {} ({}x{}), land: {} ({:.1}%)",
        grid.len(),
        grid.rows(),
        grid.cols(),
        grid.land_count(),
        grid.land_fraction() * 100.0
    );

    println!("\nExporting mask...");
    let export_start = Instant::now();

    std::fs::create_dir_all(&output).unwrap_or_else(|e| {
        eprintln!("Error creating output directory: {}", e);
        std::process::exit(1);
    });

    match format {
        ExportFormat::Png => {
            let path = output.join(format!("{}.png", name));
            export_grid_mask_png(grid, &path, &MaskExportOptions::default()).unwrap_or_else(|e| {
                eprintln!("Error exporting PNG: {}", e);
                std::process::exit(1);
            });
            println!("  Exported {}", path.display());
        }
        ExportFormat::Raw => {
            let path = output.join(format!("{}.raw", name));
            export_grid_mask_raw(grid, &path).unwrap_or_else(|e| {
                eprintln!("Error exporting RAW: {}", e);
                std::process::exit(1);
            });
            println!(
                "  Exported {} ({} x {} bytes)",
                path.display(),
                grid.cols(),
                grid.rows()
            );
        }
    }

    println!("Export completed in {:.2?}", export_start.elapsed());
    println!("\nTotal time: {:.2?}", start.elapsed());
    println!("Done!");
}

fn run_info(grid_size: f64) {
    if let Err(e) = GridConfig::with_grid_size(grid_size).validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let rows = Axis::latitude(grid_size).len() as u64;
    let cols = Axis::longitude(grid_size).len() as u64;
    let cells = rows * cols;

    let bytes_mask = cells; // one bool per cell
    let bytes_raw = cells;

    println!("Landgrid - Grid Configuration Info");
    println!("==================================");
    println!();
    println!("Grid size: {}°", grid_size);
    if 180.0 % grid_size != 0.0 || 360.0 % grid_size != 0.0 {
        println!("  Note: size does not divide the globe evenly; the last band overruns the edge");
    }
    println!();
    println!("Cell counts:");
    println!("  Latitude bands:  {:>12}", rows);
    println!("  Longitude bands: {:>12}", cols);
    println!("  Total:           {:>12}", cells);
    println!();
    println!("Memory usage (in-memory):");
    println!("  Land mask:  {:>12} bytes ({:.2} MB)", bytes_mask, bytes_mask as f64 / 1024.0 / 1024.0);
    println!();
    println!("Export file sizes:");
    println!("  RAW (u8):   {:>12} bytes ({:.2} MB)", bytes_raw, bytes_raw as f64 / 1024.0 / 1024.0);
    println!("  PNG:        {}x{} pixels, compressed", cols, rows);
}
