//! Sprite XML Slicer CLI
//!
//! Slice sprite sheets using texture atlas XML descriptors.

use clap::{ArgGroup, Parser, Subcommand};
use sprite_xml_slicer::{
    extract_sprites, parse_file, write_sprites, JsonSink, SliceSink, Slicer, SlicerConfig,
    SlicerError,
};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sprite-xml-slicer")]
#[command(author, version, about = "Slice sprite sheets using texture atlas XML descriptors", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write sprite import settings for a sheet as JSON
    #[command(group(ArgGroup::new("sheet").required(true).args(["image", "height"])))]
    Slice {
        /// Texture atlas XML descriptor
        #[arg(short, long)]
        descriptor: PathBuf,

        /// Sprite sheet image (used for its height)
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// Sprite sheet height in pixels, instead of reading the image
        #[arg(long)]
        height: Option<f32>,

        /// Output JSON file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pivot X (0.0 to 1.0)
        #[arg(long, default_value = "0.5")]
        pivot_x: f32,

        /// Pivot Y (0.0 to 1.0)
        #[arg(long, default_value = "0.5")]
        pivot_y: f32,

        /// Write compact single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Crop every sprite out of the sheet into PNG files
    Extract {
        /// Texture atlas XML descriptor
        #[arg(short, long)]
        descriptor: PathBuf,

        /// Sprite sheet image
        #[arg(short, long)]
        image: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,
    },

    /// List the sprites in a descriptor
    Info {
        /// Texture atlas XML descriptor
        #[arg(short, long)]
        descriptor: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Slice {
            descriptor,
            image,
            height,
            output,
            pivot_x,
            pivot_y,
            compact,
        } => {
            let config = SlicerConfig::default()
                .with_pivot(pivot_x, pivot_y)
                .with_pretty(!compact);
            slice_sheet(&descriptor, image, height, output, config)
        }
        Commands::Extract {
            descriptor,
            image,
            output,
        } => extract_sheet(&descriptor, &image, &output),
        Commands::Info { descriptor } => show_descriptor_info(&descriptor),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<SlicerError>() {
            Some(err) if err.is_parse_error() => {
                eprintln!("Descriptor error: {}", err);
                ExitCode::from(2)
            }
            _ => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn slice_sheet(
    descriptor_path: &PathBuf,
    image_path: Option<PathBuf>,
    height: Option<f32>,
    output_path: Option<PathBuf>,
    config: SlicerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let image_height = match (height, image_path) {
        (Some(height), _) => height,
        (None, Some(path)) => sprite_xml_slicer::sheet::image_height_from_path(&path)?,
        (None, None) => return Err("either --image or --height is required".into()),
    };

    let pretty = config.pretty;
    let records = parse_file(descriptor_path)?;
    let settings = Slicer::with_config(config).slice_records(&records, image_height)?;
    let count = settings.sprite_count();

    match output_path {
        Some(path) => {
            sprite_xml_slicer::export_json_file(&path, settings, pretty)?;
            println!("Wrote {} sprites to {:?}", count, path);
        }
        None => {
            JsonSink::new(std::io::stdout().lock())
                .pretty(pretty)
                .apply(settings)?;
        }
    }

    Ok(())
}

fn extract_sheet(
    descriptor_path: &PathBuf,
    image_path: &PathBuf,
    output_dir: &PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Loading descriptor from {:?}...", descriptor_path);
    let records = parse_file(descriptor_path)?;
    println!("  Found {} sprites", records.len());

    println!("Loading sprite sheet from {:?}...", image_path);
    let sheet = image::open(image_path)?.to_rgba8();
    println!("  Sheet is {}x{}", sheet.width(), sheet.height());

    let sprites = extract_sprites(&sheet, &records)?;
    fs::create_dir_all(output_dir)?;
    let paths = write_sprites(output_dir, &sprites)?;

    println!("Exported {} sprites to {:?}", paths.len(), output_dir);
    Ok(())
}

fn show_descriptor_info(descriptor_path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    println!("Loading descriptor from {:?}...", descriptor_path);
    let records = parse_file(descriptor_path)?;

    println!("\nDescriptor Info:");
    println!("  Sprites: {}", records.len());
    for record in &records {
        println!(
            "  - {} at ({}, {}) {}x{}",
            record.name, record.x, record.y, record.width, record.height
        );
    }

    Ok(())
}
