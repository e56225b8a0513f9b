//! png2jpeg CLI - convert a PNG image to a baseline JPEG.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use png2jpeg::{decode_png, encode_jpeg};

/// Convert a PNG image to a baseline JFIF JPEG.
///
/// Decodes the PNG and re-encodes it with this crate's own codec core;
/// no system image libraries are involved. Alpha channels are dropped.
#[derive(Parser, Debug)]
#[command(name = "png2jpeg")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input PNG file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output JPEG file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// JPEG quality; values outside 1-100 are clamped
    #[arg(value_name = "QUALITY", default_value_t = 85)]
    quality: u8,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let input = fs::read(&args.input)?;

    let decode_start = Instant::now();
    let image = decode_png(&input)?;
    let decode_time = decode_start.elapsed();

    let encode_start = Instant::now();
    let jpeg = encode_jpeg(&image.pixels, image.width, image.height, args.quality);
    let encode_time = encode_start.elapsed();

    fs::write(&args.output, &jpeg)?;

    if args.verbose {
        eprintln!("Input: {}", args.input.display());
        eprintln!("  Dimensions: {}x{}", image.width, image.height);
        eprintln!("  Decode time: {decode_time:.2?}");
        eprintln!("Output: {}", args.output.display());
        eprintln!("  Quality: {}", args.quality.clamp(1, 100));
        eprintln!("  Encode time: {encode_time:.2?}");
    }

    let ratio = if input.is_empty() {
        0.0
    } else {
        (jpeg.len() as f64 / input.len() as f64) * 100.0
    };
    println!(
        "{} -> {} ({:.1}%)",
        format_size(input.len() as u64),
        format_size(jpeg.len() as u64),
        ratio
    );

    Ok(())
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}
