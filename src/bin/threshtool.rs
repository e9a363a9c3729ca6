use clap::{Parser, Subcommand};
use rust_binarize::Filter;
use rust_binarize::filters::binarization::{histogram, otsu_threshold};
use rust_binarize::filters::luminance::luminance_plane;
use rust_binarize::tools::{binary_stats, load_image, luminance_stats, save_image};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "threshtool", version, about = "rust_binarize CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Smooth an image with the 3x3 box low-pass filter
    Lowpass {
        #[arg(long)]
        image: PathBuf,
        #[arg(long)]
        output: PathBuf,
    },
    /// Binarize with the global Otsu threshold
    Otsu {
        #[arg(long)]
        image: PathBuf,
        #[arg(long)]
        output: PathBuf,
    },
    /// Binarize with the integral-image adaptive mean threshold
    AdaptiveMean {
        #[arg(long)]
        image: PathBuf,
        #[arg(long)]
        output: PathBuf,
    },
    /// Binarize with the local-contrast adaptive threshold
    AdaptiveContrast {
        #[arg(long)]
        image: PathBuf,
        #[arg(long)]
        output: PathBuf,
    },
    /// Print luminance and threshold statistics for an image
    Stats {
        #[arg(long)]
        image: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Lowpass { image, output } => filter_cmd(Filter::LowPass, &image, &output),
        Command::Otsu { image, output } => filter_cmd(Filter::Otsu, &image, &output),
        Command::AdaptiveMean { image, output } => {
            filter_cmd(Filter::AdaptiveMean, &image, &output)
        }
        Command::AdaptiveContrast { image, output } => {
            filter_cmd(Filter::AdaptiveContrast, &image, &output)
        }
        Command::Stats { image } => stats_cmd(&image),
    }
}

fn filter_cmd(filter: Filter, input: &Path, output: &Path) {
    let source = match load_image(input) {
        Ok(img) => img,
        Err(err) => {
            eprintln!("Failed to load image {}: {}", input.display(), err);
            return;
        }
    };

    println!(
        "Image: {} ({}x{})",
        input.display(),
        source.width(),
        source.height()
    );

    let start = Instant::now();
    let result = filter.apply(&source);
    println!("Applied {} in {:.1?}", filter.name(), start.elapsed());

    if filter != Filter::LowPass {
        let stats = binary_stats(&result);
        println!(
            "Binary: white_pixels={} total={} white_ratio={:.2}%",
            stats.white_pixels,
            stats.total_pixels,
            stats.white_ratio * 100.0
        );
    }

    match save_image(output, &result) {
        Ok(()) => println!("Wrote {}", output.display()),
        Err(err) => eprintln!("Failed to save {}: {}", output.display(), err),
    }
}

fn stats_cmd(input: &Path) {
    let source = match load_image(input) {
        Ok(img) => img,
        Err(err) => {
            eprintln!("Failed to load image {}: {}", input.display(), err);
            return;
        }
    };

    println!(
        "Image: {} ({}x{})",
        input.display(),
        source.width(),
        source.height()
    );

    let stats = luminance_stats(&source);
    println!(
        "Luminance range: {}-{}, average: {}",
        stats.min, stats.max, stats.avg
    );

    let threshold = otsu_threshold(&histogram(&luminance_plane(&source)));
    println!("Otsu threshold: {}", threshold);

    for filter in [Filter::Otsu, Filter::AdaptiveMean, Filter::AdaptiveContrast] {
        let binary = filter.apply(&source);
        let stats = binary_stats(&binary);
        println!(
            "{}: white_ratio={:.2}%",
            filter.name(),
            stats.white_ratio * 100.0
        );
    }
}
