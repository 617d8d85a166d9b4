use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use image::{codecs::jpeg::JpegEncoder, DynamicImage, ImageFormat, RgbaImage};
use seamcarver::dump::{energy_table, energy_to_image, SeamMark};
use seamcarver::{SeamCarver, SeamFinder};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "seamcarve", version, about = "Content-aware image resizing")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shrink an image by removing the cheapest seams.
    Resize(CarveArgs),
    /// Enlarge an image by inserting blended seams.
    Insert(CarveArgs),
    /// Print the energy of every pixel, or save it as a grayscale image.
    Energy(EnergyArgs),
    /// Print the cheapest vertical and horizontal seams over the energy table.
    Seam(SeamArgs),
}

#[derive(Args, Debug)]
struct CarveArgs {
    /// Input image (PNG, JPEG, GIF, ...).
    #[arg(long, short)]
    input: PathBuf,

    /// Output image; the format follows the extension.
    #[arg(long, short)]
    output: PathBuf,

    /// Number of columns to carve.
    #[arg(long, default_value_t = 0)]
    cols: u32,

    /// Number of rows to carve.
    #[arg(long, default_value_t = 0)]
    rows: u32,

    /// JPEG quality, 1 to 100.
    #[arg(long, default_value_t = 80, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,
}

#[derive(Args, Debug)]
struct EnergyArgs {
    /// Input image.
    #[arg(long, short)]
    input: PathBuf,

    /// Write the energy as a grayscale image instead of printing it.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SeamArgs {
    /// Input image.
    #[arg(long, short)]
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Resize(args) => cmd_resize(args),
        Command::Insert(args) => cmd_insert(args),
        Command::Energy(args) => cmd_energy(args),
        Command::Seam(args) => cmd_seam(args),
    }
}

fn load(path: &Path) -> anyhow::Result<SeamCarver> {
    let image = image::open(path).with_context(|| format!("open image '{}'", path.display()))?;
    let carver = SeamCarver::new(&image).with_context(|| format!("read pixels of '{}'", path.display()))?;
    info!(
        path = %path.display(),
        width = carver.width(),
        height = carver.height(),
        "loaded image"
    );
    Ok(carver)
}

fn save(image: RgbaImage, path: &Path, quality: u8) -> anyhow::Result<()> {
    let format = ImageFormat::from_path(path)
        .with_context(|| format!("pick an image format for '{}'", path.display()))?;
    let image = DynamicImage::ImageRgba8(image);

    // JPEG has no alpha channel, and is the only format with a quality knob.
    if format == ImageFormat::Jpeg {
        let file = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
        JpegEncoder::new_with_quality(BufWriter::new(file), quality)
            .encode_image(&image.to_rgb8())
            .with_context(|| format!("write jpeg '{}'", path.display()))?;
    } else {
        image
            .save_with_format(path, format)
            .with_context(|| format!("write image '{}'", path.display()))?;
    }
    Ok(())
}

fn finish(carver: &SeamCarver, args: &CarveArgs, start: Instant) -> anyhow::Result<()> {
    save(carver.current_image(), &args.output, args.quality)?;
    info!(
        path = %args.output.display(),
        width = carver.width(),
        height = carver.height(),
        seconds = start.elapsed().as_secs_f64(),
        "wrote image"
    );
    Ok(())
}

fn cmd_resize(args: CarveArgs) -> anyhow::Result<()> {
    let mut carver = load(&args.input)?;
    let start = Instant::now();

    for i in 0..args.cols {
        let seam = carver.find_vertical_seam();
        carver
            .remove_vertical_seam(&seam)
            .with_context(|| format!("remove column {}", i + 1))?;
        debug!(removed = i + 1, "columns");
    }
    for i in 0..args.rows {
        let seam = carver.find_horizontal_seam();
        carver
            .remove_horizontal_seam(&seam)
            .with_context(|| format!("remove row {}", i + 1))?;
        debug!(removed = i + 1, "rows");
    }

    finish(&carver, &args, start)
}

fn cmd_insert(args: CarveArgs) -> anyhow::Result<()> {
    let mut carver = load(&args.input)?;
    let start = Instant::now();

    carver
        .insert_vertical_seams(args.cols)
        .with_context(|| format!("insert {} columns", args.cols))?;
    carver
        .insert_horizontal_seams(args.rows)
        .with_context(|| format!("insert {} rows", args.rows))?;

    finish(&carver, &args, start)
}

fn cmd_energy(args: EnergyArgs) -> anyhow::Result<()> {
    let carver = load(&args.input)?;
    match args.output {
        Some(out) => {
            energy_to_image(carver.energy())
                .save(&out)
                .with_context(|| format!("write energy image '{}'", out.display()))?;
            info!(path = %out.display(), "wrote energy image");
        }
        None => {
            println!(
                "{} is {} pixels wide by {} pixels high.",
                args.input.display(),
                carver.width(),
                carver.height()
            );
            print!("{}", energy_table(carver.energy(), None));
        }
    }
    Ok(())
}

fn cmd_seam(args: SeamArgs) -> anyhow::Result<()> {
    let carver = load(&args.input)?;
    println!(
        "{} ({}-by-{} image)\n",
        args.input.display(),
        carver.width(),
        carver.height()
    );

    let vertical = carver.find_vertical_seam();
    println!("Vertical seam: {:?}", vertical);
    print!("{}", energy_table(carver.energy(), Some(SeamMark::Vertical(&vertical))));
    println!();

    let horizontal = carver.find_horizontal_seam();
    println!("Horizontal seam: {:?}", horizontal);
    print!("{}", energy_table(carver.energy(), Some(SeamMark::Horizontal(&horizontal))));
    Ok(())
}
