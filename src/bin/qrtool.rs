use clap::{Args, Parser, Subcommand, ValueEnum};
use squircle_qr::tools::{grid_stats, load_rgba, output_dir_from_env, output_path, save_image};
use squircle_qr::{
    CanvasMode, ErrorCorrection, GridExtractor, RadiusMode, RenderParams, Renderer, SamplePoint,
    parse_color,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "Rounded-module QR code tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode data and save a rounded QR code
    Generate {
        /// Text or URL to encode
        data: String,
        #[command(flatten)]
        style: StyleArgs,
        #[command(flatten)]
        output: OutputArgs,
        /// Error correction level
        #[arg(long, value_enum, default_value = "h")]
        ecc: Ecc,
    },
    /// Round an existing square-module QR bitmap
    Round {
        #[arg(long)]
        image: PathBuf,
        #[command(flatten)]
        style: StyleArgs,
        #[command(flatten)]
        output: OutputArgs,
        /// Classify modules by their centre pixel instead of the top-left one
        #[arg(long)]
        center_sample: bool,
    },
    /// Print grid and corner statistics for a square-module QR bitmap
    Inspect {
        #[arg(long)]
        image: PathBuf,
        /// Module size in pixels
        #[arg(short = 's', long, default_value_t = 10)]
        size: u32,
        /// Quiet zone in modules
        #[arg(short = 'b', long, default_value_t = 2)]
        border: u32,
        /// Fill colour of the modules
        #[arg(short = 'f', long, default_value = "black")]
        fill: String,
    },
}

#[derive(Args)]
struct StyleArgs {
    /// Module size in pixels
    #[arg(short = 's', long, default_value_t = 10)]
    size: u32,
    /// Quiet zone in modules
    #[arg(short = 'b', long, default_value_t = 2)]
    border: u32,
    /// Fill colour (name or #hex)
    #[arg(short = 'f', long, default_value = "black")]
    fill: String,
    /// Background colour (name or #hex)
    #[arg(long, alias = "bg", default_value = "white")]
    background: String,
    /// Corner radius as a percentage of module size (0-100)
    #[arg(short = 'r', long, default_value_t = 10, allow_negative_numbers = true)]
    radius: i32,
    /// Allow radii up to the full module size
    #[arg(long)]
    unclamped: bool,
    /// Canvas fill: transparent (background only in cut corners), opaque or clear
    #[arg(long, value_enum, default_value = "transparent")]
    canvas: Canvas,
    /// Draw module rows in parallel
    #[arg(long)]
    parallel: bool,
}

#[derive(Args)]
struct OutputArgs {
    /// Output file name (timestamped when omitted)
    #[arg(short = 'o', long)]
    output: Option<String>,
    /// Output directory (defaults to $QR_OUTPUT_DIR or qr_codes)
    #[arg(short = 'd', long)]
    directory: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Ecc {
    L,
    M,
    Q,
    H,
}

#[derive(Clone, Copy, ValueEnum)]
enum Canvas {
    Transparent,
    Opaque,
    Clear,
}

impl From<Canvas> for CanvasMode {
    fn from(canvas: Canvas) -> Self {
        match canvas {
            Canvas::Transparent => CanvasMode::Transparent,
            Canvas::Opaque => CanvasMode::Opaque,
            Canvas::Clear => CanvasMode::Clear,
        }
    }
}

impl From<Ecc> for ErrorCorrection {
    fn from(ecc: Ecc) -> Self {
        match ecc {
            Ecc::L => ErrorCorrection::L,
            Ecc::M => ErrorCorrection::M,
            Ecc::Q => ErrorCorrection::Q,
            Ecc::H => ErrorCorrection::H,
        }
    }
}

impl StyleArgs {
    fn params(&self) -> squircle_qr::Result<RenderParams> {
        let mode = if self.unclamped {
            RadiusMode::Unclamped
        } else {
            RadiusMode::Clamped
        };
        Ok(RenderParams::new()
            .with_module_size(self.size)
            .with_border(self.border)
            .with_colors(parse_color(&self.fill)?, parse_color(&self.background)?)
            .with_radius_percent(self.radius)
            .with_radius_mode(mode)
            .with_canvas(self.canvas.into())
            .with_parallel(self.parallel))
    }
}

impl OutputArgs {
    fn path(&self) -> PathBuf {
        let dir = self.directory.clone().unwrap_or_else(output_dir_from_env);
        output_path(&dir, self.output.as_deref())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Generate {
            data,
            style,
            output,
            ecc,
        } => generate_cmd(&data, &style, &output, ecc),
        Command::Round {
            image,
            style,
            output,
            center_sample,
        } => round_cmd(&image, &style, &output, center_sample),
        Command::Inspect {
            image,
            size,
            border,
            fill,
        } => inspect_cmd(&image, size, border, &fill),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn generate_cmd(
    data: &str,
    style: &StyleArgs,
    output: &OutputArgs,
    ecc: Ecc,
) -> squircle_qr::Result<()> {
    let renderer = Renderer::with_params(style.params()?).error_correction(ecc.into());
    let start = Instant::now();
    let image = renderer.render_text(data)?;
    let elapsed = start.elapsed();

    let path = output.path();
    save_image(&image, &path)?;
    println!(
        "QR code generated successfully and saved to: {} ({}x{}, {:.2} ms)",
        path.display(),
        image.width(),
        image.height(),
        elapsed.as_secs_f64() * 1000.0
    );
    Ok(())
}

fn round_cmd(
    image: &Path,
    style: &StyleArgs,
    output: &OutputArgs,
    center_sample: bool,
) -> squircle_qr::Result<()> {
    let sample = if center_sample {
        SamplePoint::Center
    } else {
        SamplePoint::TopLeft
    };
    let source = load_rgba(image)?;
    let rounded = Renderer::with_params(style.params()?)
        .sample_point(sample)
        .round(&source)?;

    let path = output.path();
    save_image(&rounded, &path)?;
    println!("Rounded {} -> {}", image.display(), path.display());
    Ok(())
}

fn inspect_cmd(image: &Path, size: u32, border: u32, fill: &str) -> squircle_qr::Result<()> {
    let source = load_rgba(image)?;
    let grid = GridExtractor::new(size, border, parse_color(fill)?).extract(&source)?;
    let stats = grid_stats(&grid);

    println!(
        "Image: {} ({}x{})",
        image.display(),
        source.width(),
        source.height()
    );
    println!("Grid: {}x{} modules", stats.size, stats.size);
    println!(
        "Filled: {} ({:.2}%)",
        stats.filled,
        stats.fill_ratio * 100.0
    );
    println!(
        "Corners: rounded={} square={}",
        stats.corners.rounded, stats.corners.square
    );
    Ok(())
}
