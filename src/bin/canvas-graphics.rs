use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use canvas_graphics::{
    Bitmap, CpuSurface, FsImageLoader, GraphicsRenderer, ImageGraphicsOptions, NullFontLoader,
    RenderSettings, SystemFontLoader, TextGraphicsOptions, TextMeasurement,
};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;

#[derive(Parser, Debug)]
#[command(name = "canvas-graphics", version)]
struct Cli {
    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a text panel as a PNG.
    Text(TextArgs),
    /// Render an image strip as a PNG.
    Image(ImageArgs),
}

#[derive(Parser, Debug)]
struct CommonArgs {
    /// Input options JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Directory image sources are resolved against (defaults to the input's directory).
    #[arg(long)]
    assets: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TextArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Extra font directory; may be repeated.
    #[arg(long = "fonts")]
    fonts: Vec<PathBuf>,

    /// Character advance measurement (`char-class` or `font-advance`).
    #[arg(long)]
    measure: Option<TextMeasurement>,
}

#[derive(Parser, Debug)]
struct ImageArgs {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Text(args) => cmd_text(args),
        Command::Image(args) => cmd_image(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_options<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open options '{}'", path.display()))?;
    let r = BufReader::new(f);
    serde_json::from_reader(r).with_context(|| format!("parse options '{}'", path.display()))
}

fn assets_root(common: &CommonArgs) -> PathBuf {
    common.assets.clone().unwrap_or_else(|| {
        common
            .in_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf()
    })
}

fn image_loader(common: &CommonArgs) -> FsImageLoader {
    let loader = FsImageLoader::new(assets_root(common));
    tracing::debug!(root = %loader.root().display(), "image root");
    loader
}

fn cmd_text(args: TextArgs) -> anyhow::Result<()> {
    let opts: TextGraphicsOptions = read_options(&args.common.in_path)?;

    let mut settings = RenderSettings::from_env();
    if let Some(m) = args.measure {
        settings.text_measurement = m;
    }

    let mut fonts = SystemFontLoader::new();
    for dir in &args.fonts {
        fonts.add_font_dir(dir);
    }
    tracing::debug!(faces = fonts.face_count(), "font database ready");

    let renderer = GraphicsRenderer::with_settings(image_loader(&args.common), fonts, settings);
    tracing::debug!(measure = ?renderer.settings().text_measurement, "rendering text panel");
    let surface: CpuSurface = pollster::block_on(renderer.text_graphics(&opts))?;
    write_png(surface.into_bitmap()?, &args.common.out)
}

fn cmd_image(args: ImageArgs) -> anyhow::Result<()> {
    let opts: ImageGraphicsOptions = read_options(&args.common.in_path)?;

    let renderer = GraphicsRenderer::with_settings(
        image_loader(&args.common),
        NullFontLoader,
        RenderSettings::from_env(),
    );
    let surface: CpuSurface = pollster::block_on(renderer.image_graphics(&opts))?;
    write_png(surface.into_bitmap()?, &args.common.out)
}

fn write_png(bitmap: Bitmap, out: &Path) -> anyhow::Result<()> {
    if bitmap.width == 0 || bitmap.height == 0 {
        anyhow::bail!(
            "rendered surface is {}x{}; nothing to write",
            bitmap.width,
            bitmap.height
        );
    }

    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        out,
        &bitmap.to_straight_rgba8(),
        bitmap.width,
        bitmap.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}
