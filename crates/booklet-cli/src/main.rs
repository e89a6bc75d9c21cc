mod logger;

use anyhow::{Context, Result};
use booklet_impose::{BookletOptions, BookletStatistics, RasterizedPages};
use clap::{Args, Parser, Subcommand, ValueEnum};
use logger::StderrLogger;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "booklet", about = "Turn storybook PDFs into printable booklets", version)]
struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Impose pages onto duplex sheets for saddle-stitch binding
    #[command(alias = "impose")]
    Booklet {
        /// Input PDF or image files, in reading order
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        options: OptionArgs,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// Split two-page spreads into single portrait pages
    Split {
        /// Input PDF or image files, in reading order
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Re-encode every page as a JPEG at its original size
    Compress {
        /// Input PDF or image files
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Print the sheet layout for a page count
    Plan {
        /// Number of pages to impose
        pages: usize,

        /// Imposition mode
        #[arg(long, default_value = "saddle-stitch", value_enum)]
        mode: ModeArg,

        /// Which slots are printed upside down
        #[arg(long, default_value = "invert-outer", value_enum)]
        rotation: RotationArg,
    },
}

/// Settings shared by the document-producing commands.
///
/// Anything left unset keeps the value from `--config` (or the default).
#[derive(Args)]
struct OptionArgs {
    /// JSON options file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Imposition mode
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Which slots are printed upside down
    #[arg(long, value_enum)]
    rotation: Option<RotationArg>,

    /// Split each input spread into two pages before imposing
    #[arg(long)]
    split_spreads: bool,

    /// Which half of the cover spread to keep
    #[arg(long, value_enum)]
    cover: Option<CoverArg>,

    /// Order of the halves of inner spreads
    #[arg(long, value_enum)]
    half_order: Option<HalfOrderArg>,

    /// Output sheet paper size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Output sheet orientation
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// JPEG quality (1-100)
    #[arg(long)]
    quality: Option<u8>,

    /// Largest page width or height kept, in pixels
    #[arg(long)]
    max_dimension: Option<u32>,

    /// Render pages in grayscale
    #[arg(long)]
    grayscale: bool,

    /// Rasterization scale (2.0 = 144 DPI)
    #[arg(long)]
    scale: Option<f32>,
}

impl OptionArgs {
    async fn resolve(self) -> Result<BookletOptions> {
        let mut options = match &self.config {
            Some(path) => BookletOptions::load(path)
                .await
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => BookletOptions::default(),
        };

        if let Some(mode) = self.mode {
            options.imposition_mode = mode.into();
        }
        if let Some(rotation) = self.rotation {
            options.rotation_rule = rotation.into();
        }
        if self.split_spreads {
            options.split_spreads = true;
        }
        if let Some(cover) = self.cover {
            options.split.cover_half = cover.into();
        }
        if let Some(order) = self.half_order {
            options.split.half_order = order.into();
        }
        if let Some(paper) = self.paper {
            options.sheet_size = paper.into();
        }
        if let Some(orientation) = self.orientation {
            options.sheet_orientation = orientation.into();
        }
        if let Some(quality) = self.quality {
            options.jpeg_quality = quality;
        }
        if let Some(max_dimension) = self.max_dimension {
            options.max_dimension = max_dimension;
        }
        if self.grayscale {
            options.color_policy = booklet_impose::ColorPolicy::Grayscale;
        }
        if let Some(scale) = self.scale {
            options.raster_scale = scale;
        }

        options.validate()?;
        Ok(options)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    SaddleStitch,
    Paired,
}

#[derive(Clone, Copy, ValueEnum)]
enum RotationArg {
    InvertOuter,
    Upright,
}

#[derive(Clone, Copy, ValueEnum)]
enum CoverArg {
    Right,
    Left,
    Whole,
}

#[derive(Clone, Copy, ValueEnum)]
enum HalfOrderArg {
    RightFirst,
    LeftFirst,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<ModeArg> for booklet_impose::ImpositionMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::SaddleStitch => Self::FourUpSaddleStitch,
            ModeArg::Paired => Self::TwoUpPaired,
        }
    }
}

impl From<RotationArg> for booklet_impose::RotationRule {
    fn from(arg: RotationArg) -> Self {
        match arg {
            RotationArg::InvertOuter => Self::InvertOuter,
            RotationArg::Upright => Self::Upright,
        }
    }
}

impl From<CoverArg> for booklet_impose::CoverHalf {
    fn from(arg: CoverArg) -> Self {
        match arg {
            CoverArg::Right => Self::Right,
            CoverArg::Left => Self::Left,
            CoverArg::Whole => Self::Whole,
        }
    }
}

impl From<HalfOrderArg> for booklet_impose::HalfOrder {
    fn from(arg: HalfOrderArg) -> Self {
        match arg {
            HalfOrderArg::RightFirst => Self::RightFirst,
            HalfOrderArg::LeftFirst => Self::LeftFirst,
        }
    }
}

impl From<PaperArg> for booklet_impose::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl From<OrientationArg> for booklet_impose::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

fn print_statistics(title: &str, stats: &BookletStatistics) {
    println!("{}:", title);
    println!("  Source pages: {}", stats.source_pages);
    println!("  Imposed pages: {}", stats.imposed_pages);
    println!("  Blank pages added: {}", stats.blank_pages_added);
    println!("  Sheets: {}", stats.sheets);
    println!("  Output pages: {}", stats.output_pages);
    println!("  Format: {}", stats.format);
    println!("  Printer setting: {}", stats.duplex_hint);
}

fn print_plan(pages: usize, mode: ModeArg, rotation: RotationArg) -> Result<()> {
    let plan = booklet_impose::plan_imposition_with(pages, mode.into(), rotation.into())?;
    println!(
        "{} pages -> {} padded ({} blank), {} sheets",
        plan.page_count,
        plan.padded_count,
        plan.blank_pages(),
        plan.sheet_count()
    );

    let label = |slot: booklet_impose::Slot| {
        let marker = if slot.rotated { "↓" } else { "" };
        if plan.is_padding(slot.page) {
            format!("blank{}", marker)
        } else {
            format!("{}{}", slot.page + 1, marker)
        }
    };

    for sheet in &plan.sheets {
        for face in sheet.faces() {
            println!(
                "  Sheet {:>3} {:<5}  [{:>7}] [{:>7}]",
                sheet.index + 1,
                format!("{:?}", face.side),
                label(face.left),
                label(face.right)
            );
        }
    }
    Ok(())
}

/// Impose `input` into `output`, or only predict the statistics.
///
/// Predicting needs a page count, which for PDFs comes from lopdf; a real
/// build never parses the input that way and reports what it produced.
async fn booklet_command(
    input: &[PathBuf],
    output: &Path,
    options: &BookletOptions,
    stats_only: bool,
) -> Result<BookletStatistics> {
    if stats_only {
        let source_pages = booklet_impose::count_source_pages(input).await?;
        return Ok(booklet_impose::calculate_statistics(source_pages, options)?);
    }

    let source = load(input, options).await?;
    let booklet = booklet_impose::run_booklet(source.images, options).await?;
    publish(booklet.document, output).await?;
    Ok(booklet.statistics)
}

async fn load(input: &[PathBuf], options: &BookletOptions) -> Result<RasterizedPages> {
    booklet_impose::load_source(input, options)
        .await
        .context("Failed to load input pages")
}

async fn publish(document: lopdf::Document, output: &Path) -> Result<()> {
    booklet_impose::publish_pdf(document, output)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    StderrLogger::from_verbosity(cli.verbose, cli.quiet).init()?;

    match cli.command {
        Commands::Booklet {
            input,
            output,
            options,
            stats_only,
        } => {
            let options = options.resolve().await?;
            let stats = booklet_command(&input, &output, &options, stats_only).await?;
            print_statistics("Booklet Statistics", &stats);
            if !stats_only {
                println!("Booklet → {}", output.display());
            }
        }

        Commands::Split {
            input,
            output,
            options,
        } => {
            let options = options.resolve().await?;
            let source = load(&input, &options).await?;
            let split = booklet_impose::run_split_document(source.images, &options).await?;
            print_statistics("Split Statistics", &split.statistics);
            publish(split.document, &output).await?;
            println!("Split pages → {}", output.display());
        }

        Commands::Compress {
            input,
            output,
            options,
        } => {
            let options = options.resolve().await?;
            let source = load(&input, &options).await?;
            let compressed = booklet_impose::run_compressed_document(source, &options).await?;
            publish(compressed.document, &output).await?;
            println!(
                "Compressed {} pages → {}",
                compressed.statistics.output_pages,
                output.display()
            );
        }

        Commands::Plan {
            pages,
            mode,
            rotation,
        } => print_plan(pages, mode, rotation)?,
    }

    Ok(())
}
