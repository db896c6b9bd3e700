//! Textquad: text-region overlay geometry for on-device OCR.
//!
//! Textquad maps the normalized (0..1) text-region coordinates produced
//! by a recognition engine into pixel-space shapes — boxes, straight and
//! rounded quadrilaterals, expanded quadrilaterals — ready for an
//! overlay renderer. Recognition itself stays behind the
//! [`RecognitionEngine`](session::RecognitionEngine) trait; this crate
//! owns the geometry and the observation-list state around it.
//!
//! # Modules
//!
//! - [`geom`]: space-tagged points, rectangles, quadrilaterals, and the
//!   normalized-to-pixel projection
//! - [`overlay`]: closed-path shapes and the four shape builders
//! - [`session`]: the engine trait, observations, and the session that
//!   owns them
//! - [`error`]: error types for textquad operations

pub mod error;
pub mod geom;
pub mod overlay;
pub mod session;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use error::{RecognitionError, TextquadError};

use geom::{Projection, Rect};
use overlay::{
    axis_aligned_box, expanded_quad, rounded_quad, straight_quad, OverlayPath,
    DEFAULT_CORNER_RADIUS, DEFAULT_EXPANSION_FACTOR,
};

/// The textquad CLI application.
#[derive(Parser)]
#[command(name = "textquad")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Project recognized observations into pixel-space overlay shapes.
    Project(ProjectArgs),
}

/// Arguments for the project subcommand.
#[derive(clap::Args)]
struct ProjectArgs {
    /// Observations JSON file (an array of recognized regions).
    input: PathBuf,

    /// Target rectangle width in pixels.
    #[arg(long)]
    width: f64,

    /// Target rectangle height in pixels.
    #[arg(long)]
    height: f64,

    /// Target rectangle origin x in pixels.
    #[arg(long, default_value_t = 0.0)]
    origin_x: f64,

    /// Target rectangle origin y in pixels.
    #[arg(long, default_value_t = 0.0)]
    origin_y: f64,

    /// Shape to build ('box', 'quad', 'rounded', or 'expanded').
    #[arg(long, default_value = "quad")]
    shape: String,

    /// Corner radius in pixel units, for 'rounded'.
    #[arg(long, default_value_t = DEFAULT_CORNER_RADIUS)]
    corner_radius: f64,

    /// Expansion factor, for 'expanded' (1.1 = 10% outward).
    #[arg(long, default_value_t = DEFAULT_EXPANSION_FACTOR)]
    expansion: f64,

    /// Write the overlay JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

/// Run the textquad CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), TextquadError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Project(args)) => run_project(args),
        None => {
            // No subcommand: print a banner and exit successfully
            println!("textquad {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Text-region overlay geometry for on-device OCR.");
            println!();
            println!("Run 'textquad --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the project subcommand.
fn run_project(args: ProjectArgs) -> Result<(), TextquadError> {
    let observations = session::io_json::read_observations_json(&args.input)?;

    let projection = Projection::new(Rect::from_xywh(
        args.origin_x,
        args.origin_y,
        args.width,
        args.height,
    ));

    let paths: Vec<OverlayPath> = match args.shape.as_str() {
        "box" => observations
            .iter()
            .map(|obs| axis_aligned_box(&obs.bounds, &projection))
            .collect(),
        "quad" => observations
            .iter()
            .map(|obs| straight_quad(&obs.quad_or_bounds(), &projection))
            .collect(),
        "rounded" => observations
            .iter()
            .map(|obs| rounded_quad(&obs.quad_or_bounds(), &projection, args.corner_radius))
            .collect(),
        "expanded" => observations
            .iter()
            .map(|obs| expanded_quad(&obs.quad_or_bounds(), &projection, args.expansion))
            .collect(),
        other => {
            return Err(TextquadError::UnsupportedShape(format!(
                "'{}' (supported: box, quad, rounded, expanded)",
                other
            )));
        }
    };

    match args.out {
        Some(path) => session::io_json::write_overlay_json(&path, &paths),
        None => {
            let json = session::io_json::to_json_string(&paths)
                .map_err(TextquadError::OverlayEncode)?;
            println!("{}", json);
            Ok(())
        }
    }
}
