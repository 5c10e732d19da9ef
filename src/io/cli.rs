//! Command-line front end painting an in-memory canvas and reporting on it

use crate::analysis::statistics::PaintingSummary;
use crate::canvas::Canvas;
use crate::io::configuration::{DEFAULT_HEIGHT, DEFAULT_WIDTH, PaintConfig};
use crate::io::error::Result;
use crate::io::logging::LoggingConfig;
use crate::painting::Mondrian;
use clap::{Parser, ValueEnum};

/// Leaf coloring strategy selectable from the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PaintingMode {
    /// Every palette color equally likely everywhere
    #[default]
    #[value(alias = "basic")]
    Uniform,
    /// Colors drift from red (top-left) to cyan (bottom-right)
    #[value(alias = "complex")]
    Weighted,
}

#[derive(Parser, Debug)]
#[command(name = "mondrian")]
#[command(
    author,
    version,
    about = "Paint Mondrian-style art by recursive subdivision"
)]
/// Command-line arguments for the painter
pub struct Cli {
    /// Canvas width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Leaf coloring strategy
    #[arg(short, long, value_enum, default_value_t = PaintingMode::Uniform)]
    pub mode: PaintingMode,

    /// Random seed for reproducible paintings; OS entropy when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress the summary report
    #[arg(short, long)]
    pub quiet: bool,

    /// Log filter in `env_logger` syntax (e.g. "debug", "mondrian=trace")
    #[arg(short, long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Painter configuration described by the arguments
    pub const fn paint_config(&self) -> PaintConfig {
        PaintConfig { seed: self.seed }
    }

    /// Logger configuration described by the arguments
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            env_filter: self.log_level.clone(),
            ..LoggingConfig::default()
        }
    }

    /// Paint a fresh canvas according to the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the requested canvas is too small to paint
    pub fn run(&self) -> Result<PaintingSummary> {
        let mut canvas = Canvas::new(self.width, self.height);
        let mut painter = Mondrian::new(self.paint_config());

        let painting = match self.mode {
            PaintingMode::Uniform => painter.paint_uniform(&mut canvas)?,
            PaintingMode::Weighted => painter.paint_weighted(&mut canvas)?,
        };

        let summary = PaintingSummary::from_painting(&canvas, &painting);
        log::info!(
            "painted {}x{} canvas in {:?} mode: {} leaves, depth {}",
            self.width,
            self.height,
            self.mode,
            summary.leaf_count,
            summary.max_depth
        );
        Ok(summary)
    }
}
