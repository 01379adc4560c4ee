use clap::Parser;
use std::path::PathBuf;

use docprep::types::OutputFormat;
use docprep::ThresholdStrategy;

#[derive(Parser)]
#[command(name = "docprep", version, about = "DOCPREP CLI")]
pub struct CliArgs {
    /// Input image file (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input directory containing image files (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output filename (single file mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output directory for batch processing (batch mode)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Output format (png or jpeg)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,

    /// Threshold policy for deriving the foreground mask (otsu or fixed)
    #[arg(long, value_enum, default_value_t = ThresholdStrategy::Otsu)]
    pub threshold: ThresholdStrategy,

    /// Padding around the cropped foreground. Options:
    /// - Uniform: a single integer (e.g. 8)
    /// - Per side: "left,right,top,bottom" (e.g. 8,8,4,4)
    #[arg(long, default_value = "0")]
    pub padding: String,

    /// Target output height in pixels (keeps ratio), or "original"
    #[arg(long, default_value = "original")]
    pub height: String,

    /// Optional JSON parameter preset; overrides the processing flags above
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Batch mode: continue processing other files when one fails
    #[arg(long, default_value_t = false)]
    pub batch: bool,
}
