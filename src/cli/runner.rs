use tracing::info;

use docprep::api::{process_directory_to_path, process_image_to_path};
use docprep::core::params::ProcessingParams;
use docprep::types::Padding;

use super::args::CliArgs;
use super::errors::AppError;

fn build_params(args: &CliArgs) -> Result<ProcessingParams, Box<dyn std::error::Error>> {
    if let Some(preset) = &args.params {
        return Ok(ProcessingParams::from_json_file(preset)?);
    }

    let height = if args.height == "original" {
        None
    } else {
        let parsed = args
            .height
            .parse::<usize>()
            .map_err(|_| AppError::InvalidHeight {
                height: args.height.clone(),
            })?;

        if parsed == 0 {
            return Err(AppError::ZeroHeight { height: parsed }.into());
        }

        Some(parsed)
    };

    let padding: Padding = args.padding.parse()?;

    Ok(ProcessingParams {
        format: args.format,
        threshold: args.threshold,
        padding,
        height,
    })
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = build_params(&args)?;
    let batch_mode = args.batch || args.input_dir.is_some();

    if batch_mode {
        let input_dir = args.input_dir.ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;
        let output_dir = args.output_dir.ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;

        info!("Starting batch processing from directory: {:?}", input_dir);
        info!("Output directory: {:?}", output_dir);

        let report = process_directory_to_path(&input_dir, &output_dir, &params, true)?;

        info!("Batch processing complete!");
        info!("Processed: {}", report.processed);
        info!("Skipped: {}", report.skipped);
        info!("Errors: {}", report.errors);
    } else {
        let input = args.input.ok_or(AppError::MissingArgument {
            arg: "--input".to_string(),
        })?;
        let output = args.output.ok_or(AppError::MissingArgument {
            arg: "--output".to_string(),
        })?;

        process_image_to_path(&input, &output, &params)?;
        info!("Successfully processed: {:?} -> {:?}", input, output);
    }

    Ok(())
}
