use std::process::ExitCode;

use framestat::{Pipeline, PipelineConfig};
use tracing_subscriber::filter::LevelFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::INFO)
        .with_target(false)
        .init();

    match Pipeline::new(PipelineConfig::default()).run() {
        Ok(report) => {
            for (column, dtype) in &report.summary.dtypes {
                log::info!("{}: {}", column, dtype.dtype_name());
            }
            for (column, nulls) in &report.summary.null_counts {
                log::info!("{} missing: {}", column, nulls);
            }
            log::info!(
                "Pipeline finished: {} rows, {} artifacts written",
                report.rows,
                report.persisted.written.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Pipeline failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
