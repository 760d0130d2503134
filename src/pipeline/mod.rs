//! 読み込み → クリーニング → 集計 → 出力 のパイプライン
//!
//! ```no_run
//! use framestat::{Pipeline, PipelineConfig};
//!
//! let report = Pipeline::new(PipelineConfig::default()).run().unwrap();
//! println!("wrote {} artifacts", report.persisted.written.len());
//! ```

pub mod persist;

use crate::cleaning::{drop_missing, fill_missing_median_with, normalize, NormalizationReport};
use crate::config::PipelineConfig;
use crate::dataframe::DataFrame;
use crate::error::Result;
use crate::io::{load_table, TableSource};
use crate::stats::{summarize, SummaryResult};

pub use persist::{persist, PersistReport};

/// クリーニング段階での変更内容
#[derive(Debug, Clone, Default)]
pub struct CleaningReport {
    pub dropped_columns: Vec<String>,
    pub normalized: Vec<NormalizationReport>,
}

/// パイプライン実行の結果一式
#[derive(Debug, Clone)]
pub struct RunReport {
    pub source: TableSource,
    pub rows: usize,
    pub cleaning: CleaningReport,
    pub summary: SummaryResult,
    pub persisted: PersistReport,
}

pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Pipeline { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// 全段階を一度ずつ実行する
    ///
    /// 入力の読み込み失敗以外の入出力エラーは実行を中断する。
    pub fn run(&self) -> Result<RunReport> {
        self.config.validate()?;

        log::info!("=== Dataset Loading ===");
        let loaded = load_table(&self.config.input_path, &self.config.output_dir)?;

        let (frame, cleaning) = self.clean(&loaded.frame)?;

        log::info!("=== Summary Statistics ===");
        let summary = summarize(&frame, self.config.group_by.as_deref());

        log::info!("=== Saving Outputs ===");
        let persisted = persist(
            summary.descriptive.as_ref(),
            summary.groups.as_ref(),
            &self.config.output_paths(),
            self.config.render_plot,
        )?;

        Ok(RunReport {
            source: loaded.source,
            rows: frame.row_count(),
            cleaning,
            summary,
            persisted,
        })
    }

    /// 中央値補完、欠損率による列削除、正規化の順に適用する（設定された段階のみ）
    pub fn clean(&self, df: &DataFrame) -> Result<(DataFrame, CleaningReport)> {
        let mut report = CleaningReport::default();
        let mut frame = df.clone();

        if !self.config.fill_median_columns.is_empty() {
            frame = fill_missing_median_with(
                &frame,
                &self.config.fill_median_columns,
                self.config.median_policy,
            )?;
        }

        if let Some(threshold) = self.config.drop_threshold {
            let result = drop_missing(&frame, threshold)?;
            report.dropped_columns = result.dropped;
            frame = result.frame;
        }

        if !self.config.normalize_columns.is_empty() {
            let result = normalize(&frame, &self.config.normalize_columns)?;
            report.normalized = result.reports;
            frame = result.frame;
        }

        Ok((frame, report))
    }
}
