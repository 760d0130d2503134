//! framestat: 表形式データの集計・クリーニングパイプライン
//!
//! 区切り文字形式のファイルを型付きの [`DataFrame`] に読み込み、必要に応じてクリーニング
//! （中央値補完、欠損率による列削除、Zスコア正規化）を行い、記述統計量とグループ集計を
//! CSV・JSON・PNGに出力します。

pub mod cleaning;
pub mod column;
pub mod config;
pub mod dataframe;
pub mod error;
pub mod groupby;
pub mod io;
pub mod na;
pub mod pipeline;
pub mod stats;
pub mod vis;

// Re-export commonly used types
pub use cleaning::{
    drop_missing, fill_missing_median, fill_missing_median_with, normalize, MedianFillPolicy,
    DEFAULT_DROP_THRESHOLD,
};
pub use column::{Column, ColumnType};
pub use config::{OutputPaths, PipelineConfig};
pub use dataframe::DataFrame;
pub use error::{Error, FrameStatError, Result};
pub use groupby::{AggStats, GroupStats};
pub use pipeline::{persist, Pipeline, RunReport};
pub use stats::{describe_frame, summarize, DescriptiveStats, DescriptiveSummary, SummaryResult};
