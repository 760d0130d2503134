//! パイプラインの設定
//!
//! 全項目にデフォルト値があるため、空のTOML（または [`PipelineConfig::default`]）で
//! 標準の実行になる: `data/starter_data.csv` を読み込み、集計結果を `data/processed/` に出力する。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cleaning::MedianFillPolicy;
use crate::error::{Error, Result};

/// デフォルトの入力ファイル
pub const DEFAULT_INPUT_PATH: &str = "data/starter_data.csv";

/// デフォルトの出力ディレクトリ
pub const DEFAULT_OUTPUT_DIR: &str = "data/processed";

/// グループ集計に使うカテゴリ列のデフォルト名
pub const DEFAULT_GROUP_COLUMN: &str = "category";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    /// グループ化する列（`None` でグループ集計を行わない）
    pub group_by: Option<String>,
    /// 欠損値を中央値で補完する列
    pub fill_median_columns: Vec<String>,
    /// 補完対象の列が全て欠損の場合の動作
    pub median_policy: MedianFillPolicy,
    /// 欠損率がこの値を超える列を削除する
    pub drop_threshold: Option<f64>,
    /// 集計前にZスコア正規化する列
    pub normalize_columns: Vec<String>,
    /// 記述統計量がある場合に `basic_plot.png` を出力する
    pub render_plot: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            group_by: Some(DEFAULT_GROUP_COLUMN.to_string()),
            fill_median_columns: Vec::new(),
            median_policy: MedianFillPolicy::default(),
            drop_threshold: None,
            normalize_columns: Vec::new(),
            render_plot: true,
        }
    }
}

impl PipelineConfig {
    /// TOML文字列から設定を読み込む（省略された項目はデフォルト値）
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: PipelineConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// TOMLファイルから設定を読み込む
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(threshold) = self.drop_threshold {
            if threshold.is_nan() {
                return Err(Error::Config("drop_thresholdにNaNは指定できません".to_string()));
            }
        }
        if matches!(&self.group_by, Some(name) if name.trim().is_empty()) {
            return Err(Error::Config("group_by must not be empty".to_string()));
        }
        Ok(())
    }

    /// `output_dir` 以下の出力ファイルのパス
    pub fn output_paths(&self) -> OutputPaths {
        OutputPaths::new(&self.output_dir)
    }
}

/// 出力ディレクトリ以下の固定ファイル名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    dir: PathBuf,
}

impl OutputPaths {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        OutputPaths {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn summary_csv(&self) -> PathBuf {
        self.dir.join("summary.csv")
    }

    pub fn summary_json(&self) -> PathBuf {
        self.dir.join("summary.json")
    }

    pub fn group_summary_csv(&self) -> PathBuf {
        self.dir.join("group_summary.csv")
    }

    pub fn group_summary_json(&self) -> PathBuf {
        self.dir.join("group_summary.json")
    }

    pub fn plot_png(&self) -> PathBuf {
        self.dir.join("basic_plot.png")
    }
}
