//! 欠損値処理と正規化
//!
//! どの関数も入力のDataFrameを変更せず、新しいDataFrameを返します。
//! 存在しない列名・数値でない列は通知をログに出して読み飛ばします。

use serde::{Deserialize, Serialize};

use crate::column::{ColumnTrait, Float64Column};
use crate::dataframe::DataFrame;
use crate::error::{Error, Result};
use crate::na::missing_fractions;
use crate::stats::descriptive::{mean_impl, median_impl, std_impl};

/// `drop_missing` の既定のしきい値
pub const DEFAULT_DROP_THRESHOLD: f64 = 0.5;

/// 全ての値が欠損している列を中央値で埋めようとした場合の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedianFillPolicy {
    /// 列をそのまま残し、警告をログに出す
    #[default]
    LeaveMissing,
    /// `Error::UndefinedMedian` を返す
    Fail,
}

/// 指定列の欠損値を各列の中央値で埋める（`MedianFillPolicy::LeaveMissing`）
pub fn fill_missing_median<S: AsRef<str>>(df: &DataFrame, columns: &[S]) -> Result<DataFrame> {
    fill_missing_median_with(df, columns, MedianFillPolicy::default())
}

/// 指定列の欠損値を各列の中央値で埋める
///
/// 中央値は埋める前の欠損でない値から計算する。欠損でない値は変更されない。
pub fn fill_missing_median_with<S: AsRef<str>>(
    df: &DataFrame,
    columns: &[S],
    policy: MedianFillPolicy,
) -> Result<DataFrame> {
    let mut result = df.clone();

    for name in columns {
        let name: &str = name.as_ref();
        let Some(col) = numeric_column(df, name, "median fill") else {
            continue;
        };

        if col.null_count() == 0 {
            continue;
        }

        match median_impl(&col.valid_values()) {
            Some(median) => {
                log::info!(
                    "Filled {} missing values in '{}' with median {}",
                    col.null_count(),
                    name,
                    median
                );
                result.replace_column(name, col.fill_nulls(median))?;
            }
            None => match policy {
                MedianFillPolicy::LeaveMissing => {
                    log::warn!("Column '{}' has no values; median undefined, left missing", name);
                }
                MedianFillPolicy::Fail => return Err(Error::UndefinedMedian(name.to_string())),
            },
        }
    }

    Ok(result)
}

/// `drop_missing` の結果
#[derive(Debug, Clone)]
pub struct DropMissing {
    /// 列を削除した後のDataFrame
    pub frame: DataFrame,
    /// 削除された列名（元の順序）
    pub dropped: Vec<String>,
}

/// 欠損率が `threshold` を超える列を削除する
///
/// 欠損率がちょうど `threshold` の列は残る。行数は変わらない。
/// 負のしきい値では全列が、1以上では列が一つも削除されない。NaNはエラー。
pub fn drop_missing(df: &DataFrame, threshold: f64) -> Result<DropMissing> {
    if threshold.is_nan() {
        return Err(Error::InvalidInput(
            "しきい値にNaNは指定できません".to_string(),
        ));
    }

    let dropped: Vec<String> = missing_fractions(df)
        .into_iter()
        .filter(|(_, fraction)| *fraction > threshold)
        .map(|(name, _)| name)
        .collect();

    log::info!(
        "Dropped columns with >{}% missing values: {:?}",
        threshold * 100.0,
        dropped
    );

    Ok(DropMissing {
        frame: df.drop_columns(&dropped),
        dropped,
    })
}

/// 正規化前後の平均・標準偏差（いずれも母標準偏差）
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationReport {
    pub column: String,
    pub before_mean: f64,
    pub before_std: f64,
    pub after_mean: f64,
    pub after_std: f64,
}

/// `normalize` の結果
#[derive(Debug, Clone)]
pub struct Normalized {
    pub frame: DataFrame,
    pub reports: Vec<NormalizationReport>,
}

/// 指定列をzスコアで正規化する
///
/// 各値を `(x - 平均) / 標準偏差` に置き換える。標準偏差は母標準偏差（ddof=0）。
/// 分散が0の列は平均を引くだけにする。欠損値は欠損のまま残る。
pub fn normalize<S: AsRef<str>>(df: &DataFrame, columns: &[S]) -> Result<Normalized> {
    let mut frame = df.clone();
    let mut reports = Vec::new();

    for name in columns {
        let name: &str = name.as_ref();
        let Some(col) = numeric_column(df, name, "normalization") else {
            continue;
        };

        let values = col.valid_values();
        if values.is_empty() {
            log::warn!("Column '{}' has no values; normalization skipped", name);
            continue;
        }

        let mean = mean_impl(&values);
        let std = std_impl(&values, 0);
        let scale = if std > 0.0 { std } else { 1.0 };

        let scaled = col.map(|v| (v - mean) / scale);
        let scaled_values = scaled.valid_values();

        let report = NormalizationReport {
            column: name.to_string(),
            before_mean: mean,
            before_std: std,
            after_mean: mean_impl(&scaled_values),
            after_std: std_impl(&scaled_values, 0),
        };
        log::info!(
            "Normalized column '{}': original mean {:.2}, std {:.2}; normalized mean {:.2}, std {:.2}",
            report.column,
            report.before_mean,
            report.before_std,
            report.after_mean,
            report.after_std
        );

        frame.replace_column(name, scaled)?;
        reports.push(report);
    }

    Ok(Normalized { frame, reports })
}

/// 数値列を取得する。見つからない・数値でない場合はログに出してNone
fn numeric_column<'a>(df: &'a DataFrame, name: &str, operation: &str) -> Option<&'a Float64Column> {
    match df.float64_column(name) {
        Ok(col) => Some(col),
        Err(Error::ColumnNotFound(_)) => {
            log::info!("Column '{}' not found; skipped for {}", name, operation);
            None
        }
        Err(e) => {
            log::warn!("Column '{}' skipped for {}: {}", name, operation, e);
            None
        }
    }
}
