// 記述統計モジュール

use crate::error::{Error, Result};
use crate::stats::DescriptiveStats;

/// 記述統計量を計算する内部実装
pub(crate) fn describe_impl(data: &[f64]) -> Result<DescriptiveStats> {
    if data.is_empty() {
        return Err(Error::EmptyData(
            "記述統計量の計算には少なくとも1つのデータが必要です".into(),
        ));
    }

    let count = data.len();
    let mean = mean_impl(data);

    // 標準偏差の計算（不偏推定量、データが1件の場合はNaN）
    let std = std_impl(data, 1);

    // データをソートして分位数を計算
    let sorted = sorted_copy(data);

    let min = sorted[0];
    let max = sorted[count - 1];

    Ok(DescriptiveStats {
        count,
        mean,
        std,
        min,
        q1: percentile(&sorted, 0.25),
        median: percentile(&sorted, 0.5),
        q3: percentile(&sorted, 0.75),
        max,
    })
}

/// 平均値。空の場合はNaN
pub(crate) fn mean_impl(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// 標準偏差。`ddof` は自由度の補正（標本なら1、母集団なら0）
///
/// 件数が `ddof` 以下の場合はNaN。
pub(crate) fn std_impl(data: &[f64], ddof: usize) -> f64 {
    let n = data.len();
    if n <= ddof {
        return f64::NAN;
    }

    let mean = mean_impl(data);
    let sum_squared_diff = data.iter().map(|&x| (x - mean).powi(2)).sum::<f64>();
    (sum_squared_diff / (n - ddof) as f64).sqrt()
}

/// 中央値。空の場合はNone
pub(crate) fn median_impl(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(percentile(&sorted_copy(data), 0.5))
}

fn sorted_copy(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}

/// パーセンタイルを計算（順序統計量の間を線形補間）
fn percentile(sorted_data: &[f64], p: f64) -> f64 {
    if sorted_data.is_empty() {
        return f64::NAN;
    }

    let n = sorted_data.len();
    let idx = p * (n - 1) as f64;
    let idx_floor = idx.floor() as usize;
    let idx_ceil = idx.ceil() as usize;

    if idx_floor == idx_ceil {
        return sorted_data[idx_floor];
    }

    let weight_ceil = idx - idx_floor as f64;
    let weight_floor = 1.0 - weight_ceil;

    sorted_data[idx_floor] * weight_floor + sorted_data[idx_ceil] * weight_ceil
}
