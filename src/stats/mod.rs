// framestat 統計モジュール
//
// 数値列の記述統計量と、カテゴリ列によるグループ集計をまとめた要約を計算します。

pub mod descriptive;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::column::ColumnType;
use crate::dataframe::DataFrame;
use crate::error::Result;
use crate::groupby::{group_stats, GroupStats};
use crate::na::null_counts;

/// データの基本統計量を計算
///
/// # 例
/// ```rust
/// use framestat::stats;
///
/// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let stats = stats::describe(&data).unwrap();
/// assert_eq!(stats.count, 5);
/// assert_eq!(stats.mean, 3.0);
/// ```
pub fn describe<T: AsRef<[f64]>>(data: T) -> Result<DescriptiveStats> {
    descriptive::describe_impl(data.as_ref())
}

/// 記述統計量の結果を保持する構造体
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DescriptiveStats {
    /// データの件数
    pub count: usize,
    /// 平均値
    pub mean: f64,
    /// 標準偏差（不偏推定量）
    pub std: f64,
    /// 最小値
    pub min: f64,
    /// 25%分位点
    #[serde(rename = "25%")]
    pub q1: f64,
    /// 中央値（50%分位点）
    #[serde(rename = "50%")]
    pub median: f64,
    /// 75%分位点
    #[serde(rename = "75%")]
    pub q3: f64,
    /// 最大値
    pub max: f64,
}

impl DescriptiveStats {
    /// 行ラベル（出力の行順）
    pub const LABELS: [&'static str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

    /// 有効な値が一つもない列の統計量（件数0、他はNaN）
    pub fn empty() -> Self {
        DescriptiveStats {
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q1: f64::NAN,
            median: f64::NAN,
            q3: f64::NAN,
            max: f64::NAN,
        }
    }

    /// `LABELS` と同じ順序の値
    pub fn values(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.q1,
            self.median,
            self.q3,
            self.max,
        ]
    }
}

/// 1列分の記述統計量
#[derive(Debug, Clone)]
pub struct ColumnStats {
    pub column: String,
    pub stats: DescriptiveStats,
}

/// 全数値列の記述統計量（列の順序はDataFrameと同じ）
#[derive(Debug, Clone)]
pub struct DescriptiveSummary {
    columns: Vec<ColumnStats>,
}

impl DescriptiveSummary {
    /// 列ごとの統計量
    pub fn columns(&self) -> &[ColumnStats] {
        &self.columns
    }

    /// 列名で統計量を取得する
    pub fn get(&self, column: &str) -> Option<&DescriptiveStats> {
        self.columns
            .iter()
            .find(|c| c.column == column)
            .map(|c| &c.stats)
    }

    /// 列名の一覧
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.column.as_str()).collect()
    }

    /// 各列の平均値
    pub fn means(&self) -> Vec<(&str, f64)> {
        self.columns
            .iter()
            .map(|c| (c.column.as_str(), c.stats.mean))
            .collect()
    }
}

// {column: {count, mean, ...}}（列の順序を保持）
impl Serialize for DescriptiveSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for entry in &self.columns {
            map.serialize_entry(&entry.column, &entry.stats)?;
        }
        map.end()
    }
}

/// DataFrameの全数値列の記述統計量を計算する
///
/// 数値列が一つもない場合はNone。
pub fn describe_frame(df: &DataFrame) -> Option<DescriptiveSummary> {
    let columns: Vec<ColumnStats> = df
        .columns()
        .filter_map(|col| {
            let name = col.name()?;
            let values = col.as_float64()?.valid_values();
            let stats = describe(&values).unwrap_or_else(|_| DescriptiveStats::empty());
            Some(ColumnStats {
                column: name.to_string(),
                stats,
            })
        })
        .collect();

    if columns.is_empty() {
        None
    } else {
        Some(DescriptiveSummary { columns })
    }
}

/// 1回のパイプライン実行で得られる要約結果
#[derive(Debug, Clone)]
pub struct SummaryResult {
    /// 数値列の記述統計量
    pub descriptive: Option<DescriptiveSummary>,
    /// グループ集計
    pub groups: Option<GroupStats>,
    /// 各列の型
    pub dtypes: Vec<(String, ColumnType)>,
    /// 各列の欠損数
    pub null_counts: Vec<(String, usize)>,
}

/// 記述統計量とグループ集計をまとめて計算する
///
/// グループ列が存在しない、または文字列型でない場合はグループ集計を省略する。
pub fn summarize(df: &DataFrame, group_by: Option<&str>) -> SummaryResult {
    let descriptive = describe_frame(df);
    if descriptive.is_none() {
        log::warn!("No numeric columns found; descriptive statistics skipped");
    }

    let groups = match group_by {
        Some(by) if descriptive.is_some() => match group_stats(df, by) {
            Ok(Some(groups)) => Some(groups),
            Ok(None) => {
                log::info!("No usable '{}' column found for groupby operations", by);
                None
            }
            Err(e) => {
                log::warn!("Group statistics skipped: {}", e);
                None
            }
        },
        _ => None,
    };

    SummaryResult {
        descriptive,
        groups,
        dtypes: df.dtypes(),
        null_counts: null_counts(df),
    }
}
