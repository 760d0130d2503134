use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::column::{ColumnType, Float64Column};
use crate::dataframe::DataFrame;
use crate::error::{Error, Result};
use crate::stats::descriptive::{mean_impl, median_impl, std_impl};

/// グループごとの集計値（平均・中央値・標準偏差）
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct AggStats {
    pub mean: f64,
    pub median: f64,
    /// 標準偏差（不偏推定量）
    pub std: f64,
}

impl AggStats {
    /// 値の集合から集計値を計算する。空ならすべてNaN
    pub fn from_values(values: &[f64]) -> Self {
        AggStats {
            mean: mean_impl(values),
            median: median_impl(values).unwrap_or(f64::NAN),
            std: std_impl(values, 1),
        }
    }
}

/// 1グループ分の集計結果
#[derive(Debug, Clone)]
pub struct GroupRow {
    /// グループのキー
    pub key: String,
    /// グループに属する行数
    pub size: usize,
    /// `GroupStats::columns` と同じ順序の集計値
    pub stats: Vec<AggStats>,
}

/// カテゴリ列でグループ化した集計結果
///
/// グループはキーの昇順に並ぶ。キーが欠損している行はどのグループにも含まれない。
#[derive(Debug, Clone)]
pub struct GroupStats {
    by: String,
    columns: Vec<String>,
    groups: Vec<GroupRow>,
}

impl GroupStats {
    /// グループ化に使用した列名
    pub fn by(&self) -> &str {
        &self.by
    }

    /// 集計対象の数値列
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// グループ（キー昇順）
    pub fn groups(&self) -> &[GroupRow] {
        &self.groups
    }

    /// キーの一覧
    pub fn keys(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.key.as_str()).collect()
    }

    /// 指定グループ・列の集計値を取得する
    pub fn get(&self, key: &str, column: &str) -> Option<&AggStats> {
        let col_idx = self.columns.iter().position(|c| c == column)?;
        self.groups
            .iter()
            .find(|g| g.key == key)
            .and_then(|g| g.stats.get(col_idx))
    }
}

// {group: {column: {mean, median, std}}}
impl Serialize for GroupStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        struct Row<'a>(&'a [String], &'a [AggStats]);

        impl Serialize for Row<'_> {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for (column, stats) in self.0.iter().zip(self.1.iter()) {
                    map.serialize_entry(column, stats)?;
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.key, &Row(&self.columns, &group.stats))?;
        }
        map.end()
    }
}

/// DataFrameのグループ化機能
pub struct DataFrameGroupBy<'a> {
    /// グループ化された行インデックス（キー昇順）
    groups: BTreeMap<String, Vec<usize>>,

    /// 元のDataFrame
    source: &'a DataFrame,

    /// グループ化に使用した列名
    by: String,
}

impl<'a> DataFrameGroupBy<'a> {
    /// 文字列列 `by` の値でグループを作成
    pub fn new(source: &'a DataFrame, by: &str) -> Result<Self> {
        let column = source
            .column(by)
            .ok_or_else(|| Error::ColumnNotFound(by.to_string()))?;

        let keys = column.as_string().ok_or_else(|| Error::ColumnTypeMismatch {
            name: by.to_string(),
            expected: ColumnType::String,
            found: column.column_type(),
        })?;

        let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (i, key) in keys.iter().enumerate() {
            if let Some(key) = key {
                groups.entry(key.to_string()).or_default().push(i);
            }
        }

        Ok(DataFrameGroupBy {
            groups,
            source,
            by: by.to_string(),
        })
    }

    /// グループ列以外の全数値列について平均・中央値・標準偏差を計算
    ///
    /// 集計対象の数値列が一つもない場合はNone。
    pub fn agg(&self) -> Option<GroupStats> {
        let targets: Vec<(String, &Float64Column)> = self
            .source
            .columns()
            .filter(|col| col.name() != Some(self.by.as_str()))
            .filter_map(|col| match (col.name(), col.as_float64()) {
                (Some(name), Some(values)) => Some((name.to_string(), values)),
                _ => None,
            })
            .collect();

        if targets.is_empty() {
            return None;
        }

        let groups = self
            .groups
            .iter()
            .map(|(key, rows)| GroupRow {
                key: key.clone(),
                size: rows.len(),
                stats: targets
                    .iter()
                    .map(|(_, col)| AggStats::from_values(&col.valid_values_at(rows)))
                    .collect(),
            })
            .collect();

        Some(GroupStats {
            by: self.by.clone(),
            columns: targets.into_iter().map(|(name, _)| name).collect(),
            groups,
        })
    }
}

/// `by` 列でグループ化した集計値を計算する
///
/// 列が存在しない、または集計対象の数値列がない場合はNone。
/// 列が文字列型でない場合は `Error::ColumnTypeMismatch`。
pub fn group_stats(df: &DataFrame, by: &str) -> Result<Option<GroupStats>> {
    if !df.contains_column(by) {
        return Ok(None);
    }
    Ok(DataFrameGroupBy::new(df, by)?.agg())
}
