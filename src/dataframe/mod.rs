//! 列指向のDataFrame
//!
//! 名前付きの型付き列を順序付きで保持する。全ての列は同じ行数を持ち、列名は一意である。

use crate::column::{Column, ColumnType, Float64Column};
use crate::error::{Error, Result};

/// 型付き列の順序付きコレクション
#[derive(Debug, Clone, Default)]
pub struct DataFrame {
    columns: Vec<Column>,
    row_count: usize,
}

impl DataFrame {
    /// 空のDataFrameを作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// 列を追加する
    ///
    /// 列名が重複している場合、または行数が既存の列と一致しない場合はエラーを返す。
    pub fn add_column(&mut self, name: impl Into<String>, column: impl Into<Column>) -> Result<()> {
        let name = name.into();
        let mut column = column.into();

        if self.contains_column(&name) {
            return Err(Error::DuplicateColumnName(name));
        }

        if self.columns.is_empty() {
            self.row_count = column.len();
        } else if column.len() != self.row_count {
            return Err(Error::InconsistentRowCount {
                expected: self.row_count,
                found: column.len(),
            });
        }

        column.set_name(name);
        self.columns.push(column);
        Ok(())
    }

    /// 既存の列を同じ位置で置き換える
    pub fn replace_column(&mut self, name: &str, column: impl Into<Column>) -> Result<()> {
        let mut column = column.into();
        if column.len() != self.row_count {
            return Err(Error::InconsistentRowCount {
                expected: self.row_count,
                found: column.len(),
            });
        }

        let position = self
            .position(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))?;
        column.set_name(name);
        self.columns[position] = column;
        Ok(())
    }

    /// 指定した列を除いた新しいDataFrameを返す（行数は保持される）
    pub fn drop_columns(&self, names: &[String]) -> DataFrame {
        let columns = self
            .columns
            .iter()
            .filter(|col| !names.iter().any(|n| Some(n.as_str()) == col.name()))
            .cloned()
            .collect();

        DataFrame {
            columns,
            row_count: self.row_count,
        }
    }

    /// 列名で列を取得する
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|col| col.name() == Some(name))
    }

    /// 列名で数値列を取得する
    pub fn float64_column(&self, name: &str) -> Result<&Float64Column> {
        let column = self
            .column(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))?;

        column.as_float64().ok_or_else(|| Error::ColumnTypeMismatch {
            name: name.to_string(),
            expected: ColumnType::Float64,
            found: column.column_type(),
        })
    }

    /// 列が存在するかどうか
    pub fn contains_column(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|col| col.name() == Some(name))
    }

    /// 列名の一覧（順序付き）
    pub fn column_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter_map(|col| col.name().map(str::to_string))
            .collect()
    }

    /// 数値列の名前一覧（順序付き）
    pub fn numeric_column_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|col| col.column_type().is_numeric())
            .filter_map(|col| col.name().map(str::to_string))
            .collect()
    }

    /// 列を順番に走査する
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    /// 各列の型
    pub fn dtypes(&self) -> Vec<(String, ColumnType)> {
        self.columns
            .iter()
            .filter_map(|col| col.name().map(|n| (n.to_string(), col.column_type())))
            .collect()
    }

    /// 列数
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// 行数
    pub fn row_count(&self) -> usize {
        self.row_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::StringColumn;

    fn sample() -> DataFrame {
        let mut df = DataFrame::new();
        df.add_column("v", Float64Column::new(vec![1.0, 2.0, 3.0])).unwrap();
        df.add_column(
            "category",
            StringColumn::new(vec!["A".into(), "B".into(), "A".into()]),
        )
        .unwrap();
        df
    }

    #[test]
    fn test_add_column_invariants() {
        let mut df = sample();
        assert_eq!(df.row_count(), 3);
        assert_eq!(df.column_names(), vec!["v", "category"]);

        let dup = df.add_column("v", Float64Column::new(vec![0.0, 0.0, 0.0]));
        assert!(matches!(dup, Err(Error::DuplicateColumnName(_))));

        let short = df.add_column("w", Float64Column::new(vec![0.0]));
        assert!(matches!(short, Err(Error::InconsistentRowCount { expected: 3, found: 1 })));
    }

    #[test]
    fn test_drop_columns_keeps_row_count() {
        let df = sample();
        let dropped = df.drop_columns(&["v".to_string(), "category".to_string()]);
        assert_eq!(dropped.column_count(), 0);
        assert_eq!(dropped.row_count(), 3);
        // 元のDataFrameは変更されない
        assert_eq!(df.column_count(), 2);
    }

    #[test]
    fn test_replace_column_keeps_position() {
        let mut df = sample();
        df.replace_column("v", Float64Column::new(vec![7.0, 8.0, 9.0])).unwrap();
        assert_eq!(df.column_names(), vec!["v", "category"]);
        assert_eq!(df.float64_column("v").unwrap().valid_values(), vec![7.0, 8.0, 9.0]);
        assert!(df.replace_column("missing", Float64Column::new(vec![0.0; 3])).is_err());
    }

    #[test]
    fn test_typed_lookup() {
        let df = sample();
        assert_eq!(df.numeric_column_names(), vec!["v"]);
        assert!(matches!(
            df.float64_column("category"),
            Err(Error::ColumnTypeMismatch { .. })
        ));
        assert!(matches!(df.float64_column("nope"), Err(Error::ColumnNotFound(_))));
    }
}
