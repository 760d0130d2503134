use std::fmt::Debug;
use std::sync::Arc;

use serde::Serialize;

use crate::column::{DateTimeColumn, Float64Column, StringColumn};

/// 列の型を識別するための列挙型
///
/// 型は読み込み時に一度だけ決定され、以降の処理で再推論されることはない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Float64,
    String,
    DateTime,
}

impl ColumnType {
    /// 数値型かどうか
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Float64)
    }

    /// pandas風の型名
    pub fn dtype_name(&self) -> &'static str {
        match self {
            ColumnType::Float64 => "float64",
            ColumnType::String => "object",
            ColumnType::DateTime => "datetime64",
        }
    }
}

/// 列の共通操作を定義するトレイト
pub trait ColumnTrait: Debug + Send + Sync {
    /// 列の長さを返す
    fn len(&self) -> usize;

    /// 列が空かどうかを返す
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 列の型を返す
    fn column_type(&self) -> ColumnType;

    /// 列の名前を返す
    fn name(&self) -> Option<&str>;

    /// 指定位置がNULLかどうか
    fn is_null(&self, index: usize) -> bool;

    /// NULLの個数を返す
    fn null_count(&self) -> usize {
        (0..self.len()).filter(|&i| self.is_null(i)).count()
    }
}

/// 列を表す列挙型
#[derive(Debug, Clone)]
pub enum Column {
    Float64(Float64Column),
    String(StringColumn),
    DateTime(DateTimeColumn),
}

/// 列操作のユーティリティ関数
pub mod utils {
    use super::*;

    /// ブール値のベクトルからビットマスクを作成する
    pub fn create_bitmask(nulls: &[bool]) -> Arc<[u8]> {
        let length = nulls.len();
        let bytes_needed = (length + 7) / 8;
        let mut data = vec![0u8; bytes_needed];

        for (i, &is_null) in nulls.iter().enumerate() {
            if is_null {
                let byte_idx = i / 8;
                let bit_idx = i % 8;
                data[byte_idx] |= 1 << bit_idx;
            }
        }

        data.into()
    }

    /// NULLが一つでも含まれる場合のみビットマスクを作成する
    pub fn optional_bitmask(nulls: &[bool]) -> Option<Arc<[u8]>> {
        if nulls.iter().any(|&is_null| is_null) {
            Some(create_bitmask(nulls))
        } else {
            None
        }
    }

    /// ビットマスク上でビットが立っているか
    pub fn is_bit_set(mask: &[u8], index: usize) -> bool {
        let byte_idx = index / 8;
        let bit_idx = index % 8;
        byte_idx < mask.len() && (mask[byte_idx] & (1 << bit_idx)) != 0
    }
}

// Column enumの実装
impl Column {
    /// 列の長さを返す
    pub fn len(&self) -> usize {
        match self {
            Column::Float64(col) => col.len(),
            Column::String(col) => col.len(),
            Column::DateTime(col) => col.len(),
        }
    }

    /// 列が空かどうかを返す
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 列の型を返す
    pub fn column_type(&self) -> ColumnType {
        match self {
            Column::Float64(_) => ColumnType::Float64,
            Column::String(_) => ColumnType::String,
            Column::DateTime(_) => ColumnType::DateTime,
        }
    }

    /// 列の名前を返す
    pub fn name(&self) -> Option<&str> {
        match self {
            Column::Float64(col) => col.name.as_deref(),
            Column::String(col) => col.name.as_deref(),
            Column::DateTime(col) => col.name.as_deref(),
        }
    }

    /// 名前を設定する
    pub fn set_name(&mut self, name: impl Into<String>) {
        match self {
            Column::Float64(col) => col.set_name(name),
            Column::String(col) => col.set_name(name),
            Column::DateTime(col) => col.set_name(name),
        }
    }

    /// 指定位置がNULLかどうか
    pub fn is_null(&self, index: usize) -> bool {
        match self {
            Column::Float64(col) => col.is_null(index),
            Column::String(col) => col.is_null(index),
            Column::DateTime(col) => col.is_null(index),
        }
    }

    /// NULLの個数を返す
    pub fn null_count(&self) -> usize {
        match self {
            Column::Float64(col) => col.null_count(),
            Column::String(col) => col.null_count(),
            Column::DateTime(col) => col.null_count(),
        }
    }

    /// 数値列として参照する
    pub fn as_float64(&self) -> Option<&Float64Column> {
        match self {
            Column::Float64(col) => Some(col),
            _ => None,
        }
    }

    /// 文字列列として参照する
    pub fn as_string(&self) -> Option<&StringColumn> {
        match self {
            Column::String(col) => Some(col),
            _ => None,
        }
    }

    /// 日時列として参照する
    pub fn as_datetime(&self) -> Option<&DateTimeColumn> {
        match self {
            Column::DateTime(col) => Some(col),
            _ => None,
        }
    }
}

// 型変換のFrom実装
impl From<Float64Column> for Column {
    fn from(col: Float64Column) -> Self {
        Column::Float64(col)
    }
}

impl From<StringColumn> for Column {
    fn from(col: StringColumn) -> Self {
        Column::String(col)
    }
}

impl From<DateTimeColumn> for Column {
    fn from(col: DateTimeColumn) -> Self {
        Column::DateTime(col)
    }
}
