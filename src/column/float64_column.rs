use std::sync::Arc;

use crate::column::common::{utils, ColumnTrait, ColumnType};
use crate::error::{Error, Result};

/// Float64型の列を表す構造体
///
/// 欠損位置はビットマスクで管理し、データ側の該当スロットには `NaN` を置く。
#[derive(Debug, Clone)]
pub struct Float64Column {
    pub(crate) data: Arc<[f64]>,
    pub(crate) null_mask: Option<Arc<[u8]>>,
    pub(crate) name: Option<String>,
}

impl Float64Column {
    /// 新しいFloat64Columnを作成する（`NaN` は欠損として扱う）
    pub fn new(data: Vec<f64>) -> Self {
        let nulls: Vec<bool> = data.iter().map(|v| v.is_nan()).collect();

        Self {
            data: data.into(),
            null_mask: utils::optional_bitmask(&nulls),
            name: None,
        }
    }

    /// Optionのベクトルから作成する（Noneと `NaN` は欠損）
    pub fn from_options(values: Vec<Option<f64>>) -> Self {
        Self::new(values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
    }

    /// 名前を設定する
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// 名前を付けた列を返す
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.set_name(name);
        self
    }

    /// インデックスでデータを取得する
    pub fn get(&self, index: usize) -> Result<Option<f64>> {
        if index >= self.data.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.data.len(),
            });
        }

        if self.is_null(index) {
            return Ok(None);
        }

        Ok(Some(self.data[index]))
    }

    /// 全要素をOptionとして走査する
    pub fn iter(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        (0..self.data.len()).map(move |i| {
            if self.is_null(i) {
                None
            } else {
                Some(self.data[i])
            }
        })
    }

    /// 欠損でない値のみを収集する
    pub fn valid_values(&self) -> Vec<f64> {
        self.iter().flatten().collect()
    }

    /// 欠損でない値のうち指定行のものを収集する
    pub fn valid_values_at(&self, rows: &[usize]) -> Vec<f64> {
        rows.iter()
            .filter_map(|&i| self.get(i).ok().flatten())
            .collect()
    }

    /// 欠損値を指定値で埋めた新しい列を返す
    pub fn fill_nulls(&self, value: f64) -> Self {
        let data: Vec<f64> = self.iter().map(|v| v.unwrap_or(value)).collect();

        Self {
            name: self.name.clone(),
            ..Self::new(data)
        }
    }

    /// マッピング関数を欠損以外の値に適用した新しい列を作成する
    ///
    /// 結果が `NaN` になった要素は欠損になる。
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let mapped_data: Vec<f64> = self
            .iter()
            .map(|v| v.map(&f).unwrap_or(f64::NAN))
            .collect();

        Self {
            name: self.name.clone(),
            ..Self::new(mapped_data)
        }
    }
}

impl ColumnTrait for Float64Column {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::Float64
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn is_null(&self, index: usize) -> bool {
        match &self.null_mask {
            Some(mask) => utils::is_bit_set(mask, index),
            None => false,
        }
    }
}
