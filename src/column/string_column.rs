use std::sync::Arc;

use crate::column::common::{utils, ColumnTrait, ColumnType};
use crate::error::{Error, Result};

/// 文字列型（カテゴリ）の列を表す構造体
#[derive(Debug, Clone)]
pub struct StringColumn {
    pub(crate) data: Arc<[String]>,
    pub(crate) null_mask: Option<Arc<[u8]>>,
    pub(crate) name: Option<String>,
}

impl StringColumn {
    /// 文字列ベクトルから新しいStringColumnを作成する
    pub fn new(data: Vec<String>) -> Self {
        Self {
            data: data.into(),
            null_mask: None,
            name: None,
        }
    }

    /// Optionのベクトルから作成する（Noneは欠損）
    pub fn from_options(values: Vec<Option<String>>) -> Self {
        let nulls: Vec<bool> = values.iter().map(|v| v.is_none()).collect();
        let data: Vec<String> = values.into_iter().map(|v| v.unwrap_or_default()).collect();

        Self {
            data: data.into(),
            null_mask: utils::optional_bitmask(&nulls),
            name: None,
        }
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

    /// インデックスで文字列を取得する
    pub fn get(&self, index: usize) -> Result<Option<&str>> {
        if index >= self.data.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.data.len(),
            });
        }

        if self.is_null(index) {
            return Ok(None);
        }

        Ok(Some(self.data[index].as_str()))
    }

    /// 全要素をOptionとして走査する
    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        (0..self.data.len()).map(move |i| {
            if self.is_null(i) {
                None
            } else {
                Some(self.data[i].as_str())
            }
        })
    }
}

impl ColumnTrait for StringColumn {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::String
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
