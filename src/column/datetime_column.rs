use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::column::common::{utils, ColumnTrait, ColumnType};
use crate::error::{Error, Result};

/// 日時の解析に試すフォーマット
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y/%m/%d %H:%M:%S"];

/// 日付のみの解析に試すフォーマット
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// 文字列から日時を解析する（失敗時はNone）
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }

    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_utc())
}

/// 日時型の列を表す構造体
#[derive(Debug, Clone)]
pub struct DateTimeColumn {
    pub(crate) data: Arc<[NaiveDateTime]>,
    pub(crate) null_mask: Option<Arc<[u8]>>,
    pub(crate) name: Option<String>,
}

impl DateTimeColumn {
    /// 新しいDateTimeColumnを作成する
    pub fn new(data: Vec<NaiveDateTime>) -> Self {
        Self {
            data: data.into(),
            null_mask: None,
            name: None,
        }
    }

    /// Optionのベクトルから作成する（Noneは欠損）
    pub fn from_options(values: Vec<Option<NaiveDateTime>>) -> Self {
        let nulls: Vec<bool> = values.iter().map(|v| v.is_none()).collect();
        let data: Vec<NaiveDateTime> = values
            .into_iter()
            .map(|v| v.unwrap_or(NaiveDateTime::MIN))
            .collect();

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

    /// インデックスで日時を取得する
    pub fn get(&self, index: usize) -> Result<Option<NaiveDateTime>> {
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
}

impl ColumnTrait for DateTimeColumn {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::DateTime
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
