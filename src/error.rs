use thiserror::Error;

/// エラー型の定義
#[derive(Error, Debug)]
pub enum Error {
    #[error("インデックスが範囲外です: インデックス {index}, サイズ {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    #[error("列が見つかりません: {0}")]
    ColumnNotFound(String),

    #[error("列名が重複しています: {0}")]
    DuplicateColumnName(String),

    #[error("行数が一致しません: 期待値 {expected}, 実際 {found}")]
    InconsistentRowCount { expected: usize, found: usize },

    #[error("列の型が一致しません: 列 {name}, 期待値 {expected:?}, 実際 {found:?}")]
    ColumnTypeMismatch {
        name: String,
        expected: crate::column::ColumnType,
        found: crate::column::ColumnType,
    },

    #[error("中央値が定義できません (全ての値が欠損): 列 {0}")]
    UndefinedMedian(String),

    #[error("データがありません: {0}")]
    EmptyData(String),

    #[error("無効な入力です: {0}")]
    InvalidInput(String),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("可視化エラー: {0}")]
    Visualization(String),

    #[error("入出力エラー: {0}")]
    Io(#[source] std::io::Error),

    #[error("CSVエラー: {0}")]
    Csv(#[source] csv::Error),

    #[error("JSONエラー: {0}")]
    Json(#[source] serde_json::Error),

    #[error("TOMLエラー: {0}")]
    Toml(#[source] toml::de::Error),
}

pub type FrameStatError = Error;

/// Resultの型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err)
    }
}

// Plottersエラーの変換
#[cfg(feature = "visualization")]
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for Error
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        Error::Visualization(format!("プロット描画エラー: {}", err))
    }
}
