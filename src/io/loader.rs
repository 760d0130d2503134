//! 入力ファイルの読み込み
//!
//! 読み込めない場合は組み込みのサンプルテーブルで代替します。

use std::fs;
use std::path::{Path, PathBuf};

use crate::column::{parse_datetime, DateTimeColumn, Float64Column, StringColumn};
use crate::error::Result;
use crate::io::csv::read_csv;
use crate::DataFrame;

/// 読み込んだテーブルの出所
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    /// 指定ファイルから読み込んだ
    File(PathBuf),
    /// 入力を読めなかったためサンプルテーブルを使用した
    Sample,
}

/// テーブルとその出所
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub frame: DataFrame,
    pub source: TableSource,
}

/// 出力ディレクトリを親ごと作成する（既に存在する場合も成功）
pub fn ensure_output_dir<P: AsRef<Path>>(dir: P) -> Result<()> {
    fs::create_dir_all(dir.as_ref())?;
    Ok(())
}

/// 入力を読めない場合に使う3行の固定テーブル
///
/// 列: `value`（数値）、`category`（文字列）、`date`（日時）
pub fn sample_frame() -> Result<DataFrame> {
    let mut df = DataFrame::new();
    df.add_column("value", Float64Column::new(vec![1.0, 2.0, 3.0]))?;
    df.add_column(
        "category",
        StringColumn::new(vec!["A".to_string(), "B".to_string(), "A".to_string()]),
    )?;
    let dates = ["2024-01-01", "2024-01-02", "2024-01-03"]
        .iter()
        .map(|s| parse_datetime(s))
        .collect();
    df.add_column("date", DateTimeColumn::from_options(dates))?;
    Ok(df)
}

/// `output_dir` を作成してから `path` をヘッダー付きCSVとして読み込む
///
/// 入力の読み込み・解析に失敗した場合はサンプルテーブルを返す。
/// 呼び出し元に返るエラーは `output_dir` の作成失敗のみ。
pub fn load_table<P: AsRef<Path>, Q: AsRef<Path>>(path: P, output_dir: Q) -> Result<LoadedTable> {
    ensure_output_dir(&output_dir)?;

    let path = path.as_ref();
    match read_csv(path, true) {
        Ok(frame) => {
            log::info!(
                "Loaded {} rows x {} columns from {}",
                frame.row_count(),
                frame.column_count(),
                path.display()
            );
            Ok(LoadedTable {
                frame,
                source: TableSource::File(path.to_path_buf()),
            })
        }
        Err(e) => {
            log::warn!(
                "Could not load {} ({}); using built-in sample data",
                path.display(),
                e
            );
            Ok(LoadedTable {
                frame: sample_frame()?,
                source: TableSource::Sample,
            })
        }
    }
}

/// [`load_table`] と同じだがテーブルのみを返す
pub fn load_or_sample<P: AsRef<Path>, Q: AsRef<Path>>(path: P, output_dir: Q) -> Result<DataFrame> {
    load_table(path, output_dir).map(|loaded| loaded.frame)
}
