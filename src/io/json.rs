use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::{FrameStatError, Result};
use crate::groupby::GroupStats;
use crate::stats::DescriptiveSummary;

/// 任意のシリアライズ可能な値を整形済みJSONとして書き込む
///
/// NaNは `null` として出力される。
pub fn write_json<T: Serialize + ?Sized, P: AsRef<Path>>(value: &T, path: P) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(FrameStatError::Io)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, value).map_err(FrameStatError::Json)?;
    writer.flush().map_err(FrameStatError::Io)?;

    Ok(())
}

/// 記述統計量を `{列: {count, mean, ...}}` 形式で書き込む
pub fn write_summary_json<P: AsRef<Path>>(summary: &DescriptiveSummary, path: P) -> Result<()> {
    write_json(summary, path)
}

/// グループ集計を `{グループ: {列: {mean, median, std}}}` 形式で書き込む
pub fn write_group_json<P: AsRef<Path>>(groups: &GroupStats, path: P) -> Result<()> {
    write_json(groups, path)
}
