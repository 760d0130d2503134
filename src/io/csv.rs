use csv::{ReaderBuilder, Writer};
use std::fs::File;
use std::path::Path;

use crate::column::{parse_datetime, Column, DateTimeColumn, Float64Column, StringColumn};
use crate::error::{FrameStatError, Result};
use crate::groupby::GroupStats;
use crate::na::is_na_token;
use crate::stats::{DescriptiveStats, DescriptiveSummary};
use crate::DataFrame;

/// CSVファイルからDataFrameを読み込む
///
/// 各列の型は次の順で推論する: 欠損以外が全て数値なら数値列、全て日時として解析できれば
/// 日時列、それ以外は文字列列。
pub fn read_csv<P: AsRef<Path>>(path: P, has_header: bool) -> Result<DataFrame> {
    let file = File::open(path.as_ref()).map_err(FrameStatError::Io)?;

    // CSVリーダーを設定
    let mut rdr = ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut records = Vec::new();
    for result in rdr.records() {
        records.push(result.map_err(FrameStatError::Csv)?);
    }

    // ヘッダー行を取得
    let headers: Vec<String> = if has_header {
        rdr.headers()
            .map_err(FrameStatError::Csv)?
            .iter()
            .map(|h| h.to_string())
            .collect()
    } else {
        // ヘッダーがない場合は"column_0", "column_1"などとする
        let width = records.iter().map(|r| r.len()).max().unwrap_or(0);
        (0..width).map(|i| format!("column_{}", i)).collect()
    };

    // データを列ごとに収集（足りないセルは欠損扱い）
    let mut raw: Vec<Vec<String>> = vec![Vec::with_capacity(records.len()); headers.len()];
    for record in &records {
        for (i, cells) in raw.iter_mut().enumerate() {
            cells.push(record.get(i).unwrap_or("").to_string());
        }
    }

    let mut df = DataFrame::new();
    for (header, cells) in headers.into_iter().zip(raw) {
        df.add_column(header, infer_column(cells))?;
    }

    Ok(df)
}

/// 生の文字列から列の型を推論する
pub(crate) fn infer_column(cells: Vec<String>) -> Column {
    let present: Vec<&str> = cells
        .iter()
        .map(|s| s.as_str())
        .filter(|s| !is_na_token(s))
        .collect();

    if present.iter().all(|s| s.parse::<f64>().is_ok()) {
        let values = cells
            .iter()
            .map(|s| {
                if is_na_token(s) {
                    None
                } else {
                    s.parse::<f64>().ok().filter(|v| !v.is_nan())
                }
            })
            .collect();
        return Float64Column::from_options(values).into();
    }

    if present.iter().all(|s| parse_datetime(s).is_some()) {
        let values = cells
            .iter()
            .map(|s| if is_na_token(s) { None } else { parse_datetime(s) })
            .collect();
        return DateTimeColumn::from_options(values).into();
    }

    let values = cells
        .into_iter()
        .map(|s| if is_na_token(&s) { None } else { Some(s) })
        .collect();
    StringColumn::from_options(values).into()
}

/// 数値をCSVセルに整形する（NaNは空セル）
fn format_cell(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

/// 記述統計量をCSVファイルに書き込む
///
/// 1行目は空セルに続けて列名、以降は `count, mean, std, min, 25%, 50%, 75%, max` の各行。
pub fn write_summary_csv<P: AsRef<Path>>(summary: &DescriptiveSummary, path: P) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(FrameStatError::Io)?;
    let mut wtr = Writer::from_writer(file);

    let mut header = vec![String::new()];
    header.extend(summary.column_names().iter().map(|s| s.to_string()));
    wtr.write_record(&header).map_err(FrameStatError::Csv)?;

    for (row, label) in DescriptiveStats::LABELS.iter().enumerate() {
        let mut record = vec![label.to_string()];
        for entry in summary.columns() {
            let cell = if row == 0 {
                entry.stats.count.to_string()
            } else {
                format_cell(entry.stats.values()[row])
            };
            record.push(cell);
        }
        wtr.write_record(&record).map_err(FrameStatError::Csv)?;
    }

    wtr.flush().map_err(FrameStatError::Io)?;
    Ok(())
}

/// グループ集計をCSVファイルに書き込む
///
/// ヘッダーは `<グループ列>, <列>.mean, <列>.median, <列>.std, ...`、1グループ1行。
pub fn write_group_csv<P: AsRef<Path>>(groups: &GroupStats, path: P) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(FrameStatError::Io)?;
    let mut wtr = Writer::from_writer(file);

    let mut header = vec![groups.by().to_string()];
    for column in groups.columns() {
        for agg in ["mean", "median", "std"] {
            header.push(format!("{}.{}", column, agg));
        }
    }
    wtr.write_record(&header).map_err(FrameStatError::Csv)?;

    for group in groups.groups() {
        let mut record = vec![group.key.clone()];
        for stats in &group.stats {
            record.push(format_cell(stats.mean));
            record.push(format_cell(stats.median));
            record.push(format_cell(stats.std));
        }
        wtr.write_record(&record).map_err(FrameStatError::Csv)?;
    }

    wtr.flush().map_err(FrameStatError::Io)?;
    Ok(())
}
