//! 集計結果のファイル出力
//!
//! 書き込みはトランザクションではない。後の出力が失敗しても先に書いたファイルは残り、
//! エラーはそのまま返す。

use std::path::PathBuf;

use crate::config::OutputPaths;
use crate::error::Result;
use crate::groupby::GroupStats;
use crate::io::{write_group_csv, write_group_json, write_summary_csv, write_summary_json};
use crate::stats::DescriptiveSummary;

/// 書き込んだファイルとスキップしたファイル
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl PersistReport {
    fn skip(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        self.skipped.extend(paths);
    }
}

/// 存在する結果をCSVとJSONに書き出す
///
/// 記述統計量があり `render_plot` が有効な場合は平均値の棒グラフも出力する。
pub fn persist(
    summary: Option<&DescriptiveSummary>,
    groups: Option<&GroupStats>,
    paths: &OutputPaths,
    render_plot: bool,
) -> Result<PersistReport> {
    let mut report = PersistReport::default();

    match summary {
        Some(summary) => {
            write_summary_csv(summary, paths.summary_csv())?;
            write_summary_json(summary, paths.summary_json())?;
            report.written.push(paths.summary_csv());
            report.written.push(paths.summary_json());
            log::info!("Saved summary statistics to CSV and JSON");

            if render_plot {
                render_mean_plot(summary, paths, &mut report)?;
            } else {
                report.skip([paths.plot_png()]);
            }
        }
        None => {
            log::warn!("No descriptive statistics; summary artifacts and plot skipped");
            report.skip([paths.summary_csv(), paths.summary_json(), paths.plot_png()]);
        }
    }

    match groups {
        Some(groups) => {
            write_group_csv(groups, paths.group_summary_csv())?;
            write_group_json(groups, paths.group_summary_json())?;
            report.written.push(paths.group_summary_csv());
            report.written.push(paths.group_summary_json());
            log::info!("Saved group statistics to CSV and JSON");
        }
        None => {
            log::info!("No group statistics; group artifacts skipped");
            report.skip([paths.group_summary_csv(), paths.group_summary_json()]);
        }
    }

    Ok(report)
}

#[cfg(feature = "visualization")]
fn render_mean_plot(
    summary: &DescriptiveSummary,
    paths: &OutputPaths,
    report: &mut PersistReport,
) -> Result<()> {
    use crate::vis::{plot_mean_bars, PlotSettings};

    plot_mean_bars(summary, paths.plot_png(), &PlotSettings::default())?;
    report.written.push(paths.plot_png());
    Ok(())
}

#[cfg(not(feature = "visualization"))]
fn render_mean_plot(
    _summary: &DescriptiveSummary,
    paths: &OutputPaths,
    report: &mut PersistReport,
) -> Result<()> {
    log::warn!("Built without the `visualization` feature; plot skipped");
    report.skip([paths.plot_png()]);
    Ok(())
}
