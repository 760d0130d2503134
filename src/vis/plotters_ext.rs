//! Plottersを使用した棒グラフ出力
//!
//! 記述統計量の各列の平均値を棒グラフとしてPNG画像に描画します。

use std::path::Path;

use plotters::prelude::*;

use crate::error::{FrameStatError, Result};
use crate::stats::DescriptiveSummary;

/// プロットの設定
#[derive(Debug, Clone)]
pub struct PlotSettings {
    /// タイトル
    pub title: String,
    /// Y軸のラベル
    pub y_label: String,
    /// グラフの幅（ピクセル）
    pub width: u32,
    /// グラフの高さ（ピクセル）
    pub height: u32,
    /// グリッドの表示
    pub show_grid: bool,
    /// 棒の色
    pub bar_color: (u8, u8, u8),
}

impl Default for PlotSettings {
    fn default() -> Self {
        PlotSettings {
            title: "Mean Values by Column".to_string(),
            y_label: "Mean Value".to_string(),
            width: 800,
            height: 400,
            show_grid: true,
            bar_color: (0, 123, 255),
        }
    }
}

/// 各数値列の平均値を棒グラフとしてPNGに出力する
///
/// 平均値がNaNの列は棒を描画しない（ラベルのみ）。
pub fn plot_mean_bars<P: AsRef<Path>>(
    summary: &DescriptiveSummary,
    path: P,
    settings: &PlotSettings,
) -> Result<()> {
    let means = summary.means();
    if means.is_empty() {
        return Err(FrameStatError::EmptyData("描画する列がありません".to_string()));
    }

    let names: Vec<String> = means.iter().map(|(name, _)| name.to_string()).collect();
    let (y_min, y_max) = value_range(means.iter().map(|(_, m)| *m));
    let segments = means.len() as u32;

    // PNG出力用のバックエンドを作成
    let root = BitMapBackend::new(path.as_ref(), (settings.width, settings.height))
        .into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&settings.title, ("sans-serif", 24).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d((0u32..segments).into_segmented(), y_min..y_max)?;

    let label = |v: &SegmentValue<u32>| match v {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
            names.get(*i as usize).cloned().unwrap_or_default()
        }
        SegmentValue::Last => String::new(),
    };

    let value_label = |v: &f64| format!("{:.2}", v);

    let mut mesh = chart.configure_mesh();
    mesh.x_labels(names.len())
        .x_label_formatter(&label)
        .y_label_formatter(&value_label)
        .y_desc(settings.y_label.as_str());
    if !settings.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    let (r, g, b) = settings.bar_color;
    let color = RGBColor(r, g, b);

    chart.draw_series(
        means
            .iter()
            .enumerate()
            .filter(|(_, (_, mean))| !mean.is_nan())
            .map(|(i, (_, mean))| {
                let i = i as u32;
                let mut bar = Rectangle::new(
                    [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), *mean)],
                    color.filled(),
                );
                bar.set_margin(0, 0, 10, 10);
                bar
            }),
    )?;

    root.present()?;
    log::info!("Rendered mean bar chart to {}", path.as_ref().display());
    Ok(())
}

/// Y軸の範囲（0を必ず含み、上下に10%の余白）
fn value_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));

    let span = hi - lo;
    if span == 0.0 {
        return (0.0, 1.0);
    }
    let pad = span * 0.1;
    (if lo < 0.0 { lo - pad } else { 0.0 }, if hi > 0.0 { hi + pad } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Float64Column;
    use crate::dataframe::DataFrame;
    use crate::stats::describe_frame;

    #[test]
    fn test_plot_mean_bars_writes_png() {
        let mut df = DataFrame::new();
        df.add_column("a", Float64Column::new(vec![1.0, 2.0, 3.0])).unwrap();
        df.add_column("b", Float64Column::new(vec![-4.0, 8.0, 2.0])).unwrap();
        df.add_column("empty", Float64Column::new(vec![f64::NAN; 3])).unwrap();
        let summary = describe_frame(&df).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("basic_plot.png");
        plot_mean_bars(&summary, &path, &PlotSettings::default()).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"));
    }

    #[test]
    fn test_value_range_includes_zero() {
        let (lo, hi) = value_range([2.0, 4.0].into_iter());
        assert_eq!(lo, 0.0);
        assert!((hi - 4.4).abs() < 1e-12);

        let (lo, hi) = value_range([-5.0, 5.0].into_iter());
        assert!((lo + 6.0).abs() < 1e-12);
        assert!((hi - 6.0).abs() < 1e-12);
        assert_eq!(value_range([f64::NAN].into_iter()), (0.0, 1.0));
        assert_eq!(value_range([0.0].into_iter()), (0.0, 1.0));
    }
}
