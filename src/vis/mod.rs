//! データ可視化機能を提供するモジュール
//!
//! 描画にはplottersを使用し、`visualization` フィーチャーで有効になります。

#[cfg(feature = "visualization")]
pub mod plotters_ext;

#[cfg(feature = "visualization")]
pub use self::plotters_ext::{plot_mean_bars, PlotSettings};
