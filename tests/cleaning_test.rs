mod common;

use common::approx_eq;
use framestat::column::{Float64Column, StringColumn};
use framestat::{
    describe_frame, drop_missing, fill_missing_median, fill_missing_median_with, normalize,
    DataFrame, Error, MedianFillPolicy, DEFAULT_DROP_THRESHOLD,
};

fn frame_with_gaps() -> DataFrame {
    let mut df = DataFrame::new();
    df.add_column(
        "price",
        Float64Column::from_options(vec![Some(10.0), None, Some(30.0), Some(20.0), None]),
    )
    .unwrap();
    df.add_column(
        "qty",
        Float64Column::from_options(vec![None, None, None, Some(1.0), Some(2.0)]),
    )
    .unwrap();
    df.add_column(
        "label",
        StringColumn::from_options(vec![
            Some("a".into()),
            None,
            Some("c".into()),
            Some("d".into()),
            Some("e".into()),
        ]),
    )
    .unwrap();
    df
}

#[test]
fn test_fill_missing_median_fills_with_pre_fill_median() {
    let df = frame_with_gaps();
    let filled = fill_missing_median(&df, &["price", "qty"]).unwrap();

    let price = filled.float64_column("price").unwrap();
    assert_eq!(price.valid_values(), vec![10.0, 20.0, 30.0, 20.0, 20.0]);

    let qty = filled.float64_column("qty").unwrap();
    assert_eq!(qty.valid_values(), vec![1.5, 1.5, 1.5, 1.0, 2.0]);
}

#[test]
fn test_nan_values_are_filled_and_excluded_from_stats() {
    let mut df = DataFrame::new();
    df.add_column("v", Float64Column::new(vec![1.0, f64::NAN, 3.0, 8.0]))
        .unwrap();

    let stats = describe_frame(&df).unwrap();
    let v = stats.get("v").unwrap();
    assert_eq!(v.count, 3);
    assert!(approx_eq(v.mean, 4.0));
    assert!(approx_eq(v.median, 3.0));

    let filled = fill_missing_median(&df, &["v"]).unwrap();
    assert_eq!(
        filled.float64_column("v").unwrap().valid_values(),
        vec![1.0, 3.0, 3.0, 8.0]
    );
    assert_eq!(filled.column("v").unwrap().null_count(), 0);
}

#[test]
fn test_fill_missing_median_is_idempotent() {
    let df = frame_with_gaps();
    let once = fill_missing_median(&df, &["price", "qty"]).unwrap();
    let twice = fill_missing_median(&once, &["price", "qty"]).unwrap();

    for name in ["price", "qty"] {
        assert_eq!(
            once.float64_column(name).unwrap().valid_values(),
            twice.float64_column(name).unwrap().valid_values()
        );
    }
}

#[test]
fn test_fill_missing_median_skips_unknown_and_non_numeric() {
    let df = frame_with_gaps();
    let filled = fill_missing_median(&df, &["nope", "label"]).unwrap();
    assert_eq!(filled.column_names(), df.column_names());
    assert_eq!(filled.column("label").unwrap().null_count(), 1);
}

#[test]
fn test_fill_missing_median_all_missing() {
    let mut df = DataFrame::new();
    df.add_column("blank", Float64Column::from_options(vec![None, None, None]))
        .unwrap();

    let left = fill_missing_median_with(&df, &["blank"], MedianFillPolicy::LeaveMissing).unwrap();
    assert_eq!(left.column("blank").unwrap().null_count(), 3);

    let err = fill_missing_median_with(&df, &["blank"], MedianFillPolicy::Fail).unwrap_err();
    assert!(matches!(err, Error::UndefinedMedian(_)));
}

#[test]
fn test_drop_missing_never_drops_at_or_below_threshold() {
    let df = frame_with_gaps();
    // price: 0.4, qty: 0.6, label: 0.2
    for threshold in [-0.1, 0.0, 0.2, 0.4, DEFAULT_DROP_THRESHOLD, 0.6, 1.0, 1.5] {
        let result = drop_missing(&df, threshold).unwrap();
        assert_eq!(result.frame.row_count(), df.row_count());

        for column in df.columns() {
            let name = column.name().unwrap();
            let fraction = column.null_count() as f64 / df.row_count() as f64;
            let dropped = result.dropped.iter().any(|d| d == name);
            assert_eq!(dropped, fraction > threshold, "column {} at {}", name, threshold);
            assert_eq!(result.frame.contains_column(name), !dropped);
        }
    }
}

#[test]
fn test_drop_missing_threshold_outside_unit_range() {
    let df = frame_with_gaps();

    let every = drop_missing(&df, -0.1).unwrap();
    assert_eq!(every.dropped, vec!["price", "qty", "label"]);
    assert_eq!(every.frame.column_count(), 0);
    assert_eq!(every.frame.row_count(), 5);

    let none = drop_missing(&df, 1.5).unwrap();
    assert!(none.dropped.is_empty());
    assert_eq!(none.frame.column_names(), df.column_names());
}

#[test]
fn test_drop_missing_default_threshold() {
    let df = frame_with_gaps();
    let result = drop_missing(&df, DEFAULT_DROP_THRESHOLD).unwrap();
    assert_eq!(result.dropped, vec!["qty"]);
    assert_eq!(result.frame.column_names(), vec!["price", "label"]);
}

#[test]
fn test_normalize_zero_mean_unit_std() {
    let mut df = DataFrame::new();
    df.add_column("a", Float64Column::new(vec![3.0, 7.0, 1.0, 9.0, 15.0]))
        .unwrap();
    df.add_column("b", Float64Column::new(vec![-2.0, 0.5, 100.0, 4.0, 4.0]))
        .unwrap();

    let result = normalize(&df, &["a", "b"]).unwrap();
    for name in ["a", "b"] {
        let values = result.frame.float64_column(name).unwrap().valid_values();
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let std = (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt();
        assert!(mean.abs() < 1e-9, "{} mean {}", name, mean);
        assert!(approx_eq(std, 1.0), "{} std {}", name, std);
    }

    assert_eq!(result.reports.len(), 2);
    assert!(approx_eq(result.reports[0].before_mean, 7.0));
    assert!(approx_eq(result.reports[0].after_std, 1.0));
    // 入力は変更されない
    assert_eq!(df.float64_column("a").unwrap().get(0).unwrap(), Some(3.0));
}
