//! 欠損値（NA, Not Available）の扱い
//!
//! CSVから読み込んだ生の文字列のうち、どれを欠損とみなすかを定義する。

use crate::dataframe::DataFrame;

/// 欠損値として扱うトークン
pub const NA_TOKENS: &[&str] = &["", "NA", "N/A", "NaN", "nan", "null", "NULL", "None", "#N/A"];

/// 文字列が欠損値を表すかどうか
pub fn is_na_token(s: &str) -> bool {
    let trimmed = s.trim();
    NA_TOKENS.iter().any(|token| *token == trimmed)
}

/// 列ごとの欠損数（列の順序を保持）
pub fn null_counts(df: &DataFrame) -> Vec<(String, usize)> {
    df.columns()
        .filter_map(|col| col.name().map(|n| (n.to_string(), col.null_count())))
        .collect()
}

/// 列ごとの欠損率。行数が0の場合は0とする
pub fn missing_fractions(df: &DataFrame) -> Vec<(String, f64)> {
    let rows = df.row_count();
    null_counts(df)
        .into_iter()
        .map(|(name, nulls)| {
            let fraction = if rows == 0 {
                0.0
            } else {
                nulls as f64 / rows as f64
            };
            (name, fraction)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Float64Column;

    #[test]
    fn test_na_tokens() {
        assert!(is_na_token(""));
        assert!(is_na_token("  NA "));
        assert!(is_na_token("NaN"));
        assert!(!is_na_token("0"));
        assert!(!is_na_token("Nan value"));
    }

    #[test]
    fn test_missing_fractions() {
        let mut df = DataFrame::new();
        df.add_column("a", Float64Column::from_options(vec![Some(1.0), None, None, None]))
            .unwrap();
        df.add_column("b", Float64Column::new(vec![1.0, 2.0, 3.0, 4.0])).unwrap();

        assert_eq!(null_counts(&df), vec![("a".to_string(), 3), ("b".to_string(), 0)]);
        assert_eq!(
            missing_fractions(&df),
            vec![("a".to_string(), 0.75), ("b".to_string(), 0.0)]
        );
    }
}
