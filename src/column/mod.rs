mod common;
mod datetime_column;
mod float64_column;
mod string_column;

pub use common::{utils, Column, ColumnTrait, ColumnType};
pub use datetime_column::{parse_datetime, DateTimeColumn};
pub use float64_column::Float64Column;
pub use string_column::StringColumn;
