//! Common test utilities module
//!
//! Provides shared utilities for tests including:
//! - Temporary workspaces with automatic cleanup
//! - CSV fixture text

#![allow(dead_code)]

pub mod test_utils;

pub use test_utils::{approx_eq, csv_text, TestWorkspace};
