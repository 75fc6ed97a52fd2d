pub mod core;

// Re-export key items for easy importing in this crate
pub use crate::core::types;

// Re-export key items for easy importing in other crates
pub use crate::core::flatten::{SUBTEST_SEPARATOR, parse_raw_results, process_raw_results};
pub use crate::core::main_shared::run_main;
pub use crate::core::report::{process_json, render_report};
