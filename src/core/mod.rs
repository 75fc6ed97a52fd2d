pub mod cli;
pub mod flatten;
pub mod logging;
pub mod main_shared;
pub mod report;
pub mod types;
