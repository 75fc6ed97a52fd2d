pub mod config;
mod error;
mod results;
mod scores;

pub use error::*;
pub use results::*;
pub use scores::*;
