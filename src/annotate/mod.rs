pub mod span;
pub mod config;
pub mod error;
pub mod offset;
pub mod patterns;
pub mod merge;
pub mod stats;
pub mod cortex;


pub use span::*;
pub use config::*;
pub use error::*;
pub use stats::*;
pub use cortex::*;
