mod config;
mod error;
mod runner;
mod sequence;

pub mod report;
pub mod strategy;

pub use config::*;
pub use error::{BenchError, Result};
pub use runner::*;
pub use sequence::{arithmetic_sum, InputSequence};
pub use strategy::{Strategy, Summation};
