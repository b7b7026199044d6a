// Domain layer - Records, chart-ready datasets and load failures
pub mod dataset;
pub mod error;
pub mod number;
pub mod palette;
pub mod record;
