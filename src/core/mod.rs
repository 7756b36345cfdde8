pub mod engine;
pub mod filter;
pub mod pipeline;
pub mod range;
pub mod report;
pub mod smoothing;
pub mod statistics;

pub use crate::domain::model::{
    AggregatePair, Report, Series, TrendPoint, YearRange, YearlyObservation,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
