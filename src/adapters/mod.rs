// Adapters layer: reading weather tables and presenting reports.

pub mod chart;
pub mod export;
pub mod summary;
pub mod weather_csv;
