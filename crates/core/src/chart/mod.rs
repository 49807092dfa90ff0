//! Chart descriptions and rendering.
//!
//! Analyses describe their charts as plain [`Chart`] values; a
//! [`ChartRenderer`] turns them into files. The bundled [`BitmapRenderer`]
//! draws PNG images with `plotters`, styled by an explicit [`ChartStyle`].

mod bitmap;
mod config;
mod error;
mod traits;
mod types;

pub use bitmap::BitmapRenderer;
pub use config::{ChartStyle, Palette};
pub use error::ChartError;
pub use traits::ChartRenderer;
pub use types::{
    BarChart, BoxPlotChart, Chart, ChartLabels, LineChart, Orientation, StackedHistogram,
};
