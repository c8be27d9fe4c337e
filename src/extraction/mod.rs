//! Chart image to numeric series extraction
//!
//! This module reproduces a plotted curve's approximate values from a
//! rasterized line-chart screenshot: pixel decoding, binarization,
//! per-column line position estimation, gap interpolation and
//! pixel-to-value axis mapping, orchestrated into one fail-fast
//! pipeline.

pub mod errors;
pub mod decoder;
pub mod binarizer;
pub mod sampler;
pub mod interpolator;
pub mod mapper;
pub mod pipeline;

#[cfg(test)]
mod tests;

pub use errors::{ChartError, ChartResult};
pub use decoder::{decode_image, RasterImage};
pub use binarizer::{binarize, Mask};
pub use sampler::{sample_columns, ColumnEstimate, DEFAULT_N_POINTS};
pub use interpolator::fill_gaps;
pub use mapper::{map_to_values, AxisCalibration};
pub use pipeline::ExtractionPipeline;
