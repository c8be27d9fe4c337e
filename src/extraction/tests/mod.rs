//! Tests for the extraction module

mod test_utils;
mod binarizer_tests;
mod sampler_tests;
mod interpolator_tests;
