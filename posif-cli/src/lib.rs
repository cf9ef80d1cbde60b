//! Pipeline orchestration for the `posif` binary.
//!
//! The binary parses arguments and hands a [`pipeline::PipelineOptions`] to
//! [`pipeline::run`], which validates the inputs, detects and annotates
//! regions per coverage track and writes the result files.

pub mod config;
pub mod pipeline;
