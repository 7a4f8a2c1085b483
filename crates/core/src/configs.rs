//! Configuration parsing for the compiled-in build target list

pub mod targets;
