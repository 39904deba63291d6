// src/extractors/mod.rs
pub mod report;

// Re-export key extraction types for convenience
pub use report::ReportSource;
