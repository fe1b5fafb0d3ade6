//! Manifest hygiene and installation suggestions

mod install;

pub use install::suggest_optimizations;
