// src/utils/error.rs
#![allow(dead_code)]
use thiserror::Error;

// Per-subsystem error types, aggregated into AppError at the top level
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Document has no headings, cannot extract a project title")]
    MissingTitle,

    #[error("Section heading not found: {0}")]
    SectionNotFound(String),

    #[error("Malformed contributor block: {0}")]
    MalformedContributor(String),
}

#[derive(Error, Debug)]
pub enum PageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Extraction failed: {0}")]
    Extract(#[from] ExtractError),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Failed to parse project page: {0}")]
    Page(#[from] PageError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
