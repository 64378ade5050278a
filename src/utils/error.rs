// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("HTTP error {status} for {url}")]
    Http { status: reqwest::StatusCode, url: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid output filename. It must end with .csv and not contain quotes.")]
    InvalidFilename,

    #[error("No matching district found for the provided URL.")]
    NoMatchingDistrict,

    #[error("The provided URL does not match any district.")]
    UrlNotListed,

    #[error("The URL doesn't match the district name '{0}' in the output file name. Please verify the URL and filename.")]
    DistrictMismatch(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not load {0}")]
    Unreachable(String),

    #[error("Network error: {0}")]
    Fetch(#[from] FetchError), // Automatically convert fetch errors

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
