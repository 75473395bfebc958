//! Error types for the stall map.

use crate::model::Floor;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a stall/tenant data provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Failed to read a snapshot file from disk.
    #[error("failed to read '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The JSON snapshot is malformed.
    #[error("invalid JSON snapshot '{path}': {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A CSV table is malformed.
    #[error("invalid CSV table '{path}': {source}")]
    Csv { path: PathBuf, source: csv::Error },

    /// The backend could not serve the request.
    #[error("data provider unavailable: {message}")]
    Unavailable { message: String },
}

/// Authoring errors in a floor plan's region table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Coordinates must come in x,y pairs.
    #[error("{floor} region #{index} ({code}) has an odd number of coordinates")]
    OddCoordinateCount {
        floor: Floor,
        index: usize,
        code: String,
    },

    /// Rectangles are exactly two corners.
    #[error("{floor} region #{index} ({code}) is a rect with {len} coordinates, expected 4")]
    RectArity {
        floor: Floor,
        index: usize,
        code: String,
        len: usize,
    },

    /// Polygons need at least three vertices.
    #[error("{floor} region #{index} ({code}) is a polygon with fewer than 3 vertices")]
    PolygonTooSmall {
        floor: Floor,
        index: usize,
        code: String,
    },

    /// A stall code appears twice on the same floor.
    #[error("{floor} region #{index} repeats stall code {code}")]
    DuplicateCode {
        floor: Floor,
        index: usize,
        code: String,
    },
}
