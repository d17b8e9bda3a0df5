// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use std::io;
use thiserror::Error;

use crate::validate::ValidationError;

#[derive(Error, Debug)]
pub enum NutriError {
    /// No record carries the requested key.
    #[error("{0}")]
    NotFound(String),
    /// The key is already held by another record.
    #[error("{0}")]
    Conflict(String),
    /// Payload rejected before any store access.
    #[error("{0}")]
    BadRequest(String),
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Failure reported by a persistence adapter.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

pub type NutriResult<T> = std::result::Result<T, NutriError>;
pub type Result<T> = NutriResult<T>;
