// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Graphia.

use thiserror::Error;

/// Top-level error type for all Graphia operations.
#[derive(Debug, Error)]
pub enum GraphiaError {
    // -- Analysis core --
    /// The only failure the feature-extraction core can raise: an image whose
    /// geometry or channel layout cannot be analysed.
    #[error("invalid image shape {width}x{height} with {channels} channel(s): {reason}")]
    InvalidImageShape {
        width: u32,
        height: u32,
        channels: u8,
        reason: String,
    },

    // -- Upload handling --
    #[error("no image provided")]
    MissingImage,

    #[error("image decoding failed: {0}")]
    ImageDecode(String),

    #[error("upload too large: {size} bytes exceeds limit of {limit} bytes")]
    UploadTooLarge { size: usize, limit: usize },

    // -- External collaborators --
    #[error("personality trait prediction failed: {0}")]
    TraitPrediction(String),

    #[error("narrative generation failed: {0}")]
    Narrative(String),

    #[error("external collaborator not available in this build")]
    CollaboratorUnavailable,

    // -- Configuration / persistence --
    #[error("configuration error: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GraphiaError {
    /// Shorthand for an [`GraphiaError::InvalidImageShape`] error.
    pub fn invalid_shape(width: u32, height: u32, channels: u8, reason: impl Into<String>) -> Self {
        Self::InvalidImageShape {
            width,
            height,
            channels,
            reason: reason.into(),
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, GraphiaError>;
