// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Upload intake — reject missing, oversized or unreadable uploads before the
// analysis core ever sees them, and fingerprint what gets through.

use graphia_analysis::RasterImage;
use graphia_core::AppConfig;
use graphia_core::error::{GraphiaError, Result};
use sha2::{Digest, Sha256};
use tracing::{debug, info, instrument};

/// A decoded, validated upload.
#[derive(Debug, Clone)]
pub struct Upload {
    /// The image as 8-bit RGB.
    pub raster: RasterImage,
    /// Lowercase hex SHA-256 of the uploaded bytes.
    pub sha256: String,
    pub byte_len: usize,
}

/// Decode uploaded bytes (JPEG, PNG, TIFF, ...) into an RGB raster.
///
/// Alpha is discarded, matching a plain RGB conversion of the upload.
#[instrument(skip_all, fields(data_len = data.len()))]
pub fn decode_upload(data: &[u8], config: &AppConfig) -> Result<Upload> {
    if data.is_empty() {
        return Err(GraphiaError::MissingImage);
    }
    if data.len() > config.max_upload_bytes {
        return Err(GraphiaError::UploadTooLarge {
            size: data.len(),
            limit: config.max_upload_bytes,
        });
    }

    let decoded = image::load_from_memory(data).map_err(|err| {
        GraphiaError::ImageDecode(format!("failed to decode handwriting image: {}", err))
    })?;

    let (width, height) = (decoded.width(), decoded.height());
    let pixels = width as u64 * height as u64;
    if pixels > config.max_image_pixels {
        return Err(GraphiaError::invalid_shape(
            width,
            height,
            decoded.color().channel_count(),
            format!("{} pixels exceeds limit of {}", pixels, config.max_image_pixels),
        ));
    }

    let raster = RasterImage::from_rgb(decoded.to_rgb8())?;
    let sha256 = hash_bytes(data);
    info!(width, height, sha256 = %sha256, "Upload decoded");

    Ok(Upload {
        raster,
        sha256,
        byte_len: data.len(),
    })
}

/// Compute the SHA-256 hash of `data` as a lowercase hex string.
pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let digest = hex::encode(hasher.finalize());
    debug!(bytes = data.len(), "Upload fingerprinted");
    digest
}
