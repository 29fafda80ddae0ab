// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for people submitting handwriting samples.
//
// Every technical error is mapped to plain English with a clear suggestion.
// The taxonomy uses three severity levels that drive presentation.

use crate::error::GraphiaError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A collaborator hiccup. Retrying may help.
    Transient,
    /// The user must supply something different (another photo, a config fix).
    ActionRequired,
    /// Cannot be fixed by retrying or user action in this build.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether retrying the same request could succeed.
    pub retriable: bool,
    pub severity: Severity,
}

/// Convert a `GraphiaError` into a `HumanError`.
pub fn humanize_error(err: &GraphiaError) -> HumanError {
    match err {
        GraphiaError::InvalidImageShape { width, height, .. } if *width == 0 || *height == 0 => {
            HumanError {
                message: "The image is empty.".into(),
                suggestion: "Take a new photo of the handwriting and try again.".into(),
                retriable: false,
                severity: Severity::ActionRequired,
            }
        }

        GraphiaError::InvalidImageShape { reason, .. } => HumanError {
            message: "This image can't be analysed.".into(),
            suggestion: format!(
                "Save the scan as an ordinary colour JPEG or PNG and try again. ({reason})"
            ),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        GraphiaError::MissingImage => HumanError {
            message: "No image was provided.".into(),
            suggestion: "Choose a photo or scan of a handwriting sample to upload.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        GraphiaError::ImageDecode(_) => HumanError {
            message: "We couldn't read this image.".into(),
            suggestion: "The file may be damaged or in an unusual format. Try saving it as a JPEG or PNG first.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        GraphiaError::UploadTooLarge { limit, .. } => HumanError {
            message: "This image is too large.".into(),
            suggestion: format!(
                "Reduce the image to under {} MB, for example by taking the photo at a lower resolution.",
                limit / (1024 * 1024)
            ),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        GraphiaError::TraitPrediction(detail) => HumanError {
            message: "The personality model didn't respond.".into(),
            suggestion: format!("Please try again in a moment. ({detail})"),
            retriable: true,
            severity: Severity::Transient,
        },

        GraphiaError::Narrative(detail) => HumanError {
            message: "The career analysis couldn't be written.".into(),
            suggestion: format!("Your handwriting features were measured; try again for the written analysis. ({detail})"),
            retriable: true,
            severity: Severity::Transient,
        },

        GraphiaError::CollaboratorUnavailable => HumanError {
            message: "This feature isn't available here.".into(),
            suggestion: "Supply the personality trait yourself (for example with --trait) to get a report.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        GraphiaError::Config(detail) => HumanError {
            message: "The settings file has a problem.".into(),
            suggestion: format!("Fix the setting and try again. ({detail})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        GraphiaError::Io(io_err) => HumanError {
            message: "A file couldn't be read or written.".into(),
            suggestion: format!("Check the path exists and is readable. ({io_err})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        GraphiaError::Serialization(_) => HumanError {
            message: "Some saved data is in the wrong format.".into(),
            suggestion: "Check the settings file is valid JSON, or delete it to use the defaults.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },
    }
}
