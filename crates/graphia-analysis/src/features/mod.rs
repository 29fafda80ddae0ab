// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Feature estimators (letter size, slant, pen pressure, baseline, word
// spacing) and the extractor that runs them together.

pub mod baseline;
pub mod extractor;
pub mod letter_size;
pub mod pen_pressure;
pub mod slant;
pub mod word_spacing;

pub use baseline::estimate_baseline;
pub use extractor::{FeatureExtractor, describe};
pub use letter_size::estimate_letter_size;
pub use pen_pressure::estimate_pen_pressure;
pub use slant::estimate_slant;
pub use word_spacing::estimate_word_spacing;
