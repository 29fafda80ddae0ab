// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// graphia-report — Orchestration around the feature extractor.
//
// Validates and fingerprints uploads, defines the seams for the external
// trait classifier and narrative writer, builds the career prompt and
// assembles the final analysis report.

pub mod collaborators;
pub mod pipeline;
pub mod prompt;
pub mod upload;

pub use collaborators::{
    FixedTraitPredictor, NarrativeGenerator, StubNarrativeGenerator, StubTraitPredictor,
    TraitPredictor, trait_from_scores,
};
pub use pipeline::AnalysisPipeline;
pub use prompt::{CareerPrompt, summarize};
pub use upload::{Upload, decode_upload, hash_bytes};
