// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Seams for the external collaborators of a handwriting report: the
// personality classifier and the narrative writer.
//
// Neither model lives in this repository. The stubs return
// `CollaboratorUnavailable` so builds without a model fail loudly instead of
// inventing a result.

use graphia_analysis::RasterImage;
use graphia_core::PersonalityTrait;
use graphia_core::error::{GraphiaError, Result};

/// Predicts the dominant Big Five trait from a handwriting image.
pub trait TraitPredictor: Send + Sync {
    fn predict(&self, image: &RasterImage) -> Result<PersonalityTrait>;
}

/// Writes free-text analysis from a system instruction and a user prompt.
pub trait NarrativeGenerator: Send + Sync {
    fn generate(&self, system: &str, prompt: &str) -> Result<String>;
}

/// Returns a trait obtained elsewhere (a prior classifier run, a CLI flag).
#[derive(Debug, Clone, Copy)]
pub struct FixedTraitPredictor(pub PersonalityTrait);

impl TraitPredictor for FixedTraitPredictor {
    fn predict(&self, _image: &RasterImage) -> Result<PersonalityTrait> {
        Ok(self.0)
    }
}

/// Predictor used when no classifier is wired in.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubTraitPredictor;

impl TraitPredictor for StubTraitPredictor {
    fn predict(&self, _image: &RasterImage) -> Result<PersonalityTrait> {
        tracing::warn!("TraitPredictor::predict called on stub predictor");
        Err(GraphiaError::CollaboratorUnavailable)
    }
}

/// Narrative generator used when no language model is wired in.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubNarrativeGenerator;

impl NarrativeGenerator for StubNarrativeGenerator {
    fn generate(&self, _system: &str, _prompt: &str) -> Result<String> {
        tracing::warn!("NarrativeGenerator::generate called on stub generator");
        Err(GraphiaError::CollaboratorUnavailable)
    }
}

/// Pick the trait with the highest classifier score.
///
/// Scores are in classifier output order (see [`PersonalityTrait::ALL`]).
/// Fails unless there is exactly one finite score per trait.
pub fn trait_from_scores(scores: &[f32]) -> Result<PersonalityTrait> {
    if scores.len() != PersonalityTrait::ALL.len() {
        return Err(GraphiaError::TraitPrediction(format!(
            "expected {} scores, got {}",
            PersonalityTrait::ALL.len(),
            scores.len()
        )));
    }
    if scores.iter().any(|s| !s.is_finite()) {
        return Err(GraphiaError::TraitPrediction("non-finite classifier score".into()));
    }

    // First maximum wins on ties.
    let mut best = 0;
    for (i, &score) in scores.iter().enumerate().skip(1) {
        if score > scores[best] {
            best = i;
        }
    }
    PersonalityTrait::from_class_index(best)
        .ok_or_else(|| GraphiaError::TraitPrediction(format!("no trait for class {best}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GrayImage;

    fn tiny_raster() -> RasterImage {
        RasterImage::from_gray(GrayImage::new(2, 2)).unwrap()
    }

    #[test]
    fn fixed_predictor_returns_its_trait() {
        let predictor = FixedTraitPredictor(PersonalityTrait::Neuroticism);
        assert_eq!(
            predictor.predict(&tiny_raster()).unwrap(),
            PersonalityTrait::Neuroticism
        );
    }

    #[test]
    fn stubs_are_unavailable() {
        assert!(matches!(
            StubTraitPredictor.predict(&tiny_raster()),
            Err(GraphiaError::CollaboratorUnavailable)
        ));
        assert!(matches!(
            StubNarrativeGenerator.generate("system", "prompt"),
            Err(GraphiaError::CollaboratorUnavailable)
        ));
    }

    #[test]
    fn argmax_over_scores() {
        let scores = [0.1, -2.0, 3.5, 3.5, 0.0];
        assert_eq!(trait_from_scores(&scores).unwrap(), PersonalityTrait::Extraversion);
    }

    #[test]
    fn wrong_score_count_is_an_error() {
        assert!(matches!(
            trait_from_scores(&[1.0, 2.0]),
            Err(GraphiaError::TraitPrediction(_))
        ));
        assert!(trait_from_scores(&[0.0, f32::NAN, 0.0, 0.0, 0.0]).is_err());
    }
}
