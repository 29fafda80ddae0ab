// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Analysis pipeline — upload in, report out.
//
// decode → extract features → predict trait → assemble report → (optional)
// career narrative. Every stage failure propagates to the caller.

use graphia_analysis::FeatureExtractor;
use graphia_core::error::Result;
use graphia_core::{AnalysisReport, AppConfig, FeatureDescriptor, PersonalityTrait};
use tracing::{info, instrument};

use crate::collaborators::{NarrativeGenerator, TraitPredictor};
use crate::prompt::{CareerPrompt, summarize};
use crate::upload::decode_upload;

/// Owns the collaborators and turns uploaded bytes into an [`AnalysisReport`].
pub struct AnalysisPipeline {
    config: AppConfig,
    extractor: FeatureExtractor,
    predictor: Box<dyn TraitPredictor>,
    narrator: Option<Box<dyn NarrativeGenerator>>,
}

impl AnalysisPipeline {
    pub fn new(config: AppConfig, predictor: impl TraitPredictor + 'static) -> Self {
        Self {
            config,
            extractor: FeatureExtractor::new(),
            predictor: Box::new(predictor),
            narrator: None,
        }
    }

    /// Attach a narrative generator. Reports then always carry its output.
    pub fn with_narrator(mut self, narrator: impl NarrativeGenerator + 'static) -> Self {
        self.narrator = Some(Box::new(narrator));
        self
    }

    /// Run the full analysis over one uploaded image.
    #[instrument(skip_all, fields(data_len = data.len()))]
    pub fn analyze(&self, data: &[u8]) -> Result<AnalysisReport> {
        let upload = decode_upload(data, &self.config)?;
        let features = self.extractor.extract(&upload.raster);
        let personality = self.predictor.predict(&upload.raster)?;

        let mut report =
            AnalysisReport::new(upload.sha256, upload.raster.dimensions(), personality, features);
        report.career_analysis = self.career_analysis(personality, &report.features)?;

        info!(
            report_id = %report.id,
            personality = %report.personality_trait,
            narrative = report.career_analysis.is_some(),
            "Analysis complete"
        );
        Ok(report)
    }

    fn career_analysis(
        &self,
        personality: PersonalityTrait,
        features: &FeatureDescriptor,
    ) -> Result<Option<String>> {
        match &self.narrator {
            Some(narrator) => {
                let prompt = CareerPrompt::build(personality, features);
                narrator.generate(&prompt.system, &prompt.user).map(Some)
            }
            None if self.config.offline_summary => Ok(Some(summarize(personality, features))),
            None => Ok(None),
        }
    }
}
