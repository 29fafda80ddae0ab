// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Graphia: handwriting descriptor labels, the feature
// descriptor record, personality traits, and the analysis report payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Average glyph height bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterSize {
    #[serde(rename = "Small Letters")]
    Small,
    #[serde(rename = "Average Letters")]
    Average,
    #[serde(rename = "Large Letters")]
    Large,
}

impl LetterSize {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small Letters",
            Self::Average => "Average Letters",
            Self::Large => "Large Letters",
        }
    }
}

/// Dominant stroke direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slant {
    #[serde(rename = "Left Slant")]
    Left,
    #[serde(rename = "Vertical Slant")]
    Vertical,
    #[serde(rename = "Right Slant")]
    Right,
    /// Too little ink to fit a direction.
    #[serde(rename = "Unknown Slant")]
    Unknown,
}

impl Slant {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Left => "Left Slant",
            Self::Vertical => "Vertical Slant",
            Self::Right => "Right Slant",
            Self::Unknown => "Unknown Slant",
        }
    }
}

/// Stroke darkness. Deliberately two-valued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PenPressure {
    #[serde(rename = "Light Pen Pressure")]
    Light,
    #[serde(rename = "Heavy Pen Pressure")]
    Heavy,
}

impl PenPressure {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light Pen Pressure",
            Self::Heavy => "Heavy Pen Pressure",
        }
    }
}

/// Trend of the writing line across the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Baseline {
    #[serde(rename = "Straight Baseline")]
    Straight,
    #[serde(rename = "Rising Baseline")]
    Rising,
    #[serde(rename = "Falling Baseline")]
    Falling,
    #[serde(rename = "Erratic Baseline")]
    Erratic,
}

impl Baseline {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Straight => "Straight Baseline",
            Self::Rising => "Rising Baseline",
            Self::Falling => "Falling Baseline",
            Self::Erratic => "Erratic Baseline",
        }
    }
}

/// Horizontal density of the writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordSpacing {
    #[serde(rename = "Close Spaced Words")]
    Close,
    #[serde(rename = "Far Spaced Words")]
    Far,
}

impl WordSpacing {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Close => "Close Spaced Words",
            Self::Far => "Far Spaced Words",
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.label())
                }
            }
        )+
    };
}

display_via_label!(LetterSize, Slant, PenPressure, Baseline, WordSpacing);

/// The five handwriting descriptors together with the numbers that produced
/// them. Every field is always populated; the estimators never fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureDescriptor {
    pub letter_size: LetterSize,
    /// Mean bounding-box height of the qualifying ink regions (0 when none).
    pub mean_letter_height: f64,
    /// Number of ink regions above the noise floor.
    pub region_count: usize,

    pub slant: Slant,
    /// Column (horizontal) component of the unit direction fitted through
    /// `(row, column)` ink coordinates; `None` when the slant is unknown.
    pub slant_angle: Option<f64>,

    pub pen_pressure: PenPressure,
    /// Mean grayscale intensity over the whole image (0..=255).
    pub mean_intensity: f64,

    pub baseline: Baseline,
    /// Slope of the per-row ink centroid against row index.
    pub baseline_slope: f64,

    pub word_spacing: WordSpacing,
    /// Mean distance between successive empty columns (0 when fewer than two).
    pub mean_word_gap: f64,
}

/// Big Five personality traits, as produced by the external classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonalityTrait {
    Agreeableness,
    Conscientiousness,
    Extraversion,
    Neuroticism,
    Openness,
}

impl PersonalityTrait {
    /// All traits in classifier output order.
    pub const ALL: [PersonalityTrait; 5] = [
        Self::Agreeableness,
        Self::Conscientiousness,
        Self::Extraversion,
        Self::Neuroticism,
        Self::Openness,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Agreeableness => "Agreeableness",
            Self::Conscientiousness => "Conscientiousness",
            Self::Extraversion => "Extraversion",
            Self::Neuroticism => "Neuroticism",
            Self::Openness => "Openness",
        }
    }

    /// Parse a trait name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Map a classifier output index to its trait.
    pub fn from_class_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// One-line summary of the trait.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Agreeableness => {
                "Cooperative, empathetic, and nurturing; values harmony in relationships."
            }
            Self::Conscientiousness => {
                "Organized, detail-oriented, reliable; thrives on structure and planning."
            }
            Self::Extraversion => {
                "Outgoing, energetic, people-oriented; draws energy from social interaction."
            }
            Self::Neuroticism => {
                "Emotionally sensitive, introspective; may excel in deeply analytical or empathetic roles."
            }
            Self::Openness => {
                "Imaginative, curious, intellectually driven; embraces innovation and creativity."
            }
        }
    }

    pub fn strengths(&self) -> &'static [&'static str] {
        match self {
            Self::Agreeableness => &[
                "Teamwork",
                "Empathy",
                "Conflict resolution",
                "Patient listening",
                "Support",
            ],
            Self::Conscientiousness => &[
                "Organization",
                "Reliability",
                "Attention to detail",
                "Goal-setting",
                "Persistence",
            ],
            Self::Extraversion => &[
                "Communication",
                "Networking",
                "Persuasion",
                "Enthusiasm",
                "Leadership",
            ],
            Self::Neuroticism => &[
                "Attention to risk",
                "Emotional awareness",
                "Thoughtful analysis",
                "Perfectionism",
                "Anticipating challenges",
            ],
            Self::Openness => &[
                "Innovation",
                "Adaptability",
                "Conceptual thinking",
                "Artistic expression",
                "Learning agility",
            ],
        }
    }

    pub fn careers(&self) -> &'static [&'static str] {
        match self {
            Self::Agreeableness => &[
                "Counselor",
                "HR Professional",
                "Social Worker",
                "Teacher",
                "Healthcare Provider",
                "Customer Service",
            ],
            Self::Conscientiousness => &[
                "Project Manager",
                "Financial Analyst",
                "Editor",
                "Quality Control Specialist",
                "Research Scientist",
                "Accountant",
            ],
            Self::Extraversion => &[
                "Sales Professional",
                "Public Relations",
                "Event Planner",
                "Politics",
                "Marketing",
                "Performance Arts",
            ],
            Self::Neuroticism => &[
                "Creative Writer",
                "Artist",
                "Researcher",
                "Psychologist",
                "Quality Assurance",
                "Safety Coordinator",
            ],
            Self::Openness => &[
                "Designer",
                "Researcher",
                "Entrepreneur",
                "Consultant",
                "Artist",
                "Professor",
                "Writer",
            ],
        }
    }

    pub fn work_style(&self) -> &'static str {
        match self {
            Self::Agreeableness => {
                "Thrives in collaborative environments with positive team dynamics and opportunities to help others."
            }
            Self::Conscientiousness => {
                "Excels with clear objectives, structured environments, and roles requiring precision and follow-through."
            }
            Self::Extraversion => {
                "Flourishes in dynamic environments with frequent human interaction, variety, and opportunities to lead."
            }
            Self::Neuroticism => {
                "Benefits from supportive environments with moderate stress levels, clear expectations, and appreciation for detail."
            }
            Self::Openness => {
                "Thrives in environments that reward creativity, intellectual exploration, and novel approaches to problems."
            }
        }
    }
}

impl std::fmt::Display for PersonalityTrait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unique identifier for an analysis report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportId(pub Uuid);

impl ReportId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ReportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The response payload built by the orchestration layer: the predicted
/// trait, the five handwriting labels under their wire names, and the
/// supporting evidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub id: ReportId,
    pub generated_at: DateTime<Utc>,
    /// SHA-256 of the uploaded bytes.
    pub image_sha256: String,
    pub width: u32,
    pub height: u32,
    pub personality_trait: PersonalityTrait,
    pub letter_size: LetterSize,
    pub letter_slant: Slant,
    pub pen_pressure: PenPressure,
    pub baseline: Baseline,
    pub word_spacing: WordSpacing,
    pub features: FeatureDescriptor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_analysis: Option<String>,
}

impl AnalysisReport {
    pub fn new(
        image_sha256: String,
        dimensions: (u32, u32),
        personality_trait: PersonalityTrait,
        features: FeatureDescriptor,
    ) -> Self {
        Self {
            id: ReportId::new(),
            generated_at: Utc::now(),
            image_sha256,
            width: dimensions.0,
            height: dimensions.1,
            personality_trait,
            letter_size: features.letter_size,
            letter_slant: features.slant,
            pen_pressure: features.pen_pressure,
            baseline: features.baseline,
            word_spacing: features.word_spacing,
            features,
            career_analysis: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_features() -> FeatureDescriptor {
        FeatureDescriptor {
            letter_size: LetterSize::Average,
            mean_letter_height: 31.5,
            region_count: 4,
            slant: Slant::Right,
            slant_angle: Some(0.42),
            pen_pressure: PenPressure::Light,
            mean_intensity: 211.0,
            baseline: Baseline::Straight,
            baseline_slope: 0.01,
            word_spacing: WordSpacing::Far,
            mean_word_gap: 18.0,
        }
    }

    #[test]
    fn labels_serialize_as_wire_strings() {
        assert_eq!(
            serde_json::to_string(&Slant::Unknown).unwrap(),
            "\"Unknown Slant\""
        );
        assert_eq!(
            serde_json::to_string(&PenPressure::Heavy).unwrap(),
            "\"Heavy Pen Pressure\""
        );
        let parsed: Baseline = serde_json::from_str("\"Erratic Baseline\"").unwrap();
        assert_eq!(parsed, Baseline::Erratic);
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(LetterSize::Large.to_string(), "Large Letters");
        assert_eq!(WordSpacing::Close.to_string(), WordSpacing::Close.label());
    }

    #[test]
    fn trait_lookup_is_case_insensitive() {
        assert_eq!(
            PersonalityTrait::from_name(" openness "),
            Some(PersonalityTrait::Openness)
        );
        assert_eq!(PersonalityTrait::from_name("grumpiness"), None);
        assert_eq!(
            PersonalityTrait::from_class_index(1),
            Some(PersonalityTrait::Conscientiousness)
        );
        assert_eq!(PersonalityTrait::from_class_index(5), None);
    }

    #[test]
    fn report_uses_wire_json_keys() {
        let report = AnalysisReport::new(
            "ab".repeat(32),
            (640, 480),
            PersonalityTrait::Extraversion,
            sample_features(),
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["personalityTrait"], "Extraversion");
        assert_eq!(json["letterSize"], "Average Letters");
        assert_eq!(json["letterSlant"], "Right Slant");
        assert_eq!(json["penPressure"], "Light Pen Pressure");
        assert_eq!(json["baseline"], "Straight Baseline");
        assert_eq!(json["wordSpacing"], "Far Spaced Words");
        assert_eq!(json["features"]["meanWordGap"], 18.0);
        assert!(json.get("careerAnalysis").is_none());
    }
}
