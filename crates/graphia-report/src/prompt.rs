// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Career-counselling prompt construction and the offline summary used when no
// narrative generator is available.

use std::fmt::Write as _;

use graphia_core::{
    Baseline, FeatureDescriptor, LetterSize, PenPressure, PersonalityTrait, Slant, WordSpacing,
};
use serde::Serialize;

/// Instruction given to the narrative generator.
pub const SYSTEM_MESSAGE: &str = "You are a personality analyst who evaluates handwriting.";

/// The two messages sent to a narrative generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerPrompt {
    pub system: String,
    pub user: String,
}

impl CareerPrompt {
    /// Build the prompt for a predicted trait and the measured handwriting.
    pub fn build(personality: PersonalityTrait, features: &FeatureDescriptor) -> Self {
        let mut user = String::new();
        let _ = writeln!(
            user,
            "The neural network has identified the individual's dominant personality trait as **{personality}**.\n"
        );
        user.push_str("Below is a brief overview of the Big Five personality traits:\n");
        for t in PersonalityTrait::ALL {
            let _ = writeln!(user, "- **{}**: {}", t.name(), t.description());
        }
        user.push_str(
            "\nUsing this trait as a foundation, provide a **career counseling analysis**. \
             Recommend **suitable career paths** or work environments where someone with this \
             trait would likely thrive.\n\n",
        );
        user.push_str("Support your analysis using the following handwriting characteristics:\n\n");
        let _ = writeln!(user, "- Letter Size: {}", features.letter_size);
        let _ = writeln!(user, "- Letter Slant: {}", features.slant);
        let _ = writeln!(user, "- Pen Pressure: {}", features.pen_pressure);
        let _ = writeln!(user, "- Baseline: {}", features.baseline);
        let _ = writeln!(user, "- Word Spacing: {}", features.word_spacing);
        user.push_str(
            "\nExplain how the handwriting style either reinforces or complements the predicted \
             personality trait. Then offer a final recommendation, summarizing ideal professions, \
             strengths, and work styles suited for this personality type.\n",
        );

        Self {
            system: SYSTEM_MESSAGE.to_owned(),
            user,
        }
    }
}

/// A deterministic career summary assembled from fixed interpretations of
/// each label and the trait profile.
pub fn summarize(personality: PersonalityTrait, features: &FeatureDescriptor) -> String {
    let mut out = String::from(
        "Your handwriting characteristics combine with your personality profile to suggest promising career directions.\n\n",
    );
    let _ = writeln!(
        out,
        "Your dominant personality trait is **{personality}**, which is reinforced by several elements in your handwriting:\n"
    );

    let lines = [
        (features.letter_size.label(), letter_size_meaning(features.letter_size)),
        (features.slant.label(), slant_meaning(features.slant)),
        (features.pen_pressure.label(), pen_pressure_meaning(features.pen_pressure)),
        (features.baseline.label(), baseline_meaning(features.baseline)),
        (features.word_spacing.label(), word_spacing_meaning(features.word_spacing)),
    ];
    for (label, meaning) in lines {
        let _ = writeln!(out, "- Your **{label}** {meaning}.");
    }

    let _ = write!(
        out,
        "\nBased on your {personality} personality and handwriting style, you may excel in roles such as {}. {}",
        personality.careers().join(", "),
        personality.work_style()
    );
    out
}

fn letter_size_meaning(size: LetterSize) -> &'static str {
    match size {
        LetterSize::Small => "indicates attention to detail and focus",
        LetterSize::Average => "shows balanced energy and adaptability",
        LetterSize::Large => "suggests confidence and outgoing nature",
    }
}

fn slant_meaning(slant: Slant) -> &'static str {
    match slant {
        Slant::Left => "indicates reservation and self-control",
        Slant::Vertical => "suggests logical thinking and emotional balance",
        Slant::Right => "demonstrates responsiveness and social engagement",
        Slant::Unknown => "leaves too little ink to read a consistent direction",
    }
}

fn pen_pressure_meaning(pressure: PenPressure) -> &'static str {
    match pressure {
        PenPressure::Light => "reveals sensitivity and adaptability",
        PenPressure::Heavy => "indicates energy, commitment and conviction",
    }
}

fn baseline_meaning(baseline: Baseline) -> &'static str {
    match baseline {
        Baseline::Straight => "demonstrates reliability and structured thinking",
        Baseline::Rising => "shows optimism and ambition",
        Baseline::Falling => "may indicate fatigue or pessimism",
        Baseline::Erratic => "suggests unpredictability and varied energy levels",
    }
}

fn word_spacing_meaning(spacing: WordSpacing) -> &'static str {
    match spacing {
        WordSpacing::Close => "indicates focused thinking and efficiency",
        WordSpacing::Far => "suggests expansive thinking and need for personal space",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features() -> FeatureDescriptor {
        FeatureDescriptor {
            letter_size: LetterSize::Small,
            mean_letter_height: 12.0,
            region_count: 30,
            slant: Slant::Right,
            slant_angle: Some(0.5),
            pen_pressure: PenPressure::Heavy,
            mean_intensity: 80.0,
            baseline: Baseline::Rising,
            baseline_slope: 0.7,
            word_spacing: WordSpacing::Close,
            mean_word_gap: 3.0,
        }
    }

    #[test]
    fn prompt_embeds_trait_and_all_labels() {
        let prompt = CareerPrompt::build(PersonalityTrait::Openness, &features());
        assert_eq!(prompt.system, SYSTEM_MESSAGE);
        assert!(prompt.user.contains("dominant personality trait as **Openness**"));
        assert!(prompt.user.contains("- Letter Size: Small Letters"));
        assert!(prompt.user.contains("- Letter Slant: Right Slant"));
        assert!(prompt.user.contains("- Pen Pressure: Heavy Pen Pressure"));
        assert!(prompt.user.contains("- Baseline: Rising Baseline"));
        assert!(prompt.user.contains("- Word Spacing: Close Spaced Words"));
    }

    #[test]
    fn prompt_lists_every_big_five_trait() {
        let prompt = CareerPrompt::build(PersonalityTrait::Agreeableness, &features());
        for t in PersonalityTrait::ALL {
            assert!(prompt.user.contains(&format!("**{}**:", t.name())));
        }
    }

    #[test]
    fn summary_is_deterministic_and_mentions_careers() {
        let a = summarize(PersonalityTrait::Conscientiousness, &features());
        let b = summarize(PersonalityTrait::Conscientiousness, &features());
        assert_eq!(a, b);
        assert!(a.contains("**Conscientiousness**"));
        assert!(a.contains("Your **Heavy Pen Pressure** indicates energy, commitment and conviction."));
        assert!(a.contains("Project Manager"));
    }
}
