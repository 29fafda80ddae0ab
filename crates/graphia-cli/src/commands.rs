// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Subcommand handlers. Each returns the text to print on stdout so the
// handlers can be exercised without a terminal.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use graphia_analysis::FeatureExtractor;
use graphia_core::error::Result;
use graphia_core::{AppConfig, PersonalityTrait};
use graphia_report::{
    AnalysisPipeline, CareerPrompt, FixedTraitPredictor, StubTraitPredictor, TraitPredictor,
    decode_upload, trait_from_scores,
};
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "graphia")]
#[command(about = "Extract stylistic handwriting features and assemble personality reports")]
#[command(version)]
pub struct Cli {
    /// JSON config file. Missing keys take their defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze a handwriting image and print the full report.
    Analyze(AnalyzeArgs),

    /// Print only the five handwriting features of an image.
    Features(ImageArgs),

    /// Print the career-counselling prompt a narrative model would receive.
    Prompt(PromptArgs),

    /// Write the default configuration to a file.
    InitConfig {
        /// Destination path.
        #[arg(long)]
        out: PathBuf,
    },
}

#[derive(Debug, Clone, Args)]
pub struct ImageArgs {
    /// Path to the handwriting image (JPEG, PNG, TIFF, ...).
    #[arg(long)]
    pub image: PathBuf,
}

/// Where the personality trait comes from. Without either flag no classifier
/// is available.
#[derive(Debug, Clone, Args)]
pub struct TraitArgs {
    /// Dominant Big Five trait from an external classifier run.
    #[arg(long = "trait", value_parser = parse_trait)]
    pub personality: Option<PersonalityTrait>,

    /// Raw classifier scores, comma separated, in the order Agreeableness,
    /// Conscientiousness, Extraversion, Neuroticism, Openness.
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        conflicts_with = "personality"
    )]
    pub scores: Option<Vec<f32>>,
}

impl TraitArgs {
    /// The trait named on the command line, if any.
    pub fn resolve(&self) -> Result<Option<PersonalityTrait>> {
        match &self.scores {
            Some(scores) => trait_from_scores(scores).map(Some),
            None => Ok(self.personality),
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: ImageArgs,

    #[command(flatten)]
    pub classifier: TraitArgs,

    /// Attach the offline career summary to the report.
    #[arg(long)]
    pub summary: bool,
}

#[derive(Debug, Clone, Args)]
pub struct PromptArgs {
    #[command(flatten)]
    pub input: ImageArgs,

    #[command(flatten)]
    pub classifier: TraitArgs,
}

fn parse_trait(value: &str) -> std::result::Result<PersonalityTrait, String> {
    PersonalityTrait::from_name(value).ok_or_else(|| {
        let names: Vec<&str> = PersonalityTrait::ALL.iter().map(|t| t.name()).collect();
        format!("unknown trait '{}', expected one of: {}", value, names.join(", "))
    })
}

/// Resolve the effective config: file (if any), then command-line overrides.
pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if cli.pretty {
        config.pretty_json = true;
    }
    Ok(config)
}

/// Execute the parsed command against `config`.
pub fn run(command: &Commands, config: AppConfig) -> Result<String> {
    match command {
        Commands::Analyze(args) => analyze(args, config),
        Commands::Features(args) => features(&args.image, &config),
        Commands::Prompt(args) => prompt(args, &config),
        Commands::InitConfig { out } => {
            AppConfig::default().save(out)?;
            Ok(format!("wrote default configuration to {}", out.display()))
        }
    }
}

fn analyze(args: &AnalyzeArgs, mut config: AppConfig) -> Result<String> {
    let personality = args.classifier.resolve()?;
    let bytes = read_image(&args.input.image)?;
    if args.summary {
        config.offline_summary = true;
    }
    let pretty = config.pretty_json;

    let report = match personality {
        Some(personality) => AnalysisPipeline::new(config, FixedTraitPredictor(personality)),
        None => AnalysisPipeline::new(config, StubTraitPredictor),
    }
    .analyze(&bytes)?;

    render(&serde_json::to_value(&report)?, pretty)
}

fn features(path: &Path, config: &AppConfig) -> Result<String> {
    let upload = decode_upload(&read_image(path)?, config)?;
    let descriptor = FeatureExtractor::new().extract(&upload.raster);
    render(&serde_json::to_value(descriptor)?, config.pretty_json)
}

fn prompt(args: &PromptArgs, config: &AppConfig) -> Result<String> {
    let personality = args.classifier.resolve()?;
    let upload = decode_upload(&read_image(&args.input.image)?, config)?;
    let personality = match personality {
        Some(personality) => FixedTraitPredictor(personality).predict(&upload.raster)?,
        None => StubTraitPredictor.predict(&upload.raster)?,
    };
    let descriptor = FeatureExtractor::new().extract(&upload.raster);
    let prompt = CareerPrompt::build(personality, &descriptor);
    render(&serde_json::to_value(prompt)?, config.pretty_json)
}

fn read_image(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "Image read");
    Ok(bytes)
}

fn render(value: &Value, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphia_core::GraphiaError;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use tempfile::TempDir;

    fn write_page(dir: &TempDir) -> PathBuf {
        let rgb = RgbImage::from_fn(100, 90, |x, y| {
            let in_bar = (10..80).contains(&y)
                && [10u32, 30, 50].iter().any(|&b| (b..b + 6).contains(&x));
            if in_bar { Rgb([15, 20, 60]) } else { Rgb([250, 248, 240]) }
        });
        let path = dir.path().join("page.png");
        DynamicImage::ImageRgb8(rgb)
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();
        path
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn trait_flag_is_case_insensitive() {
        let cli = parse(&["graphia", "analyze", "--image", "x.png", "--trait", "openness"]);
        match cli.command {
            Commands::Analyze(args) => {
                assert_eq!(args.classifier.personality, Some(PersonalityTrait::Openness))
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn unknown_trait_is_a_usage_error() {
        assert!(Cli::try_parse_from(["graphia", "analyze", "--image", "x.png", "--trait", "grumpy"]).is_err());
    }

    #[test]
    fn analyze_prints_report_json() {
        let dir = TempDir::new().unwrap();
        let image = write_page(&dir);
        let cli = parse(&[
            "graphia",
            "analyze",
            "--image",
            image.to_str().unwrap(),
            "--trait",
            "Conscientiousness",
            "--summary",
        ]);
        let out = run(&cli.command, load_config(&cli).unwrap()).unwrap();
        let json: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json["personalityTrait"], "Conscientiousness");
        assert_eq!(json["letterSize"], "Large Letters");
        assert!(json["careerAnalysis"].as_str().unwrap().contains("Project Manager"));
    }

    #[test]
    fn analyze_without_trait_reports_missing_classifier() {
        let dir = TempDir::new().unwrap();
        let image = write_page(&dir);
        let cli = parse(&["graphia", "analyze", "--image", image.to_str().unwrap()]);
        let err = run(&cli.command, load_config(&cli).unwrap()).unwrap_err();
        assert!(matches!(err, GraphiaError::CollaboratorUnavailable));
    }

    #[test]
    fn classifier_scores_pick_the_top_trait() {
        let dir = TempDir::new().unwrap();
        let image = write_page(&dir);
        let cli = parse(&[
            "graphia",
            "analyze",
            "--image",
            image.to_str().unwrap(),
            "--scores",
            "-1.5,0.2,3.1,0.4,2.9",
        ]);
        let out = run(&cli.command, load_config(&cli).unwrap()).unwrap();
        let json: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["personalityTrait"], "Extraversion");
    }

    #[test]
    fn wrong_number_of_scores_is_a_prediction_error() {
        let dir = TempDir::new().unwrap();
        let image = write_page(&dir);
        let cli = parse(&["graphia", "prompt", "--image", image.to_str().unwrap(), "--scores", "1,2"]);
        let err = run(&cli.command, load_config(&cli).unwrap()).unwrap_err();
        assert!(matches!(err, GraphiaError::TraitPrediction(_)));
    }

    #[test]
    fn trait_and_scores_are_exclusive() {
        assert!(
            Cli::try_parse_from([
                "graphia", "analyze", "--image", "x.png", "--trait", "openness", "--scores", "1,0,0,0,0",
            ])
            .is_err()
        );
    }

    #[test]
    fn features_pretty_output() {
        let dir = TempDir::new().unwrap();
        let image = write_page(&dir);
        let cli = parse(&["graphia", "--pretty", "features", "--image", image.to_str().unwrap()]);
        let out = run(&cli.command, load_config(&cli).unwrap()).unwrap();
        assert!(out.contains('\n'));
        let json: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["slant"], "Vertical Slant");
        assert_eq!(json["regionCount"], 3);
    }

    #[test]
    fn prompt_command_embeds_labels() {
        let dir = TempDir::new().unwrap();
        let image = write_page(&dir);
        let cli = parse(&["graphia", "prompt", "--image", image.to_str().unwrap(), "--trait", "extraversion"]);
        let out = run(&cli.command, load_config(&cli).unwrap()).unwrap();
        let json: Value = serde_json::from_str(&out).unwrap();
        let user = json["user"].as_str().unwrap();
        assert!(user.contains("**Extraversion**"));
        assert!(user.contains("- Letter Size: Large Letters"));
    }

    #[test]
    fn missing_image_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.png");
        let cli = parse(&["graphia", "features", "--image", missing.to_str().unwrap()]);
        let err = run(&cli.command, load_config(&cli).unwrap()).unwrap_err();
        assert!(matches!(err, GraphiaError::Io(_)));
    }

    #[test]
    fn init_config_then_load_it_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("graphia.json");
        let cli = parse(&["graphia", "init-config", "--out", path.to_str().unwrap()]);
        run(&cli.command, AppConfig::default()).unwrap();

        let cli = parse(&["graphia", "--config", path.to_str().unwrap(), "--pretty", "init-config", "--out", "unused"]);
        let config = load_config(&cli).unwrap();
        assert!(config.pretty_json);
        assert_eq!(config.log_filter, "info");
    }
}
