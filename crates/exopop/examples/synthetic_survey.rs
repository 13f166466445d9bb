//! Run the full occurrence-rate analysis on a synthetic survey
//!
//! Usage: RUST_LOG=info cargo run --release -p exopop --example synthetic_survey [config.json]
//!
//! Without a config file the published analysis settings are used, with
//! shorter chains.

use std::env;
use std::fs;

use exopop::{run_analysis, AnalysisConfig, SyntheticSurveyBuilder};
use occurrence::PopulationParams;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => AnalysisConfig::from_json_str(&fs::read_to_string(path)?)?,
        None => AnalysisConfig {
            burn_in: 500,
            production: 1000,
            ..AnalysisConfig::default()
        },
    };

    let truth = PopulationParams::new(5.0_f64.ln(), -0.6, -1.4);
    let survey = SyntheticSurveyBuilder::new()
        .stars(4000)
        .truth(truth)
        .model(config.model())
        .seed(config.seed)
        .build()?;

    eprintln!(
        "Injected {} planets around {} stars, {} detected",
        survey.injected,
        survey.stars.len(),
        survey.detections.len()
    );

    let report = run_analysis(&config, &survey.stars, survey.detections)?;
    print!("{}", report.summary());

    let true_gamma = config.model().gamma_earth(&truth);
    println!(
        "True parameters: ln_rate {:.4}  period_index {:.4}  radius_index {:.4}  gamma_earth {:.4}",
        truth.ln_rate, truth.period_index, truth.radius_index, true_gamma
    );

    Ok(())
}
