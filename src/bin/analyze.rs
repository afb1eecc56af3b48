//! Compare one student profile against the reference population
//!
//! Loads the dataset and a JSON profile, prints the localized report (or
//! the structured comparison as JSON), and optionally requests AI advice.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use wellness_advisor::advice::{request_advice, AdviceProvider, GroqProvider};
use wellness_advisor::population::loader::DEFAULT_DATASET_PATH;
use wellness_advisor::population::{load_dataset, UserProfile};
use wellness_advisor::{
    compare_user_to_population, radar_series, render_report, Language, RiskLabel,
};

#[derive(Parser, Debug)]
#[command(
    name = "analyze",
    about = "Compare a student profile against the reference population"
)]
struct Args {
    /// Population dataset CSV
    #[arg(long, default_value = DEFAULT_DATASET_PATH)]
    data: PathBuf,

    /// User profile JSON (field name -> value)
    #[arg(long)]
    profile: PathBuf,

    /// Report language tag (vi, en); unrecognized tags fall back to English
    #[arg(long, default_value = "en")]
    lang: String,

    /// Externally predicted risk label (Yes/No), appended to the advice prompt
    #[arg(long)]
    risk_label: Option<RiskLabel>,

    /// Print the structured comparison and radar series as JSON
    #[arg(long)]
    json: bool,

    /// Request AI advice after the report (needs GROQ_API_KEY)
    #[arg(long)]
    advice: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();
    let args = Args::parse();
    let language = Language::from_tag(&args.lang);

    let start = Instant::now();
    let dataset = load_dataset(&args.data)?;
    log::info!(
        "loaded {} records in {:?}",
        dataset.len(),
        start.elapsed()
    );

    let raw = std::fs::read_to_string(&args.profile)
        .with_context(|| format!("failed to read profile {}", args.profile.display()))?;
    let profile: UserProfile =
        serde_json::from_str(&raw).context("profile is not valid JSON")?;
    let profile = profile.canonicalize();

    let comparison = compare_user_to_population(&profile, &dataset)?;

    if args.json {
        let chart = radar_series(&comparison, &dataset);
        let payload = serde_json::json!({ "comparison": comparison, "radar": chart });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let report = render_report(&comparison, language);
    println!("{report}");

    if args.advice {
        let provider = GroqProvider::from_env();
        let provider_ref = provider.as_ref().map(|p| p as &dyn AdviceProvider);
        let label = args.risk_label.map(RiskLabel::as_str);
        let advice = request_advice(provider_ref, &report, label, language).await;
        println!("{advice}");
    }

    Ok(())
}
