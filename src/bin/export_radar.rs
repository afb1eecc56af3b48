//! Export the radar-chart series for one profile as CSV
//!
//! Output columns: label, angle in radians, normalized user value,
//! normalized population mean. The final row repeats the first point so
//! the plotted polygon closes.

use std::fs::File;
use std::io::Write;
use std::time::Instant;
use wellness_advisor::population::{load_dataset, UserProfile};
use wellness_advisor::{compare_user_to_population, radar_series};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let usage = "usage: export_radar <dataset.csv> <profile.json> [output.csv]";
    let data_path = args.next().expect(usage);
    let profile_path = args.next().expect(usage);
    let output_path = args
        .next()
        .unwrap_or_else(|| "radar_series.csv".to_string());

    let start = Instant::now();
    println!("Loading population dataset from {data_path}...");
    let dataset = load_dataset(&data_path).expect("Failed to load dataset");
    println!("Loaded {} records in {:?}", dataset.len(), start.elapsed());

    let raw = std::fs::read_to_string(&profile_path).expect("Failed to read profile");
    let profile: UserProfile = serde_json::from_str(&raw).expect("Profile is not valid JSON");
    let profile = profile.canonicalize();

    let comparison =
        compare_user_to_population(&profile, &dataset).expect("Comparison failed");
    let series = radar_series(&comparison, &dataset);

    if series.labels.is_empty() {
        println!("No numeric metrics in common between profile and dataset; nothing to export.");
        return;
    }

    let mut file = File::create(&output_path).expect("Failed to create output file");
    writeln!(file, "Label,Angle,User,Average").unwrap();
    for i in 0..series.angles.len() {
        // The closing point reuses the first label
        let label = &series.labels[i % series.labels.len()];
        writeln!(
            file,
            "{},{:.6},{:.4},{:.4}",
            label, series.angles[i], series.user[i], series.average[i]
        )
        .unwrap();
    }

    println!("Output written to {output_path}");
    println!("\nRadar Summary:");
    for (i, label) in series.labels.iter().enumerate() {
        println!(
            "  {:<32} user={:.2}  avg={:.2}",
            label, series.user[i], series.average[i]
        );
    }
    println!("\nTotal time: {:?}", start.elapsed());
}
