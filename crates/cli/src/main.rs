use bikeshare::{prelude::*, source, summary};
use std::{
    fs::File,
    path::{Path, PathBuf},
    process,
    time::Instant,
};
use thiserror::Error;
use tracing::{error, info, warn};

fn main() {
    tracing_subscriber::fmt().init();

    let args: Vec<_> = std::env::args().collect();
    if args.len() < 3 {
        error!("Usage: bikeshare <legacy.csv|zip> <current.csv|zip> [out_dir]");
        process::exit(1);
    }
    let legacy = Storage::from_path(&args[1]);
    let current = Storage::from_path(&args[2]);
    let out_dir = args.get(3).map(PathBuf::from);

    if let Err(err) = run(&legacy, &current, out_dir.as_deref()) {
        error!("{err}");
        process::exit(1);
    }
}

#[derive(Error, Debug)]
enum RunError {
    #[error("Failed to load trips: {0}")]
    Source(#[from] source::Error),
    #[error("Failed to write summary: {0}")]
    Summary(#[from] summary::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn run(legacy: &Storage, current: &Storage, out_dir: Option<&Path>) -> Result<(), RunError> {
    info!("Loading data...");
    let now = Instant::now();
    let trip_source = TripSource::default();
    let legacy_rows = trip_source.load_legacy(legacy)?;
    let current_rows = trip_source.load_current(current)?;
    info!("Loading data took {:?}", now.elapsed());

    let normalizer = TripNormalizer::default();
    let legacy_trips = normalizer.normalize_legacy(legacy_rows);
    let current_trips = normalizer.normalize_current(current_rows);
    let trips = normalizer.merge_and_enrich(legacy_trips, current_trips);

    let overview = summary::Overview::of(&trips);
    info!(
        "{} trips, {} enriched, {} without rider segment",
        overview.total, overview.enriched, overview.unknown_member
    );
    if overview.non_positive_length > 0 {
        warn!(
            "{} trips have a ride length of zero or below",
            overview.non_positive_length
        );
    }

    let by_member = summary::summarize_by_member(&trips);
    let by_weekday = summary::summarize_by_weekday(&trips);
    let by_hour = summary::summarize_by_hour(&trips);

    println!("member_casual  rides  mean      median  min  max");
    for (member, stats) in &by_member {
        println!(
            "{:<13}  {:>5}  {}  {:>6.0}  {}  {}",
            member,
            stats.count,
            stats.mean_length(),
            stats.median_secs,
            stats.min_secs,
            stats.max_secs
        );
    }
    println!();
    for ((member, day), stats) in &by_weekday {
        println!(
            "{:<7} {:<9} {:>7} rides  mean {}",
            member,
            day,
            stats.count,
            stats.mean_length()
        );
    }

    if let Some(out_dir) = out_dir {
        std::fs::create_dir_all(out_dir)?;
        summary::write_member_csv(File::create(out_dir.join("by_member.csv"))?, &by_member)?;
        summary::write_weekday_csv(File::create(out_dir.join("by_weekday.csv"))?, &by_weekday)?;
        summary::write_hour_csv(File::create(out_dir.join("by_hour.csv"))?, &by_hour)?;
        info!("Wrote summary tables to {}", out_dir.display());
    }
    Ok(())
}
