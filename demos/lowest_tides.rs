use low_tide::{LowTide, LowTideConfig, LowTideError, LowTideOutcome, NO_DATA_MESSAGE};
use std::env;
use std::io::Write;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Usage: `cargo run --example lowest_tides -- [region] [start] [end] [count]`
#[tokio::main]
async fn main() -> Result<(), LowTideError> {
    // Set RUST_LOG=warn (or info, debug) to see stations that failed to load
    env_logger::init();

    let mut args = env::args().skip(1);
    let region = args.next().unwrap_or_else(|| "east_coast".to_string());
    let start_date = args.next().unwrap_or_else(|| "20240105".to_string());
    let end_date = args.next().unwrap_or_else(|| "20240120".to_string());
    let count = args.next().and_then(|c| c.parse().ok()).unwrap_or(5);

    let client = LowTide::with_config(
        LowTideConfig::builder()
            .catalog_path("data/stations.json")
            .build(),
    )?;
    println!("Regions: {}", client.regions().await?.join(", "));

    let done = CancellationToken::new();
    let spinner = tokio::spawn(spin(done.clone()));

    let outcome = client
        .lowest_tides()
        .region(&region)
        .start_date(start_date.as_str())
        .end_date(end_date.as_str())
        .count(count)
        .done_signal(done)
        .call()
        .await;
    spinner.await.expect("spinner task panicked");

    match outcome? {
        LowTideOutcome::Ranked(ranked) => {
            for minimum in ranked.iter() {
                println!(
                    "One of the lowest tides in {} is at {} on {} with a value of {} feet.",
                    region,
                    minimum.station_name,
                    minimum.display_time,
                    minimum.value()
                );
            }
        }
        LowTideOutcome::NoData => println!("{}", NO_DATA_MESSAGE),
    }

    Ok(())
}

async fn spin(done: CancellationToken) {
    let frames = ['|', '/', '-', '\\'];
    let mut interval = tokio::time::interval(Duration::from_millis(100));
    for frame in frames.iter().cycle() {
        tokio::select! {
            _ = done.cancelled() => break,
            _ = interval.tick() => {
                print!("\rloading {frame}");
                let _ = std::io::stdout().flush();
            }
        }
    }
    println!("\rDone!          ");
}
