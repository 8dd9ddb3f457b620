// main.rs
//
// Traces every preset and prints a short summary of each curve. Pass a
// share query (e.g. `R=200&r=120&d=80,40&inside=true`) to trace that instead.
// Set RUST_LOG=debug to see the period computation.

use spirograph::{CurveRequest, CurveResult, Preset, generate};
use std::process::ExitCode;

fn summarize(label: &str, request: &CurveRequest, result: &CurveResult) {
    println!(
        "{label}: R={} r={} {} -> {} revolutions, {} pens, {} points",
        request.ring_radius,
        request.wheel_radius,
        request.mode,
        result.period.revolutions,
        result.len(),
        result.point_count(),
    );
    if let Some(rect) = result.bounding_rect() {
        println!(
            "    bounds ({:.2}, {:.2}) .. ({:.2}, {:.2})",
            rect.min().x,
            rect.min().y,
            rect.max().x,
            rect.max().y
        );
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let requests: Vec<(String, CurveRequest)> = match std::env::args().nth(1) {
        Some(query) => match CurveRequest::from_query_string(&query) {
            Ok(request) => vec![("query".to_string(), request)],
            Err(e) => {
                log::error!("Failed to parse '{}': {}", query, e);
                return ExitCode::FAILURE;
            },
        },
        None => Preset::ALL
            .into_iter()
            .map(|preset| (preset.to_string(), preset.request()))
            .collect(),
    };

    for (label, request) in &requests {
        match generate(request) {
            Ok(result) => summarize(label, request, &result),
            Err(e) => {
                log::error!("Failed to trace {}: {}", label, e);
                return ExitCode::FAILURE;
            },
        }
    }

    ExitCode::SUCCESS
}
