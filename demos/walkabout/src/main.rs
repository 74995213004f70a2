//! walkabout — smallest end-to-end demo of the SafeCircle geofence engine.
//!
//! One subject paces away from a 100 m safe zone centered on a house in
//! Mobile, Alabama, loses GPS signal outside the boundary, and wanders back.
//! Samples flow location source → `LocationFeed` → `WatchService` →
//! `AlertLog`; the log is printed and dumped as JSON at the end.
//!
//! Run with `RUST_LOG=sc_geofence=debug` to watch the state machine decide.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use sc_core::{GeoPoint, Millis, SubjectId};
use sc_geofence::{MonitorConfig, PositionSample, SafeZone};
use sc_watch::{AlertLog, LocationFeed, WatchService};

// ── Scenario constants ────────────────────────────────────────────────────────

const SUBJECT: SubjectId = SubjectId(1);
const HOME: GeoPoint = GeoPoint {
    lat: 30.694,
    lon: -88.043,
};
const ZONE_RADIUS_M: f64 = 100.0;
const SAMPLE_INTERVAL_MS: u64 = 3_000; // location-source cadence

/// Scripted walk: offsets in degrees of latitude north of HOME
/// (~0.0009° ≈ 100 m).  The last outbound step crosses the boundary, then
/// the receiver goes quiet — the exit is confirmed by polling, not by a
/// sample.  The walk back re-enters on camera.
const OUTBOUND: &[f64] = &[0.0, 0.000_2, 0.000_5, 0.000_9, 0.001_4];
const HOMEBOUND: &[f64] = &[0.001_2, 0.000_6, 0.000_1, 0.0];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut feed = LocationFeed::new();
    let (listener, samples) = feed.subscribe();

    let mut watcher = WatchService::new(MonitorConfig::default(), AlertLog::new());
    watcher.start(SUBJECT)?;
    watcher.set_zone(SUBJECT, SafeZone::new(HOME, ZONE_RADIUS_M)?.named("Home"))?;

    // ── Outbound walk, then signal loss ──────────────────────────────────
    let mut step = 0u64;
    for d_lat in OUTBOUND {
        let now = Millis(step * SAMPLE_INTERVAL_MS);
        let point = GeoPoint::new(HOME.lat + d_lat, HOME.lon);
        feed.publish(SUBJECT, PositionSample::new(point, now).with_accuracy(8.0));
        drain(&mut watcher, &samples, step);
        step += 1;
    }

    // The last outbound sample classified outside but the stream went
    // quiet before the debounce window elapsed; poll confirms it.
    let quiet = Millis(step * SAMPLE_INTERVAL_MS);
    let confirmed = watcher.poll(quiet);
    println!("        (signal quiet — {confirmed} transition confirmed by poll)");

    // ── Homebound walk ───────────────────────────────────────────────────
    step += 1;
    for d_lat in HOMEBOUND {
        let now = Millis(step * SAMPLE_INTERVAL_MS);
        let point = GeoPoint::new(HOME.lat + d_lat, HOME.lon);
        feed.publish(SUBJECT, PositionSample::new(point, now).with_accuracy(8.0));
        drain(&mut watcher, &samples, step);
        step += 1;
    }
    feed.unsubscribe(listener);

    // ── Caregiver's alert inbox ──────────────────────────────────────────
    let log = watcher.into_sink();
    println!("\n{} alert(s) for {SUBJECT}:", log.len());
    for alert in log.list(SUBJECT) {
        println!("  [{}] {}  ({})", alert.ts, alert.message, alert.kind);
    }

    let json = serde_json::to_string_pretty(&log.list(SUBJECT))?;
    println!("\nalert log as JSON:\n{json}");

    Ok(())
}

/// Pump queued feed items through the watcher, printing each evaluation.
fn drain(
    watcher: &mut WatchService<AlertLog>,
    samples: &crossbeam_channel::Receiver<(SubjectId, PositionSample)>,
    step: u64,
) {
    for (subject, sample) in samples.try_iter() {
        let d = sample.point.distance_m(HOME);
        if let Some(kind) = watcher.push_sample(subject, sample) {
            println!("step {step:2}  {d:6.1} m  ** {kind} **");
        } else {
            println!("step {step:2}  {d:6.1} m");
        }
    }
}
