//! Unit tests for the feed, watcher, and alert log.

use sc_core::{GeoPoint, Millis, SubjectId};
use sc_geofence::{MonitorConfig, MonitorPhase, PositionSample, SafeZone, Transition};

use crate::{AlertLog, LocationFeed, WatchError, WatchService};

fn config() -> MonitorConfig {
    MonitorConfig {
        buffer_m: 10.0,
        debounce_ms: 250,
    }
}

fn zone_at_origin(radius_m: f64) -> SafeZone {
    SafeZone::new(GeoPoint::new(0.0, 0.0), radius_m).unwrap()
}

fn sample(lat: f64, at: u64) -> PositionSample {
    PositionSample::new(GeoPoint::new(lat, 0.0), Millis(at))
}

// ~0.00135° of latitude ≈ 150 m from the origin.
const LAT_150M: f64 = 0.001_35;

#[cfg(test)]
mod watcher {
    use super::*;

    #[test]
    fn start_stop_lifecycle() {
        let mut w = WatchService::new(config(), AlertLog::new());
        let s = SubjectId(1);

        assert!(!w.is_watching(s));
        w.start(s).unwrap();
        assert!(w.is_watching(s));
        assert!(matches!(w.start(s), Err(WatchError::AlreadyWatched(_))));

        w.stop(s).unwrap();
        assert!(!w.is_watching(s));
        assert!(matches!(w.stop(s), Err(WatchError::NotWatched(_))));
        assert_eq!(w.watched_count(), 0);
    }

    #[test]
    fn exit_and_return_produce_one_alert_each() {
        let mut w = WatchService::new(config(), AlertLog::new());
        let s = SubjectId(1);
        w.start(s).unwrap();
        w.set_zone(s, zone_at_origin(100.0).named("Home")).unwrap();

        assert_eq!(w.push_sample(s, sample(0.0, 0)), None); // seeds baseline
        assert_eq!(w.push_sample(s, sample(LAT_150M, 1_000)), None);
        assert_eq!(
            w.push_sample(s, sample(LAT_150M, 1_300)),
            Some(Transition::Exited)
        );
        assert_eq!(w.push_sample(s, sample(LAT_150M, 1_600)), None);

        assert_eq!(w.push_sample(s, sample(0.0, 2_000)), None);
        assert_eq!(
            w.push_sample(s, sample(0.0, 2_300)),
            Some(Transition::Entered)
        );

        let log = w.sink();
        assert_eq!(log.len(), 2);
        let alerts = log.list(s);
        assert_eq!(alerts[0].kind, Transition::Entered);
        assert_eq!(alerts[1].kind, Transition::Exited);
        assert!(alerts[1].message.contains("Home"));
        assert!((alerts[1].distance_m - 150.0).abs() < 2.0);
    }

    #[test]
    fn poll_dispatches_quiet_stream_confirmations() {
        let mut w = WatchService::new(config(), AlertLog::new());
        let s = SubjectId(3);
        w.start(s).unwrap();
        w.set_zone(s, zone_at_origin(100.0)).unwrap();

        w.push_sample(s, sample(0.0, 0));
        w.push_sample(s, sample(LAT_150M, 1_000)); // pending, then silence

        assert_eq!(w.poll(Millis(1_100)), 0);
        assert_eq!(w.poll(Millis(1_300)), 1);
        assert_eq!(w.poll(Millis(2_000)), 0);
        assert_eq!(w.sink().len(), 1);
    }

    #[test]
    fn stop_cancels_pending_so_no_stale_event_fires() {
        let mut w = WatchService::new(config(), AlertLog::new());
        let s = SubjectId(4);
        w.start(s).unwrap();
        w.set_zone(s, zone_at_origin(100.0)).unwrap();

        w.push_sample(s, sample(0.0, 0));
        w.push_sample(s, sample(LAT_150M, 1_000)); // pending exit
        w.stop(s).unwrap();

        assert_eq!(w.poll(Millis(10_000)), 0);
        assert!(w.sink().is_empty());
    }

    #[test]
    fn unwatched_samples_are_dropped() {
        let mut w = WatchService::new(config(), AlertLog::new());
        assert_eq!(w.push_sample(SubjectId(9), sample(LAT_150M, 0)), None);
        assert!(w.sink().is_empty());
    }

    #[test]
    fn subjects_are_independent() {
        let mut w = WatchService::new(config(), AlertLog::new());
        let (a, b) = (SubjectId(1), SubjectId(2));
        w.start(a).unwrap();
        w.start(b).unwrap();
        w.set_zone(a, zone_at_origin(100.0)).unwrap();
        w.set_zone(b, zone_at_origin(100.0)).unwrap();

        w.push_sample(a, sample(0.0, 0));
        w.push_sample(b, sample(0.0, 0));

        // Only subject A walks out.
        w.push_sample(a, sample(LAT_150M, 1_000));
        w.push_sample(a, sample(LAT_150M, 1_300));

        assert_eq!(w.sink().list(a).len(), 1);
        assert!(w.sink().list(b).is_empty());
        assert_eq!(
            w.monitor(b).unwrap().phase(),
            MonitorPhase::ConfirmedInside
        );
    }

    #[test]
    fn invalid_zone_surfaces_and_keeps_state() {
        let mut w = WatchService::new(config(), AlertLog::new());
        let s = SubjectId(1);
        w.start(s).unwrap();
        w.set_zone(s, zone_at_origin(100.0)).unwrap();
        w.push_sample(s, sample(0.0, 0));

        let bad = SafeZone {
            center: GeoPoint::new(0.0, 0.0),
            radius_m: -1.0,
            name: None,
        };
        assert!(matches!(w.set_zone(s, bad), Err(WatchError::Zone(_))));
        assert_eq!(w.monitor(s).unwrap().zone().unwrap().radius_m, 100.0);
        assert_eq!(w.monitor(s).unwrap().phase(), MonitorPhase::ConfirmedInside);
    }
}

#[cfg(test)]
mod feed {
    use super::*;

    #[test]
    fn fan_out_and_latest_cache() {
        let mut feed = LocationFeed::new();
        let (_ia, rx_a) = feed.subscribe();
        let (_ib, rx_b) = feed.subscribe();
        let s = SubjectId(1);

        feed.publish(s, sample(0.0, 100));
        feed.publish(s, sample(LAT_150M, 200));

        assert_eq!(rx_a.try_iter().count(), 2);
        assert_eq!(rx_b.try_iter().count(), 2);
        assert_eq!(feed.latest(s).unwrap().captured_at, Millis(200));
        assert!(feed.latest(SubjectId(9)).is_none());
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut feed = LocationFeed::new();
        let (id, rx) = feed.subscribe();
        assert!(feed.unsubscribe(id));
        assert!(!feed.unsubscribe(id));

        feed.publish(SubjectId(1), sample(0.0, 0));
        assert_eq!(rx.try_iter().count(), 0);
        assert_eq!(feed.subscriber_count(), 0);
    }

    #[test]
    fn dropped_receiver_is_pruned_on_publish() {
        let mut feed = LocationFeed::new();
        let (_id, rx) = feed.subscribe();
        drop(rx);
        assert_eq!(feed.subscriber_count(), 1);
        feed.publish(SubjectId(1), sample(0.0, 0));
        assert_eq!(feed.subscriber_count(), 0);
    }

    #[test]
    fn feed_to_watcher_end_to_end() {
        let mut feed = LocationFeed::new();
        let (_id, rx) = feed.subscribe();
        let mut w = WatchService::new(config(), AlertLog::new());
        let s = SubjectId(1);
        w.start(s).unwrap();
        w.set_zone(s, zone_at_origin(100.0)).unwrap();

        feed.publish(s, sample(0.0, 0));
        feed.publish(s, sample(LAT_150M, 1_000));
        feed.publish(s, sample(LAT_150M, 1_300));

        for (subject, sample) in rx.try_iter() {
            w.push_sample(subject, sample);
        }
        assert_eq!(w.sink().len(), 1);
    }
}

#[cfg(test)]
mod alert_log {
    use super::*;

    #[test]
    fn list_is_newest_first_and_read_marking_works() {
        let mut w = WatchService::new(config(), AlertLog::new());
        let s = SubjectId(1);
        w.start(s).unwrap();
        w.set_zone(s, zone_at_origin(100.0)).unwrap();

        w.push_sample(s, sample(0.0, 0));
        w.push_sample(s, sample(LAT_150M, 1_000));
        w.push_sample(s, sample(LAT_150M, 1_300)); // exit
        w.push_sample(s, sample(0.0, 2_000));
        w.push_sample(s, sample(0.0, 2_300)); // enter

        let log = w.sink_mut();
        assert_eq!(log.unread_count(s), 2);
        let alerts = log.list(s);
        assert!(alerts[0].ts > alerts[1].ts);

        log.mark_read(s);
        assert_eq!(log.unread_count(s), 0);
    }

    #[test]
    fn into_sink_returns_the_log() {
        let mut w = WatchService::new(config(), AlertLog::new());
        let s = SubjectId(1);
        w.start(s).unwrap();
        w.set_zone(s, zone_at_origin(100.0)).unwrap();
        w.push_sample(s, sample(0.0, 0));
        w.push_sample(s, sample(LAT_150M, 1_000));
        w.push_sample(s, sample(LAT_150M, 1_300));

        let log = w.into_sink();
        assert_eq!(log.len(), 1);
    }
}
