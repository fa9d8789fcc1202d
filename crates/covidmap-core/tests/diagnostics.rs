//! Session failures are logged once. Kept in its own test binary because it
//! installs a global logger.

mod common;

use common::*;
use covidmap_core::prelude::*;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;

static RECORDS: Mutex<Vec<(Level, String, String)>> = Mutex::new(Vec::new());

struct Capture;

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.lock().unwrap().push((
            record.level(),
            record.target().to_string(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture;

#[test]
fn rejected_session_logs_one_error() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let engine = RecordingEngine::rejecting("pk.bad");
    let (notes, notifier) = recording_notifier();
    let mut view = MapView::new(engine, notifier, &DashboardConfig::default());
    view.mount("map");
    view.set_credential("pk.bad");

    let records = RECORDS.lock().unwrap();
    let errors: Vec<_> = records
        .iter()
        .filter(|(level, _, _)| *level == Level::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].1, "covidmap_core::map_view");
    assert!(errors[0].2.starts_with("Error initializing map:"));
    assert!(errors[0].2.contains("pk.bad"));
    assert_eq!(notes.borrow().len(), 1);
}
