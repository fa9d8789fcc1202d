//! Recording stand-ins for the mapping engine and notifier.
#![allow(dead_code)]

use covidmap_core::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Create { session: usize, credential: String },
    Control { session: usize, position: ControlPosition },
    Marker { session: usize, country: String, at: [f64; 2] },
    Remove { session: usize },
}

pub type Log = Rc<RefCell<Vec<Event>>>;

/// Engine that records every call. Credentials listed in `reject` fail at
/// construction; `fail_marker` makes marker placement fail for that country.
#[derive(Default)]
pub struct RecordingEngine {
    pub log: Log,
    pub reject: Vec<String>,
    pub fail_marker: Option<String>,
    next_id: RefCell<usize>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting(credential: &str) -> Self {
        Self {
            reject: vec![credential.to_string()],
            ..Self::default()
        }
    }

    pub fn failing_marker(country: &str) -> Self {
        Self {
            fail_marker: Some(country.to_string()),
            ..Self::default()
        }
    }
}

pub struct RecordingSession {
    id: usize,
    log: Log,
    fail_marker: Option<String>,
}

impl MapEngine for RecordingEngine {
    type Mount = &'static str;
    type Session = RecordingSession;

    fn create_session(
        &self,
        _mount: &&'static str,
        credential: &str,
        _options: &MapOptions,
    ) -> Result<RecordingSession, EngineError> {
        if self.reject.iter().any(|r| r == credential) {
            return Err(EngineError::Rejected(format!("invalid token {credential}")));
        }
        let id = {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            *next
        };
        self.log.borrow_mut().push(Event::Create {
            session: id,
            credential: credential.to_string(),
        });
        Ok(RecordingSession {
            id,
            log: self.log.clone(),
            fail_marker: self.fail_marker.clone(),
        })
    }
}

impl MapSession for RecordingSession {
    fn add_control(&mut self, _kind: ControlKind, position: ControlPosition) -> Result<(), EngineError> {
        self.log.borrow_mut().push(Event::Control {
            session: self.id,
            position,
        });
        Ok(())
    }

    fn add_marker(&mut self, marker: &MarkerDescriptor) -> Result<(), EngineError> {
        if self.fail_marker.as_deref() == Some(marker.country.as_str()) {
            return Err(EngineError::Rejected(format!("cannot place {}", marker.country)));
        }
        self.log.borrow_mut().push(Event::Marker {
            session: self.id,
            country: marker.country.clone(),
            at: marker.position.to_array(),
        });
        Ok(())
    }

    fn remove(self) {
        self.log.borrow_mut().push(Event::Remove { session: self.id });
    }
}

pub type Notes = Rc<RefCell<Vec<Notification>>>;

pub fn recording_notifier() -> (Notes, impl Fn(Notification)) {
    let notes: Notes = Rc::default();
    let sink = notes.clone();
    (notes, move |n| sink.borrow_mut().push(n))
}

pub fn count(log: &Log, pred: impl Fn(&Event) -> bool) -> usize {
    log.borrow().iter().filter(|e| pred(e)).count()
}

pub fn creates(log: &Log) -> usize {
    count(log, |e| matches!(e, Event::Create { .. }))
}

pub fn removes(log: &Log) -> usize {
    count(log, |e| matches!(e, Event::Remove { .. }))
}

pub fn markers(log: &Log) -> usize {
    count(log, |e| matches!(e, Event::Marker { .. }))
}
