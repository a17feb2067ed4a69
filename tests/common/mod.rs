//! Shared test utilities: recording surfaces and controllable sources.

#![allow(dead_code, unused_imports)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;
use triad::behavior::{ActivityIndicator, ErrorBanner, TableSurface};
use triad::dispatch::{Bridge, Message};
use triad::settings::{SectionSource, SettingsError, SettingsSurfaces};

/// One visible change on a recording surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Loading(bool),
    Table(Vec<String>),
    Error(Option<String>),
}

pub type RenderLog = Arc<Mutex<Vec<Rendered>>>;

pub struct RecordingIndicator {
    animating: Mutex<bool>,
    log: RenderLog,
}

impl ActivityIndicator for RecordingIndicator {
    fn start(&self) {
        *self.animating.lock() = true;
        self.log.lock().push(Rendered::Loading(true));
    }

    fn stop(&self) {
        *self.animating.lock() = false;
        self.log.lock().push(Rendered::Loading(false));
    }

    fn is_animating(&self) -> bool {
        *self.animating.lock()
    }
}

pub struct RecordingTable {
    sections: Mutex<Vec<String>>,
    log: RenderLog,
}

impl TableSurface for RecordingTable {
    fn reload(&self, sections: Vec<String>) {
        *self.sections.lock() = sections.clone();
        self.log.lock().push(Rendered::Table(sections));
    }

    fn sections(&self) -> Vec<String> {
        self.sections.lock().clone()
    }
}

pub struct RecordingBanner {
    message: Mutex<Option<String>>,
    log: RenderLog,
}

impl ErrorBanner for RecordingBanner {
    fn present(&self, message: &str) {
        *self.message.lock() = Some(message.to_string());
        self.log.lock().push(Rendered::Error(Some(message.to_string())));
    }

    fn dismiss(&self) {
        *self.message.lock() = None;
        self.log.lock().push(Rendered::Error(None));
    }

    fn message(&self) -> Option<String> {
        self.message.lock().clone()
    }
}

/// Surfaces that append every visible change to one shared log.
pub fn recording_surfaces() -> (SettingsSurfaces, RenderLog) {
    let log = RenderLog::default();
    let surfaces = SettingsSurfaces {
        indicator: Arc::new(RecordingIndicator {
            animating: Mutex::new(false),
            log: Arc::clone(&log),
        }),
        table: Arc::new(RecordingTable {
            sections: Mutex::new(Vec::new()),
            log: Arc::clone(&log),
        }),
        banner: Arc::new(RecordingBanner {
            message: Mutex::new(None),
            log: Arc::clone(&log),
        }),
    };
    (surfaces, log)
}

pub fn sections(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Source that holds every call until `open` is called.
pub struct GatedSource {
    gate: Notify,
    result: Result<Vec<String>, SettingsError>,
    calls: AtomicUsize,
}

impl GatedSource {
    pub fn succeeding(sections: Vec<String>) -> Arc<Self> {
        Arc::new(Self {
            gate: Notify::new(),
            result: Ok(sections),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            gate: Notify::new(),
            result: Err(SettingsError::unavailable(message)),
            calls: AtomicUsize::new(0),
        })
    }

    /// Let one pending (or the next) call complete.
    pub fn open(&self) {
        self.gate.notify_one();
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SectionSource for GatedSource {
    async fn load_sections(&self) -> Result<Vec<String>, SettingsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        self.result.clone()
    }
}

/// Closure bridge that records every message it receives.
pub fn spy<M>() -> (Bridge<M>, Arc<Mutex<Vec<M>>>)
where
    M: Message,
{
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let bridge = Bridge::from_fn(move |message: M| sink.lock().push(message));
    (bridge, seen)
}
