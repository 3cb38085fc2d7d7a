use std::fs;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use chrono::{Duration, NaiveDate};
use serde::Deserialize;
use tracing::warn;

use crate::model::task::{Task, now_stamp};

/// Message shown in the UI when a fetch fails. The underlying error goes to
/// the log only.
pub const GENERIC_FETCH_ERROR: &str = "Failed to fetch tasks. Please try again later.";

/// Error type for task loading
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse task data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the initial task collection comes from.
pub trait TaskSource: Send {
    fn fetch(&self) -> Result<Vec<Task>, FetchError>;
    /// Short description for logging
    fn describe(&self) -> String;
}

/// Wire envelope for task data: `{"data": [ ... ]}`.
#[derive(Debug, Deserialize)]
struct TaskListPayload {
    data: Vec<Task>,
}

/// Tasks from a JSON file.
pub struct JsonFileSource {
    pub path: PathBuf,
}

impl TaskSource for JsonFileSource {
    fn fetch(&self) -> Result<Vec<Task>, FetchError> {
        let text = fs::read_to_string(&self.path).map_err(|e| FetchError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        let payload: TaskListPayload = serde_json::from_str(&text)?;
        Ok(payload.data)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Generated demo tasks, every third one completed.
pub struct SampleSource {
    pub count: usize,
}

impl TaskSource for SampleSource {
    fn fetch(&self) -> Result<Vec<Task>, FetchError> {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .unwrap_or_else(now_stamp);
        let tasks = (1..=self.count)
            .map(|n| {
                let mut task = Task::new(n as u64, format!("Item {n}"));
                if n % 3 == 0 {
                    task.set_done(true, base + Duration::minutes(n as i64));
                }
                task
            })
            .collect();
        Ok(tasks)
    }

    fn describe(&self) -> String {
        format!("{} sample tasks", self.count)
    }
}

/// Outcome of a background fetch.
#[derive(Debug)]
pub enum FetchEvent {
    Done(Vec<Task>),
    Failed(String),
}

/// Handle to a fetch running on its own thread.
pub struct FetchHandle {
    rx: mpsc::Receiver<FetchEvent>,
    finished: bool,
}

/// Run `source.fetch()` on a background thread.
/// The returned handle's `poll()` should be called each tick.
pub fn spawn_fetch(source: Box<dyn TaskSource>) -> FetchHandle {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let event = match source.fetch() {
            Ok(tasks) => FetchEvent::Done(tasks),
            Err(e) => {
                warn!(source = %source.describe(), error = %e, "task fetch failed");
                FetchEvent::Failed(GENERIC_FETCH_ERROR.to_string())
            }
        };
        let _ = tx.send(event);
    });
    FetchHandle {
        rx,
        finished: false,
    }
}

impl FetchHandle {
    /// Non-blocking poll for the fetch outcome. Yields it at most once;
    /// a fetch thread that died without reporting counts as a failure.
    pub fn poll(&mut self) -> Option<FetchEvent> {
        if self.finished {
            return None;
        }
        match self.rx.try_recv() {
            Ok(event) => {
                self.finished = true;
                Some(event)
            }
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => {
                self.finished = true;
                Some(FetchEvent::Failed(GENERIC_FETCH_ERROR.to_string()))
            }
        }
    }
}
