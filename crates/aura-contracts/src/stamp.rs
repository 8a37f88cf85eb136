use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use uuid::Uuid;

/// Identifier and clock provider for turn normalization and reply turns.
///
/// Injected so callers and tests control ids and timestamps instead of
/// racing the wall clock.
pub trait Stamper {
    fn next_id(&self) -> String;
    fn now_millis(&self) -> i64;
}

/// Production stamper: random v4 ids, wall-clock milliseconds.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemStamper;

impl Stamper for SystemStamper {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }

    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Deterministic stamper: sequential ids under a fixed prefix and a
/// frozen timestamp.
#[derive(Debug)]
pub struct FixedStamper {
    prefix: String,
    counter: AtomicU64,
    at_millis: i64,
}

impl FixedStamper {
    pub fn new(prefix: impl Into<String>, at_millis: i64) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
            at_millis,
        }
    }
}

impl Stamper for FixedStamper {
    fn next_id(&self) -> String {
        let seq = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{}-{:02}", self.prefix, seq)
    }

    fn now_millis(&self) -> i64 {
        self.at_millis
    }
}
