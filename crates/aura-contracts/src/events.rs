use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};

pub type EventPayload = Map<String, Value>;

/// Milestones of one engine invocation, in the order a session sees
/// them: the parsed request, then either the reply or the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatEvent {
    Request,
    Reply,
    Error,
}

impl ChatEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            ChatEvent::Request => "chat_request",
            ChatEvent::Reply => "chat_reply",
            ChatEvent::Error => "chat_error",
        }
    }
}

/// Append-only JSONL transcript of engine invocations.
///
/// Each line is one compact JSON object with default fields `event`,
/// `session_id`, and `ts`; the caller payload is merged last and may
/// override defaults.
#[derive(Debug, Clone)]
pub struct SessionLog {
    inner: Arc<SessionLogInner>,
}

#[derive(Debug)]
struct SessionLogInner {
    path: PathBuf,
    session_id: String,
    lock: Mutex<()>,
}

impl SessionLog {
    pub fn new(path: impl Into<PathBuf>, session_id: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(SessionLogInner {
                path: path.into(),
                session_id: session_id.into(),
                lock: Mutex::new(()),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    pub fn session_id(&self) -> &str {
        &self.inner.session_id
    }

    pub fn record(&self, event: ChatEvent, payload: EventPayload) -> anyhow::Result<Value> {
        let mut entry = Map::new();
        entry.insert(
            "event".to_string(),
            Value::String(event.as_str().to_string()),
        );
        entry.insert(
            "session_id".to_string(),
            Value::String(self.inner.session_id.clone()),
        );
        entry.insert(
            "ts".to_string(),
            Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, false)),
        );
        for (key, value) in payload {
            entry.insert(key, value);
        }

        if let Some(parent) = self.inner.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let line = serde_json::to_string(&entry)?;
        let _guard = self
            .inner
            .lock
            .lock()
            .map_err(|_| anyhow::anyhow!("session log lock poisoned"))?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.inner.path)?;
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;

        Ok(Value::Object(entry))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::DateTime;
    use serde_json::{Map, Value};

    use super::{ChatEvent, EventPayload, SessionLog};

    #[test]
    fn event_names_are_stable() {
        assert_eq!(ChatEvent::Request.as_str(), "chat_request");
        assert_eq!(ChatEvent::Reply.as_str(), "chat_reply");
        assert_eq!(ChatEvent::Error.as_str(), "chat_error");
    }

    #[test]
    fn record_appends_one_json_object_per_line() -> anyhow::Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("session.jsonl");
        let log = SessionLog::new(&path, "session-7");

        let mut payload = EventPayload::new();
        payload.insert("turns".to_string(), Value::Number(3.into()));
        log.record(ChatEvent::Request, payload)?;
        log.record(ChatEvent::Reply, EventPayload::new())?;

        let content = fs::read_to_string(&path)?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: Value = serde_json::from_str(lines[0])?;
        assert_eq!(first["event"], Value::String("chat_request".to_string()));
        assert_eq!(first["session_id"], Value::String("session-7".to_string()));
        assert_eq!(first["turns"], Value::Number(3.into()));
        DateTime::parse_from_rfc3339(first["ts"].as_str().unwrap_or(""))?;

        let second: Value = serde_json::from_str(lines[1])?;
        assert_eq!(second["event"], Value::String("chat_reply".to_string()));
        Ok(())
    }

    #[test]
    fn payload_overrides_default_fields() -> anyhow::Result<()> {
        let temp = tempfile::tempdir()?;
        let log = SessionLog::new(temp.path().join("session.jsonl"), "session-7");

        let mut payload = Map::new();
        payload.insert(
            "session_id".to_string(),
            Value::String("override".to_string()),
        );
        let entry = log.record(ChatEvent::Request, payload)?;
        assert_eq!(entry["session_id"], Value::String("override".to_string()));
        Ok(())
    }
}
