//! Tool-event logging hook
//!
//! Reads a JSON context object from the assistant runtime on stdin and
//! appends one timestamped record to the project's daily event log at
//! `.claude/logs/eventos_<YYYY-MM-DD>.jsonl`.
//!
//! The hook must never block the caller: empty or malformed input degrades
//! to an empty context, and the binary exits 0 no matter what happened.
//! Records keep the PT-BR field names of the wire format this pack has
//! always used (`tipo`, `ferramenta`, `dados`).

use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::config::HooksConfig;
use crate::error::Result;

/// Event type recorded for every tool invocation.
pub const EVENT_TYPE_TOOL_RUN: &str = "execucao_ferramenta";

/// Tool name recorded when the context does not carry one.
pub const UNKNOWN_TOOL: &str = "desconhecida";

const UNSPECIFIED_PURPOSE: &str = "não especificado";

/// Context object handed to a hook by the assistant runtime.
///
/// A plain string-to-JSON mapping, read once from stdin and immutable
/// after load.
#[derive(Debug, Clone, Default)]
pub struct HookContext {
    values: Map<String, Value>,
}

impl HookContext {
    /// Read a context from a reader (normally stdin).
    ///
    /// Empty input and unreadable input both yield an empty context.
    pub fn from_reader<R: Read>(mut reader: R) -> Self {
        let mut raw = String::new();
        if reader.read_to_string(&mut raw).is_err() {
            return Self::default();
        }
        Self::parse_lossy(&raw)
    }

    /// Parse a context from a string, tolerating malformed input.
    ///
    /// Anything that is not a JSON object yields an empty context.
    pub fn parse_lossy(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(values)) => Self { values },
            _ => Self::default(),
        }
    }

    /// Look up a raw context value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Name of the tool being invoked, or [`UNKNOWN_TOOL`].
    pub fn tool(&self) -> &str {
        self.values
            .get("tool")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_TOOL)
    }
}

/// One line of the daily event log.
#[derive(Debug, Clone, Serialize)]
pub struct EventRecord {
    pub timestamp: String,
    #[serde(rename = "tipo")]
    pub event_type: String,
    #[serde(rename = "ferramenta")]
    pub tool: String,
    #[serde(rename = "dados")]
    pub data: Value,
}

/// Appends tool-invocation events to the project's daily log file.
pub struct EventLogger {
    log_dir: PathBuf,
    debug_marker: PathBuf,
}

impl EventLogger {
    /// Create a logger rooted at `project_root` using the configured paths.
    pub fn new(project_root: &Path, config: &HooksConfig) -> Self {
        Self {
            log_dir: project_root.join(&config.log_dir),
            debug_marker: project_root.join(&config.debug_marker),
        }
    }

    /// Record a tool-invocation event from the given context.
    ///
    /// Appends one JSON line (UTF-8, non-ASCII preserved literally) to the
    /// day's log file, creating the log directory on first use.
    pub fn log_tool_run(&self, context: &HookContext) -> Result<EventRecord> {
        let record = EventRecord {
            timestamp: Local::now().to_rfc3339(),
            event_type: EVENT_TYPE_TOOL_RUN.to_string(),
            tool: context.tool().to_string(),
            data: json!({
                "entrada": context.get("input").cloned().unwrap_or_else(|| json!({})),
                "proposito": context
                    .get("purpose")
                    .and_then(Value::as_str)
                    .unwrap_or(UNSPECIFIED_PURPOSE),
            }),
        };

        self.append(&record)?;

        if self.debug_marker.exists() {
            eprintln!("[GANCHO] Evento registrado: {}", record.event_type);
        }

        Ok(record)
    }

    /// Path of the log file for the current day.
    pub fn current_log_file(&self) -> PathBuf {
        self.log_dir
            .join(format!("eventos_{}.jsonl", Local::now().format("%Y-%m-%d")))
    }

    fn append(&self, record: &EventRecord) -> Result<()> {
        std::fs::create_dir_all(&self.log_dir)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.current_log_file())?;

        let line = serde_json::to_string(record)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }
}
