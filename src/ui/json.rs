//! JSON output utilities for CLI commands.
//!
//! Every command emits NDJSON: one event object per line on stdout.

use std::io::{self, Write};

use serde::Serialize;

use assetprune::application::CleanResult;
use assetprune::AssetRecord;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub dir: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str, dir: &'a str) -> Self {
        Self {
            event: "start",
            command,
            dir,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// One classified file
#[derive(Debug, Clone, Serialize)]
pub struct FileEvent<'a> {
    pub event: &'static str,
    #[serde(flatten)]
    pub record: &'a AssetRecord,
}

impl<'a> FileEvent<'a> {
    pub fn new(record: &'a AssetRecord) -> Self {
        Self {
            event: "file",
            record,
        }
    }
}

/// Outcome for one file during clean
#[derive(Debug, Clone, Serialize)]
pub struct CleanFileEvent<'a> {
    pub event: &'static str,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Final summary for clean
#[derive(Debug, Clone, Serialize)]
pub struct CleanCompleteEvent {
    pub event: &'static str,
    pub deleted: usize,
    pub retained: usize,
    pub errors: usize,
    pub dry_run: bool,
    pub success: bool,
}

impl CleanCompleteEvent {
    pub fn from_result(result: &CleanResult) -> Self {
        Self {
            event: "clean_complete",
            deleted: result.deleted.len(),
            retained: result.retained.len(),
            errors: result.errors.len(),
            dry_run: result.dry_run,
            success: result.is_success(),
        }
    }
}

/// Write a typed event to a custom writer.
pub fn write_typed_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_typed_event(&mut out, event)
}

/// Emit every per-file event and the summary for a clean run
pub fn write_clean_events<W: Write>(out: &mut W, result: &CleanResult) -> io::Result<()> {
    let deleted_event = if result.dry_run {
        "would_delete"
    } else {
        "file_deleted"
    };

    for name in &result.deleted {
        write_typed_event(
            out,
            &CleanFileEvent {
                event: deleted_event,
                name,
                reason: None,
            },
        )?;
    }
    for retained in &result.retained {
        write_typed_event(
            out,
            &CleanFileEvent {
                event: "file_retained",
                name: &retained.name,
                reason: Some(retained.decision.to_string()),
            },
        )?;
    }
    for failure in &result.errors {
        write_typed_event(
            out,
            &CleanFileEvent {
                event: "file_error",
                name: &failure.name,
                reason: Some(failure.message.clone()),
            },
        )?;
    }
    write_typed_event(out, &CleanCompleteEvent::from_result(result))
}
