use super::{FeedbackEntry, FeedbackSubmission};
use crate::error::{CheckInError, CiResult};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

/// Feedback persisted as one pretty-printed JSON array in a flat file.
///
/// Appends are read-modify-write. The lock serialises writers that share a
/// store within this process; separate processes writing the same file are
/// not coordinated.
#[derive(Debug, Clone)]
pub struct FeedbackStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl FeedbackStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored entries. A missing file reads as empty. An unreadable or
    /// corrupt file is logged and also reads as empty.
    pub fn list(&self) -> Vec<FeedbackEntry> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        self.read_entries().unwrap_or_else(|e| {
            warn!("Feedback file {:?} could not be loaded ({}). Treating as empty.", self.path, e);
            Vec::new()
        })
    }

    /// Appends one entry. Fails without touching the file when the existing
    /// file cannot be read or parsed, so stored feedback is never replaced.
    pub fn append(&self, submission: FeedbackSubmission) -> CiResult<FeedbackEntry> {
        let entry = FeedbackEntry::new(submission);

        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut entries = self.read_entries().map_err(|e| {
            CheckInError::Store(format!(
                "Refusing to overwrite feedback file {:?}: {}",
                self.path, e
            ))
        })?;
        entries.push(entry.clone());
        self.write_entries(&entries)?;

        info!(
            "📨 Feedback {} stored (score {}, {} total)",
            &entry.id[0..8],
            entry.overall_score,
            entries.len()
        );
        Ok(entry)
    }

    /// CSV with a header row, one line per entry.
    pub fn export_csv<W: Write>(&self, writer: W) -> CiResult<usize> {
        let entries = self.list();
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record([
            "id",
            "submitted_at",
            "overall_score",
            "enjoyment",
            "accurate",
            "useful",
            "suggestion",
        ])?;
        for e in &entries {
            let score = e.overall_score.to_string();
            let enjoyment = e.enjoyment.to_string();
            wtr.write_record([
                e.id.as_str(),
                e.submitted_at.as_str(),
                score.as_str(),
                enjoyment.as_str(),
                e.accurate.as_str(),
                e.useful.as_str(),
                e.suggestion.as_str(),
            ])?;
        }
        wtr.flush()?;
        Ok(entries.len())
    }

    fn read_entries(&self) -> CiResult<Vec<FeedbackEntry>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No feedback file at {:?} yet", self.path);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_entries(&self, entries: &[FeedbackEntry]) -> CiResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
