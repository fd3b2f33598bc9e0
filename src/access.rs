// Access-request capture - email validation and the waitlist journal

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use uuid::Uuid;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// Same shape check the access form applies before submitting: something
/// before the @, something after, and a dot in the domain.
pub fn is_valid_email(email: &str) -> bool {
    let re = EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex compiles"));
    re.is_match(email)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessRequest {
    pub id: Uuid,
    pub email: String,
    pub requested_at: DateTime<Utc>,
}

impl AccessRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            requested_at: Utc::now(),
        }
    }
}

/// Append-only JSON-lines journal of accepted access requests.
pub struct Waitlist {
    path: PathBuf,
}

impl Waitlist {
    /// Journal at the platform data directory.
    pub fn default_location() -> Result<Self> {
        let dir = dirs::data_dir()
            .context("Could not determine data directory")?
            .join("launchdeck");
        Ok(Self {
            path: dir.join("waitlist.jsonl"),
        })
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, request: &AccessRequest) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create waitlist directory: {}", parent.display())
            })?;
        }

        let line = serde_json::to_string(request).context("Failed to serialize access request")?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open waitlist: {}", self.path.display()))?;

        writeln!(file, "{}", line)
            .with_context(|| format!("Failed to write waitlist: {}", self.path.display()))?;

        tracing::info!(email = %request.email, id = %request.id, "recorded access request");
        Ok(())
    }

    pub fn load(&self) -> Result<Vec<AccessRequest>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read waitlist: {}", self.path.display()))?;

        let mut requests = Vec::new();
        for line in contents.lines().filter(|l| !l.trim().is_empty()) {
            let request: AccessRequest =
                serde_json::from_str(line).context("Failed to parse waitlist entry")?;
            requests.push(request);
        }

        Ok(requests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.domain.io"));
        assert!(is_valid_email("a@b.co"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("no-domain@"));
        assert!(!is_valid_email("@no-local.com"));
        assert!(!is_valid_email("missing@dot"));
        assert!(!is_valid_email("spaces in@local.com"));
        assert!(!is_valid_email("user@dom ain.com"));
    }

    #[test]
    fn request_serializes_round_trip() {
        let request = AccessRequest::new("user@example.com");
        let json = serde_json::to_string(&request).unwrap();
        let back: AccessRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
