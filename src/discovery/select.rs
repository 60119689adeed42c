use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{AppError, AppResult, DiscoveryError};

/// `<anything>YYYYMMDD[.gz|.log|.txt]`, e.g. `nginx-access-ui.log-20170630.gz`.
const LOG_NAME_PATTERN: &str = r"(?:^|\D)(?P<date>\d{8})(?P<ext>\.(?:gz|log|txt))?$";
const DATE_TOKEN_FORMAT: &str = "%Y%m%d";

#[expect(
    clippy::expect_used,
    reason = "Pattern is a literal exercised by the selector tests"
)]
static LOG_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(LOG_NAME_PATTERN).expect("log name pattern compiles"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compression {
    Plain,
    Gzip,
}

impl Compression {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Compression::Plain => "plain",
            Compression::Gzip => "gzip",
        }
    }
}

/// The log chosen for this run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub file_name: String,
    pub date: NaiveDate,
    pub compression: Compression,
}

impl SelectedFile {
    /// The embedded date as it appears in file names, `YYYYMMDD`.
    #[must_use]
    pub fn date_token(&self) -> String {
        self.date.format(DATE_TOKEN_FORMAT).to_string()
    }

    fn supersedes(&self, other: &Self) -> bool {
        (self.date, self.file_name.as_str()) > (other.date, other.file_name.as_str())
    }
}

/// Reads the date token and compression hint from a log file name.
///
/// Returns `None` for names outside the convention, including tokens that
/// are not calendar dates.
#[must_use]
pub fn parse_log_name(name: &str) -> Option<(NaiveDate, Compression)> {
    let captures = LOG_NAME.captures(name)?;
    let token = captures.name("date")?.as_str();
    let date = NaiveDate::parse_from_str(token, DATE_TOKEN_FORMAT).ok()?;
    let compression = match captures.name("ext").map(|ext| ext.as_str()) {
        Some(".gz") => Compression::Gzip,
        Some(_) | None => Compression::Plain,
    };
    Some((date, compression))
}

/// Picks the log with the most recent embedded date in `dir`.
///
/// Names outside the convention are skipped. When two files carry the same
/// date the lexicographically greatest name wins, so the choice does not
/// depend on directory listing order.
///
/// # Errors
///
/// Returns [`DiscoveryError::LogDirMissing`] when `dir` is not a directory and
/// [`DiscoveryError::ReadDir`] when it cannot be listed.
pub fn select_latest(dir: &Path) -> AppResult<Option<SelectedFile>> {
    if !dir.is_dir() {
        return Err(AppError::discovery(DiscoveryError::LogDirMissing {
            path: dir.to_path_buf(),
        }));
    }
    let read_dir_error = |err: std::io::Error| {
        AppError::discovery(DiscoveryError::ReadDir {
            path: dir.to_path_buf(),
            source: err,
        })
    };

    let mut latest: Option<SelectedFile> = None;
    for entry in std::fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        if entry.file_type().is_ok_and(|kind| kind.is_dir()) {
            continue;
        }
        let Some(file_name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        let Some((date, compression)) = parse_log_name(&file_name) else {
            tracing::trace!(file = %file_name, "skipping file outside log naming convention");
            continue;
        };
        let candidate = SelectedFile {
            path: entry.path(),
            file_name,
            date,
            compression,
        };
        if latest
            .as_ref()
            .is_none_or(|current| candidate.supersedes(current))
        {
            latest = Some(candidate);
        }
    }
    Ok(latest)
}
