use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult, ReportError};

const REPORT_PREFIX: &str = "report-";
const REPORT_EXTENSION: &str = "html";

/// `<report_dir>/report-<date_token>.html`
#[must_use]
pub fn report_path(report_dir: &Path, date_token: &str) -> PathBuf {
    report_dir.join(format!(
        "{}{}.{}",
        REPORT_PREFIX, date_token, REPORT_EXTENSION
    ))
}

#[must_use]
pub fn report_exists(report_dir: &Path, date_token: &str) -> bool {
    report_path(report_dir, date_token).is_file()
}

/// Writes the report next to its final location and renames it into place,
/// so readers never observe a partial file.
///
/// # Errors
///
/// Returns [`ReportError::CreateDir`] when the report directory cannot be
/// created and [`ReportError::Write`] when writing or renaming fails.
pub fn write_report(path: &Path, content: &str) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|err| {
            AppError::report(ReportError::CreateDir {
                path: parent.to_path_buf(),
                source: err,
            })
        })?;
    }

    let tmp_path = path.with_extension("html.tmp");
    let write_error = |err: std::io::Error| {
        AppError::report(ReportError::Write {
            path: path.to_path_buf(),
            source: err,
        })
    };

    let written = std::fs::File::create(&tmp_path)
        .and_then(|mut file| {
            file.write_all(content.as_bytes())?;
            file.sync_all()
        })
        .and_then(|()| std::fs::rename(&tmp_path, path));
    if let Err(err) = written {
        if let Err(cleanup_err) = std::fs::remove_file(&tmp_path)
            && cleanup_err.kind() != std::io::ErrorKind::NotFound
        {
            tracing::warn!(path = %tmp_path.display(), error = %cleanup_err, "failed to remove partial report");
        }
        return Err(write_error(err));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn report_path_uses_date_token() -> Result<(), String> {
        let path = report_path(Path::new("reports"), "20170630");
        if path != Path::new("reports").join("report-20170630.html") {
            return Err(format!("Unexpected path: {}", path.display()));
        }
        Ok(())
    }

    #[test]
    fn report_exists_tracks_written_reports() -> Result<(), String> {
        let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
        let report_dir = dir.path().join("nested").join("reports");
        if report_exists(&report_dir, "20170708") {
            return Err("Report must not exist yet".to_owned());
        }

        let path = report_path(&report_dir, "20170708");
        write_report(&path, "<html></html>").map_err(|err| format!("write failed: {}", err))?;

        if !report_exists(&report_dir, "20170708") {
            return Err("Report must exist after write".to_owned());
        }
        let content =
            std::fs::read_to_string(&path).map_err(|err| format!("read failed: {}", err))?;
        if content != "<html></html>" {
            return Err(format!("Unexpected content: {}", content));
        }
        if path.with_extension("html.tmp").exists() {
            return Err("Temporary file left behind".to_owned());
        }
        Ok(())
    }

    #[test]
    fn write_report_into_blocked_dir_fails_cleanly() -> Result<(), String> {
        let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
        let blocker = dir.path().join("reports");
        std::fs::write(&blocker, "not a directory")
            .map_err(|err| format!("write failed: {}", err))?;

        let path = report_path(&blocker, "20170708");
        if write_report(&path, "<html></html>").is_ok() {
            return Err("Expected write to fail".to_owned());
        }
        if path.exists() {
            return Err("No report should be left behind".to_owned());
        }
        Ok(())
    }
}
