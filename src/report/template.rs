use std::path::Path;

use crate::analysis::ReportRow;
use crate::error::{AppError, AppResult, ReportError};

/// Replaced with the JSON array of report rows.
pub const TABLE_PLACEHOLDER: &str = "$table_json";

const BUILTIN_TEMPLATE: &str = include_str!("../../assets/report.html");

/// Reads the report template, falling back to the one shipped in the binary.
///
/// # Errors
///
/// Returns [`ReportError::ReadTemplate`] when a configured template cannot be
/// read.
pub fn load_template(path: Option<&Path>) -> AppResult<String> {
    let Some(path) = path else {
        return Ok(BUILTIN_TEMPLATE.to_owned());
    };
    std::fs::read_to_string(path).map_err(|err| {
        AppError::report(ReportError::ReadTemplate {
            path: path.to_path_buf(),
            source: err,
        })
    })
}

/// Substitutes the rows into every placeholder of `template`.
///
/// # Errors
///
/// Returns [`ReportError::MissingPlaceholder`] when the template has nowhere
/// to put the table and [`ReportError::Serialize`] when the rows cannot be
/// encoded.
pub fn render_template(template: &str, rows: &[ReportRow]) -> AppResult<String> {
    if !template.contains(TABLE_PLACEHOLDER) {
        return Err(AppError::report(ReportError::MissingPlaceholder {
            placeholder: TABLE_PLACEHOLDER,
        }));
    }
    let table = serde_json::to_string(rows)
        .map_err(|err| AppError::report(ReportError::Serialize { source: err }))?;
    Ok(template.replace(TABLE_PLACEHOLDER, &escape_for_script(&table)))
}

/// Escapes the characters that let a JSON string end an inline `<script>`
/// element. The `\uXXXX` forms decode to the same JSON value.
fn escape_for_script(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for ch in json.chars() {
        match ch {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppResult;

    fn row() -> ReportRow {
        ReportRow {
            url: "/api/a".to_owned(),
            count: 2,
            count_perc: 66.667,
            time_sum: 0.4,
            time_perc: 66.667,
            time_avg: 0.2,
            time_max: 0.3,
            time_med: 0.2,
        }
    }

    #[test]
    fn render_template_inlines_rows_as_json() -> AppResult<()> {
        let rendered = render_template("<script>var table = $table_json;</script>", &[row()])?;
        let expected = r#"<script>var table = [{"url":"/api/a","count":2,"count_perc":66.667,"time_sum":0.4,"time_perc":66.667,"time_avg":0.2,"time_max":0.3,"time_med":0.2}];</script>"#;
        if rendered != expected {
            return Err(AppError::report(format!("Unexpected render: {}", rendered)));
        }
        Ok(())
    }

    #[test]
    fn render_template_keeps_urls_inside_script() -> AppResult<()> {
        let mut hostile = row();
        hostile.url = "/x</script><script>alert(1)</script>&y".to_owned();
        let template = load_template(None)?;
        let rendered = render_template(&template, &[hostile])?;

        let Some(start) = rendered.find("var table = ") else {
            return Err(AppError::report("Table assignment missing"));
        };
        let Some(table) = rendered.get(start..).and_then(|rest| rest.lines().next()) else {
            return Err(AppError::report("Table line missing"));
        };
        if table.contains('<') || table.contains('>') || table.contains('&') {
            return Err(AppError::report(format!("Unescaped table: {}", table)));
        }

        let json = table
            .trim_start_matches("var table = ")
            .trim_end_matches(';');
        let decoded: serde_json::Value = serde_json::from_str(json)
            .map_err(|err| AppError::report(format!("Table is not JSON: {}", err)))?;
        let url = decoded
            .get(0)
            .and_then(|value| value.get("url"))
            .and_then(serde_json::Value::as_str);
        if url != Some("/x</script><script>alert(1)</script>&y") {
            return Err(AppError::report(format!("URL changed: {:?}", url)));
        }
        Ok(())
    }

    #[test]
    fn render_template_without_placeholder_fails() -> AppResult<()> {
        match render_template("<html></html>", &[row()]) {
            Err(AppError::Report(ReportError::MissingPlaceholder { .. })) => Ok(()),
            other => Err(AppError::report(format!(
                "Expected MissingPlaceholder, got {:?}",
                other
            ))),
        }
    }

    #[test]
    fn builtin_template_has_placeholder() -> AppResult<()> {
        let template = load_template(None)?;
        let rendered = render_template(&template, &[])?;
        if !rendered.contains("var table = [];") {
            return Err(AppError::report("Built-in template did not take the table"));
        }
        Ok(())
    }
}
