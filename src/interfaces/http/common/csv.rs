//! Minimal CSV writer for the admin export endpoints

use axum::http::header;
use axum::response::{IntoResponse, Response};
use chrono::Utc;

/// Quote a field when it contains a delimiter, quote or newline.
fn escape(field: &str) -> String {
    if field.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render rows (header first) as CSV text.
pub fn render(rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    for row in rows {
        let line: Vec<String> = row.iter().map(|f| escape(f)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

/// Export filename in the `<Resource>-YYYYMMDD-HHMMSS.csv` convention.
pub fn export_filename(resource: &str) -> String {
    format!("{}-{}.csv", resource, Utc::now().format("%Y%m%d-%H%M%S"))
}

/// A CSV download response with an attachment disposition.
pub fn attachment(resource: &str, rows: &[Vec<String>]) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export_filename(resource)),
            ),
        ],
        render(rows),
    )
        .into_response()
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields_are_untouched() {
        let rows = vec![
            vec!["id".to_string(), "name".to_string()],
            vec!["1".to_string(), "Studio".to_string()],
        ];
        assert_eq!(render(&rows), "id,name\n1,Studio\n");
    }

    #[test]
    fn fields_with_commas_and_quotes_are_quoted() {
        let rows = vec![vec!["say \"hi\", twice".to_string()]];
        assert_eq!(render(&rows), "\"say \"\"hi\"\", twice\"\n");
    }

    #[test]
    fn filename_carries_the_resource_name() {
        let name = export_filename("User");
        assert!(name.starts_with("User-"));
        assert!(name.ends_with(".csv"));
    }
}
