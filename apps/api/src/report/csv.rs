use crate::models::ScoreResult;

/// File name offered to clients downloading the export.
pub const REPORT_FILE_NAME: &str = "resume_relevance_report.csv";

const HEADER: [&str; 7] = [
    "Resume",
    "Keyword Score",
    "Semantic Score",
    "Final Score",
    "Verdict",
    "Matched Keywords",
    "Missing Keywords",
];

/// Renders results as RFC 4180 CSV with a header row.
pub fn render_csv(results: &[ScoreResult]) -> String {
    let mut out = String::new();
    push_row(&mut out, HEADER.iter().map(|h| h.to_string()));

    for r in results {
        push_row(
            &mut out,
            [
                r.resume_id.clone(),
                r.lexical_score.to_string(),
                r.semantic_score.to_string(),
                r.final_score.to_string(),
                r.verdict.label().to_string(),
                r.matched_keywords.join(", "),
                r.missing_keywords.join(", "),
            ],
        );
    }
    out
}

fn push_row(out: &mut String, fields: impl IntoIterator<Item = String>) {
    let row: Vec<String> = fields.into_iter().map(|f| escape_field(&f)).collect();
    out.push_str(&row.join(","));
    out.push_str("\r\n");
}

/// Quotes a field when it contains a delimiter, quote or line break.
fn escape_field(field: &str) -> String {
    let field = neutralize_formula(field);
    if field.contains(|c: char| matches!(c, ',' | '"' | '\n' | '\r')) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field
    }
}

/// Prefixes `'` to text a spreadsheet would evaluate as a formula.
/// Identifiers come from uploaded file names.
fn neutralize_formula(field: &str) -> String {
    if field.starts_with(|c: char| matches!(c, '=' | '+' | '-' | '@' | '\t' | '\r')) {
        format!("'{field}")
    } else {
        field.to_string()
    }
}
