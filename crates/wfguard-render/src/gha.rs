use wfguard_domain::Violation;

/// Render a violation as a GitHub Actions workflow command annotation.
///
/// Format:
/// `::error file={path}::{message}`
pub fn render_github_annotation(violation: &Violation) -> String {
    format!(
        "::error file={}::{}",
        escape_property(violation.document().as_str()),
        escape_data(violation.text())
    )
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
