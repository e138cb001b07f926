use wfguard_domain::Violation;

/// One undecorated line per violation.
pub fn render_text_line(violation: &Violation) -> String {
    violation.text().to_string()
}
