use wfguard_domain::{RunSummary, Verdict};

pub fn render_markdown(summary: &RunSummary) -> String {
    let mut out = String::new();

    out.push_str("# Wfguard report\n\n");
    let verdict = match summary.verdict() {
        Verdict::Pass => "PASS",
        Verdict::Fail => "FAIL",
        Verdict::Error => "ERROR",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Documents: {} (evaluated) / {} (scanned)\n- Violations: {}\n\n",
        verdict,
        summary.documents_evaluated,
        summary.documents_scanned,
        summary.violations.len()
    ));

    if summary.violations.is_empty() && summary.errors.is_empty() {
        out.push_str("No violations.\n");
        return out;
    }

    if !summary.violations.is_empty() {
        out.push_str("## Violations\n\n");
        for v in &summary.violations {
            out.push_str(&format!("- {} (`{}`)\n", v.text(), v.document()));
        }
    }

    if !summary.errors.is_empty() {
        if !summary.violations.is_empty() {
            out.push('\n');
        }
        out.push_str("## Evaluation errors\n\n");
        for e in &summary.errors {
            out.push_str(&format!("- `{}`: {}\n", e.document, e.message));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use wfguard_domain::{DocumentError, Violation};
    use wfguard_types::RepoPath;

    #[test]
    fn renders_clean_run() {
        let summary = RunSummary {
            documents_scanned: 2,
            documents_evaluated: 2,
            ..RunSummary::default()
        };
        let md = render_markdown(&summary);
        assert!(md.contains("Verdict: **PASS**"));
        assert!(md.contains("2 (evaluated) / 2 (scanned)"));
        assert!(md.contains("No violations."));
    }

    #[test]
    fn renders_violations_and_errors() {
        let summary = RunSummary {
            documents_scanned: 3,
            documents_evaluated: 2,
            violations: vec![
                Violation::Message {
                    message: "uses checkout@v2".to_string(),
                    document: RepoPath::new("a.yml"),
                },
                Violation::Flagged {
                    document: RepoPath::new("b.yml"),
                },
            ],
            errors: vec![DocumentError {
                document: RepoPath::new("c.yml"),
                message: "conflict".to_string(),
            }],
        };

        let md = render_markdown(&summary);
        assert!(md.contains("Verdict: **ERROR**"));
        assert!(md.contains("## Violations"));
        assert!(md.contains("- uses checkout@v2 (`a.yml`)"));
        assert!(md.contains("- policy violation detected (`b.yml`)"));
        assert!(md.contains("## Evaluation errors"));
        assert!(md.contains("- `c.yml`: conflict"));
    }
}
