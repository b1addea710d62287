// src/ui/audit.rs

use crate::physics::audit::{AuditReport, Severity};
use crate::utils::report::{heading, metric};

pub fn audit_report(report: &AuditReport) -> String {
    let mut out = heading("🧪 Data-quality Audit");
    out.push_str(&metric("Records checked", &report.checked().to_string()));
    out.push_str(&metric("Warnings", &report.count(Severity::Warning).to_string()));
    out.push_str(&metric("Notes", &report.count(Severity::Info).to_string()));
    out.push('\n');

    let mut any = false;
    for record in report.flagged() {
        any = true;
        out.push_str(&format!("{} ({})\n", record.name, record.key));
        if let Some(v) = record.cell_volume {
            out.push_str(&format!("    cell volume {:.3} Å³\n", v));
        }
        for finding in &record.findings {
            let marker = match finding.severity() {
                Severity::Warning => "⚠",
                Severity::Info => "ℹ",
            };
            out.push_str(&format!("  {} {}\n", marker, finding));
        }
    }
    if !any {
        out.push_str("All records passed.\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog;
    use crate::physics::audit::audit;

    #[test]
    fn test_audit_report_lists_brass() {
        let text = audit_report(&audit(catalog()));
        assert!(text.contains(&metric("Records checked", "38")));
        assert!(text.contains("(brass_360)"));
        assert!(text.contains("⚠ composition sums to 0.648"));
        assert!(!text.contains("(aisi_1020)"));
    }

    #[test]
    fn test_clean_report() {
        let report = AuditReport { records: Vec::new() };
        assert!(audit_report(&report).ends_with("All records passed.\n"));
    }
}
