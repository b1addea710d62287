// src/utils/report.rs

/// Width used by rules under headings.
pub const RULE_WIDTH: usize = 50;

pub fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Title line followed by a rule.
pub fn heading(title: &str) -> String {
    format!("{}\n{}\n", title, rule())
}

/// "  Density                  7.87 g/cm³"
pub fn metric(label: &str, value: &str) -> String {
    format!("  {:<24} {}\n", label, value)
}

pub fn bullets<S: AsRef<str>>(items: &[S], marker: &str) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&format!("  {} {}\n", marker, item.as_ref()));
    }
    out
}

/// Left-aligned text table. Column widths follow the widest cell
/// (counted in chars, so units like "g/cm³" line up).
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);

    let mut out = String::new();
    out.push_str(&table_row(headers.iter().copied(), &widths));
    out.push_str(&format!("{}\n", "-".repeat(total)));
    for row in rows {
        out.push_str(&table_row(row.iter().map(|s| s.as_str()), &widths));
    }
    out
}

fn table_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let line: Vec<String> = cells
        .zip(widths.iter())
        .map(|(c, &w)| format!("{}{}", c, " ".repeat(w.saturating_sub(c.chars().count()))))
        .collect();
    format!("{}\n", line.join("  ").trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_alignment() {
        let rows = vec![
            vec!["AISI 1020 Steel".to_string(), "7.87".to_string()],
            vec!["Lead".to_string(), "11.34".to_string()],
        ];
        let t = table(&["Material", "Density"], &rows);
        let lines: Vec<&str> = t.lines().collect();
        assert_eq!(lines[0], "Material         Density");
        assert_eq!(lines[1], "-".repeat(24));
        assert_eq!(lines[3], "Lead             11.34");
    }

    #[test]
    fn test_small_helpers() {
        assert_eq!(metric("Density", "7.87 g/cm³"), format!("  {:<24} 7.87 g/cm³\n", "Density"));
        assert_eq!(bullets(&["a", "b"], "•"), "  • a\n  • b\n");
        assert!(heading("Audit").starts_with("Audit\n---"));
    }
}
