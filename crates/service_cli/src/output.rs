//! Rendering of command results as a table or JSON.

use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

/// A command result that can be printed in either output format.
pub trait Report: Serialize {
    /// Table title.
    fn title(&self) -> &'static str;

    /// Label/value rows for table output, in display order.
    fn rows(&self) -> Vec<(String, String)>;
}

/// Renders `report` in the requested format.
pub fn render<R: Report>(report: &R, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => Ok(render_table(report.title(), &report.rows())),
    }
}

/// Renders and prints `report` to stdout.
pub fn emit<R: Report>(report: &R, format: OutputFormat) -> Result<()> {
    println!("{}", render(report, format)?);
    Ok(())
}

fn render_table(title: &str, rows: &[(String, String)]) -> String {
    let label_width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0)
        .max(title.chars().count());
    let value_width = rows
        .iter()
        .map(|(_, value)| value.chars().count())
        .max()
        .unwrap_or(0);

    let bar = |left: &str, mid: &str, right: &str| {
        format!(
            "{}{}{}{}{}",
            left,
            "─".repeat(label_width + 2),
            mid,
            "─".repeat(value_width + 2),
            right
        )
    };

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(bar("┌", "┬", "┐"));
    lines.push(format!(
        "│ {:<lw$} │ {:<vw$} │",
        title,
        "",
        lw = label_width,
        vw = value_width
    ));
    lines.push(bar("├", "┼", "┤"));
    for (label, value) in rows {
        lines.push(format!(
            "│ {:<lw$} │ {:>vw$} │",
            label,
            value,
            lw = label_width,
            vw = value_width
        ));
    }
    lines.push(bar("└", "┴", "┘"));
    lines.join("\n")
}

/// Formats a float with fixed decimals.
pub(crate) fn fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        price: f64,
    }

    impl Report for Sample {
        fn title(&self) -> &'static str {
            "Sample"
        }

        fn rows(&self) -> Vec<(String, String)> {
            vec![("Price".to_string(), fixed(self.price, 4))]
        }
    }

    #[test]
    fn test_render_json() {
        let json = render(&Sample { price: 1.5 }, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["price"], 1.5);
    }

    #[test]
    fn test_render_table() {
        let table = render(&Sample { price: 10.43061 }, OutputFormat::Table).unwrap();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with('┌'));
        assert!(lines[1].contains("Sample"));
        assert!(lines[3].contains("Price"));
        assert!(lines[3].contains("10.4306"));
        assert!(lines[4].starts_with('└'));
    }

    #[test]
    fn test_fixed() {
        assert_eq!(fixed(6.082354409142307, 4), "6.0824");
        assert_eq!(fixed(1.0, 3), "1.000");
    }
}
