//! Aligned plain-text tables.
//!
//! Widths are measured in characters, not bytes, so Hangul names and titles
//! line up with ASCII columns.

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN_WIDTH: usize = 4;

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_width(cell))
                .max()
                .unwrap_or(0)
                .max(display_width(header))
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(display_width(&header_line));

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let numeric = looks_numeric(&truncated);
                let padded = pad(&truncated, *width, numeric);
                if options.color {
                    colorize_value(&truncated, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

/// Shrink the widest columns one character at a time until the table fits.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > display_width(headers[*idx]).max(MIN_COLUMN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };
        widths[idx] -= 1;
        total -= 1;
    }
}

fn display_width(value: &str) -> usize {
    value.chars().count()
}

fn truncate_text(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out = value.chars().take(width - 1).collect::<String>();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed.chars().any(|ch| ch.is_ascii_digit())
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ',' | '%'))
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(value)));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Wrap a padded cell in an ANSI color chosen from its plain value.
fn colorize_value(value: &str, padded: String) -> String {
    let code = match value.to_ascii_lowercase().as_str() {
        "recent" | "true" | "signed_in" | "ready" => Some("32"),
        "stale" | "loading" => Some("33"),
        "false" | "error" | "signed_out" => Some("31"),
        _ => None,
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{padded}\u{1b}[0m"),
        None => padded,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn columns_align_across_mixed_widths() {
        let headers = ["id", "staleness", "title"];
        let rows = vec![
            vec!["c1".to_string(), "recent".to_string(), "short".to_string()],
            vec![
                "c200".to_string(),
                "stale".to_string(),
                "a much longer title".to_string(),
            ],
        ];

        let table = render_entity_table(&headers, &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "id    staleness  title");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[3], "c200  stale      a much longer title");
    }

    #[test]
    fn hangul_is_measured_in_characters() {
        let headers = ["name", "age"];
        let rows = vec![
            vec!["김민수".to_string(), "34".to_string()],
            vec!["Lee".to_string(), "52".to_string()],
        ];

        let table = render_entity_table(&headers, &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2], format!("김민수{}34", " ".repeat(5)));
        assert_eq!(lines[3], format!("Lee{}52", " ".repeat(5)));
    }

    #[test]
    fn narrow_terminal_truncates_the_widest_column() {
        let headers = ["id", "title"];
        let rows = vec![vec!["n1".to_string(), "x".repeat(40)]];
        let options = TableOptions {
            max_width: Some(20),
            color: false,
        };

        let table = render_entity_table(&headers, &rows, options);
        let row = table.lines().nth(2).unwrap_or_default();
        assert_eq!(display_width(row), 20);
        assert!(row.ends_with('…'));
    }

    #[test]
    fn staleness_values_are_colored() {
        let headers = ["staleness"];
        let rows = vec![vec!["stale".to_string()], vec!["neutral".to_string()]];
        let options = TableOptions {
            max_width: None,
            color: true,
        };

        let table = render_entity_table(&headers, &rows, options);
        assert!(table.contains("\u{1b}[33mstale"));
        assert!(!table.contains("\u{1b}[33mneutral"));
    }
}
