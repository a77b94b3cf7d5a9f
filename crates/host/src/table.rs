//! Grid rendering for the table channel.

use serde_json::Value;

use crate::console::display_text;

const INDEX_HEADER: &str = "(index)";
const VALUES_HEADER: &str = "Values";

/// Renders rows as a box-drawn grid.
///
/// The first column is the row index. Object rows contribute one column per
/// key, in order of first appearance. Rows that aren't objects are shown in a
/// trailing `Values` column. Missing cells are left blank.
///
/// Line breaks and tabs inside a cell are shown escaped so every row stays on
/// one line. Column widths count characters, so wide glyphs such as CJK text
/// or emoji still push their row out of line on most terminals.
#[must_use]
pub fn render_table(rows: &[Value]) -> String {
    let mut columns: Vec<&str> = Vec::new();
    let mut has_values = false;

    for row in rows {
        match row {
            Value::Object(fields) => {
                for key in fields.keys() {
                    if !columns.contains(&key.as_str()) {
                        columns.push(key);
                    }
                }
            }
            _ => has_values = true,
        }
    }

    let mut header = Vec::with_capacity(columns.len() + 2);
    header.push(INDEX_HEADER.to_string());
    header.extend(columns.iter().map(ToString::to_string));
    if has_values {
        header.push(VALUES_HEADER.to_string());
    }

    let body: Vec<Vec<String>> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let mut cells = Vec::with_capacity(header.len());
            cells.push(index.to_string());

            match row {
                Value::Object(fields) => {
                    cells.extend(
                        columns
                            .iter()
                            .map(|column| fields.get(*column).map(cell_text).unwrap_or_default()),
                    );
                    if has_values {
                        cells.push(String::new());
                    }
                }
                other => {
                    cells.extend(columns.iter().map(|_| String::new()));
                    cells.push(cell_text(other));
                }
            }

            cells
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|column| {
            std::iter::once(&header)
                .chain(body.iter())
                .map(|cells| cells[column].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(body.len() + 4);
    lines.push(border(&widths, '┌', '┬', '┐'));
    lines.push(row_line(&header, &widths));
    lines.push(border(&widths, '├', '┼', '┤'));
    lines.extend(body.iter().map(|cells| row_line(cells, &widths)));
    lines.push(border(&widths, '└', '┴', '┘'));

    lines.join("\n")
}

fn cell_text(value: &Value) -> String {
    display_text(value)
        .replace('\r', "\\r")
        .replace('\n', "\\n")
        .replace('\t', "\\t")
}

fn border(widths: &[usize], left: char, middle: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|width| "─".repeat(width + 2)).collect();
    format!("{left}{}{right}", segments.join(&middle.to_string()))
}

fn row_line(cells: &[String], widths: &[usize]) -> String {
    let segments: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!(" {cell:<width$} "))
        .collect();
    format!("│{}│", segments.join("│"))
}
