//! Plain-text table rendering for roster rows.

use roster_core::{EmployeeRecord, RosterView, COLUMNS};

const COLUMN_GAP: &str = "  ";

/// Renders rows under the five roster headings with left-aligned columns.
pub fn render_table(rows: &[EmployeeRecord]) -> String {
    let cells = rows.iter().map(RosterView::cells).collect::<Vec<_>>();

    let mut widths = COLUMNS.map(|heading| heading.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &COLUMNS, &widths);
    let rule = widths.map(|width| "-".repeat(width));
    push_line(&mut out, &rule.each_ref().map(String::as_str), &widths);
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[&str; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::render_table;
    use roster_core::{Attendance, EmployeeFields, EmployeeRecord};

    #[test]
    fn empty_table_has_headings_only() {
        let table = render_table(&[]);
        let lines = table.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "ID  Name  Department  Phone  Attendance");
    }

    #[test]
    fn columns_widen_to_fit_cells() {
        let record = EmployeeRecord::new(
            "E1",
            EmployeeFields {
                name: "Ada Lovelace".to_string(),
                department: "Eng".to_string(),
                phone: "12345678901".to_string(),
                attendance: Attendance::Absent,
            },
        );
        let table = render_table(&[record]);
        let lines = table.lines().collect::<Vec<_>>();
        assert_eq!(
            lines[0],
            "ID  Name          Department  Phone        Attendance"
        );
        assert_eq!(
            lines[2],
            "E1  Ada Lovelace  Eng         12345678901  Absent"
        );
    }
}
