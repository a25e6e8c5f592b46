use std::fmt;
use tabula_engine::{Cell, SortSpec, TabularModel, humanize_label};
use tabula_types::ViewKind;

use crate::presentation::formatters::{pad, single_line, truncate};
use crate::presentation::view_models::ViewOptions;

const MAX_COLUMN_WIDTH: usize = 28;
const MAX_CARD_WIDTH: usize = 56;

// --------------------------------------------------------
// Empty state
// --------------------------------------------------------

pub struct EmptyStateView {
    view: ViewKind,
}

impl EmptyStateView {
    pub fn new(view: ViewKind) -> Self {
        Self { view }
    }
}

impl fmt::Display for EmptyStateView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.view {
            ViewKind::Chart | ViewKind::Dashboard => {
                writeln!(f, "No data available for visualization")
            }
            _ => writeln!(f, "No data available"),
        }
    }
}

// --------------------------------------------------------
// Table
// --------------------------------------------------------

pub struct TableView<'a> {
    data: &'a TabularModel,
    sort: Option<&'a SortSpec>,
    options: ViewOptions,
}

impl<'a> TableView<'a> {
    pub fn new(data: &'a TabularModel, sort: Option<&'a SortSpec>, options: ViewOptions) -> Self {
        Self {
            data,
            sort,
            options,
        }
    }

    fn headers(&self) -> Vec<String> {
        self.data
            .fields
            .iter()
            .map(|field| {
                let label = humanize_label(&field.name);
                match self.sort {
                    Some(sort) if sort.field == field.name => {
                        format!("{} {}", label, sort.direction.arrow())
                    }
                    _ => label,
                }
            })
            .collect()
    }
}

impl<'a> fmt::Display for TableView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers = self.headers();
        let rows: Vec<Vec<String>> = self
            .data
            .rows
            .iter()
            .map(|row| {
                row.cells
                    .iter()
                    .map(|cell| single_line(cell.display.text()))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                rows.iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
                    .min(MAX_COLUMN_WIDTH)
            })
            .collect();

        let header_line = headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad(h, *w))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(f, "{}", self.options.style.bold(header_line.trim_end()))?;

        let rule_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        writeln!(f, "{}", "-".repeat(rule_width.min(self.options.width)))?;

        for row in &rows {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(text, w)| pad(text, *w))
                .collect::<Vec<_>>()
                .join("  ");
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// List
// --------------------------------------------------------

pub struct ListView<'a> {
    data: &'a TabularModel,
    options: ViewOptions,
}

impl<'a> ListView<'a> {
    pub fn new(data: &'a TabularModel, options: ViewOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for ListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self
            .data
            .fields
            .iter()
            .map(|field| format!("{}:", humanize_label(&field.name)))
            .collect();
        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        for (i, row) in self.data.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", self.options.style.bold(&format!("#{}", row.position)))?;

            for (label, cell) in labels.iter().zip(&row.cells) {
                if cell.display.is_structured() {
                    writeln!(f, "  {}", label)?;
                    for line in cell.display.text().lines() {
                        writeln!(f, "    {}", line)?;
                    }
                } else {
                    writeln!(f, "  {} {}", pad(label, label_width), cell.display.text())?;
                }
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Card
// --------------------------------------------------------

pub struct CardView<'a> {
    data: &'a TabularModel,
    options: ViewOptions,
}

impl<'a> CardView<'a> {
    pub fn new(data: &'a TabularModel, options: ViewOptions) -> Self {
        Self { data, options }
    }

    fn value_text(&self, cell: &Cell) -> String {
        let text = cell.display.text();
        match cell.tone.indicator() {
            Some(arrow) => self
                .options
                .style
                .tone(&format!("{} {}", text, arrow), cell.tone),
            None => text.to_string(),
        }
    }
}

impl<'a> fmt::Display for CardView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.options.width.clamp(20, MAX_CARD_WIDTH);
        let labels: Vec<String> = self
            .data
            .fields
            .iter()
            .map(|field| humanize_label(&field.name))
            .collect();
        let label_width = labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            .min(width / 2);
        let value_width = width.saturating_sub(label_width + 4);

        for (i, row) in self.data.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let title = format!("┌─ Item {} ", row.position);
            let fill = width.saturating_sub(title.chars().count());
            writeln!(f, "{}{}", self.options.style.bold(&title), "─".repeat(fill))?;

            for (label, cell) in labels.iter().zip(&row.cells) {
                if cell.display.is_structured() {
                    let mut lines = cell.display.text().lines();
                    let first = lines.next().unwrap_or_default();
                    writeln!(f, "│ {}  {}", pad(label, label_width), first)?;
                    for line in lines {
                        writeln!(
                            f,
                            "│ {}  {}",
                            " ".repeat(label_width),
                            truncate(line, value_width)
                        )?;
                    }
                } else {
                    writeln!(
                        f,
                        "│ {}  {}",
                        self.options.style.dim(&pad(label, label_width)),
                        self.value_text(cell)
                    )?;
                }
            }
            writeln!(f, "└{}", "─".repeat(width.saturating_sub(1)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_engine::{infer_schema, project_tabular};
    use tabula_types::{Collection, Record};

    fn busy_days() -> TabularModel {
        let collection = Collection::new(vec![
            Record::new().with("day", "Mon").with("ticketCount", 5),
            Record::new().with("day", "Tue").with("ticketCount", -2),
        ]);
        project_tabular(&collection, &infer_schema(&collection))
    }

    #[test]
    fn test_table_layout() {
        let model = busy_days();
        let sort = SortSpec::descending("ticketCount");
        let text = TableView::new(&model, Some(&sort), ViewOptions::plain(80)).to_string();

        insta::assert_snapshot!(text, @r"
        Day  Ticket Count ▼
        -------------------
        Mon  5
        Tue  -2
        ");
    }

    #[test]
    fn test_list_layout() {
        let model = busy_days();
        let text = ListView::new(&model, ViewOptions::plain(80)).to_string();
        assert!(text.starts_with("#1\n  Day:          Mon\n  Ticket Count: 5\n"));
        assert!(text.contains("\n\n#2\n"));
    }

    #[test]
    fn test_card_shows_sign_indicators() {
        let model = busy_days();
        let text = CardView::new(&model, ViewOptions::plain(40)).to_string();
        assert!(text.contains("┌─ Item 1 "));
        assert!(text.contains("5 ↑"));
        assert!(text.contains("-2 ↓"));
        assert!(!text.contains("Mon ↑"));
    }

    #[test]
    fn test_empty_state_wording() {
        assert_eq!(EmptyStateView::new(ViewKind::Card).to_string(), "No data available\n");
        assert_eq!(
            EmptyStateView::new(ViewKind::Chart).to_string(),
            "No data available for visualization\n"
        );
    }
}
