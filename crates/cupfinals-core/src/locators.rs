//! XPath templates for the finals table.

use cupfinals_protocols::RowField;

/// Placeholder replaced by the 1-based row index.
const ROW_PLACEHOLDER: &str = "{row}";

/// Table container and per-row cell locators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locators {
    table: &'static str,
    cells: [(RowField, &'static str); 4],
}

impl Locators {
    /// Layout of the finals table on the Wikipedia list page.
    pub const FIFA_FINALS: Locators = Locators {
        table: r#"//*[@id="mw-content-text"]/div[1]/table[4]"#,
        cells: [
            (
                RowField::Year,
                r#"//*[@id="mw-content-text"]/div[1]/table[4]/tbody/tr[{row}]/th/a"#,
            ),
            (
                RowField::Winner,
                r#"//*[@id="mw-content-text"]/div[1]/table[4]/tbody/tr[{row}]/td[1]/a"#,
            ),
            (
                RowField::Score,
                r#"//*[@id="mw-content-text"]/div[1]/table[4]/tbody/tr[{row}]/td[2]/a[1]"#,
            ),
            (
                RowField::RunnerUp,
                r#"//*[@id="mw-content-text"]/div[1]/table[4]/tbody/tr[{row}]/td[3]/span/a"#,
            ),
        ],
    };

    /// Element whose visibility proves the table has rendered.
    pub fn table(&self) -> &'static str {
        self.table
    }

    pub fn template(&self, field: RowField) -> &'static str {
        self.cells
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, t)| *t)
            .unwrap_or(self.table)
    }

    /// Concrete XPath for `field` in 1-based `row`.
    pub fn xpath(&self, field: RowField, row: u32) -> String {
        self.template(field)
            .replace(ROW_PLACEHOLDER, &row.to_string())
    }
}

impl Default for Locators {
    fn default() -> Self {
        Self::FIFA_FINALS
    }
}
