use tabled::{settings::Style, Table, Tabled};

use crate::company::Company;
use crate::storage::CompanyStats;

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

#[derive(Tabled)]
struct CompanyRow {
    #[tabled(rename = "Id")]
    id: i64,
    #[tabled(rename = "Company")]
    name: String,
    #[tabled(rename = "Booth")]
    booth: String,
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Rarity")]
    rarity: u8,
    #[tabled(rename = "Hooks")]
    hooks: usize,
}

pub struct TableBuilder {
    rows: Vec<TableRow>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, label: &str, value: &str) {
        self.rows.push(TableRow {
            metric: label.to_string(),
            value: value.to_string(),
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Totals, priority values and countries as one metric/value table.
pub fn stats_table(stats: &CompanyStats) -> String {
    let mut builder = TableBuilder::new();
    builder.add_row("Total", &stats.total.to_string());
    for entry in &stats.by_priority {
        let label = format!(
            "Priority {}",
            entry.priority.to_text().unwrap_or_else(|| "(null)".to_string())
        );
        builder.add_row(&label, &entry.count.to_string());
    }
    for entry in &stats.by_country {
        builder.add_row(&entry.country, &entry.count.to_string());
    }
    builder.build()
}

pub fn companies_table(companies: &[Company]) -> String {
    let rows: Vec<CompanyRow> = companies
        .iter()
        .map(|c| CompanyRow {
            id: c.id,
            name: c.name.clone().unwrap_or_default(),
            booth: c.booth_number.clone().unwrap_or_default(),
            country: c.country.clone().unwrap_or_default(),
            rarity: c.rarity.as_u8(),
            hooks: c.hooks.len(),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}
