//! Database schema definitions
//!
//! The `companies` table is owned by existing data files; column identifiers
//! must match them exactly.

/// Name of the companies table
pub const COMPANIES_TABLE: &str = "companies";

/// Stored column identifiers
pub mod columns {
    pub const ID: &str = "id";
    pub const COMPANY: &str = "company";
    pub const COUNTRY: &str = "country";
    pub const STAND: &str = "stand";
    pub const DESCRIPTION: &str = "czym_zajmuje_sie_firma";
    pub const PROBLEMS: &str = "problemy_i_wyzwania";
    pub const OPPORTUNITIES: &str = "mozliwosci_AI_i_danych";
    pub const HOOK1: &str = "zaczepka1";
    pub const HOOK2: &str = "zaczepka2";
    pub const HOOK3: &str = "zaczepka3";
    pub const PRIORITY: &str = "czy_warto_sie_zainteresowac";
}

/// SQL to create the companies table in a fresh data file
pub const CREATE_COMPANIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS companies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    company TEXT,
    country TEXT,
    stand TEXT,
    czym_zajmuje_sie_firma TEXT,
    problemy_i_wyzwania TEXT,
    mozliwosci_AI_i_danych TEXT,
    zaczepka1 TEXT,
    zaczepka2 TEXT,
    zaczepka3 TEXT,
    czy_warto_sie_zainteresowac TEXT
)
"#;

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_COMPANIES_TABLE]
}
