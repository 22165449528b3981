//! Storage Layer - SQLite-backed persistence
//!
//! The system of record is one table in an existing SQLite file:
//! - companies(id, company, country, stand, czym_zajmuje_sie_firma, problemy_i_wyzwania,
//!   mozliwosci_AI_i_danych, zaczepka1..3, czy_warto_sie_zainteresowac)

pub mod schema;
pub mod sqlite;

pub use sqlite::{
    ColumnInfo, CompanyStats, CompanyStore, CountryCount, PriorityCount, PriorityReport,
    PrioritySample, PriorityValueCount, Probe,
};
