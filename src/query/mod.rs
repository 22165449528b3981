//! Query building for the companies listing
//!
//! Turns request parameters into a parameterized `SELECT` over the
//! `companies` table. Only string patterns are matched; see `PriorityFilter`.

pub mod filter;

pub use filter::{CompanyFilter, ListParams, PriorityFilter, SearchField, SelectStatement};
