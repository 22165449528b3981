//! SQLite storage implementation
//!
//! Every operation opens its own connection and drops it before returning,
//! on success and on error alike. Writes additionally hold a process-wide
//! lock shared by all clones of the store, since SQLite allows one writer.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rusqlite::{params, params_from_iter, Connection, OpenFlags, OptionalExtension, Row};
use serde::Serialize;

use super::schema::{self, columns, COMPANIES_TABLE};
use crate::company::{CompanyFields, CompanyRecord, RawPriority};
use crate::query::CompanyFilter;
use crate::{Error, Result};

/// Number of rows returned by the priority diagnostics sample.
const PRIORITY_SAMPLE_SIZE: i64 = 10;

/// Handle to the companies data file.
///
/// Holds only the resolved path; connections are acquired per operation.
#[derive(Debug, Clone)]
pub struct CompanyStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl CompanyStore {
    /// Create a store for a data file. Nothing is opened until an operation runs.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the data file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Open a connection to the existing data file.
    ///
    /// Never creates the file: a missing file or a failed open is reported
    /// as `StorageUnavailable`.
    pub fn connect(&self) -> Result<Connection> {
        if !self.exists() {
            return Err(Error::StorageUnavailable {
                path: self.path.clone(),
                reason: "file does not exist".to_string(),
            });
        }

        Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| Error::StorageUnavailable {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    /// Create the data file (if needed) with an empty companies table.
    pub fn create_schema(&self) -> Result<()> {
        let _guard = self.write_guard();
        let conn = Connection::open(&self.path)?;
        for stmt in schema::all_schema_statements() {
            conn.execute(stmt, [])?;
        }
        Ok(())
    }

    fn write_guard(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ========== Company Operations ==========

    /// List companies matching the filter, ordered by name
    pub fn list(&self, filter: &CompanyFilter) -> Result<Vec<CompanyRecord>> {
        let conn = self.connect()?;
        let select = filter.to_select();
        tracing::debug!(sql = %select.sql, params = ?select.params, "listing companies");

        let mut stmt = conn.prepare(&select.sql)?;
        let records = stmt
            .query_map(params_from_iter(select.params.iter()), row_to_company)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(records)
    }

    /// Get a company by id
    pub fn get(&self, id: i64) -> Result<Option<CompanyRecord>> {
        let conn = self.connect()?;
        conn.query_row(
            "SELECT * FROM companies WHERE id = ?1",
            [id],
            row_to_company,
        )
        .optional()
        .map_err(Into::into)
    }

    /// Insert a company and return the id assigned by SQLite
    pub fn insert(&self, fields: &CompanyFields) -> Result<i64> {
        let _guard = self.write_guard();
        let conn = self.connect()?;
        conn.execute(
            r#"
            INSERT INTO companies (company, country, stand, czym_zajmuje_sie_firma,
                problemy_i_wyzwania, mozliwosci_AI_i_danych, zaczepka1, zaczepka2,
                zaczepka3, czy_warto_sie_zainteresowac)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
            params![
                fields.company,
                fields.country,
                fields.stand,
                fields.description,
                fields.problems,
                fields.opportunities,
                fields.hook1,
                fields.hook2,
                fields.hook3,
                fields.priority,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Overwrite every writable column of a company.
    ///
    /// Fails with `NotFound` when no row has the id.
    pub fn update(&self, id: i64, fields: &CompanyFields) -> Result<()> {
        let _guard = self.write_guard();
        let conn = self.connect()?;
        let changed = conn.execute(
            r#"
            UPDATE companies SET
                company = ?1, country = ?2, stand = ?3, czym_zajmuje_sie_firma = ?4,
                problemy_i_wyzwania = ?5, mozliwosci_AI_i_danych = ?6, zaczepka1 = ?7,
                zaczepka2 = ?8, zaczepka3 = ?9, czy_warto_sie_zainteresowac = ?10
            WHERE id = ?11
            "#,
            params![
                fields.company,
                fields.country,
                fields.stand,
                fields.description,
                fields.problems,
                fields.opportunities,
                fields.hook1,
                fields.hook2,
                fields.hook3,
                fields.priority,
                id,
            ],
        )?;

        if changed == 0 {
            return Err(Error::NotFound(id));
        }
        Ok(())
    }

    /// Delete a company by id. Fails with `NotFound` when no row has the id.
    pub fn delete(&self, id: i64) -> Result<()> {
        let _guard = self.write_guard();
        let conn = self.connect()?;
        let changed = conn.execute("DELETE FROM companies WHERE id = ?1", [id])?;

        if changed == 0 {
            return Err(Error::NotFound(id));
        }
        Ok(())
    }

    /// Count all companies
    pub fn count(&self) -> Result<usize> {
        let conn = self.connect()?;
        count_companies(&conn)
    }

    /// Aggregate counts: total, per raw priority value, per non-empty country
    pub fn stats(&self) -> Result<CompanyStats> {
        let conn = self.connect()?;
        let total = count_companies(&conn)?;

        let mut stmt = conn.prepare(
            r#"
            SELECT czy_warto_sie_zainteresowac AS priority, COUNT(*) AS count
            FROM companies
            GROUP BY czy_warto_sie_zainteresowac
            "#,
        )?;
        let by_priority = stmt
            .query_map([], |row| {
                Ok(PriorityCount {
                    priority: row.get(0)?,
                    count: row.get::<_, i64>(1)? as usize,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT country, COUNT(*) AS count
            FROM companies
            WHERE country IS NOT NULL AND country != ''
            GROUP BY country
            ORDER BY count DESC
            "#,
        )?;
        let by_country = stmt
            .query_map([], |row| {
                Ok(CountryCount {
                    country: row.get::<_, RawPriority>(0)?.to_text().unwrap_or_default(),
                    count: row.get::<_, i64>(1)? as usize,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(CompanyStats {
            total,
            by_priority,
            by_country,
        })
    }

    // ========== Diagnostics ==========

    /// Names of all tables in the data file
    pub fn list_tables(&self) -> Result<Vec<String>> {
        let conn = self.connect()?;
        table_names(&conn)
    }

    /// Column names and declared types of the companies table
    pub fn table_columns(&self) -> Result<Vec<ColumnInfo>> {
        let conn = self.connect()?;
        companies_columns(&conn)
    }

    /// Connectivity probe.
    ///
    /// Fails with `SchemaMismatch` (listing the tables that do exist) when the
    /// companies table is absent.
    pub fn probe(&self) -> Result<Probe> {
        let conn = self.connect()?;

        let exists = conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [COMPANIES_TABLE],
                |row| row.get::<_, String>(0),
            )
            .optional()?
            .is_some();

        if !exists {
            return Err(Error::SchemaMismatch {
                table: COMPANIES_TABLE.to_string(),
                available: table_names(&conn)?,
            });
        }

        Ok(Probe {
            columns: companies_columns(&conn)?,
            count: count_companies(&conn)?,
        })
    }

    /// Distinct raw priority values with counts, the table layout and a few sample rows
    pub fn priority_report(&self) -> Result<PriorityReport> {
        let conn = self.connect()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT czy_warto_sie_zainteresowac, COUNT(*) AS count
            FROM companies
            GROUP BY czy_warto_sie_zainteresowac
            ORDER BY count DESC
            "#,
        )?;
        let priority_values = stmt
            .query_map([], |row| {
                Ok(PriorityValueCount {
                    value: row.get(0)?,
                    count: row.get::<_, i64>(1)? as usize,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut stmt = conn.prepare(
            "SELECT id, company, czy_warto_sie_zainteresowac FROM companies LIMIT ?1",
        )?;
        let sample_records = stmt
            .query_map([PRIORITY_SAMPLE_SIZE], |row| {
                Ok(PrioritySample {
                    id: row.get(0)?,
                    company: row.get::<_, RawPriority>(1)?.to_text(),
                    priority: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(PriorityReport {
            priority_values,
            table_columns: companies_columns(&conn)?,
            sample_records,
        })
    }
}

fn count_companies(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM companies", [], |row| row.get(0))?;
    Ok(count as usize)
}

fn table_names(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type = 'table'")?;
    let names = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;
    Ok(names)
}

fn companies_columns(conn: &Connection) -> Result<Vec<ColumnInfo>> {
    let mut stmt = conn.prepare("PRAGMA table_info(companies)")?;
    let columns = stmt
        .query_map([], |row| {
            Ok(ColumnInfo {
                name: row.get(1)?,
                column_type: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(columns)
}

/// Read a column by name as whatever SQLite stored; a missing column reads as NULL.
fn raw_column(row: &Row<'_>, name: &str) -> rusqlite::Result<RawPriority> {
    match row.get_ref(name) {
        Ok(value) => Ok(value.into()),
        Err(rusqlite::Error::InvalidColumnName(_)) => Ok(RawPriority::Null),
        Err(e) => Err(e),
    }
}

fn text_column(row: &Row<'_>, name: &str) -> rusqlite::Result<Option<String>> {
    raw_column(row, name).map(|value| value.to_text())
}

/// Like `text_column`, but a column the table lacks reads as `""`.
/// A stored NULL stays `None`.
fn text_column_or_empty(row: &Row<'_>, name: &str) -> rusqlite::Result<Option<String>> {
    match row.get_ref(name) {
        Ok(value) => Ok(RawPriority::from(value).to_text()),
        Err(rusqlite::Error::InvalidColumnName(_)) => Ok(Some(String::new())),
        Err(e) => Err(e),
    }
}

/// Helper to convert a `SELECT *` row to a CompanyRecord
fn row_to_company(row: &Row<'_>) -> rusqlite::Result<CompanyRecord> {
    Ok(CompanyRecord {
        id: row.get(columns::ID)?,
        company: text_column_or_empty(row, columns::COMPANY)?,
        country: text_column_or_empty(row, columns::COUNTRY)?,
        stand: text_column_or_empty(row, columns::STAND)?,
        description: text_column_or_empty(row, columns::DESCRIPTION)?,
        problems: text_column_or_empty(row, columns::PROBLEMS)?,
        opportunities: text_column_or_empty(row, columns::OPPORTUNITIES)?,
        hook1: text_column(row, columns::HOOK1)?,
        hook2: text_column(row, columns::HOOK2)?,
        hook3: text_column(row, columns::HOOK3)?,
        priority: raw_column(row, columns::PRIORITY)?,
    })
}

/// Company statistics
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyStats {
    pub total: usize,
    pub by_priority: Vec<PriorityCount>,
    pub by_country: Vec<CountryCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorityCount {
    pub priority: RawPriority,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryCount {
    pub country: String,
    pub count: usize,
}

impl std::fmt::Display for CompanyStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Company Statistics:")?;
        writeln!(f, "  Total: {}", self.total)?;
        writeln!(f, "  Priority values: {}", self.by_priority.len())?;
        write!(f, "  Countries: {}", self.by_country.len())
    }
}

/// One column from `PRAGMA table_info`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
}

/// Result of a successful connectivity probe
#[derive(Debug, Clone, Serialize)]
pub struct Probe {
    pub columns: Vec<ColumnInfo>,
    pub count: usize,
}

/// Raw priority diagnostics
#[derive(Debug, Clone, Serialize)]
pub struct PriorityReport {
    pub priority_values: Vec<PriorityValueCount>,
    pub table_columns: Vec<ColumnInfo>,
    pub sample_records: Vec<PrioritySample>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorityValueCount {
    pub value: RawPriority,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PrioritySample {
    pub id: i64,
    pub company: Option<String>,
    #[serde(rename = "czy_warto_sie_zainteresowac")]
    pub priority: RawPriority,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, CompanyStore) {
        let dir = TempDir::new().unwrap();
        let store = CompanyStore::new(dir.path().join("companies.db"));
        store.create_schema().unwrap();
        (dir, store)
    }

    fn insert(store: &CompanyStore, name: &str, priority: RawPriority) -> i64 {
        store
            .insert(&CompanyFields::named(name).with_priority(priority))
            .unwrap()
    }

    fn names(records: &[CompanyRecord]) -> Vec<String> {
        records
            .iter()
            .map(|r| r.company.clone().unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let store = CompanyStore::new(dir.path().join("nope.db"));

        assert!(matches!(store.connect(), Err(Error::StorageUnavailable { .. })));
        assert!(matches!(store.list(&CompanyFilter::all()), Err(Error::StorageUnavailable { .. })));
        // connect must not create the file
        assert!(!store.exists());
    }

    #[test]
    fn test_company_crud() {
        let (_dir, store) = temp_store();

        let fields = CompanyFields {
            company: Some("Acme".into()),
            country: Some("Poland".into()),
            stand: Some("A1".into()),
            hook1: Some("Ask about robots".into()),
            priority: RawPriority::Integer(2),
            ..Default::default()
        };
        let id = store.insert(&fields).unwrap();

        let record = store.get(id).unwrap().unwrap();
        assert_eq!(record.company.as_deref(), Some("Acme"));
        assert_eq!(record.stand.as_deref(), Some("A1"));
        assert_eq!(record.rarity(), crate::Rarity::High);

        let update = CompanyFields::named("Acme Corp");
        store.update(id, &update).unwrap();
        let record = store.get(id).unwrap().unwrap();
        assert_eq!(record.company.as_deref(), Some("Acme Corp"));
        assert_eq!(record.country, None);
        assert_eq!(record.hook1, None);
        assert!(record.priority.is_null());

        store.delete(id).unwrap();
        assert!(store.get(id).unwrap().is_none());
    }

    #[test]
    fn test_missing_id_is_not_found() {
        let (_dir, store) = temp_store();
        insert(&store, "Acme", RawPriority::Integer(0));

        assert!(matches!(store.delete(999), Err(Error::NotFound(999))));
        assert!(matches!(
            store.update(999, &CompanyFields::named("Ghost")),
            Err(Error::NotFound(999))
        ));
        assert_eq!(store.count().unwrap(), 1);
        assert_eq!(names(&store.list(&CompanyFilter::all()).unwrap()), vec!["Acme"]);
    }

    #[test]
    fn test_list_orders_by_name() {
        let (_dir, store) = temp_store();
        insert(&store, "Zeta", RawPriority::Null);
        insert(&store, "Alpha", RawPriority::Null);
        insert(&store, "Mu", RawPriority::Null);

        let all = store.list(&CompanyFilter::all()).unwrap();
        assert_eq!(names(&all), vec!["Alpha", "Mu", "Zeta"]);
    }

    #[test]
    fn test_priority_filter_matches_legacy_spellings() {
        let (_dir, store) = temp_store();
        insert(&store, "A", RawPriority::Text("1".into()));
        insert(&store, "B", RawPriority::Text("tak".into()));
        insert(&store, "C", RawPriority::Text("yes".into()));
        insert(&store, "D", RawPriority::Text("nie".into()));
        insert(&store, "E", RawPriority::Text("0".into()));
        insert(&store, "F", RawPriority::Text("no".into()));
        insert(&store, "G", RawPriority::Text("2".into()));
        insert(&store, "H", RawPriority::Null);
        insert(&store, "I", RawPriority::Text("TAK".into()));

        let yes = store.list(&CompanyFilter::new(None, None, Some("tak"))).unwrap();
        assert_eq!(names(&yes), vec!["A", "B", "C"]);

        let no = store.list(&CompanyFilter::new(None, None, Some("NIE"))).unwrap();
        assert_eq!(names(&no), vec!["D", "E", "F"]);

        let exact = store.list(&CompanyFilter::new(None, None, Some("2"))).unwrap();
        assert_eq!(names(&exact), vec!["G"]);
    }

    #[test]
    fn test_search_by_name_and_stand() {
        let (_dir, store) = temp_store();
        store
            .insert(&CompanyFields {
                company: Some("DataWorks".into()),
                stand: Some("B7".into()),
                ..Default::default()
            })
            .unwrap();
        store
            .insert(&CompanyFields {
                company: Some("RoboTech".into()),
                stand: Some("C3".into()),
                ..Default::default()
            })
            .unwrap();

        let by_name = store.list(&CompanyFilter::new(Some("work"), None, None)).unwrap();
        assert_eq!(names(&by_name), vec!["DataWorks"]);

        let by_stand = store.list(&CompanyFilter::new(Some("C3"), Some("stand"), None)).unwrap();
        assert_eq!(names(&by_stand), vec!["RoboTech"]);

        let ignored = store.list(&CompanyFilter::new(Some("C3"), Some("booth"), None)).unwrap();
        assert_eq!(ignored.len(), 2);
    }

    #[test]
    fn test_stats() {
        let (_dir, store) = temp_store();
        for (name, country, priority) in [
            ("A", Some("Poland"), "1"),
            ("B", Some("Poland"), "1"),
            ("C", Some("Germany"), "0"),
            ("D", Some(""), "0"),
            ("E", None, "2"),
        ] {
            store
                .insert(&CompanyFields {
                    company: Some(name.into()),
                    country: country.map(str::to_string),
                    priority: RawPriority::Text(priority.into()),
                    ..Default::default()
                })
                .unwrap();
        }

        let stats = store.stats().unwrap();
        assert_eq!(stats.total, 5);
        assert_eq!(stats.by_priority.len(), 3);
        let ones = stats
            .by_priority
            .iter()
            .find(|p| p.priority == RawPriority::Text("1".into()))
            .unwrap();
        assert_eq!(ones.count, 2);

        assert_eq!(
            stats.by_country,
            vec![
                CountryCount { country: "Poland".into(), count: 2 },
                CountryCount { country: "Germany".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_probe_reports_missing_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("other.db");
        let conn = Connection::open(&path).unwrap();
        conn.execute("CREATE TABLE exhibitors (id INTEGER PRIMARY KEY)", []).unwrap();
        drop(conn);

        let store = CompanyStore::new(&path);
        match store.probe() {
            Err(Error::SchemaMismatch { table, available }) => {
                assert_eq!(table, "companies");
                assert_eq!(available, vec!["exhibitors".to_string()]);
            }
            other => panic!("expected schema mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_probe_and_priority_report() {
        let (_dir, store) = temp_store();
        insert(&store, "A", RawPriority::Text("tak".into()));
        insert(&store, "B", RawPriority::Text("tak".into()));
        insert(&store, "C", RawPriority::Null);

        let probe = store.probe().unwrap();
        assert_eq!(probe.count, 3);
        assert!(probe.columns.iter().any(|c| c.name == columns::PRIORITY));

        let report = store.priority_report().unwrap();
        assert_eq!(
            report.priority_values[0],
            PriorityValueCount { value: RawPriority::Text("tak".into()), count: 2 }
        );
        assert_eq!(report.sample_records.len(), 3);
        assert_eq!(report.table_columns.len(), 11);
    }

    #[test]
    fn test_tolerates_legacy_table_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sqlite");
        let conn = Connection::open(&path).unwrap();
        conn.execute(
            "CREATE TABLE companies (id INTEGER PRIMARY KEY, company TEXT, czy_warto_sie_zainteresowac)",
            [],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO companies (company, czy_warto_sie_zainteresowac) VALUES ('Old', 2)",
            [],
        )
        .unwrap();
        drop(conn);

        let store = CompanyStore::new(&path);
        let records = store.list(&CompanyFilter::all()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].priority, RawPriority::Integer(2));
        assert_eq!(records[0].stand.as_deref(), Some(""));
        assert_eq!(records[0].country.as_deref(), Some(""));
        assert_eq!(records[0].hook1, None);
        assert_eq!(records[0].rarity(), crate::Rarity::High);

        let company = crate::Company::from(&records[0]);
        assert_eq!(company.name.as_deref(), Some("Old"));
        assert_eq!(company.booth_number.as_deref(), Some(""));
        assert_eq!(company.short_description, crate::company::SHORT_DESCRIPTION_FALLBACK);
    }

    #[test]
    fn test_legacy_layout_without_name_columns() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sqlite");
        let conn = Connection::open(&path).unwrap();
        conn.execute("CREATE TABLE companies (id INTEGER PRIMARY KEY, zaczepka1 TEXT)", [])
            .unwrap();
        conn.execute("INSERT INTO companies (zaczepka1) VALUES ('Hello')", []).unwrap();
        drop(conn);

        let store = CompanyStore::new(&path);
        let record = store.get(1).unwrap().unwrap();
        let json = serde_json::to_value(crate::Company::from(record)).unwrap();
        assert_eq!(json["name"], "");
        assert_eq!(json["boothNumber"], "");
        assert_eq!(json["country"], "");
        assert_eq!(json["hooks"], serde_json::json!(["Hello"]));
    }

    #[test]
    fn test_concurrent_inserts_share_one_writer() {
        let (_dir, store) = temp_store();

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = store.clone();
                std::thread::spawn(move || {
                    (0..10)
                        .map(|i| store.insert(&CompanyFields::named(format!("T{}-{}", t, i))).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<i64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 80);
        assert_eq!(store.count().unwrap(), 80);
    }

    #[test]
    fn test_stored_null_stays_null() {
        let (_dir, store) = temp_store();
        let id = store.insert(&CompanyFields::named("Acme")).unwrap();
        let record = store.get(id).unwrap().unwrap();
        assert_eq!(record.stand, None);
        assert_eq!(record.country, None);
    }
}
