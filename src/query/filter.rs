//! Listing filter: search text, search field and priority token

use crate::storage::schema::{columns, COMPANIES_TABLE};

/// Tokens that ask for companies worth a visit.
const TRUTHY_TOKENS: &[&str] = &["tak", "yes", "1", "true", "warto"];
/// Tokens that ask for companies not worth a visit.
const FALSY_TOKENS: &[&str] = &["nie", "no", "0", "false"];

/// Stored spellings matched by a truthy token.
const TRUTHY_STORED: &[&str] = &["1", "tak", "yes"];
/// Stored spellings matched by a falsy token.
const FALSY_STORED: &[&str] = &["0", "nie", "no"];

/// Query string of `GET /api/companies`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListParams {
    pub search: Option<String>,
    pub search_by: Option<String>,
    pub priority: Option<String>,
}

impl ListParams {
    /// Collect parameters from decoded query pairs. The first occurrence of
    /// a repeated key wins and unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = ListParams::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "search" => &mut params.search,
                "searchBy" => &mut params.search_by,
                "priority" => &mut params.priority,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

/// Column a text search applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Company name
    Company,
    /// Booth / stand identifier
    Stand,
}

impl SearchField {
    /// `None` selects the default (`Company`); unknown selectors yield `None`.
    pub fn parse(selector: Option<&str>) -> Option<Self> {
        match selector {
            None | Some("company") => Some(SearchField::Company),
            Some("stand") => Some(SearchField::Stand),
            Some(_) => None,
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            SearchField::Company => columns::COMPANY,
            SearchField::Stand => columns::STAND,
        }
    }
}

/// Priority filter as requested by the client.
///
/// Stored values are heterogeneous (`1`, `'1'`, `'tak'`, `'yes'`, ...), so yes/no
/// tokens expand to a disjunction over the known spellings and anything else
/// is compared literally against the raw column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriorityFilter {
    Truthy,
    Falsy,
    Exact(String),
}

impl PriorityFilter {
    /// Empty tokens mean "no filter".
    pub fn parse(token: &str) -> Option<Self> {
        if token.is_empty() {
            return None;
        }

        let lowered = token.to_lowercase();
        if TRUTHY_TOKENS.contains(&lowered.as_str()) {
            Some(PriorityFilter::Truthy)
        } else if FALSY_TOKENS.contains(&lowered.as_str()) {
            Some(PriorityFilter::Falsy)
        } else {
            Some(PriorityFilter::Exact(token.to_string()))
        }
    }

    fn condition(&self, params: &mut Vec<String>) -> String {
        match self {
            PriorityFilter::Truthy => any_of(TRUTHY_STORED),
            PriorityFilter::Falsy => any_of(FALSY_STORED),
            PriorityFilter::Exact(value) => {
                params.push(value.clone());
                format!("{} = ?{}", columns::PRIORITY, params.len())
            }
        }
    }
}

fn any_of(spellings: &[&str]) -> String {
    let alternatives: Vec<String> = spellings
        .iter()
        .map(|s| format!("{} = '{}'", columns::PRIORITY, s))
        .collect();
    format!("({})", alternatives.join(" OR "))
}

/// A built statement with its positional parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectStatement {
    pub sql: String,
    pub params: Vec<String>,
}

/// Filter for the companies listing. All conditions are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyFilter {
    /// Trimmed, non-empty search text together with the column it targets.
    pub search: Option<(SearchField, String)>,
    pub priority: Option<PriorityFilter>,
}

impl CompanyFilter {
    /// An empty filter: every row, ordered by name.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn from_params(params: &ListParams) -> Self {
        Self::new(
            params.search.as_deref(),
            params.search_by.as_deref(),
            params.priority.as_deref(),
        )
    }

    /// Search text with an unrecognized selector is dropped silently.
    pub fn new(search: Option<&str>, search_by: Option<&str>, priority: Option<&str>) -> Self {
        let text = search.map(str::trim).filter(|s| !s.is_empty());
        let search = match (text, SearchField::parse(search_by)) {
            (Some(text), Some(field)) => Some((field, text.to_string())),
            _ => None,
        };

        Self {
            search,
            priority: priority.and_then(PriorityFilter::parse),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.priority.is_none()
    }

    /// `SELECT *` over the companies table with this filter applied,
    /// ordered ascending by company name.
    pub fn to_select(&self) -> SelectStatement {
        let mut params = Vec::new();
        let mut conditions = Vec::new();

        if let Some((field, text)) = &self.search {
            params.push(format!("%{}%", text));
            conditions.push(format!("{} LIKE ?{}", field.column(), params.len()));
        }

        if let Some(priority) = &self.priority {
            conditions.push(priority.condition(&mut params));
        }

        let mut sql = format!("SELECT * FROM {}", COMPANIES_TABLE);
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(&format!(" ORDER BY {} ASC", columns::COMPANY));

        SelectStatement { sql, params }
    }
}
