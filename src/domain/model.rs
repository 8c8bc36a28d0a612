use crate::utils::error::{EnrichError, Result};
use serde::{Deserialize, Serialize};

/// One business to look up: the `Name` and `City` cells of an input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub name: String,
    pub city: String,
}

/// Parsed input table. Row order is processing order and output order.
#[derive(Debug, Clone)]
pub struct LeadSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    name_col: usize,
    city_col: usize,
}

impl LeadSheet {
    /// Builds a sheet from parsed CSV data, resolving the required columns.
    /// Missing `Name` or `City` fails here, before any network activity.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let position = |wanted: &str| headers.iter().position(|h| h == wanted);

        match (position("Name"), position("City")) {
            (Some(name_col), Some(city_col)) => Ok(Self {
                headers,
                rows,
                name_col,
                city_col,
            }),
            _ => Err(EnrichError::ValidationError {
                message: "input file must contain 'Name' and 'City' columns".to_string(),
            }),
        }
    }

    pub fn lead(&self, row: &[String]) -> Lead {
        Lead {
            name: row.get(self.name_col).cloned().unwrap_or_default(),
            city: row.get(self.city_col).cloned().unwrap_or_default(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Structured social-profile hint from the knowledge panel's `profiles`
/// collection. Only `link` feeds classification; `name` is the platform label
/// the API attaches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub link: String,
}

/// Per-lead enrichment output. Every field defaults to empty when unresolved;
/// a failed lead keeps all six fields empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub website: String,
    pub reviews: String,
    pub phone: String,
    pub facebook: String,
    pub instagram: String,
    pub order: String,
}

impl ContactRecord {
    /// Output column names, appended after the input columns in this order.
    pub const COLUMNS: [&'static str; 6] = [
        "Website",
        "Google Reviews",
        "Phone",
        "Facebook",
        "Instagram",
        "Order",
    ];

    pub fn to_row(&self) -> [&str; 6] {
        [
            &self.website,
            &self.reviews,
            &self.phone,
            &self.facebook,
            &self.instagram,
            &self.order,
        ]
    }
}

/// Transform product: one record per input row plus the rendered output CSV.
#[derive(Debug, Clone)]
pub struct EnrichResult {
    pub records: Vec<ContactRecord>,
    pub csv_output: String,
}
