//! Grid column definitions

use serde::{Deserialize, Serialize};

use config_services_client::{CONFIG_KEY_FIELD, ConfigRecord};

/// Default width of a derived column, in terminal cells.
const DEFAULT_COLUMN_WIDTH: u16 = 20;
/// Width of the key column.
const KEY_COLUMN_WIDTH: u16 = 12;

/// One record column of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Field name in the record (`configKey`, `configName`, ...).
    pub accessor: String,
    /// Header text.
    pub header: String,
    /// Preferred width in cells.
    #[serde(default = "default_width")]
    pub width: u16,
}

fn default_width() -> u16 {
    DEFAULT_COLUMN_WIDTH
}

impl ColumnDef {
    pub fn new(accessor: impl Into<String>) -> Self {
        let accessor = accessor.into();
        let width = if accessor == CONFIG_KEY_FIELD {
            KEY_COLUMN_WIDTH
        } else {
            DEFAULT_COLUMN_WIDTH
        };
        Self {
            header: header_from_accessor(&accessor),
            accessor,
            width,
        }
    }
}

/// Columns for `records`: the configured ones if any, otherwise `configKey`
/// followed by every other field in first-seen order.
pub fn resolve_columns(configured: &[ColumnDef], records: &[ConfigRecord]) -> Vec<ColumnDef> {
    if !configured.is_empty() {
        return configured.to_vec();
    }

    let mut accessors: Vec<&str> = vec![CONFIG_KEY_FIELD];
    for record in records {
        for name in record.field_names() {
            if !accessors.contains(&name) {
                accessors.push(name);
            }
        }
    }
    accessors.into_iter().map(ColumnDef::new).collect()
}

/// `configName` → `Config Name`, `isActive` → `Is Active`.
fn header_from_accessor(accessor: &str) -> String {
    let mut header = String::with_capacity(accessor.len() + 4);
    for (i, ch) in accessor.chars().enumerate() {
        if i == 0 {
            header.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            header.push(' ');
            header.push(ch);
        } else if ch == '_' {
            header.push(' ');
        } else {
            header.push(ch);
        }
    }
    header
}
