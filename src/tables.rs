// src/tables.rs
use crate::utils::AppError;
use std::collections::{BTreeSet, HashMap};

/// Municipality name column shared by both collected tables.
pub const JOIN_KEY: &str = "Obec";
pub const UNIT_CODE_COLUMN: &str = "Číslo obce";

/// Header labels that lose their whitespace when cell text is flattened
/// around `<br>`, with the label they should read as.
const CANONICAL_HEADERS: &[(&str, &str)] = &[
    ("Voličiv seznamu", "Voliči v seznamu"),
    ("Vydanéobálky", "Vydané obálky"),
    ("Volebníúčast v %", "Volební účast v %"),
    ("Odevzdanéobálky", "Odevzdané obálky"),
    ("Platnéhlasy", "Platné hlasy"),
    ("% platnýchhlasů", "% platných hlasů"),
];

/// A header plus string rows. Rows are not forced to the header's width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }
}

pub fn canonical_header(label: &str) -> &str {
    CANONICAL_HEADERS
        .iter()
        .find(|&&(malformed, _)| malformed == label)
        .map_or(label, |&(_, fixed)| fixed)
}

fn canonicalize(header: &[String]) -> Vec<String> {
    header.iter().map(|h| canonical_header(h).to_string()).collect()
}

/// Full outer join of two tables on [`JOIN_KEY`].
///
/// Columns are the left header followed by the right header without the key.
/// Rows come out ordered by key; a side with no row for a key contributes
/// empty fields.
pub fn merge_tables(left: &Table, right: &Table) -> Result<Table, AppError> {
    let left_header = canonicalize(&left.header);
    let right_header = canonicalize(&right.header);

    let left_key = left_header.iter().position(|h| h == JOIN_KEY).ok_or_else(|| {
        AppError::Processing(format!("turnout table has no '{}' column", JOIN_KEY))
    })?;
    let right_key = right_header.iter().position(|h| h == JOIN_KEY).ok_or_else(|| {
        AppError::Processing(format!("party table has no '{}' column", JOIN_KEY))
    })?;

    let mut header = left_header.clone();
    header.extend(
        right_header.iter().enumerate()
            .filter(|(i, _)| *i != right_key)
            .map(|(_, h)| h.clone()),
    );

    let key_of = |row: &[String], idx: usize| row.get(idx).cloned().unwrap_or_default();

    let mut left_by_key: HashMap<String, Vec<&Vec<String>>> = HashMap::new();
    for row in &left.rows {
        left_by_key.entry(key_of(row, left_key)).or_default().push(row);
    }
    let mut right_by_key: HashMap<String, &Vec<String>> = HashMap::new();
    for row in &right.rows {
        right_by_key.entry(key_of(row, right_key)).or_insert(row);
    }

    let keys: BTreeSet<&String> = left_by_key.keys().chain(right_by_key.keys()).collect();
    let right_width = right_header.len().saturating_sub(1);

    let mut rows = Vec::new();
    for key in keys {
        let right_fields: Vec<String> = match right_by_key.get(key) {
            Some(row) => row.iter().enumerate()
                .filter(|(i, _)| *i != right_key)
                .map(|(_, v)| v.clone())
                .collect(),
            None => vec![String::new(); right_width],
        };

        match left_by_key.get(key) {
            Some(left_rows) => {
                for left_row in left_rows {
                    let mut row = (*left_row).clone();
                    row.extend(right_fields.iter().cloned());
                    rows.push(row);
                }
            }
            None => {
                let mut row = vec![String::new(); left_header.len()];
                row[left_key] = key.clone();
                row.extend(right_fields);
                rows.push(row);
            }
        }
    }

    tracing::debug!("Merged {} + {} rows into {}", left.rows.len(), right.rows.len(), rows.len());
    Ok(Table { header, rows })
}
