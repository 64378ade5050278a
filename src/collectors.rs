// src/collectors.rs
use crate::extractors::{extract_party_votes, extract_turnout, PartyVocabulary};
use crate::tables::{Table, JOIN_KEY, UNIT_CODE_COLUMN};
use crate::volby::models::UnitIndex;
use crate::volby::VolbyClient;
use std::collections::HashMap;

/// Vote count written for a party the unit did not report.
const MISSING_VOTES: &str = "0";

/// Collects the turnout summary of every unit.
///
/// The header comes from the first page that parsed. Units whose page could
/// not be loaded or has no table are left out.
pub async fn collect_turnout(client: &VolbyClient, units: &UnitIndex) -> Table {
    let mut labels: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    for (i, unit) in units.iter().enumerate() {
        tracing::info!("Turnout {}/{}: {}", i + 1, units.len(), unit.name);

        let Some(document) = client.fetch_unit(unit).await else {
            tracing::warn!("Skipping district unit '{}' due to a loading error.", unit.name);
            continue;
        };
        let Some(summary) = extract_turnout(&document) else {
            tracing::warn!("No turnout table for '{}', skipping.", unit.name);
            continue;
        };

        let expected = labels.get_or_insert_with(|| summary.labels.clone());
        if summary.values.len() != expected.len() {
            // Left as-is; the row will not line up with the header.
            tracing::warn!(
                "'{}' has {} turnout values, header has {} columns",
                unit.name, summary.values.len(), expected.len()
            );
        }

        let mut row = vec![unit.code.clone().unwrap_or_default(), unit.name.clone()];
        row.extend(summary.values);
        rows.push(row);
    }

    let mut header = vec![UNIT_CODE_COLUMN.to_string(), JOIN_KEY.to_string()];
    header.extend(labels.unwrap_or_default());
    Table::new(header, rows)
}

/// Collects per-party vote counts of every unit.
///
/// Party columns are discovered while walking the units and ordered by party
/// number once all of them are seen; a party missing from a unit reads "0".
pub async fn collect_party_results(client: &VolbyClient, units: &UnitIndex) -> Table {
    let mut vocabulary = PartyVocabulary::new();
    let mut unit_votes: Vec<(String, HashMap<String, String>)> = Vec::new();

    for (i, unit) in units.iter().enumerate() {
        tracing::info!("Processing district unit {}/{}: {}", i + 1, units.len(), unit.name);

        let Some(document) = client.fetch_unit(unit).await else {
            tracing::warn!("Skipping district unit '{}' due to a loading error.", unit.name);
            continue;
        };

        let Some(party_votes) = extract_party_votes(&document) else {
            tracing::warn!("No party tables for '{}', skipping.", unit.name);
            continue;
        };

        let mut votes = HashMap::new();
        for vote in party_votes {
            vocabulary.observe(&vote);
            votes.insert(vote.name, vote.votes);
        }
        tracing::debug!("'{}' reported {} parties", unit.name, votes.len());
        unit_votes.push((unit.name.clone(), votes));
    }

    let parties = vocabulary.finalize();
    let rows = unit_votes
        .into_iter()
        .map(|(name, votes)| {
            let mut row = vec![name];
            row.extend(parties.iter().map(|party| {
                votes.get(party).cloned().unwrap_or_else(|| MISSING_VOTES.to_string())
            }));
            row
        })
        .collect();

    let mut header = vec![JOIN_KEY.to_string()];
    header.extend(parties);
    Table::new(header, rows)
}
