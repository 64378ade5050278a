// src/extractors/parties.rs
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::collections::HashSet;

// Layout of a party result row: number, name, votes, then percentages we ignore.
const MIN_PARTY_CELLS: usize = 3;
const PARTY_NUMBER_CELL: usize = 0;
const PARTY_NAME_CELL: usize = 1;
const PARTY_VOTES_CELL: usize = 2;
/// Tables before this index hold the turnout summary.
const FIRST_PARTY_TABLE: usize = 1;

static TABLE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("table").expect("Failed to compile TABLE_SELECTOR")
});
static ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("tr").expect("Failed to compile ROW_SELECTOR")
});
static CELL_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("td").expect("Failed to compile CELL_SELECTOR")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyVote {
    /// Ballot number, only used to order columns.
    pub number: u32,
    pub name: String,
    pub votes: String,
}

fn is_placeholder(text: &str) -> bool {
    text.is_empty() || text == "-"
}

/// Reads every party result row from a municipality page.
/// Returns `None` when the page has no party tables at all.
pub fn extract_party_votes(document: &Html) -> Option<Vec<PartyVote>> {
    let mut tables = document.select(&TABLE_SELECTOR).skip(FIRST_PARTY_TABLE).peekable();
    tables.peek()?;

    let mut votes = Vec::new();
    for table in tables {
        for row in table.select(&ROW_SELECTOR) {
            let cells: Vec<String> = row
                .select(&CELL_SELECTOR)
                .map(|td| td.text().collect::<String>().trim().to_string())
                .collect();
            if cells.len() < MIN_PARTY_CELLS {
                continue;
            }

            let name = &cells[PARTY_NAME_CELL];
            let count = &cells[PARTY_VOTES_CELL];
            if is_placeholder(name) || is_placeholder(count) {
                continue;
            }
            let Ok(number) = cells[PARTY_NUMBER_CELL].parse::<u32>() else {
                tracing::debug!("Skipping party row with non-numeric number: {:?}", cells);
                continue;
            };

            votes.push(PartyVote { number, name: name.clone(), votes: count.clone() });
        }
    }

    Some(votes)
}

/// Party columns discovered across all municipalities.
///
/// The first name seen for a party number wins. Order is fixed only by
/// [`PartyVocabulary::finalize`], after every unit has been observed.
#[derive(Debug, Default)]
pub struct PartyVocabulary {
    parties: Vec<(u32, String)>,
    seen: HashSet<u32>,
}

impl PartyVocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, vote: &PartyVote) {
        if self.seen.insert(vote.number) {
            self.parties.push((vote.number, vote.name.clone()));
        }
    }

    /// Party names ordered by ballot number.
    pub fn finalize(mut self) -> Vec<String> {
        self.parties.sort_by_key(|(number, _)| *number);
        self.parties.into_iter().map(|(_, name)| name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT_PAGE: &str = r#"
        <html><body>
        <table><tr><td class="cislo">1</td><td class="cislo">2</td><td class="cislo">3</td></tr></table>
        <div class="t2_470">
        <table>
          <tr><th>Strana</th><th colspan="2">Platné hlasy</th></tr>
          <tr><th>číslo</th><th>název</th><th>celkem</th><th>v %</th></tr>
          <tr><td class="cislo">1</td><td class="overflow_name">Občanská demokratická strana</td><td class="cislo">29</td><td class="cislo">20,00</td></tr>
          <tr><td class="cislo">2</td><td class="overflow_name">Řád národa - Vlastenecká unie</td><td class="cislo">-</td><td class="cislo">-</td></tr>
        </table>
        </div>
        <div class="t2_470">
        <table>
          <tr><td class="cislo">4</td><td class="overflow_name">Česká str.sociálně demokrat.</td><td class="cislo">1 112</td><td class="cislo">7,69</td></tr>
          <tr><td class="hidden_td">-</td><td class="hidden_td">-</td><td class="hidden_td">-</td></tr>
          <tr><td class="cislo">x</td><td class="overflow_name">Bez čísla</td><td class="cislo">3</td></tr>
        </table>
        </div>
        </body></html>
    "#;

    #[test]
    fn test_extract_party_votes_skips_summary_and_placeholders() {
        let doc = Html::parse_document(UNIT_PAGE);
        let votes = extract_party_votes(&doc).unwrap();

        assert_eq!(
            votes,
            vec![
                PartyVote { number: 1, name: "Občanská demokratická strana".into(), votes: "29".into() },
                PartyVote { number: 4, name: "Česká str.sociálně demokrat.".into(), votes: "1 112".into() },
            ]
        );
    }

    #[test]
    fn test_page_without_party_tables() {
        let summary_only = Html::parse_document(
            r#"<table><tr><td class="cislo">1</td><td class="cislo">2</td><td class="cislo">3</td></tr></table>"#,
        );
        assert_eq!(extract_party_votes(&summary_only), None);

        let empty_party_table = Html::parse_document("<table></table><table></table>");
        assert_eq!(extract_party_votes(&empty_party_table), Some(vec![]));
    }

    #[test]
    fn test_vocabulary_orders_by_number_and_keeps_first_name() {
        let mut vocabulary = PartyVocabulary::new();
        for (number, name) in [(7, "ANO 2011"), (1, "ODS"), (7, "ANO"), (4, "ČSSD")] {
            vocabulary.observe(&PartyVote { number, name: name.into(), votes: "1".into() });
        }
        assert_eq!(vocabulary.finalize(), vec!["ODS", "ČSSD", "ANO 2011"]);
    }
}
