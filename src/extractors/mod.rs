// src/extractors/mod.rs
pub mod districts;
pub mod parties;
pub mod turnout;
pub mod units;

pub use districts::build_district_index;
pub use parties::{extract_party_votes, PartyVocabulary};
pub use turnout::extract_turnout;
pub use units::extract_units;
