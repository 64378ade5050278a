// src/volby/models.rs
use std::collections::HashMap;
use std::time::Duration;

/// Landing page listing every district of the 2017 Chamber of Deputies election.
pub const DEFAULT_HOME_URL: &str = "https://www.volby.cz/pls/ps2017nss/ps3?xjazyk=CZ";
/// Base that relative district links on the landing page resolve against.
pub const DEFAULT_BASE_URL: &str = "https://www.volby.cz/pls/ps2017nss/";
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 1000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime settings for talking to volby.cz.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub home_url: String,
    pub base_url: String,
    /// Pause after every municipality fetch. Rate limit towards the source site.
    pub request_delay: Duration,
    pub timeout: Duration,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            home_url: DEFAULT_HOME_URL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_delay: Duration::from_millis(DEFAULT_REQUEST_DELAY_MS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Lower-cased district name -> district page URL.
pub type DistrictIndex = HashMap<String, String>;

/// One municipality ("obec") listed on a district page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictUnit {
    pub name: String,
    pub url: String,
    /// Value of the `xobec` query parameter, if the link carried one.
    pub code: Option<String>,
}

/// Municipalities of one district in page order, unique by name.
#[derive(Debug, Clone, Default)]
pub struct UnitIndex {
    units: Vec<DistrictUnit>,
    by_name: HashMap<String, usize>,
}

impl UnitIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a unit. A repeated name replaces the earlier entry but keeps its position.
    pub fn insert(&mut self, unit: DistrictUnit) {
        match self.by_name.get(&unit.name) {
            Some(&idx) => self.units[idx] = unit,
            None => {
                self.by_name.insert(unit.name.clone(), self.units.len());
                self.units.push(unit);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &DistrictUnit> {
        self.units.iter()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl FromIterator<DistrictUnit> for UnitIndex {
    fn from_iter<I: IntoIterator<Item = DistrictUnit>>(iter: I) -> Self {
        let mut index = UnitIndex::new();
        for unit in iter {
            index.insert(unit);
        }
        index
    }
}
