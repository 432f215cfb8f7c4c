// ADP catalog loading and availability filtering.
//
// Reads a season's ADP table: one header row, then data rows whose columns
// are positional (name, team, bye week, position, an ignored column, PPR
// rank). Rows that fail to parse are skipped; an unreadable source yields an
// empty catalog with a recorded warning instead of an error.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::TierBreakpoints;
use crate::draft::pick::{name_key, PickRecord, Position};
use crate::valuation::tiers;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// A player in the season's ADP table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPlayer {
    pub name: String,
    pub team: String,
    pub position: Position,
    /// Consensus draft rank; lower is drafted earlier.
    pub adp_rank: f64,
    pub bye_week: Option<u8>,
    /// Derived from `adp_rank` at construction.
    pub tier: u8,
}

impl CatalogPlayer {
    pub fn new(
        name: impl Into<String>,
        team: impl Into<String>,
        position: Position,
        adp_rank: f64,
        bye_week: Option<u8>,
        tiers: &TierBreakpoints,
    ) -> Self {
        CatalogPlayer {
            name: name.into(),
            team: team.into(),
            position,
            adp_rank,
            bye_week,
            tier: tiers::classify(adp_rank, tiers),
        }
    }
}

/// The loaded, tiered catalog for one season, sorted ascending by ADP rank.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    players: Vec<CatalogPlayer>,
    warnings: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },
}

// ---------------------------------------------------------------------------
// Column layout
// ---------------------------------------------------------------------------

const COL_NAME: usize = 0;
const COL_TEAM: usize = 1;
const COL_BYE: usize = 2;
const COL_POSITION: usize = 3;
const COL_PPR_RANK: usize = 5;

const MAX_BYE_WEEK: u8 = 18;

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

impl Catalog {
    /// Build a catalog from already-constructed players, sorting by rank.
    pub fn from_players(mut players: Vec<CatalogPlayer>) -> Self {
        players.sort_by(|a, b| a.adp_rank.total_cmp(&b.adp_rank));
        Catalog {
            players,
            warnings: Vec::new(),
        }
    }

    /// An empty catalog carrying a warning about why it is empty.
    pub fn degraded(warning: impl Into<String>) -> Self {
        Catalog {
            players: Vec::new(),
            warnings: vec![warning.into()],
        }
    }

    pub fn players(&self) -> &[CatalogPlayer] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Warnings recorded while loading (unreadable source, skipped rows).
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Find a player by case-insensitive name. When several rows share the
    /// name, the best-ranked one is returned.
    pub fn find(&self, name: &str) -> Option<&CatalogPlayer> {
        let wanted = name_key(name);
        self.players.iter().find(|p| name_key(&p.name) == wanted)
    }

    /// Players nobody has drafted yet, in ADP order.
    ///
    /// A catalog player is drafted when any pick's player name equals its
    /// name case-insensitively. Rows sharing a name leave the pool together.
    pub fn available(&self, picks: &[PickRecord]) -> Vec<&CatalogPlayer> {
        let drafted: HashSet<String> = picks
            .iter()
            .map(|p| name_key(&p.player_name))
            .collect();
        self.players
            .iter()
            .filter(|p| !drafted.contains(&name_key(&p.name)))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

fn field<'a>(record: &'a csv::StringRecord, idx: usize) -> &'a str {
    record.get(idx).map(str::trim).unwrap_or("")
}

/// Parse one data row, or explain why it was skipped.
fn parse_row(record: &csv::StringRecord, tiers: &TierBreakpoints) -> Result<CatalogPlayer, String> {
    let name = field(record, COL_NAME);
    if name.is_empty() {
        return Err("missing player name".into());
    }

    let rank_str = field(record, COL_PPR_RANK);
    let adp_rank: f64 = rank_str
        .parse()
        .map_err(|_| format!("'{name}': unparseable rank '{rank_str}'"))?;
    if !adp_rank.is_finite() || adp_rank <= 0.0 {
        return Err(format!("'{name}': rank must be a positive number, got '{rank_str}'"));
    }

    let pos_str = field(record, COL_POSITION);
    let position = Position::from_str_pos(pos_str)
        .ok_or_else(|| format!("'{name}': unknown position '{pos_str}'"))?;

    let bye_week = field(record, COL_BYE)
        .parse::<u8>()
        .ok()
        .filter(|w| (1..=MAX_BYE_WEEK).contains(w));

    Ok(CatalogPlayer::new(
        name,
        field(record, COL_TEAM),
        position,
        adp_rank,
        bye_week,
        tiers,
    ))
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

/// Read a catalog from any reader. Only a failure to read the header row is
/// an error; bad data rows are skipped with a warning.
pub fn load_catalog_from_reader<R: Read>(
    rdr: R,
    tiers: &TierBreakpoints,
) -> Result<Catalog, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(rdr);
    reader.headers()?;

    let mut players = Vec::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("skipping malformed ADP row: {}", e);
                skipped += 1;
                continue;
            }
        };
        match parse_row(&record, tiers) {
            Ok(player) => players.push(player),
            Err(reason) => {
                warn!("skipping ADP row: {}", reason);
                skipped += 1;
            }
        }
    }

    let mut catalog = Catalog::from_players(players);
    if skipped > 0 {
        catalog
            .warnings
            .push(format!("skipped {skipped} unparseable ADP rows"));
    }
    Ok(catalog)
}

/// Load a catalog from a CSV file, surfacing I/O and header errors.
pub fn try_load_catalog(path: &Path, tiers: &TierBreakpoints) -> Result<Catalog, CatalogError> {
    let file = std::fs::File::open(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    load_catalog_from_reader(file, tiers).map_err(|e| CatalogError::Csv {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load a catalog from a CSV file, degrading to an empty catalog when the
/// file cannot be read at all.
pub fn load_catalog(path: &Path, tiers: &TierBreakpoints) -> Catalog {
    match try_load_catalog(path, tiers) {
        Ok(catalog) => {
            info!("Loaded {} ADP entries from {}", catalog.len(), path.display());
            catalog
        }
        Err(e) => {
            warn!("ADP source unavailable, continuing with an empty catalog: {}", e);
            Catalog::degraded(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
