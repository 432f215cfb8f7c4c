// Engine configuration loading and parsing (engine.toml).
//
// Every threshold the valuation pipeline uses lives here, so tier, need,
// scarcity and grading breakpoints can be tuned without touching the
// algorithms. Each section falls back to the league-wide defaults when it is
// absent from the file.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::draft::pick::Position;
use crate::request::ScoringType;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Default constants
// ---------------------------------------------------------------------------

pub const DEFAULT_LEAGUE_SIZE: u32 = 12;
pub const MIN_LEAGUE_SIZE: u32 = 8;
pub const MAX_LEAGUE_SIZE: u32 = 16;
pub const DEFAULT_ROUNDS: u32 = 16;
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 15;
/// Season of the ADP table shipped under `data/adp/`.
pub const DEFAULT_SEASON: i32 = 2025;

/// Upper ADP rank (inclusive) of tiers 1 through 4. Anything deeper is tier 5.
pub const TIER_BREAKPOINTS: [f64; 4] = [12.0, 36.0, 72.0, 120.0];

/// Need ladders as `(count below, need)` steps plus the fallback need.
/// Roster shape: 1 QB, 2 RB, 3 WR, 1 TE starters.
pub const QB_NEED_STEPS: [(u32, u8); 2] = [(1, 3), (2, 1)];
pub const QB_NEED_OTHERWISE: u8 = 0;
pub const RB_NEED_STEPS: [(u32, u8); 2] = [(2, 3), (4, 2)];
pub const RB_NEED_OTHERWISE: u8 = 1;
pub const WR_NEED_STEPS: [(u32, u8); 2] = [(3, 3), (5, 2)];
pub const WR_NEED_OTHERWISE: u8 = 1;
pub const TE_NEED_STEPS: [(u32, u8); 2] = [(1, 2), (2, 1)];
pub const TE_NEED_OTHERWISE: u8 = 0;
/// Kickers and defenses only register a need after this round.
pub const LATE_POSITION_ROUND: u32 = 12;
pub const LATE_POSITION_STEPS: [(u32, u8); 1] = [(1, 1)];

/// Scarcity bands as `(high below, medium below)` counts of top-tier players.
pub const QB_SCARCITY: (usize, usize) = (3, 6);
pub const RB_SCARCITY: (usize, usize) = (8, 16);
pub const WR_SCARCITY: (usize, usize) = (12, 24);
pub const TE_SCARCITY: (usize, usize) = (3, 6);
pub const SCARCITY_TOP_TIER: u8 = 2;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// All tunable engine settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub league: LeagueDefaults,
    pub data: DataConfig,
    pub tiers: TierBreakpoints,
    pub needs: NeedRules,
    pub scarcity: ScarcityThresholds,
    pub valuation: ValuationWeights,
    pub reasoning: ReasoningThresholds,
    pub grading: GradingScale,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LeagueDefaults {
    pub default_size: u32,
    pub min_size: u32,
    pub max_size: u32,
    /// Rounds in a full draft; used to derive rounds remaining.
    pub rounds: u32,
    pub default_scoring: ScoringType,
}

impl Default for LeagueDefaults {
    fn default() -> Self {
        LeagueDefaults {
            default_size: DEFAULT_LEAGUE_SIZE,
            min_size: MIN_LEAGUE_SIZE,
            max_size: MAX_LEAGUE_SIZE,
            rounds: DEFAULT_ROUNDS,
            default_scoring: ScoringType::Ppr,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding one `<season>.csv` ADP table per season.
    pub adp_dir: String,
    /// Season loaded when the caller does not name one.
    pub default_season: i32,
    /// How many recommendations a response keeps by default.
    pub recommendation_limit: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            adp_dir: "data/adp".into(),
            default_season: DEFAULT_SEASON,
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }
}

impl DataConfig {
    /// Default ADP table path for a season.
    pub fn adp_path(&self, season: i32) -> PathBuf {
        Path::new(&self.adp_dir).join(format!("{season}.csv"))
    }
}

// ---------------------------------------------------------------------------
// Tiers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TierBreakpoints {
    /// Inclusive upper rank of each tier, ascending. One tier past the last.
    pub breakpoints: Vec<f64>,
}

impl Default for TierBreakpoints {
    fn default() -> Self {
        TierBreakpoints {
            breakpoints: TIER_BREAKPOINTS.to_vec(),
        }
    }
}

// ---------------------------------------------------------------------------
// Needs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct NeedStep {
    /// The step applies while the rostered count is strictly below this.
    pub below: u32,
    pub need: u8,
}

/// Ordered need steps for one position; the first matching step wins.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NeedLadder {
    pub steps: Vec<NeedStep>,
    #[serde(default)]
    pub otherwise: u8,
    /// When set, the position carries no need until the draft round is
    /// strictly greater than this.
    #[serde(default)]
    pub after_round: Option<u32>,
}

impl NeedLadder {
    fn from_steps(steps: &[(u32, u8)], otherwise: u8, after_round: Option<u32>) -> Self {
        NeedLadder {
            steps: steps
                .iter()
                .map(|&(below, need)| NeedStep { below, need })
                .collect(),
            otherwise,
            after_round,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NeedRules {
    #[serde(rename = "QB")]
    pub qb: NeedLadder,
    #[serde(rename = "RB")]
    pub rb: NeedLadder,
    #[serde(rename = "WR")]
    pub wr: NeedLadder,
    #[serde(rename = "TE")]
    pub te: NeedLadder,
    #[serde(rename = "K")]
    pub k: NeedLadder,
    #[serde(rename = "DEF")]
    pub def: NeedLadder,
}

impl Default for NeedRules {
    fn default() -> Self {
        NeedRules {
            qb: NeedLadder::from_steps(&QB_NEED_STEPS, QB_NEED_OTHERWISE, None),
            rb: NeedLadder::from_steps(&RB_NEED_STEPS, RB_NEED_OTHERWISE, None),
            wr: NeedLadder::from_steps(&WR_NEED_STEPS, WR_NEED_OTHERWISE, None),
            te: NeedLadder::from_steps(&TE_NEED_STEPS, TE_NEED_OTHERWISE, None),
            k: NeedLadder::from_steps(&LATE_POSITION_STEPS, 0, Some(LATE_POSITION_ROUND)),
            def: NeedLadder::from_steps(&LATE_POSITION_STEPS, 0, Some(LATE_POSITION_ROUND)),
        }
    }
}

impl NeedRules {
    pub fn ladder(&self, pos: Position) -> &NeedLadder {
        match pos {
            Position::Quarterback => &self.qb,
            Position::RunningBack => &self.rb,
            Position::WideReceiver => &self.wr,
            Position::TightEnd => &self.te,
            Position::Kicker => &self.k,
            Position::Defense => &self.def,
        }
    }
}

// ---------------------------------------------------------------------------
// Scarcity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ScarcityBands {
    /// Fewer top-tier players than this is high scarcity.
    pub high_below: usize,
    /// Fewer than this (but not high) is medium scarcity.
    pub medium_below: usize,
}

impl ScarcityBands {
    const fn new((high_below, medium_below): (usize, usize)) -> Self {
        ScarcityBands {
            high_below,
            medium_below,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScarcityThresholds {
    /// Players at or above this tier (numerically at or below) count as
    /// top-tier depth.
    pub top_tier: u8,
    #[serde(rename = "QB")]
    pub qb: ScarcityBands,
    #[serde(rename = "RB")]
    pub rb: ScarcityBands,
    #[serde(rename = "WR")]
    pub wr: ScarcityBands,
    #[serde(rename = "TE")]
    pub te: ScarcityBands,
}

impl Default for ScarcityThresholds {
    fn default() -> Self {
        ScarcityThresholds {
            top_tier: SCARCITY_TOP_TIER,
            qb: ScarcityBands::new(QB_SCARCITY),
            rb: ScarcityBands::new(RB_SCARCITY),
            wr: ScarcityBands::new(WR_SCARCITY),
            te: ScarcityBands::new(TE_SCARCITY),
        }
    }
}

impl ScarcityThresholds {
    /// Bands for a position, or `None` for positions without scarcity
    /// tracking (K, DEF).
    pub fn bands(&self, pos: Position) -> Option<&ScarcityBands> {
        match pos {
            Position::Quarterback => Some(&self.qb),
            Position::RunningBack => Some(&self.rb),
            Position::WideReceiver => Some(&self.wr),
            Position::TightEnd => Some(&self.te),
            Position::Kicker | Position::Defense => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Valuation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValuationWeights {
    /// Base value is this minus the ADP rank.
    pub base: f64,
    pub need_multipliers: NeedMultipliers,
    pub scarcity_multipliers: ScarcityMultipliers,
    pub tier1_bonus: f64,
    pub tier2_bonus: f64,
    /// Points per pick that a player has slid past his ADP.
    pub value_pick_factor: f64,
}

impl Default for ValuationWeights {
    fn default() -> Self {
        ValuationWeights {
            base: 100.0,
            need_multipliers: NeedMultipliers::default(),
            scarcity_multipliers: ScarcityMultipliers::default(),
            tier1_bonus: 20.0,
            tier2_bonus: 10.0,
            value_pick_factor: 2.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NeedMultipliers {
    pub critical: f64,
    pub strong: f64,
    pub depth: f64,
    pub none: f64,
}

impl Default for NeedMultipliers {
    fn default() -> Self {
        NeedMultipliers {
            critical: 1.5,
            strong: 1.2,
            depth: 1.1,
            none: 0.8,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScarcityMultipliers {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl Default for ScarcityMultipliers {
    fn default() -> Self {
        ScarcityMultipliers {
            high: 1.3,
            medium: 1.1,
            low: 1.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Reasoning
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReasoningThresholds {
    /// Picks past ADP beyond which a player is a "significant value".
    pub significant_value_margin: f64,
    /// Picks past ADP beyond which a player is "good value".
    pub good_value_margin: f64,
    /// Inclusive range of bye weeks considered easy to cover.
    pub manageable_bye_weeks: [u8; 2],
}

impl Default for ReasoningThresholds {
    fn default() -> Self {
        ReasoningThresholds {
            significant_value_margin: 12.0,
            good_value_margin: 6.0,
            manageable_bye_weeks: [6, 11],
        }
    }
}

// ---------------------------------------------------------------------------
// Grading
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GradeStep {
    /// Average pick value must be strictly greater than this.
    pub above: f64,
    pub grade: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GradingScale {
    /// Picks later than ADP by more than this are best picks.
    pub best_pick_margin: f64,
    /// Picks earlier than ADP by more than this are reaches.
    pub reach_margin: f64,
    /// Descending grade steps; the first step the average clears wins.
    pub steps: Vec<GradeStep>,
    pub floor_grade: String,
}

impl Default for GradingScale {
    fn default() -> Self {
        let step = |above: f64, grade: &str| GradeStep {
            above,
            grade: grade.into(),
        };
        GradingScale {
            best_pick_margin: 12.0,
            reach_margin: 12.0,
            steps: vec![
                step(8.0, "A"),
                step(4.0, "B+"),
                step(0.0, "B"),
                step(-4.0, "B-"),
                step(-8.0, "C"),
            ],
            floor_grade: "D".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

const CONFIG_FILE: &str = "engine.toml";

/// Load and validate configuration from `config/engine.toml` relative to
/// `base_dir`. A missing file yields the built-in defaults.
///
/// This is the lower-level loading primitive that does not auto-copy defaults.
/// Prefer `load_config()` which handles default initialization automatically.
pub fn load_config_from(base_dir: &Path) -> Result<EngineConfig, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    if !path.exists() {
        let config = EngineConfig::default();
        validate(&config)?;
        return Ok(config);
    }
    let text = read_file(&path)?;
    parse_config(&text, &path)
}

/// Parse and validate config text. `path` is only used for error reporting.
pub fn parse_config(text: &str, path: &Path) -> Result<EngineConfig, ConfigError> {
    let config: EngineConfig = toml::from_str(text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    validate(&config)?;
    Ok(config)
}

fn copy_error(action: &str, path: &Path, e: std::io::Error) -> ConfigError {
    ConfigError::DefaultsCopyError {
        message: format!("cannot {action} {}: {e}", path.display()),
    }
}

/// Seed `config/` with every `*.toml` under `defaults/` that the user has not
/// already customized. Returns the files written; templates such as
/// `engine.toml.example` are left alone. A missing `defaults/` is not an
/// error, since the built-in defaults apply.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    if !defaults_dir.is_dir() {
        return Ok(Vec::new());
    }
    let config_dir = base_dir.join("config");
    std::fs::create_dir_all(&config_dir).map_err(|e| copy_error("create", &config_dir, e))?;

    let shipped: Vec<PathBuf> = std::fs::read_dir(&defaults_dir)
        .map_err(|e| copy_error("list", &defaults_dir, e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "toml"))
        .collect();

    let mut seeded = Vec::new();
    for source in shipped {
        let Some(file_name) = source.file_name() else {
            continue;
        };
        let target = config_dir.join(file_name);
        // Never overwrite an existing config file.
        let mut dest = match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
        {
            Ok(dest) => dest,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(copy_error("create", &target, e)),
        };
        let mut src = std::fs::File::open(&source).map_err(|e| copy_error("open", &source, e))?;
        std::io::copy(&mut src, &mut dest).map_err(|e| copy_error("write", &target, e))?;
        info!("seeded {} from {}", target.display(), source.display());
        seeded.push(target);
    }
    Ok(seeded)
}

/// Convenience wrapper: loads config relative to the current working directory.
/// Ensures default config files are copied before loading.
pub fn load_config() -> Result<EngineConfig, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn invalid(field: impl Into<String>, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        field: field.into(),
        message: message.into(),
    }
}

pub fn validate(config: &EngineConfig) -> Result<(), ConfigError> {
    let league = &config.league;
    if league.min_size == 0 || league.min_size > league.max_size {
        return Err(invalid(
            "league.min_size",
            format!(
                "must be between 1 and max_size ({}), got {}",
                league.max_size, league.min_size
            ),
        ));
    }
    if !(league.min_size..=league.max_size).contains(&league.default_size) {
        return Err(invalid(
            "league.default_size",
            format!(
                "must be within {}..={}, got {}",
                league.min_size, league.max_size, league.default_size
            ),
        ));
    }
    if league.rounds == 0 {
        return Err(invalid("league.rounds", "must be greater than 0"));
    }

    if config.data.default_season <= 0 {
        return Err(invalid(
            "data.default_season",
            format!("must be a positive year, got {}", config.data.default_season),
        ));
    }
    if config.data.recommendation_limit == 0 {
        return Err(invalid("data.recommendation_limit", "must be greater than 0"));
    }

    let breakpoints = &config.tiers.breakpoints;
    if breakpoints.iter().any(|b| !b.is_finite() || *b <= 0.0) {
        return Err(invalid("tiers.breakpoints", "must be finite and positive"));
    }
    if breakpoints.windows(2).any(|w| w[0] >= w[1]) {
        return Err(invalid("tiers.breakpoints", "must be strictly ascending"));
    }

    let needs = &config.needs;
    let ladders: &[(&str, &NeedLadder)] = &[
        ("needs.QB", &needs.qb),
        ("needs.RB", &needs.rb),
        ("needs.WR", &needs.wr),
        ("needs.TE", &needs.te),
        ("needs.K", &needs.k),
        ("needs.DEF", &needs.def),
    ];
    for (name, ladder) in ladders {
        if ladder.steps.windows(2).any(|w| w[0].below >= w[1].below) {
            return Err(invalid(
                format!("{name}.steps"),
                "`below` values must be strictly ascending",
            ));
        }
    }

    let scarcity = &config.scarcity;
    if scarcity.top_tier == 0 {
        return Err(invalid("scarcity.top_tier", "must be greater than 0"));
    }
    let bands: &[(&str, &ScarcityBands)] = &[
        ("scarcity.QB", &scarcity.qb),
        ("scarcity.RB", &scarcity.rb),
        ("scarcity.WR", &scarcity.wr),
        ("scarcity.TE", &scarcity.te),
    ];
    for (name, band) in bands {
        if band.high_below > band.medium_below {
            return Err(invalid(
                *name,
                format!(
                    "high_below ({}) must not exceed medium_below ({})",
                    band.high_below, band.medium_below
                ),
            ));
        }
    }

    let v = &config.valuation;
    let multipliers: &[(&str, f64)] = &[
        ("valuation.need_multipliers.critical", v.need_multipliers.critical),
        ("valuation.need_multipliers.strong", v.need_multipliers.strong),
        ("valuation.need_multipliers.depth", v.need_multipliers.depth),
        ("valuation.need_multipliers.none", v.need_multipliers.none),
        ("valuation.scarcity_multipliers.high", v.scarcity_multipliers.high),
        ("valuation.scarcity_multipliers.medium", v.scarcity_multipliers.medium),
        ("valuation.scarcity_multipliers.low", v.scarcity_multipliers.low),
    ];
    for (name, val) in multipliers {
        if !val.is_finite() || *val <= 0.0 {
            return Err(invalid(*name, format!("must be > 0, got {val}")));
        }
    }

    let [first_bye, last_bye] = config.reasoning.manageable_bye_weeks;
    if first_bye > last_bye {
        return Err(invalid(
            "reasoning.manageable_bye_weeks",
            format!("range start {first_bye} is after end {last_bye}"),
        ));
    }

    if config
        .grading
        .steps
        .windows(2)
        .any(|w| w[0].above <= w[1].above)
    {
        return Err(invalid("grading.steps", "thresholds must be strictly descending"));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Locate the workspace `defaults/` directory whether tests run from the
    /// crate directory or the workspace root.
    fn project_root() -> PathBuf {
        let cwd = std::env::current_dir().unwrap();
        cwd.ancestors()
            .find(|dir| dir.join("defaults").join(CONFIG_FILE).exists())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| panic!("Cannot locate defaults/ directory from CWD {:?}", cwd))
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let tmp = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(tmp.join("config")).unwrap();
        tmp
    }

    fn expect_validation_field(text: &str, expected_field: &str) {
        let err = parse_config(text, Path::new("engine.toml")).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, expected_field),
            other => panic!("expected ValidationError, got: {other}"),
        }
    }

    #[test]
    fn defaults_reproduce_league_constants() {
        let config = EngineConfig::default();
        validate(&config).unwrap();
        assert_eq!(config.league.default_size, 12);
        assert_eq!(config.league.rounds, 16);
        assert_eq!(config.data.recommendation_limit, 15);
        assert_eq!(config.tiers.breakpoints, vec![12.0, 36.0, 72.0, 120.0]);
        assert_eq!(config.needs.k.after_round, Some(12));
        assert_eq!(config.scarcity.rb, ScarcityBands { high_below: 8, medium_below: 16 });
        assert_eq!(config.grading.steps[0].grade, "A");
        assert_eq!(config.grading.floor_grade, "D");
    }

    #[test]
    fn shipped_defaults_file_matches_builtin_defaults() {
        let root = project_root();
        let path = root.join("defaults").join(CONFIG_FILE);
        let text = fs::read_to_string(&path).unwrap();
        let config = parse_config(&text, &path).expect("shipped defaults should parse");
        let builtin = EngineConfig::default();

        assert_eq!(config.tiers.breakpoints, builtin.tiers.breakpoints);
        assert_eq!(config.needs.qb, builtin.needs.qb);
        assert_eq!(config.needs.wr, builtin.needs.wr);
        assert_eq!(config.needs.def, builtin.needs.def);
        assert_eq!(config.scarcity.wr, builtin.scarcity.wr);
        assert_eq!(config.grading.steps, builtin.grading.steps);
        assert_eq!(config.data.adp_dir, "data/adp");
        assert_eq!(config.data.default_season, builtin.data.default_season);
    }

    #[test]
    fn default_season_table_ships_with_the_repo() {
        let root = project_root();
        let path = root.join("defaults").join(CONFIG_FILE);
        let shipped = parse_config(&fs::read_to_string(&path).unwrap(), &path).unwrap();
        for config in [EngineConfig::default(), shipped] {
            let adp = root.join(config.data.adp_path(config.data.default_season));
            assert!(adp.exists(), "missing bundled ADP table {}", adp.display());
        }
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = parse_config("", Path::new("engine.toml")).unwrap();
        assert_eq!(config.league.max_size, 16);
        assert!((config.valuation.base - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_section_overrides_only_named_fields() {
        let text = r#"
[valuation]
tier1_bonus = 25.0

[needs.QB]
steps = [{ below = 2, need = 3 }]
otherwise = 1
"#;
        let config = parse_config(text, Path::new("engine.toml")).unwrap();
        assert!((config.valuation.tier1_bonus - 25.0).abs() < f64::EPSILON);
        assert!((config.valuation.tier2_bonus - 10.0).abs() < f64::EPSILON);
        assert_eq!(config.needs.qb.steps, vec![NeedStep { below: 2, need: 3 }]);
        assert_eq!(config.needs.qb.otherwise, 1);
        assert_eq!(config.needs.rb, NeedRules::default().rb);
    }

    #[test]
    fn missing_config_file_falls_back_to_defaults() {
        let tmp = scratch_dir("draftboard_config_missing");
        let config = load_config_from(&tmp).expect("defaults should load");
        assert_eq!(config.league.default_size, 12);
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn parse_error_for_invalid_toml() {
        let tmp = scratch_dir("draftboard_config_invalid");
        fs::write(tmp.join("config").join(CONFIG_FILE), "this is not valid [[[ toml").unwrap();

        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::ParseError { path, .. } => assert!(path.ends_with(CONFIG_FILE)),
            other => panic!("expected ParseError, got: {other}"),
        }
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_unsorted_tier_breakpoints() {
        expect_validation_field("[tiers]\nbreakpoints = [12.0, 72.0, 36.0]\n", "tiers.breakpoints");
    }

    #[test]
    fn rejects_default_size_outside_bounds() {
        expect_validation_field("[league]\ndefault_size = 20\n", "league.default_size");
    }

    #[test]
    fn rejects_zero_rounds() {
        expect_validation_field("[league]\nrounds = 0\n", "league.rounds");
    }

    #[test]
    fn rejects_non_positive_default_season() {
        expect_validation_field("[data]\ndefault_season = 0\n", "data.default_season");
    }

    #[test]
    fn rejects_zero_recommendation_limit() {
        expect_validation_field("[data]\nrecommendation_limit = 0\n", "data.recommendation_limit");
    }

    #[test]
    fn rejects_unsorted_need_ladder() {
        let text = "[needs.RB]\nsteps = [{ below = 4, need = 2 }, { below = 2, need = 3 }]\n";
        expect_validation_field(text, "needs.RB.steps");
    }

    #[test]
    fn rejects_inverted_scarcity_bands() {
        let text = "[scarcity.TE]\nhigh_below = 7\nmedium_below = 6\n";
        expect_validation_field(text, "scarcity.TE");
    }

    #[test]
    fn rejects_non_positive_multiplier() {
        expect_validation_field(
            "[valuation.need_multipliers]\nnone = 0.0\n",
            "valuation.need_multipliers.none",
        );
    }

    #[test]
    fn rejects_inverted_bye_week_range() {
        expect_validation_field(
            "[reasoning]\nmanageable_bye_weeks = [11, 6]\n",
            "reasoning.manageable_bye_weeks",
        );
    }

    #[test]
    fn rejects_ascending_grade_scale() {
        let text = r#"
[grading]
steps = [{ above = 0.0, grade = "B" }, { above = 8.0, grade = "A" }]
"#;
        expect_validation_field(text, "grading.steps");
    }

    #[test]
    fn ensure_config_files_copies_missing_files() {
        let tmp = std::env::temp_dir().join("draftboard_config_ensure_copies");
        let _ = fs::remove_dir_all(&tmp);
        let defaults_dir = tmp.join("defaults");
        fs::create_dir_all(&defaults_dir).unwrap();

        let root = project_root();
        fs::copy(
            root.join("defaults").join(CONFIG_FILE),
            defaults_dir.join(CONFIG_FILE),
        )
        .unwrap();
        fs::write(defaults_dir.join("engine.toml.example"), "# example\n").unwrap();

        let copied = ensure_config_files(&tmp).expect("should succeed");
        assert_eq!(copied.len(), 1);
        assert!(tmp.join("config").join(CONFIG_FILE).exists());
        assert!(!tmp.join("config/engine.toml.example").exists());

        let config = load_config_from(&tmp).expect("copied config should load");
        assert_eq!(config.league.default_size, 12);

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_files_skips_existing() {
        let tmp = std::env::temp_dir().join("draftboard_config_ensure_skips");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(tmp.join("defaults")).unwrap();
        fs::create_dir_all(tmp.join("config")).unwrap();
        fs::write(tmp.join("defaults").join(CONFIG_FILE), "[league]\n").unwrap();
        fs::write(tmp.join("config").join(CONFIG_FILE), "# custom\n").unwrap();

        let copied = ensure_config_files(&tmp).expect("should succeed");
        assert!(copied.is_empty());
        let content = fs::read_to_string(tmp.join("config").join(CONFIG_FILE)).unwrap();
        assert_eq!(content, "# custom\n");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_files_no_defaults_dir_is_ok() {
        let tmp = std::env::temp_dir().join("draftboard_config_no_defaults");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&tmp).unwrap();

        let copied = ensure_config_files(&tmp).expect("should succeed");
        assert!(copied.is_empty());

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn adp_path_is_per_season() {
        let data = DataConfig::default();
        assert_eq!(data.adp_path(2025), PathBuf::from("data/adp/2025.csv"));
    }
}
