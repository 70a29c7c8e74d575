//! Game configuration
//!
//! Everything the rule engine and the search read lives in one immutable
//! [`Config`] value that is passed explicitly into every call:
//! - board size and starting layout (stones plus optional walls)
//! - turn order of the three colors
//! - the dominance table deciding what a captured stone turns into
//! - the adjacency directions scanned for flanks
//! - search knobs for each difficulty tier
//!
//! Every constructor validates, so holding a `Config` means holding a valid one.
//!
//! # Example
//!
//! ```
//! use jatsuna::config::{Config, Layout};
//! use jatsuna::Color;
//!
//! let config = Config::standard().with_setup(Layout::Diagonal.setup(true)).unwrap();
//! assert_eq!(config.next_color(Color::Stella), Color::Orb);
//! ```

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::{Color, Pos, BOARD_SIZE};
pub use crate::board::MAX_BOARD_SIZE;

/// The 8 adjacency directions, row step first
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Smallest board that still has an interior
pub const MIN_BOARD_SIZE: usize = 3;

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("board size {0} outside {}..={}", MIN_BOARD_SIZE, MAX_BOARD_SIZE)]
    BoardSize(usize),
    #[error("turn order must list three distinct colors, got {0:?}")]
    Players([Color; 3]),
    #[error("dominance table has no entry for {capturer:?} capturing {captured:?}")]
    MissingDominance { capturer: Color, captured: Color },
    #[error("dominance table lists {capturer:?} capturing {captured:?} twice")]
    DuplicateDominance { capturer: Color, captured: Color },
    #[error("dominance table lets {0:?} capture itself")]
    SelfDominance(Color),
    #[error("{0:?} must absorb one rival and turn the other into the third color")]
    BrokenCycle(Color),
    #[error("direction ({0}, {1}) is not a unit step")]
    InvalidDirection(i8, i8),
    #[error("direction ({0}, {1}) listed twice")]
    DuplicateDirection(i8, i8),
    #[error("no adjacency directions configured")]
    NoDirections,
    #[error("setup cell {0} lies outside the board")]
    SetupOutOfRange(Pos),
    #[error("setup places two things on {0}")]
    SetupConflict(Pos),
    #[error("{0:?} has no starting stone")]
    MissingStartingStone(Color),
    #[error("search setting `{0}` must be at least 1")]
    ZeroSearchSetting(&'static str),
    #[error("weak_random_fraction {0} outside 0.0..=1.0")]
    RandomFraction(f64),
    #[error("search setting `{0}` must be finite and non-negative, got {1}")]
    NegativeSearchSetting(&'static str, f64),
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
}

/// One dominance rule: `capturer` flanking `captured` turns it into `becomes`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominanceRule {
    pub capturer: Color,
    pub captured: Color,
    pub becomes: Color,
}

/// Total conversion table over the 6 ordered pairs of distinct colors.
///
/// Serialized as its list of rules; deserializing checks totality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DominanceRule>", into = "Vec<DominanceRule>")]
pub struct DominanceTable {
    /// `[capturer][captured]`; the diagonal holds the capturer and is never read
    table: [[Color; 3]; 3],
}

impl DominanceTable {
    /// Snake-slug-frog cycle: each color absorbs one rival and drives the
    /// other rival into the third color.
    pub fn standard() -> Self {
        use Color::*;
        Self {
            table: [
                // Orb: Gem -> Stella, Stella -> Orb
                [Orb, Stella, Orb],
                // Gem: Orb -> Gem, Stella -> Orb
                [Gem, Gem, Orb],
                // Stella: Orb -> Gem, Gem -> Stella
                [Gem, Stella, Stella],
            ],
        }
    }

    /// Build from rules; every off-diagonal pair exactly once.
    pub fn from_rules(rules: &[DominanceRule]) -> Result<Self, ConfigError> {
        let mut table = [Color::Orb, Color::Gem, Color::Stella].map(|c| [c; 3]);
        let mut seen = [[false; 3]; 3];

        for rule in rules {
            if rule.capturer == rule.captured {
                return Err(ConfigError::SelfDominance(rule.capturer));
            }
            let (a, b) = (rule.capturer.index(), rule.captured.index());
            if seen[a][b] {
                return Err(ConfigError::DuplicateDominance {
                    capturer: rule.capturer,
                    captured: rule.captured,
                });
            }
            seen[a][b] = true;
            table[a][b] = rule.becomes;
        }

        for capturer in Color::ALL {
            for captured in capturer.rivals() {
                if !seen[capturer.index()][captured.index()] {
                    return Err(ConfigError::MissingDominance { capturer, captured });
                }
            }
        }

        for capturer in Color::ALL {
            let [x, y] = capturer.rivals();
            let into = |captured: Color| table[capturer.index()][captured.index()];
            let absorbs_x = into(x) == capturer && into(y) == x;
            let absorbs_y = into(y) == capturer && into(x) == y;
            if !(absorbs_x || absorbs_y) {
                return Err(ConfigError::BrokenCycle(capturer));
            }
        }

        Ok(Self { table })
    }

    /// What `captured` becomes when flanked by `capturer`
    #[inline]
    pub fn converts(&self, capturer: Color, captured: Color) -> Color {
        debug_assert!(capturer != captured, "{:?} cannot capture itself", capturer);
        self.table[capturer.index()][captured.index()]
    }

    /// The 6 rules in canonical order
    pub fn rules(&self) -> Vec<DominanceRule> {
        Color::ALL
            .iter()
            .flat_map(|&capturer| {
                capturer.rivals().map(|captured| DominanceRule {
                    capturer,
                    captured,
                    becomes: self.converts(capturer, captured),
                })
            })
            .collect()
    }
}

impl Default for DominanceTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<DominanceRule>> for DominanceTable {
    type Error = ConfigError;

    fn try_from(rules: Vec<DominanceRule>) -> Result<Self, Self::Error> {
        Self::from_rules(&rules)
    }
}

impl From<DominanceTable> for Vec<DominanceRule> {
    fn from(table: DominanceTable) -> Self {
        table.rules()
    }
}

/// A stone placed before the first turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub pos: Pos,
    pub color: Color,
}

/// Starting position: stones and walls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setup {
    pub stones: Vec<Placement>,
    #[serde(default)]
    pub walls: Vec<Pos>,
}

impl Default for Setup {
    fn default() -> Self {
        Layout::WideTriangle.setup(true)
    }
}

/// Starting layouts for the canonical 7x7 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// O(2,3) C(4,5) P(5,2): fifteen moves for each color with the wall
    #[default]
    WideTriangle,
    /// Clustered around the centre
    TightTriangle,
    /// Each color starts near a border
    EdgeStart,
    Diagonal,
}

impl Layout {
    pub const ALL: [Layout; 4] = [
        Layout::WideTriangle,
        Layout::TightTriangle,
        Layout::EdgeStart,
        Layout::Diagonal,
    ];

    /// Starting stones, plus the centre wall when `with_wall`
    pub fn setup(self, with_wall: bool) -> Setup {
        let [orb, gem, stella] = match self {
            Layout::WideTriangle => [(2, 3), (4, 5), (5, 2)],
            Layout::TightTriangle => [(2, 2), (2, 4), (4, 3)],
            Layout::EdgeStart => [(0, 3), (6, 1), (6, 5)],
            Layout::Diagonal => [(1, 1), (1, 5), (5, 3)],
        };
        let stones = [(orb, Color::Orb), (gem, Color::Gem), (stella, Color::Stella)]
            .into_iter()
            .map(|((r, c), color)| Placement { pos: Pos::new(r, c), color })
            .collect();
        let center = (BOARD_SIZE / 2) as u8;
        let walls = if with_wall { vec![Pos::new(center, center)] } else { Vec::new() };
        Setup { stones, walls }
    }

    pub fn name(self) -> &'static str {
        match self {
            Layout::WideTriangle => "wide-triangle",
            Layout::TightTriangle => "tight-triangle",
            Layout::EdgeStart => "edge-start",
            Layout::Diagonal => "diagonal",
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown layout {0:?} (expected wide-triangle, tight-triangle, edge-start or diagonal)")]
pub struct ParseLayoutError(String);

impl FromStr for Layout {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::ALL
            .into_iter()
            .find(|layout| layout.name() == s)
            .ok_or_else(|| ParseLayoutError(s.to_string()))
    }
}

/// Search knobs per difficulty tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Minimax depth for `Hard`
    pub hard_depth: u8,
    /// Minimax depth for `SuperHard`
    pub superhard_depth: u8,
    /// Minimax depth for `Coalition`
    pub coalition_depth: u8,
    /// Moves expanded per node in the minimax tiers
    pub minimax_breadth: usize,
    /// Moves expanded per node in coalition search
    pub coalition_breadth: usize,
    /// Share of `Weak` moves picked uniformly at random
    pub weak_random_fraction: f64,
    /// Added to a corner move's weight in `Weak` (which picks the minimum)
    pub weak_corner_penalty: f64,
    /// Added to a corner move's score in `Medium`
    pub greedy_corner_bonus: f64,
    /// Upper bound of the tie-breaking jitter in `Medium`
    pub greedy_jitter: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            hard_depth: 2,
            superhard_depth: 3,
            coalition_depth: 4,
            minimax_breadth: 8,
            coalition_breadth: 10,
            weak_random_fraction: 0.2,
            weak_corner_penalty: 5.0,
            greedy_corner_bonus: 5.0,
            greedy_jitter: 1.0,
        }
    }
}

impl SearchConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let counts = [
            ("hard_depth", self.hard_depth as usize),
            ("superhard_depth", self.superhard_depth as usize),
            ("coalition_depth", self.coalition_depth as usize),
            ("minimax_breadth", self.minimax_breadth),
            ("coalition_breadth", self.coalition_breadth),
        ];
        if let Some((name, _)) = counts.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::ZeroSearchSetting(*name));
        }
        if !(0.0..=1.0).contains(&self.weak_random_fraction) {
            return Err(ConfigError::RandomFraction(self.weak_random_fraction));
        }
        let amounts = [
            ("weak_corner_penalty", self.weak_corner_penalty),
            ("greedy_corner_bonus", self.greedy_corner_bonus),
            ("greedy_jitter", self.greedy_jitter),
        ];
        if let Some(&(name, value)) = amounts.iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
            return Err(ConfigError::NegativeSearchSetting(name, value));
        }
        Ok(())
    }
}

/// Complete, validated game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub(crate) board_size: usize,
    /// Turn order; a color's index here is its seat
    pub(crate) players: [Color; 3],
    #[serde(default)]
    pub(crate) dominance: DominanceTable,
    #[serde(default = "default_directions")]
    pub(crate) directions: Vec<(i8, i8)>,
    #[serde(default)]
    pub(crate) setup: Setup,
    #[serde(default)]
    pub(crate) search: SearchConfig,
}

fn default_directions() -> Vec<(i8, i8)> {
    DIRECTIONS.to_vec()
}

impl Config {
    /// 7x7, turn order O → C → P, standard dominance, wide triangle with wall
    pub fn standard() -> Self {
        Self {
            board_size: BOARD_SIZE,
            players: Color::ALL,
            dominance: DominanceTable::standard(),
            directions: default_directions(),
            setup: Setup::default(),
            search: SearchConfig::default(),
        }
    }

    /// Custom configuration with default directions and search settings
    pub fn new(
        board_size: usize,
        players: [Color; 3],
        dominance: DominanceTable,
        setup: Setup,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            board_size,
            players,
            dominance,
            directions: default_directions(),
            setup,
            search: SearchConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_setup(mut self, setup: Setup) -> Result<Self, ConfigError> {
        self.setup = setup;
        self.validate()?;
        Ok(self)
    }

    pub fn with_players(mut self, players: [Color; 3]) -> Result<Self, ConfigError> {
        self.players = players;
        self.validate()?;
        Ok(self)
    }

    pub fn with_search(mut self, search: SearchConfig) -> Result<Self, ConfigError> {
        self.search = search;
        self.validate()?;
        Ok(self)
    }

    pub fn with_directions(mut self, directions: Vec<(i8, i8)>) -> Result<Self, ConfigError> {
        self.directions = directions;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::BoardSize(self.board_size));
        }

        let [a, b, c] = self.players;
        if a == b || b == c || a == c {
            return Err(ConfigError::Players(self.players));
        }

        if self.directions.is_empty() {
            return Err(ConfigError::NoDirections);
        }
        let mut seen_dirs = HashSet::new();
        for &(dr, dc) in &self.directions {
            if !(-1..=1).contains(&dr) || !(-1..=1).contains(&dc) || (dr, dc) == (0, 0) {
                return Err(ConfigError::InvalidDirection(dr, dc));
            }
            if !seen_dirs.insert((dr, dc)) {
                return Err(ConfigError::DuplicateDirection(dr, dc));
            }
        }

        let size = self.board_size;
        let mut occupied = HashSet::new();
        let cells = self
            .setup
            .walls
            .iter()
            .chain(self.setup.stones.iter().map(|p| &p.pos));
        for &pos in cells {
            if pos.row as usize >= size || pos.col as usize >= size {
                return Err(ConfigError::SetupOutOfRange(pos));
            }
            if !occupied.insert(pos) {
                return Err(ConfigError::SetupConflict(pos));
            }
        }
        for color in self.players {
            if !self.setup.stones.iter().any(|p| p.color == color) {
                return Err(ConfigError::MissingStartingStone(color));
            }
        }

        self.search.validate()
    }

    #[inline]
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Turn order
    #[inline]
    pub fn players(&self) -> &[Color; 3] {
        &self.players
    }

    #[inline]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[inline]
    pub fn dominance(&self) -> &DominanceTable {
        &self.dominance
    }

    #[inline]
    pub fn directions(&self) -> &[(i8, i8)] {
        &self.directions
    }

    #[inline]
    pub fn setup(&self) -> &Setup {
        &self.setup
    }

    #[inline]
    pub fn search(&self) -> &SearchConfig {
        &self.search
    }

    /// Color sitting at `seat`.
    ///
    /// # Panics
    /// If `seat` is not below the player count.
    #[inline]
    pub fn color_at_seat(&self, seat: usize) -> Color {
        assert!(seat < self.players.len(), "seat {} out of range", seat);
        self.players[seat]
    }

    /// Seat of `color` in the turn order
    #[inline]
    pub fn seat_of(&self, color: Color) -> usize {
        // Validation guarantees all three colors are seated
        self.players.iter().position(|&c| c == color).unwrap_or(0)
    }

    /// Color moving after `color`
    #[inline]
    pub fn next_color(&self, color: Color) -> Color {
        self.players[(self.seat_of(color) + 1) % self.players.len()]
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::standard()
    }
}
