use std::time::Duration;

use tracing::warn;

// Shared game constants.
pub const BOARD_HEIGHT: usize = 10;
pub const MIN_BOARD_HEIGHT: usize = 4;
pub const MAX_BOARD_HEIGHT: usize = 256;
pub const LENGTH_FACTOR: usize = 3; // board length = height * LENGTH_FACTOR
pub const PLAYER_START: (usize, usize) = (1, 3); // (row, col)
pub const SPAWN_PERIOD: u64 = 10;
pub const GAP_HEIGHT: usize = 3;
pub const GAP_MIN_ROW: usize = 2;
pub const TICK_MILLIS: u64 = 200;
pub const CELL_W: usize = 2; // every cell renders two columns wide
pub const DEFAULT_HEADLESS_TICKS: u64 = 120;
pub const MAX_HEADLESS_TICKS: u64 = 10_000;

/// Runtime settings, resolved once at startup from `FLAPPY_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub height: usize,
    pub tick_interval: Duration,
    pub seed: Option<u64>,
    pub headless: bool,
    pub headless_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            height: BOARD_HEIGHT,
            tick_interval: Duration::from_millis(TICK_MILLIS),
            seed: None,
            headless: false,
            headless_ticks: DEFAULT_HEADLESS_TICKS,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let height = parse_var(&lookup, "FLAPPY_HEIGHT").unwrap_or(defaults.height);
        let tick_interval = parse_var::<u64, _>(&lookup, "FLAPPY_TICK_MS")
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick_interval);
        let seed = parse_var(&lookup, "FLAPPY_SEED");
        let headless = lookup("FLAPPY_HEADLESS")
            .map(|raw| !matches!(raw.trim(), "" | "0" | "false"))
            .unwrap_or(false);
        let headless_ticks = parse_var::<u64, _>(&lookup, "FLAPPY_HEADLESS_TICKS")
            .filter(|value| *value > 0)
            .map(|value| value.min(MAX_HEADLESS_TICKS))
            .unwrap_or(defaults.headless_ticks);

        Self {
            height,
            tick_interval,
            seed,
            headless,
            headless_ticks,
        }
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparsable setting");
            None
        }
    }
}
