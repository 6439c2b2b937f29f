//! Persisted state of anything that can engage in battle.

use delve_foundation::{Error, Keyword, LoadingError, Location, Node, NodeMap, Result};
use delve_storable::{Storable, validate};

const FIELD_NAME: &str = "name";
const TRUE_HIT_POINTS: &str = "trueHitPoints";
const ATTACK_POINTS: &str = "attackPoints";
const DEFENSE_POINTS: &str = "defensePoints";
const WAIT_PERIOD: &str = "waitPeriod";
const TIME_LEFT: &str = "timeLeft";

/// Name, health, and timing of a character.
///
/// Hit points are tracked fractionally; [`CharacterStats::hit_points`] is the
/// whole number shown to the player.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterStats {
    /// Display name.
    pub name: String,
    /// Exact remaining health.
    pub true_hit_points: f64,
    /// Attack strength.
    pub attack_points: i64,
    /// Defense strength.
    pub defense_points: i64,
    /// Time between this character's turns.
    pub wait_period: f64,
    /// Time until this character's next turn.
    pub time_left: f64,
}

impl CharacterStats {
    /// Creates a character at full health.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        hit_points: i32,
        attack_points: i64,
        defense_points: i64,
        wait_period: f64,
        time_left: f64,
    ) -> Self {
        Self {
            name: name.into(),
            true_hit_points: f64::from(hit_points),
            attack_points,
            defense_points,
            wait_period,
            time_left,
        }
    }

    /// Remaining health, rounded up.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn hit_points(&self) -> i64 {
        self.true_hit_points.ceil() as i64
    }

    /// Returns true once hit points reach zero.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.hit_points() <= 0
    }
}

impl Storable for CharacterStats {
    const NAME: &'static str = "CharacterStats";

    fn load(node: &Node) -> Result<Self> {
        let map = validate::expect_map(Self::NAME, node)?;
        validate::require_all(
            Self::NAME,
            map,
            &[
                FIELD_NAME,
                TRUE_HIT_POINTS,
                ATTACK_POINTS,
                DEFENSE_POINTS,
                WAIT_PERIOD,
                TIME_LEFT,
            ],
        )?;
        let name = validate::require_text(Self::NAME, map, FIELD_NAME)?;
        let true_hit_points = validate::require_float(Self::NAME, map, TRUE_HIT_POINTS)?;
        let attack_points = validate::require_int(Self::NAME, map, ATTACK_POINTS)?;
        let defense_points = validate::require_int(Self::NAME, map, DEFENSE_POINTS)?;
        let wait_period = validate::require_float(Self::NAME, map, WAIT_PERIOD)?;
        let time_left = validate::require_float(Self::NAME, map, TIME_LEFT)?;

        expect_finite(TRUE_HIT_POINTS, true_hit_points)?;
        expect_finite(TIME_LEFT, time_left)?;
        if !wait_period.is_finite() || wait_period <= 0.0 {
            return Err(invalid(WAIT_PERIOD, "must be positive"));
        }

        Ok(Self {
            name: name.to_owned(),
            true_hit_points,
            attack_points,
            defense_points,
            wait_period,
            time_left,
        })
    }

    fn dump(&self) -> Node {
        NodeMap::new()
            .with(FIELD_NAME, self.name.as_str())
            .with(TRUE_HIT_POINTS, self.true_hit_points)
            .with(ATTACK_POINTS, self.attack_points)
            .with(DEFENSE_POINTS, self.defense_points)
            .with(WAIT_PERIOD, self.wait_period)
            .with(TIME_LEFT, self.time_left)
            .into()
    }
}

fn invalid(field: &str, reason: &str) -> Error {
    LoadingError::invalid_value(
        CharacterStats::NAME,
        Location::Field(Keyword::new(field)),
        reason,
    )
    .into()
}

// Hit points may go negative on a killing blow; they may not be NaN or infinite.
fn expect_finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, "must be finite"))
    }
}
