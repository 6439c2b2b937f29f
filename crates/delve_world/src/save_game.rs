//! A complete save: the player and every chamber visited so far.

use delve_foundation::{Keyword, LoadingError, Location, Node, NodeMap, Result};
use delve_storable::{Storable, validate};
use log::debug;

use crate::chamber::Chamber;
use crate::player::PlayerState;

const PLAYER: &str = "player";
const CHAMBERS: &str = "chambers";
const CURRENT: &str = "current";

/// Everything written to a save file.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveGame {
    /// The player.
    pub player: PlayerState,
    /// Chambers generated so far. Never empty.
    chambers: Vec<Chamber>,
    /// Index of the chamber the player is in.
    current: usize,
}

impl SaveGame {
    /// Starts a save with the player in `first`.
    #[must_use]
    pub fn new(player: PlayerState, first: Chamber) -> Self {
        Self {
            player,
            chambers: vec![first],
            current: 0,
        }
    }

    /// Returns all chambers.
    #[must_use]
    pub fn chambers(&self) -> &[Chamber] {
        &self.chambers
    }

    /// Returns the index of the current chamber.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the chamber the player is in.
    #[must_use]
    pub fn current(&self) -> &Chamber {
        &self.chambers[self.current]
    }

    /// Adds a chamber and returns its index.
    pub fn add_chamber(&mut self, chamber: Chamber) -> usize {
        self.chambers.push(chamber);
        self.chambers.len() - 1
    }

    /// Moves the player to the chamber at `index`.
    ///
    /// Returns false, leaving the player where they are, if there is no such
    /// chamber.
    pub fn enter(&mut self, index: usize) -> bool {
        if index < self.chambers.len() {
            self.current = index;
            true
        } else {
            false
        }
    }
}

impl Storable for SaveGame {
    const NAME: &'static str = "SaveGame";

    fn load(node: &Node) -> Result<Self> {
        debug!("loading {}", Self::NAME);
        let map = validate::expect_map(Self::NAME, node)?;
        validate::require_all(Self::NAME, map, &[PLAYER, CHAMBERS, CURRENT])?;

        validate::require_map(Self::NAME, map, PLAYER)?;
        let chamber_nodes = validate::require_vector(Self::NAME, map, CHAMBERS)?;
        let current = validate::require_int(Self::NAME, map, CURRENT)?;

        let current = usize::try_from(current)
            .ok()
            .filter(|index| *index < chamber_nodes.len())
            .ok_or_else(|| {
                LoadingError::invalid_value(
                    Self::NAME,
                    Location::Field(Keyword::new(CURRENT)),
                    &format!("no chamber {current} among {}", chamber_nodes.len()),
                )
            })?;

        let player: PlayerState = validate::load_field(Self::NAME, map, PLAYER)?;
        let chambers: Vec<Chamber> =
            validate::load_elements(Self::NAME, "chamber", chamber_nodes)?;

        debug!("loaded {} with {} chambers", Self::NAME, chambers.len());
        Ok(Self {
            player,
            chambers,
            current,
        })
    }

    fn dump(&self) -> Node {
        NodeMap::new()
            .with(PLAYER, self.player.dump())
            .with(CHAMBERS, validate::dump_elements(&self.chambers))
            .with(CURRENT, i64::try_from(self.current).unwrap_or(i64::MAX))
            .into()
    }
}
