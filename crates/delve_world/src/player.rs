//! The player's state: what gets written when the game is saved.

use delve_foundation::{Axis, Keyword, LoadingError, Location, Node, NodeMap, Result};
use delve_storable::{Storable, validate};
use log::debug;

use crate::character::CharacterStats;
use crate::item::{Item, Shield, Weapon};

const CHARACTER: &str = "character";
const GOLD: &str = "gold";
const WEAPON: &str = "weapon";
const SHIELD: &str = "shield";
const INVENTORY: &str = "inventory";

/// The player's character, purse, equipment, and inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Health, attack, defense, and turn timing.
    pub character: CharacterStats,
    /// Gold carried.
    pub gold: i64,
    /// The weapon currently in use.
    pub equipped_weapon: Weapon,
    /// The shield currently in use.
    pub equipped_shield: Shield,
    /// Carried items, at most [`PlayerState::MAX_ITEMS`].
    pub inventory: Vec<Item>,
}

impl PlayerState {
    /// The player can carry at most this many items.
    pub const MAX_ITEMS: usize = 8;

    /// Creates the player as they start the game.
    #[must_use]
    pub fn new() -> Self {
        let mut player = Self {
            character: CharacterStats::new("Player", 20, 0, 0, 7000.0, 0.0),
            gold: 0,
            equipped_weapon: Weapon::wooden(),
            equipped_shield: Shield::wooden(),
            inventory: Vec::new(),
        };
        player.equip_weapon(Weapon::wooden());
        player.equip_shield(Shield::wooden());
        player
    }

    /// Equips a weapon, taking its attack points.
    pub fn equip_weapon(&mut self, weapon: Weapon) {
        self.character.attack_points = weapon.attack_points;
        self.equipped_weapon = weapon;
    }

    /// Equips a shield, taking its defense points.
    pub fn equip_shield(&mut self, shield: Shield) {
        self.character.defense_points = shield.defense_points;
        self.equipped_shield = shield;
    }

    /// Uses a shield from the inventory.
    ///
    /// Equips it, or falls back to the wooden shield if it is already
    /// equipped. The wooden shield itself is never taken off.
    pub fn use_shield(&mut self, shield: Shield) {
        let fallback = Shield::wooden();
        if shield == self.equipped_shield && shield != fallback {
            self.equip_shield(fallback);
        } else {
            self.equip_shield(shield);
        }
    }

    /// Adds an item to the inventory.
    ///
    /// Returns the item back if the inventory is full.
    ///
    /// # Errors
    ///
    /// Returns `Err(item)` when [`PlayerState::MAX_ITEMS`] are already carried.
    pub fn pick_up(&mut self, item: Item) -> std::result::Result<(), Item> {
        if self.inventory.len() >= Self::MAX_ITEMS {
            return Err(item);
        }
        self.inventory.push(item);
        Ok(())
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl Storable for PlayerState {
    const NAME: &'static str = "PlayerState";

    fn load(node: &Node) -> Result<Self> {
        debug!("loading {}", Self::NAME);
        let map = validate::expect_map(Self::NAME, node)?;
        validate::require_all(Self::NAME, map, &[CHARACTER, GOLD, WEAPON, SHIELD, INVENTORY])?;

        validate::require_map(Self::NAME, map, CHARACTER)?;
        let gold = validate::require_int(Self::NAME, map, GOLD)?;
        validate::require_map(Self::NAME, map, WEAPON)?;
        validate::require_map(Self::NAME, map, SHIELD)?;
        let items = validate::require_vector(Self::NAME, map, INVENTORY)?;

        if gold < 0 {
            return Err(LoadingError::invalid_value(
                Self::NAME,
                Location::Field(Keyword::new(GOLD)),
                "must not be negative",
            )
            .into());
        }

        validate::expect_max_len(
            Self::NAME,
            items,
            Axis::Length,
            Location::Field(Keyword::new(INVENTORY)),
            Self::MAX_ITEMS,
        )?;

        let character: CharacterStats = validate::load_field(Self::NAME, map, CHARACTER)?;
        let equipped_weapon: Weapon = validate::load_field(Self::NAME, map, WEAPON)?;
        let equipped_shield: Shield = validate::load_field(Self::NAME, map, SHIELD)?;
        let inventory: Vec<Item> = validate::load_elements(Self::NAME, "item", items)?;

        Ok(Self {
            character,
            gold,
            equipped_weapon,
            equipped_shield,
            inventory,
        })
    }

    fn dump(&self) -> Node {
        NodeMap::new()
            .with(CHARACTER, self.character.dump())
            .with(GOLD, self.gold)
            .with(WEAPON, self.equipped_weapon.dump())
            .with(SHIELD, self.equipped_shield.dump())
            .with(INVENTORY, validate::dump_elements(&self.inventory))
            .into()
    }
}
