//! Inventory items.

use delve_foundation::{Keyword, LoadingError, Location, Node, NodeKind, NodeMap, Result};
use delve_storable::{Storable, validate};

const ATTACK_POINTS: &str = "attackPoints";

/// A shield the player can equip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shield {
    /// Display name.
    pub name: String,
    /// Defense granted while equipped.
    pub defense_points: i64,
}

impl Shield {
    /// The shield every player starts with.
    #[must_use]
    pub fn wooden() -> Self {
        Self {
            name: "WoodenShield".to_owned(),
            defense_points: 4,
        }
    }

    /// Returns the inventory description.
    #[must_use]
    pub fn description(&self) -> String {
        format!("{}\n{} DEF", self.name, self.defense_points)
    }
}

impl Default for Shield {
    fn default() -> Self {
        Self::wooden()
    }
}

impl Storable for Shield {
    const NAME: &'static str = "Shield";

    fn load(node: &Node) -> Result<Self> {
        let map = validate::expect_map(Self::NAME, node)?;
        validate::require_all(Self::NAME, map, &["name", "defensePoints"])?;
        let name = validate::require_text(Self::NAME, map, "name")?;
        let defense_points = validate::require_int(Self::NAME, map, "defensePoints")?;
        Ok(Self {
            name: name.to_owned(),
            defense_points,
        })
    }

    fn dump(&self) -> Node {
        NodeMap::new()
            .with("name", self.name.as_str())
            .with("defensePoints", self.defense_points)
            .into()
    }
}

/// A weapon the player can equip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weapon {
    /// Display name.
    pub name: String,
    /// Attack granted while equipped.
    pub attack_points: i64,
}

impl Weapon {
    /// The weapon every player starts with.
    #[must_use]
    pub fn wooden() -> Self {
        Self {
            name: "WoodenSword".to_owned(),
            attack_points: 2,
        }
    }

    /// Returns the inventory description.
    #[must_use]
    pub fn description(&self) -> String {
        format!("{}\n{} ATK", self.name, self.attack_points)
    }
}

impl Default for Weapon {
    fn default() -> Self {
        Self::wooden()
    }
}

impl Storable for Weapon {
    const NAME: &'static str = "Weapon";

    fn load(node: &Node) -> Result<Self> {
        let map = validate::expect_map(Self::NAME, node)?;
        validate::require_all(Self::NAME, map, &["name", ATTACK_POINTS])?;
        let name = validate::require_text(Self::NAME, map, "name")?;
        let attack_points = validate::require_int(Self::NAME, map, ATTACK_POINTS)?;
        Ok(Self {
            name: name.to_owned(),
            attack_points,
        })
    }

    fn dump(&self) -> Node {
        NodeMap::new()
            .with("name", self.name.as_str())
            .with(ATTACK_POINTS, self.attack_points)
            .into()
    }
}

/// Something that can sit in the player's inventory.
///
/// Plain consumables are stored as keywords (`:cookie`). Equipment is stored
/// as its own map; a map with `:attackPoints` is a weapon, any other map a
/// shield.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// Restores a little health.
    Cookie,
    /// Shortens the wait until the next turn.
    Coffee,
    /// An unequipped shield.
    Shield(Shield),
    /// An unequipped weapon.
    Weapon(Weapon),
}

impl Item {
    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Cookie => "Cookie",
            Self::Coffee => "Coffee",
            Self::Shield(shield) => &shield.name,
            Self::Weapon(weapon) => &weapon.name,
        }
    }
}

impl Storable for Item {
    const NAME: &'static str = "Item";

    fn load(node: &Node) -> Result<Self> {
        match node {
            Node::Keyword(kw) => match kw.name() {
                "cookie" => Ok(Self::Cookie),
                "coffee" => Ok(Self::Coffee),
                _ => Err(LoadingError::invalid_value(
                    Self::NAME,
                    Location::Root,
                    &format!("unknown item {kw}"),
                )
                .into()),
            },
            Node::Map(map) if map.contains_key(ATTACK_POINTS) => {
                validate::load_element(node, || format!("weapon of {}", Self::NAME))
                    .map(Self::Weapon)
            }
            Node::Map(_) => validate::load_element(node, || format!("shield of {}", Self::NAME))
                .map(Self::Shield),
            other => Err(LoadingError::wrong_kind(
                Self::NAME,
                Location::Root,
                NodeKind::Keyword,
                other.kind(),
            )
            .with_complaint(format!(
                "must be a keyword or a map node, found {}",
                other.kind().with_article()
            ))
            .into()),
        }
    }

    fn dump(&self) -> Node {
        match self {
            Self::Cookie => Keyword::new("cookie").into(),
            Self::Coffee => Keyword::new("coffee").into(),
            Self::Shield(shield) => shield.dump(),
            Self::Weapon(weapon) => weapon.dump(),
        }
    }
}
