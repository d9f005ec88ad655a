use std::fmt;

/// The kinds of damage a character can deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Damage {
    /// Dealt by smashing.
    Physical,
    /// Dealt by burning.
    Magical,
    /// Dealt by shooting.
    Ranged,
}

impl Damage {
    /// Every damage kind, in rank weight order.
    pub const ALL: [Self; 3] = [Self::Physical, Self::Magical, Self::Ranged];

    /// How much one unit dealing this damage weighs in an army's rank.
    pub const fn weight(self) -> u64 {
        match self {
            Self::Physical => 1,
            Self::Magical => 2,
            Self::Ranged => 3,
        }
    }
}

impl fmt::Display for Damage {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Physical => "Physical damage",
            Self::Magical => "Magical damage",
            Self::Ranged => "Ranged damage",
        };
        formatter.write_str(label)
    }
}

/// The actions a character may attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Deals physical damage.
    Smash,
    /// Deals magical damage.
    Burn,
    /// Deals ranged damage.
    Shoot,
}

impl Action {
    /// The damage dealt when the action succeeds.
    pub const fn damage(self) -> Damage {
        match self {
            Self::Smash => Damage::Physical,
            Self::Burn => Damage::Magical,
            Self::Shoot => Damage::Ranged,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Smash => "smash",
            Self::Burn => "burn",
            Self::Shoot => "shoot",
        };
        formatter.write_str(verb)
    }
}

/// A unit the player can control.
///
/// # Examples
///
/// ```rust
/// use fp_training::combat::{Action, Character, Damage};
///
/// assert!(Character::Warrior.can(Action::Smash));
/// assert_eq!(Character::Wizard.perform(Action::Burn), Some(Damage::Magical));
/// assert_eq!(Character::Wizard.perform(Action::Shoot), None);
/// assert_eq!(Character::Archer.to_string(), "Archer");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Character {
    /// Can only smash.
    Warrior,
    /// Can only burn.
    Wizard,
    /// Can only shoot.
    Archer,
}

impl Character {
    /// The single action this kind of character can perform.
    pub const fn capability(self) -> Action {
        match self {
            Self::Warrior => Action::Smash,
            Self::Wizard => Action::Burn,
            Self::Archer => Action::Shoot,
        }
    }

    /// Returns `true` if this character can perform `action`.
    pub fn can(self, action: Action) -> bool {
        self.capability() == action
    }

    /// Performs `action`, or returns `None` if this character cannot.
    pub fn perform(self, action: Action) -> Option<Damage> {
        self.can(action).then(|| action.damage())
    }
}

impl fmt::Display for Character {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Warrior => "Warrior",
            Self::Wizard => "Wizard",
            Self::Archer => "Archer",
        };
        formatter.write_str(name)
    }
}
