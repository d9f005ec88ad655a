use std::cmp::Ordering;

use super::action_as_optional;
use super::character::{Action, Character, Damage};

/// An ordered collection of characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Army {
    units: Vec<Character>,
}

impl Army {
    /// Creates an army from its units.
    pub const fn new(units: Vec<Character>) -> Self {
        Self { units }
    }

    /// The units, in the order they were enlisted.
    pub fn units(&self) -> &[Character] {
        &self.units
    }

    /// Iterates over the units.
    pub fn iter(&self) -> std::slice::Iter<'_, Character> {
        self.units.iter()
    }

    /// The number of units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` if the army has no unit.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl From<Vec<Character>> for Army {
    fn from(units: Vec<Character>) -> Self {
        Self::new(units)
    }
}

impl FromIterator<Character> for Army {
    fn from_iter<I: IntoIterator<Item = Character>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Army {
    type Item = &'a Character;
    type IntoIter = std::slice::Iter<'a, Character>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// How many units of an army deal each kind of damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tally {
    /// Units dealing physical damage.
    pub physical: u64,
    /// Units dealing magical damage.
    pub magical: u64,
    /// Units dealing ranged damage.
    pub ranged: u64,
}

impl Tally {
    /// The count for one kind of damage.
    pub const fn get(&self, damage: Damage) -> u64 {
        match damage {
            Damage::Physical => self.physical,
            Damage::Magical => self.magical,
            Damage::Ranged => self.ranged,
        }
    }

    /// The weighted sum of the counts.
    pub fn weighted(&self) -> u64 {
        Damage::ALL
            .into_iter()
            .map(|damage| self.get(damage) * damage.weight())
            .sum()
    }
}

/// The result of a [`fight`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FightOutcome {
    /// Both armies have the same rank.
    Draw,
    /// The first army has the higher rank.
    FirstWins,
    /// The second army has the higher rank.
    SecondWins,
}

impl From<Ordering> for FightOutcome {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::SecondWins,
            Ordering::Equal => Self::Draw,
            Ordering::Greater => Self::FirstWins,
        }
    }
}

/// Counts, for each action, the units able to perform it.
///
/// # Examples
///
/// ```rust
/// use fp_training::combat::{tally, Army, Character::*, Tally};
///
/// let army = Army::from(vec![Warrior, Wizard, Archer, Wizard]);
/// assert_eq!(tally(&army), Tally { physical: 1, magical: 2, ranged: 1 });
/// ```
pub fn tally(army: &Army) -> Tally {
    let count = |action: Action| {
        army.iter()
            .filter_map(|unit| action_as_optional(unit, action))
            .fold(0_u64, |total, _| total + 1)
    };

    Tally {
        physical: count(Action::Smash),
        magical: count(Action::Burn),
        ranged: count(Action::Shoot),
    }
}

/// `1 * physical + 2 * magical + 3 * ranged`.
///
/// # Examples
///
/// ```rust
/// use fp_training::combat::{rank, Army, Character::*};
///
/// let army = Army::from(vec![
///     Warrior, Wizard, Archer, Wizard, Wizard, Archer, Warrior, Wizard, Archer,
/// ]);
/// assert_eq!(rank(&army), 19);
/// ```
pub fn rank(army: &Army) -> u64 {
    tally(army).weighted()
}

/// Compares the ranks of two armies.
///
/// # Examples
///
/// ```rust
/// use fp_training::combat::{fight, Army, Character::*, FightOutcome};
///
/// let first = Army::from(vec![Archer]);
/// let second = Army::from(vec![Warrior, Wizard]);
/// assert_eq!(fight(&first, &second), FightOutcome::Draw);
/// ```
pub fn fight(first: &Army, second: &Army) -> FightOutcome {
    let first_rank = rank(first);
    let second_rank = rank(second);
    let outcome = FightOutcome::from(first_rank.cmp(&second_rank));
    tracing::debug!(first_rank, second_rank, ?outcome, "fight resolved");
    outcome
}

/// Fights only when both armies are present.
///
/// # Examples
///
/// ```rust
/// use fp_training::combat::{fight_if_both_present, Army, Character::*, FightOutcome};
///
/// let army = Army::from(vec![Wizard]);
/// assert_eq!(fight_if_both_present(Some(&army), Some(&army)), Some(FightOutcome::Draw));
/// assert_eq!(fight_if_both_present(Some(&army), None), None);
/// ```
pub fn fight_if_both_present(first: Option<&Army>, second: Option<&Army>) -> Option<FightOutcome> {
    first.zip(second).map(|(first, second)| fight(first, second))
}
