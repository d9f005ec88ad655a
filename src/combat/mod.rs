//! Combat drills: chaining `Option` and `Result` over a tiny game model.
//!
//! A player controls three kinds of [`Character`], each able to perform
//! exactly one [`Action`] dealing one kind of [`Damage`]:
//!
//! | Character | Action | Damage   |
//! |-----------|--------|----------|
//! | Warrior   | smash  | Physical |
//! | Wizard    | burn   | Magical  |
//! | Archer    | shoot  | Ranged   |
//!
//! Checking a target yields a `Result` whose error tells *why* nothing
//! happened ([`TargetError`]); the `_option` variants discard that detail.
//! Armies are tallied by damage kind, ranked, and fought against each other.
//!
//! # Examples
//!
//! ```rust
//! use fp_training::combat::{check_target_and_smash, Character, Damage, TargetError};
//!
//! assert_eq!(check_target_and_smash(Some(&Character::Warrior)), Ok(Damage::Physical));
//! assert_eq!(check_target_and_smash(None), Err(TargetError::NoTarget));
//! assert_eq!(
//!     check_target_and_smash(Some(&Character::Archer)).unwrap_err().to_string(),
//!     "Archer cannot perform smash"
//! );
//! ```

mod army;
mod character;
mod error;

pub use army::{Army, FightOutcome, Tally, fight, fight_if_both_present, rank, tally};
pub use character::{Action, Character, Damage};
pub use error::TargetError;

/// Checks the selected target and performs `action` with it.
///
/// # Errors
///
/// - [`TargetError::NoTarget`] if no target is selected.
/// - [`TargetError::InvalidTarget`] if the target cannot perform `action`.
///
/// # Examples
///
/// ```rust
/// use fp_training::combat::{check_and_perform, Action, Character, Damage};
///
/// assert_eq!(check_and_perform(Some(&Character::Wizard), Action::Burn), Ok(Damage::Magical));
/// assert!(check_and_perform(Some(&Character::Wizard), Action::Shoot).is_err());
/// ```
pub fn check_and_perform(target: Option<&Character>, action: Action) -> Result<Damage, TargetError> {
    target
        .ok_or(TargetError::NoTarget)
        .and_then(|character| perform(character, action))
}

fn perform(character: &Character, action: Action) -> Result<Damage, TargetError> {
    character
        .perform(action)
        .ok_or(TargetError::InvalidTarget {
            character: *character,
            action,
        })
}

/// Checks the selected target and smashes with it.
///
/// # Errors
///
/// See [`check_and_perform`].
pub fn check_target_and_smash(target: Option<&Character>) -> Result<Damage, TargetError> {
    check_and_perform(target, Action::Smash)
}

/// Checks the selected target and burns with it.
///
/// # Errors
///
/// See [`check_and_perform`].
pub fn check_target_and_burn(target: Option<&Character>) -> Result<Damage, TargetError> {
    check_and_perform(target, Action::Burn)
}

/// Checks the selected target and shoots with it.
///
/// # Errors
///
/// See [`check_and_perform`].
pub fn check_target_and_shoot(target: Option<&Character>) -> Result<Damage, TargetError> {
    check_and_perform(target, Action::Shoot)
}

/// Performs `action` with `character` if it can, discarding why it cannot.
///
/// # Examples
///
/// ```rust
/// use fp_training::combat::{action_as_optional, Action, Character, Damage};
///
/// assert_eq!(action_as_optional(&Character::Archer, Action::Shoot), Some(Damage::Ranged));
/// assert_eq!(action_as_optional(&Character::Archer, Action::Smash), None);
/// ```
pub fn action_as_optional(character: &Character, action: Action) -> Option<Damage> {
    perform(character, action).ok()
}

/// Smashes with `character` if it is a warrior.
pub fn smash_option(character: &Character) -> Option<Damage> {
    action_as_optional(character, Action::Smash)
}

/// Burns with `character` if it is a wizard.
pub fn burn_option(character: &Character) -> Option<Damage> {
    action_as_optional(character, Action::Burn)
}

/// Shoots with `character` if it is an archer.
pub fn shoot_option(character: &Character) -> Option<Damage> {
    action_as_optional(character, Action::Shoot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Action::Smash)]
    #[case(Action::Burn)]
    #[case(Action::Shoot)]
    fn test_no_target_for_every_action(#[case] action: Action) {
        let error = check_and_perform(None, action).unwrap_err();
        assert_eq!(error, TargetError::NoTarget);
        assert_eq!(error.to_string(), "No target currently selected");
    }

    #[rstest]
    #[case(Character::Wizard, Action::Smash, "Wizard cannot perform smash")]
    #[case(Character::Archer, Action::Smash, "Archer cannot perform smash")]
    #[case(Character::Warrior, Action::Burn, "Warrior cannot perform burn")]
    #[case(Character::Archer, Action::Burn, "Archer cannot perform burn")]
    #[case(Character::Warrior, Action::Shoot, "Warrior cannot perform shoot")]
    #[case(Character::Wizard, Action::Shoot, "Wizard cannot perform shoot")]
    fn test_invalid_target_message(
        #[case] character: Character,
        #[case] action: Action,
        #[case] expected: &str,
    ) {
        let error = check_and_perform(Some(&character), action).unwrap_err();
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn test_specialised_checks() {
        assert_eq!(check_target_and_smash(Some(&Character::Warrior)), Ok(Damage::Physical));
        assert_eq!(check_target_and_burn(Some(&Character::Wizard)), Ok(Damage::Magical));
        assert_eq!(check_target_and_shoot(Some(&Character::Archer)), Ok(Damage::Ranged));
    }

    #[rstest]
    fn test_option_variants_discard_the_error() {
        assert_eq!(smash_option(&Character::Wizard), None);
        assert_eq!(burn_option(&Character::Wizard), Some(Damage::Magical));
        assert_eq!(shoot_option(&Character::Warrior), None);
    }
}
