#![cfg(all(feature = "serde", feature = "combat", feature = "ordering", feature = "effect"))]
//! Serialization of the plain data types.

use fp_training::combat::{Action, Character, Damage, FightOutcome, Tally};
use fp_training::effect::Country;
use fp_training::ordering::Person;
use rstest::rstest;

#[rstest]
fn test_character_serializes_as_its_name() {
    assert_eq!(serde_json::to_string(&Character::Wizard).unwrap(), "\"Wizard\"");
    assert_eq!(
        serde_json::from_str::<Action>("\"Shoot\"").unwrap(),
        Action::Shoot
    );
    assert_eq!(serde_json::to_string(&Damage::Ranged).unwrap(), "\"Ranged\"");
}

#[rstest]
fn test_tally_serializes_as_object() {
    let tally = Tally {
        physical: 2,
        magical: 4,
        ranged: 3,
    };
    let value = serde_json::to_value(tally).unwrap();
    assert_eq!(value, serde_json::json!({ "physical": 2, "magical": 4, "ranged": 3 }));
    assert_eq!(serde_json::from_value::<Tally>(value).unwrap(), tally);
}

#[rstest]
fn test_person_with_unknown_age() {
    let person: Person = serde_json::from_str(r#"{ "name": "Bob", "age": null }"#).unwrap();
    assert_eq!(person, Person::new("Bob", None));
}

#[rstest]
fn test_outcome_and_country() {
    assert_eq!(
        serde_json::to_string(&FightOutcome::FirstWins).unwrap(),
        "\"FirstWins\""
    );
    assert_eq!(serde_json::from_str::<Country>("\"Usa\"").unwrap(), Country::Usa);
}
