use std::fmt;

use super::reader::Reader;

/// Where the user lives; drives how they are greeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Country {
    /// French greetings, space before `!`.
    France,
    /// Spanish greetings, wrapped in `¡` and `!`.
    Spain,
    /// English greetings, no space before `!`.
    Usa,
}

impl fmt::Display for Country {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::France => "France",
            Self::Spain => "Spain",
            Self::Usa => "USA",
        };
        formatter.write_str(name)
    }
}

/// The word for "hello" in `country`.
pub const fn say_hello(country: Country) -> &'static str {
    match country {
        Country::France => "Bonjour",
        Country::Spain => "Buenos dìas",
        Country::Usa => "Hello",
    }
}

/// Punctuates `sentence` as an exclamation, the way the user's country does.
///
/// # Examples
///
/// ```rust
/// use fp_training::effect::{exclamation, Country};
///
/// assert_eq!(exclamation("Youpi").run(Country::France), "Youpi !");
/// assert_eq!(exclamation("Olé").run(Country::Spain), "¡Olé!");
/// assert_eq!(exclamation("Yeah").run(Country::Usa), "Yeah!");
/// ```
pub fn exclamation(sentence: impl Into<String>) -> Reader<Country, String> {
    let sentence = sentence.into();
    Reader::asks(move |country| match country {
        Country::France => format!("{sentence} !"),
        Country::Spain => format!("¡{sentence}!"),
        Country::Usa => format!("{sentence}!"),
    })
}

/// Greets `name` in the user's language.
///
/// # Examples
///
/// ```rust
/// use fp_training::effect::{greet, Country};
///
/// assert_eq!(greet("Alice").run(Country::France), "Bonjour, Alice");
/// ```
pub fn greet(name: impl Into<String>) -> Reader<Country, String> {
    let name = name.into();
    Reader::asks(move |country| format!("{}, {name}", say_hello(country)))
}

/// [`greet`] followed by [`exclamation`], both reading the same country.
///
/// # Examples
///
/// ```rust
/// use fp_training::effect::{excitedly_greet, Country};
///
/// assert_eq!(excitedly_greet("Bernardo").run(Country::Spain), "¡Buenos dìas, Bernardo!");
/// ```
pub fn excitedly_greet(name: impl Into<String>) -> Reader<Country, String> {
    greet(name).flat_map(exclamation)
}
