//! Optional values nested in asynchronous ones, and back.
//!
//! Looking a currency up takes an `Option<CountryCode>` to an
//! `Option<impl Future>`; what callers want is a future of an `Option`.
//! [`sequence_option_future`] swaps the two layers, and [`sequence_options`]
//! does the same for a list of options.

use std::fmt;
use std::future::Future;

use futures::future;

/// A supported country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CountryCode {
    /// France.
    Fr,
    /// Spain.
    Sp,
    /// The United States.
    Us,
}

impl fmt::Display for CountryCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::Fr => "FR",
            Self::Sp => "SP",
            Self::Us => "US",
        };
        formatter.write_str(code)
    }
}

/// The currency used in a supported country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Currency {
    /// Euro.
    Eur,
    /// US dollar.
    Dollar,
}

/// The code of a country from its English name, if supported.
///
/// # Examples
///
/// ```rust
/// use fp_training::effect::{country_code, CountryCode};
///
/// assert_eq!(country_code("Spain"), Some(CountryCode::Sp));
/// assert_eq!(country_code("Germany"), None);
/// ```
pub fn country_code(name: &str) -> Option<CountryCode> {
    match name {
        "France" => Some(CountryCode::Fr),
        "Spain" => Some(CountryCode::Sp),
        "USA" => Some(CountryCode::Us),
        _ => None,
    }
}

/// Looks up the currency of a country.
pub fn country_currency(code: CountryCode) -> impl Future<Output = Currency> {
    let currency = match code {
        CountryCode::Us => Currency::Dollar,
        CountryCode::Fr | CountryCode::Sp => Currency::Eur,
    };
    future::ready(currency)
}

/// Asks the user for the name of their country.
pub fn country_name_from_user(answer: &str) -> impl Future<Output = String> + use<> {
    future::ready(answer.to_string())
}

/// Turns an optional future into a future of an optional value.
///
/// `None` resolves immediately without awaiting anything.
pub async fn sequence_option_future<F: Future>(pending: Option<F>) -> Option<F::Output> {
    match pending {
        Some(pending) => Some(pending.await),
        None => None,
    }
}

/// Turns a list of options into an optional list.
///
/// Gives `None` as soon as one element is `None`.
///
/// # Examples
///
/// ```rust
/// use fp_training::effect::sequence_options;
///
/// assert_eq!(sequence_options([Some(1), Some(2)]), Some(vec![1, 2]));
/// assert_eq!(sequence_options([Some(1), None]), None);
/// ```
pub fn sequence_options<T, I>(options: I) -> Option<Vec<T>>
where
    I: IntoIterator<Item = Option<T>>,
{
    options.into_iter().collect()
}

/// The currency of an optional country code.
pub async fn currency_of_optional_country_code(code: Option<CountryCode>) -> Option<Currency> {
    sequence_option_future(code.map(country_currency)).await
}

/// Asks the user for their country and gives back its currency, if supported.
///
/// # Examples
///
/// ```rust
/// use fp_training::effect::{give_currency_of_country_to_user, Currency};
///
/// # futures::executor::block_on(async {
/// assert_eq!(give_currency_of_country_to_user("USA").await, Some(Currency::Dollar));
/// assert_eq!(give_currency_of_country_to_user("Germany").await, None);
/// # });
/// ```
pub async fn give_currency_of_country_to_user(answer: &str) -> Option<Currency> {
    let name = country_name_from_user(answer).await;
    currency_of_optional_country_code(country_code(&name)).await
}

/// The code of each name in `names`, `None` where the country is unsupported.
///
/// # Examples
///
/// ```rust
/// use fp_training::effect::{country_codes, CountryCode};
///
/// assert_eq!(
///     country_codes(["France", "Germany"]),
///     vec![Some(CountryCode::Fr), None]
/// );
/// ```
pub fn country_codes<'a, I>(names: I) -> Vec<Option<CountryCode>>
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().map(country_code).collect()
}

/// The codes of every country in `names`, or `None` if one is unsupported.
///
/// [`country_codes`] followed by [`sequence_options`].
///
/// # Examples
///
/// ```rust
/// use fp_training::effect::{valid_country_codes, CountryCode};
///
/// assert_eq!(
///     valid_country_codes(["France", "Spain"]),
///     Some(vec![CountryCode::Fr, CountryCode::Sp])
/// );
/// assert_eq!(valid_country_codes(["France", "Germany"]), None);
/// ```
pub fn valid_country_codes<'a, I>(names: I) -> Option<Vec<CountryCode>>
where
    I: IntoIterator<Item = &'a str>,
{
    sequence_options(country_codes(names))
}
