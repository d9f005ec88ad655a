//! Effects: injected environments and asynchronous computations.
//!
//! - [`Reader`] threads a read-only environment through a computation. The
//!   localized greetings ([`greet`], [`exclamation`], [`excitedly_greet`])
//!   read the user's [`Country`] this way.
//! - With the `async` feature: division behind a simulated remote call,
//!   parallel and sequential traversals over a shared store, and helpers
//!   swapping `Option` and `Future` layers.
//!
//! # Examples
//!
//! ```rust
//! use fp_training::effect::{excitedly_greet, Country};
//!
//! let greeting = excitedly_greet("Alice");
//! assert_eq!(greeting.run(Country::France), "Bonjour, Alice !");
//! assert_eq!(greeting.run(Country::Usa), "Hello, Alice!");
//! ```

mod locale;
mod reader;

#[cfg(feature = "async")]
mod country;
#[cfg(feature = "async")]
mod division;
#[cfg(feature = "async")]
mod traverse;

pub use locale::{Country, exclamation, excitedly_greet, greet, say_hello};
pub use reader::Reader;

#[cfg(feature = "async")]
pub use country::{
    CountryCode, Currency, country_code, country_codes, country_currency, country_name_from_user,
    currency_of_optional_country_code, give_currency_of_country_to_user, sequence_option_future,
    sequence_options, valid_country_codes,
};
#[cfg(feature = "async")]
pub use division::{RemoteCallError, async_safe_divide, remote_divide};
#[cfg(feature = "async")]
pub use traverse::{
    SharedCounter, Traversal, traverse, traverse_parallel, traverse_sequential,
    try_traverse_sequential,
};
