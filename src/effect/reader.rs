//! Computations that read a shared, immutable environment.
//!
//! A `Reader<R, A>` wraps a function `R -> A`. Composing readers threads the
//! environment through every step without passing it by hand, which makes it
//! a lightweight way to inject a dependency such as the user's [`Country`].
//!
//! # Laws
//!
//! - Identity: `reader.fmap(|x| x)` behaves as `reader`
//! - Left identity: `Reader::pure(a).flat_map(f)` behaves as `f(a)`
//! - Ask retrieval: `Reader::ask().run(r) == r`
//! - Local identity: `Reader::local(|r| r, m)` behaves as `m`
//!
//! # Examples
//!
//! ```rust
//! use fp_training::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Settings {
//!     greeting: &'static str,
//!     punctuation: char,
//! }
//!
//! let greeting: Reader<Settings, &str> = Reader::asks(|settings: Settings| settings.greeting);
//! let punctuation: Reader<Settings, char> = Reader::asks(|settings: Settings| settings.punctuation);
//! let sentence = greeting.map2(punctuation, |greeting, mark| format!("{greeting}{mark}"));
//!
//! let settings = Settings { greeting: "Hello", punctuation: '!' };
//! assert_eq!(sentence.run(settings), "Hello!");
//! ```
//!
//! [`Country`]: crate::effect::Country

use std::fmt;
use std::rc::Rc;

/// A computation producing an `A` from an environment `R`.
///
/// # Examples
///
/// ```rust
/// use fp_training::effect::{Country, Reader};
///
/// let uses_euros: Reader<Country, bool> =
///     Reader::asks(|country| matches!(country, Country::France | Country::Spain));
///
/// assert!(uses_euros.run(Country::Spain));
/// assert!(!uses_euros.run(Country::Usa));
/// ```
pub struct Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    read: Rc<dyn Fn(R) -> A>,
}

impl<R, A> Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// Creates a reader from a function of the environment.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self { read: Rc::new(function) }
    }

    /// Runs the computation against `environment`.
    ///
    /// A reader can be run any number of times.
    pub fn run(&self, environment: R) -> A {
        (self.read)(environment)
    }

    /// A reader ignoring its environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_training::effect::{Country, Reader};
    ///
    /// let name: Reader<Country, &str> = Reader::pure("Alice");
    /// assert_eq!(name.run(Country::France), "Alice");
    /// assert_eq!(name.run(Country::Usa), "Alice");
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Projects a value out of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Maps `function` over the result.
    pub fn fmap<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        Reader::new(move |environment| function(self.run(environment)))
    }

    /// Chains a reader computed from this reader's result.
    ///
    /// Both readers see the same environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_training::effect::{Country, Reader, say_hello};
    ///
    /// let hello: Reader<Country, &str> = Reader::asks(say_hello);
    /// let shouted = hello.flat_map(|word| {
    ///     Reader::asks(move |country| match country {
    ///         Country::Spain => format!("¡{word}!"),
    ///         _ => format!("{word}!"),
    ///     })
    /// });
    ///
    /// assert_eq!(shouted.run(Country::Spain), "¡Buenos dìas!");
    /// assert_eq!(shouted.run(Country::Usa), "Hello!");
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        B: 'static,
        R: Clone,
    {
        Reader::new(move |environment: R| function(self.run(environment.clone())).run(environment))
    }

    /// Combines the results of two readers run against the same environment.
    pub fn map2<B, C, F>(self, other: Reader<R, B>, function: F) -> Reader<R, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
        R: Clone,
    {
        Reader::new(move |environment: R| function(self.run(environment.clone()), other.run(environment)))
    }

    /// Runs `computation` against an environment transformed by `modifier`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_training::effect::{Country, Reader, greet};
    ///
    /// let always_french = Reader::local(|_| Country::France, greet("Crystal"));
    /// assert_eq!(always_french.run(Country::Usa), "Bonjour, Crystal");
    /// ```
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        Self::new(move |environment| computation.run(modifier(environment)))
    }
}

impl<Env> Reader<Env, Env>
where
    Env: Clone + 'static,
{
    /// A reader returning the whole environment.
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

impl<R, A> Clone for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            read: Rc::clone(&self.read),
        }
    }
}

impl<R, A> fmt::Debug for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<Reader>")
    }
}
