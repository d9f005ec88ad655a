//! The `Order<T>` comparator and the sorting functions built on it.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::typeclass::{Monoid, Semigroup};

/// A total order over values of `T`.
///
/// Cloning an `Order` is cheap: the comparison function is shared.
/// Orders are `Send + Sync` so they can be captured by async code.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use fp_training::ordering::Order;
///
/// let by_length = Order::<usize>::natural().contramap(|text: &&str| text.len());
/// assert_eq!(by_length.compare(&"ab", &"abc"), Ordering::Less);
/// ```
pub struct Order<T: ?Sized> {
    compare_function: Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>,
}

impl<T: ?Sized> Clone for Order<T> {
    fn clone(&self) -> Self {
        Self {
            compare_function: Arc::clone(&self.compare_function),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Order<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Order").finish_non_exhaustive()
    }
}

impl<T: ?Sized> Order<T> {
    /// Compares two values.
    #[inline]
    pub fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.compare_function)(left, right)
    }

    /// Returns `true` if both values compare as equal.
    #[inline]
    pub fn equivalent(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) == Ordering::Equal
    }
}

impl<T: ?Sized + 'static> Order<T> {
    /// Creates an order from a comparison function.
    ///
    /// The function must describe a total order: transitive and antisymmetric.
    pub fn new<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self {
            compare_function: Arc::new(compare),
        }
    }

    /// The order given by `T`'s [`Ord`] implementation.
    ///
    /// Strings compare lexicographically, integers numerically.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use fp_training::ordering::Order;
    ///
    /// assert_eq!(Order::<str>::natural().compare("aab", "aba"), Ordering::Less);
    /// ```
    pub fn natural() -> Self
    where
        T: Ord,
    {
        Self::new(|left: &T, right: &T| left.cmp(right))
    }

    /// The opposite order.
    ///
    /// Every outcome is negated, equal stays equal; a stable sort with the
    /// reversed order therefore keeps ties in their input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use fp_training::ordering::Order;
    ///
    /// let descending = Order::<i32>::natural().reverse();
    /// assert_eq!(descending.compare(&1, &2), Ordering::Greater);
    /// assert_eq!(descending.compare(&2, &2), Ordering::Equal);
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        let inner = self.clone();
        Self::new(move |left, right| inner.compare(right, left))
    }

    /// Chains `next` as a tie-breaker: `next` is consulted only when `self`
    /// finds the values equal.
    #[must_use]
    pub fn then(&self, next: &Self) -> Self {
        let first = self.clone();
        let second = next.clone();
        Self::new(move |left, right| {
            first
                .compare(left, right)
                .then_with(|| second.compare(left, right))
        })
    }

    /// Orders `U` values by a field borrowed from them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use fp_training::ordering::Order;
    ///
    /// struct Page { name: String }
    ///
    /// let by_name = Order::<String>::natural().map_input(|page: &Page| &page.name);
    /// let home = Page { name: "home".to_string() };
    /// let about = Page { name: "about".to_string() };
    /// assert_eq!(by_name.compare(&about, &home), Ordering::Less);
    /// ```
    #[must_use]
    pub fn map_input<U, F>(&self, selector: F) -> Order<U>
    where
        U: ?Sized + 'static,
        F: Fn(&U) -> &T + Send + Sync + 'static,
    {
        let inner = self.clone();
        Order::new(move |left: &U, right: &U| inner.compare(selector(left), selector(right)))
    }

    /// Orders `U` values by a key computed from them.
    ///
    /// Unlike [`Order::map_input`] the key is owned, so it may be derived
    /// rather than borrowed.
    #[must_use]
    pub fn contramap<U, F>(&self, project: F) -> Order<U>
    where
        T: Sized,
        U: ?Sized + 'static,
        F: Fn(&U) -> T + Send + Sync + 'static,
    {
        let inner = self.clone();
        Order::new(move |left: &U, right: &U| inner.compare(&project(left), &project(right)))
    }
}

impl<T: 'static> Order<T> {
    /// Lifts this order to optional values: `None` comes before any `Some`,
    /// and two `Some` compare by their contents.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use fp_training::ordering::Order;
    ///
    /// let optional = Order::<u32>::natural().reverse().option();
    /// assert_eq!(optional.compare(&None, &Some(0)), Ordering::Less);
    /// assert_eq!(optional.compare(&Some(1), &Some(2)), Ordering::Greater);
    /// ```
    #[must_use]
    pub fn option(&self) -> Order<Option<T>> {
        let inner = self.clone();
        Order::new(move |left: &Option<T>, right: &Option<T>| match (left, right) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(left), Some(right)) => inner.compare(left, right),
        })
    }
}

/// Tie-breaking composition: the left order wins unless it finds the
/// values equal.
impl<T: ?Sized + 'static> Semigroup for Order<T> {
    fn combine(self, other: Self) -> Self {
        self.then(&other)
    }
}

/// The identity order finds every pair equal.
impl<T: ?Sized + 'static> Monoid for Order<T> {
    fn empty() -> Self {
        Self::new(|_, _| Ordering::Equal)
    }
}

/// Returns a sorted copy of `items`.
///
/// The sort is stable and `items` is left untouched.
///
/// # Examples
///
/// ```rust
/// use fp_training::ordering::{sort, Order};
///
/// let words = ["xyz", "aba", "ori"];
/// assert_eq!(sort(&words, &Order::natural()), vec!["aba", "ori", "xyz"]);
/// assert_eq!(words, ["xyz", "aba", "ori"]);
/// ```
pub fn sort<T: Clone>(items: &[T], order: &Order<T>) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|left, right| order.compare(left, right));
    sorted
}

/// Sorts with several orders, each breaking the ties of the previous ones.
///
/// An empty slice of orders keeps the input order.
pub fn sort_by<T: Clone + 'static>(items: &[T], orders: &[Order<T>]) -> Vec<T> {
    sort(items, &Order::combine_all(orders.iter().cloned()))
}

static_assertions::assert_impl_all!(Order<String>: Send, Sync, Clone);
