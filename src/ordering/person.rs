//! Sorting drills over primitive values and over `Person` records.

use super::order::{Order, sort, sort_by};

/// A person with a name and a possibly unknown age.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    /// The person's name.
    pub name: String,
    /// The person's age, if known.
    pub age: Option<u32>,
}

impl Person {
    /// Creates a person.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_training::ordering::Person;
    ///
    /// let bob = Person::new("Bob", None);
    /// assert_eq!(bob.name, "Bob");
    /// ```
    pub fn new(name: impl Into<String>, age: Option<u32>) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Orders persons alphabetically by name.
    pub fn by_name() -> Order<Self> {
        Order::<String>::natural().map_input(|person: &Self| &person.name)
    }

    /// Orders persons by age, unknown ages first.
    pub fn by_age() -> Order<Self> {
        Order::<u32>::natural()
            .option()
            .map_input(|person: &Self| &person.age)
    }
}

/// Sorts strings alphabetically.
///
/// # Examples
///
/// ```rust
/// use fp_training::ordering::sort_strings;
///
/// let strings = ["xyz", "aba", "ori", "aab", "ghl"].map(String::from);
/// assert_eq!(sort_strings(&strings), ["aab", "aba", "ghl", "ori", "xyz"]);
/// ```
pub fn sort_strings(strings: &[String]) -> Vec<String> {
    sort(strings, &Order::natural())
}

/// Sorts numbers in ascending order.
pub fn sort_numbers(numbers: &[i64]) -> Vec<i64> {
    sort(numbers, &Order::natural())
}

/// Sorts numbers in descending order.
///
/// # Examples
///
/// ```rust
/// use fp_training::ordering::sort_numbers_descending;
///
/// assert_eq!(sort_numbers_descending(&[1337, 42, 5701]), vec![5701, 1337, 42]);
/// ```
pub fn sort_numbers_descending(numbers: &[i64]) -> Vec<i64> {
    sort(numbers, &Order::<i64>::natural().reverse())
}

/// Sorts optional numbers, absent values first.
///
/// # Examples
///
/// ```rust
/// use fp_training::ordering::sort_optional_numbers;
///
/// assert_eq!(
///     sort_optional_numbers(&[Some(1337), None, Some(42)]),
///     vec![None, Some(42), Some(1337)]
/// );
/// ```
pub fn sort_optional_numbers(numbers: &[Option<i64>]) -> Vec<Option<i64>> {
    sort(numbers, &Order::<i64>::natural().option())
}

/// Sorts persons alphabetically by name.
pub fn sort_persons_by_name(persons: &[Person]) -> Vec<Person> {
    sort(persons, &Person::by_name())
}

/// Sorts persons by age, unknown ages first.
pub fn sort_persons_by_age(persons: &[Person]) -> Vec<Person> {
    sort(persons, &Person::by_age())
}

/// Sorts persons by age, then by name among persons of the same age.
pub fn sort_persons_by_age_then_name(persons: &[Person]) -> Vec<Person> {
    sort_by(persons, &[Person::by_age(), Person::by_name()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn persons() -> Vec<Person> {
        vec![
            Person::new("Dorian", Some(29)),
            Person::new("Alice", Some(42)),
            Person::new("Edgar", None),
            Person::new("Bob", None),
            Person::new("Crystal", Some(29)),
        ]
    }

    fn names(persons: &[Person]) -> Vec<&str> {
        persons.iter().map(|person| person.name.as_str()).collect()
    }

    #[rstest]
    fn test_sort_by_name(persons: Vec<Person>) {
        assert_eq!(
            names(&sort_persons_by_name(&persons)),
            vec!["Alice", "Bob", "Crystal", "Dorian", "Edgar"]
        );
    }

    #[rstest]
    fn test_sort_by_age_is_stable_for_equal_ages(persons: Vec<Person>) {
        assert_eq!(
            names(&sort_persons_by_age(&persons)),
            vec!["Edgar", "Bob", "Dorian", "Crystal", "Alice"]
        );
    }

    #[rstest]
    fn test_sort_by_age_then_name(persons: Vec<Person>) {
        assert_eq!(
            names(&sort_persons_by_age_then_name(&persons)),
            vec!["Bob", "Edgar", "Crystal", "Dorian", "Alice"]
        );
    }

    #[rstest]
    fn test_sort_numbers() {
        assert_eq!(sort_numbers(&[1337, 42, 5701]), vec![42, 1337, 5701]);
    }
}
