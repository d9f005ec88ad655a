use futures::future;

use super::UserNotFoundError;
use super::application::{TimeAccess, UserAccess};
use super::repository::UserRepository;
use super::time::TimeService;

/// Upper-cases the first character of `name`.
///
/// # Examples
///
/// ```rust
/// use fp_training::users::capitalize;
///
/// assert_eq!(capitalize("rob"), "Rob");
/// assert_eq!(capitalize("élodie"), "Élodie");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(name: &str) -> String {
    let mut characters = name.chars();
    characters.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(characters).collect()
    })
}

/// The capitalized name of a user.
///
/// # Errors
///
/// Returns [`UserNotFoundError`] if no user has `user_id`.
pub async fn capitalized_user_name<E>(environment: &E, user_id: &str) -> Result<String, UserNotFoundError>
where
    E: UserAccess,
{
    let user = environment.users().get_by_id(user_id).await?;
    Ok(capitalize(&user.name))
}

/// Both capitalized names, concatenated.
///
/// The two lookups are independent and run concurrently.
///
/// # Errors
///
/// Returns the first [`UserNotFoundError`] encountered.
pub async fn concatenated_user_names<E>(
    environment: &E,
    first_id: &str,
    second_id: &str,
) -> Result<String, UserNotFoundError>
where
    E: UserAccess,
{
    let (first, second) = future::try_join(
        capitalized_user_name(environment, first_id),
        capitalized_user_name(environment, second_id),
    )
    .await?;
    Ok(first + &second)
}

/// The capitalized names of a user and of their best friend, concatenated.
///
/// The second lookup needs the result of the first.
///
/// # Errors
///
/// Returns [`UserNotFoundError`] if either user is missing.
pub async fn best_friend_concatenation<E>(environment: &E, user_id: &str) -> Result<String, UserNotFoundError>
where
    E: UserAccess,
{
    let user = environment.users().get_by_id(user_id).await?;
    let best_friend = environment.users().get_by_id(&user.best_friend_id).await?;
    Ok(capitalize(&user.name) + &capitalize(&best_friend.name))
}

/// The user's name as stored, followed by the current year.
///
/// # Errors
///
/// Returns [`UserNotFoundError`] if no user has `user_id`.
pub async fn user_name_with_current_year<E>(
    environment: &E,
    user_id: &str,
) -> Result<String, UserNotFoundError>
where
    E: UserAccess + TimeAccess,
{
    let user = environment.users().get_by_id(user_id).await?;
    let year = environment.time().this_year();
    Ok(format!("{}{year}", user.name))
}
