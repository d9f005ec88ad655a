use super::repository::UserRepository;
use super::time::TimeService;

/// An environment exposing a [`UserRepository`].
pub trait UserAccess {
    /// The repository type.
    type Users: UserRepository;

    /// The user repository.
    fn users(&self) -> &Self::Users;
}

/// An environment exposing a [`TimeService`].
pub trait TimeAccess {
    /// The time service type.
    type Time: TimeService;

    /// The time service.
    fn time(&self) -> &Self::Time;
}

/// The services a use-case may need, wired together.
#[derive(Debug, Clone)]
pub struct Application<U, T> {
    users: U,
    time: T,
}

impl<U, T> Application<U, T>
where
    U: UserRepository,
    T: TimeService,
{
    /// Wires the given services.
    pub const fn new(users: U, time: T) -> Self {
        Self { users, time }
    }
}

impl<U: UserRepository, T> UserAccess for Application<U, T> {
    type Users = U;

    fn users(&self) -> &U {
        &self.users
    }
}

impl<U, T: TimeService> TimeAccess for Application<U, T> {
    type Time = T;

    fn time(&self) -> &T {
        &self.time
    }
}
