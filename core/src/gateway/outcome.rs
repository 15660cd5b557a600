use crate::FolioError;

/// Result of a gateway call.
///
/// Both variants carry a usable value. `Fallback` also carries the error that
/// was logged when the canned value was substituted.
#[derive(Debug)]
pub enum Outcome<T> {
    Live(T),
    Fallback { value: T, cause: FolioError },
}

impl<T> Outcome<T> {
    pub fn is_live(&self) -> bool {
        matches!(self, Outcome::Live(_))
    }

    pub fn is_fallback(&self) -> bool {
        !self.is_live()
    }

    pub fn value(&self) -> &T {
        match self {
            Outcome::Live(v) => v,
            Outcome::Fallback { value, .. } => value,
        }
    }

    pub fn cause(&self) -> Option<&FolioError> {
        match self {
            Outcome::Live(_) => None,
            Outcome::Fallback { cause, .. } => Some(cause),
        }
    }

    /// Drop the live/fallback distinction
    pub fn into_inner(self) -> T {
        match self {
            Outcome::Live(v) => v,
            Outcome::Fallback { value, .. } => value,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Live(v) => Outcome::Live(f(v)),
            Outcome::Fallback { value, cause } => Outcome::Fallback {
                value: f(value),
                cause,
            },
        }
    }
}
