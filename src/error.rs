use std::fmt;

/// Rejected mutations on game entities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    NegativeLives { requested: i64 },
    BlankName,
    NameTooLong { len: usize, max: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeLives { requested } => {
                write!(f, "invalid argument: lives cannot be negative (got {requested})")
            }
            Self::BlankName => write!(f, "invalid argument: ship name must not be blank"),
            Self::NameTooLong { len, max } => write!(
                f,
                "invalid argument: ship name is {len} characters, at most {max} allowed"
            ),
        }
    }
}

impl std::error::Error for GameError {}
