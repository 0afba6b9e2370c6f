/// Crate Error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input does not describe any dice
    #[error("invalid notation `{0}`")]
    InvalidNotation(String),
    /// A recognized dice token is out of bounds
    #[error("{0}")]
    LimitExceeded(Limit),
    /// A helper received an argument outside its domain
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Which bound a notation violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Amount(u32),
    Faces(u32),
    Groups(usize),
    Modifier(u64),
}

impl std::fmt::Display for Limit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Limit::Amount(max) => write!(f, "exceeded max allowed amount of dices `{max}`"),
            Limit::Faces(max) => write!(f, "exceeded max allowed number of dice faces `{max}`"),
            Limit::Groups(max) => write!(f, "maximum {max} dice-group types"),
            Limit::Modifier(max) => write!(f, "modifier must stay within `±{max}`"),
        }
    }
}

impl Error {
    /// True when the caller sent something too large rather than something malformed
    pub fn is_limit(&self) -> bool {
        matches!(self, Error::LimitExceeded(_))
    }
}

impl From<Limit> for Error {
    fn from(value: Limit) -> Self {
        Self::LimitExceeded(value)
    }
}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;
