use crate::dice::Critic;

/// Position of a critic die inside a roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Critical {
    pub group: usize,
    pub die: usize,
    pub critic: Critic,
}

impl Critical {
    pub fn new(group: usize, die: usize, critic: Critic) -> Self {
        Critical { group, die, critic }
    }

    /// (group, die) coordinates
    pub fn position(&self) -> (usize, usize) {
        (self.group, self.die)
    }
}

impl std::fmt::Display for Critical {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.critic {
            Critic::Success => write!(f, "*critical success*"),
            Critic::Failure => write!(f, "*critical failure*"),
            Critic::Not => Ok(()),
        }
    }
}
