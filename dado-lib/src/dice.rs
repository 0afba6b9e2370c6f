pub(crate) mod limits;

/// Mark if a dice result is a critic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Critic {
    Success,
    Failure,
    Not,
}

/// Keep one dice result with critic marker
#[derive(Debug, Clone, Copy)]
pub struct Result {
    pub value: u32,
    pub critic: Critic,
}

impl Result {
    /// Only 20 faced dice can be critics
    pub fn new(value: u32, faces: u32) -> Self {
        Result {
            value,
            critic: match value {
                20 if faces == limits::CRITIC_FACES => Critic::Success,
                1 if faces == limits::CRITIC_FACES => Critic::Failure,
                _ => Critic::Not,
            },
        }
    }

    pub fn is_critic(&self) -> bool {
        self.critic != Critic::Not
    }
}

impl std::fmt::Display for Result {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.critic {
            Critic::Success => write!(f, "**{}**", self.value),
            Critic::Failure => write!(f, "*{}*", self.value),
            Critic::Not => write!(f, "{}", self.value),
        }
    }
}

/// A `count`d`faces` unit of a notation, displayed as `2d20+3`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    pub count: u32,
    pub faces: u32,
    pub modifier: i64,
}

impl Group {
    pub fn new(count: u32, faces: u32) -> Self {
        Group {
            count,
            faces,
            modifier: 0,
        }
    }

    pub fn with_modifier(mut self, modifier: i64) -> Self {
        self.modifier = modifier;
        self
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.faces)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critic_only_on_d20_test() {
        assert_eq!(Critic::Success, Result::new(20, 20).critic);
        assert_eq!(Critic::Failure, Result::new(1, 20).critic);
        assert_eq!(Critic::Not, Result::new(19, 20).critic);
        assert_eq!(Critic::Not, Result::new(1, 6).critic);
        assert_eq!(Critic::Not, Result::new(20, 100).critic);
    }

    #[test]
    fn group_display_test() {
        assert_eq!("2d20+3", Group::new(2, 20).with_modifier(3).to_string());
        assert_eq!("1d6-1", Group::new(1, 6).with_modifier(-1).to_string());
        assert_eq!("4d8", Group::new(4, 8).to_string());
    }
}
