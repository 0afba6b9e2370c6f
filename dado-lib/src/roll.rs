pub mod critical;
pub use critical::Critical;

use crate::dice;
use itertools::Itertools;

/// Keep a notation evaluation
#[derive(Debug, Clone)]
pub struct Result {
    source: String,
    groups: Vec<dice::Group>,
    rolls: Vec<Vec<dice::Result>>,
    modifier_total: i64,
    total: i64,
    criticals: Vec<Critical>,
}

impl Result {
    /// Build from the drawn dice, deriving totals and criticals
    pub fn new(
        source: String,
        groups: Vec<dice::Group>,
        rolls: Vec<Vec<dice::Result>>,
        modifier_total: i64,
    ) -> Self {
        let total = rolls.iter().flatten().map(|r| r.value as i64).sum::<i64>() + modifier_total;
        let criticals = rolls
            .iter()
            .enumerate()
            .flat_map(|(group, results)| {
                results
                    .iter()
                    .enumerate()
                    .filter(|(_, r)| r.is_critic())
                    .map(move |(die, r)| Critical::new(group, die, r.critic))
            })
            .collect();
        Result {
            source,
            groups,
            rolls,
            modifier_total,
            total,
            criticals,
        }
    }

    /// The notation as typed by the user
    pub fn get_source(&self) -> &str {
        &self.source
    }

    pub fn get_groups(&self) -> &[dice::Group] {
        &self.groups
    }

    /// Dice results, one vector per group
    pub fn get_rolls(&self) -> &[Vec<dice::Result>] {
        &self.rolls
    }

    pub fn get_modifier_total(&self) -> i64 {
        self.modifier_total
    }

    pub fn get_total(&self) -> i64 {
        self.total
    }

    pub fn get_criticals(&self) -> &[Critical] {
        &self.criticals
    }

    pub fn has_critic(&self, critic: dice::Critic) -> bool {
        self.criticals.iter().any(|c| c.critic == critic)
    }
}

impl std::fmt::Display for Result {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (group, rolls) in self.groups.iter().zip(self.rolls.iter()) {
            writeln!(
                f,
                "`{}d{}` [{}]",
                group.count,
                group.faces,
                rolls.iter().format(", ")
            )?;
        }
        match self.modifier_total {
            0 => (),
            m => writeln!(f, "*modifier* `{m:+}`")?,
        }
        write!(f, "*total* **{}**", self.total)?;
        if !self.criticals.is_empty() {
            write!(f, " {}", self.criticals.iter().format(" "))?;
        }
        Ok(())
    }
}

/// Interface for rolling dices
pub trait Source {
    fn throw(&mut self, faces: u32) -> u32;
}
