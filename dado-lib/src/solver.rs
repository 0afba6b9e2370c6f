use crate::dice;
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::parser;
use crate::roll;
use itertools::Itertools;
use rand::Rng;
use tracing::debug;

/// Default random dice roller
pub struct RandomSource<'a, T: Rng> {
    pub generator: &'a mut T,
}

impl<T: Rng> roll::Source for RandomSource<'_, T> {
    fn throw(&mut self, faces: u32) -> u32 {
        self.generator.gen_range(1..=faces)
    }
}

/// Represent a solver: the query string and its parsed groups
#[derive(Clone, Debug)]
pub struct Solver {
    query: String,
    groups: Vec<dice::Group>,
    modifier_total: i64,
}

impl Solver {
    /// Parse the query, nothing is rolled yet
    pub fn new(input: &str) -> Result<Self> {
        let (groups, modifier_total) = parser::Parser::extract_groups(input)?;
        debug!(
            "parsed `{}` into `{}` with modifier `{}`",
            input,
            groups.iter().format(", "),
            modifier_total
        );
        Ok(Solver {
            query: input.to_owned(),
            groups,
            modifier_total,
        })
    }

    /// Solve the query using the default Rng source
    pub fn solve(&self) -> roll::Result {
        self.solve_with(&mut rand::thread_rng())
    }

    /// Solve the query using the provided Rng source
    pub fn solve_with<R: Rng>(&self, generator: &mut R) -> roll::Result {
        self.solve_with_source(&mut RandomSource { generator })
    }

    /// Solve the query using the provided source
    pub fn solve_with_source<S: roll::Source>(&self, source: &mut S) -> roll::Result {
        Evaluator::eval(&self.query, &self.groups, self.modifier_total, source)
    }

    pub fn groups(&self) -> &[dice::Group] {
        &self.groups
    }

    pub fn modifier_total(&self) -> i64 {
        self.modifier_total
    }

    /// Return the query string
    pub fn as_str(&self) -> &str {
        &self.query
    }
}
