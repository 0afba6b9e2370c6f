use dado_lib::solver::Solver;
use serenity::prelude::TypeMapKey;
use std::collections::HashMap;

/// Last notation rolled by each user id
pub(crate) struct RollMap;

impl TypeMapKey for RollMap {
    type Value = HashMap<u64, Solver>;
}
