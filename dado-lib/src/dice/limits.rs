/// Arbitrary limits to avoid abuse
pub(crate) const MAX_DICE_AMOUNT: u32 = 100;
pub(crate) const MAX_DICE_FACES: u32 = 1000;
pub(crate) const MAX_GROUPS: usize = 2;
/// Bound on the aggregated modifier, keeps every total far from `i64` overflow
pub(crate) const MAX_MODIFIER: u64 = 1_000_000;

/// Faces of the only dice that can score critics
pub(crate) const CRITIC_FACES: u32 = 20;
