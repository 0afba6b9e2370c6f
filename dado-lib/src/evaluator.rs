use crate::dice;
use crate::roll;
use tracing::debug;

/// Represent an evaluator
pub(crate) struct Evaluator;

impl Evaluator {
    /// Throw every group in order; totals are derived by `roll::Result`
    pub(crate) fn eval<S: roll::Source>(
        source_text: &str,
        groups: &[dice::Group],
        modifier_total: i64,
        source: &mut S,
    ) -> roll::Result {
        let rolls = groups
            .iter()
            .map(|group| Self::roll(group.count, group.faces, source))
            .collect::<Vec<_>>();
        let result = roll::Result::new(
            source_text.to_owned(),
            groups.to_vec(),
            rolls,
            modifier_total,
        );
        debug!(
            "rolled `{}` total `{}` criticals `{}`",
            source_text,
            result.get_total(),
            result.get_criticals().len()
        );
        result
    }

    pub(crate) fn roll<S: roll::Source>(
        amount: u32,
        faces: u32,
        source: &mut S,
    ) -> Vec<dice::Result> {
        (0..amount)
            .map(|_| dice::Result::new(source.throw(faces), faces))
            .collect()
    }
}
