use crate::dice;
use crate::dice::limits;
use crate::error::Error;
use crate::error::Limit;
use crate::error::Result;
use pest::iterators::Pair;
use pest::Parser as _;
use pest_derive::Parser;
use tracing::trace;

/// Pest parser
#[derive(Parser)]
#[grammar = "dado.pest"]
pub struct Parser;

impl Parser {
    /// Strip every whitespace and lowercase the rest
    pub fn normalize(input: &str) -> String {
        input
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase()
    }

    /// Extract the dice groups and the aggregated modifier.
    ///
    /// Every modifier found after the first dice is summed into one total, which is then
    /// reported on the last group. Integers before the first dice are ignored.
    pub fn extract_groups(input: &str) -> Result<(Vec<dice::Group>, i64)> {
        let normalized = Self::normalize(input);
        // filler accepts any char, a grammar failure still means no dice
        let pairs = Self::parse(Rule::notation, &normalized)
            .map_err(|_| Error::InvalidNotation(input.to_owned()))?;
        let mut dices = Vec::new();
        let mut modifier_total = 0i64;
        for pair in pairs.flat_map(|notation| notation.into_inner()) {
            match pair.as_rule() {
                Rule::dice => dices.push(pair),
                Rule::modifier if dices.is_empty() => {
                    trace!("ignoring leading integer `{}`", pair.as_str());
                }
                Rule::modifier => {
                    let too_large = Limit::Modifier(limits::MAX_MODIFIER);
                    modifier_total = pair
                        .as_str()
                        .parse::<i64>()
                        .ok()
                        .and_then(|value| modifier_total.checked_add(value))
                        .filter(|total| total.unsigned_abs() <= limits::MAX_MODIFIER)
                        .ok_or(too_large)?;
                }
                _ => (),
            }
        }
        if dices.is_empty() {
            return Err(Error::InvalidNotation(input.to_owned()));
        }
        if dices.len() > limits::MAX_GROUPS {
            return Err(Limit::Groups(limits::MAX_GROUPS).into());
        }
        let mut groups = dices
            .into_iter()
            .map(|dice| Self::extract_group(dice, input))
            .collect::<Result<Vec<_>>>()?;
        if let Some(last) = groups.last_mut() {
            last.modifier = modifier_total;
        }
        Ok((groups, modifier_total))
    }

    fn extract_group(dice: Pair<Rule>, input: &str) -> Result<dice::Group> {
        let numbers = dice
            .into_inner()
            .map(|number| number.as_str())
            .collect::<Vec<_>>();
        let (count, faces) = match numbers.as_slice() {
            [faces] => (1, *faces),
            [count, faces] => (
                Self::extract_bounded(
                    count,
                    limits::MAX_DICE_AMOUNT,
                    Limit::Amount(limits::MAX_DICE_AMOUNT),
                )?,
                *faces,
            ),
            _ => unreachable!("{:?}", numbers),
        };
        let faces = Self::extract_bounded(
            faces,
            limits::MAX_DICE_FACES,
            Limit::Faces(limits::MAX_DICE_FACES),
        )?;
        if count == 0 || faces == 0 {
            return Err(Error::InvalidNotation(input.to_owned()));
        }
        Ok(dice::Group::new(count, faces))
    }

    /// Digit runs too long for `u32` are over any bound anyway
    fn extract_bounded(digits: &str, max: u32, limit: Limit) -> Result<u32> {
        match digits.parse::<u32>() {
            Ok(value) if value <= max => Ok(value),
            _ => Err(limit.into()),
        }
    }
}
