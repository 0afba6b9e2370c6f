//! Die associated with a character attribute level.

use crate::error::Error;
use crate::error::Result;
use crate::solver::Solver;

/// Faces gained per attribute level
const FACES_PER_LEVEL: i64 = 4;
/// Levels needed for each flat bonus point
const LEVELS_PER_BONUS: i64 = 10;

/// Die string for an attribute `level`: `d{level * 4}`, plus `+{level / 10}` once positive.
///
/// Non-positive levels have no meaningful die and are rejected.
pub fn attribute_die(level: i64) -> Result<String> {
    if level <= 0 {
        return Err(Error::InvalidArgument(format!(
            "attribute level must be positive, got `{level}`"
        )));
    }
    let faces = level
        .checked_mul(FACES_PER_LEVEL)
        .ok_or_else(|| Error::InvalidArgument(format!("attribute level `{level}` too high")))?;
    let die = format!("d{faces}");
    match level / LEVELS_PER_BONUS {
        0 => Ok(die),
        bonus => Ok(format!("{die}+{bonus}")),
    }
}

/// Ready to roll solver for an attribute `level`
pub fn attribute_solver(level: i64) -> Result<Solver> {
    Solver::new(&attribute_die(level)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::Group;

    #[test]
    fn attribute_die_test() {
        assert_eq!("d4", attribute_die(1).unwrap());
        assert_eq!("d12", attribute_die(3).unwrap());
        assert_eq!("d36", attribute_die(9).unwrap());
        assert_eq!("d40+1", attribute_die(10).unwrap());
        assert_eq!("d48+1", attribute_die(12).unwrap());
        assert_eq!("d100+2", attribute_die(25).unwrap());
    }

    #[test]
    fn attribute_die_rejects_non_positive_test() {
        for level in [0, -1, i64::MIN] {
            assert!(matches!(
                attribute_die(level),
                Err(Error::InvalidArgument(_))
            ));
        }
        assert!(matches!(
            attribute_die(i64::MAX),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn attribute_solver_test() {
        let solver = attribute_solver(12).unwrap();
        assert_eq!(&[Group::new(1, 48).with_modifier(1)], solver.groups());
        assert_eq!(1, solver.modifier_total());
        // past 1000 faces the die is printable but not rollable
        assert!(attribute_solver(251).unwrap_err().is_limit());
    }
}
