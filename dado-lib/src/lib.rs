pub mod attribute;
pub mod dice;
pub mod error;
mod evaluator;
mod parser;
pub mod roll;
pub mod solver;

#[cfg(test)]
mod tests {
    use crate::dice::Critic;
    use crate::dice::Group;
    use crate::error::Error;
    use crate::roll::Source;
    use crate::solver::Solver;
    use rand::rngs::StdRng;
    use rand::Rng;
    use rand::SeedableRng;

    pub struct MockIter<'a, T: Iterator<Item = u32>> {
        pub iter: &'a mut T,
    }

    impl<T: Iterator<Item = u32>> Source for MockIter<'_, T> {
        fn throw(&mut self, faces: u32) -> u32 {
            match self.iter.next() {
                Some(value) => {
                    if value > faces {
                        panic!("Tried to return {} for a {} faced dice", value, faces)
                    }
                    value
                }
                None => panic!("Iterator out of values"),
            }
        }
    }

    fn solve_mock(input: &str, mock: Vec<u32>) -> crate::roll::Result {
        Solver::new(input).unwrap().solve_with_source(&mut MockIter {
            iter: &mut mock.into_iter(),
        })
    }

    #[test]
    fn d20_with_modifier_test() {
        let res = solve_mock("1d20+5", vec![15]);
        assert_eq!(20, res.get_total());
        assert_eq!(5, res.get_modifier_total());
        assert!(res.get_criticals().is_empty());
        eprintln!("{}", res);
    }

    #[test]
    fn no_critic_on_d6_test() {
        let res = solve_mock("2d6", vec![3, 5]);
        assert_eq!(8, res.get_total());
        assert!(res.get_criticals().is_empty());

        // 1 and 20 only matter on a d20
        let res = solve_mock("2d100", vec![1, 20]);
        assert!(res.get_criticals().is_empty());
    }

    #[test]
    fn critic_success_test() {
        let res = solve_mock("1d20", vec![20]);
        assert_eq!(20, res.get_total());
        let positions = res
            .get_criticals()
            .iter()
            .map(|c| c.position())
            .collect::<Vec<_>>();
        assert_eq!(vec![(0, 0)], positions);
        assert!(res.has_critic(Critic::Success));
        assert!(!res.has_critic(Critic::Failure));
    }

    #[test]
    fn two_groups_test() {
        let res = solve_mock("2d20+3,1d6", vec![1, 20, 4]);
        assert_eq!(
            &[Group::new(2, 20), Group::new(1, 6).with_modifier(3)],
            res.get_groups()
        );
        assert_eq!(3, res.get_modifier_total());
        assert_eq!(28, res.get_total());
        let positions = res
            .get_criticals()
            .iter()
            .map(|c| c.position())
            .collect::<Vec<_>>();
        assert_eq!(vec![(0, 0), (0, 1)], positions);
        assert_eq!(Critic::Failure, res.get_criticals()[0].critic);
        assert_eq!(Critic::Success, res.get_criticals()[1].critic);
        assert_eq!("2d20+3,1d6", res.get_source());
        eprintln!("{}", res);
    }

    #[test]
    fn source_text_kept_verbatim_test() {
        let res = solve_mock("  2D6 + 1 ", vec![2, 2]);
        assert_eq!("  2D6 + 1 ", res.get_source());
        assert_eq!(5, res.get_total());
    }

    #[test]
    fn parse_failure_prevents_roll_test() {
        assert!(matches!(Solver::new("abc"), Err(Error::InvalidNotation(_))));
        assert!(Solver::new("101d6").unwrap_err().is_limit());
    }

    #[test]
    fn huge_modifier_rejected_before_roll_test() {
        match Solver::new("1d20+9223372036854775807") {
            Err(Error::LimitExceeded(_)) => (),
            other => panic!("{other:?}"),
        }
        let mut rng = StdRng::seed_from_u64(1);
        let res = Solver::new("100d1000+1000000, 100d1000")
            .unwrap()
            .solve_with(&mut rng);
        let sum = res
            .get_rolls()
            .iter()
            .flatten()
            .map(|r| r.value as i64)
            .sum::<i64>();
        assert_eq!(sum + 1_000_000, res.get_total());
    }

    #[test]
    fn dice_in_range_test() {
        let mut rng = StdRng::seed_from_u64(0x00da_d0);
        for faces in [1, 2, 4, 6, 20, 100, 1000] {
            let solver = Solver::new(&format!("100d{faces}")).unwrap();
            for _ in 0..100 {
                let res = solver.solve_with(&mut rng);
                assert_eq!(100, res.get_rolls()[0].len());
                assert!(res.get_rolls()[0]
                    .iter()
                    .all(|r| (1..=faces).contains(&r.value)));
            }
        }
    }

    #[test]
    fn total_matches_dice_test() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let input = format!(
                "{}d{}{:+}, {}d{} {:+}",
                rng.gen_range(1..=100),
                rng.gen_range(1..=1000),
                rng.gen_range(-50..=50),
                rng.gen_range(1..=100),
                rng.gen_range(1..=1000),
                rng.gen_range(-50..=50),
            );
            let solver = Solver::new(&input).unwrap();
            let res = solver.solve_with(&mut rng);
            let sum = res
                .get_rolls()
                .iter()
                .flatten()
                .map(|r| r.value as i64)
                .sum::<i64>();
            assert_eq!(sum + res.get_modifier_total(), res.get_total(), "{input}");
            for (group, rolls) in res.get_groups().iter().zip(res.get_rolls()) {
                assert_eq!(group.count as usize, rolls.len());
            }
        }
    }

    #[test]
    fn criticals_iff_d20_extremes_test() {
        let mut rng = StdRng::seed_from_u64(7);
        for input in ["100d20, 100d6", "50d19,50d20", "d20"] {
            let solver = Solver::new(input).unwrap();
            for _ in 0..200 {
                let res = solver.solve_with(&mut rng);
                let mut expected = Vec::new();
                for (g, (group, rolls)) in res.get_groups().iter().zip(res.get_rolls()).enumerate() {
                    for (d, r) in rolls.iter().enumerate() {
                        if group.faces == 20 && (r.value == 1 || r.value == 20) {
                            expected.push((g, d));
                        }
                    }
                }
                let found = res
                    .get_criticals()
                    .iter()
                    .map(|c| c.position())
                    .collect::<Vec<_>>();
                assert_eq!(expected, found);
            }
        }
    }

    #[test]
    fn display_test() {
        let res = solve_mock("2d20-1", vec![20, 7]);
        assert_eq!(
            "`2d20` [**20**, 7]\n*modifier* `-1`\n*total* **26** *critical success*",
            res.to_string()
        );
    }
}
