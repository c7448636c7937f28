use rand::Rng;

use crate::error::WheelError;

/// Draws an index uniformly from `0..names.len()`.
///
/// Every slot is equally likely, so a name that appears twice is twice as
/// likely to be drawn. Each call makes a fresh draw.
pub fn select_index<S, R>(names: &[S], rng: &mut R) -> Result<usize, WheelError>
where
    R: Rng + ?Sized,
{
    if names.is_empty() {
        return Err(WheelError::InvalidSelection);
    }
    Ok(rng.gen_range(0..names.len()))
}

pub fn select<'a, S, R>(names: &'a [S], rng: &mut R) -> Result<&'a str, WheelError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let index = select_index(names, rng)?;
    Ok(names[index].as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_list_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let names: Vec<String> = Vec::new();
        assert_eq!(select(&names, &mut rng), Err(WheelError::InvalidSelection));
    }

    #[test]
    fn test_single_name_always_wins() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(select(&["Solo"], &mut rng), Ok("Solo"));
        }
    }

    #[test]
    fn test_result_is_member_of_list() {
        let names = ["Alice", "Bob", "Carol"];
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let winner = select(&names, &mut rng).unwrap();
            assert!(names.contains(&winner));
        }
    }

    #[test]
    fn test_selection_is_uniform() {
        let names = ["A", "B", "C", "D", "E"];
        let trials = 100_000;
        let mut counts = [0usize; 5];
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..trials {
            counts[select_index(&names, &mut rng).unwrap()] += 1;
        }

        let expected = 1.0 / names.len() as f64;
        for count in counts {
            let frequency = count as f64 / trials as f64;
            assert!((frequency - expected).abs() < 0.01, "frequency {} too far from {}", frequency, expected);
        }
    }

    #[test]
    fn test_duplicates_are_independent_slots() {
        let names = ["Twin", "Twin", "Other"];
        let trials = 30_000;
        let mut rng = StdRng::seed_from_u64(99);
        let twins = (0..trials)
            .filter(|_| select(&names, &mut rng).unwrap() == "Twin")
            .count();
        let frequency = twins as f64 / trials as f64;
        assert!((frequency - 2.0 / 3.0).abs() < 0.02);
    }

    #[test]
    fn test_draws_are_not_memoized() {
        let names = ["A", "B", "C", "D"];
        let mut rng = StdRng::seed_from_u64(5);
        let first = select_index(&names, &mut rng).unwrap();
        let differs = (0..100).any(|_| select_index(&names, &mut rng).unwrap() != first);
        assert!(differs);
    }
}
