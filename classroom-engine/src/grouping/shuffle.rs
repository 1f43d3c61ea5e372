//! Uniform random shuffle

use rand::Rng;

/// Return a uniformly random permutation of `items` without mutating the input.
///
/// Standard Fisher-Yates: walk indices from the last down to the second,
/// swapping each with a uniformly drawn index in `[0, i]`. Zero- and
/// one-element inputs are returned unchanged.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    let mut out: Vec<T> = items.to_vec();
    let mut rng = rand::thread_rng();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_is_permutation() {
        let input: Vec<u32> = (0..50).collect();
        let output = shuffle(&input);
        assert_eq!(output.len(), input.len());

        let mut sorted = output.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, input);
    }

    #[test]
    fn test_shuffle_empty_and_singleton() {
        let empty: Vec<u32> = vec![];
        assert_eq!(shuffle(&empty), empty);

        let one = vec![7u32];
        assert_eq!(shuffle(&one), one);
    }

    #[test]
    fn test_shuffle_does_not_mutate_input() {
        let input = vec![1, 2, 3, 4, 5];
        let copy = input.clone();
        let _ = shuffle(&input);
        assert_eq!(input, copy);
    }

    #[test]
    fn test_shuffle_uniformity() {
        // Position-frequency check: over many trials every element should
        // land in every position about trials/n times. With 8000 trials and
        // n = 4 the expected count is 2000 per cell; a +-300 band is over
        // seven standard deviations, so this does not flake.
        const TRIALS: usize = 8000;
        let input = vec![0usize, 1, 2, 3];
        let mut counts = [[0usize; 4]; 4];

        for _ in 0..TRIALS {
            let out = shuffle(&input);
            for (pos, &val) in out.iter().enumerate() {
                counts[pos][val] += 1;
            }
        }

        let expected = TRIALS / input.len();
        for row in &counts {
            for &count in row {
                assert!(
                    count.abs_diff(expected) < 300,
                    "position frequency {} too far from expected {}",
                    count,
                    expected
                );
            }
        }
    }
}
