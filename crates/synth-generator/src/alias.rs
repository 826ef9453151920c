//! Constant-time weighted category sampling.
//!
//! Implements Vose's alias method: O(n) table construction, O(1) per draw.
//! Each slot stores a probability threshold and an alias index; a draw picks
//! a uniform slot and either keeps it or falls through to its alias.

use crate::error::GeneratorError;
use rand::Rng;

/// Precomputed alias table over a fixed set of category weights.
#[derive(Debug, Clone)]
pub struct AliasTable {
    /// Per-slot probability threshold, scaled so the mean slot holds 1.0
    prob: Vec<f64>,
    /// Fallback index taken when the threshold check fails
    alias: Vec<usize>,
}

impl AliasTable {
    /// Build an alias table from relative category weights.
    ///
    /// Weights need not sum to 1; they are normalized during construction.
    pub fn new(weights: &[f64]) -> Result<Self, GeneratorError> {
        if weights.is_empty() {
            return Err(GeneratorError::EmptyWeights);
        }
        if let Some(w) = weights.iter().find(|w| **w < 0.0) {
            return Err(GeneratorError::NegativeWeight(*w));
        }
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Err(GeneratorError::ZeroWeightSum);
        }

        let n = weights.len();
        let mut prob = vec![0.0; n];
        let mut alias = vec![0usize; n];

        // Scale so a uniform weight maps every slot to exactly 1.0.
        let mut scaled: Vec<f64> = weights.iter().map(|w| w * n as f64 / total).collect();

        let mut small: Vec<usize> = Vec::new();
        let mut large: Vec<usize> = Vec::new();
        for (i, p) in scaled.iter().enumerate() {
            if *p < 1.0 {
                small.push(i);
            } else {
                large.push(i);
            }
        }

        // Pair each under-full slot with an over-full donor until either
        // stack drains.
        while let (Some(&s), Some(&l)) = (small.last(), large.last()) {
            small.pop();
            large.pop();
            prob[s] = scaled[s];
            alias[s] = l;
            scaled[l] = (scaled[l] + scaled[s]) - 1.0;
            if scaled[l] < 1.0 {
                small.push(l);
            } else {
                large.push(l);
            }
        }

        // Leftovers are numerically-1.0 slots that never fall through.
        for i in large {
            prob[i] = 1.0;
        }
        for i in small {
            prob[i] = 1.0;
        }

        Ok(Self { prob, alias })
    }

    /// Number of categories in the table.
    pub fn len(&self) -> usize {
        self.prob.len()
    }

    /// Whether the table has no categories. Construction rejects empty
    /// weight lists, so this is always false for a built table.
    pub fn is_empty(&self) -> bool {
        self.prob.is_empty()
    }

    /// Draw the next category index.
    pub fn next<R: Rng>(&self, rng: &mut R) -> usize {
        let slot = rng.gen_range(0..self.prob.len());
        if rng.gen::<f64>() < self.prob[slot] {
            slot
        } else {
            self.alias[slot]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_weights_rejected() {
        let result = AliasTable::new(&[]);
        assert!(matches!(result, Err(GeneratorError::EmptyWeights)));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let result = AliasTable::new(&[0.5, -0.1, 0.6]);
        assert!(matches!(result, Err(GeneratorError::NegativeWeight(_))));
    }

    #[test]
    fn test_zero_sum_rejected() {
        let result = AliasTable::new(&[0.0, 0.0]);
        assert!(matches!(result, Err(GeneratorError::ZeroWeightSum)));
    }

    #[test]
    fn test_single_category() {
        let table = AliasTable::new(&[3.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            assert_eq!(table.next(&mut rng), 0);
        }
    }

    #[test]
    fn test_zero_weight_category_never_drawn() {
        let table = AliasTable::new(&[0.0, 1.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            assert_eq!(table.next(&mut rng), 1);
        }
    }

    #[test]
    fn test_unnormalized_weights() {
        // Weights are relative; [7, 2, 1] behaves like [0.7, 0.2, 0.1].
        let table = AliasTable::new(&[7.0, 2.0, 1.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u64; 3];
        for _ in 0..10_000 {
            counts[table.next(&mut rng)] += 1;
        }

        assert!(counts[0] > counts[1]);
        assert!(counts[1] > counts[2]);
    }

    #[test]
    fn test_draw_frequencies_converge() {
        let weights = [0.7, 0.2, 0.1];
        let table = AliasTable::new(&weights).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let draws = 100_000u64;
        let mut counts = [0u64; 3];
        for _ in 0..draws {
            counts[table.next(&mut rng)] += 1;
        }

        for (i, weight) in weights.iter().enumerate() {
            let observed = counts[i] as f64 / draws as f64;
            assert!(
                (observed - weight).abs() < 0.01,
                "category {i}: observed {observed}, expected {weight}"
            );
        }
    }

    #[test]
    fn test_deterministic_draws() {
        let table = AliasTable::new(&[0.5, 0.3, 0.2]).unwrap();

        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);

        let draws1: Vec<usize> = (0..100).map(|_| table.next(&mut rng1)).collect();
        let draws2: Vec<usize> = (0..100).map(|_| table.next(&mut rng2)).collect();

        assert_eq!(draws1, draws2);
    }
}
