use crate::PrizeTier;
use rand::Rng;
use std::collections::BTreeMap;

/// The envelopes still waiting to be drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrizePool {
    envelopes: Vec<u64>,
}

impl PrizePool {
    /// Lays out every tier's envelopes in order and shuffles them.
    pub fn build<R: Rng>(tiers: &[PrizeTier], rng: &mut R) -> Self {
        let mut envelopes = Vec::with_capacity(crate::tier::pool_size(tiers));
        for tier in tiers {
            envelopes.extend(std::iter::repeat(tier.amount).take(tier.initial_count as usize));
        }

        let mut pool = Self { envelopes };
        pool.shuffle(rng);
        pool
    }

    /// Fisher-Yates, walking from the last slot down.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        for i in (1..self.envelopes.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.envelopes.swap(i, j);
        }
        tracing::debug!("Shuffled {} envelopes", self.envelopes.len());
    }

    /// Removes one envelope picked uniformly at random. The slot is refilled
    /// with the last envelope, so the order of the rest is not preserved.
    pub fn take_random<R: Rng>(&mut self, rng: &mut R) -> Option<u64> {
        if self.envelopes.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.envelopes.len());
        Some(self.envelopes.swap_remove(index))
    }

    pub fn len(&self) -> usize {
        self.envelopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.envelopes.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.envelopes
    }

    /// Saturates at `u64::MAX` instead of overflowing.
    pub fn total_value(&self) -> u64 {
        self.envelopes
            .iter()
            .fold(0u64, |acc, &amount| acc.saturating_add(amount))
    }

    /// Remaining envelopes keyed by amount.
    pub fn counts(&self) -> BTreeMap<u64, usize> {
        let mut counts = BTreeMap::new();
        for &amount in &self.envelopes {
            *counts.entry(amount).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tiers() -> Vec<PrizeTier> {
        vec![
            PrizeTier::new(100, 2).unwrap(),
            PrizeTier::new(50, 1).unwrap(),
        ]
    }

    #[test]
    fn test_build_contains_every_envelope() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = PrizePool::build(&tiers(), &mut rng);

        assert_eq!(pool.len(), 3);
        assert_eq!(pool.total_value(), 250);
        let counts = pool.counts();
        assert_eq!(counts.get(&100), Some(&2));
        assert_eq!(counts.get(&50), Some(&1));
    }

    #[test]
    fn test_same_seed_same_order() {
        let many: Vec<PrizeTier> = (1..=20).map(|a| PrizeTier::new(a, 3).unwrap()).collect();
        let a = PrizePool::build(&many, &mut StdRng::seed_from_u64(42));
        let b = PrizePool::build(&many, &mut StdRng::seed_from_u64(42));
        let c = PrizePool::build(&many, &mut StdRng::seed_from_u64(43));

        assert_eq!(a, b);
        assert_eq!(a.counts(), c.counts());
    }

    #[test]
    fn test_take_random_drains_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pool = PrizePool::build(&tiers(), &mut rng);
        let mut drawn = Vec::new();

        while let Some(amount) = pool.take_random(&mut rng) {
            drawn.push(amount);
        }
        drawn.sort_unstable();

        assert_eq!(drawn, vec![50, 100, 100]);
        assert!(pool.is_empty());
        assert_eq!(pool.take_random(&mut rng), None);
    }

    #[test]
    fn test_total_value_saturates() {
        let mut rng = StdRng::seed_from_u64(5);
        let pool = PrizePool::build(&[PrizeTier::new(u64::MAX, 2).unwrap()], &mut rng);
        assert_eq!(pool.total_value(), u64::MAX);
    }

    #[test]
    fn test_zero_count_tier_adds_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        let pool = PrizePool::build(&[PrizeTier::new(500, 0).unwrap()], &mut rng);
        assert!(pool.is_empty());
        assert_eq!(pool.total_value(), 0);
    }
}
