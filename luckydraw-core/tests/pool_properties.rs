use luckydraw_core::{DrawError, PrizePoolEngine, PrizeTier};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn tier_list() -> impl Strategy<Value = Vec<PrizeTier>> {
    prop::collection::vec((1u64..5_000, 0u32..12), 0..6).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(amount, initial_count)| PrizeTier {
                amount,
                initial_count,
            })
            .collect()
    })
}

fn expected_pool(tiers: &[PrizeTier]) -> Vec<u64> {
    let mut pool: Vec<u64> = tiers
        .iter()
        .flat_map(|t| std::iter::repeat(t.amount).take(t.initial_count as usize))
        .collect();
    pool.sort_unstable();
    pool
}

fn sorted(pool: &[u64]) -> Vec<u64> {
    let mut pool = pool.to_vec();
    pool.sort_unstable();
    pool
}

proptest! {
    #[test]
    fn initialize_lays_out_every_envelope(tiers in tier_list(), seed in any::<u64>()) {
        let engine = PrizePoolEngine::new(tiers.clone(), StdRng::seed_from_u64(seed)).unwrap();
        let expected = expected_pool(&tiers);

        prop_assert_eq!(engine.remaining(), expected.len());
        prop_assert_eq!(sorted(engine.pool()), expected);
        prop_assert_eq!(engine.history_len(), 0);
    }

    #[test]
    fn each_draw_takes_one_envelope(tiers in tier_list(), seed in any::<u64>(), draws in 0usize..40) {
        let mut engine = PrizePoolEngine::new(tiers, StdRng::seed_from_u64(seed)).unwrap();

        for i in 0..draws {
            let before = engine.pool().to_vec();
            let history_before = engine.history_len();

            match engine.draw_now(format!("guest-{}", i)) {
                Ok(winner) => {
                    prop_assert_eq!(engine.remaining(), before.len() - 1);
                    prop_assert_eq!(engine.history_len(), history_before + 1);
                    prop_assert!(before.contains(&winner.amount));
                    prop_assert_eq!(engine.history().next(), Some(&winner));
                }
                Err(DrawError::PoolExhausted) => {
                    prop_assert!(before.is_empty());
                    prop_assert_eq!(engine.remaining(), 0);
                    prop_assert_eq!(engine.history_len(), history_before);
                }
                Err(e) => prop_assert!(false, "unexpected error: {}", e),
            }
        }
    }

    #[test]
    fn reset_restores_the_same_multiset(tiers in tier_list(), seed in any::<u64>(), draws in 0usize..10) {
        let mut engine = PrizePoolEngine::new(tiers.clone(), StdRng::seed_from_u64(seed)).unwrap();
        for _ in 0..draws {
            let _ = engine.draw_now("guest");
        }

        engine.reset().unwrap();
        let first = engine.pool().to_vec();
        engine.reset().unwrap();

        prop_assert_eq!(sorted(&first), expected_pool(&tiers));
        prop_assert_eq!(sorted(engine.pool()), expected_pool(&tiers));
        prop_assert_eq!(engine.history_len(), 0);
        prop_assert!(engine.current_winner().is_none());
    }
}
