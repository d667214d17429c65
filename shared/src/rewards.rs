use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::config::{RewardStrategy, WheelConfig, FAKE_PIN_NAME};

/// One wedge of the wheel. Generated fresh on every page load and never
/// persisted; the order of the generated list is the wedge order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Reward {
    pub name: String,
    pub code: String,
    pub is_real: bool,
    pub value: u32,
}

impl Reward {
    fn real(name: &str, value: u32, code: String) -> Self {
        Self { name: name.to_string(), code, is_real: true, value }
    }

    fn fake(code: String) -> Self {
        Self { name: FAKE_PIN_NAME.to_string(), code, is_real: false, value: 0 }
    }
}

/// Fixed-length numeric pin code.
pub fn random_pin(length: usize, rng: &mut impl Rng) -> String {
    (0..length).map(|_| char::from(b'0' + rng.gen_range(0..10u8))).collect()
}

/// Builds the shuffled reward list, one entry per wedge.
///
/// Weighted strategy: each real tier contributes
/// `ceil(real_pin_chance * 10 * tier.probability)` entries. Fixed strategy:
/// one entry per configured pin. Either way the list is padded with fake
/// entries up to `wheel_slots` and shuffled uniformly.
pub fn generate_rewards(config: &WheelConfig, rng: &mut impl Rng) -> Vec<Reward> {
    let mut rewards = Vec::with_capacity(config.wheel_slots);

    match &config.strategy {
        RewardStrategy::Weighted => {
            for tier in config.tiers.iter().filter(|t| t.value > 0) {
                let count = (config.real_pin_chance * 10.0 * tier.probability).ceil() as usize;
                for _ in 0..count {
                    rewards.push(Reward::real(&tier.name, tier.value, random_pin(config.pin_length, rng)));
                }
            }
        }
        RewardStrategy::Fixed(pins) => {
            for pin in pins {
                rewards.push(Reward::real(&pin.name, pin.value, random_pin(config.pin_length, rng)));
            }
        }
    }

    if rewards.len() > config.wheel_slots {
        log::warn!(
            "reward table produced {} real pins for {} slots, truncating",
            rewards.len(),
            config.wheel_slots
        );
        rewards.truncate(config.wheel_slots);
    }

    while rewards.len() < config.wheel_slots {
        rewards.push(Reward::fake(random_pin(config.pin_length, rng)));
    }

    rewards.shuffle(rng);
    rewards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PinTier;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_random_pin_is_numeric_and_fixed_length() {
        let pin = random_pin(15, &mut rng());
        assert_eq!(pin.len(), 15);
        assert!(pin.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_weighted_counts_match_config() {
        let config = WheelConfig::new();
        let rewards = generate_rewards(&config, &mut rng());

        assert_eq!(rewards.len(), config.wheel_slots);
        // ceil(0.3 * 10 * 0.1) = 1 of the 200 tier, ceil(0.3 * 10 * 0.2) = 1 of the 100 tier
        assert_eq!(rewards.iter().filter(|r| r.value == 200).count(), 1);
        assert_eq!(rewards.iter().filter(|r| r.value == 100).count(), 1);
        assert_eq!(rewards.iter().filter(|r| r.is_real).count(), 2);
        assert!(rewards.iter().all(|r| r.code.len() == config.pin_length));
        assert!(rewards.iter().filter(|r| !r.is_real).all(|r| r.value == 0));
    }

    #[test]
    fn test_fixed_strategy_mirrors_configured_pins() {
        let mut config = WheelConfig::new();
        config.strategy = RewardStrategy::Fixed(vec![
            PinTier::new("N500 Recharge Pin", 500, 1.0),
            PinTier::new("N500 Recharge Pin", 500, 1.0),
            PinTier::new("N100 Recharge Pin", 100, 1.0),
        ]);

        let rewards = generate_rewards(&config, &mut rng());
        assert_eq!(rewards.len(), config.wheel_slots);
        assert_eq!(rewards.iter().filter(|r| r.value == 500).count(), 2);
        assert_eq!(rewards.iter().filter(|r| r.value == 100).count(), 1);
        assert_eq!(rewards.iter().filter(|r| r.is_real).count(), 3);
    }

    #[test]
    fn test_shuffle_preserves_reward_multiset() {
        let config = WheelConfig::new();
        let rewards = generate_rewards(&config, &mut rng());

        let mut values: Vec<u32> = rewards.iter().map(|r| r.value).collect();
        values.sort_unstable();
        let real_count = (config.real_pin_chance * 10.0 * 0.1f64).ceil() as usize
            + (config.real_pin_chance * 10.0 * 0.2f64).ceil() as usize;
        assert_eq!(values.iter().filter(|&&v| v > 0).count(), real_count);
        assert_eq!(values.len(), config.wheel_slots);
    }

    #[test]
    fn test_deterministic_for_seeded_rng() {
        let config = WheelConfig::new();
        let a = generate_rewards(&config, &mut StdRng::seed_from_u64(42));
        let b = generate_rewards(&config, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_overfull_real_table_truncates_to_slot_count() {
        let mut config = WheelConfig::new();
        config.wheel_slots = 2;
        config.strategy = RewardStrategy::Fixed(vec![
            PinTier::new("N100 Recharge Pin", 100, 1.0),
            PinTier::new("N100 Recharge Pin", 100, 1.0),
            PinTier::new("N100 Recharge Pin", 100, 1.0),
        ]);

        let rewards = generate_rewards(&config, &mut rng());
        assert_eq!(rewards.len(), 2);
    }
}
