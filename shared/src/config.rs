use once_cell::sync::Lazy;
use serde::{Serialize, Deserialize};

/// One tier of the reward table. Tiers with `value == 0` never produce
/// real pins; their probability weight only describes how much of the
/// wheel stays fake.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PinTier {
    pub name: String,
    pub value: u32,
    pub probability: f64,
}

impl PinTier {
    pub fn new(name: &str, value: u32, probability: f64) -> Self {
        Self { name: name.to_string(), value, probability }
    }
}

/// How the reward list gets its real entries.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum RewardStrategy {
    /// Real-pin counts derived from `real_pin_chance` and each tier's weight.
    Weighted,
    /// A hard-coded list of real pins, one wheel entry each.
    Fixed(Vec<PinTier>),
}

/// Everything the wheel needs to know about a play cycle.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelConfig {
    pub total_spins: u32,
    pub cooldown_ms: u64,
    pub real_pin_chance: f64,
    pub wheel_slots: usize,
    pub pin_length: usize,
    pub tiers: Vec<PinTier>,
    pub strategy: RewardStrategy,
}

static DEFAULT_TIERS: Lazy<Vec<PinTier>> = Lazy::new(|| {
    vec![
        PinTier::new("N200 Recharge Pin", 200, 0.1),
        PinTier::new("N100 Recharge Pin", 100, 0.2),
        PinTier::new(FAKE_PIN_NAME, 0, 0.7),
    ]
});

impl WheelConfig {
    pub fn new() -> Self {
        Self {
            total_spins: 5,
            cooldown_ms: 60 * 60 * 1000, // 1 hour
            real_pin_chance: 0.3,
            wheel_slots: 15,
            pin_length: 15,
            tiers: DEFAULT_TIERS.clone(),
            strategy: RewardStrategy::Weighted,
        }
    }

    pub fn cooldown_hours(&self) -> u64 {
        self.cooldown_ms / (60 * 60 * 1000)
    }
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub const FAKE_PIN_NAME: &str = "False Recharge";
