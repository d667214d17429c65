pub mod config;
pub mod player;
pub mod rewards;
pub mod wheel;
