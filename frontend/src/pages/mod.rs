pub mod home;
pub mod prize_wheel;
