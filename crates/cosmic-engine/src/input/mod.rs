pub mod aggregator;
pub mod controls;
pub mod gamepad;
pub mod keyboard;
pub mod queue;
pub mod touch;
