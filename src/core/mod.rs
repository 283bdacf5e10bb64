// Core
pub mod actions;
