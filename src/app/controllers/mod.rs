pub(in crate::app) mod language_controller;
pub mod screen_controller;
