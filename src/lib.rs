pub mod config;
pub mod controller;
pub mod driver;
pub mod engine;
pub mod events;
pub mod grid;
pub mod io;
pub mod pattern;
pub mod render;
pub mod rule_set;
pub mod seed;
