// Builder Pattern - computer configurator
//
// The builder assembles a Computer part by part; BuildPlan presets play
// the director, driving the builder with ready-made configurations.

pub mod computer;
pub mod plan;

pub use computer::{Computer, ComputerBuilder};
pub use plan::BuildPlan;
