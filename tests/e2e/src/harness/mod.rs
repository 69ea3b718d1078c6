//! Test harness


pub use simulator::{DayLog, LearnerSimulator, SimulationReport};
