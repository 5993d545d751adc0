mod cell;
mod environment;
pub mod simulator;

pub use cell::{Cell, ParseCellError};
pub use environment::GridEnvironment;
pub use simulator::{simulate, trace_path, EvaluationRecord};
