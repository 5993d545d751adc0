mod crossover;
mod mutation;
mod selection;
mod survival;

pub use crossover::{Crossover, SinglePointCrossover};

pub use mutation::{Mutation, PerGeneMutation};

pub use survival::{ElitesSelector, ElitesByNumberSelector};

pub use selection::{roulette_wheel_index, RouletteWheelSelection, Selection};
