use rand::RngCore;

use super::algorithm::GeneticAlgorithm;
use super::config::default_generation_cap;
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The best chromosome is optimal.
    Converged,
    /// The generation cap was passed first.
    Capped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Finished(Termination),
}

/// Drives a [`GeneticAlgorithm`] one generation per [`RunController::step`]
/// call. Whatever owns the controller decides when to call it (a timer, a
/// loop, a test).
pub struct RunController<R> {
    algorithm: GeneticAlgorithm<R>,
    generation_cap: usize,
    state: RunState,
}

impl<R: RngCore> RunController<R> {
    pub fn new(algorithm: GeneticAlgorithm<R>, generation_cap: usize) -> Self {
        Self {
            algorithm,
            generation_cap,
            state: RunState::Idle,
        }
    }

    /// Uses [`default_generation_cap`] for the algorithm's grid size.
    pub fn with_default_cap(algorithm: GeneticAlgorithm<R>) -> Self {
        let cap = default_generation_cap(algorithm.environment().size());
        Self::new(algorithm, cap)
    }

    pub fn start(&mut self) -> RunState {
        if self.state == RunState::Idle {
            if self.algorithm.is_optimal() {
                log::info!("Run already optimal at generation {}", self.algorithm.generation());
                self.state = RunState::Finished(Termination::Converged);
            } else {
                log::info!("Run started at generation {}", self.algorithm.generation());
                self.state = RunState::Running;
            }
        }
        self.state
    }

    /// Pauses between generations; `start` resumes from the same population.
    pub fn stop(&mut self) -> RunState {
        if self.state == RunState::Running {
            log::info!("Run stopped at generation {}", self.algorithm.generation());
            self.state = RunState::Idle;
        }
        self.state
    }

    /// Advances one generation when running and applies the termination rule.
    pub fn step(&mut self) -> RunState {
        if self.state != RunState::Running {
            return self.state;
        }

        self.algorithm.evolve_one_generation();
        let generation = self.algorithm.generation();

        if self.algorithm.is_optimal() {
            log::info!("Converged at generation {}", generation);
            self.state = RunState::Finished(Termination::Converged);
        } else if generation > self.generation_cap {
            log::info!("Generation cap {} reached", self.generation_cap);
            self.state = RunState::Finished(Termination::Capped);
        }
        self.state
    }

    /// Starts the run and steps it to completion, calling `on_generation` after
    /// every generation.
    pub fn run_with_callback<F>(&mut self, mut on_generation: F) -> Termination
    where
        F: FnMut(&GeneticAlgorithm<R>),
    {
        loop {
            let state = match self.state {
                RunState::Idle => self.start(),
                RunState::Running => {
                    let state = self.step();
                    on_generation(&self.algorithm);
                    state
                }
                finished => finished,
            };
            if let RunState::Finished(termination) = state {
                return termination;
            }
        }
    }

    pub fn run(&mut self) -> Termination {
        self.run_with_callback(|_| {})
    }

    /// Throws the run away and builds a new one from the same configuration.
    /// A run built on a caller-supplied environment keeps that environment;
    /// otherwise the obstacles are sampled again from `rng`.
    pub fn reset(&mut self, rng: R) -> Result<RunState, ConfigError> {
        let config = self.algorithm.config().clone();
        self.algorithm = if self.algorithm.has_fixed_environment() {
            GeneticAlgorithm::with_environment(config, self.algorithm.environment().clone(), rng)?
        } else {
            GeneticAlgorithm::new(config, rng)?
        };
        self.state = RunState::Idle;
        log::info!("Run reset");
        Ok(self.state)
    }
}

impl<R> RunController<R> {
    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn generation_cap(&self) -> usize {
        self.generation_cap
    }

    pub fn algorithm(&self) -> &GeneticAlgorithm<R> {
        &self.algorithm
    }

    pub fn into_algorithm(self) -> GeneticAlgorithm<R> {
        self.algorithm
    }
}
