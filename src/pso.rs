//! The particle swarm engine searching the joint space of a [`LinkChain`].
//!
//! Each particle is a candidate joint-angle vector (plus the twist angles,
//! when those are searched too). The swarm moves the candidates towards the
//! personal and global bests, scored by the Euclidean distance between the
//! forward-kinematics result and the target.

use crate::constraints::Constraints;
use crate::kinematic_traits::{Angles, Kinematics, Position};
use crate::kinematics_impl::LinkChain;
use crate::solver_error::SolverError;
use nalgebra::DVector;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::f64::consts::PI;

/// A global best below this distance counts as a solved target.
const SOLVED_FITNESS: f64 = 1e-3;

/// Velocity norm of the whole swarm below which an iteration counts as stalled.
const STALL_VELOCITY: f64 = 1e-3;

/// Number of stalled iterations tolerated before the run gives up.
const STALL_LIMIT: u32 = 5;

/// Whether the twist angles (alpha) are supplied as configuration or are
/// part of the search space.
#[derive(Debug, Clone)]
pub enum AlphaMode {
    /// Twists are fixed, one value per link; only theta is searched.
    Fixed(Angles),
    /// Twists are searched together with theta, doubling the dimension.
    Free,
}

/// Swarm behaviour parameters.
#[derive(Debug, Clone, Copy)]
pub struct SwarmParameters {
    /// Number of particles in the swarm.
    pub population: usize,

    /// Iteration budget for a single solve.
    pub max_iterations: usize,

    /// Inertia weight w: how much of the previous velocity survives.
    pub inertia: f64,

    /// Social weight: attraction towards the global best.
    pub social_weight: f64,

    /// Cognitive weight: attraction towards the particle's own best.
    pub cognitive_weight: f64,
}

impl Default for SwarmParameters {
    fn default() -> Self {
        SwarmParameters {
            population: 30,
            max_iterations: 200,
            inertia: 0.5,
            social_weight: 1.5,
            cognitive_weight: 1.5,
        }
    }
}

/// Why a solve terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The global best came within the solved tolerance of the target.
    Converged,
    /// The iteration budget ran out.
    Exhausted,
    /// The swarm velocity collapsed before reaching the target.
    Stalled,
}

/// Outcome of one solve: the per-iteration history of the best candidate and
/// the final score. The histories have one entry per completed iteration
/// plus the initial state, so their length is always `iterations + 1`.
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Best joint rotations after each iteration.
    pub theta_history: Vec<Angles>,

    /// Twist angles matching each theta entry. With [`AlphaMode::Fixed`]
    /// every entry equals the supplied vector; with [`AlphaMode::Free`] the
    /// entries follow the twist suffix of the global best.
    pub alpha_history: Vec<Angles>,

    /// Distance between the global best's end effector and the target.
    pub fitness: f64,

    /// Iterations completed when the run terminated.
    pub iterations: usize,

    pub exit: ExitReason,
}

impl SolveReport {
    /// The final best joint rotations.
    pub fn theta(&self) -> &[f64] {
        self.theta_history.last().map(|t| t.as_slice()).unwrap_or(&[])
    }

    /// The twist angles matching [`SolveReport::theta`].
    pub fn alpha(&self) -> &[f64] {
        self.alpha_history.last().map(|a| a.as_slice()).unwrap_or(&[])
    }
}

// Mutable swarm state of one running solve. Buffers are indexed by particle;
// no two particles share a buffer.
struct Swarm {
    positions: Vec<DVector<f64>>,
    velocities: Vec<DVector<f64>>,
    pbest: Vec<DVector<f64>>,
    pbest_fitness: Vec<f64>,
    gbest: DVector<f64>,
    gbest_fitness: f64,
}

/// Inverse kinematics solver: owns the chain, the twist mode, the optional
/// joint constraints and the swarm parameters. All configuration is
/// validated on construction; `solve_*` cannot fail afterwards.
pub struct PsoIkSolver {
    chain: LinkChain,
    alpha: AlphaMode,
    constraints: Option<Constraints>,
    parameters: SwarmParameters,
}

impl PsoIkSolver {
    /// Creates a solver without joint constraints.
    pub fn new(
        chain: LinkChain,
        alpha: AlphaMode,
        parameters: SwarmParameters,
    ) -> Result<Self, SolverError> {
        Self::with_optional_constraints(chain, alpha, parameters, None)
    }

    /// Creates a solver that keeps every candidate within the given per-joint
    /// angle limits.
    pub fn new_with_constraints(
        chain: LinkChain,
        alpha: AlphaMode,
        parameters: SwarmParameters,
        constraints: Constraints,
    ) -> Result<Self, SolverError> {
        Self::with_optional_constraints(chain, alpha, parameters, Some(constraints))
    }

    fn with_optional_constraints(
        chain: LinkChain,
        alpha: AlphaMode,
        parameters: SwarmParameters,
        constraints: Option<Constraints>,
    ) -> Result<Self, SolverError> {
        if parameters.population == 0 {
            return Err(SolverError::InvalidPopulation(parameters.population));
        }
        if parameters.max_iterations == 0 {
            return Err(SolverError::InvalidIterationBudget(parameters.max_iterations));
        }
        if let AlphaMode::Fixed(values) = &alpha {
            if values.len() != chain.dof() {
                return Err(SolverError::DimensionMismatch {
                    expected: chain.dof(),
                    found: values.len(),
                });
            }
        }
        if let Some(limits) = &constraints {
            if limits.dof() != chain.dof() {
                return Err(SolverError::DimensionMismatch {
                    expected: chain.dof(),
                    found: limits.dof(),
                });
            }
        }
        Ok(PsoIkSolver {
            chain,
            alpha,
            constraints,
            parameters,
        })
    }

    /// Search dimension: the number of joints, doubled when the twists are
    /// searched too.
    pub fn dimension(&self) -> usize {
        match self.alpha {
            AlphaMode::Fixed(_) => self.chain.dof(),
            AlphaMode::Free => 2 * self.chain.dof(),
        }
    }

    /// Solves for the target using the thread-local random generator.
    pub fn solve(&self, target: &Position) -> SolveReport {
        self.solve_with_rng(target, &mut rand::rng())
    }

    /// Solves for the target with a seeded generator; the same seed always
    /// produces the same report.
    pub fn solve_seeded(&self, target: &Position, seed: u64) -> SolveReport {
        self.solve_with_rng(target, &mut StdRng::seed_from_u64(seed))
    }

    /// Solves for the target, drawing all randomness from the given generator.
    pub fn solve_with_rng(&self, target: &Position, rng: &mut impl Rng) -> SolveReport {
        let mut swarm = self.initialize(rng, target);

        let mut theta_history = Vec::with_capacity(self.parameters.max_iterations + 1);
        let mut alpha_history = Vec::with_capacity(self.parameters.max_iterations + 1);
        self.record(&swarm, &mut theta_history, &mut alpha_history);

        // The stall counter accumulates over the whole run and never resets
        // on a fast iteration.
        let mut stalled_iterations: u32 = 0;

        for iteration in 1..=self.parameters.max_iterations {
            for i in 0..self.parameters.population {
                let fitness = self.fitness(&swarm.positions[i], target);

                if fitness < swarm.pbest_fitness[i] {
                    swarm.pbest[i].copy_from(&swarm.positions[i]);
                    swarm.pbest_fitness[i] = fitness;
                    if fitness < swarm.gbest_fitness {
                        swarm.gbest.copy_from(&swarm.positions[i]);
                        swarm.gbest_fitness = fitness;
                        if fitness < SOLVED_FITNESS {
                            self.record(&swarm, &mut theta_history, &mut alpha_history);
                            return SolveReport {
                                theta_history,
                                alpha_history,
                                fitness: swarm.gbest_fitness,
                                iterations: iteration,
                                exit: ExitReason::Converged,
                            };
                        }
                    }
                }

                let r1: f64 = rng.random();
                let r2: f64 = rng.random();
                let social = (&swarm.gbest - &swarm.positions[i])
                    * (self.parameters.social_weight * r1);
                let cognitive = (&swarm.pbest[i] - &swarm.positions[i])
                    * (self.parameters.cognitive_weight * r2);
                let velocity =
                    &swarm.velocities[i] * self.parameters.inertia + social + cognitive;
                swarm.positions[i] += &velocity;
                swarm.velocities[i] = velocity;

                if let Some(limits) = &self.constraints {
                    limits.apply(&mut swarm.positions[i], &mut swarm.velocities[i], rng);
                }
            }

            self.record(&swarm, &mut theta_history, &mut alpha_history);

            if iteration > 1 && self.velocity_norm(&swarm) < STALL_VELOCITY {
                stalled_iterations += 1;
                if stalled_iterations > STALL_LIMIT {
                    return SolveReport {
                        theta_history,
                        alpha_history,
                        fitness: swarm.gbest_fitness,
                        iterations: iteration,
                        exit: ExitReason::Stalled,
                    };
                }
            }
        }

        SolveReport {
            theta_history,
            alpha_history,
            fitness: swarm.gbest_fitness,
            iterations: self.parameters.max_iterations,
            exit: ExitReason::Exhausted,
        }
    }

    fn initialize(&self, rng: &mut impl Rng, target: &Position) -> Swarm {
        let dimension = self.dimension();
        let population = self.parameters.population;

        let mut positions = Vec::with_capacity(population);
        for _ in 0..population {
            let mut position =
                DVector::from_fn(dimension, |_, _| rng.random::<f64>() * 2.0 * PI);
            if let Some(limits) = &self.constraints {
                // Joint angles start inside their limits; a free twist suffix
                // keeps its full-circle draw.
                for d in 0..limits.dof() {
                    position[d] =
                        limits.from[d] + rng.random::<f64>() * (limits.to[d] - limits.from[d]);
                }
            }
            positions.push(position);
        }

        let velocities = vec![DVector::zeros(dimension); population];
        let pbest: Vec<DVector<f64>> = positions.clone();
        let pbest_fitness: Vec<f64> = positions
            .iter()
            .map(|position| self.fitness(position, target))
            .collect();

        let best = pbest_fitness
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap_or(0);

        Swarm {
            gbest: positions[best].clone(),
            gbest_fitness: pbest_fitness[best],
            positions,
            velocities,
            pbest,
            pbest_fitness,
        }
    }

    /// Distance between the end effector of a candidate and the target.
    /// Candidate dimensions are fixed at construction, so the kinematic
    /// query cannot fail here.
    fn fitness(&self, position: &DVector<f64>, target: &Position) -> f64 {
        let theta = &position.as_slice()[..self.chain.dof()];
        let alpha = self.alpha_of(position);
        match self.chain.forward(theta, alpha) {
            Ok(end) => (end - target).norm(),
            Err(_) => f64::INFINITY,
        }
    }

    fn alpha_of<'a>(&'a self, position: &'a DVector<f64>) -> &'a [f64] {
        match &self.alpha {
            AlphaMode::Fixed(values) => values,
            AlphaMode::Free => &position.as_slice()[self.chain.dof()..],
        }
    }

    fn record(&self, swarm: &Swarm, theta_history: &mut Vec<Angles>, alpha_history: &mut Vec<Angles>) {
        theta_history.push(swarm.gbest.as_slice()[..self.chain.dof()].to_vec());
        alpha_history.push(self.alpha_of(&swarm.gbest).to_vec());
    }

    // Frobenius norm of the velocities of the whole swarm.
    fn velocity_norm(&self, swarm: &Swarm) -> f64 {
        swarm
            .velocities
            .iter()
            .map(|velocity| velocity.norm_squared())
            .sum::<f64>()
            .sqrt()
    }
}
