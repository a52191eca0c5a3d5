//! Training Loop
//!
//! Orchestrates episodes: drives the environment collaborator, discretizes
//! observations, selects actions, applies Q-table updates, and tracks the
//! consecutive-success streak that decides convergence.

use rand::Rng;
use tracing::{debug, info, warn};

use crate::algorithms::{EpsilonGreedy, QTable};
use crate::config::AgentConfig;
use crate::core::{DiscreteState, StateDiscretizer};
use crate::environment::Environment;
use crate::error::{GridqError, Result};
use crate::schedule::Schedules;

/// Why a training run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationCause {
    /// The consecutive-success streak exceeded its target
    Converged,
    /// The episode budget ran out first
    EpisodeLimit,
}

/// Summary of one completed episode
#[derive(Debug, Clone)]
pub struct EpisodeOutcome {
    /// Zero-based episode index
    pub episode: usize,
    /// Steps executed before done or the step bound
    pub steps: usize,
    /// Accumulated reward
    pub total_reward: f64,
    /// Whether the environment signalled done
    pub done: bool,
    /// Whether the episode counted toward the success streak
    pub success: bool,
    /// Exploration rate the episode ran with
    pub exploration_rate: f64,
    /// Learning rate the episode ran with
    pub learning_rate: f64,
}

/// Final result of a training run
#[derive(Debug, Clone)]
pub struct TrainingReport {
    /// Episodes completed
    pub episodes: usize,
    /// Why training stopped
    pub cause: TerminationCause,
    /// Per-episode summaries, in order
    pub outcomes: Vec<EpisodeOutcome>,
}

/// Tabular Q-learning trainer
///
/// Owns the Q-table and all run state, so several agents can train
/// independently without interfering with each other. The trainer is fully
/// sequential: updates are strictly ordered by step within an episode and
/// episodes by index.
pub struct Trainer {
    config: AgentConfig,
    discretizer: StateDiscretizer,
    schedules: Schedules,
    selector: EpsilonGreedy,
    q_table: QTable,
    success_streak: usize,
}

impl Trainer {
    /// Validate the configuration against the environment and set up a run
    ///
    /// Any configuration problem (degenerate bounds, zero bucket counts, an
    /// empty action space) is reported here, before an episode can start.
    pub fn new<E: Environment>(config: AgentConfig, environment: &E) -> Result<Self> {
        config.validate()?;

        let action_space = environment.action_space();
        if action_space.size() == 0 {
            return Err(GridqError::Config(
                "environment action space is empty".into(),
            ));
        }

        let discretizer =
            StateDiscretizer::new(environment.observation_bounds(), &config.discretizer)?;

        Ok(Self {
            discretizer,
            schedules: Schedules::new(&config.schedule),
            selector: EpsilonGreedy::new(action_space),
            q_table: QTable::new(action_space),
            success_streak: 0,
            config,
        })
    }

    /// Run episodes until the success streak converges or the episode
    /// budget is exhausted
    ///
    /// Environment failures propagate out immediately; a step is not
    /// idempotent, so there is no retry.
    pub fn train<E: Environment, R: Rng>(
        &mut self,
        environment: &mut E,
        rng: &mut R,
    ) -> Result<TrainingReport> {
        let max_episodes = self.config.training.max_episodes;
        let streak_target = self.config.training.success_streak_target;

        let mut outcomes = Vec::new();
        let mut cause = TerminationCause::EpisodeLimit;

        for episode in 0..max_episodes {
            let exploration_rate = self.schedules.exploration_rate(episode);
            let learning_rate = self.schedules.learning_rate(episode);

            let outcome =
                match self.run_episode(environment, rng, episode, exploration_rate, learning_rate)
                {
                    Ok(outcome) => outcome,
                    Err(error) => {
                        warn!(
                            episodes_completed = outcomes.len(),
                            streak = self.success_streak,
                            "training run aborted: {error}"
                        );
                        return Err(error);
                    }
                };

            if outcome.success {
                self.success_streak += 1;
            } else {
                self.success_streak = 0;
            }

            info!(
                episode = outcome.episode,
                steps = outcome.steps,
                streak = self.success_streak,
                explore_rate = exploration_rate,
                learning_rate = learning_rate,
                total_reward = outcome.total_reward,
                "episode finished"
            );

            outcomes.push(outcome);

            if self.success_streak > streak_target {
                debug!(
                    streak = self.success_streak,
                    target = streak_target,
                    "success streak target exceeded"
                );
                cause = TerminationCause::Converged;
                break;
            }
        }

        Ok(TrainingReport {
            episodes: outcomes.len(),
            cause,
            outcomes,
        })
    }

    fn run_episode<E: Environment, R: Rng>(
        &mut self,
        environment: &mut E,
        rng: &mut R,
        episode: usize,
        exploration_rate: f64,
        learning_rate: f64,
    ) -> Result<EpisodeOutcome> {
        let observation = environment.reset()?;
        let mut state: DiscreteState = self.discretizer.discretize(&observation)?;
        let mut total_reward = 0.0;
        let mut steps = 0;
        let mut done = false;

        while steps < self.config.training.max_steps_per_episode && !done {
            let action = self
                .selector
                .select(&self.q_table, &state, exploration_rate, rng);
            let step = environment.step(action)?;
            let next_state = self.discretizer.discretize(&step.observation)?;

            self.q_table.update(
                &state,
                action,
                step.reward,
                &next_state,
                learning_rate,
                self.config.training.discount_factor,
            )?;

            state = next_state;
            total_reward += step.reward;
            steps += 1;
            done = step.done;
        }

        let success = steps >= self.config.training.success_step_threshold;

        Ok(EpisodeOutcome {
            episode,
            steps,
            total_reward,
            done,
            success,
            exploration_rate,
            learning_rate,
        })
    }

    /// The learned Q-table
    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Current consecutive-success count
    pub fn success_streak(&self) -> usize {
        self.success_streak
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::core::DimensionBounds;
    use crate::environment::ScriptedEnvironment;

    fn small_config(streak_target: usize) -> AgentConfig {
        let mut config = AgentConfig::default();
        config.discretizer.buckets = vec![3];
        config.discretizer.bound_overrides = Vec::new();
        config.training.max_steps_per_episode = 10;
        config.training.success_step_threshold = 5;
        config.training.success_streak_target = streak_target;
        config
    }

    fn scripted(lengths: Vec<usize>) -> ScriptedEnvironment {
        ScriptedEnvironment::new(vec![DimensionBounds::new(-1.0, 1.0)], 2, lengths)
    }

    #[test]
    fn test_converges_after_streak_target_plus_one_successes() {
        let mut env = scripted(vec![10]);
        let mut trainer = Trainer::new(small_config(3), &env).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let report = trainer.train(&mut env, &mut rng).unwrap();

        assert_eq!(report.cause, TerminationCause::Converged);
        assert_eq!(report.episodes, 4);
        assert!(report.outcomes.iter().all(|o| o.success));
        assert_eq!(trainer.success_streak(), 4);
    }

    #[test]
    fn test_failed_episode_resets_the_streak() {
        // Episode 2 survives only 2 steps, below the threshold of 5.
        let mut env = scripted(vec![10, 10, 2, 10]);
        let mut trainer = Trainer::new(small_config(3), &env).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let report = trainer.train(&mut env, &mut rng).unwrap();

        assert_eq!(report.cause, TerminationCause::Converged);
        assert_eq!(report.episodes, 7);
        assert!(!report.outcomes[2].success);
        assert!(report.outcomes[2].done);
        assert_eq!(report.outcomes[2].steps, 2);
    }

    #[test]
    fn test_exhaustion_when_no_episode_succeeds() {
        let mut config = small_config(3);
        config.training.max_episodes = 8;

        let mut env = scripted(vec![1]);
        let mut trainer = Trainer::new(config, &env).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let report = trainer.train(&mut env, &mut rng).unwrap();

        assert_eq!(report.cause, TerminationCause::EpisodeLimit);
        assert_eq!(report.episodes, 8);
        assert_eq!(trainer.success_streak(), 0);
        assert!(report.outcomes.iter().all(|o| !o.success));
    }

    #[test]
    fn test_step_bound_cuts_an_episode_that_never_finishes() {
        // Script longer than the step bound: the loop exits at the bound
        // without a done signal, and the step count still counts as success.
        let mut env = scripted(vec![100]);
        let mut trainer = Trainer::new(small_config(0), &env).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let report = trainer.train(&mut env, &mut rng).unwrap();

        assert_eq!(report.outcomes[0].steps, 10);
        assert!(!report.outcomes[0].done);
        assert!(report.outcomes[0].success);
        assert_eq!(report.cause, TerminationCause::Converged);
    }

    #[test]
    fn test_updates_populate_the_q_table() {
        let mut env = scripted(vec![10]);
        let mut trainer = Trainer::new(small_config(0), &env).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        trainer.train(&mut env, &mut rng).unwrap();

        assert!(!trainer.q_table().is_empty());
    }

    #[test]
    fn test_empty_action_space_is_a_configuration_error() {
        let env = ScriptedEnvironment::new(vec![DimensionBounds::new(-1.0, 1.0)], 0, vec![1]);
        let result = Trainer::new(small_config(3), &env);

        assert!(matches!(result, Err(GridqError::Config(_))));
    }

    #[test]
    fn test_degenerate_environment_bounds_abort_before_training() {
        let env = ScriptedEnvironment::new(vec![DimensionBounds::new(2.0, 2.0)], 2, vec![1]);
        let result = Trainer::new(small_config(3), &env);

        assert!(matches!(result, Err(GridqError::DegenerateBounds { .. })));
    }

    #[test]
    fn test_same_seed_reproduces_the_run() {
        let config = small_config(2);

        let run = |seed: u64| {
            let mut env = scripted(vec![10, 3, 10, 10]);
            let mut trainer = Trainer::new(config.clone(), &env).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            trainer.train(&mut env, &mut rng).unwrap()
        };

        let a = run(7);
        let b = run(7);
        assert_eq!(a.episodes, b.episodes);
        for (x, y) in a.outcomes.iter().zip(&b.outcomes) {
            assert_eq!(x.steps, y.steps);
            assert_eq!(x.total_reward, y.total_reward);
        }
    }
}
