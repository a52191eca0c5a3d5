//! End-to-end training runs against a scripted environment.
//!
//! The default configuration mirrors the classic cart-pole setup: four
//! observation dimensions bucketed as (1, 1, 6, 3) with the velocity
//! dimensions rebounded by the discretizer config, discount 0.98, and a
//! 100-episode success streak as the convergence signal.

use rand::rngs::StdRng;
use rand::SeedableRng;

use gridq::{
    AgentConfig, DimensionBounds, ScriptedEnvironment, TerminationCause, Trainer,
};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_test_writer()
        .try_init();
}

/// Bounds as a cart-pole-style environment would report them: position and
/// angle are tight, the velocity dimensions effectively unbounded. The
/// default discretizer config overrides dimensions 1 and 3 to [-1, 1] and
/// [-50deg, 50deg].
fn cart_pole_like(episode_lengths: Vec<usize>) -> ScriptedEnvironment {
    let bounds = vec![
        DimensionBounds::new(-4.8, 4.8),
        DimensionBounds::new(-1.0e3, 1.0e3),
        DimensionBounds::new(-0.42, 0.42),
        DimensionBounds::new(-1.0e3, 1.0e3),
    ];
    ScriptedEnvironment::new(bounds, 2, episode_lengths)
}

#[test]
fn converges_when_every_episode_survives_the_full_run() {
    init_logging();

    let config = AgentConfig::default();
    let streak_target = config.training.success_streak_target;

    let mut env = cart_pole_like(vec![250]);
    let mut trainer = Trainer::new(config, &env).expect("default config must be valid");
    let mut rng = StdRng::seed_from_u64(0);

    let report = trainer.train(&mut env, &mut rng).expect("run must finish");

    assert_eq!(report.cause, TerminationCause::Converged);
    assert_eq!(report.episodes, streak_target + 1);
    assert!(report.outcomes.iter().all(|o| o.success));
    assert!(!trainer.q_table().is_empty());
}

#[test]
fn one_short_episode_pushes_convergence_back() {
    init_logging();

    let mut config = AgentConfig::default();
    config.training.success_streak_target = 10;

    // Episode 4 falls over after 40 steps, well below the 199-step success
    // threshold, so the streak restarts from zero afterwards.
    let mut env = cart_pole_like(vec![250, 250, 250, 250, 40, 250]);
    let mut trainer = Trainer::new(config, &env).unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let report = trainer.train(&mut env, &mut rng).unwrap();

    assert_eq!(report.cause, TerminationCause::Converged);
    // 4 successes, 1 failure, then 11 successes in a row.
    assert_eq!(report.episodes, 16);
    assert!(!report.outcomes[4].success);
}

#[test]
fn exhaustion_is_reported_when_nothing_ever_succeeds() {
    init_logging();

    let mut config = AgentConfig::default();
    config.training.max_episodes = 25;

    let mut env = cart_pole_like(vec![10]);
    let mut trainer = Trainer::new(config, &env).unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let report = trainer.train(&mut env, &mut rng).unwrap();

    assert_eq!(report.cause, TerminationCause::EpisodeLimit);
    assert_eq!(report.episodes, 25);
    assert!(report.outcomes.iter().all(|o| !o.success));
}
