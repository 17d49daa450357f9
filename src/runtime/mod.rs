use crate::config::SimConfig;
use crate::game::session::GameSession;
use crate::game::types::{Point, SessionSnapshot, TickInput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

const PROGRESS_LOG_TICKS: u64 = 120;

/// Steers toward the active food item, or wanders when there is none.
pub fn autopilot_input<R: Rng + ?Sized>(session: &GameSession, rng: &mut R) -> TickInput {
    match session.food().position() {
        Some(food) => TickInput {
            direction: None,
            drag_target: Some(food),
        },
        None => {
            let angle = rng.gen::<f64>() * std::f64::consts::PI * 2.0;
            TickInput {
                direction: Some(Point::new(angle.cos(), angle.sin())),
                drag_target: None,
            }
        }
    }
}

/// Drives one session on a fixed interval until the round timer ends, the
/// optional run limit is hit, or the process receives Ctrl-C.
pub async fn run_headless(config: SimConfig) -> anyhow::Result<SessionSnapshot> {
    let mut session = GameSession::new(&config);
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_entropy(),
    };
    let dt = config.tick_seconds();
    let max_ticks = config
        .run_seconds
        .map(|seconds| ((seconds * 1000.0) / config.tick_ms as f64).ceil().max(1.0) as u64);

    tracing::info!(
        session = %session.id(),
        tick_ms = config.tick_ms,
        ?max_ticks,
        "headless run started"
    );

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);
    let mut interval = tokio::time::interval(Duration::from_millis(config.tick_ms));
    loop {
        tokio::select! {
            _ = interval.tick() => {}
            result = &mut shutdown => {
                result?;
                tracing::info!(session = %session.id(), "interrupted");
                break;
            }
        }

        let input = autopilot_input(&session, &mut rng);
        let report = session.tick(dt, input);

        let tick = session.tick_count();
        if tick % PROGRESS_LOG_TICKS == 0 {
            tracing::debug!(
                session = %session.id(),
                tick,
                segments = session.body().total_segments(),
                score = session.score(),
                "progress"
            );
        }
        if report.finished {
            break;
        }
        if max_ticks.is_some_and(|limit| tick >= limit) {
            tracing::info!(session = %session.id(), tick, "run limit reached");
            break;
        }
    }

    Ok(session.snapshot())
}
