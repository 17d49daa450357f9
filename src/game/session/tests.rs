use super::*;
use crate::game::math::{add, distance, length, wrapped_delta};
use crate::game::types::{BoundsMode, MovementMode};

const DT: f64 = 0.016;

fn make_config(seed: u64) -> SimConfig {
    let mut config = SimConfig::default();
    config.seed = Some(seed);
    config.score.start_seconds = 600.0;
    config
}

fn steer(direction: Point) -> TickInput {
    TickInput {
        direction: Some(direction),
        drag_target: None,
    }
}

fn drag(target: Point) -> TickInput {
    TickInput {
        direction: None,
        drag_target: Some(target),
    }
}

fn assert_length_invariant(session: &GameSession, report: TickReport) {
    let body = session.body();
    let capacity = body.target_segments() * body.points_per_segment();
    let len = body.body_points().len();
    if report.ate_food {
        assert_eq!(len + body.points_per_segment(), capacity);
    } else {
        assert_eq!(len, capacity);
    }
}

#[test]
fn new_session_spawns_body_and_food() {
    let session = GameSession::new(&make_config(1));
    let start = session.board().start_position();
    assert_eq!(session.head().position(), start);
    assert_eq!(session.body().target_segments(), 2);
    assert_eq!(session.body().body_points().len(), 2);
    assert_eq!(session.body().total_segments(), 3);

    let food = session.food().position().expect("food spawned");
    for point in session.occupied_positions() {
        assert!(distance(point, food) > 0.5);
    }
}

#[test]
fn eating_food_grows_scores_and_respawns() {
    let mut session = GameSession::new(&make_config(1));
    let placed = add(session.head().position(), Point::new(1.0, 0.0));
    session.food.place(placed);

    let mut ate_at = None;
    for tick in 0..30 {
        let report = session.tick(DT, steer(Point::new(1.0, 0.0)));
        if report.ate_food {
            ate_at = Some(tick);
            break;
        }
    }
    assert_eq!(ate_at, Some(9));
    assert_eq!(session.score(), 10);
    assert_eq!(session.body().target_segments(), 3);
    assert_ne!(session.food().position(), Some(placed));
    assert_eq!(session.active_effects().len(), 1);

    // The extra segment appears on the following rebuild.
    assert_eq!(session.body().body_points().len(), 2);
    session.tick(DT, steer(Point::new(1.0, 0.0)));
    assert_eq!(session.body().body_points().len(), 3);
}

#[test]
fn eat_effects_return_to_pool_after_lifetime() {
    let mut config = make_config(2);
    config.effect_pool_size = 1;
    config.effect_lifetime_ticks = 3;
    let mut session = GameSession::new(&config);

    let head = session.head().position();
    session.food.place(head);
    let report = session.tick(DT, TickInput::default());
    assert!(report.ate_food);
    assert_eq!(session.active_effects().len(), 1);
    assert_eq!(session.effects.available(), 0);

    session.food.place(Point::ZERO);
    session.tick(DT, TickInput::default());
    session.tick(DT, TickInput::default());
    assert!(session.active_effects().is_empty());
    assert_eq!(session.effects.available(), 1);
}

#[test]
fn biting_the_body_trims_and_deducts_score() {
    let mut config = make_config(5);
    config.head.turn_rate = 40.0;
    config.body.points_per_segment = 2;
    let mut session = GameSession::new(&config);
    session.food.place(Point::ZERO);
    session.body.set_target_segments(20);
    for _ in 0..3 {
        session.score.add_food_points();
    }

    let mut bite = None;
    for _ in 0..400 {
        let before = session.body().target_segments();
        let direction = session.head().direction();
        let report = session.tick(DT, steer(Point::new(-direction.y, direction.x)));
        if report.removed_segments > 0 {
            bite = Some((before, report.removed_segments));
            break;
        }
    }

    let (before, removed) = bite.expect("snake should bite itself while circling");
    let after = session.body().target_segments();
    assert_eq!(after, before - removed);
    assert!(after >= 2, "dead zone segments are never trimmed");
    assert_eq!(session.score(), (30 - removed as i64 * 10).max(0));
    assert_eq!(
        session.body().body_points().len(),
        after * session.body().points_per_segment()
    );
}

#[test]
fn timer_end_stops_the_simulation() {
    let mut config = make_config(3);
    config.score.start_seconds = 0.05;
    let mut session = GameSession::new(&config);

    let mut finished_at = None;
    for tick in 1..=10 {
        if session.tick(DT, TickInput::default()).finished {
            finished_at = Some(tick);
            break;
        }
    }
    assert_eq!(finished_at, Some(4));

    let head = session.head().position();
    let report = session.tick(DT, steer(Point::new(0.0, 1.0)));
    assert!(report.finished);
    assert_eq!(session.tick_count(), 4);
    assert_eq!(session.head().position(), head);
}

#[test]
fn chasing_food_keeps_body_length_consistent() {
    let mut session = GameSession::new(&make_config(42));
    let mut eaten = 0;
    for _ in 0..3000 {
        let target = session.food().position().unwrap_or(Point::ZERO);
        let report = session.tick(DT, drag(target));
        assert_length_invariant(&session, report);
        if report.ate_food {
            eaten += 1;
        }
    }
    assert!(eaten > 0);
}

#[test]
fn reset_restores_spawn_state() {
    let mut session = GameSession::new(&make_config(9));
    let head = session.head().position();
    session.food.place(head);
    for _ in 0..20 {
        session.tick(DT, steer(Point::new(0.0, 1.0)));
    }
    assert!(session.score() > 0);

    session.reset();
    assert_eq!(session.tick_count(), 0);
    assert_eq!(session.score(), 0);
    assert_eq!(session.body().target_segments(), 2);
    assert_eq!(session.head().position(), session.board().start_position());
    assert!(session.active_effects().is_empty());
    assert!(!session.timer().has_ended());
}

#[test]
fn snapshot_serializes_boundary_view() {
    let session = GameSession::new(&make_config(4));
    let value = serde_json::to_value(session.snapshot()).expect("snapshot json");
    assert_eq!(value["totalSegments"], 3);
    assert_eq!(value["body"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["sessionId"], session.id().to_string());
    assert_eq!(value["finished"], false);
}

#[test]
fn wrapping_head_keeps_body_behind_it() {
    let mut config = make_config(6);
    config.head.bounds = BoundsMode::Wrap;
    let mut session = GameSession::new(&config);
    session.food.place(Point::ZERO);

    // 250 ticks at 0.064 carries the head from x=12 across the seam to x=4.
    for _ in 0..250 {
        session.tick(DT, steer(Point::new(1.0, 0.0)));
    }
    let head = session.head().position();
    assert!(head.x < 12.0);

    let size = session.board().world_size();
    let mut previous = head;
    for point in session.body().body_points() {
        let delta = wrapped_delta(previous, *point, size);
        assert!((length(delta) - 0.5).abs() < 1e-6, "{point:?} after {previous:?}");
        assert!(delta.x < 0.0, "body point {point:?} is ahead of {previous:?}");
        previous = *point;
    }
}

#[test]
fn grid_movement_lays_body_on_cells() {
    let mut config = make_config(8);
    config.head.movement = MovementMode::Grid;
    config.head.move_interval = 0.1;
    config.body.segment_spacing = 1.0;
    let mut session = GameSession::new(&config);
    session.food.place(Point::ZERO);

    for _ in 0..10 {
        session.tick(0.05, steer(Point::new(1.0, 0.0)));
    }
    assert_eq!(session.head().position(), Point::new(17.0, 8.0));
    for _ in 0..4 {
        session.tick(0.05, steer(Point::new(0.0, 1.0)));
    }
    assert_eq!(session.head().position(), Point::new(17.0, 10.0));

    let body = session.body().body_points();
    assert_eq!(body.len(), 2);
    assert!(distance(body[0], Point::new(17.0, 9.0)) < 1e-9);
    assert!(distance(body[1], Point::new(17.0, 8.0)) < 1e-9);
}
