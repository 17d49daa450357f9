use super::board::Board;
use super::food::FoodSpawner;
use super::head::HeadController;
use super::pool::EffectPool;
use super::score::ScoreTracker;
use super::snake::SnakeBody;
use super::timer::CountdownTimer;
use super::types::{BoundsMode, Point, SessionSnapshot, TickInput, TickReport};
use crate::config::SimConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EatEffect {
    pub slot: usize,
    pub position: Point,
    pub remaining_ticks: u32,
}

/// One snake on one board. Owns every collaborator and advances them in a
/// fixed order per tick.
#[derive(Debug)]
pub struct GameSession {
    id: Uuid,
    tick: u64,
    board: Board,
    head: HeadController,
    body: SnakeBody,
    food: FoodSpawner,
    score: ScoreTracker,
    timer: CountdownTimer,
    effects: EffectPool<EatEffect>,
    active_effects: Vec<EatEffect>,
    effect_lifetime_ticks: u32,
    eat_radius: f64,
    collision_radius: f64,
    rng: StdRng,
}

impl GameSession {
    pub fn new(config: &SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut session = Self {
            id: Uuid::new_v4(),
            tick: 0,
            board: Board::new(&config.board),
            head: HeadController::new(&config.head),
            body: SnakeBody::new(&config.body),
            food: FoodSpawner::new(config.board.food_min_distance),
            score: ScoreTracker::new(&config.score),
            timer: CountdownTimer::new(config.score.start_seconds),
            effects: EffectPool::with_capacity(config.effect_pool_size, |slot| EatEffect {
                slot,
                position: Point::ZERO,
                remaining_ticks: 0,
            }),
            active_effects: Vec::new(),
            effect_lifetime_ticks: config.effect_lifetime_ticks,
            eat_radius: config.eat_radius,
            collision_radius: config.body.collision_radius,
            rng,
        };
        if config.head.bounds == BoundsMode::Wrap {
            session.body.set_wrap(Some(session.board.world_size()));
        }
        session.reset();
        session
    }

    pub fn reset(&mut self) {
        let start = self.board.start_position();
        let direction = Point::new(1.0, 0.0);
        self.tick = 0;
        self.head.reset(start, direction);
        self.body.reset(start, direction);
        self.score.reset();
        self.timer.reset();
        for effect in std::mem::take(&mut self.active_effects) {
            self.effects.release(effect);
        }
        self.respawn_food();
        tracing::debug!(
            session = %self.id,
            segments = self.body.target_segments(),
            "session reset"
        );
    }

    pub fn tick(&mut self, dt: f64, input: TickInput) -> TickReport {
        let mut report = TickReport::default();
        if self.timer.has_ended() {
            report.finished = true;
            return report;
        }
        self.tick += 1;
        self.timer.advance(dt);

        if let Some(target) = input.drag_target {
            self.head.steer_toward(target);
        } else if let Some(direction) = input.direction {
            self.head.steer(direction);
        }
        let position = self.head.step(dt, &self.board);

        self.body.advance(position, self.head.direction(), false);

        if let Some(index) = self.body.find_collision(position, self.collision_radius) {
            let removed = self.body.trim(index, position);
            let score = self.score.remove_body_points(removed);
            report.removed_segments = removed;
            tracing::debug!(
                session = %self.id,
                tick = self.tick,
                index,
                removed,
                score,
                "snake bit itself"
            );
        }

        if self.food.is_food_near(position, self.eat_radius) {
            self.body.grow();
            let score = self.score.add_food_points();
            self.play_eat_effect(position);
            self.respawn_food();
            report.ate_food = true;
            tracing::debug!(
                session = %self.id,
                tick = self.tick,
                target_segments = self.body.target_segments(),
                score,
                "food eaten"
            );
        }

        self.expire_effects();
        report.finished = self.timer.has_ended();
        if report.finished {
            tracing::info!(session = %self.id, score = self.score.score(), "round over");
        }
        report
    }

    /// Head plus every body point; what food placement has to avoid.
    pub fn occupied_positions(&self) -> Vec<Point> {
        let points = self.body.body_points();
        let mut occupied = Vec::with_capacity(points.len() + 1);
        occupied.push(self.head.position());
        occupied.extend_from_slice(points);
        occupied
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id.to_string(),
            tick: self.tick,
            head: self.head.state(),
            body: self.body.body_points().to_vec(),
            total_segments: self.body.total_segments(),
            food: self.food.position(),
            score: self.score.score(),
            time_remaining: self.timer.time_remaining(),
            finished: self.timer.has_ended(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn head(&self) -> &HeadController {
        &self.head
    }

    pub fn body(&self) -> &SnakeBody {
        &self.body
    }

    pub fn food(&self) -> &FoodSpawner {
        &self.food
    }

    pub fn score(&self) -> i64 {
        self.score.score()
    }

    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    pub fn active_effects(&self) -> &[EatEffect] {
        &self.active_effects
    }

    fn respawn_food(&mut self) {
        let occupied = self.occupied_positions();
        self.food.spawn(&self.board, &occupied, &mut self.rng);
    }

    fn play_eat_effect(&mut self, position: Point) {
        let Some(mut effect) = self.effects.acquire() else {
            tracing::trace!(session = %self.id, "eat effect pool exhausted");
            return;
        };
        effect.position = position;
        effect.remaining_ticks = self.effect_lifetime_ticks;
        self.active_effects.push(effect);
    }

    fn expire_effects(&mut self) {
        let mut index = 0;
        while index < self.active_effects.len() {
            let effect = &mut self.active_effects[index];
            effect.remaining_ticks = effect.remaining_ticks.saturating_sub(1);
            if effect.remaining_ticks == 0 {
                let finished = self.active_effects.swap_remove(index);
                self.effects.release(finished);
                continue;
            }
            index += 1;
        }
    }
}
