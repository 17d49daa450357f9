/// Round countdown. Latches once it reaches zero until `reset`.
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    start_seconds: f64,
    remaining: f64,
    ended: bool,
}

impl CountdownTimer {
    pub fn new(start_seconds: f64) -> Self {
        let start_seconds = if start_seconds.is_finite() {
            start_seconds.max(0.0)
        } else {
            0.0
        };
        Self {
            start_seconds,
            remaining: start_seconds,
            ended: false,
        }
    }

    pub fn reset(&mut self) {
        self.remaining = self.start_seconds;
        self.ended = false;
    }

    pub fn advance(&mut self, dt: f64) -> bool {
        if self.ended {
            return true;
        }
        if dt.is_finite() {
            self.remaining = (self.remaining - dt.max(0.0)).max(0.0);
        }
        if self.remaining <= 0.0 {
            self.ended = true;
        }
        self.ended
    }

    pub fn time_remaining(&self) -> f64 {
        self.remaining
    }

    pub fn has_ended(&self) -> bool {
        self.ended
    }
}
