/// Recurring auto-advance timer, advanced by frame deltas.
///
/// `start`, `cancel` and `reset` are the only mutators besides `tick`, so a
/// controller can never end up with two live timers.
#[derive(Debug)]
pub struct AutoAdvance {
    period: f32,
    elapsed: f32,
    running: bool,
}

impl AutoAdvance {
    /// Create a stopped timer with the given period in seconds.
    pub fn new(period: f32) -> Self {
        Self {
            period,
            elapsed: 0.0,
            running: false,
        }
    }

    /// Begin a fresh full period. Starting while already running restarts
    /// the period rather than stacking a second timer.
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.running = true;
    }

    /// Stop the timer without restarting it.
    pub fn cancel(&mut self) {
        self.elapsed = 0.0;
        self.running = false;
    }

    /// Cancel then start: the next firing is a full period away.
    pub fn reset(&mut self) {
        self.cancel();
        self.start();
    }

    /// Advance by `dt` seconds. Returns true at most once per call, when a
    /// full period has elapsed; the accumulator restarts from zero.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.period {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }
}
