use raylib::prelude::*;

/// Horizontal position of the scene track, in panel widths.
///
/// The displayed position eases toward its target; a new target restarts the
/// easing from wherever the track currently is.
pub struct Track {
    from: f32,
    to: f32,
    position: f32,
    timer: f32,
    duration: f32,
}

impl Track {
    pub fn new(duration: f32) -> Self {
        Self { from: 0.0, to: 0.0, position: 0.0, timer: duration, duration }
    }

    pub fn slide_to(&mut self, target: f32) {
        self.from = self.position;
        self.to = target;
        self.timer = 0.0;
    }

    pub fn update(&mut self, dt: f32) {
        if self.timer >= self.duration {
            self.position = self.to;
            return;
        }
        self.timer = (self.timer + dt).min(self.duration);
        self.position = ease::cubic_out(self.timer, self.from, self.to - self.from, self.duration);
        if self.timer >= self.duration {
            self.position = self.to;
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn is_settled(&self) -> bool {
        self.timer >= self.duration
    }
}
