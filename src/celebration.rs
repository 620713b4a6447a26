use rand::seq::SliceRandom;
use rand::Rng;

const SYMBOLS: [char; 6] = ['✨', '⭐', '✓', '¡', '!', '•'];
const WORDS: [&str; 4] = ["¡PERFECTO!", "¡EXCELENTE!", "¡INCREÍBLE!", "¡OLÉ!"];

/// Seconds of animation per tick
const DT: f64 = 0.1;
const GRAVITY: f64 = 1.2;

/// One piece of confetti. Positions are fractions of the drawing area so a
/// burst does not depend on the terminal size it was started at.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vel_x: f64,
    pub vel_y: f64,
    pub symbol: char,
    pub color_index: usize,
    pub age: f64,
    pub max_age: f64,
}

impl Particle {
    fn launch<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: 0.5 + rng.gen_range(-0.15..0.15),
            y: 0.5 + rng.gen_range(-0.1..0.1),
            vel_x: rng.gen_range(-0.4..0.4),
            vel_y: rng.gen_range(-0.9..-0.2),
            symbol: *SYMBOLS.choose(rng).unwrap_or(&'✨'),
            color_index: rng.gen_range(0..7),
            age: 0.0,
            max_age: rng.gen_range(1.5..3.0),
        }
    }

    /// Returns false once the particle has burnt out
    fn update(&mut self) -> bool {
        self.x += self.vel_x * DT;
        self.y += self.vel_y * DT;
        self.vel_y += GRAVITY * DT;
        self.age += DT;
        self.age < self.max_age
    }

    fn on_screen(&self) -> bool {
        (-0.1..=1.1).contains(&self.x) && self.y <= 1.1
    }

    /// 1.0 when fresh, 0.0 when burnt out
    pub fn alpha(&self) -> f64 {
        (1.0 - self.age / self.max_age).clamp(0.0, 1.0)
    }
}

/// Confetti shown over the quiz results after a perfect score
#[derive(Debug, Clone, Default)]
pub struct Confetti {
    pub particles: Vec<Particle>,
    pub word: Option<&'static str>,
    ticks_left: u16,
}

impl Confetti {
    pub const TICKS: u16 = 30;
    const PARTICLES: usize = 40;

    pub fn burst(&mut self) {
        self.burst_with(&mut rand::thread_rng());
    }

    pub fn burst_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.particles = (0..Self::PARTICLES).map(|_| Particle::launch(rng)).collect();
        self.word = WORDS.choose(rng).copied();
        self.ticks_left = Self::TICKS;
    }

    pub fn is_active(&self) -> bool {
        self.ticks_left > 0
    }

    pub fn stop(&mut self) {
        self.particles.clear();
        self.word = None;
        self.ticks_left = 0;
    }

    /// Advance one frame
    pub fn tick(&mut self) {
        if !self.is_active() {
            return;
        }
        self.ticks_left -= 1;
        if self.ticks_left == 0 {
            self.stop();
            return;
        }
        self.particles.retain_mut(|p| p.update() && p.on_screen());
    }
}
