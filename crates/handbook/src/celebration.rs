//! Confetti animation for the closing slide
//!
//! Purely cosmetic. [`Confetti`] owns its particles and advances them one
//! frame at a time. [`Celebration`] runs that loop on a background thread
//! for as long as the guard lives: starting it is mounting, dropping it is
//! unmounting, and the loop is always stopped and joined on drop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use crate::config::HandbookConfig;

const GRAVITY: f32 = 0.05;
const RESPAWN_Y: f32 = -20.0;

/// Confetti colors, each drawn with its own glyph in a text frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfettiColor {
    /// #ffffff
    White,
    /// #fbbf24
    Amber,
    /// #ef4444
    Red,
    /// #3b82f6
    Blue,
    /// #10b981
    Green,
    /// #8b5cf6
    Violet,
}

impl ConfettiColor {
    const ALL: [ConfettiColor; 6] = [
        ConfettiColor::White,
        ConfettiColor::Amber,
        ConfettiColor::Red,
        ConfettiColor::Blue,
        ConfettiColor::Green,
        ConfettiColor::Violet,
    ];

    /// Glyph used when rasterizing to text.
    pub fn glyph(self) -> char {
        match self {
            ConfettiColor::White => '.',
            ConfettiColor::Amber => '*',
            ConfettiColor::Red => '+',
            ConfettiColor::Blue => 'o',
            ConfettiColor::Green => 'x',
            ConfettiColor::Violet => '~',
        }
    }
}

/// A single falling square.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal position
    pub x: f32,
    /// Vertical position (grows downward)
    pub y: f32,
    /// Color
    pub color: ConfettiColor,
    /// Edge length
    pub size: f32,
    /// Horizontal drift per frame
    pub speed_x: f32,
    /// Fall speed per frame
    pub speed_y: f32,
    /// Rotation in degrees
    pub rotation: f32,
    /// Rotation per frame in degrees
    pub rotation_speed: f32,
}

/// A self-contained particle field.
#[derive(Debug, Clone)]
pub struct Confetti {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl Confetti {
    /// Seed `count` particles above a `width` x `height` field.
    pub fn new(width: f32, height: f32, count: usize, seed: u64) -> Self {
        let mut confetti = Self {
            width: width.max(1.0),
            height: height.max(1.0),
            particles: Vec::with_capacity(count),
            rng: StdRng::seed_from_u64(seed),
        };
        for _ in 0..count {
            let particle = confetti.spawn();
            confetti.particles.push(particle);
        }
        confetti
    }

    fn spawn(&mut self) -> Particle {
        let rng = &mut self.rng;
        Particle {
            x: rng.gen_range(0.0..self.width),
            y: -rng.gen_range(0.0..self.height),
            color: ConfettiColor::ALL[rng.gen_range(0..ConfettiColor::ALL.len())],
            size: rng.gen_range(3.0..9.0),
            speed_x: rng.gen_range(-1.0..1.0),
            speed_y: rng.gen_range(2.0..5.0),
            rotation: rng.gen_range(0.0..360.0),
            rotation_speed: rng.gen_range(-5.0..5.0),
        }
    }

    /// Advance one frame. Particles that fall past the bottom re-enter at
    /// the top with a fresh position and speed.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.y += p.speed_y;
            p.x += p.speed_x;
            p.rotation = (p.rotation + p.rotation_speed).rem_euclid(360.0);
            p.speed_y += GRAVITY;

            if p.y > self.height {
                p.y = RESPAWN_Y;
                p.x = self.rng.gen_range(0.0..self.width);
                p.speed_y = self.rng.gen_range(2.0..5.0);
            }
        }
    }

    /// The particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Rasterize visible particles onto a `cols` x `rows` text grid.
    pub fn frame(&self, cols: usize, rows: usize) -> Vec<String> {
        let mut grid = vec![vec![' '; cols]; rows];
        if cols == 0 || rows == 0 {
            return Vec::new();
        }
        for p in &self.particles {
            if p.x < 0.0 || p.y < 0.0 {
                continue;
            }
            let col = (p.x / self.width * cols as f32) as usize;
            let row = (p.y / self.height * rows as f32) as usize;
            if col < cols && row < rows {
                grid[row][col] = p.color.glyph();
            }
        }
        grid.into_iter().map(|r| r.into_iter().collect()).collect()
    }
}

/// A running confetti loop, stopped when dropped.
///
/// # Example
///
/// ```
/// use handbook::{Celebration, HandbookConfig};
///
/// let config = HandbookConfig::default();
/// {
///     let party = Celebration::start(&config, 40, 4);
///     let _rows = party.snapshot();
/// } // loop stopped and joined here
/// ```
pub struct Celebration {
    stop: Arc<AtomicBool>,
    frames: Arc<AtomicU64>,
    latest: Arc<Mutex<Vec<String>>>,
    handle: Option<JoinHandle<()>>,
}

impl Celebration {
    /// Spawn the loop, drawing onto a `cols` x `rows` text grid.
    pub fn start(config: &HandbookConfig, cols: usize, rows: usize) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let frames = Arc::new(AtomicU64::new(0));
        let latest = Arc::new(Mutex::new(vec![" ".repeat(cols); rows]));

        let mut confetti = Confetti::new(
            cols as f32 * 10.0,
            rows as f32 * 20.0,
            config.particle_count,
            rand::random(),
        );
        let interval = config.frame_interval;

        let handle = {
            let stop = Arc::clone(&stop);
            let frames = Arc::clone(&frames);
            let latest = Arc::clone(&latest);
            std::thread::spawn(move || {
                while !stop.load(Ordering::Relaxed) {
                    confetti.step();
                    let frame = confetti.frame(cols, rows);
                    if let Ok(mut slot) = latest.lock() {
                        *slot = frame;
                    }
                    frames.fetch_add(1, Ordering::Relaxed);
                    std::thread::sleep(interval);
                }
            })
        };

        tracing::debug!(cols, rows, particles = config.particle_count, "celebration started");
        Self {
            stop,
            frames,
            latest,
            handle: Some(handle),
        }
    }

    /// The most recently drawn frame.
    pub fn snapshot(&self) -> Vec<String> {
        self.latest
            .lock()
            .map(|frame| frame.clone())
            .unwrap_or_default()
    }

    /// Frames drawn so far.
    pub fn frame_count(&self) -> u64 {
        self.frames.load(Ordering::Relaxed)
    }

    /// Stop the loop and wait for its thread. Later calls do nothing.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("celebration thread panicked");
            }
            tracing::debug!(frames = self.frame_count(), "celebration stopped");
        }
    }

    /// Whether the loop thread is still alive.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Celebration {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for Celebration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Celebration")
            .field("frames", &self.frame_count())
            .field("running", &self.is_running())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particles_start_above_field() {
        let confetti = Confetti::new(100.0, 50.0, 64, 7);
        assert_eq!(confetti.particles().len(), 64);
        assert!(confetti.particles().iter().all(|p| p.y <= 0.0));
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = Confetti::new(100.0, 50.0, 16, 42);
        let b = Confetti::new(100.0, 50.0, 16, 42);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn test_step_applies_gravity_and_respawns() {
        let mut confetti = Confetti::new(100.0, 10.0, 8, 1);
        let before: Vec<f32> = confetti.particles().iter().map(|p| p.speed_y).collect();
        confetti.step();
        for (p, old) in confetti.particles().iter().zip(before) {
            // Respawned particles get a fresh speed in 2..5
            assert!(p.speed_y == old + GRAVITY || (2.0..5.0).contains(&p.speed_y));
        }
        for _ in 0..200 {
            confetti.step();
        }
        assert!(confetti.particles().iter().all(|p| p.y <= 10.0 + 10.0));
    }

    #[test]
    fn test_frame_dimensions() {
        let mut confetti = Confetti::new(100.0, 100.0, 50, 3);
        for _ in 0..30 {
            confetti.step();
        }
        let frame = confetti.frame(20, 5);
        assert_eq!(frame.len(), 5);
        assert!(frame.iter().all(|row| row.chars().count() == 20));
        assert!(confetti.frame(0, 5).is_empty());
    }

    #[test]
    fn test_celebration_stops_on_drop() {
        let config = HandbookConfig {
            particle_count: 10,
            frame_interval: std::time::Duration::from_millis(1),
            ..HandbookConfig::default()
        };
        let party = Celebration::start(&config, 10, 3);
        assert_eq!(party.snapshot().len(), 3);
        drop(party);
    }

    #[test]
    fn test_no_frames_after_stop() {
        let config = HandbookConfig {
            particle_count: 10,
            frame_interval: std::time::Duration::from_millis(1),
            ..HandbookConfig::default()
        };
        let mut party = Celebration::start(&config, 10, 3);

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        while party.frame_count() == 0 && std::time::Instant::now() < deadline {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        assert!(party.frame_count() > 0);
        assert!(party.is_running());

        party.stop();
        let frames = party.frame_count();
        assert!(!party.is_running());
        std::thread::sleep(std::time::Duration::from_millis(20));
        assert_eq!(party.frame_count(), frames);

        party.stop();
        assert_eq!(party.frame_count(), frames);
    }
}
