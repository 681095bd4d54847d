//! World simulation state
//!
//! The editor core only needs enough of the running world to edit it:
//! the actor list object tools manipulate, and a paused flag so entering
//! an edit mode freezes everything.

use glam::Vec3;

/// Stable identifier for an actor, valid for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorId(pub u32);

/// A placed world object
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: ActorId,
    pub label: String,
    pub position: Vec3,
    /// Bounding-sphere radius used for pointer picking
    pub radius: f32,
}

/// The simulated world as the editor sees it
#[derive(Debug, Default)]
pub struct WorldSim {
    actors: Vec<Actor>,
    paused: bool,
    clock: f64,
    next_id: u32,
}

impl WorldSim {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, label: impl Into<String>, position: Vec3, radius: f32) -> ActorId {
        let id = ActorId(self.next_id);
        self.next_id += 1;
        self.actors.push(Actor {
            id,
            label: label.into(),
            position,
            radius,
        });
        id
    }

    pub fn remove(&mut self, id: ActorId) -> Option<Actor> {
        let index = self.actors.iter().position(|a| a.id == id)?;
        Some(self.actors.remove(index))
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == id)
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|a| a.id == id)
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Freeze every actor; edit modes call this on activation
    pub fn pause_all(&mut self) {
        self.paused = true;
    }

    pub fn resume_all(&mut self) {
        self.paused = false;
    }

    /// Advance the sim clock. A no-op while paused.
    pub fn update(&mut self, dt: f32) {
        if !self.paused {
            self.clock += dt as f64;
        }
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Presentation-side idle bob for an actor, derived from the clock
    /// so paused worlds hold still without mutating positions.
    pub fn idle_offset(&self, id: ActorId) -> f32 {
        ((self.clock * 2.0 + id.0 as f64).sin() * 0.05) as f32
    }
}
