use std::time::Instant;

use glam::Quat;

use crate::scene::SceneGraph;

/// Monotonic time source for the frame loop. Correctness-critical logic
/// never reads it; only the visual update pass does.
#[derive(Debug, Clone, Copy)]
pub struct AnimationClock {
    started: Instant,
}

impl AnimationClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

/// The per-frame visual update pass.
///
/// Takes the current time explicitly and touches exactly the time-driven
/// state: the `time` uniform of every pulsing material, and the rotation of
/// every spinning node (absolute angle from `spin_rate * time`, so the pass
/// is idempotent for a given time).
pub fn advance_frame(scene: &mut SceneGraph, time: f64) {
    for (_, node) in scene.iter_mut() {
        if node.spin_rate != 0.0 {
            node.transform.rotation = Quat::from_rotation_y(node.spin_rate * time as f32);
        }
        if let Some(material) = node.material.as_mut() {
            if material.pulse.is_some() {
                material.time = time;
            }
        }
    }
}
