use crate::config::{SLEEP_FRAMES, SLEEP_SPEED_THRESHOLD};
use crate::core::rigidbody::RigidBody;
use crate::utils::allocator::Arena;

/// Advances per-body rest counters. With sleeping disabled every body is
/// kept awake. Returns how many bodies are asleep afterwards.
pub fn update_sleeping(bodies: &mut Arena<RigidBody>, enabled: bool) -> usize {
    let mut asleep = 0;
    for body in bodies.values_mut() {
        if body.is_static {
            continue;
        }
        if !enabled {
            body.wake();
            continue;
        }
        if body.is_sleeping {
            asleep += 1;
            continue;
        }

        if body.velocity.length() < SLEEP_SPEED_THRESHOLD {
            body.sleep_counter += 1;
            if body.sleep_counter >= SLEEP_FRAMES {
                body.put_to_sleep();
                asleep += 1;
            }
        } else {
            body.sleep_counter = 0;
        }
    }
    asleep
}

pub fn wake_all(bodies: &mut Arena<RigidBody>) {
    for body in bodies.values_mut() {
        body.wake();
    }
}
