//! Drift System - clouds slide along +x and wrap around

use hecs::World;
use crate::components::{Cloud, Position};

/// Units per second
pub const DRIFT_SPEED: f32 = 0.2;
pub const WRAP_AT: f32 = 50.0;

pub fn drift_system(world: &mut World, elapsed_secs: f64) {
    let step = elapsed_secs as f32 * DRIFT_SPEED;
    for (_, position) in world.query_mut::<&mut Position>().with::<&Cloud>() {
        position.0.x += step;
        if position.0.x > WRAP_AT {
            position.0.x = -WRAP_AT;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Vec3;

    fn cloud() -> Cloud {
        Cloud {
            scale: Vec3::new(1.0, 1.0, 1.0),
            yaw: 0.0,
        }
    }

    #[test]
    fn test_clouds_drift_and_wrap() {
        let mut world = World::new();
        let near_edge = world.spawn((Position(Vec3::new(49.95, 8.0, 0.0)), cloud()));
        let middle = world.spawn((Position(Vec3::new(0.0, 8.0, 0.0)), cloud()));
        let not_cloud = world.spawn((Position(Vec3::new(0.0, 0.0, 0.0)),));

        drift_system(&mut world, 1.0);
        assert_eq!(world.get::<&Position>(near_edge).unwrap().0.x, -WRAP_AT);
        assert!((world.get::<&Position>(middle).unwrap().0.x - DRIFT_SPEED).abs() < 1e-6);
        assert_eq!(world.get::<&Position>(not_cloud).unwrap().0.x, 0.0);
    }
}
