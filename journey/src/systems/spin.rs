//! Spin System - idle rotation of revealed props

use hecs::World;
use crate::components::{Revealed, Spin};

/// Radians per second
pub const SPIN_RATE: f32 = 0.3;

pub fn spin_system(world: &mut World, elapsed_secs: f64) {
    let step = elapsed_secs as f32 * SPIN_RATE;
    for (_, spin) in world.query_mut::<&mut Spin>().with::<&Revealed>() {
        spin.yaw = (spin.yaw + step) % std::f32::consts::TAU;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_revealed_props_spin() {
        let mut world = World::new();
        let shown = world.spawn((Spin::default(), Revealed));
        let hidden = world.spawn((Spin::default(),));

        spin_system(&mut world, 1.0);
        assert!((world.get::<&Spin>(shown).unwrap().yaw - SPIN_RATE).abs() < 1e-6);
        assert_eq!(world.get::<&Spin>(hidden).unwrap().yaw, 0.0);
    }
}
