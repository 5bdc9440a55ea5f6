//! Reveal System
//!
//! Props appear once the subject reaches their age and never disappear.

use hecs::World;
use crate::components::{RevealAge, Revealed};

/// Mark every prop whose reveal age has been reached.
/// Returns the number of props revealed this call.
pub fn reveal_system(world: &mut World, age: f64) -> usize {
    let due: Vec<hecs::Entity> = world
        .query::<&RevealAge>()
        .without::<&Revealed>()
        .iter()
        .filter(|(_, reveal)| age >= reveal.0 as f64)
        .map(|(entity, _)| entity)
        .collect();

    for &entity in &due {
        let _ = world.insert_one(entity, Revealed);
    }
    due.len()
}
