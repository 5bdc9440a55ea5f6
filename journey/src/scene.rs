//! Scene Composer
//!
//! Maps the current age onto a 3D frame: camera trailing the avatar along
//! the path, life-stage segments, age-gated props and the sky. Props and
//! clouds live in a hecs world and are advanced by the systems in
//! [`crate::systems`]; the static parts go out once as a [`SceneLayout`].

use hecs::World;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::components::{
    Cloud, LifeStage, Position, PropKind, RevealAge, Revealed, Shape, Spin, Tint, Vec3,
};
use crate::systems;

/// Path z at age 0; the avatar sits at `age + PATH_ORIGIN_Z`
pub const PATH_ORIGIN_Z: f32 = -45.0;
pub const CAMERA_HEIGHT: f32 = 2.0;
pub const CAMERA_DISTANCE: f32 = 4.0;
pub const CAMERA_FOV: f32 = 60.0;
pub const STAR_COUNT: usize = 1500;
pub const CLOUD_COUNT: usize = 10;

const PATH_WIDTH: f32 = 3.0;
const START_MARKER: Vec3 = Vec3::new(0.0, 1.0, -40.0);

pub const LIFE_STAGES: [LifeStage; 7] = [
    LifeStage { name: "Childhood", start_age: 0, end_age: 12, colors: ["#FFB5E8", "#FF9CEE"] },
    LifeStage { name: "Adolescence", start_age: 12, end_age: 20, colors: ["#FF9CEE", "#B28DFF"] },
    LifeStage { name: "Young Adult", start_age: 20, end_age: 30, colors: ["#B28DFF", "#6EB5FF"] },
    LifeStage { name: "Early Career", start_age: 30, end_age: 45, colors: ["#6EB5FF", "#81C784"] },
    LifeStage { name: "Mid Life", start_age: 45, end_age: 60, colors: ["#81C784", "#FFD700"] },
    LifeStage { name: "Golden Years", start_age: 60, end_age: 75, colors: ["#FFD700", "#FFA726"] },
    LifeStage { name: "Wisdom", start_age: 75, end_age: 90, colors: ["#FFA726", "#FF7043"] },
];

type PropSpec = (PropKind, [f32; 3], &'static str);

/// Props by the age they appear at
const PROP_GROUPS: [(u32, [PropSpec; 3]); 10] = [
    (0, [
        (PropKind::Teddy, [3.0, 0.0, -44.0], "#B76E79"),
        (PropKind::Blocks, [-3.0, 0.0, -42.0], "#FF9E80"),
        (PropKind::Ball, [2.0, 0.0, -40.0], "#B39DDB"),
    ]),
    (6, [
        (PropKind::Book, [3.0, 0.0, -38.0], "#81C784"),
        (PropKind::SchoolBus, [-3.0, 0.0, -36.0], "#FFEB3B"),
        (PropKind::Pencil, [2.0, 0.0, -34.0], "#FFA726"),
    ]),
    (13, [
        (PropKind::Bicycle, [3.0, 0.0, -32.0], "#4FC3F7"),
        (PropKind::GameController, [-3.0, 0.0, -30.0], "#7E57C2"),
        (PropKind::Phone, [2.0, 0.0, -28.0], "#E57373"),
    ]),
    (20, [
        (PropKind::GraduationCap, [3.0, 0.0, -26.0], "#000000"),
        (PropKind::Computer, [-3.0, 0.0, -24.0], "#78909C"),
        (PropKind::Car, [2.0, 0.0, -22.0], "#F44336"),
    ]),
    (25, [
        (PropKind::Passport, [3.0, 0.0, -20.0], "#1565C0"),
        (PropKind::ApartmentKeys, [-3.0, 0.0, -18.0], "#B0BEC5"),
        (PropKind::CoffeeMug, [2.0, 0.0, -16.0], "#6D4C41"),
    ]),
    (30, [
        (PropKind::Briefcase, [3.0, 0.0, -14.0], "#795548"),
        (PropKind::House, [-3.0, 0.0, -12.0], "#8D6E63"),
        (PropKind::Ring, [2.0, 0.0, -10.0], "#FFD700"),
    ]),
    (40, [
        (PropKind::FamilyTree, [3.0, 0.0, -5.0], "#66BB6A"),
        (PropKind::Desk, [-3.0, 0.0, -3.0], "#A1887F"),
        (PropKind::MoneyBag, [2.0, 0.0, -1.0], "#4CAF50"),
    ]),
    (50, [
        (PropKind::Award, [3.0, 0.0, 5.0], "#FFC107"),
        (PropKind::HealthIcon, [-3.0, 0.0, 7.0], "#EF5350"),
        (PropKind::TravelSuitcase, [2.0, 0.0, 9.0], "#90A4AE"),
    ]),
    (60, [
        (PropKind::Clock, [3.0, 0.0, 15.0], "#9E9E9E"),
        (PropKind::GardenTools, [-3.0, 0.0, 17.0], "#8BC34A"),
        (PropKind::ReadingGlasses, [2.0, 0.0, 19.0], "#3F51B5"),
    ]),
    (70, [
        (PropKind::PhotoAlbum, [3.0, 0.0, 25.0], "#FFCCBC"),
        (PropKind::Recliner, [-3.0, 0.0, 27.0], "#5D4037"),
        (PropKind::Legacy, [2.0, 0.0, 29.0], "#9C27B0"),
    ]),
];

/// Life stage containing `age`; the terminal age belongs to the last stage
pub fn life_stage(age: f64) -> &'static LifeStage {
    LIFE_STAGES
        .iter()
        .find(|s| s.contains(age))
        .unwrap_or(&LIFE_STAGES[LIFE_STAGES.len() - 1])
}

pub fn avatar_z(age: f64) -> f32 {
    age as f32 + PATH_ORIGIN_Z
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
    pub fov: f32,
}

impl CameraPose {
    /// Fixed offset above and behind the avatar
    pub fn trailing(age: f64) -> Self {
        let z = avatar_z(age);
        Self {
            position: Vec3::new(0.0, CAMERA_HEIGHT, z - CAMERA_DISTANCE),
            look_at: Vec3::new(0.0, 1.0, z),
            fov: CAMERA_FOV,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Lighting {
    pub background: &'static str,
    pub fog_near: f32,
    pub fog_far: f32,
    pub ambient: f32,
    pub directional: f32,
}

impl Lighting {
    pub fn for_state(paused: bool) -> Self {
        Self {
            background: if paused { "#444444" } else { "#87CEEB" },
            fog_near: 10.0,
            fog_far: 50.0,
            ambient: if paused { 0.3 } else { 0.5 },
            directional: if paused { 0.5 } else { 1.0 },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AvatarView {
    pub position: Vec3,
    pub metalness: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropView {
    pub kind: PropKind,
    pub shape: Shape,
    pub position: Vec3,
    pub yaw: f32,
    pub color: &'static str,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudView {
    pub position: Vec3,
    pub scale: Vec3,
    pub yaw: f32,
    pub color: &'static str,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentView {
    pub name: &'static str,
    pub start_age: u32,
    pub end_age: u32,
    pub center_z: f32,
    pub length: f32,
    pub width: f32,
    pub colors: [&'static str; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Star {
    pub position: Vec3,
    pub brightness: f32,
}

/// Parts of the scene that never change during a journey
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneLayout {
    pub segments: Vec<SegmentView>,
    pub stars: Vec<Star>,
    pub ground_size: f32,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneFrame {
    pub camera: CameraPose,
    pub avatar: AvatarView,
    pub lighting: Lighting,
    pub stage: &'static str,
    pub props: Vec<PropView>,
    pub clouds: Vec<CloudView>,
    pub star_opacity: f32,
    /// Clock for the paused twinkle; absent while time runs
    pub twinkle_time: Option<f32>,
    pub start_marker: Option<Vec3>,
}

/// Per-star brightness while paused
pub fn twinkle(index: usize, time: f32) -> f32 {
    0.5 + 0.5 * (time * 2.0 + index as f32 * 0.1).sin()
}

pub struct SceneWorld {
    world: World,
    stars: Vec<Star>,
    /// Advances only while time runs
    scene_time: f64,
    /// Advances every frame
    wall_time: f64,
}

impl SceneWorld {
    pub fn new(sky_seed: u64) -> Self {
        let mut world = World::new();
        for (age, props) in PROP_GROUPS.iter() {
            for (kind, [x, y, z], color) in props.iter().copied() {
                world.spawn((
                    kind,
                    Position(Vec3::new(x, y, z)),
                    Tint(color),
                    RevealAge(*age),
                    Spin::default(),
                ));
            }
        }

        let mut rng = StdRng::seed_from_u64(sky_seed);
        for _ in 0..CLOUD_COUNT {
            let position = Vec3::new(
                rng.gen_range(-50.0..50.0),
                rng.gen_range(5.0..15.0),
                rng.gen_range(-50.0..50.0),
            );
            let cloud = Cloud {
                scale: Vec3::new(
                    rng.gen_range(1.0..2.0),
                    rng.gen_range(0.5..1.5),
                    rng.gen_range(1.0..2.0),
                ),
                yaw: rng.gen_range(0.0..std::f32::consts::TAU),
            };
            world.spawn((Position(position), cloud));
        }

        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                position: Vec3::new(
                    rng.gen_range(-50.0..50.0),
                    rng.gen_range(0.0..30.0),
                    rng.gen_range(-50.0..50.0),
                ),
                brightness: rng.gen_range(0.5..1.0),
            })
            .collect();

        Self {
            world,
            stars,
            scene_time: 0.0,
            wall_time: 0.0,
        }
    }

    pub fn layout(&self) -> SceneLayout {
        let segments = LIFE_STAGES
            .iter()
            .map(|stage| {
                let length = (stage.end_age - stage.start_age) as f32;
                SegmentView {
                    name: stage.name,
                    start_age: stage.start_age,
                    end_age: stage.end_age,
                    center_z: stage.start_age as f32 + length / 2.0 + PATH_ORIGIN_Z,
                    length,
                    width: PATH_WIDTH,
                    colors: stage.colors,
                }
            })
            .collect();

        SceneLayout {
            segments,
            stars: self.stars.clone(),
            ground_size: 100.0,
        }
    }

    /// Advance animation and reveal props. Returns props revealed this frame.
    pub fn update(&mut self, elapsed_secs: f64, age: f64, paused: bool) -> usize {
        let revealed = systems::reveal_system(&mut self.world, age);

        if !elapsed_secs.is_finite() || elapsed_secs <= 0.0 {
            return revealed;
        }
        self.wall_time += elapsed_secs;
        if !paused {
            self.scene_time += elapsed_secs;
            systems::spin_system(&mut self.world, elapsed_secs);
            systems::drift_system(&mut self.world, elapsed_secs);
        }
        revealed
    }

    pub fn frame(&self, age: f64, paused: bool, started: bool) -> SceneFrame {
        let t = self.scene_time as f32;
        let bounce = if paused { 0.0 } else { (t * 5.0).sin() * 0.05 };
        let float = t.sin() * 0.1;

        let mut props: Vec<(u32, PropView)> = self
            .world
            .query::<(&PropKind, &Position, &Tint, &Spin, &RevealAge)>()
            .with::<&Revealed>()
            .iter()
            .map(|(_, (kind, pos, tint, spin, reveal))| {
                let view = PropView {
                    kind: *kind,
                    shape: kind.shape(),
                    position: Vec3::new(pos.0.x, pos.0.y + float, pos.0.z),
                    yaw: spin.yaw,
                    color: tint.0,
                    opacity: if paused { 0.5 } else { 1.0 },
                };
                (reveal.0, view)
            })
            .collect();
        // entity order is not spawn order once markers move archetypes
        props.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.position.z.total_cmp(&b.1.position.z)));

        let clouds = self
            .world
            .query::<(&Position, &Cloud)>()
            .iter()
            .map(|(_, (pos, cloud))| CloudView {
                position: pos.0,
                scale: cloud.scale,
                yaw: cloud.yaw,
                color: if paused { "#8a8a8a" } else { "#ffffff" },
                opacity: if paused { 0.4 } else { 0.7 },
            })
            .collect();

        SceneFrame {
            camera: CameraPose::trailing(age),
            avatar: AvatarView {
                position: Vec3::new(0.0, bounce, avatar_z(age)),
                metalness: if paused { 0.8 } else { 0.0 },
            },
            lighting: Lighting::for_state(paused),
            stage: life_stage(age).name,
            props: props.into_iter().map(|(_, view)| view).collect(),
            clouds,
            star_opacity: if paused { 1.0 } else { 0.5 },
            twinkle_time: paused.then_some(self.wall_time as f32),
            start_marker: (!started).then_some(START_MARKER),
        }
    }

    pub fn revealed_count(&self) -> usize {
        self.world.query::<&Revealed>().iter().count()
    }
}
