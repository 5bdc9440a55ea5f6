//! Shared types and ECS components for the journey engine
//!
//! Event data flows from the catalog into [`HistoricalEvent`]s; the scene
//! world stores props and clouds as hecs entities built from
//! the components below.

use serde::{Deserialize, Serialize};

// ============================================================================
// Event Components
// ============================================================================

/// One row of the static event table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub year: i32,
    pub title: &'static str,
    pub description: &'static str,
}

/// A catalog entry placed on a particular lifetime
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoricalEvent {
    pub year: i32,
    /// Subject's age in that year (`year - birth_year`)
    pub age: u32,
    pub title: String,
    pub description: String,
}

impl HistoricalEvent {
    pub fn from_entry(entry: &CatalogEntry, birth_year: i32) -> Self {
        Self {
            year: entry.year,
            age: (entry.year - birth_year).max(0) as u32,
            title: entry.title.to_string(),
            description: entry.description.to_string(),
        }
    }

    /// Identity used for history de-duplication
    pub fn key(&self) -> (i32, &str) {
        (self.year, self.title.as_str())
    }
}

// ============================================================================
// Geometry
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

// ============================================================================
// Scene Components
// ============================================================================

/// Where an entity sits in the scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// Hex color the frontend tints the mesh with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tint(pub &'static str);

/// Decorative prop placed beside the path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropKind {
    Teddy,
    Blocks,
    Ball,
    Book,
    SchoolBus,
    Pencil,
    Bicycle,
    GameController,
    Phone,
    GraduationCap,
    Computer,
    Car,
    Passport,
    ApartmentKeys,
    CoffeeMug,
    Briefcase,
    House,
    Ring,
    FamilyTree,
    Desk,
    MoneyBag,
    Award,
    HealthIcon,
    TravelSuitcase,
    Clock,
    GardenTools,
    ReadingGlasses,
    PhotoAlbum,
    Recliner,
    Legacy,
}

impl PropKind {
    /// Primitive mesh the frontend builds for this prop
    pub fn shape(self) -> Shape {
        use PropKind::*;
        match self {
            Teddy | Ball | MoneyBag => Shape::Sphere,
            Blocks | Book | SchoolBus | GameController | Phone | Computer | Car | Passport
            | Briefcase | Desk | HealthIcon | TravelSuitcase | PhotoAlbum | Recliner => Shape::Box,
            Pencil | GraduationCap | CoffeeMug | Award | Clock | GardenTools => Shape::Cylinder,
            Bicycle | Ring | ApartmentKeys | ReadingGlasses => Shape::Torus,
            House | FamilyTree => Shape::Cone,
            Legacy => Shape::Dodecahedron,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Shape {
    Sphere,
    Box,
    Cylinder,
    Torus,
    Cone,
    Dodecahedron,
}

/// Age at which a prop first appears
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealAge(pub u32);

/// Marker: prop has been revealed (never removed)
#[derive(Debug, Clone, Copy, Default)]
pub struct Revealed;

/// Accumulated idle animation for a prop
#[derive(Debug, Clone, Copy, Default)]
pub struct Spin {
    pub yaw: f32,
}

/// Cloud drifting across the sky
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cloud {
    pub scale: Vec3,
    pub yaw: f32,
}

/// Life-stage band of the path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifeStage {
    pub name: &'static str,
    pub start_age: u32,
    pub end_age: u32,
    pub colors: [&'static str; 2],
}

impl LifeStage {
    pub fn contains(&self, age: f64) -> bool {
        age >= self.start_age as f64 && age < self.end_age as f64
    }
}
