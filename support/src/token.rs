use serde::{Deserialize, Serialize};

/// The two kinds of marker token found in the arena.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Silver,
    Gold,
}

impl Category {
    /// The category a token of this kind gets paired with.
    #[inline]
    pub fn other(self) -> Category {
        match self {
            Category::Silver => Category::Gold,
            Category::Gold => Category::Silver,
        }
    }
}

/// A single token as seen by the robot's camera on one tick. Distances and
/// bearings are relative to the robot's pose at the moment of the reading.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Token {
    pub category: Category,

    /// Identity code, stable for the whole run.
    pub code: u32,

    /// Distance from the robot.
    pub dist: f64,

    /// Bearing from the robot's heading, in degrees. Positive is clockwise.
    pub rot_y: f64,
}

impl Token {
    #[inline]
    pub fn new(category: Category, code: u32, dist: f64, rot_y: f64) -> Self {
        Token {
            category,
            code,
            dist,
            rot_y,
        }
    }
}
