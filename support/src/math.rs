/// Serialisable clamped values.
pub mod clamped {
    use serde::{Deserialize, Serialize};

    /// Specifies a range of allowed values which can be clamped to or checked
    /// against.
    #[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
    pub struct Clamped<T> {
        pub min: T,
        pub max: T,
    }

    impl<T: PartialOrd + Clone> Clamped<T> {
        /// Creates a new clamped value with the given min and max.
        #[inline]
        pub fn new(min: T, max: T) -> Self {
            Clamped { min, max }
        }

        /// Clamps the given value to between the `min` and `max` values.
        #[inline]
        pub fn clamp(&self, val: T) -> T {
            if val < self.min {
                self.min.clone()
            } else if val > self.max {
                self.max.clone()
            } else {
                val
            }
        }

        /// Checks if `val` is within `min` and `max` (inclusive). If so,
        /// returns `Ok(val)`, otherwise returns `Err(val)`.
        #[inline]
        pub fn check(&self, val: T) -> Result<T, T> {
            if self.min <= val && val <= self.max {
                Ok(val)
            } else {
                Err(val)
            }
        }

        /// Whether any value at all lies inside the range.
        #[inline]
        pub fn is_empty(&self) -> bool {
            !(self.min <= self.max)
        }
    }
}

/// Rounds to one decimal place.
#[inline]
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

pub use self::clamped::*;
