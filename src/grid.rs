// src/grid.rs
//
// The set of values a range remix may hold.
//
// A grid is `min, min + increment, ..., max`. Construction and every value
// check are pure, so callers can validate before touching any state.
// Offsets are computed in i64: `max - min` overflows i32 near the limits.

use crate::error::Violation;

/// A validated, evenly stepped integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    min: i32,
    max: i32,
    increment: i32,
}

impl Grid {
    /// Validate the range shape.
    ///
    /// Checks run in this order: inverted bounds, non-positive step, then
    /// whether `max` is a whole number of steps from `min`.
    pub fn new(min: i32, max: i32, increment: i32) -> Result<Self, Violation> {
        if max < min {
            return Err(Violation::InvertedRange { min, max });
        }
        if increment <= 0 {
            return Err(Violation::NonPositiveIncrement { increment });
        }
        if offset(max, min) % i64::from(increment) != 0 {
            return Err(Violation::UnreachableMax {
                min,
                max,
                increment,
            });
        }
        Ok(Self {
            min,
            max,
            increment,
        })
    }

    #[inline]
    pub fn min(&self) -> i32 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> i32 {
        self.max
    }

    #[inline]
    pub fn increment(&self) -> i32 {
        self.increment
    }

    /// Check that `value` is a point on this grid.
    pub fn check(&self, value: i32) -> Result<(), Violation> {
        if value < self.min {
            return Err(Violation::BelowMin {
                value,
                min: self.min,
            });
        }
        if value > self.max {
            return Err(Violation::AboveMax {
                value,
                max: self.max,
            });
        }
        if offset(value, self.min) % i64::from(self.increment) != 0 {
            return Err(Violation::OffGrid {
                value,
                min: self.min,
                increment: self.increment,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, value: i32) -> bool {
        self.check(value).is_ok()
    }

    /// Number of increments between `min` and `max`.
    #[inline]
    pub fn steps(&self) -> u32 {
        // At most u32::MAX: the widest span is i32::MIN..=i32::MAX with step 1.
        (offset(self.max, self.min) / i64::from(self.increment)) as u32
    }

    /// Number of grid points, bounds included.
    #[inline]
    pub fn point_count(&self) -> u64 {
        u64::from(self.steps()) + 1
    }

    /// Position of `value` on the grid, counting from `min`.
    pub fn index_of(&self, value: i32) -> Option<u32> {
        self.check(value).ok()?;
        Some((offset(value, self.min) / i64::from(self.increment)) as u32)
    }

    /// Grid point at `index`, or `None` past `max`.
    pub fn value_at(&self, index: u32) -> Option<i32> {
        if index > self.steps() {
            return None;
        }
        self.point(i64::from(index))
    }

    /// Nearest grid point to `value`, clamped into the range.
    ///
    /// A value exactly halfway between two points snaps upward.
    pub fn snap(&self, value: i32) -> i32 {
        let clamped = value.clamp(self.min, self.max);
        let step = i64::from(self.increment);
        let from_min = offset(clamped, self.min);
        let mut index = from_min / step;
        if (from_min % step) * 2 >= step {
            index += 1;
        }
        let index = index.min(i64::from(self.steps()));
        self.point(index).unwrap_or(self.max)
    }

    /// Iterate every grid point in ascending order.
    pub fn values(&self) -> impl Iterator<Item = i32> + use<> {
        let grid = *self;
        (0..=grid.steps()).filter_map(move |index| grid.point(i64::from(index)))
    }

    /// Map a value onto 0..1. A single-point grid maps everything to 0.
    pub fn normalize(&self, value: i32) -> f32 {
        let span = offset(self.max, self.min);
        if span == 0 {
            return 0.0;
        }
        let from_min = offset(value.clamp(self.min, self.max), self.min);
        (from_min as f64 / span as f64) as f32
    }

    /// Map a 0..1 position back onto the nearest grid point.
    pub fn denormalize(&self, normalized: f32) -> i32 {
        let position = if normalized.is_nan() {
            0.0
        } else {
            f64::from(normalized.clamp(0.0, 1.0))
        };
        let span = offset(self.max, self.min) as f64;
        let step = f64::from(self.increment);
        let index = ((position * span) / step).round() as i64;
        self.point(index.min(i64::from(self.steps())))
            .unwrap_or(self.max)
    }

    fn point(&self, index: i64) -> Option<i32> {
        i32::try_from(i64::from(self.min) + index * i64::from(self.increment)).ok()
    }
}

#[inline]
fn offset(value: i32, min: i32) -> i64 {
    i64::from(value) - i64::from(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_inverted_range_before_stepping() {
        assert_eq!(
            Grid::new(50, 20, -1),
            Err(Violation::InvertedRange { min: 50, max: 20 })
        );
    }

    #[test]
    fn test_rejects_non_positive_increment() {
        assert_eq!(
            Grid::new(0, 20, 0),
            Err(Violation::NonPositiveIncrement { increment: 0 })
        );
        assert_eq!(
            Grid::new(0, 20, -5),
            Err(Violation::NonPositiveIncrement { increment: -5 })
        );
    }

    #[test]
    fn test_rejects_unreachable_max() {
        assert_eq!(
            Grid::new(0, 52, 5),
            Err(Violation::UnreachableMax {
                min: 0,
                max: 52,
                increment: 5
            })
        );
    }

    #[test]
    fn test_single_point_grid() {
        let grid = Grid::new(7, 7, 3).unwrap();
        assert_eq!(grid.steps(), 0);
        assert_eq!(grid.point_count(), 1);
        assert!(grid.contains(7));
        assert_eq!(grid.normalize(7), 0.0);
        assert_eq!(grid.denormalize(1.0), 7);
    }

    #[test]
    fn test_check_order() {
        let grid = Grid::new(0, 20, 5).unwrap();
        assert_eq!(grid.check(-1), Err(Violation::BelowMin { value: -1, min: 0 }));
        assert_eq!(grid.check(21), Err(Violation::AboveMax { value: 21, max: 20 }));
        assert_eq!(
            grid.check(12),
            Err(Violation::OffGrid {
                value: 12,
                min: 0,
                increment: 5
            })
        );
        assert_eq!(grid.check(15), Ok(()));
    }

    #[test]
    fn test_negative_bounds() {
        let err = Grid::new(-10, 10, 3).unwrap_err();
        assert!(matches!(err, Violation::UnreachableMax { .. }));

        let grid = Grid::new(-12, 12, 4).unwrap();
        assert!(grid.contains(-8));
        assert!(!grid.contains(-6));
        assert_eq!(grid.values().collect::<Vec<_>>(), vec![-12, -8, -4, 0, 4, 8, 12]);
    }

    #[test]
    fn test_extreme_span_does_not_overflow() {
        let grid = Grid::new(i32::MIN, i32::MAX, 1).unwrap();
        assert_eq!(grid.steps(), u32::MAX);
        assert_eq!(grid.point_count(), u64::from(u32::MAX) + 1);
        assert_eq!(grid.value_at(u32::MAX), Some(i32::MAX));
        assert_eq!(grid.index_of(i32::MAX), Some(u32::MAX));
        assert_eq!(grid.snap(i32::MAX), i32::MAX);
    }

    #[test]
    fn test_index_round_trip() {
        let grid = Grid::new(10, 40, 10).unwrap();
        assert_eq!(grid.index_of(30), Some(2));
        assert_eq!(grid.index_of(35), None);
        assert_eq!(grid.value_at(2), Some(30));
        assert_eq!(grid.value_at(4), None);
    }

    #[test]
    fn test_snap() {
        let grid = Grid::new(0, 20, 5).unwrap();
        assert_eq!(grid.snap(12), 10);
        assert_eq!(grid.snap(13), 15);
        assert_eq!(grid.snap(-100), 0);
        assert_eq!(grid.snap(100), 20);

        // halfway snaps up
        let grid = Grid::new(0, 20, 4).unwrap();
        assert_eq!(grid.snap(6), 8);
    }

    #[test]
    fn test_normalize_and_denormalize() {
        let grid = Grid::new(0, 20, 5).unwrap();
        assert_eq!(grid.normalize(0), 0.0);
        assert_eq!(grid.normalize(10), 0.5);
        assert_eq!(grid.normalize(20), 1.0);
        assert_eq!(grid.denormalize(0.5), 10);
        assert_eq!(grid.denormalize(0.6), 10);
        assert_eq!(grid.denormalize(0.7), 15);
        assert_eq!(grid.denormalize(2.0), 20);
        assert_eq!(grid.denormalize(-1.0), 0);
        assert_eq!(grid.denormalize(f32::NAN), 0);
    }
}
