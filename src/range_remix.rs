// src/range_remix.rs
//
// An integer remix confined to an evenly stepped range.
//
// Every write goes through `Grid::check` before any field changes, so the
// value is always a grid point and a rejected write leaves nothing behind.

use std::fmt;

use log::{debug, trace};

use crate::callback::{BoxedCallback, RemixCallback};
use crate::error::{RemixError, RemixResult, Violation};
use crate::grid::Grid;
use crate::item::{LayoutId, RemixItem};

/// A named integer control that only holds values on its grid.
pub struct RangeRemix {
    name: String,
    key: String,
    layout_id: LayoutId,
    grid: Grid,
    value: i32,
    callback: Option<BoxedCallback>,
}

impl RangeRemix {
    /// Create a remix holding `default_value`.
    ///
    /// Fails with [`RemixError::InvalidConfiguration`] when the bounds, step
    /// and default do not form a valid grid. On success the callback, if
    /// any, has already been invoked once with the new remix.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        key: impl Into<String>,
        default_value: i32,
        min_value: i32,
        max_value: i32,
        increment: i32,
        callback: Option<BoxedCallback>,
        layout_id: LayoutId,
    ) -> RemixResult<Self> {
        let key = key.into();

        let grid = Grid::new(min_value, max_value, increment)
            .and_then(|grid| grid.check(default_value).map(|()| grid))
            .map_err(|violation| RemixError::InvalidConfiguration {
                key: key.clone(),
                violation,
            })?;

        let mut remix = Self {
            name: name.into(),
            key,
            layout_id,
            grid,
            value: default_value,
            callback,
        };

        debug!(
            "Created remix '{}' = {} on [{}, {}] step {}",
            remix.key, remix.value, min_value, max_value, increment
        );

        remix.notify();
        Ok(remix)
    }

    /// Start a builder with default range `0..=100`, step 1.
    pub fn builder(name: impl Into<String>, key: impl Into<String>) -> RangeRemixBuilder {
        RangeRemixBuilder::new(name, key)
    }

    /// Commit `new_value` and notify the listener.
    ///
    /// Fails with [`RemixError::InvalidValue`] when the value is out of
    /// bounds or off the grid. The current value is kept and the listener
    /// is not called.
    pub fn set_value(&mut self, new_value: i32) -> RemixResult<()> {
        self.grid
            .check(new_value)
            .map_err(|violation| self.invalid_value(violation))?;

        trace!("Remix '{}': {} -> {}", self.key, self.value, new_value);
        self.value = new_value;
        self.notify();
        Ok(())
    }

    /// Move one increment up. Fails at `max`.
    pub fn step_up(&mut self) -> RemixResult<()> {
        let next = self.value.saturating_add(self.grid.increment());
        if self.value == self.grid.max() {
            return Err(self.invalid_value(Violation::AboveMax {
                value: next,
                max: self.grid.max(),
            }));
        }
        self.set_value(next)
    }

    /// Move one increment down. Fails at `min`.
    pub fn step_down(&mut self) -> RemixResult<()> {
        let next = self.value.saturating_sub(self.grid.increment());
        if self.value == self.grid.min() {
            return Err(self.invalid_value(Violation::BelowMin {
                value: next,
                min: self.grid.min(),
            }));
        }
        self.set_value(next)
    }

    /// Commit the grid point nearest to `value` and return it.
    pub fn set_nearest(&mut self, value: i32) -> i32 {
        self.commit_snapped(self.grid.snap(value))
    }

    /// Commit the grid point nearest to a 0..1 slider position and return it.
    pub fn set_normalized(&mut self, position: f32) -> i32 {
        self.commit_snapped(self.grid.denormalize(position))
    }

    fn commit_snapped(&mut self, snapped: i32) -> i32 {
        trace!("Remix '{}': {} -> {}", self.key, self.value, snapped);
        self.value = snapped;
        self.notify();
        snapped
    }

    fn invalid_value(&self, violation: Violation) -> RemixError {
        RemixError::InvalidValue {
            key: self.key.clone(),
            violation,
        }
    }

    fn notify(&mut self) {
        // Taken out for the duration of the call so the listener can borrow `self`.
        if let Some(mut callback) = self.callback.take() {
            callback.on_value_set(self);
            self.callback = Some(callback);
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn layout_id(&self) -> LayoutId {
        self.layout_id
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    #[inline]
    pub fn min_value(&self) -> i32 {
        self.grid.min()
    }

    #[inline]
    pub fn max_value(&self) -> i32 {
        self.grid.max()
    }

    #[inline]
    pub fn increment(&self) -> i32 {
        self.grid.increment()
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current value mapped onto 0..1.
    #[inline]
    pub fn normalized(&self) -> f32 {
        self.grid.normalize(self.value)
    }

    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }
}

impl RemixItem for RangeRemix {
    fn name(&self) -> &str {
        &self.name
    }

    fn key(&self) -> &str {
        &self.key
    }

    fn layout_id(&self) -> LayoutId {
        self.layout_id
    }
}

impl fmt::Debug for RangeRemix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeRemix")
            .field("name", &self.name)
            .field("key", &self.key)
            .field("layout_id", &self.layout_id)
            .field("grid", &self.grid)
            .field("value", &self.value)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

impl fmt::Display for RangeRemix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Chained configuration for a [`RangeRemix`].
pub struct RangeRemixBuilder {
    name: String,
    key: String,
    min: i32,
    max: i32,
    increment: i32,
    default_value: Option<i32>,
    layout_id: LayoutId,
    callback: Option<BoxedCallback>,
}

impl RangeRemixBuilder {
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            min: 0,
            max: 100,
            increment: 1,
            default_value: None,
            layout_id: 0,
            callback: None,
        }
    }

    pub fn range(mut self, min: i32, max: i32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn increment(mut self, increment: i32) -> Self {
        self.increment = increment;
        self
    }

    /// Initial value. Defaults to the lower bound.
    pub fn default_value(mut self, value: i32) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn layout(mut self, layout_id: LayoutId) -> Self {
        self.layout_id = layout_id;
        self
    }

    pub fn callback(mut self, callback: impl RemixCallback + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn build(self) -> RemixResult<RangeRemix> {
        RangeRemix::new(
            self.name,
            self.key,
            self.default_value.unwrap_or(self.min),
            self.min,
            self.max,
            self.increment,
            self.callback,
            self.layout_id,
        )
    }
}
