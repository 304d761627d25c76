/// Construction-time tuning for a [`Vector`](super::Vector): the capacity allocated up front and
/// the factor applied to the capacity whenever a full Vector needs room for another element.
///
/// # Examples
/// ```
/// # use stl_collections::collections::contiguous::{Vector, VectorConfig};
/// let config = VectorConfig::new().with_initial_cap(4).with_growth_factor(3);
/// let mut vec = Vector::with_config(config);
/// assert_eq!(vec.cap(), 4);
/// vec.extend(0..5_u8);
/// assert_eq!(vec.cap(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VectorConfig {
    initial_cap: usize,
    growth_factor: usize,
}

impl VectorConfig {
    pub const DEFAULT_INITIAL_CAP: usize = 16;
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Creates the default configuration: 16 elements up front, doubling when full.
    pub const fn new() -> VectorConfig {
        VectorConfig {
            initial_cap: Self::DEFAULT_INITIAL_CAP,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }

    /// Sets the capacity allocated on construction, and when growing from an empty allocation.
    pub const fn with_initial_cap(mut self, initial_cap: usize) -> VectorConfig {
        self.initial_cap = initial_cap;
        self
    }

    /// Sets the factor that the capacity is multiplied by when growing.
    ///
    /// # Panics
    /// Panics if `growth_factor` is less than 2, because the capacity would never grow.
    pub const fn with_growth_factor(mut self, growth_factor: usize) -> VectorConfig {
        assert!(growth_factor >= 2, "Growth factor must be at least 2!");
        self.growth_factor = growth_factor;
        self
    }

    pub const fn initial_cap(&self) -> usize {
        self.initial_cap
    }

    pub const fn growth_factor(&self) -> usize {
        self.growth_factor
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self::new()
    }
}
