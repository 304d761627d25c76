use std::num::NonZero;

/// The length of a non-empty list. Shrinking past one yields [`None`], which is the signal for the
/// list to return to its empty state.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) struct Length(pub NonZero<usize>);

impl Length {
    pub const fn get(self) -> usize {
        self.0.get()
    }

    pub const fn checked_add(self, other: usize) -> Option<Length> {
        match self.0.checked_add(other) {
            Some(res) => Some(Length(res)),
            None => None,
        }
    }

    pub const fn checked_sub(self, other: usize) -> Option<Length> {
        match self.0.get().checked_sub(other) {
            Some(res) => Length::new(res),
            None => None,
        }
    }

    pub const fn new(value: usize) -> Option<Length> {
        match NonZero::new(value) {
            Some(res) => Some(Length(res)),
            None => None,
        }
    }

    pub const fn last_index(self) -> usize {
        self.get() - 1
    }
}

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);
