use super::errors::ReviewError;

pub const MAX_COMMENT_LENGTH: usize = 1000;

/// Star rating, 1 to 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, ReviewError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ReviewError::InvalidRating);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}
