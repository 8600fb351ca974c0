use std::fmt;

/// A CSS pixel length.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Px(pub f32);

impl Px {
    pub const ZERO: Px = Px(0.0);

    pub const fn get(self) -> f32 {
        self.0
    }
}

impl From<f32> for Px {
    fn from(value: f32) -> Self {
        Px(value)
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0 would print as "-0px"
        if self.0 == 0.0 {
            write!(f, "0px")
        } else {
            write!(f, "{}px", self.0)
        }
    }
}
