use std::str::FromStr;

use strum::VariantArray;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    #[error("invalid split type: {0}")]
    InvalidSplitType(String),
}

/// Direction along which an image is cut in two.
///
/// `Horizontal` produces a left and a right half, `Vertical` a top and a bottom half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, VariantArray)]
pub enum SplitAxis {
    Horizontal,
    Vertical,
}

impl SplitAxis {
    /// Every token accepted for this axis, short form first.
    pub const fn tokens(self) -> &'static [&'static str] {
        match self {
            Self::Horizontal => &["h", "horizontal", "left-right"],
            Self::Vertical => &["v", "vertical", "up-down"],
        }
    }

    /// Comma separated list of every token accepted by [`SplitAxis::from_str`].
    pub fn accepted_tokens() -> String {
        Self::VARIANTS
            .iter()
            .flat_map(|axis| axis.tokens())
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Suffix labels for the first and second half.
    pub const fn labels(self) -> (&'static str, &'static str) {
        match self {
            Self::Horizontal => ("left", "right"),
            Self::Vertical => ("top", "bottom"),
        }
    }

    /// Computes the two crop rectangles for an image of the given size.
    ///
    /// The cut sits at the floor-division midpoint, so for odd sizes the second
    /// half (right / bottom) is one pixel larger than the first.
    /// Zero-sized inputs are not rejected, the resulting rectangles simply have no extent.
    pub const fn split(self, width: u32, height: u32) -> (Rect, Rect) {
        match self {
            Self::Horizontal => {
                let mid = width / 2;
                (
                    Rect::new(0, 0, mid, height),
                    Rect::new(mid, 0, width, height),
                )
            }
            Self::Vertical => {
                let mid = height / 2;
                (
                    Rect::new(0, 0, width, mid),
                    Rect::new(0, mid, width, height),
                )
            }
        }
    }
}

impl std::fmt::Display for SplitAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

impl FromStr for SplitAxis {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();

        Self::VARIANTS
            .iter()
            .copied()
            .find(|axis| axis.tokens().contains(&token.as_str()))
            .ok_or_else(|| SplitError::InvalidSplitType(s.to_owned()))
    }
}

/// Crop region in pixel coordinates, `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Rect {
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn width(&self) -> u32 {
        self.right - self.left
    }

    pub const fn height(&self) -> u32 {
        self.bottom - self.top
    }

    pub const fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
