use serde::{Deserialize, Serialize};
use std::fmt;

/// Margins to remove from each edge, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimSpec {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl TrimSpec {
    pub fn new(top: u32, bottom: u32, left: u32, right: u32) -> Self {
        Self { top, bottom, left, right }
    }

    /// Same margin on every edge
    pub fn uniform(margin: u32) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    pub fn horizontal_budget(&self) -> u64 {
        u64::from(self.left) + u64::from(self.right)
    }

    pub fn vertical_budget(&self) -> u64 {
        u64::from(self.top) + u64::from(self.bottom)
    }

    pub fn is_empty(&self) -> bool {
        self.top == 0 && self.bottom == 0 && self.left == 0 && self.right == 0
    }
}

/// Smallest output dimensions a trim may leave behind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimumSize {
    pub min_width: u32,
    pub min_height: u32,
}

impl MinimumSize {
    pub const DEFAULT_WIDTH: u32 = 50;
    pub const DEFAULT_HEIGHT: u32 = 50;

    pub fn new(min_width: u32, min_height: u32) -> Self {
        Self { min_width, min_height }
    }
}

impl Default for MinimumSize {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

/// How the size floor treats an output that lands exactly on the minimum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FloorPolicy {
    /// `extent <= budget + minimum` rejects, so the minimum itself is never produced
    #[default]
    Exclusive,
    /// `extent < budget + minimum` rejects, so an output of exactly the minimum is allowed
    Inclusive,
}

impl FloorPolicy {
    pub(crate) fn rejects(self, extent: u32, budget: u64, minimum: u32) -> bool {
        let floor = budget + u64::from(minimum);
        match self {
            FloorPolicy::Exclusive => u64::from(extent) <= floor,
            FloorPolicy::Inclusive => u64::from(extent) < floor,
        }
    }
}

/// Edge coordinates of the region kept after trimming.
///
/// `right` and `bottom` are exclusive, so `width() == right - left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRectangle {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRectangle {
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "horizontal"),
            Axis::Vertical => write!(f, "vertical"),
        }
    }
}

/// Why a trim request was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrimRejection {
    pub axis: Axis,
    /// Image width or height along `axis`
    pub extent: u32,
    /// Sum of the two trims along `axis`
    pub budget: u64,
    pub minimum: u32,
}

impl fmt::Display for TrimRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "image too small to trim, leaving image as is: {} extent {} minus trim {} does not clear minimum {}",
            self.axis, self.extent, self.budget, self.minimum
        )
    }
}

/// Result of a crop attempt, carrying the image back in both cases
#[derive(Debug)]
pub enum CropOutcome<V> {
    Cropped { image: V, rect: CropRectangle },
    Unchanged { image: V, rejection: TrimRejection },
}

impl<V> CropOutcome<V> {
    pub fn into_image(self) -> V {
        match self {
            CropOutcome::Cropped { image, .. } | CropOutcome::Unchanged { image, .. } => image,
        }
    }

    pub fn image(&self) -> &V {
        match self {
            CropOutcome::Cropped { image, .. } | CropOutcome::Unchanged { image, .. } => image,
        }
    }

    pub fn is_cropped(&self) -> bool {
        matches!(self, CropOutcome::Cropped { .. })
    }

    pub fn rect(&self) -> Option<CropRectangle> {
        match self {
            CropOutcome::Cropped { rect, .. } => Some(*rect),
            CropOutcome::Unchanged { .. } => None,
        }
    }

    pub fn rejection(&self) -> Option<&TrimRejection> {
        match self {
            CropOutcome::Unchanged { rejection, .. } => Some(rejection),
            CropOutcome::Cropped { .. } => None,
        }
    }
}
