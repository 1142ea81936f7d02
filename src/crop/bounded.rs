use super::diagnostics::{DiagnosticSink, TracingSink};
use super::types::{Axis, CropOutcome, CropRectangle, FloorPolicy, MinimumSize, TrimRejection, TrimSpec};
use super::view::ImageView;

/// Trims edge margins off images, refusing any trim that would leave less
/// than the configured minimum size.
///
/// A rejected trim is not an error: the image comes back untouched and the
/// sink receives one diagnostic.
#[derive(Debug, Clone)]
pub struct BoundedCropper<S = TracingSink> {
    minimum: MinimumSize,
    floor: FloorPolicy,
    sink: S,
}

impl Default for BoundedCropper {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundedCropper {
    pub fn new() -> Self {
        Self {
            minimum: MinimumSize::default(),
            floor: FloorPolicy::default(),
            sink: TracingSink,
        }
    }
}

impl<S: DiagnosticSink> BoundedCropper<S> {
    pub fn with_minimum(mut self, minimum: MinimumSize) -> Self {
        self.minimum = minimum;
        self
    }

    pub fn with_floor(mut self, floor: FloorPolicy) -> Self {
        self.floor = floor;
        self
    }

    /// Replace the diagnostic sink
    pub fn with_sink<T: DiagnosticSink>(self, sink: T) -> BoundedCropper<T> {
        BoundedCropper {
            minimum: self.minimum,
            floor: self.floor,
            sink,
        }
    }

    pub fn minimum(&self) -> MinimumSize {
        self.minimum
    }

    pub fn floor(&self) -> FloorPolicy {
        self.floor
    }

    /// Decide whether `trim` fits an image of `width` x `height`.
    ///
    /// The horizontal axis is checked first and is the one reported when
    /// both fail. No diagnostic is emitted.
    pub fn check(&self, width: u32, height: u32, trim: &TrimSpec) -> Result<CropRectangle, TrimRejection> {
        let horizontal = trim.horizontal_budget();
        if self.floor.rejects(width, horizontal, self.minimum.min_width) {
            return Err(TrimRejection {
                axis: Axis::Horizontal,
                extent: width,
                budget: horizontal,
                minimum: self.minimum.min_width,
            });
        }

        let vertical = trim.vertical_budget();
        if self.floor.rejects(height, vertical, self.minimum.min_height) {
            return Err(TrimRejection {
                axis: Axis::Vertical,
                extent: height,
                budget: vertical,
                minimum: self.minimum.min_height,
            });
        }

        // Both budgets are below the extents here, so the subtractions cannot wrap.
        Ok(CropRectangle {
            left: trim.left,
            top: trim.top,
            right: width - trim.right,
            bottom: height - trim.bottom,
        })
    }

    /// Crop `image`, reporting which branch was taken
    pub fn apply<V: ImageView>(&self, image: V, trim: &TrimSpec) -> CropOutcome<V> {
        match self.check(image.width(), image.height(), trim) {
            Ok(rect) => {
                tracing::debug!(
                    left = rect.left,
                    top = rect.top,
                    right = rect.right,
                    bottom = rect.bottom,
                    "trimming image"
                );
                CropOutcome::Cropped {
                    image: image.restrict(rect),
                    rect,
                }
            }
            Err(rejection) => {
                self.sink.trim_rejected(&rejection);
                CropOutcome::Unchanged { image, rejection }
            }
        }
    }

    /// Crop `image`, or hand it back unchanged if the trim is too large
    pub fn crop<V: ImageView>(&self, image: V, trim: &TrimSpec) -> V {
        self.apply(image, trim).into_image()
    }
}

/// One-shot crop with the default tracing sink
pub fn crop<V: ImageView>(image: V, trim: &TrimSpec, minimum: MinimumSize) -> V {
    BoundedCropper::new().with_minimum(minimum).crop(image, trim)
}
