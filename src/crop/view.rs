use super::types::CropRectangle;
use image::{DynamicImage, GenericImageView, SubImage};

/// Minimal capability the cropper needs from an image.
///
/// `restrict` consumes the image and returns the region described by `rect`,
/// expressed in the image's own coordinates. Implementations are free to share
/// pixel storage with the input.
pub trait ImageView: Sized {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn restrict(self, rect: CropRectangle) -> Self;
}

/// Full-extent window over `image`, ready to be restricted without copying pixels
pub fn view<I: GenericImageView>(image: &I) -> SubImage<&I> {
    let (width, height) = image.dimensions();
    SubImage::new(image, 0, 0, width, height)
}

// Windows compose: the new bounds are relative to the current offsets.
impl<'a, I: GenericImageView> ImageView for SubImage<&'a I> {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn restrict(mut self, rect: CropRectangle) -> Self {
        let (x, y) = self.offsets();
        self.change_bounds(x + rect.left, y + rect.top, rect.width(), rect.height());
        self
    }
}

/// Owned images are copied into a new buffer
impl ImageView for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::dimensions(self).0
    }

    fn height(&self) -> u32 {
        GenericImageView::dimensions(self).1
    }

    fn restrict(self, rect: CropRectangle) -> Self {
        self.crop_imm(rect.left, rect.top, rect.width(), rect.height())
    }
}
