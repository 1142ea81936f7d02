use bounded_crop::*;
use image::{DynamicImage, GenericImageView, Rgb, RgbImage, SubImage};
use std::cell::RefCell;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Every pixel encodes its own coordinates, so sub-rectangles are easy to check
fn create_coordinate_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 7) as u8]))
}

fn assert_matches_region(output: &SubImage<&RgbImage>, source: &RgbImage, left: u32, top: u32) {
    let (width, height) = output.dimensions();
    for y in 0..height {
        for x in 0..width {
            assert_eq!(output.get_pixel(x, y), *source.get_pixel(x + left, y + top), "pixel ({x}, {y})");
        }
    }
}

fn recorder(log: &RefCell<Vec<TrimRejection>>) -> impl Fn(&TrimRejection) + '_ {
    move |r: &TrimRejection| log.borrow_mut().push(*r)
}

#[test]
fn test_vertical_trim_on_200_square() {
    let source = create_coordinate_image(200, 200);
    let log = RefCell::new(Vec::new());
    let cropper = BoundedCropper::new().with_sink(recorder(&log));

    let cropped = cropper.crop(view(&source), &TrimSpec::new(30, 100, 0, 0));

    assert_eq!(cropped.dimensions(), (200, 70));
    assert_eq!(cropped.offsets(), (0, 30));
    assert_matches_region(&cropped, &source, 0, 30);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_small_image_is_returned_untouched() {
    let source = create_coordinate_image(60, 60);
    let log = RefCell::new(Vec::new());
    let cropper = BoundedCropper::new().with_sink(recorder(&log));

    let outcome = cropper.apply(view(&source), &TrimSpec::new(0, 0, 20, 20));

    assert!(!outcome.is_cropped());
    let image = outcome.into_image();
    assert_eq!(image.dimensions(), (60, 60));
    assert_eq!(image.offsets(), (0, 0));
    assert_matches_region(&image, &source, 0, 0);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn test_zero_trim_keeps_content() {
    let source = create_coordinate_image(100, 100);
    let log = RefCell::new(Vec::new());
    let cropper = BoundedCropper::new().with_sink(recorder(&log));

    let cropped = cropper.crop(view(&source), &TrimSpec::default());

    assert_eq!(cropped.dimensions(), (100, 100));
    assert_matches_region(&cropped, &source, 0, 0);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_exact_boundary_rejected_on_both_axes() {
    let source = create_coordinate_image(90, 131);
    let log = RefCell::new(Vec::new());
    let cropper = BoundedCropper::new().with_sink(recorder(&log));

    // width == 20 + 20 + 50
    let out = cropper.crop(view(&source), &TrimSpec::new(0, 0, 20, 20));
    assert_eq!(out.dimensions(), (90, 131));

    // height == 40 + 41 + 50
    let out = cropper.crop(view(&source), &TrimSpec::new(40, 41, 0, 0));
    assert_eq!(out.dimensions(), (90, 131));

    // one pixel short of the boundary on the height axis
    let out = cropper.crop(view(&source), &TrimSpec::new(40, 40, 0, 0));
    assert_eq!(out.dimensions(), (90, 51));

    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].axis, Axis::Horizontal);
    assert_eq!(log[1].axis, Axis::Vertical);
}

#[test]
fn test_inclusive_floor_produces_minimum() {
    let source = create_coordinate_image(90, 90);
    let log = RefCell::new(Vec::new());
    let cropper = BoundedCropper::new()
        .with_floor(FloorPolicy::Inclusive)
        .with_sink(recorder(&log));

    let cropped = cropper.crop(view(&source), &TrimSpec::uniform(20));

    assert_eq!(cropped.dimensions(), (50, 50));
    assert_matches_region(&cropped, &source, 20, 20);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_nested_views_compose_offsets() {
    let source = create_coordinate_image(300, 300);
    let cropper = BoundedCropper::new().with_minimum(MinimumSize::new(10, 10));

    let first = cropper.crop(view(&source), &TrimSpec::new(10, 20, 30, 40));
    assert_eq!(first.offsets(), (30, 10));
    assert_eq!(first.dimensions(), (230, 270));

    let second = cropper.crop(first, &TrimSpec::new(5, 5, 5, 5));
    assert_eq!(second.offsets(), (35, 15));
    assert_eq!(second.dimensions(), (220, 260));
    assert_matches_region(&second, &source, 35, 15);
}

#[test]
fn test_dynamic_image_is_copied_region() {
    let source = create_coordinate_image(120, 80);
    let image = DynamicImage::ImageRgb8(source.clone());

    let cropped = crop(image, &TrimSpec::new(5, 10, 15, 20), MinimumSize::default());

    assert_eq!((cropped.width(), cropped.height()), (85, 65));
    let rgb = cropped.to_rgb8();
    assert_matches_region(&view(&rgb), &source, 15, 5);
}

#[test]
fn test_dynamic_image_rejection_keeps_pixels() {
    let source = create_coordinate_image(40, 40);
    let image = DynamicImage::ImageRgb8(source.clone());

    let out = crop(image, &TrimSpec::uniform(1), MinimumSize::default());

    assert_eq!(out.to_rgb8(), source);
}

#[derive(Clone, Default)]
struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_default_sink_emits_one_warning() {
    let writer = CaptureWriter::default();
    let make_writer = writer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || make_writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    let source = create_coordinate_image(60, 60);
    tracing::subscriber::with_default(subscriber, || {
        let cropper = BoundedCropper::new();
        cropper.crop(view(&source), &TrimSpec::new(0, 0, 20, 20));
        cropper.crop(view(&source), &TrimSpec::default());
    });

    let output = String::from_utf8(writer.0.lock().unwrap().clone()).unwrap();
    assert_eq!(output.matches("too small to trim").count(), 1);
    assert!(output.contains("WARN"));
    assert!(output.contains("axis=horizontal"));
}
