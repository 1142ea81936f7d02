//! File-level crop runs used by the `bcrop` binary

pub mod types;

pub use types::*;

use crate::crop::{BoundedCropper, DiagnosticSink, TrimSpec};
use crate::data::{load_image, save_image};
use anyhow::Context;
use std::path::Path;
use std::time::Instant;

/// Load `input`, apply `trim` and write the result to `output`.
///
/// A rejected trim still writes `output`, as a re-encoded copy of the input.
pub fn crop_file<S: DiagnosticSink>(
    cropper: &BoundedCropper<S>,
    input: &Path,
    output: &Path,
    trim: &TrimSpec,
) -> crate::Result<CropReport> {
    let image = load_image(input)?;
    let start = Instant::now();
    let original_size = (image.width(), image.height());

    let outcome = cropper.apply(image, trim);
    let elapsed = start.elapsed().as_secs_f32() * 1000.0;

    let mut report = CropReport::from_outcome(
        input.to_path_buf(),
        original_size,
        *trim,
        cropper.minimum(),
        cropper.floor(),
        &outcome,
    );
    report.processing_time_ms = elapsed;

    save_image(outcome.image(), output)?;
    report.output = Some(output.to_path_buf());

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        applied = report.applied,
        "crop finished"
    );
    Ok(report)
}

/// Decide what `trim` would do to `input` without writing anything or warning
pub fn check_file<S: DiagnosticSink>(
    cropper: &BoundedCropper<S>,
    input: &Path,
    trim: &TrimSpec,
) -> crate::Result<CropReport> {
    let original_size = image::image_dimensions(input)
        .with_context(|| format!("Failed to read image header of {}", input.display()))?;

    let (rectangle, rejection) = match cropper.check(original_size.0, original_size.1, trim) {
        Ok(rect) => (Some(rect), None),
        Err(rejection) => (None, Some(rejection)),
    };

    Ok(CropReport {
        input: input.to_path_buf(),
        output: None,
        original_size,
        result_size: rectangle.map_or(original_size, |r| (r.width(), r.height())),
        trim: *trim,
        minimum: cropper.minimum(),
        floor: cropper.floor(),
        applied: rectangle.is_some(),
        rectangle,
        rejection,
        processing_time_ms: 0.0,
    })
}

/// Write `report` as pretty JSON
pub fn save_report(report: &CropReport, path: &Path) -> crate::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write report {}", path.display()))?;
    Ok(())
}
