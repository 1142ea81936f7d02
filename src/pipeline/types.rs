use crate::crop::{CropOutcome, CropRectangle, FloorPolicy, MinimumSize, TrimRejection, TrimSpec};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Summary of one crop decision, written by `--report` and `--json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropReport {
    pub input: PathBuf,

    /// None for a dry run
    pub output: Option<PathBuf>,

    pub original_size: (u32, u32),

    /// Size of the image that was (or would be) written
    pub result_size: (u32, u32),

    pub trim: TrimSpec,
    pub minimum: MinimumSize,
    pub floor: FloorPolicy,

    /// True when the trim was applied
    pub applied: bool,

    pub rectangle: Option<CropRectangle>,
    pub rejection: Option<TrimRejection>,

    pub processing_time_ms: f32,
}

impl CropReport {
    pub(crate) fn from_outcome<V>(
        input: PathBuf,
        original_size: (u32, u32),
        trim: TrimSpec,
        minimum: MinimumSize,
        floor: FloorPolicy,
        outcome: &CropOutcome<V>,
    ) -> Self {
        let result_size = outcome.rect().map_or(original_size, |r| (r.width(), r.height()));

        Self {
            input,
            output: None,
            original_size,
            result_size,
            trim,
            minimum,
            floor,
            applied: outcome.is_cropped(),
            rectangle: outcome.rect(),
            rejection: outcome.rejection().copied(),
            processing_time_ms: 0.0,
        }
    }

    /// One-line human summary for the console
    pub fn summary(&self) -> String {
        match (&self.rectangle, &self.rejection) {
            (Some(rect), _) => format!(
                "{}: {}x{} -> {}x{} (kept {},{} to {},{})",
                self.input.display(),
                self.original_size.0,
                self.original_size.1,
                self.result_size.0,
                self.result_size.1,
                rect.left,
                rect.top,
                rect.right,
                rect.bottom
            ),
            (None, Some(rejection)) => format!(
                "{}: {}x{} left unchanged ({})",
                self.input.display(),
                self.original_size.0,
                self.original_size.1,
                rejection
            ),
            (None, None) => format!("{}: no decision recorded", self.input.display()),
        }
    }
}
