// Domain rules - Clip window resolution

use crate::domain::model::*;
use crate::error::WindowError;


/// Converts end-anchored offsets into a start-anchored clip window
pub struct ClipWindowResolver;

impl ClipWindowResolver {
    /// The clip must start further from the end than it ends
    pub fn ensure_offsets_ordered(range: &EndAnchoredRange) -> Result<(), WindowError> {
        if range.start_offset <= range.end_offset {
            return Err(WindowError::StartNotBeforeEnd {
                start: range.start_offset.to_string(),
                end: range.end_offset.to_string(),
            });
        }
        Ok(())
    }

    /// Resolve `range` against the video's total duration
    pub fn resolve(total: Timestamp, range: &EndAnchoredRange) -> Result<ClipWindow, WindowError> {
        Self::ensure_offsets_ordered(range)?;

        let start = Self::anchor_to_start(total, range.start_offset)?;
        let end = Self::anchor_to_start(total, range.end_offset)?;

        ClipWindow::new(start, end)
    }

    fn anchor_to_start(total: Timestamp, offset: Timestamp) -> Result<Timestamp, WindowError> {
        total
            .checked_sub(offset)
            .ok_or_else(|| WindowError::OutOfRange {
                offset: offset.to_string(),
                total: total.to_string(),
            })
    }
}
