//! Vertical placement of leaderboard rows.

use super::types::{MAX_TOP_ROWS, MarketSummaryRow};

/// Fixed row grid of a leaderboard theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowGeometry {
    /// Top of the first row
    pub start_y: f64,
    pub row_height: f64,
    /// Space between consecutive rows
    pub gap: f64,
    /// No row starts below this line
    pub cutoff_y: f64,
}

impl RowGeometry {
    /// Distance from one row top to the next.
    pub fn pitch(&self) -> f64 {
        self.row_height + self.gap
    }
}

/// A row paired with the vertical band it occupies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSlot<'a> {
    /// Position in the drawn sequence, 0-based
    pub index: usize,
    pub row: &'a MarketSummaryRow,
    pub top: f64,
}

impl RowSlot<'_> {
    pub fn bottom(&self, geometry: &RowGeometry) -> f64 {
        self.top + geometry.row_height
    }
}

/// Slots for the rows that will be drawn, in input order.
///
/// At most [`MAX_TOP_ROWS`] rows are taken; the pixel cutoff only ends the
/// sequence early when a theme's grid cannot hold them all.
pub fn row_slots<'a>(rows: &'a [MarketSummaryRow], geometry: &RowGeometry) -> Vec<RowSlot<'a>> {
    let mut slots = Vec::with_capacity(rows.len().min(MAX_TOP_ROWS));
    let mut top = geometry.start_y;

    for (index, row) in rows.iter().take(MAX_TOP_ROWS).enumerate() {
        if top > geometry.cutoff_y {
            log::warn!(
                "Row grid full after {} rows (next top {:.0} > {:.0})",
                index,
                top,
                geometry.cutoff_y
            );
            break;
        }
        slots.push(RowSlot { index, row, top });
        top += geometry.pitch();
    }

    slots
}
