//! Configuration model for the CSS grid design generator.
//!
//! All setters clamp or normalize their input; no operation on a
//! [`GridConfig`] can fail or leave the configuration outside its
//! documented ranges.

use super::color::HexColor;
use serde::{Deserialize, Serialize};

/// Minimum number of rows or columns.
pub const MIN_TRACKS: u32 = 1;
/// Maximum number of rows or columns.
pub const MAX_TRACKS: u32 = 12;
/// Valid gap range in pixels.
pub const GAP_RANGE: (u32, u32) = (0, 50);
/// Valid minimum-cell-size range in pixels.
pub const CELL_MIN_RANGE: (u32, u32) = (20, 200);

/// Track sizing strategy for the grid template.
///
/// Each mode selects a distinct sizing formula; the generator treats any
/// unrecognized mode name as [`LayoutMode::Flexible`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Fixed-pixel tracks equal to the minimum cell size
    Static,
    /// Equal-fraction (`1fr`) tracks on both axes
    #[default]
    Flexible,
    /// Auto-filled tracks no smaller than the minimum cell size
    Auto,
    /// `minmax(min, 1fr)` tracks on both axes
    Mixed,
}

impl LayoutMode {
    /// All recognized modes, in the order the UI cycles through them.
    pub const ALL: [Self; 4] = [Self::Static, Self::Flexible, Self::Auto, Self::Mixed];

    /// Returns the lowercase mode name used in the CLI and config file.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Flexible => "flexible",
            Self::Auto => "auto",
            Self::Mixed => "mixed",
        }
    }

    /// Parses a mode name, falling back to `Flexible` for anything
    /// unrecognized. This is a documented fallback, not an error.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "static" => Self::Static,
            "auto" => Self::Auto,
            "mixed" => Self::Mixed,
            _ => Self::Flexible,
        }
    }

    /// Returns the next mode in cycle order.
    #[must_use]
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|m| *m == self).unwrap_or(1);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Returns the previous mode in cycle order.
    #[must_use]
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|m| *m == self).unwrap_or(1);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Placement of items within their grid area, used for both
/// `align-items` and `justify-items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemAlignment {
    /// Fill the grid area (CSS default)
    #[default]
    Stretch,
    /// Pack toward the start edge
    Start,
    /// Center within the area
    Center,
    /// Pack toward the end edge
    End,
}

impl ItemAlignment {
    /// All recognized alignments, in UI cycle order.
    pub const ALL: [Self; 4] = [Self::Stretch, Self::Start, Self::Center, Self::End];

    /// Returns the CSS keyword for this alignment.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }

    /// Parses an alignment keyword, falling back to `Stretch`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "start" => Self::Start,
            "center" => Self::Center,
            "end" => Self::End,
            _ => Self::Stretch,
        }
    }

    /// Returns the next alignment in cycle order.
    #[must_use]
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Returns the previous alignment in cycle order.
    #[must_use]
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A named row/column preset offered by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPreset {
    /// Display label, e.g. "3 x 3"
    pub name: &'static str,
    /// Preset row count
    pub rows: u32,
    /// Preset column count
    pub cols: u32,
}

/// Presets cycled by the grid tool.
pub const GRID_PRESETS: &[GridPreset] = &[
    GridPreset { name: "2 x 2", rows: 2, cols: 2 },
    GridPreset { name: "3 x 3", rows: 3, cols: 3 },
    GridPreset { name: "4 x 4", rows: 4, cols: 4 },
    GridPreset { name: "3 x 2", rows: 3, cols: 2 },
    GridPreset { name: "1 x 12", rows: 1, cols: 12 },
];

/// Current parameter values for the CSS grid generator.
///
/// Numeric fields are private so every mutation goes through a clamping
/// setter; enum, boolean, and color fields carry their invariants in
/// their types and are freely assignable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    rows: u32,
    cols: u32,
    gap: u32,
    cell_min: u32,
    /// Track sizing strategy
    pub layout_mode: LayoutMode,
    /// Vertical placement of items in their cells
    pub align_items: ItemAlignment,
    /// Horizontal placement of items in their cells
    pub justify_items: ItemAlignment,
    /// Cell fill/border color
    pub cell_color: HexColor,
    /// Whether cells display their "row-col" coordinate label
    pub show_cell_text: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            gap: 10,
            cell_min: 80,
            layout_mode: LayoutMode::Flexible,
            align_items: ItemAlignment::Stretch,
            justify_items: ItemAlignment::Stretch,
            cell_color: HexColor::new(0x43, 0x61, 0xee),
            show_cell_text: true,
        }
    }
}

impl GridConfig {
    /// Current row count, always within `[MIN_TRACKS, MAX_TRACKS]`.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Current column count, always within `[MIN_TRACKS, MAX_TRACKS]`.
    #[must_use]
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Gap between cells in pixels.
    #[must_use]
    pub const fn gap(&self) -> u32 {
        self.gap
    }

    /// Minimum cell size in pixels.
    #[must_use]
    pub const fn cell_min(&self) -> u32 {
        self.cell_min
    }

    /// Sets the row count, clamping to the valid range.
    pub fn set_rows(&mut self, rows: u32) {
        self.rows = rows.clamp(MIN_TRACKS, MAX_TRACKS);
    }

    /// Sets the column count, clamping to the valid range.
    pub fn set_cols(&mut self, cols: u32) {
        self.cols = cols.clamp(MIN_TRACKS, MAX_TRACKS);
    }

    /// Sets the gap, clamping to `GAP_RANGE`.
    pub fn set_gap(&mut self, gap: u32) {
        self.gap = gap.clamp(GAP_RANGE.0, GAP_RANGE.1);
    }

    /// Sets the minimum cell size, clamping to `CELL_MIN_RANGE`.
    pub fn set_cell_min(&mut self, cell_min: u32) {
        self.cell_min = cell_min.clamp(CELL_MIN_RANGE.0, CELL_MIN_RANGE.1);
    }

    /// Adds a row. A no-op at the maximum.
    pub fn add_row(&mut self) {
        self.set_rows(self.rows.saturating_add(1));
    }

    /// Removes a row. A no-op at the minimum.
    pub fn remove_row(&mut self) {
        self.set_rows(self.rows.saturating_sub(1));
    }

    /// Adds a column. A no-op at the maximum.
    pub fn add_col(&mut self) {
        self.set_cols(self.cols.saturating_add(1));
    }

    /// Removes a column. A no-op at the minimum.
    pub fn remove_col(&mut self) {
        self.set_cols(self.cols.saturating_sub(1));
    }

    /// Applies a row/column preset, clamping as usual.
    pub fn apply_preset(&mut self, preset: GridPreset) {
        self.set_rows(preset.rows);
        self.set_cols(preset.cols);
    }

    /// Total number of cells the grid renders.
    #[must_use]
    pub const fn cell_count(&self) -> u32 {
        self.rows * self.cols
    }

    /// Restores every field to its documented default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GridConfig::default();
        assert_eq!(config.rows(), 3);
        assert_eq!(config.cols(), 3);
        assert_eq!(config.gap(), 10);
        assert_eq!(config.cell_min(), 80);
        assert_eq!(config.layout_mode, LayoutMode::Flexible);
        assert!(config.show_cell_text);
        assert_eq!(config.cell_color.to_hex(), "#4361ee");
    }

    #[test]
    fn test_set_rows_clamps_both_ends() {
        let mut config = GridConfig::default();
        config.set_rows(99);
        assert_eq!(config.rows(), MAX_TRACKS);
        config.set_rows(0);
        assert_eq!(config.rows(), MIN_TRACKS);
    }

    #[test]
    fn test_increment_at_max_is_noop() {
        let mut config = GridConfig::default();
        config.set_rows(MAX_TRACKS);
        config.add_row();
        assert_eq!(config.rows(), MAX_TRACKS);

        config.set_cols(MAX_TRACKS);
        config.add_col();
        assert_eq!(config.cols(), MAX_TRACKS);
    }

    #[test]
    fn test_decrement_at_min_is_noop() {
        let mut config = GridConfig::default();
        config.set_rows(MIN_TRACKS);
        config.remove_row();
        assert_eq!(config.rows(), MIN_TRACKS);

        config.set_cols(MIN_TRACKS);
        config.remove_col();
        assert_eq!(config.cols(), MIN_TRACKS);
    }

    #[test]
    fn test_gap_and_cell_min_clamp() {
        let mut config = GridConfig::default();
        config.set_gap(500);
        assert_eq!(config.gap(), GAP_RANGE.1);
        config.set_cell_min(1);
        assert_eq!(config.cell_min(), CELL_MIN_RANGE.0);
        config.set_cell_min(10_000);
        assert_eq!(config.cell_min(), CELL_MIN_RANGE.1);
    }

    #[test]
    fn test_layout_mode_from_name_fallback() {
        assert_eq!(LayoutMode::from_name("static"), LayoutMode::Static);
        assert_eq!(LayoutMode::from_name("AUTO"), LayoutMode::Auto);
        assert_eq!(LayoutMode::from_name("garbage"), LayoutMode::Flexible);
        assert_eq!(LayoutMode::from_name(""), LayoutMode::Flexible);
    }

    #[test]
    fn test_layout_mode_cycle_is_total() {
        let mut mode = LayoutMode::Static;
        for _ in 0..LayoutMode::ALL.len() {
            mode = mode.next();
        }
        assert_eq!(mode, LayoutMode::Static);
        assert_eq!(LayoutMode::Auto.next().prev(), LayoutMode::Auto);
    }

    #[test]
    fn test_alignment_from_name_fallback() {
        assert_eq!(ItemAlignment::from_name("center"), ItemAlignment::Center);
        assert_eq!(ItemAlignment::from_name("nope"), ItemAlignment::Stretch);
    }

    #[test]
    fn test_apply_preset_clamps() {
        let mut config = GridConfig::default();
        config.apply_preset(GridPreset {
            name: "too big",
            rows: 40,
            cols: 0,
        });
        assert_eq!(config.rows(), MAX_TRACKS);
        assert_eq!(config.cols(), MIN_TRACKS);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut config = GridConfig::default();
        config.set_rows(7);
        config.layout_mode = LayoutMode::Static;
        config.show_cell_text = false;
        config.reset();
        assert_eq!(config, GridConfig::default());
    }
}
