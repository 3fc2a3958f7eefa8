//! Configuration models for the three design generators.
//!
//! Each tool owns a plain configuration value object; setters clamp
//! numeric input and enum parsing falls back to documented defaults, so
//! no mutation can ever fail or leave a configuration invalid.

pub mod button;
pub mod color;
pub mod grid;
pub mod input;

pub use button::{ButtonConfig, ButtonIcon, HoverEffect};
pub use color::{palette_next, palette_prev, HexColor, PALETTE};
pub use grid::{GridConfig, GridPreset, ItemAlignment, LayoutMode, GRID_PRESETS};
pub use input::{InputConfig, InputKind, SampleOption, SAMPLE_OPTIONS};
