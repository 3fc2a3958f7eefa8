//! Live preview model derived from the latest render output.
//!
//! The preview tree is a retained structure the TUI draws from. It owns
//! copies of the directive sets so a redraw never needs to re-run the
//! generator.

use crate::generator::{DirectiveSet, RenderOutput};

/// One preview artifact: a grid cell, or the single button/input unit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreviewUnit {
    /// Label text rendered inside the unit, if labels are enabled
    pub label: Option<String>,
    /// Style directives for this unit
    pub directives: DirectiveSet,
}

/// The full preview: container directives plus one entry per unit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreviewTree {
    /// Style directives for the surrounding container
    pub container: DirectiveSet,
    /// Preview units in row-major order
    pub units: Vec<PreviewUnit>,
}

impl PreviewTree {
    /// Creates an empty tree. The first `rebuild` populates it.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            container: DirectiveSet::new(),
            units: Vec::new(),
        }
    }

    /// Builds a tree directly from a render output.
    #[must_use]
    pub fn from_output(output: &RenderOutput) -> Self {
        let mut tree = Self::new();
        tree.rebuild(output);
        tree
    }

    /// Replaces the whole tree with the state of a new render output.
    ///
    /// Units are discarded and repopulated, never patched, so stale
    /// artifacts cannot survive a configuration change.
    pub fn rebuild(&mut self, output: &RenderOutput) {
        self.container = output.container.clone();
        self.units.clear();
        for index in 0..output.unit_count {
            self.units.push(PreviewUnit {
                label: output.unit_labels.get(index).cloned(),
                directives: output.unit.clone(),
            });
        }
    }

    /// Number of units in the tree.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }
}
