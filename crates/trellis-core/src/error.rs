#![forbid(unsafe_code)]

//! Layout error taxonomy.
//!
//! Every failure aborts the current pass and propagates unchanged; there is
//! no retry or partial result inside the engine. Callers that only care
//! about the general category test with [`LayoutError::is_config`] or
//! [`LayoutError::is_extent_too_small`] instead of matching specific
//! variants.
//!
//! Several failure classes of the system this engine descends from (invalid
//! axis, unknown extent kind, unknown fit mode, unknown node variant) are
//! unrepresentable here: the corresponding types are exhaustive enums, so no
//! error variants exist for them.

use std::fmt;

use crate::geometry::Axis;

/// Structural misuse detected before any allocation happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssue {
    /// A negative total capacity was passed to the distributor.
    InvalidTotal {
        /// The offending total.
        total: i32,
    },
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTotal { total } => write!(f, "invalid total {total}"),
        }
    }
}

/// A validation failure for a single extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtentIssue {
    /// `units` must be positive.
    UnitsInvalid {
        /// The offending units value.
        units: i32,
    },
    /// `min_cells` must be non-negative.
    MinCellsInvalid {
        /// The offending minimum.
        min_cells: i32,
    },
    /// `max_cells` must be non-negative.
    MaxCellsInvalid {
        /// The offending maximum.
        max_cells: i32,
    },
    /// A fixed extent's units must satisfy its own minimum.
    MinExceedsFixedUnits {
        /// Declared fixed size.
        units: i32,
        /// Declared minimum.
        min_cells: i32,
    },
    /// A flexible extent's cap must be at least its minimum.
    MaxBelowMin {
        /// Declared minimum.
        min_cells: i32,
        /// Declared cap.
        max_cells: i32,
    },
}

impl fmt::Display for ExtentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnitsInvalid { units } => write!(f, "invalid units {units}"),
            Self::MinCellsInvalid { min_cells } => write!(f, "invalid min cells {min_cells}"),
            Self::MaxCellsInvalid { max_cells } => write!(f, "invalid max cells {max_cells}"),
            Self::MinExceedsFixedUnits { units, min_cells } => {
                write!(f, "fixed units {units} below min cells {min_cells}")
            }
            Self::MaxBelowMin {
                min_cells,
                max_cells,
            } => write!(f, "max cells {max_cells} below min cells {min_cells}"),
        }
    }
}

/// Which stage ran out of space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortfall {
    /// Sum of minimums exceeded the capacity handed to the distributor.
    Allocation,
    /// A frame's chrome did not fit its allocated rectangle.
    Frame,
    /// Measured or wrapped content exceeded an otherwise valid content box.
    Content,
}

impl Shortfall {
    /// Short label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Shortfall::Allocation => "allocation",
            Shortfall::Frame => "frame",
            Shortfall::Content => "content",
        }
    }
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Any failure produced by distribution, arrangement, or fit resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Structural misuse; always caller-fixable.
    Config {
        /// The specific issue.
        issue: ConfigIssue,
    },
    /// An extent failed validation; counts as the configuration category.
    Extent {
        /// Index of the offending extent in its slot list.
        index: usize,
        /// The specific issue.
        issue: ExtentIssue,
    },
    /// Capacity shortfall.
    ExtentTooSmall {
        /// The split axis, once known. The distributor reports `None`; the
        /// arranger and fit resolver re-tag with the concrete axis.
        axis: Option<Axis>,
        /// Cells needed.
        need: i32,
        /// Cells available.
        have: i32,
        /// Human-readable stage context ("horizontal split", "frame a", ...).
        source: Option<String>,
        /// Which stage ran out of space.
        reason: Shortfall,
    },
    /// A stack's indexed slot access returned nothing where a spec was
    /// expected; counts as the configuration category.
    Slot {
        /// Index of the absent slot.
        index: usize,
    },
    /// No content provider was supplied for a frame render.
    ContentProviderMissing {
        /// The frame identifier, formatted for display.
        id: String,
    },
    /// The content provider rejected a frame identifier.
    UnknownId {
        /// The rejected identifier, formatted for display.
        id: String,
    },
}

impl LayoutError {
    /// Shortfall error as reported by the distributor, before the arranger
    /// tags it with an axis and stage label.
    #[must_use]
    pub fn shortfall(need: i32, have: i32) -> Self {
        Self::ExtentTooSmall {
            axis: None,
            need,
            have,
            source: None,
            reason: Shortfall::Allocation,
        }
    }

    /// True for structural misuse: config issues, extent validation
    /// failures, and absent slots.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::Config { .. } | Self::Extent { .. } | Self::Slot { .. }
        )
    }

    /// True for any capacity shortfall, whatever the stage.
    #[must_use]
    pub fn is_extent_too_small(&self) -> bool {
        matches!(self, Self::ExtentTooSmall { .. })
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { issue } => write!(f, "configuration invalid: {issue}"),
            Self::Extent { index, issue } => {
                write!(f, "configuration invalid: extent {index}: {issue}")
            }
            Self::ExtentTooSmall {
                axis,
                need,
                have,
                source,
                reason,
            } => {
                write!(f, "extent too small")?;
                if let Some(axis) = axis {
                    write!(f, " on {axis} axis")?;
                }
                if let Some(source) = source {
                    write!(f, " for {source}")?;
                }
                write!(f, " ({reason}): need {need}, have {have}")
            }
            Self::Slot { index } => write!(f, "configuration invalid: slot {index} is absent"),
            Self::ContentProviderMissing { id } => {
                write!(f, "no content provider for frame {id}")
            }
            Self::UnknownId { id } => write!(f, "unknown frame id {id}"),
        }
    }
}

impl std::error::Error for LayoutError {}
