#![forbid(unsafe_code)]

//! Per-slot sizing declarations.
//!
//! An [`Extent`] describes how much space one slot should take along its
//! parent's split axis: either an exact cell count ([`ExtentKind::Fixed`]) or
//! a proportional weight with an optional minimum and soft maximum
//! ([`ExtentKind::Flex`]).

use crate::error::{ExtentIssue, LayoutError};

/// Whether an [`Extent`] is fixed or flexible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExtentKind {
    /// Exact cell count; `units` is the allocated size.
    #[default]
    Fixed,
    /// Proportional share; `units` is a weight applied to leftover space.
    Flex,
}

/// Sizing declaration for one slot along one axis.
///
/// For frames this is the total allocation (content plus any chrome); for
/// stacks it is the footprint presented to the parent.
///
/// Invariants (checked by [`validate`](Extent::validate)):
///
/// - `units > 0`
/// - `min_cells >= 0` and `max_cells >= 0`
/// - fixed extents must have `units >= min_cells`; their `max_cells` is ignored
/// - flexible extents with a cap must have `max_cells >= min_cells`
///
/// `max_cells` is a *soft* cap: it is honored only while slack capacity
/// exists elsewhere. Under global shortfall the distributor releases caps
/// rather than failing (see `trellis-layout`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extent {
    /// Fixed or flexible.
    pub kind: ExtentKind,
    /// Exact size (fixed) or proportional weight (flexible).
    pub units: i32,
    /// Minimum cells to reserve on this axis (0 = no minimum).
    pub min_cells: i32,
    /// Maximum cells to prefer on this axis (0 = no cap; flexible only).
    pub max_cells: i32,
}

impl Extent {
    /// A weight-1 flexible extent with no bounds.
    #[inline]
    pub const fn fill() -> Self {
        Self {
            kind: ExtentKind::Flex,
            units: 1,
            min_cells: 0,
            max_cells: 0,
        }
    }

    /// A fixed extent of exactly `units` cells.
    #[inline]
    pub const fn fixed(units: i32) -> Self {
        Self {
            kind: ExtentKind::Fixed,
            units,
            min_cells: units,
            max_cells: 0,
        }
    }

    /// A flexible extent with the given weight and no bounds.
    #[inline]
    pub const fn flex(units: i32) -> Self {
        Self {
            kind: ExtentKind::Flex,
            units,
            min_cells: 0,
            max_cells: 0,
        }
    }

    /// A flexible extent with a reserved minimum.
    #[inline]
    pub const fn flex_min(units: i32, min_cells: i32) -> Self {
        Self {
            kind: ExtentKind::Flex,
            units,
            min_cells,
            max_cells: 0,
        }
    }

    /// A flexible extent with a soft cap.
    #[inline]
    pub const fn flex_max(units: i32, max_cells: i32) -> Self {
        Self {
            kind: ExtentKind::Flex,
            units,
            min_cells: 0,
            max_cells,
        }
    }

    /// A flexible extent with both a reserved minimum and a soft cap.
    #[inline]
    pub const fn flex_bounded(units: i32, min_cells: i32, max_cells: i32) -> Self {
        Self {
            kind: ExtentKind::Flex,
            units,
            min_cells,
            max_cells,
        }
    }

    /// The soft cap, if one is declared on a flexible extent.
    #[inline]
    #[must_use]
    pub const fn cap(&self) -> Option<i32> {
        match self.kind {
            ExtentKind::Flex if self.max_cells > 0 => Some(self.max_cells),
            _ => None,
        }
    }

    /// Validate this extent as slot `index`, returning the tagged issue on
    /// violation.
    pub fn validate(&self, index: usize) -> Result<(), LayoutError> {
        let issue = if self.units <= 0 {
            Some(ExtentIssue::UnitsInvalid { units: self.units })
        } else if self.min_cells < 0 {
            Some(ExtentIssue::MinCellsInvalid {
                min_cells: self.min_cells,
            })
        } else if self.max_cells < 0 {
            Some(ExtentIssue::MaxCellsInvalid {
                max_cells: self.max_cells,
            })
        } else {
            match self.kind {
                ExtentKind::Fixed if self.units < self.min_cells => {
                    Some(ExtentIssue::MinExceedsFixedUnits {
                        units: self.units,
                        min_cells: self.min_cells,
                    })
                }
                ExtentKind::Flex if self.max_cells > 0 && self.max_cells < self.min_cells => {
                    Some(ExtentIssue::MaxBelowMin {
                        min_cells: self.min_cells,
                        max_cells: self.max_cells,
                    })
                }
                _ => None,
            }
        };

        match issue {
            Some(issue) => Err(LayoutError::Extent { index, issue }),
            None => Ok(()),
        }
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::fill()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_expected_fields() {
        assert_eq!(Extent::fixed(4).min_cells, 4);
        assert_eq!(Extent::fixed(4).kind, ExtentKind::Fixed);
        assert_eq!(Extent::fill().units, 1);
        assert_eq!(Extent::flex_bounded(2, 1, 5).max_cells, 5);
    }

    #[test]
    fn cap_only_on_flexible_extents() {
        assert_eq!(Extent::flex_max(1, 3).cap(), Some(3));
        assert_eq!(Extent::flex(1).cap(), None);
        // A fixed extent ignores max_cells entirely.
        let fixed = Extent {
            kind: ExtentKind::Fixed,
            units: 2,
            min_cells: 0,
            max_cells: 1,
        };
        assert_eq!(fixed.cap(), None);
    }

    #[test]
    fn validate_rejects_bad_fields() {
        let cases = [
            (Extent::fixed(0), "units"),
            (Extent::flex(-1), "units"),
            (Extent::flex_min(1, -1), "min"),
            (Extent::flex_max(1, -1), "max"),
            (Extent::flex_bounded(1, 3, 2), "max below min"),
        ];
        for (extent, what) in cases {
            let err = extent.validate(0).unwrap_err();
            assert!(err.is_config(), "{what}: expected config error, got {err}");
        }

        let fixed_under_min = Extent {
            kind: ExtentKind::Fixed,
            units: 1,
            min_cells: 2,
            max_cells: 0,
        };
        assert!(fixed_under_min.validate(0).is_err());
    }

    #[test]
    fn validate_tags_the_offending_index() {
        let err = Extent::flex(0).validate(3).unwrap_err();
        match err {
            LayoutError::Extent { index, .. } => assert_eq!(index, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn validate_accepts_well_formed_extents() {
        for extent in [
            Extent::fill(),
            Extent::fixed(1),
            Extent::flex(3),
            Extent::flex_min(1, 2),
            Extent::flex_max(1, 2),
            Extent::flex_bounded(2, 1, 4),
        ] {
            assert!(extent.validate(0).is_ok());
        }
    }
}
