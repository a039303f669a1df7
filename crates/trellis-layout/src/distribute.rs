#![forbid(unsafe_code)]

//! Weighted cell distribution with minimums and soft caps.
//!
//! [`distribute`] turns a capacity and an ordered list of
//! [`Extent`]s into concrete per-slot sizes that exhaust the capacity
//! exactly. Fixed extents take their declared units; flexible extents
//! reserve their minimum and then share the leftover proportionally by
//! weight, honoring soft caps while slack exists and releasing them when it
//! does not.
//!
//! The whole computation is integer arithmetic with a deterministic
//! remainder rule, so identical inputs always produce identical sizes.

use trellis_core::error::{ConfigIssue, LayoutError};
use trellis_core::extent::{Extent, ExtentKind};

/// The result of a successful distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// Per-slot sizes, in slot order. Sums to the requested total.
    pub sizes: Vec<i32>,
    /// Sum of all floors (fixed units plus flexible minimums).
    pub required: i32,
}

/// Distribute `total` cells across `extents`.
///
/// - `total < 0` is a configuration error.
/// - An empty extent list yields an empty allocation with `required = 0`;
///   an empty stack simply contributes nothing.
/// - If the floors alone exceed `total`, the call fails with a shortfall
///   carrying `need` (the floor sum) and `have` (`total`); no partial sizes
///   are returned.
/// - On success `sizes.iter().sum() == total` exactly.
///
/// Soft caps: a flexible extent's `max_cells` is honored only while other
/// slots can absorb the leftover. Once every capped slot is saturated and no
/// uncapped slot remains, the rest is redistributed ignoring caps, so slots
/// may exceed their declared maximum rather than the allocation failing.
/// A shortfall is only ever reported against minimums.
pub fn distribute(total: i32, extents: &[Extent]) -> Result<Allocation, LayoutError> {
    if total < 0 {
        return Err(LayoutError::Config {
            issue: ConfigIssue::InvalidTotal { total },
        });
    }
    if extents.is_empty() {
        return Ok(Allocation {
            sizes: Vec::new(),
            required: 0,
        });
    }

    // Pass 1: validate and seed floors.
    let mut sizes = vec![0i32; extents.len()];
    let mut flex = Vec::with_capacity(extents.len());
    let mut flex_units: i64 = 0;
    let mut floor_sum: i64 = 0;

    for (index, extent) in extents.iter().enumerate() {
        extent.validate(index)?;
        match extent.kind {
            ExtentKind::Fixed => sizes[index] = extent.units,
            ExtentKind::Flex => {
                sizes[index] = extent.min_cells;
                flex.push(index);
                flex_units += i64::from(extent.units);
            }
        }
        floor_sum += i64::from(sizes[index]);
    }

    if floor_sum > i64::from(total) {
        // Floors can sum past i32; the reported need saturates instead of
        // wrapping.
        let need = floor_sum.min(i64::from(i32::MAX)) as i32;
        return Err(LayoutError::shortfall(need, total));
    }
    let required = floor_sum as i32;

    // Pass 2: hand out the leftover.
    let leftover = total - required;
    if flex.is_empty() {
        if leftover > 0
            && let Some(last) = sizes.last_mut()
        {
            *last += leftover;
        }
        return Ok(Allocation { sizes, required });
    }

    let leftover = if flex.iter().any(|&i| extents[i].cap().is_some()) {
        place_within_caps(&mut sizes, extents, &flex, leftover)
    } else {
        leftover
    };

    if leftover > 0 {
        // Either no caps were declared, or every capped slot saturated with
        // no uncapped slot left: release the caps and spread by weight.
        spread(&mut sizes, extents, &flex, flex_units, leftover);
    }

    Ok(Allocation { sizes, required })
}

/// Add leftover to flexible slots proportionally while honoring caps.
///
/// Runs repeated rounds over the active set (flexible slots still below
/// their cap); a round's proportional shares are clamped to each slot's
/// remaining headroom, and saturated slots drop out of the next round.
/// Returns whatever could not be placed without exceeding a cap.
fn place_within_caps(
    sizes: &mut [i32],
    extents: &[Extent],
    flex: &[usize],
    mut leftover: i32,
) -> i32 {
    let mut active = flex.to_vec();

    while leftover > 0 {
        active.retain(|&index| headroom(&extents[index], sizes[index]) > 0);
        if active.is_empty() {
            break;
        }

        let active_units: i64 = active
            .iter()
            .map(|&index| i64::from(extents[index].units))
            .sum();

        let round = leftover;
        let mut placed = 0;
        for &index in &active {
            let share = (i64::from(round) * i64::from(extents[index].units) / active_units) as i32;
            let add = share.min(headroom(&extents[index], sizes[index]));
            sizes[index] += add;
            placed += add;
        }

        if placed == 0 {
            // Every integer share rounded down to zero; hand out single
            // cells in index order to whatever headroom remains.
            for &index in &active {
                if placed == leftover {
                    break;
                }
                if headroom(&extents[index], sizes[index]) > 0 {
                    sizes[index] += 1;
                    placed += 1;
                }
            }
        }

        if placed == 0 {
            break;
        }
        leftover -= placed;
    }

    leftover
}

/// Spread leftover across flexible slots by weight, ignoring caps, then hand
/// out the integer-division remainder one cell at a time in index order.
fn spread(sizes: &mut [i32], extents: &[Extent], flex: &[usize], flex_units: i64, leftover: i32) {
    let mut remainder = leftover;
    for &index in flex {
        let add = (i64::from(leftover) * i64::from(extents[index].units) / flex_units) as i32;
        sizes[index] += add;
        remainder -= add;
    }

    let mut cursor = 0;
    while remainder > 0 {
        sizes[flex[cursor % flex.len()]] += 1;
        remainder -= 1;
        cursor += 1;
    }
}

/// Cells a slot can still take before hitting its cap; effectively unbounded
/// for uncapped slots.
fn headroom(extent: &Extent, size: i32) -> i32 {
    match extent.cap() {
        Some(cap) => (cap - size).max(0),
        None => i32::MAX,
    }
}
