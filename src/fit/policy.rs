/*!
 * Fit Policies
 * Run-selection rules for the tracked-pointer strategies
 */

use crate::core::types::{Address, Size};
use crate::types::CellStatus;

/// Selection rule for a free run among the status cells
pub trait FitPolicy {
    /// Name used in logs
    const NAME: &'static str;

    /// Pick the start address of a free run of at least `size` cells
    fn pick(status: &[CellStatus], size: Size) -> Option<Address>;
}

/// First run long enough wins
pub struct FirstFitPolicy;

impl FitPolicy for FirstFitPolicy {
    const NAME: &'static str = "first-fit";

    fn pick(status: &[CellStatus], size: Size) -> Option<Address> {
        let mut start = 0;
        let mut run = 0;
        for (i, cell) in status.iter().enumerate() {
            match cell {
                CellStatus::Allocated => {
                    start = i + 1;
                    run = 0;
                }
                CellStatus::Free => {
                    run += 1;
                    if run == size {
                        return Some(start);
                    }
                }
            }
        }
        None
    }
}

/// Run with the smallest leftover wins
pub struct BestFitPolicy;

impl FitPolicy for BestFitPolicy {
    const NAME: &'static str = "best-fit";

    fn pick(status: &[CellStatus], size: Size) -> Option<Address> {
        let mut best: Option<(Address, Size)> = None;

        let mut start = 0;
        while start < status.len() {
            let mut end = start;
            while end + 1 < status.len() && status[end + 1] == status[start] {
                end += 1;
            }
            let length = end - start + 1;
            if status[start] == CellStatus::Free && length >= size {
                let leftover = length - size;
                // Strict less-than: on equal leftover the earlier run stands
                match best {
                    Some((_, smallest)) if leftover >= smallest => {}
                    _ => best = Some((start, leftover)),
                }
            }
            start = end + 1;
        }

        best.map(|(address, _)| address)
    }
}
