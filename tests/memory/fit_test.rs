/*!
 * Fit Strategy Tests
 * Allocation, release, and policy behavior for first-fit and best-fit
 */

use memsim::{Allocator, BestFit, BuddyMemory, CellStatus, FirstFit, MemoryError, MemoryInfo};
use pretty_assertions::assert_eq;

#[test]
fn strategies_share_the_allocator_contract() {
    fn exercise(mem: &mut dyn Allocator) -> String {
        let handle = mem.alloc(8).unwrap();
        mem.release(handle).unwrap();
        mem.layout_report()
    }

    assert!(exercise(&mut FirstFit::new(64)).contains("FREE"));
    assert!(exercise(&mut BestFit::new(64)).contains("FREE"));
    assert!(exercise(&mut BuddyMemory::new(64)).contains("Free"));
}

#[test]
fn fresh_memory_is_one_free_run() {
    let mem = FirstFit::new(100);
    assert_eq!(mem.runs(), vec![(0, 99, CellStatus::Free)]);

    let (total, used, available) = mem.info();
    assert_eq!((total, used, available), (100, 0, 100));
}

#[test]
fn allocation_marks_exactly_the_requested_range() {
    let mut mem = FirstFit::new(100);
    let a = mem.alloc(10).unwrap();

    assert_eq!(mem.address_of(a), 0);
    assert_eq!(
        mem.runs(),
        vec![(0, 9, CellStatus::Allocated), (10, 99, CellStatus::Free)]
    );
}

#[test]
fn allocations_are_disjoint() {
    let mut mem = FirstFit::new(100);
    let a = mem.alloc(10).unwrap();
    let b = mem.alloc(20).unwrap();
    let c = mem.alloc(30).unwrap();

    assert_eq!(mem.address_of(a), 0);
    assert_eq!(mem.address_of(b), 10);
    assert_eq!(mem.address_of(c), 30);
    assert_eq!(mem.stats().used_cells, 60);
}

#[test]
fn first_fit_reuses_the_leftmost_hole() {
    let mut mem = FirstFit::new(100);
    let a = mem.alloc(10).unwrap();
    let _b = mem.alloc(10).unwrap();
    mem.release(a).unwrap();

    let c = mem.alloc(5).unwrap();
    assert_eq!(mem.address_of(c), 0);
}

#[test]
fn best_fit_skips_a_larger_earlier_hole() {
    let mut mem = BestFit::new(50);
    let a = mem.alloc(20).unwrap();
    let _b = mem.alloc(10).unwrap();
    let _c = mem.alloc(10).unwrap();
    mem.release(a).unwrap();

    // Free runs: 20 cells at 0, 10 cells at 40; 9 leaves the smaller leftover
    // in the later run.
    let d = mem.alloc(9).unwrap();
    assert_eq!(mem.address_of(d), 40);
}

#[test]
fn best_fit_tie_breaks_toward_the_earlier_run() {
    let mut mem = BestFit::new(50);
    let a = mem.alloc(10).unwrap(); // 0..10
    let _gap = mem.alloc(5).unwrap(); // 10..15
    let b = mem.alloc(10).unwrap(); // 15..25
    let _gap2 = mem.alloc(5).unwrap(); // 25..30
    let _tail = mem.alloc(20).unwrap(); // 30..50
    mem.release(a).unwrap();
    mem.release(b).unwrap();

    // Two free runs of 10 cells each; a request of 8 leaves 2 in either, so
    // the earlier-address run must win.
    let c = mem.alloc(8).unwrap();
    assert_eq!(mem.address_of(c), 0);
}

#[test]
fn release_restores_the_range_and_forgets_the_handle() {
    crate::init_logging();
    let mut mem = FirstFit::new(40);
    let a = mem.alloc(40).unwrap();
    mem.release(a).unwrap();

    assert_eq!(mem.runs(), vec![(0, 39, CellStatus::Free)]);
    assert_eq!(mem.stats().live_allocations, 0);

    // A second release of the same handle is a diagnosed no-op
    assert_eq!(mem.release(a), Err(MemoryError::UntrackedHandle));
    assert_eq!(mem.runs(), vec![(0, 39, CellStatus::Free)]);
}

#[test]
fn zero_size_requests_are_rejected() {
    let mut mem = BestFit::new(10);
    assert_eq!(mem.alloc(0), Err(MemoryError::InvalidSize));
}

#[test]
fn exhaustion_reports_out_of_memory() {
    crate::init_logging();
    let mut mem = FirstFit::new(10);
    let a = mem.alloc(10).unwrap();
    assert_eq!(
        mem.alloc(1),
        Err(MemoryError::OutOfMemory {
            requested: 1,
            total: 10
        })
    );

    // The allocator stays usable afterwards
    mem.release(a).unwrap();
    assert!(mem.alloc(1).is_ok());
}

#[test]
fn data_round_trips_through_a_handle() {
    let mut mem = BestFit::new(16);
    let a = mem.alloc(4).unwrap();
    mem.write(a, &[1, 2, 3, 4]);
    assert_eq!(mem.read(a, 4), &[1, 2, 3, 4]);
}

#[test]
fn layout_report_is_idempotent() {
    let mut mem = FirstFit::new(30);
    let a = mem.alloc(10).unwrap();
    mem.write(a, &[7; 10]);
    let _b = mem.alloc(5).unwrap();

    assert_eq!(mem.layout_report(), mem.layout_report());
}

#[test]
fn layout_report_lists_runs_and_handles() {
    let mut mem = FirstFit::new(20);
    let a = mem.alloc(10).unwrap();
    mem.write(a, &[9; 10]);

    let report = mem.layout_report();
    assert!(report.contains("0 - 9 = ALLOCATED(10)"));
    assert!(report.contains("10 - 19 = FREE(10)"));
    assert!(report.contains("at: 0, size: 10"));
}

#[test]
fn stats_balance() {
    let mut mem = BestFit::new(128);
    let _a = mem.alloc(37).unwrap();
    let _b = mem.alloc(11).unwrap();

    let stats = mem.stats();
    assert_eq!(stats.used_cells + stats.available_cells, stats.total_cells);
    assert_eq!(stats.live_allocations, 2);
    assert!((stats.usage_percentage - 48.0 / 128.0 * 100.0).abs() < 1e-9);
}
