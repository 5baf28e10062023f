// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the atomic reference allocator, including the concurrency
//! property: simultaneous allocators never produce a duplicate.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use casetrack_domain::SlaConfig;
use casetrack_core::open_complaint;

use super::helpers::{NOW, create_complaint, seed_admin, test_complainant, test_intake, test_persistence, test_policy};
use crate::{Persistence, PersistenceError};

static FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Creates a unique throwaway database file path under the OS temp
/// directory.
fn temp_db_path() -> PathBuf {
    let id: u64 = FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "casetrack_alloc_{}_{id}.sqlite3",
        std::process::id()
    ))
}

fn remove_db_files(path: &PathBuf) {
    let _ = std::fs::remove_file(path);
    for suffix in ["-wal", "-shm"] {
        let mut sidecar = path.clone().into_os_string();
        sidecar.push(suffix);
        let _ = std::fs::remove_file(PathBuf::from(sidecar));
    }
}

#[test]
fn test_first_allocation_starts_at_one() {
    let mut persistence = test_persistence();

    let reference = persistence.allocate_reference(2026).unwrap();

    assert_eq!(reference.to_string(), "CMP-2026-000001");
}

#[test]
fn test_sequences_strictly_increase_within_a_year() {
    let mut persistence = test_persistence();

    let mut previous: u32 = 0;
    for _ in 0..10 {
        let reference = persistence.allocate_reference(2026).unwrap();
        assert!(reference.sequence() > previous);
        previous = reference.sequence();
    }
    assert_eq!(previous, 10);
}

#[test]
fn test_years_have_independent_counters() {
    let mut persistence = test_persistence();

    persistence.allocate_reference(2025).unwrap();
    persistence.allocate_reference(2025).unwrap();
    let first_2026 = persistence.allocate_reference(2026).unwrap();

    assert_eq!(first_2026.sequence(), 1);
    assert_eq!(first_2026.year(), 2026);
}

#[test]
fn test_burned_sequence_leaves_a_gap() {
    // An allocation whose complaint insert never happens still consumes
    // its number; references need not be gap-free.
    let mut persistence = test_persistence();
    let (_, actor) = seed_admin(&mut persistence);

    let _burned = persistence.allocate_reference(2026).unwrap();
    let complaint = create_complaint(&mut persistence, &actor);

    assert_eq!(complaint.reference.sequence(), 2);
}

#[test]
fn test_duplicate_reference_insert_is_a_unique_violation() {
    let mut persistence = test_persistence();
    let (_, actor) = seed_admin(&mut persistence);
    let first = create_complaint(&mut persistence, &actor);

    // Re-insert with the same reference (as if a racing writer had
    // already used it): the violation is typed so the caller can retry.
    let opened = open_complaint(
        test_intake(),
        first.reference,
        &SlaConfig::default(),
        &actor,
        NOW,
    )
    .unwrap();
    let result = persistence.insert_complaint(&opened, &test_complainant(), &test_policy());

    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn test_concurrent_allocations_are_unique_and_increasing() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 8;

    let path = temp_db_path();
    // Initialize the schema before any worker opens the file.
    drop(Persistence::new_with_file(&path).unwrap());

    let mut handles = Vec::new();
    for _ in 0..THREADS {
        let worker_path = path.clone();
        handles.push(thread::spawn(move || {
            let mut persistence = Persistence::new_with_file(&worker_path).unwrap();
            let mut sequences: Vec<u32> = Vec::with_capacity(PER_THREAD);
            for _ in 0..PER_THREAD {
                let reference = persistence.allocate_reference(2026).unwrap();
                sequences.push(reference.sequence());
            }
            sequences
        }));
    }

    let mut all: Vec<u32> = Vec::new();
    for handle in handles {
        let sequences = handle.join().unwrap();
        // Allocations within one worker happen in order, so its
        // sequences must strictly increase.
        assert!(sequences.windows(2).all(|pair| pair[0] < pair[1]));
        all.extend(sequences);
    }

    remove_db_files(&path);

    // No duplicates across workers, and exactly the first N sequence
    // numbers were issued.
    let unique: HashSet<u32> = all.iter().copied().collect();
    assert_eq!(unique.len(), THREADS * PER_THREAD);
    assert_eq!(
        unique,
        (1..=u32::try_from(THREADS * PER_THREAD).unwrap()).collect::<HashSet<u32>>()
    );
}
