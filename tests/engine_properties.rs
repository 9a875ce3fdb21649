// Integration tests for the step engines

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortty::bench::{is_permutation, is_sorted};
use sortty::engine::{
    create_seeded_engine, Action, Algorithm, MergeEngine, QuickEngine, StepEngine,
};

fn random_inputs() -> Vec<Vec<i64>> {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut inputs = vec![
        vec![],
        vec![7],
        vec![1, 1, 1, 1],
        vec![5, 4, 3, 2, 1],
        vec![1, 2, 3, 4, 5],
        vec![0, 3000, 0, 3000, 1500],
    ];
    for len in [2, 3, 10, 33, 100] {
        for _ in 0..4 {
            inputs.push((0..len).map(|_| rng.gen_range(0..=3000)).collect());
        }
    }
    inputs
}

/// Resume until exhausted, returning the statuses seen
fn drain(engine: &mut dyn StepEngine) -> Vec<String> {
    let mut statuses = Vec::new();
    while let Some(step) = engine.resume() {
        assert!(
            step.highlights.iter().all(|i| i < step.array.len()),
            "highlight out of range in {}",
            step.status()
        );
        statuses.push(step.status());
    }
    statuses
}

#[test]
fn test_every_engine_sorts_a_permutation() {
    for input in random_inputs() {
        for algorithm in Algorithm::ALL {
            let mut engine = create_seeded_engine(algorithm, &input, 17).unwrap();
            drain(engine.as_mut());

            let output = engine.data();
            assert!(is_sorted(output), "{} left {:?}", algorithm, output);
            assert!(
                is_permutation(&input, output),
                "{} changed the elements of {:?}",
                algorithm,
                input
            );
        }
    }
}

#[test]
fn test_single_done_step_then_exhausted() {
    for algorithm in Algorithm::ALL {
        let mut engine = create_seeded_engine(algorithm, &[9, 3, 5, 1], 1).unwrap();
        let statuses = drain(engine.as_mut());

        let done = format!("{}: done", algorithm);
        assert_eq!(statuses.last(), Some(&done));
        assert_eq!(statuses.iter().filter(|s| **s == done).count(), 1);

        assert!(engine.is_exhausted());
        for _ in 0..5 {
            assert!(engine.resume().is_none());
        }
        // Still sorted, nothing restarted
        assert_eq!(engine.data(), &[1, 3, 5, 9]);
    }
}

#[test]
fn test_trivial_inputs_emit_only_done() {
    for input in [vec![], vec![42]] {
        for algorithm in Algorithm::ALL {
            let mut engine = create_seeded_engine(algorithm, &input, 0).unwrap();
            let statuses = drain(engine.as_mut());
            assert_eq!(statuses, vec![format!("{}: done", algorithm)]);
        }
    }
}

#[test]
fn test_split_resumption_matches_single_batch() {
    let mut rng = StdRng::seed_from_u64(99);
    let input: Vec<i64> = (0..60).map(|_| rng.gen_range(0..=500)).collect();

    for algorithm in Algorithm::ALL {
        let mut whole = create_seeded_engine(algorithm, &input, 5).unwrap();
        let expected = drain(whole.as_mut());

        let mut split = create_seeded_engine(algorithm, &input, 5).unwrap();
        let mut statuses = Vec::new();
        // Uneven batches, with pauses in between
        for batch in [1, 7, 0, 3, 50].iter().cycle() {
            let mut exhausted = false;
            for _ in 0..*batch {
                match split.resume() {
                    Some(step) => statuses.push(step.status()),
                    None => {
                        exhausted = true;
                        break;
                    }
                }
            }
            if exhausted {
                break;
            }
        }

        assert_eq!(statuses, expected, "{} diverged when paced", algorithm);
        assert_eq!(split.data(), whole.data());
    }
}

#[test]
fn test_bubble_sorted_input_single_pass() {
    let input: Vec<i64> = (0..25).collect();
    let mut engine = create_seeded_engine(Algorithm::Bubble, &input, 0).unwrap();

    let mut compares = 0;
    let mut swaps = 0;
    let mut total = 0;
    while let Some(step) = engine.resume() {
        total += 1;
        match step.action {
            Action::Compare { .. } => compares += 1,
            Action::Swap { .. } => swaps += 1,
            _ => {}
        }
    }

    assert_eq!(compares, input.len() - 1);
    assert_eq!(swaps, 0);
    assert_eq!(total, input.len());
}

#[test]
fn test_radix_sample() {
    let input = [170, 45, 75, 90, 802, 24, 2, 66];
    let mut engine = create_seeded_engine(Algorithm::Radix, &input, 0).unwrap();

    let mut after_first_pass = None;
    while let Some(step) = engine.resume() {
        if after_first_pass.is_none()
            && matches!(step.action, Action::WriteBack { exp: 1 })
            && step.highlights.as_slice() == [input.len() - 1]
        {
            after_first_pass = Some(step.array.to_vec());
        }
    }

    assert_eq!(after_first_pass, Some(vec![170, 90, 802, 2, 24, 45, 75, 66]));
    assert_eq!(engine.data(), &[2, 24, 45, 66, 75, 90, 170, 802]);
}

#[test]
fn test_radix_place_highlights_source_in_reverse() {
    let input = [3, 1, 2];
    let mut engine = create_seeded_engine(Algorithm::Radix, &input, 0).unwrap();
    let mut placed = Vec::new();
    while let Some(step) = engine.resume() {
        if matches!(step.action, Action::Place { .. }) {
            placed.extend(step.highlights.iter());
        }
    }
    assert_eq!(placed, vec![2, 1, 0]);
}

#[test]
fn test_radix_passes_sort_by_low_digits() {
    let mut rng = StdRng::seed_from_u64(314);
    for len in [2, 9, 50, 120] {
        let input: Vec<i64> = (0..len).map(|_| rng.gen_range(0..=100_000)).collect();
        let mut engine = create_seeded_engine(Algorithm::Radix, &input, 0).unwrap();

        let mut passes = 0;
        while let Some(step) = engine.resume() {
            let Action::WriteBack { exp } = step.action else {
                continue;
            };
            if step.highlights.as_slice() != [input.len() - 1] {
                continue;
            }
            // After the pass for `exp`, the array is ordered by its low digits
            let modulus = 10 * exp as i64;
            assert!(
                step.array.windows(2).all(|w| w[0] % modulus <= w[1] % modulus),
                "n={} not ordered mod {} after pass: {:?}",
                len,
                modulus,
                step.array
            );
            passes += 1;
        }
        assert!(passes > 0);
        assert!(is_sorted(engine.data()));
    }
}

#[test]
fn test_merge_blocks_sorted_after_each_width() {
    let mut rng = StdRng::seed_from_u64(271);
    for len in [2, 7, 16, 45, 100] {
        let input: Vec<i64> = (0..len).map(|_| rng.gen_range(0..=3000)).collect();
        let mut engine = MergeEngine::new(&input);

        let mut width = engine.width();
        while engine.resume().is_some() {
            if engine.width() != width {
                let block = 2 * width;
                for chunk in engine.data().chunks(block) {
                    assert!(
                        is_sorted(chunk),
                        "n={} block of {} unsorted: {:?}",
                        len,
                        block,
                        chunk
                    );
                }
                width = engine.width();
            }
        }
        assert!(is_sorted(engine.data()));
        assert!(is_permutation(&input, engine.data()));
    }
}

#[test]
fn test_merge_runs_sorted_after_each_width() {
    let input = [5, 2, 4, 6, 1, 3];
    let mut engine = create_seeded_engine(Algorithm::Merge, &input, 0).unwrap();

    // Snapshot the array whenever a width's last write lands
    let mut snapshots = Vec::new();
    while let Some(step) = engine.resume() {
        if let Action::Write { index, right, .. } = step.action {
            if index + 1 == right && right == input.len() {
                snapshots.push(step.array.to_vec());
            }
        }
    }

    // Width 2 never writes the trailing pair, so it ends at [0:4]
    assert_eq!(snapshots.first(), Some(&vec![2, 5, 4, 6, 1, 3]));
    assert_eq!(snapshots.last(), Some(&vec![1, 2, 3, 4, 5, 6]));
    assert_eq!(engine.data(), &[1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_quick_seed_reproduces_steps() {
    let mut rng = StdRng::seed_from_u64(7);
    let input: Vec<i64> = (0..80).map(|_| rng.gen_range(0..=100)).collect();

    let run = |seed: u64| {
        let mut engine = QuickEngine::seeded(&input, seed);
        let mut steps = Vec::new();
        while let Some(step) = engine.resume() {
            steps.push((step.highlights, step.action));
        }
        steps
    };

    assert_eq!(run(31), run(31));
}

#[test]
fn test_quick_partition_steps_are_contiguous() {
    let input: Vec<i64> = (0..30).rev().collect();
    let mut engine = create_seeded_engine(Algorithm::Quick, &input, 12).unwrap();

    // Between two pivot placements every compare refers to one pivot slot
    let mut pivot_slot = None;
    while let Some(step) = engine.resume() {
        match step.action {
            Action::PivotCompare { pivot, .. } => {
                if let Some(slot) = pivot_slot {
                    assert_eq!(slot, pivot);
                }
                pivot_slot = Some(pivot);
            }
            Action::PlacePivot { .. } => pivot_slot = None,
            _ => {}
        }
    }
}
