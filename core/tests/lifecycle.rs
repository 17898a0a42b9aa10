//! Shutdown diagnostics, driven through snapshots so counters can be set
//! without drawing millions of values.

use lehmer_core::{
    config::{MAX_DRAWS, MODULUS, STREAMS},
    Generator, LifecycleWarning,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn generator_with_counts(counts: &[(usize, u64)]) -> Generator {
    let mut rng = Generator::new(1, 0).expect("rng");
    let mut snapshot = rng.snapshot();
    for &(stream, count) in counts {
        snapshot.draw_counts[stream] = count;
    }
    rng.restore(&snapshot).expect("restore");
    rng
}

#[test]
fn fresh_generator_shuts_down_clean() {
    init_logging();
    let mut rng = Generator::new(9, 0).expect("rng");
    for _ in 0..1_000 {
        rng.draw();
    }
    assert!(rng.shutdown().is_empty());
}

#[test]
fn two_spacings_plus_one_overlaps_two_neighbours() {
    init_logging();
    let mut rng = generator_with_counts(&[(0, 2 * MAX_DRAWS + 1)]);

    let warnings = rng.shutdown();

    assert_eq!(
        warnings,
        vec![
            LifecycleWarning::Overlap { stream: 0, collided_with: 1 },
            LifecycleWarning::Overlap { stream: 0, collided_with: 2 },
        ]
    );
}

#[test]
fn warnings_come_out_in_stream_order() {
    init_logging();
    let mut rng = generator_with_counts(&[(STREAMS - 1, MAX_DRAWS + 1), (10, MAX_DRAWS + 5)]);

    assert_eq!(
        rng.shutdown(),
        vec![
            LifecycleWarning::Overlap { stream: 10, collided_with: 11 },
            LifecycleWarning::Overlap { stream: STREAMS - 1, collided_with: 0 },
        ]
    );
}

#[test]
fn past_the_period_reports_a_full_cycle() {
    init_logging();
    let mut rng = generator_with_counts(&[(2, MODULUS as u64)]);

    let warnings = rng.shutdown();

    assert_eq!(warnings.first(), Some(&LifecycleWarning::FullCycle { stream: 2 }));
    assert!(warnings[1..]
        .iter()
        .all(|w| matches!(w, LifecycleWarning::Overlap { stream: 2, .. })));
}

#[test]
fn repeated_shutdown_gives_the_same_report() {
    init_logging();
    let mut rng = generator_with_counts(&[(5, MAX_DRAWS * 3)]);

    let first = rng.shutdown();
    let second = rng.shutdown();

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
    assert!(rng.is_shut_down());
}
