#![no_main]
use libfuzzer_sys::fuzz_target;
use slotmatch_libs::{compute_overlap, OverlapMode, TimeRange};

fuzz_target!(|data: (Vec<TimeRange<u8>>, Vec<TimeRange<u8>>)| {
    #[cfg(feature = "log")]
    let _ = fern::Dispatch::new()
        .level(log::LevelFilter::Trace)
        .chain(std::io::stdout())
        .apply();

    let (a, b) = data;

    let contained = compute_overlap(&a, &b, OverlapMode::Containment);
    let shared = compute_overlap(&a, &b, OverlapMode::Intersection);

    assert!(
        contained.len() <= a.len() * b.len() && shared.len() <= a.len() * b.len(),
        "At most one window per pair"
    );

    assert!(
        contained.iter().all(|w| b.contains(w) && w.is_well_formed()),
        "Containment only reports well formed slots of the second set"
    );

    assert!(
        shared.iter().all(|w| w.start() < w.end()),
        "Shared windows are never empty"
    );

    assert!(
        shared.iter().all(|w| {
            let holds = |x: &TimeRange<u8>| {
                x.is_well_formed() && x.start() <= w.start() && w.end() <= x.end()
            };
            a.iter().any(holds) && b.iter().any(holds)
        }),
        "Shared windows lie within a slot of each set"
    );

    #[cfg(feature = "rayon")]
    {
        assert_eq!(
            slotmatch_libs::par_compute_overlap(&a, &b, OverlapMode::Containment),
            contained,
            "Parallel and sequential containment differ"
        );
        assert_eq!(
            slotmatch_libs::par_compute_overlap(&a, &b, OverlapMode::Intersection),
            shared,
            "Parallel and sequential intersection differ"
        );
    }
});
