use std::thread;

use aic_picker::{compute_aic_profile, compute_aic_profile_into, PickerConfig, ProfileMethod};

const THREADS: usize = 8;
const LEN: usize = 512;

fn signal(seed: usize) -> Vec<f64> {
    (0..LEN)
        .map(|i| {
            let x = (i * (seed + 3)) as f64;
            let base = 0.05 * x.sin();
            if i < LEN / 2 + seed * 4 {
                base
            } else {
                base * 30.0 + 2.0
            }
        })
        .collect()
}

#[test]
fn concurrent_calls_match_sequential_results() {
    for method in [
        ProfileMethod::Direct,
        ProfileMethod::Parallel,
        ProfileMethod::Incremental,
    ] {
        let config = PickerConfig::new(method);
        let signals: Vec<Vec<f64>> = (0..THREADS).map(signal).collect();
        let sequential: Vec<_> = signals
            .iter()
            .map(|s| compute_aic_profile(s, &config).unwrap())
            .collect();

        let mut buffers = vec![vec![0.0f64; LEN - 1]; THREADS];
        let indices: Vec<usize> = thread::scope(|scope| {
            let handles: Vec<_> = signals
                .iter()
                .zip(buffers.iter_mut())
                .map(|(s, out)| {
                    let config = &config;
                    scope.spawn(move || compute_aic_profile_into(s, out, config).unwrap())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for ((expected, idx), profile) in sequential.iter().zip(&indices).zip(&buffers) {
            assert_eq!(expected.index(), *idx);
            for (a, b) in expected.profile().iter().zip(profile) {
                assert_eq!(a.to_bits(), b.to_bits());
            }
        }
    }
}
