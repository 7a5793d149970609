//! End-to-end tests for the simulated result provider.
//!
//! Time is paused, so the measured execution time equals the simulated
//! delay rounded up to the millisecond and stays inside the jitter band.

use maxcut_demo::core::schema::{GOEMANS_WILLIAMSON, QUANTUM_ANNEALER, SUBJECT_METHOD};
use maxcut_demo::{DemoError, ProblemSize, ResultProvider, SimulatedProvider};

fn assert_in_band(measured: f64, target: f64) {
    let lo = target * 0.9 - 1e-9;
    let hi = target * 1.1 + 0.001 + 1e-9;
    assert!(
        measured >= lo && measured <= hi,
        "measured {measured} outside [{lo}, {hi}]"
    );
}

#[tokio::test(start_paused = true)]
async fn test_size_5_figures() {
    let provider = SimulatedProvider::with_seed(7);
    let outcome = provider.fetch_result_raw(5).await.unwrap();
    let r = &outcome.result;

    assert_eq!(r.graph_size, ProblemSize::N5);
    assert_eq!(r.cut_value, 5.35);
    assert_eq!(r.approximation_ratio, 0.892);
    assert_eq!(r.iterations, 35);
    assert_eq!(r.target_time_s, 0.07);
    assert_eq!(r.gradient_stability, 7.0e-4);
    assert!(r.scalability_note.contains("PROVEN, PUBLISHED"));
    assert_in_band(r.execution_time_s, 0.07);
}

#[tokio::test(start_paused = true)]
async fn test_size_50_note_and_competitors() {
    let provider = SimulatedProvider::with_seed(11);
    let outcome = provider.fetch_result(ProblemSize::N50).await.unwrap();

    assert_eq!(
        outcome.result.scalability_note,
        "Projected performance for large-scale enterprise optimization."
    );
    assert_in_band(outcome.result.execution_time_s, 1.5);

    let data = &outcome.chart_data;
    assert_eq!(data.goemans_williamson.execution_times, vec![0.1, 1.2, 15.0]);
    assert_eq!(data.quantum_annealer.approximation_ratios, vec![0.885, 0.880, 0.875]);
}

#[tokio::test(start_paused = true)]
async fn test_chart_data_is_aligned_and_labelled() {
    let provider = SimulatedProvider::with_seed(3);
    for size in ProblemSize::ALL {
        let outcome = provider.fetch_result(size).await.unwrap();
        let data = &outcome.chart_data;
        assert_eq!(data.labels, vec!["N=5", "N=20", "N=50"]);
        assert!(data.is_aligned());
        assert_eq!(data.structured_entropy.approximation_ratios, vec![0.892, 0.885, 0.865]);
        assert_eq!(data.structured_entropy.execution_times, vec![0.07, 0.38, 1.5]);

        let names: Vec<&str> = data.methods().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec![SUBJECT_METHOD, GOEMANS_WILLIAMSON, QUANTUM_ANNEALER]);
    }
}

#[tokio::test(start_paused = true)]
async fn test_unsupported_sizes_rejected() {
    let provider = SimulatedProvider::with_seed(1);
    for raw in [7, 0, -1, 100] {
        match provider.fetch_result_raw(raw).await {
            Err(DemoError::InvalidSize(n)) => assert_eq!(n, raw),
            other => panic!("size {raw}: unexpected {other:?}"),
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_repeated_calls_differ_only_in_time() {
    let provider = SimulatedProvider::new();
    let first = provider.fetch_result(ProblemSize::N20).await.unwrap();
    let second = provider.fetch_result(ProblemSize::N20).await.unwrap();

    assert_eq!(first.result.base(), second.result.base());
    assert_eq!(first.chart_data, second.chart_data);
    assert_in_band(first.result.execution_time_s, 0.38);
    assert_in_band(second.result.execution_time_s, 0.38);
}

#[tokio::test(start_paused = true)]
async fn test_outcome_json_shape() {
    let provider = SimulatedProvider::with_seed(5);
    let outcome = provider.fetch_result(ProblemSize::N20).await.unwrap();
    let v = serde_json::to_value(&outcome).unwrap();

    assert_eq!(v["result"]["graph_size"], 20);
    assert_eq!(v["result"]["iterations"], 120);
    assert!(v["result"]["execution_time_s"].is_f64());
    assert_eq!(v["chart_data"]["labels"][2], "N=50");
}

#[tokio::test]
async fn test_size_5_on_real_clock() {
    let provider = SimulatedProvider::new();
    for _ in 0..3 {
        let outcome = provider.fetch_result(ProblemSize::N5).await.unwrap();
        let measured = outcome.result.execution_time_s;
        // sleeps never return early; allow scheduler overshoot on busy hosts
        assert!(measured >= 0.063, "measured {measured} below 0.063");
        assert!(measured <= 0.077 + 0.05, "measured {measured} far above 0.077");
    }
}
