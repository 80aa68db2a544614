use fit_chart::telemetry::{DEFAULT_FILTER, init_default_tracing, init_tracing_with_fallback};

#[test]
fn global_subscriber_installs_at_most_once() {
    let _ = init_default_tracing();
    assert!(!init_tracing_with_fallback("fit_chart=trace"));
    assert_eq!(DEFAULT_FILTER, "info");
}
