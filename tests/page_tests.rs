// Host-side tests for the page sizing and lifecycle rules used by the
// wasm front-end.

mod page {
    include!("../src/page.rs");
}

use page::{backing_size, release_on_pagehide};

#[test]
fn backing_size_follows_viewport_times_dpr() {
    assert_eq!(backing_size(800.0, 600.0, 1.0), (800, 600));
    assert_eq!(backing_size(800.0, 600.0, 2.0), (1600, 1200));
    // fractional ratios truncate
    assert_eq!(backing_size(375.0, 667.0, 1.5), (562, 1000));
}

#[test]
fn backing_size_ignores_bad_ratios() {
    assert_eq!(backing_size(1024.0, 768.0, 0.0), (1024, 768));
    assert_eq!(backing_size(1024.0, 768.0, -2.0), (1024, 768));
    assert_eq!(backing_size(1024.0, 768.0, f64::NAN), (1024, 768));
    assert_eq!(backing_size(1024.0, 768.0, f64::INFINITY), (1024, 768));
}

#[test]
fn backing_size_is_never_empty() {
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(-10.0, f64::NAN, 1.0), (1, 1));
    assert_eq!(backing_size(0.3, 500.0, 1.0), (1, 500));
}

#[test]
fn bfcache_pagehide_keeps_views() {
    assert!(!release_on_pagehide(true));
    assert!(release_on_pagehide(false));
}
