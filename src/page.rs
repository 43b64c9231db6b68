// Page-level sizing and lifecycle rules. Kept free of web-sys so the host
// tests can `include!` it.

/// Backing-store size in device pixels for a CSS viewport. A missing or
/// nonsensical devicePixelRatio counts as 1; the result is never 0x0.
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let px = |css: f64| {
        let v = css * dpr;
        if v.is_finite() && v >= 1.0 {
            v.min(u32::MAX as f64) as u32
        } else {
            1
        }
    };
    (px(css_width), px(css_height))
}

/// Views are only released when the page is really going away; a page
/// entering the back/forward cache (`persisted`) keeps them for pageshow.
#[inline]
pub fn release_on_pagehide(persisted: bool) -> bool {
    !persisted
}
