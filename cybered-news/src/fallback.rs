//! Deterministic fallback images for articles that arrive without one
//!
//! The front end memoizes the image per title, so the same title must map
//! to the same placeholder across processes and over time.

/// Local placeholder images served by the website
const FALLBACK_IMAGES: [&str; 4] = [
    "/images/news-fallback-1.jpg",
    "/images/news-fallback-2.jpg",
    "/images/news-fallback-3.jpg",
    "/images/news-fallback-4.jpg",
];

/// Pick a placeholder image path for the given article title.
///
/// The hash walks the title's UTF-16 code units with the classic
/// `a = (a << 5) - a + c` accumulator, wrapping at 32-bit signed range on
/// every step. The formula is order-sensitive and intentionally matches
/// the website's existing deployment, so titles keep the same placeholder
/// across re-renders.
pub fn fallback_image(title: &str) -> &'static str {
    let mut hash: i32 = 0;
    for unit in title.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    FALLBACK_IMAGES[hash.unsigned_abs() as usize % FALLBACK_IMAGES.len()]
}
