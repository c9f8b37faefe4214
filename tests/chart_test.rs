//! Composite chart rendering.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use eventdash::charts::{self, HEIGHT, WIDTH, pie_slices};
use eventdash::models::category::{CategoryCounts, EventCategory};

fn sparse_counts() -> CategoryCounts {
    let mut counts = CategoryCounts::zeroed();
    counts.set(EventCategory::Workshop, 3);
    counts.set(EventCategory::Conference, 5);
    counts.set(EventCategory::Hackathon, 2);
    counts
}

fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
    let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
    let reader = decoder.read_info().expect("valid png");
    let info = reader.info();
    (info.width, info.height)
}

#[test]
fn test_sparse_counts_render_full_axis_and_three_wedges() {
    let counts = sparse_counts();

    assert_eq!(counts.iter().count(), 6, "bar and line panels plot every category");
    assert_eq!(counts.iter().filter(|(_, c)| *c == 0).count(), 3);

    let slices = pie_slices(&counts);
    assert_eq!(slices.len(), 3);
    let share: f64 = slices.iter().map(|s| s.percent).sum();
    assert!((share - 100.0).abs() < 1e-9);

    let encoded = charts::render(&counts, Some("21CS042"))
        .expect("render")
        .expect("non-zero counts produce an image");
    assert!(!encoded.is_empty());

    let png = BASE64.decode(encoded).expect("valid base64");
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    assert_eq!(png_dimensions(&png), (WIDTH, HEIGHT));
}

#[test]
fn test_all_zero_returns_none() {
    let counts = CategoryCounts::zeroed();
    assert!(charts::render(&counts, None).expect("render").is_none());
    assert!(pie_slices(&counts).is_empty());
}

#[test]
fn test_every_category_present_renders() {
    let counts: CategoryCounts = EventCategory::ALL
        .into_iter()
        .enumerate()
        .map(|(i, c)| (c, i as i64 + 1))
        .collect();
    assert_eq!(pie_slices(&counts).len(), 6);

    let png = charts::render_png(&counts, None).expect("render").expect("image");
    assert_eq!(png_dimensions(&png), (WIDTH, HEIGHT));
}
