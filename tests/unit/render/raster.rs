use super::*;

const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10" viewBox="0 0 10 10">
  <rect width="10" height="10" fill="#ff0000"/>
</svg>"##;

#[test]
fn rasterizes_to_requested_size() {
    let frame = rasterize_rgba8(SQUARE, 20).unwrap();
    assert_eq!((frame.width, frame.height), (20, 20));
    assert_eq!(frame.data.len(), 20 * 20 * 4);
    assert_eq!(frame.pixel(10, 10), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(20, 0), None);
}

#[test]
fn png_has_signature() {
    let png = rasterize_png(SQUARE, 8).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn rejects_bad_input() {
    assert!(rasterize_rgba8(SQUARE, 0).is_err());
    assert!(rasterize_rgba8("not svg", 16).is_err());
}
