use enough::Unstoppable;
use px2svg::*;

const HEADER_2X2: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" shape-rendering=\"crispEdges\" \
                          width=\"2\" height=\"2\" viewBox=\"0 0 2 2\">\n";

#[test]
fn full_document_for_vertical_encoding() {
    // Left column red, right column half-transparent blue.
    let pixels = [
        255, 0, 0, 255, 0, 0, 255, 128, //
        255, 0, 0, 255, 0, 0, 255, 128,
    ];
    let src = PixelBuffer::new(&pixels, 2, 2, PixelLayout::Rgba8).unwrap();
    let svg = encode_svg(&src, Threshold::new(1.0).unwrap(), Unstoppable).unwrap();

    // alpha 128 (8-bit) -> 63 (7-bit) -> opacity (128 - 63) / 128
    let expected = format!(
        "{HEADER_2X2}\
         \x20 <rect x=\"0\" y=\"0\" width=\"1\" height=\"2\" fill=\"rgb(255,0,0)\"/>\n\
         \x20 <rect x=\"1\" y=\"0\" width=\"1\" height=\"2\" fill=\"rgb(0,0,255)\" fill-opacity=\"0.5078125\"/>\n\
         </svg>\n"
    );
    assert_eq!(svg, expected);
}

#[test]
fn rect_order_follows_scan_order() {
    // Rows differ, so horizontal wins with one rect per row, top to bottom.
    let pixels = [10u8, 10, 10, 200, 200, 200, 90, 90, 90];
    let src = PixelBuffer::new(&pixels, 3, 3, PixelLayout::Gray8).unwrap();
    let enc = encode(&src, Threshold::new(1.0).unwrap(), Unstoppable).unwrap();
    assert_eq!(enc.direction, Direction::Horizontal);
    let svg = enc.to_svg();
    let fills: Vec<&str> = svg
        .lines()
        .filter_map(|line| line.split("fill=\"").nth(1))
        .map(|rest| &rest[..rest.find('"').unwrap()])
        .collect();
    assert_eq!(fills, ["rgb(10,10,10)", "rgb(200,200,200)", "rgb(90,90,90)"]);
}

#[test]
fn opaque_pixels_have_no_opacity_attribute() {
    let pixels = [1u8, 2, 3, 4, 5, 6];
    let src = PixelBuffer::new(&pixels, 2, 1, PixelLayout::Rgb8).unwrap();
    let svg = encode_svg(&src, Threshold::ZERO, Unstoppable).unwrap();
    assert!(!svg.contains("fill-opacity"));
    assert_eq!(svg.matches("<rect ").count(), 2);
}

#[test]
fn transparent_pixels_render_faintly() {
    // Fully transparent in 8-bit alpha is 127 in 7-bit alpha: opacity 1/128.
    let pixels = [0u8, 0, 0, 0];
    let src = PixelBuffer::new(&pixels, 1, 1, PixelLayout::Rgba8).unwrap();
    let svg = encode_svg(&src, Threshold::ZERO, Unstoppable).unwrap();
    assert!(svg.contains("fill-opacity=\"0.0078125\""));
}

#[test]
fn empty_image_document() {
    let src = PixelBuffer::new(&[], 0, 0, PixelLayout::Rgb8).unwrap();
    let svg = encode_svg(&src, Threshold::ZERO, Unstoppable).unwrap();
    assert_eq!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" shape-rendering=\"crispEdges\" \
         width=\"0\" height=\"0\" viewBox=\"0 0 0 0\"/>\n"
    );
}

#[cfg(feature = "std")]
#[test]
fn save_writes_document() {
    let pixels = [7u8; 4];
    let src = PixelBuffer::new(&pixels, 2, 2, PixelLayout::Gray8).unwrap();
    let enc = encode(&src, Threshold::new(2.0).unwrap(), Unstoppable).unwrap();

    let path = std::env::temp_dir().join(format!("px2svg-save-{}.svg", std::process::id()));
    enc.save(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(written, enc.to_svg());

    let mut buf = Vec::new();
    enc.write_to(&mut buf).unwrap();
    assert_eq!(buf, enc.to_svg().into_bytes());
}
