#![no_main]
use libfuzzer_sys::fuzz_target;
use px2svg::*;

fuzz_target!(|data: &[u8]| {
    // [width, threshold, pixels...] with RGBA8 pixels
    let [width, threshold, pixels @ ..] = data else {
        return;
    };
    let width = u32::from(*width % 32);
    let threshold = Threshold::new(f64::from(*threshold)).expect("u8 is always in range");
    let height = match width {
        0 => 0,
        w => (pixels.len() / 4 / w as usize).min(64) as u32,
    };
    let Ok(source) = PixelBuffer::new(pixels, width, height, PixelLayout::Rgba8) else {
        return;
    };

    let encoding = encode(&source, threshold, enough::Unstoppable).expect("encoding never fails without limits");

    // Rects must tile the canvas exactly once.
    let mut coverage = vec![0u8; (width * height) as usize];
    for rect in encoding.rects() {
        assert_eq!(rect.color, source.pixel(rect.x, rect.y));
        for y in rect.y..rect.y + rect.height {
            for x in rect.x..rect.x + rect.width {
                coverage[(y * width + x) as usize] += 1;
            }
        }
    }
    assert!(coverage.iter().all(|&c| c == 1), "rects do not tile the canvas");

    let svg = encoding.to_svg();
    assert_eq!(svg.matches("<rect ").count(), encoding.len());
});
