#![cfg(feature = "simd")]

use hudcut::kernel::scalar::SadScalar;
use hudcut::kernel::simd::SadSimd;
use hudcut::{find, Kernel, PixelBuffer, Rect, ScanParams};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn make_image(width: usize, height: usize, seed: u64) -> PixelBuffer {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            // Period 24 horizontally so the template repeats, with small noise.
            let u = x % 24;
            let value = ((u * 13) ^ (y * 5) ^ (u * y)) & 0xFF;
            let noise: u8 = rng.random_range(0..=4);
            data.extend_from_slice(&[
                (value as u8).saturating_add(noise),
                (255 - value) as u8,
                (u * 7) as u8,
                255,
            ]);
        }
    }
    PixelBuffer::from_rgba(data, width, height).unwrap()
}

#[test]
fn simd_scan_matches_scalar_scan() {
    let image = make_image(150, 30, 7);
    // Template rows of 5 px are 20 samples: two full lanes plus a remainder.
    for tpl_rect in [
        Rect::new(24, 4, 29, 10),
        Rect::new(48, 0, 51, 3),
        Rect::new(0, 12, 1, 20),
        Rect::new(3, 2, 19, 6),
    ] {
        let tpl = image.crop(tpl_rect).unwrap();
        for tolerance in [0u64, 40, 400, 4_000, u64::MAX] {
            let params = ScanParams { tolerance };
            let scalar = <SadScalar as Kernel>::scan_full(image.view(), tpl.view(), params).unwrap();
            let simd = <SadSimd as Kernel>::scan_full(image.view(), tpl.view(), params).unwrap();
            assert_eq!(simd, scalar, "template {tpl_rect}, tolerance {tolerance}");
        }
    }
}

#[test]
fn find_agrees_with_scalar_kernel() {
    let image = make_image(200, 16, 11);
    let tpl = image.crop(Rect::new(24, 2, 37, 9)).unwrap();

    for tolerance in [0u64, 300, 1_500] {
        let scalar =
            <SadScalar as Kernel>::scan_full(image.view(), tpl.view(), ScanParams { tolerance })
                .unwrap();
        let found = find(&image, &tpl, tolerance).unwrap();
        assert_eq!(found, scalar, "tolerance {tolerance}");
    }

    let exact = find(&image, &tpl, 0).unwrap();
    assert_eq!(exact.first().map(|m| m.point()), Some((24, 2)));
}
