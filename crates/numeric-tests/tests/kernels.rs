use numcore::pixel::{grayscale, resize_area, sepia, ColorKernel, PixelBuffer, Strategy, GRAYSCALE_WEIGHTS, SEPIA_MATRIX};
use numcore_gen::buffer_builder::{BufferBuilder, SampleGenerator};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn random_image(rng: &mut SmallRng) -> PixelBuffer
{
    let h = rng.random_range(1..40);
    let w = rng.random_range(1..40);
    BufferBuilder::new((h, w, 3))
        .generator(SampleGenerator::Random(rng.random()))
        .build()
}

// straight from the weights, one channel at a time
fn reference(image: &PixelBuffer, rows: &[[f64; 3]]) -> Vec<u8>
{
    let mut out = Vec::new();
    for px in image.as_slice().chunks(3) {
        let (b, g, r) = (px[0] as f64, px[1] as f64, px[2] as f64);
        for m in rows {
            let v = m[0] * b + m[1] * g + m[2] * r;
            out.push(if v > 255. { 255 } else { v as u8 });
        }
    }
    out
}

#[test]
fn strategies_are_bit_identical()
{
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..50 {
        let image = random_image(&mut rng);
        let amount = rng.random_range(0.0..=1.0);
        for kernel in [ColorKernel::GRAYSCALE, ColorKernel::SEPIA, ColorKernel::sepia(amount).unwrap()] {
            let expected = Strategy::Naive.apply(&kernel, &image).unwrap();
            for &strategy in Strategy::all() {
                let out = strategy.apply(&kernel, &image).unwrap();
                assert_eq!(out, expected, "{} on {:?}, amount {}", strategy, image.dim(), amount);
            }
        }
    }
}

#[test]
fn kernels_match_reference()
{
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..20 {
        let image = random_image(&mut rng);
        assert_eq!(grayscale(&image).unwrap().as_slice(), &reference(&image, &[GRAYSCALE_WEIGHTS])[..]);
        assert_eq!(sepia(&image).unwrap().as_slice(), &reference(&image, &SEPIA_MATRIX)[..]);
    }
}

#[test]
fn sepia_saturates_at_255()
{
    let image = BufferBuilder::new((8, 8, 3))
        .generator(SampleGenerator::Constant(250))
        .build();
    let out = sepia(&image).unwrap();
    for px in out.as_slice().chunks(3) {
        assert_eq!(px[1], 255);
        assert_eq!(px[2], 255);
        assert!(px[0] < 255);
    }
}

#[test]
fn resize_then_filter_keeps_constant()
{
    let mut rng = SmallRng::seed_from_u64(3);
    for _ in 0..20 {
        let v = rng.random();
        let (h, w) = (rng.random_range(4..30), rng.random_range(4..30));
        let image = BufferBuilder::new((h, w, 3))
            .generator(SampleGenerator::Constant(v))
            .build();
        let scale = rng.random_range(0.25..3.0);
        let resized = resize_area(&image, scale).unwrap();
        assert_eq!(resized.dim(), ((h as f64 * scale) as usize, (w as f64 * scale) as usize, 3));
        assert!(resized.as_slice().iter().all(|&x| x == v));
    }
}
