use approx::assert_relative_eq;
use numcore::{DType, FixedArray, Scalar};
use numcore_gen::array_builder::ArrayBuilder;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn random_reals(rng: &mut SmallRng, n: usize) -> Vec<f64>
{
    (0..n).map(|_| rng.random_range(-1e3..1e3)).collect()
}

#[test]
fn mean_and_variance_are_accurate()
{
    let mut rng = SmallRng::seed_from_u64(1);
    for _ in 0..20 {
        let n = rng.random_range(1..500);
        let xs = random_reals(&mut rng, n);
        let a = FixedArray::from_shape_vec([n], xs.clone()).unwrap();

        let mean = xs.iter().sum::<f64>() / n as f64;
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
        assert_relative_eq!(a.mean(), mean, epsilon = 1e-9, max_relative = 1e-9);
        assert_relative_eq!(a.variance(), var, max_relative = 1e-9);
        let min = xs.iter().cloned().fold(f64::INFINITY, f64::min);
        assert_eq!(a.min_element(), Scalar::Real(min));
    }
}

#[test]
fn sequential_statistics()
{
    // 0..n has mean (n - 1) / 2 and variance (n^2 - 1) / 12
    for &(rows, cols) in &[(1, 1), (3, 4), (10, 10), (7, 13)] {
        let a = ArrayBuilder::new(&[rows, cols]).dtype(DType::Real).build();
        let n = (rows * cols) as f64;
        assert_relative_eq!(a.mean(), (n - 1.) / 2.);
        assert_relative_eq!(a.variance(), (n * n - 1.) / 12., max_relative = 1e-12);
    }
}

#[test]
fn arithmetic_stays_close()
{
    let mut rng = SmallRng::seed_from_u64(9);
    let xs = random_reals(&mut rng, 60);
    let a = FixedArray::from_shape_vec([6, 10], xs).unwrap();
    let b = (&a * 3.).try_sub(&a).unwrap();
    let c = (&a + &a).unwrap();
    assert!(b.relative_eq(&c, 1e-12, 1e-12));
}
