//! Basic usage example for nonuniform-cubic-splines

use nonuniform_cubic_splines::{
    build_and_evaluate_second_derivative, integrate_simpson, CubicSpline,
};

fn main() {
    env_logger::init();

    println!("=== Natural Cubic Spline Example ===\n");

    // Example 1: Interpolate a coarse, non-uniform sampling of sin(x)
    println!("Natural spline through sin(x):");
    let x = vec![0.0, 0.4, 1.1, 1.5, 2.3, 3.0];
    let y: Vec<f64> = x.iter().map(|x: &f64| x.sin()).collect();

    let xnew: Vec<f64> = (0..=12).map(|i| i as f64 * 0.25).collect();
    let result =
        build_and_evaluate_second_derivative(&xnew, &x, &y, 0.0, 0.0).unwrap();

    for (x, y) in xnew.iter().zip(&result.values) {
        println!("  s({:.2}) = {:+.4}   sin = {:+.4}", x, y, x.sin());
    }

    // Example 2: The pieces the builder produced
    println!("\nMomentums (second derivatives at the knots):");
    for (x, m) in x.iter().zip(&result.momentums) {
        println!("  M({:.2}) = {:+.4}", x, m);
    }

    // Example 3: Linear continuation outside the knots
    println!("\nExtrapolation:");
    let spline = CubicSpline::natural(&x, &y).unwrap();
    let outside = spline.evaluate(&[-0.5, 3.5]).unwrap();
    println!("  s(-0.50) = {:+.4}", outside[0]);
    println!("  s( 3.50) = {:+.4}", outside[1]);

    // Example 4: Integrating the oversampled curve
    println!("\nIntegral over [0, 3]:");
    println!(
        "  Simpson on the spline samples: {:.5}",
        integrate_simpson(&xnew, &result.values).unwrap()
    );
    println!("  Exact:                         {:.5}", 1.0 - 3.0f64.cos());

    // Example 5: Error handling
    println!("\nError handling:");
    match CubicSpline::natural(&[0.0, 1.0, 2.0], &[1.0, 2.0]) {
        Ok(_) => println!("  Built a spline"),
        Err(e) => println!("  Error: {}", e),
    }
}
