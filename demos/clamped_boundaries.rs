//! Comparing the boundary conditions on the same samples.

use nonuniform_cubic_splines::{Boundary, CubicSpline};

fn main() {
    env_logger::init();

    // y = x³ on a non-uniform mesh; y' = 3x², y'' = 6x.
    let x = vec![-1.0, -0.25, 0.5, 1.25, 2.0];
    let y: Vec<f64> = x.iter().map(|x| x * x * x).collect();
    let probes = [-1.5, -0.6, 0.0, 0.9, 1.7, 2.5];

    let boundaries = [
        ("natural", Boundary::Natural),
        (
            "second derivative",
            Boundary::SecondDerivative {
                first: -6.0,
                last: 12.0,
            },
        ),
        (
            "first derivative",
            Boundary::FirstDerivative {
                first: 3.0,
                last: 12.0,
            },
        ),
    ];

    for (name, boundary) in boundaries {
        let spline = CubicSpline::new(&x, &y, boundary).unwrap();
        let values = spline.evaluate(&probes).unwrap();

        println!("{}:", name);
        println!(
            "  end momentums {:+.4} / {:+.4}",
            spline.momentums()[0],
            spline.momentums()[x.len() - 1]
        );
        for (p, v) in probes.iter().zip(values) {
            println!("  s({:+.2}) = {:+.4}   x³ = {:+.4}", p, v, p * p * p);
        }
    }
}
