use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// A stance-phase force curve: loading peak, midstance dip (the breakpoint
/// the viewer reports), push-off peak, release.
fn force_at(t: f64, duration: f64, peak: f64, dip: f64) -> f64 {
    let phase = (t / duration).clamp(0.0, 1.0);
    let loading = peak * (phase * std::f64::consts::PI).sin();
    let midstance = (dip - peak) * (-((phase - 0.5) / 0.12).powi(2)).exp();
    (loading + midstance).max(0.0)
}

fn write_side(
    path: &str,
    value_column: &str,
    angles: &[(i32, usize, f64, f64)],
    rng: &mut SimpleRng,
) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {path}"))?;
    writer.write_record(["angle", value_column])?;

    let mut rows = 0;
    for &(angle, n_samples, peak, dip) in angles {
        let duration = n_samples as f64 * 0.1;
        for i in 0..n_samples {
            let t = i as f64 * 0.1;
            let force = force_at(t, duration, peak, dip) + rng.gauss(0.0, peak * 0.01);
            writer.write_record([angle.to_string(), format!("{force:.3}")])?;
            rows += 1;
        }
    }
    writer.flush()?;
    Ok(rows)
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    // (angle, samples, peak force, midstance dip). Side lengths differ on
    // purpose so the viewer's missing-value padding is visible.
    let left_angles = [
        (0, 60, 820.0, 540.0),
        (10, 60, 790.0, 510.0),
        (20, 55, 760.0, 480.0),
        (30, 60, 700.0, 430.0),
    ];
    let right_angles = [
        (0, 60, 805.0, 535.0),
        (10, 48, 800.0, 520.0), // dropped trial: shorter recording
        (20, 55, 750.0, 470.0),
        (30, 60, 710.0, 445.0),
    ];

    let left_rows = write_side("left.csv", "left", &left_angles, &mut rng)?;
    let right_rows = write_side("right.csv", "right", &right_angles, &mut rng)?;

    println!("Wrote {left_rows} rows to left.csv and {right_rows} rows to right.csv");
    Ok(())
}
