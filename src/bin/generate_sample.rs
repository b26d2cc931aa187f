//! Writes a synthetic controller log for trying out the viewer.
//!
//! The log mimics the firmware step test: the objective flips between
//! +10000 and -10000 and a clamped PID drives a first-order motor model.
//! Each update prints `TRACE <position> <objective> <output> <counter>`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "generate_sample", about = "Write a synthetic TRACE log")]
struct Args {
    /// Output file
    #[arg(value_name = "PATH", default_value = "tmp")]
    path: PathBuf,

    /// Controller updates to simulate
    #[arg(long, default_value_t = 4000)]
    updates: usize,

    /// Updates between objective flips
    #[arg(long, default_value_t = 500)]
    hold: usize,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

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

/// Clamped PID with a clamped integral term.
struct Pid {
    kp: f64,
    ki: f64,
    kd: f64,
    limit: f64,
    integral: f64,
    prev_error: Option<f64>,
}

impl Pid {
    fn new(kp: f64, ki: f64, kd: f64, limit: f64) -> Self {
        Pid {
            kp,
            ki,
            kd,
            limit,
            integral: 0.0,
            prev_error: None,
        }
    }

    fn next_output(&mut self, setpoint: f64, measured: f64) -> f64 {
        let error = setpoint - measured;
        self.integral = (self.integral + self.ki * error).clamp(-self.limit, self.limit);
        let derivative = self.prev_error.map_or(0.0, |prev| error - prev);
        self.prev_error = Some(error);
        (self.kp * error + self.integral + self.kd * derivative).clamp(-self.limit, self.limit)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);

    let file = File::create(&args.path)
        .with_context(|| format!("creating {}", args.path.display()))?;
    let mut out = BufWriter::new(file);

    let mut pid = Pid::new(0.002, 0.000_02, 0.05, 2.0);
    let mut position = 0.0f64;
    let mut velocity = 0.0f64;
    let mut objective = 10000.0f64;
    let mut counter: u64 = 0;
    let mut traced = 0usize;

    writeln!(out, "INFO Motor initialized")?;

    for update in 0..args.updates {
        if update > 0 && update % args.hold.max(1) == 0 {
            objective = -objective;
            // Contains "value", so the viewer drops it.
            writeln!(out, "TRACE objective value changed to {objective}")?;
        }

        let measured = (position + rng.gauss(0.0, 1.5)).round();
        let output = pid.next_output(objective, measured);

        // First-order response of the motor to the commanded current.
        velocity += 0.15 * (output * 60.0 - velocity);
        position += velocity;

        // The firmware drops a print now and then; the counter keeps going.
        counter += if rng.next_f64() < 0.05 { 2 + (rng.next_u64() % 3) } else { 1 };

        writeln!(out, "TRACE {measured} {objective} {output:.4} {counter}")?;
        traced += 1;

        if update % 250 == 0 {
            writeln!(out, "DEBUG update {update} velocity {velocity:.2}")?;
        }
    }

    out.flush()
        .with_context(|| format!("writing {}", args.path.display()))?;

    println!(
        "Wrote {traced} TRACE records ({} updates) to {}",
        args.updates,
        args.path.display()
    );
    Ok(())
}
