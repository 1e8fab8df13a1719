//! Benchmark suite for `OpSpinFrame` rendering performance.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --bin benchmark_op_spin_frame            # Run all benchmarks
//! cargo run --release --bin benchmark_op_spin_frame -- --json  # JSON output
//! cargo run --release --bin benchmark_op_spin_frame -- --filter Size  # Filter by pattern
//! cargo run --release --bin benchmark_op_spin_frame -- --list-tests   # List available tests
//! ```
//!
//! # Notes
//!
//! - Timings measure the resampling kernel with preallocated input/output
//!   buffers; the animation-loop benchmarks include the per-frame angle
//!   advance.
//! - Throughput is reported in megapixels per second (MP/s).

use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use rotoframe::{bench_utils, Frame, OpSpinFrame};

/// Results from a single benchmark run.
#[derive(Clone, Debug)]
struct BenchmarkResult {
    test_name: String,
    mean_time_ms: f64,
    median_time_ms: f64,
    standard_deviation: f64,
    min_time_ms: f64,
    max_time_ms: f64,
    p95_time_ms: f64,
    iterations: usize,

    frame_width: u32,
    frame_height: u32,
    angle: f64,
    output_frame_bytes: usize,
    megapixels_per_second: f64,
}

impl BenchmarkResult {
    fn new(test_name: &str, iterations: usize) -> Self {
        Self {
            test_name: test_name.to_string(),
            mean_time_ms: 0.0,
            median_time_ms: 0.0,
            standard_deviation: 0.0,
            min_time_ms: 0.0,
            max_time_ms: 0.0,
            p95_time_ms: 0.0,
            iterations,
            frame_width: 0,
            frame_height: 0,
            angle: 0.0,
            output_frame_bytes: 0,
            megapixels_per_second: 0.0,
        }
    }
}

/// Statistical functions for benchmark analysis.
struct StatisticalAnalysis;

impl StatisticalAnalysis {
    fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    fn standard_deviation(values: &[f64]) -> f64 {
        if values.len() < 2 {
            return 0.0;
        }
        let mean = Self::mean(values);
        let mut variance = 0.0;
        for v in values {
            variance += (v - mean) * (v - mean);
        }
        variance /= (values.len() - 1) as f64;
        variance.sqrt()
    }

    fn median(values: &[f64]) -> f64 {
        Self::percentile(values, 0.5)
    }

    /// Computes the p-th percentile using linear interpolation.
    ///
    /// `p` is in [0, 1]. For p95, pass 0.95.
    fn percentile(values: &[f64], p: f64) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).expect("timings are finite"));
        if p <= 0.0 {
            return sorted[0];
        }
        if p >= 1.0 {
            return sorted[sorted.len() - 1];
        }
        let pos = p * (sorted.len() as f64 - 1.0);
        let i = pos.floor() as usize;
        let frac = pos - i as f64;
        if i + 1 >= sorted.len() {
            return sorted[i];
        }
        sorted[i] * (1.0 - frac) + sorted[i + 1] * frac
    }
}

/// Executes a benchmark: warmup iterations first, then timed iterations.
fn run_benchmark<B>(
    test_name: &str,
    mut bench_fn: B,
    iterations: usize,
    warmups: usize,
) -> BenchmarkResult
where
    B: FnMut(),
{
    let mut result = BenchmarkResult::new(test_name, iterations);
    let mut times = Vec::with_capacity(iterations);

    for _ in 0..warmups {
        bench_fn();
    }

    for _ in 0..iterations {
        let start = Instant::now();
        bench_fn();
        times.push(duration_to_ms(start.elapsed()));
    }

    result.mean_time_ms = StatisticalAnalysis::mean(&times);
    result.median_time_ms = StatisticalAnalysis::median(&times);
    result.standard_deviation = StatisticalAnalysis::standard_deviation(&times);
    result.min_time_ms = times.iter().cloned().fold(f64::INFINITY, f64::min);
    result.max_time_ms = times.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    result.p95_time_ms = StatisticalAnalysis::percentile(&times, 0.95);
    result
}

/// Orchestrates the full benchmark suite with filtering and output
/// formatting.
struct BenchmarkSuite {
    results: Vec<BenchmarkResult>,
    filter: String,
}

impl BenchmarkSuite {
    fn new() -> Self {
        Self {
            results: Vec::new(),
            filter: String::new(),
        }
    }

    fn set_filter(&mut self, filter: String) {
        self.filter = filter;
    }

    fn should_run_test(&self, test_name: &str) -> bool {
        self.filter.is_empty() || test_name.contains(&self.filter)
    }

    fn run_all(&mut self, json_output: bool, output_file: Option<String>) -> io::Result<()> {
        if !json_output {
            println!("=== OpSpinFrame Benchmark Suite ===\n");
        }

        self.benchmark_by_size(json_output);
        self.benchmark_by_angle(json_output);
        self.benchmark_animation_loop(json_output);

        if json_output {
            let json = self.to_json();
            if let Some(path) = output_file {
                let mut file = File::create(path)?;
                file.write_all(json.as_bytes())?;
            } else {
                println!("{json}");
            }
        } else {
            self.print_report();
        }

        Ok(())
    }

    fn list_tests(&self) {
        let mut names = Vec::new();
        names.extend(self.test_names_by_size());
        names.extend(self.test_names_by_angle());
        names.push("AnimationLoop_512".to_string());
        names.sort();
        for name in names {
            println!("{name}");
        }
    }

    fn record(&mut self, mut result: BenchmarkResult, size: u32, angle: f64, silent: bool) {
        result.frame_width = size;
        result.frame_height = size;
        result.angle = angle;
        result.output_frame_bytes = size as usize * size as usize * rotoframe::CHANNELS;

        let total_pixels = f64::from(size) * f64::from(size);
        let mean_ms = result.mean_time_ms.max(0.000_001);
        result.megapixels_per_second = total_pixels / mean_ms * 1000.0 / 1_000_000.0;

        if !silent {
            println!(
                "  {}: {:.3} ms - {:.1} MP/s",
                result.test_name, result.mean_time_ms, result.megapixels_per_second
            );
        }
        self.results.push(result);
    }

    /// Measures scaling behavior across frame sizes at a fixed angle.
    fn benchmark_by_size(&mut self, silent: bool) {
        if !silent {
            println!("--- Benchmark: Size Scaling (0.2 rad) ---");
        }

        let angle = 0.2;
        for size in bench_utils::BENCH_SIZES {
            let test_name = format!("Size_{size}x{size}");
            if !self.should_run_test(&test_name) {
                continue;
            }

            let input = bench_utils::create_test_frame(size, size);
            let mut spin = OpSpinFrame::new(size, size).expect("nonzero bench size");
            spin.set_angle(angle);
            let mut output = Frame::new(size, size).expect("nonzero bench size");

            let result = run_benchmark(
                &test_name,
                || {
                    spin.apply_to_preallocated(&input, &mut output)
                        .expect("frames match the session dimensions");
                },
                50,
                2,
            );
            self.record(result, size, angle, silent);
        }

        if !silent {
            println!();
        }
    }

    /// Compares rotation angles at a fixed 512x512 size.
    fn benchmark_by_angle(&mut self, silent: bool) {
        if !silent {
            println!("--- Benchmark: Rotation Angles (512x512) ---");
        }

        let size = 512_u32;
        for angle in bench_utils::BENCH_ANGLES {
            let test_name = format!("Angle_{angle:.3}rad");
            if !self.should_run_test(&test_name) {
                continue;
            }

            let input = bench_utils::create_test_frame(size, size);
            let mut spin = OpSpinFrame::new(size, size).expect("nonzero bench size");
            spin.set_angle(angle);
            let mut output = Frame::new(size, size).expect("nonzero bench size");

            let result = run_benchmark(
                &test_name,
                || {
                    spin.apply_to_preallocated(&input, &mut output)
                        .expect("frames match the session dimensions");
                },
                50,
                2,
            );
            self.record(result, size, angle, silent);
        }

        if !silent {
            println!();
        }
    }

    /// Simulates the animation loop: advance the angle, render, repeat.
    fn benchmark_animation_loop(&mut self, silent: bool) {
        if !silent {
            println!("--- Benchmark: Animation Loop (512x512) ---");
        }

        let size = 512_u32;
        let test_name = "AnimationLoop_512";
        if !self.should_run_test(test_name) {
            if !silent {
                println!();
            }
            return;
        }

        let input = bench_utils::create_test_frame(size, size);
        let mut spin = OpSpinFrame::new(size, size).expect("nonzero bench size");
        let mut output = Frame::new(size, size).expect("nonzero bench size");

        let result = run_benchmark(
            test_name,
            || {
                spin.advance(OpSpinFrame::DEFAULT_ANGLE_STEP);
                spin.apply_to_preallocated(&input, &mut output)
                    .expect("frames match the session dimensions");
            },
            50,
            2,
        );
        let final_angle = spin.angle();
        self.record(result, size, final_angle, silent);

        if !silent {
            println!();
        }
    }

    fn to_json(&self) -> String {
        let mut out = String::new();
        out.push_str("{\n");
        out.push_str("  \"results\": [\n");
        for (idx, r) in self.results.iter().enumerate() {
            out.push_str("    {\n");
            out.push_str(&format!("      \"testName\": \"{}\",\n", r.test_name));
            out.push_str(&format!("      \"meanTimeMs\": {:.3},\n", r.mean_time_ms));
            out.push_str(&format!(
                "      \"medianTimeMs\": {:.3},\n",
                r.median_time_ms
            ));
            out.push_str(&format!(
                "      \"standardDeviation\": {:.3},\n",
                r.standard_deviation
            ));
            out.push_str(&format!("      \"minTimeMs\": {:.3},\n", r.min_time_ms));
            out.push_str(&format!("      \"maxTimeMs\": {:.3},\n", r.max_time_ms));
            out.push_str(&format!("      \"p95TimeMs\": {:.3},\n", r.p95_time_ms));
            out.push_str(&format!("      \"iterations\": {},\n", r.iterations));
            out.push_str(&format!("      \"frameWidth\": {},\n", r.frame_width));
            out.push_str(&format!("      \"frameHeight\": {},\n", r.frame_height));
            out.push_str(&format!("      \"angleRadians\": {:.3},\n", r.angle));
            out.push_str(&format!(
                "      \"outputFrameBytes\": {},\n",
                r.output_frame_bytes
            ));
            out.push_str(&format!(
                "      \"megapixelsPerSecond\": {:.2}\n",
                r.megapixels_per_second
            ));
            out.push_str("    }");
            if idx + 1 < self.results.len() {
                out.push(',');
            }
            out.push('\n');
        }
        out.push_str("  ]\n");
        out.push_str("}\n");
        out
    }

    fn print_report(&self) {
        println!("================================================================");
        println!("                    DETAILED RESULTS");
        println!("================================================================\n");
        println!(
            "{:<22} {:<12} {:<12} {:<12} {:<12} {:<12} {:<12} {:<12}",
            "Test Name", "Mean (ms)", "Median", "Std Dev", "Min", "Max", "P95", "MP/s"
        );
        println!("{}", "-".repeat(106));
        for r in &self.results {
            println!(
                "{:<22} {:<12.3} {:<12.3} {:<12.3} {:<12.3} {:<12.3} {:<12.3} {:<12.1}",
                r.test_name,
                r.mean_time_ms,
                r.median_time_ms,
                r.standard_deviation,
                r.min_time_ms,
                r.max_time_ms,
                r.p95_time_ms,
                r.megapixels_per_second
            );
        }
    }

    fn test_names_by_size(&self) -> Vec<String> {
        bench_utils::BENCH_SIZES
            .iter()
            .map(|s| format!("Size_{s}x{s}"))
            .collect()
    }

    fn test_names_by_angle(&self) -> Vec<String> {
        bench_utils::BENCH_ANGLES
            .iter()
            .map(|angle| format!("Angle_{angle:.3}rad"))
            .collect()
    }
}

fn duration_to_ms(dur: Duration) -> f64 {
    dur.as_secs_f64() * 1000.0
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [options]");
    eprintln!("Options:");
    eprintln!("  --json              Output results in JSON format");
    eprintln!("  --output <file>     Write results to file (default: stdout)");
    eprintln!("  --filter <pattern>  Run only tests matching pattern");
    eprintln!("  --list-tests        List all available tests");
    eprintln!("  --help, -h          Show this help");
}

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let mut json_output = false;
    let mut output_file: Option<String> = None;
    let mut filter_pattern: Option<String> = None;
    let mut list_tests = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => {
                json_output = true;
                i += 1;
            }
            "--output" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --output requires a filename argument");
                    print_usage(&args[0]);
                    std::process::exit(1);
                }
                output_file = Some(args[i + 1].clone());
                i += 2;
            }
            "--filter" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --filter requires a pattern argument");
                    print_usage(&args[0]);
                    std::process::exit(1);
                }
                filter_pattern = Some(args[i + 1].clone());
                i += 2;
            }
            "--list-tests" => {
                list_tests = true;
                i += 1;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {other}");
                print_usage(&args[0]);
                std::process::exit(1);
            }
        }
    }

    let mut suite = BenchmarkSuite::new();

    if list_tests {
        suite.list_tests();
        return Ok(());
    }

    if let Some(filter) = filter_pattern {
        suite.set_filter(filter);
    }

    suite.run_all(json_output, output_file)
}
