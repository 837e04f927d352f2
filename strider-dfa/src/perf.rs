// Quick release mode performance check
//
// Run with: cargo test --release -p strider-dfa scan_perf -- --ignored

#[cfg(test)]
mod perf_tests {
    use crate::{build, DfaConfig};
    use std::time::Instant;

    #[test]
    #[ignore] // Run with: cargo test --release scan_perf -- --ignored
    fn scan_perf() {
        let compiled = build(b"needle_in_haystack", &DfaConfig::default()).unwrap();
        let text: Vec<u8> = b"hay needle_in_hay haystack "
            .iter()
            .copied()
            .cycle()
            .take(1 << 20)
            .collect();

        // Warmup
        for _ in 0..10 {
            let _ = compiled.search(&text);
        }

        let iterations = 100;
        let start = Instant::now();
        for _ in 0..iterations {
            let _ = compiled.search(&text);
        }
        let duration = start.elapsed();
        let ns_per_byte = duration.as_nanos() as f64 / (iterations as f64 * text.len() as f64);

        println!("\n=== Release Mode Scan Performance ===");
        println!("Iterations: {}", iterations);
        println!("Total time: {:?}", duration);
        println!("Per byte: {:.3} ns", ns_per_byte);
        println!(
            "Throughput: {:.2} MB/sec",
            (iterations as f64 * text.len() as f64) / duration.as_secs_f64() / 1_000_000.0
        );

        assert!(ns_per_byte < 5.0, "scan should be linear and fast, got {:.3} ns/byte", ns_per_byte);
    }
}
