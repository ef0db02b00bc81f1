//! Benchmark support crate; the benchmarks live next to the manifest.
