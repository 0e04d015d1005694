use std::time::Duration;

use serde::Serialize;

use crate::downloader::planer::{CommandSpec, Strategy};

/// Ratio of single to concurrent time. `None` unless the concurrent time is positive.
pub fn speedup(single_secs: f64, concurrent_secs: f64) -> Option<f64> {
    if concurrent_secs > 0.0 {
        Some(single_secs / concurrent_secs)
    } else {
        None
    }
}

pub fn format_seconds(secs: f64) -> String {
    format!("{:.2}s", secs)
}

pub fn format_speedup(ratio: f64) -> String {
    format!("{:.2}x", ratio)
}

#[derive(Debug, Clone, Serialize)]
pub struct RunTiming {
    pub label: Strategy,
    pub command: String,
    pub seconds: f64,
}

impl RunTiming {
    pub fn new(spec: &CommandSpec, elapsed: Duration) -> Self {
        Self {
            label: spec.label,
            command: spec.command_line(),
            seconds: elapsed.as_secs_f64(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub url: String,
    pub single: RunTiming,
    pub concurrent: RunTiming,
    pub speedup: Option<f64>,
}

impl BenchReport {
    pub fn new(url: String, single: RunTiming, concurrent: RunTiming) -> Self {
        let speedup = speedup(single.seconds, concurrent.seconds);
        Self {
            url,
            single,
            concurrent,
            speedup,
        }
    }

    /// Final summary line, absent when no ratio could be computed.
    pub fn speedup_line(&self) -> Option<String> {
        self.speedup
            .map(|ratio| format!("Speedup: {}", format_speedup(ratio)))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing(label: Strategy, seconds: f64) -> RunTiming {
        RunTiming {
            label,
            command: format!("fetch {}", label),
            seconds,
        }
    }

    #[test]
    fn test_speedup_ratio() {
        let ratio = speedup(10.0, 4.0).unwrap();
        assert_eq!(format_speedup(ratio), "2.50x");
    }

    #[test]
    fn test_speedup_zero_concurrent_time() {
        assert_eq!(speedup(10.0, 0.0), None);
    }

    #[test]
    fn test_format_seconds_two_decimals() {
        assert_eq!(format_seconds(12.3456), "12.35s");
        assert_eq!(format_seconds(0.0), "0.00s");
    }

    #[test]
    fn test_report_speedup_line() {
        let report = BenchReport::new(
            "http://host/a.bin".to_string(),
            timing(Strategy::Single, 10.0),
            timing(Strategy::Concurrent, 4.0),
        );
        assert_eq!(report.speedup_line().as_deref(), Some("Speedup: 2.50x"));

        let report = BenchReport::new(
            "http://host/a.bin".to_string(),
            timing(Strategy::Single, 10.0),
            timing(Strategy::Concurrent, 0.0),
        );
        assert_eq!(report.speedup_line(), None);
    }

    #[test]
    fn test_report_json_shape() {
        let report = BenchReport::new(
            "http://host/a.bin".to_string(),
            timing(Strategy::Single, 3.0),
            timing(Strategy::Concurrent, 0.0),
        );

        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["url"], "http://host/a.bin");
        assert_eq!(value["single"]["label"], "single");
        assert_eq!(value["concurrent"]["label"], "concurrent");
        assert_eq!(value["single"]["seconds"], 3.0);
        assert!(value["speedup"].is_null());
    }
}
