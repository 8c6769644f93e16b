use log::{debug, warn};

use crate::cli::FieldMap;
use crate::error::{Result, SensorError};
use crate::metrics::MetricSnapshot;

/// Split one output line into a metric name and a raw value string.
///
/// Accepted shapes:
///   `name{label="x"} 123`   Prometheus text format
///   `name 123`              label-free Prometheus
///   `name=123`              plain key/value
///
/// Blank lines and `#` comments yield `None`. Label blocks may contain `=`
/// and spaces, so the `}` split takes precedence over both.
fn split_sample(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    if let Some(end) = line.find('}') {
        let (name, rest) = line.split_at(end + 1);
        let value = rest.trim().trim_start_matches('=').trim_start();
        if value.is_empty() {
            return None;
        }
        return Some((name, value));
    }

    if let Some((name, value)) = line.split_once('=') {
        return Some((name.trim(), value.trim()));
    }

    let mut parts = line.split_whitespace();
    let name = parts.next()?;
    let value = parts.next()?;
    Some((name, value))
}

/// Metric name with any `{...}` label block stripped.
fn base_name(name: &str) -> &str {
    name.split('{').next().unwrap_or(name)
}

/// Parse a raw value into a non-negative byte/route count. Counters are
/// monotonic, so negative or malformed values count as zero.
fn parse_value(raw: &str) -> u64 {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v as u64,
        Ok(_) => 0,
        Err(_) => 0,
    }
}

/// Extract a snapshot from the tool output. Samples sharing a base name are
/// summed, which folds the per-path label variants of the byte counters into
/// a single direction total. Missing fields stay at zero; an output with no
/// recognizable field at all is a parse failure.
pub fn parse_snapshot(text: &str, fields: &FieldMap) -> Result<MetricSnapshot> {
    let mut snapshot = MetricSnapshot::default();
    let mut recognized = 0usize;

    for line in text.lines() {
        let Some((name, raw_value)) = split_sample(line) else {
            continue;
        };
        let base = base_name(name);

        let slot = if fields.rx_bytes.iter().any(|k| k == base) {
            &mut snapshot.bytes_in
        } else if fields.tx_bytes.iter().any(|k| k == base) {
            &mut snapshot.bytes_out
        } else if fields.advertised_routes.iter().any(|k| k == base) {
            &mut snapshot.advertised_routes
        } else if fields.approved_routes.iter().any(|k| k == base) {
            &mut snapshot.approved_routes
        } else {
            debug!("ignoring unrecognized metric {}", base);
            continue;
        };

        *slot += parse_value(raw_value);
        recognized += 1;
    }

    if recognized == 0 {
        warn!("no recognizable metric fields in tool output");
        return Err(SensorError::Parse(
            "no recognizable metric fields in tool output".to_string(),
        ));
    }

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> FieldMap {
        FieldMap::default()
    }

    #[test]
    fn test_split_prometheus_labeled() {
        let (name, value) =
            split_sample("tailscaled_inbound_bytes_total{path=\"direct_ipv4\"} 1024").unwrap();
        assert_eq!(name, "tailscaled_inbound_bytes_total{path=\"direct_ipv4\"}");
        assert_eq!(value, "1024");
        assert_eq!(base_name(name), "tailscaled_inbound_bytes_total");
    }

    #[test]
    fn test_split_key_value() {
        assert_eq!(split_sample("TxBytes=125000000"), Some(("TxBytes", "125000000")));
        assert_eq!(split_sample("RxBytes = 10"), Some(("RxBytes", "10")));
    }

    #[test]
    fn test_split_skips_comments_and_blanks() {
        assert_eq!(split_sample("# HELP tailscaled_inbound_bytes_total ..."), None);
        assert_eq!(split_sample("   "), None);
    }

    #[test]
    fn test_sums_across_label_variants() {
        let text = "\
tailscaled_inbound_bytes_total{path=\"derp\"} 100
tailscaled_inbound_bytes_total{path=\"direct_ipv4\"} 200
tailscaled_inbound_bytes_total{path=\"direct_ipv6\"} 50
tailscaled_outbound_bytes_total{path=\"derp\"} 25
";
        let snapshot = parse_snapshot(text, &fields()).unwrap();
        assert_eq!(snapshot.bytes_in, 350);
        assert_eq!(snapshot.bytes_out, 25);
    }

    #[test]
    fn test_key_value_scenario() {
        let text = "TxBytes=125000000\nRxBytes=62500000\nAdvertisedRoutes=2\nApprovedRoutes=1\n";
        let snapshot = parse_snapshot(text, &fields()).unwrap();
        assert_eq!(snapshot.bytes_out, 125_000_000);
        assert_eq!(snapshot.bytes_in, 62_500_000);
        assert_eq!(snapshot.advertised_routes, 2);
        assert_eq!(snapshot.approved_routes, 1);
        assert!((snapshot.mbps_out() - 1000.0).abs() < 1e-9);
        assert!((snapshot.mbps_in() - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let text = "tailscaled_advertised_routes 3\n";
        let snapshot = parse_snapshot(text, &fields()).unwrap();
        assert_eq!(snapshot.advertised_routes, 3);
        assert_eq!(snapshot.approved_routes, 0);
        assert_eq!(snapshot.bytes_in, 0);
        assert_eq!(snapshot.bytes_out, 0);
    }

    #[test]
    fn test_unparseable_value_counts_as_zero() {
        let text = "RxBytes=garbage\nTxBytes=10\n";
        let snapshot = parse_snapshot(text, &fields()).unwrap();
        assert_eq!(snapshot.bytes_in, 0);
        assert_eq!(snapshot.bytes_out, 10);
    }

    #[test]
    fn test_negative_value_counts_as_zero() {
        let text = "RxBytes=-5\n";
        let snapshot = parse_snapshot(text, &fields()).unwrap();
        assert_eq!(snapshot.bytes_in, 0);
    }

    #[test]
    fn test_no_recognized_fields_is_parse_error() {
        let text = "uptime_seconds 12\nsomething_else 5\n";
        match parse_snapshot(text, &fields()) {
            Err(SensorError::Parse(_)) => {}
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_aliases() {
        let mut map = fields();
        map.rx_bytes = vec!["net_rx".to_string()];
        let snapshot = parse_snapshot("net_rx 99\n", &map).unwrap();
        assert_eq!(snapshot.bytes_in, 99);
    }
}
