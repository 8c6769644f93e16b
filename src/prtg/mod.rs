pub mod xml;

use crate::metrics::MetricSnapshot;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChannelKind {
    Speed,
    Count,
}

#[derive(Debug, Clone, Copy)]
pub enum ValueSource {
    TrafficTotal,
    TrafficIn,
    TrafficOut,
    AdvertisedRoutes,
    ApprovedRoutes,
}

/// Static channel descriptor. The channel set is fixed at compile time, no
/// dynamic discovery.
#[derive(Debug, Clone, Copy)]
pub struct ChannelSpec {
    pub name: &'static str,
    pub kind: ChannelKind,
    pub source: ValueSource,
}

pub const CHANNELS: [ChannelSpec; 5] = [
    ChannelSpec {
        name: "Traffic Total",
        kind: ChannelKind::Speed,
        source: ValueSource::TrafficTotal,
    },
    ChannelSpec {
        name: "Traffic In",
        kind: ChannelKind::Speed,
        source: ValueSource::TrafficIn,
    },
    ChannelSpec {
        name: "Traffic Out",
        kind: ChannelKind::Speed,
        source: ValueSource::TrafficOut,
    },
    ChannelSpec {
        name: "Advertised Routes",
        kind: ChannelKind::Count,
        source: ValueSource::AdvertisedRoutes,
    },
    ChannelSpec {
        name: "Approved Routes",
        kind: ChannelKind::Count,
        source: ValueSource::ApprovedRoutes,
    },
];

/// One channel resolved against a snapshot, value already formatted the way
/// the monitoring agent expects it.
#[derive(Debug, Clone)]
pub struct ChannelResult {
    pub name: &'static str,
    pub kind: ChannelKind,
    pub value: String,
}

impl ChannelSpec {
    fn resolve(&self, snapshot: &MetricSnapshot) -> ChannelResult {
        // Speed channels carry two decimals, counts are plain integers.
        let value = match self.source {
            ValueSource::TrafficTotal => format!("{:.2}", snapshot.mbps_total()),
            ValueSource::TrafficIn => format!("{:.2}", snapshot.mbps_in()),
            ValueSource::TrafficOut => format!("{:.2}", snapshot.mbps_out()),
            ValueSource::AdvertisedRoutes => snapshot.advertised_routes.to_string(),
            ValueSource::ApprovedRoutes => snapshot.approved_routes.to_string(),
        };
        ChannelResult {
            name: self.name,
            kind: self.kind,
            value,
        }
    }
}

/// Resolve all five channels in their fixed order.
pub fn channel_results(snapshot: &MetricSnapshot) -> Vec<ChannelResult> {
    CHANNELS.iter().map(|c| c.resolve(snapshot)).collect()
}
