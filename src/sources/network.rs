// Network counters via sysinfo, with per-second rates computed from the
// previous sample's deltas.

use std::time::Instant;
use sysinfo::Networks;

use super::NetSource;
use crate::models::{InterfaceStat, NetData};

pub struct SysinfoNetSource {
    networks: Networks,
    last: Option<(NetData, Instant)>,
    data: NetData,
}

impl Default for SysinfoNetSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoNetSource {
    pub fn new() -> Self {
        Self {
            networks: Networks::new_with_refreshed_list(),
            last: None,
            data: NetData::default(),
        }
    }
}

impl NetSource for SysinfoNetSource {
    fn update(&mut self) {
        self.networks.refresh(true);
        let mut interfaces: Vec<InterfaceStat> = self
            .networks
            .list()
            .iter()
            .map(|(name, data)| InterfaceStat {
                name: name.clone(),
                bytes_sent: data.total_transmitted(),
                bytes_recv: data.total_received(),
                packets_sent: data.total_packets_transmitted(),
                packets_recv: data.total_packets_received(),
                received_bytes_per_sec: 0.0,
                transmitted_bytes_per_sec: 0.0,
            })
            .collect();
        interfaces.sort_by(|a, b| a.name.cmp(&b.name));

        let now = Instant::now();
        if let Some((ref prev, prev_ts)) = self.last {
            let dt_secs = now.duration_since(prev_ts).as_secs_f64();
            if dt_secs > 0.0 {
                for iface in &mut interfaces {
                    if let Some(p) = prev.interfaces.iter().find(|i| i.name == iface.name) {
                        let drx = iface.bytes_recv.saturating_sub(p.bytes_recv);
                        let dtx = iface.bytes_sent.saturating_sub(p.bytes_sent);
                        iface.received_bytes_per_sec = drx as f64 / dt_secs;
                        iface.transmitted_bytes_per_sec = dtx as f64 / dt_secs;
                    }
                }
            }
        }

        let data = NetData { interfaces };
        self.last = Some((data.clone(), now));
        self.data = data;
    }

    fn net_data(&self) -> NetData {
        self.data.clone()
    }
}
