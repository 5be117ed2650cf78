use std::fmt;

use tracing::debug;

use crate::config::MemberPolicy;
use crate::observation::{Observation, ScanRecord};

/// Coarse frequency band classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Band {
    Ghz2_4,
    Ghz5,
    Ghz6,
    Unknown,
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ghz2_4 => write!(f, "2.4 GHz"),
            Self::Ghz5 => write!(f, "5 GHz"),
            Self::Ghz6 => write!(f, "6 GHz"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Classify a channel frequency given in GHz.
pub fn band_label(frequency_ghz: f64) -> Band {
    if (2.400..=2.500).contains(&frequency_ghz) {
        Band::Ghz2_4
    } else if (5.000..6.000).contains(&frequency_ghz) {
        Band::Ghz5
    } else if (6.000..7.000).contains(&frequency_ghz) {
        Band::Ghz6
    } else {
        Band::Unknown
    }
}

/// `"{name} {band}"`, with missing frequencies classed as `Unknown`.
pub fn network_label(name: &str, frequency_ghz: Option<f64>) -> String {
    let band = frequency_ghz.map(band_label).unwrap_or(Band::Unknown);
    format!("{name} {band}")
}

pub fn record_label(record: &ScanRecord) -> String {
    network_label(record.network_name(), record.channel_frequency)
}

pub fn observation_label(observation: &Observation) -> String {
    network_label(observation.network_name(), observation.channel_frequency)
}

/// A logical network: display label plus the radios seen under it.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkIdentity {
    pub label: String,
    /// Member BSSIDs in the order seen. Duplicates are kept.
    pub members: Vec<String>,
}

/// Groups raw scan records by label, preserving first-seen label order.
pub struct NetworkAggregator;

impl NetworkAggregator {
    pub fn aggregate<'a, I>(records: I) -> Vec<NetworkIdentity>
    where
        I: IntoIterator<Item = &'a ScanRecord>,
    {
        let mut groups: Vec<NetworkIdentity> = Vec::new();
        for record in records {
            let label = record_label(record);
            let bssid = record.bssid.clone().unwrap_or_default();
            match groups.iter_mut().find(|g| g.label == label) {
                Some(group) => group.members.push(bssid),
                None => groups.push(NetworkIdentity {
                    label,
                    members: vec![bssid],
                }),
            }
        }
        groups
    }

    /// Same grouping, built from stored observations (e.g. an imported CSV).
    pub fn aggregate_observations<'a, I>(observations: I) -> Vec<NetworkIdentity>
    where
        I: IntoIterator<Item = &'a Observation>,
    {
        let mut groups: Vec<NetworkIdentity> = Vec::new();
        for obs in observations {
            let label = observation_label(obs);
            match groups.iter_mut().find(|g| g.label == label) {
                Some(group) => group.members.push(obs.bssid.clone()),
                None => groups.push(NetworkIdentity {
                    label,
                    members: vec![obs.bssid.clone()],
                }),
            }
        }
        groups
    }
}

/// One row of the persistent network list.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkEntry {
    pub identity: NetworkIdentity,
    pub checked: bool,
}

/// Networks offered to the user. Entries survive later batches that no
/// longer contain them; labels are unique by exact, case-sensitive match.
#[derive(Clone, Debug, Default)]
pub struct NetworkList {
    entries: Vec<NetworkEntry>,
    policy: MemberPolicy,
}

impl NetworkList {
    pub fn new(policy: MemberPolicy) -> Self {
        Self {
            entries: Vec::new(),
            policy,
        }
    }

    /// Fold a completed scan batch into the list. Returns the labels that
    /// were new.
    pub fn merge_batch(&mut self, records: &[ScanRecord]) -> Vec<String> {
        let mut added = Vec::new();
        for identity in NetworkAggregator::aggregate(records) {
            match self.position(&identity.label) {
                Some(idx) => {
                    if self.policy == MemberPolicy::Accumulate {
                        let members = &mut self.entries[idx].identity.members;
                        for bssid in identity.members {
                            if !members.contains(&bssid) {
                                members.push(bssid);
                            }
                        }
                    }
                }
                None => {
                    debug!(label = %identity.label, members = identity.members.len(), "New network");
                    added.push(identity.label.clone());
                    self.entries.push(NetworkEntry {
                        identity,
                        checked: false,
                    });
                }
            }
        }
        added
    }

    pub fn get(&self, label: &str) -> Option<&NetworkEntry> {
        self.entries.iter().find(|e| e.identity.label == label)
    }

    pub fn set_checked(&mut self, label: &str, checked: bool) -> bool {
        match self.entries.iter_mut().find(|e| e.identity.label == label) {
            Some(entry) => {
                entry.checked = checked;
                true
            }
            None => false,
        }
    }

    pub fn entries(&self) -> &[NetworkEntry] {
        &self.entries
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.identity.label.as_str())
    }

    pub fn any_checked(&self) -> bool {
        self.entries.iter().any(|e| e.checked)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.identity.label == label)
    }
}
