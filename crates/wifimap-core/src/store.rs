use std::collections::HashSet;

use crate::observation::Observation;

/// Append-only collection of observations for the current session.
///
/// Observations are never merged: repeated captures at one location all
/// stay and all feed interpolation.
#[derive(Clone, Debug, Default)]
pub struct SampleStore {
    observations: Vec<Observation>,
}

impl SampleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, observation: Observation) {
        self.observations.push(observation);
    }

    pub fn extend<I: IntoIterator<Item = Observation>>(&mut self, observations: I) {
        self.observations.extend(observations);
    }

    /// Observations whose BSSID is in `members`, in capture order.
    pub fn filter_by_members<S: AsRef<str>>(&self, members: &[S]) -> Vec<&Observation> {
        let wanted: HashSet<&str> = members.iter().map(|m| m.as_ref()).collect();
        self.observations
            .iter()
            .filter(|o| wanted.contains(o.bssid.as_str()))
            .collect()
    }

    pub fn clear(&mut self) {
        self.observations.clear();
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    pub fn as_slice(&self) -> &[Observation] {
        &self.observations
    }
}

impl<'a> IntoIterator for &'a SampleStore {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}
