//! Client directory panel: debounced name search and the selected client's vehicles.
//!
//! Every keystroke bumps `search_seq`; a search result is only accepted if its
//! sequence number is still current, so a slow response for "Lu" can never
//! overwrite the results for "Luis".

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use crate::net::types::{ClientSummary, Vehicle};

/// Quiet period after the last keystroke before a search is sent.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectoryState {
    pub query: String,
    pub clients: Vec<ClientSummary>,
    pub selected: Option<ClientSummary>,
    pub vehicles: Vec<Vehicle>,
    pub search_seq: u64,
    pub searching: bool,
}

impl DirectoryState {
    /// Record a new query and return the sequence number its search must carry.
    /// A blank query clears the results immediately.
    pub fn begin_search(&mut self, query: &str) -> u64 {
        self.query = query.to_owned();
        self.search_seq = self.search_seq.wrapping_add(1);
        self.searching = !query.trim().is_empty();
        if !self.searching {
            self.clients.clear();
        }
        self.search_seq
    }

    pub fn is_current(&self, seq: u64) -> bool {
        self.search_seq == seq
    }

    /// Store results for `seq`. Stale results are dropped and `false` returned.
    pub fn accept_results(&mut self, seq: u64, clients: Vec<ClientSummary>) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.clients = clients;
        self.searching = false;
        true
    }

    pub fn select(&mut self, client: ClientSummary) {
        self.selected = Some(client);
        self.vehicles.clear();
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.vehicles.clear();
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.selected.as_ref().map(|client| client.id)
    }

    /// Store vehicles for `client_id` unless the selection moved on meanwhile.
    pub fn accept_vehicles(&mut self, client_id: i64, vehicles: Vec<Vehicle>) -> bool {
        if self.selected_id() != Some(client_id) {
            return false;
        }
        self.vehicles = vehicles;
        true
    }
}
