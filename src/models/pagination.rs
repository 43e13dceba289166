//! Pagination state
//!
//! Tracks which page to request next and whether a request is in flight.
//! Owned by the gallery controller; never shared as a global.

use serde::{Deserialize, Serialize};

/// Where the paginated loop currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadPhase {
    /// Ready to fetch `current_page` on the next trigger
    Idle,
    /// A request is outstanding; further triggers are ignored
    Loading,
    /// No more pages for this query
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationState {
    /// Next page to request (1-based)
    pub current_page: u32,
    /// Records rendered so far for this query
    pub loaded: u64,
    /// Total reachable hits reported by the last response
    pub total_hits: Option<u64>,
    pub phase: LoadPhase,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new()
    }
}

impl PaginationState {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            loaded: 0,
            total_hits: None,
            phase: LoadPhase::Idle,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn is_exhausted(&self) -> bool {
        self.phase == LoadPhase::Exhausted
    }

    /// Enter `Loading` if allowed; returns the page to fetch
    pub fn begin(&mut self) -> Option<u32> {
        match self.phase {
            LoadPhase::Idle => {
                self.phase = LoadPhase::Loading;
                Some(self.current_page)
            }
            LoadPhase::Loading | LoadPhase::Exhausted => None,
        }
    }

    /// Record a non-empty page. Returns true when this page was the last one.
    pub fn advance(&mut self, received: usize, total_hits: Option<u64>) -> bool {
        self.current_page += 1;
        self.loaded += received as u64;
        if total_hits.is_some() {
            self.total_hits = total_hits;
        }

        let reached_total = matches!(self.total_hits, Some(total) if self.loaded >= total);
        self.phase = if reached_total {
            LoadPhase::Exhausted
        } else {
            LoadPhase::Idle
        };
        reached_total
    }

    pub fn exhaust(&mut self) {
        self.phase = LoadPhase::Exhausted;
    }

    /// Back to `Idle` without advancing, so the same page can be retried
    pub fn fail(&mut self) {
        if self.phase == LoadPhase::Loading {
            self.phase = LoadPhase::Idle;
        }
    }
}
