use std::collections::HashMap;

use crate::domain::asset::{HistorySeries, TimeWindow};

/// Monotonic ticket attached to every issued query.
pub type RequestId = u64;

/// Result slot of a keyed-by-asset query (primary or reference detail).
///
/// A result is accepted only when it carries the ticket of the most recent
/// request; anything older is dropped.
#[derive(Debug, Clone)]
pub struct QuerySlot<T> {
    data: Option<T>,
    pending: Option<RequestId>,
    resolved_once: bool,
}

impl<T> Default for QuerySlot<T> {
    fn default() -> Self {
        Self {
            data: None,
            pending: None,
            resolved_once: false,
        }
    }
}

impl<T> QuerySlot<T> {
    pub fn issue(&mut self, request: RequestId) {
        self.pending = Some(request);
    }

    /// Returns `false` when the result belongs to a superseded request.
    ///
    /// An absent result after an earlier success keeps the earlier data.
    pub fn resolve(&mut self, request: RequestId, data: Option<T>) -> bool {
        if self.pending != Some(request) {
            return false;
        }
        self.pending = None;
        self.resolved_once = true;
        if data.is_some() {
            self.data = data;
        }
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// True until the first result (success or failure) has arrived.
    pub fn awaiting_first_result(&self) -> bool {
        !self.resolved_once
    }
}

/// History results for one asset, cached per window.
///
/// Only the latest request may write: a late answer for a window the user has
/// already left is discarded, so it can never surface on screen.
#[derive(Debug, Clone, Default)]
pub struct HistoryQuery {
    cache: HashMap<TimeWindow, HistorySeries>,
    pending: Option<(RequestId, TimeWindow)>,
}

impl HistoryQuery {
    pub fn issue(&mut self, request: RequestId, window: TimeWindow) {
        self.pending = Some((request, window));
    }

    pub fn resolve(
        &mut self,
        request: RequestId,
        window: TimeWindow,
        series: Option<HistorySeries>,
    ) -> bool {
        if self.pending != Some((request, window)) {
            return false;
        }
        self.pending = None;
        if let Some(series) = series {
            self.cache.insert(window, series);
        }
        true
    }

    pub fn series_for(&self, window: TimeWindow) -> Option<&HistorySeries> {
        self.cache.get(&window)
    }

    pub fn in_flight(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_window(&self) -> Option<TimeWindow> {
        self.pending.map(|(_, window)| window)
    }

    pub fn cached_windows(&self) -> usize {
        self.cache.len()
    }

    pub fn reset(&mut self) {
        self.cache.clear();
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_drops_superseded_result() {
        let mut slot: QuerySlot<u32> = QuerySlot::default();
        slot.issue(1);
        slot.issue(2);
        assert!(!slot.resolve(1, Some(10)));
        assert!(slot.data().is_none());
        assert!(slot.resolve(2, Some(20)));
        assert_eq!(slot.data(), Some(&20));
        assert!(!slot.in_flight());
    }

    #[test]
    fn failed_refresh_keeps_previous_data() {
        let mut slot: QuerySlot<u32> = QuerySlot::default();
        slot.issue(1);
        slot.resolve(1, Some(5));
        slot.issue(2);
        assert!(slot.resolve(2, None));
        assert_eq!(slot.data(), Some(&5));
    }

    #[test]
    fn history_ignores_other_window() {
        let mut history = HistoryQuery::default();
        history.issue(3, TimeWindow::ThirtyDays);
        let stale = HistorySeries::new(Vec::new(), Some(1.0));
        assert!(!history.resolve(3, TimeWindow::SevenDays, Some(stale)));
        assert_eq!(history.cached_windows(), 0);
        assert_eq!(history.pending_window(), Some(TimeWindow::ThirtyDays));
    }
}
