use crate::state::IntentKind;
use std::sync::Mutex;

/// Counts applied intents by kind.
pub struct InteractionMetrics {
    inner: Mutex<MetricsSnapshot>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub zoom_changes: usize,
    pub pans: usize,
    pub selections: usize,
    pub toggles: usize,
    pub location_updates: usize,
    /// Intents that left the state unchanged.
    pub ignored: usize,
}

impl InteractionMetrics {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_applied(&self, kind: IntentKind) {
        if let Ok(mut metrics) = self.inner.lock() {
            match kind {
                IntentKind::Zoom => metrics.zoom_changes += 1,
                IntentKind::Pan => metrics.pans += 1,
                IntentKind::Selection => metrics.selections += 1,
                IntentKind::Toggle => metrics.toggles += 1,
                IntentKind::Location => metrics.location_updates += 1,
            }
        }
    }

    pub fn record_ignored(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.ignored += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        if let Ok(metrics) = self.inner.lock() {
            *metrics
        } else {
            MetricsSnapshot::default()
        }
    }
}

impl Default for InteractionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
