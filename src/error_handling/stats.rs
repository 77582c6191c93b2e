//! Decode statistics tracking.
//!
//! This module provides thread-safe counters for critical failures, soft
//! fallbacks and decoded records across many decode calls.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{CriticalType, DecodeError, InfoType, WarningType};

/// Thread-safe decode statistics tracker.
///
/// Tracks critical failures, soft fallbacks and informational metrics using
/// atomic counters, so a single instance can be shared by concurrent decode
/// calls. All types are initialized to zero on creation.
///
/// # Categories
///
/// - **Critical**: Aborted decode calls, by cause
/// - **Warnings**: Fields that fell back to a default
/// - **Info**: Records produced
pub struct DecodeStats {
    critical: HashMap<CriticalType, AtomicUsize>,
    warnings: HashMap<WarningType, AtomicUsize>,
    info: HashMap<InfoType, AtomicUsize>,
}

impl Default for DecodeStats {
    fn default() -> Self {
        Self::new()
    }
}

impl DecodeStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        DecodeStats {
            critical: CriticalType::iter()
                .map(|t| (t, AtomicUsize::new(0)))
                .collect(),
            warnings: WarningType::iter()
                .map(|t| (t, AtomicUsize::new(0)))
                .collect(),
            info: InfoType::iter().map(|t| (t, AtomicUsize::new(0))).collect(),
        }
    }

    /// Tallies every entry of a decode call's error list.
    pub fn record_errors<'a>(&self, errors: impl IntoIterator<Item = &'a DecodeError>) {
        for error in errors {
            if let Some(critical) = error.critical_type() {
                self.increment_critical(critical);
            } else if let Some(warning) = error.warning_type() {
                self.increment_warning(warning);
            }
        }
    }

    /// Increments a critical counter by one.
    pub fn increment_critical(&self, critical: CriticalType) {
        self.add_critical(critical, 1);
    }

    /// Increments a warning counter by one.
    pub fn increment_warning(&self, warning: WarningType) {
        self.add_warning(warning, 1);
    }

    /// Increments an info counter by one.
    pub fn increment_info(&self, info_type: InfoType) {
        self.add_info(info_type, 1);
    }

    fn add_critical(&self, critical: CriticalType, n: usize) {
        if let Some(counter) = self.critical.get(&critical) {
            counter.fetch_add(n, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment critical counter for {:?} which is not in the map",
                critical
            );
        }
    }

    fn add_warning(&self, warning: WarningType, n: usize) {
        if let Some(counter) = self.warnings.get(&warning) {
            counter.fetch_add(n, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment warning counter for {:?} which is not in the map",
                warning
            );
        }
    }

    /// Adds `n` to an info counter.
    pub fn add_info(&self, info_type: InfoType, n: usize) {
        if let Some(counter) = self.info.get(&info_type) {
            counter.fetch_add(n, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment info counter for {:?} which is not in the map",
                info_type
            );
        }
    }

    /// Current count for a critical type.
    pub fn get_critical_count(&self, critical: CriticalType) -> usize {
        self.critical
            .get(&critical)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Current count for a warning type.
    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        self.warnings
            .get(&warning)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Current count for an info type.
    pub fn get_info_count(&self, info_type: InfoType) -> usize {
        self.info
            .get(&info_type)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Sum of all critical counters.
    pub fn total_critical(&self) -> usize {
        CriticalType::iter().map(|c| self.get_critical_count(c)).sum()
    }

    /// Sum of all warning counters.
    pub fn total_warnings(&self) -> usize {
        WarningType::iter().map(|w| self.get_warning_count(w)).sum()
    }

    /// Sum of all info counters.
    pub fn total_info(&self) -> usize {
        InfoType::iter().map(|i| self.get_info_count(i)).sum()
    }
}
