//! Configuration presets module
//!
//! This module provides pre-defined clock configurations for common deployments.

use crate::config::define_clock_config;

define_clock_config! {
    /// Nodes on one network segment, NTP-disciplined
    ///
    /// Rejects remote timestamps more than 250ms ahead of the local wall clock.
    name: LanConfig,
    max_forward_drift_millis: 250,
}

define_clock_config! {
    /// Geographically spread nodes with looser clock discipline
    ///
    /// Rejects remote timestamps more than 5s ahead of the local wall clock.
    name: WanConfig,
    max_forward_drift_millis: 5_000,
}

define_clock_config! {
    /// Tightly synchronized hosts (PTP or a shared time source)
    ///
    /// Rejects remote timestamps more than 50ms ahead of the local wall clock.
    name: StrictConfig,
    max_forward_drift_millis: 50,
}
