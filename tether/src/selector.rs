/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of drone-calc.
 *
 * drone-calc is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * drone-calc is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with drone-calc. If not, see <https://www.gnu.org/licenses/>.
 */

use crate::catalog::{GaugeCatalog, GaugeEntry};
use crate::conductor::voltage_drop;

/// An upper bound on the voltage lost along the tether
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoltageLimit {
    /// Current (A) the drop is evaluated at
    pub current: f64,
    /// Length (m) of the tether
    pub distance: f64,
    pub max_voltage_drop: f64
}

impl VoltageLimit {
    pub fn new(current: f64, distance: f64, max_voltage_drop: f64) -> VoltageLimit {
        VoltageLimit { current, distance, max_voltage_drop }
    }

    pub fn voltage_drop_for(&self, entry: &GaugeEntry) -> f64 {
        voltage_drop(self.current, self.distance, entry.thickness())
    }

    pub fn permits(&self, entry: &GaugeEntry) -> bool {
        self.voltage_drop_for(entry) <= self.max_voltage_drop
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionRequest {
    /// Average (not instantaneous) current the conductor must carry
    required_current: f64,
    voltage_limit: Option<VoltageLimit>
}

impl SelectionRequest {
    pub fn new(required_current: f64) -> SelectionRequest {
        SelectionRequest { required_current, voltage_limit: None }
    }

    pub fn with_voltage_limit(mut self, limit: VoltageLimit) -> SelectionRequest {
        self.voltage_limit = Some(limit);
        self
    }

    pub fn required_current(&self) -> f64 {
        self.required_current
    }

    pub fn voltage_limit(&self) -> Option<&VoltageLimit> {
        self.voltage_limit.as_ref()
    }

    /// Whether `entry` satisfies every constraint of this request
    pub fn accepts(&self, entry: &GaugeEntry) -> bool {
        if !entry.can_carry(self.required_current) {
            return false;
        }
        match &self.voltage_limit {
            None => true,
            Some(limit) => limit.permits(entry)
        }
    }

    /// Pick the thinnest gauge in `catalog` that satisfies this request.
    ///
    /// Each entry is checked against every constraint before thicknesses are compared.
    /// When several acceptable gauges share the minimal thickness the one appearing
    /// first in the catalog wins. `None` means no gauge is suitable.
    pub fn select<'a>(&self, catalog: &'a GaugeCatalog) -> Option<&'a GaugeEntry> {
        catalog.iter()
            .filter(|entry| self.accepts(entry))
            .min_by(|a, b| a.thickness().total_cmp(&b.thickness()))
    }
}

pub fn select_min_gauge(catalog: &GaugeCatalog, required_current: f64) -> Option<&GaugeEntry> {
    SelectionRequest::new(required_current).select(catalog)
}

pub fn select_min_gauge_with_voltage_limit(catalog: &GaugeCatalog,
                                           required_current: f64,
                                           current: f64,
                                           distance: f64,
                                           max_voltage_drop: f64) -> Option<&GaugeEntry> {
    SelectionRequest::new(required_current)
        .with_voltage_limit(VoltageLimit::new(current, distance, max_voltage_drop))
        .select(catalog)
}
