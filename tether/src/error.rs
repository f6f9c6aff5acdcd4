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

use std::io;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog `{path}`. {source}")]
    FailedToLoad {
        path: String,
        source: io::Error
    },
    #[error("catalog decode error. {0}")]
    DecodeError(#[from] toml::de::Error),
    #[error("catalog encode error. {0}")]
    EncodeError(#[from] toml::ser::Error),
    #[error("catalog contains no gauges")]
    Empty,
    #[error("duplicate gauge `{0}` in catalog")]
    DuplicateGauge(String),
    #[error("invalid gauge `{0}`. {1}")]
    InvalidGauge(String, String),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PlanError {
    #[error("no gauge in the catalog can carry {required_current:.2}A")]
    NoSuitableGauge { required_current: f64 },
    #[error("no gauge in the catalog can carry {required_current:.2}A within a {max_voltage_drop:.2}V drop")]
    NoGaugeWithinDrop { required_current: f64, max_voltage_drop: f64 },
    #[error("gauge `{0}` is not in the catalog")]
    UnknownGauge(String),
    #[error("invalid requirement `{0}`. {1}")]
    InvalidRequirement(String, String),
}
