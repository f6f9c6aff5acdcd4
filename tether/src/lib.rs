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

pub mod catalog;
pub mod conductor;
pub mod error;
pub mod plan;
pub mod selector;

pub use catalog::{GaugeCatalog, GaugeEntry};
pub use conductor::{voltage_drop, wire_weight, CU_DENSITY, CU_RESISTIVITY};
pub use error::{CatalogError, PlanError};
pub use plan::{assess_candidates, plan_tether, plan_with_gauge, CandidateAssessment, OpMode, TetherPlan, TetherRequirements};
pub use selector::{select_min_gauge, select_min_gauge_with_voltage_limit, SelectionRequest, VoltageLimit};
