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

use std::path::PathBuf;
use directories::BaseDirs;

const LOCAL_DATA_DIRNAME: &'static str = "DroneCalc";
pub const LOG_FILENAME: &'static str = "drone_calc.log";

#[cfg(target_os = "windows")]
fn backup_data_dir() -> PathBuf {
    let username = whoami::username();
    PathBuf::from_iter(["C:", "Users", &username, "AppData", "Local"])
}

#[cfg(target_os = "linux")]
fn backup_data_dir() -> PathBuf {
    let username = whoami::username();
    PathBuf::from_iter(["/home", &username, ".local", "share"])
}

#[cfg(not(any(target_os = "windows", target_os = "linux")))]
fn backup_data_dir() -> PathBuf {
    let username = whoami::username();
    PathBuf::from_iter(["/Users", &username, "Library", "Application Support"])
}

/// Directory holding the settings file and logs
pub fn get_local_app_data_path() -> PathBuf {
    let mut local_data_root : PathBuf = match BaseDirs::new() {
        None => backup_data_dir(),
        Some(basedirs) => { basedirs.data_local_dir().to_path_buf() }
    };
    local_data_root.push(LOCAL_DATA_DIRNAME);
    local_data_root
}

#[cfg(test)]
mod tests {
    use crate::data::get_local_app_data_path;

    #[test]
    fn app_data_dir_is_namespaced() {
        let path = get_local_app_data_path();
        assert_eq!(path.file_name().unwrap(), "DroneCalc");
    }
}
