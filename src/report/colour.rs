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

use std::fmt::Display;

pub const RESET: &'static str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    Yellow,
    Green,
    Red
}

impl Colour {
    pub fn ansi_code(&self) -> &'static str {
        match self {
            Colour::Yellow => "\x1b[93m",
            Colour::Green => "\x1b[92m",
            Colour::Red => "\x1b[91m"
        }
    }
}

/// Applies terminal colours to text when enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool
}

impl Palette {
    pub fn new(enabled: bool) -> Palette {
        Palette { enabled }
    }

    pub fn plain() -> Palette {
        Palette { enabled: false }
    }

    pub fn paint(&self, colour: Colour, text: impl Display) -> String {
        match self.enabled {
            true => format!("{}{}{}", colour.ansi_code(), text, RESET),
            false => text.to_string()
        }
    }

    pub fn label(&self, text: impl Display) -> String {
        self.paint(Colour::Green, text)
    }

    pub fn value(&self, text: impl Display) -> String {
        self.paint(Colour::Yellow, text)
    }

    pub fn issue(&self, text: impl Display) -> String {
        self.paint(Colour::Red, text)
    }
}

#[cfg(test)]
mod tests {
    use crate::report::colour::{Colour, Palette, RESET};

    #[test]
    fn plain_palette_leaves_text_alone() {
        let palette = Palette::plain();
        assert_eq!(palette.value("6"), "6");
        assert_eq!(palette.issue(2.5), "2.5");
    }

    #[test]
    fn coloured_spans_are_reset() {
        let palette = Palette::new(true);
        let painted = palette.paint(Colour::Red, "MISSING");
        assert!(painted.starts_with(Colour::Red.ansi_code()));
        assert!(painted.ends_with(RESET));
        assert!(painted.contains("MISSING"));
    }
}
