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
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

use crate::report::Palette;

/// Asks questions on an output stream and reads the answers from an input stream
pub struct Prompter<'a> {
    input: Box<dyn BufRead + 'a>,
    output: Box<dyn Write + 'a>,
    palette: Palette
}

impl<'a> Prompter<'a> {
    pub fn new(input: impl BufRead + 'a, output: impl Write + 'a, palette: Palette) -> Prompter<'a> {
        Prompter { input: Box::new(input), output: Box::new(output), palette }
    }

    pub fn section(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.output, "{}", self.palette.value(format!("*** {} ***", title)))
    }

    fn read_answer(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{}", self.palette.value(question))?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, format!("no answer to '{}'", question.trim())));
        }
        Ok(line.trim().to_string())
    }

    /// Keep asking `question` until the answer parses as a `T`
    pub fn ask<T: FromStr>(&mut self, question: &str) -> io::Result<T> {
        loop {
            let answer = self.read_answer(question)?;
            match answer.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    debug!("Rejected answer '{}' to '{}'", answer, question);
                    writeln!(self.output, "{}", self.palette.issue(format!("'{}' is not a valid value.", answer)))?;
                }
            }
        }
    }

    /// Like [Prompter::ask] but a blank answer yields `None`
    pub fn ask_optional<T: FromStr>(&mut self, question: &str) -> io::Result<Option<T>> {
        loop {
            let answer = self.read_answer(question)?;
            if answer.is_empty() {
                return Ok(None);
            }
            match answer.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    writeln!(self.output, "{}", self.palette.issue(format!("'{}' is not a valid value.", answer)))?;
                }
            }
        }
    }
}
