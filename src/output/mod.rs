use std::io::{self, Write};

use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

/// Writes command results to stdout, as plain lines or pretty JSON.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn emit<T: Serialize>(&self, text_line: &str, json_value: &T) -> AppResult<()> {
        self.emit_lines(&[text_line], json_value)
    }

    pub fn emit_lines<L, T>(&self, text_lines: &[L], json_value: &T) -> AppResult<()>
    where
        L: AsRef<str>,
        T: Serialize,
    {
        let mut stdout = io::stdout().lock();
        match self.mode {
            OutputMode::Text => {
                for line in text_lines {
                    writeln!(stdout, "{}", line.as_ref())?;
                }
            }
            OutputMode::Json => {
                let payload = serde_json::to_string_pretty(json_value)?;
                writeln!(stdout, "{payload}")?;
            }
        }
        Ok(())
    }
}
