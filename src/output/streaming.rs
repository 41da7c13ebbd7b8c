//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes each tree line as
//! soon as `TreeWalker` reaches it.

use std::ffi::OsStr;
use std::io::{self, Write};
use termcolor::{BufferedStandardStream, Color, ColorChoice, ColorSpec, WriteColor};

use crate::tree::{Entry, TreeOutput, WalkStats};

use super::config::OutputConfig;
use super::utils::{connector, needs_quotes, write_prefix};

/// Streaming output formatter. Implements `TreeOutput` for use with
/// `TreeWalker`.
pub struct StreamingFormatter<W: WriteColor> {
    config: OutputConfig,
    out: W,
}

impl StreamingFormatter<BufferedStandardStream> {
    /// Formatter writing to a buffered stdout, flushed at `finish`.
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let out = BufferedStandardStream::stdout(choice);
        Self::new(config, out)
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_dir_name(&mut self, name: &[u8]) -> io::Result<()> {
        if self.config.use_color {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            self.out.write_all(name)?;
            self.out.reset()?;
        } else {
            self.out.write_all(name)?;
        }
        Ok(())
    }
}

impl<W: WriteColor> TreeOutput for StreamingFormatter<W> {
    fn output_root(&mut self, name: &OsStr) -> io::Result<()> {
        self.write_dir_name(name.as_encoded_bytes())?;
        writeln!(self.out)
    }

    fn output_entry(&mut self, entry: &Entry, branches: &[bool], is_last: bool) -> io::Result<()> {
        write_prefix(&mut self.out, branches)?;
        self.out.write_all(connector(is_last).as_bytes())?;

        let name = entry.name_bytes();
        let quoted = needs_quotes(name);
        if quoted {
            self.out.write_all(b"'")?;
        }

        if entry.is_dir() {
            self.write_dir_name(name)?;
            self.out.write_all(b"/")?;
        } else {
            self.out.write_all(name)?;
        }

        if quoted {
            self.out.write_all(b"'")?;
        }
        writeln!(self.out)
    }

    fn finish(&mut self, stats: &WalkStats) -> io::Result<()> {
        if self.config.summary {
            writeln!(self.out)?;
            writeln!(
                self.out,
                "{} directories, {} files",
                stats.directories, stats.files
            )?;
        }
        self.out.flush()
    }
}
