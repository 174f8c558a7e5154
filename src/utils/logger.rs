//! Logger utility for application-wide logging
//!
//! This module provides a custom logger implementation that works alongside
//! the standard log crate, but adds file output capabilities.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Level, Metadata, LevelFilter};

use crate::roi::container::{ExtraTag, TagData};

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
        })
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        if let Some(file) = &mut *self.file.lock().unwrap() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Logs the produced TIFF tag descriptors in a formatted way
    ///
    /// # Arguments
    ///
    /// * `extratags` - The descriptors produced by the container
    pub fn print_tag_descriptors(&self, extratags: &[ExtraTag]) -> io::Result<()> {
        self.log("TIFF extra tags:")?;

        for extratag in extratags {
            let kind = match &extratag.data {
                TagData::Longs(_) => "u32",
                TagData::Bytes(_) => "byte",
            };
            let message = format!(
                "  Tag {}: type {} ({}), count {}",
                extratag.tag, extratag.field_type, kind, extratag.count
            );
            self.log(&message)?;
        }

        Ok(())
    }

    /// Static method to initialize the global logger
    pub fn init_global_logger(log_file: &str) -> io::Result<()> {
        // Create a dedicated logger for the log crate
        let global_logger = Logger::new(log_file)?;

        // Set up the global logger - we'll ignore the SetLoggerError
        // since we only call this once at startup
        if let Err(_) = log::set_boxed_logger(Box::new(global_logger)) {
            // Logger was already set - this should not happen in normal usage
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(LevelFilter::Debug);
        Ok(())
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.log(&message);

            // Also print to console
            println!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}
