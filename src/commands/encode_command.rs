//! Metadata encoding command
//!
//! This module implements the command that turns an annotation description
//! file into the two embeddable buffers: the byte-count index and the
//! metadata stream.

use std::fs;
use std::path::Path;

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::roi::description::AnnotationDescription;
use crate::roi::errors::{RoiError, RoiResult};
use crate::utils::logger::Logger;

/// Command for encoding a description into metadata buffers
pub struct EncodeCommand<'a> {
    /// Path to the input description file
    input_file: String,
    /// Prefix of the two output files
    output_prefix: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> EncodeCommand<'a> {
    /// Create a new encode command
    ///
    /// The output prefix defaults to the input path with its extension
    /// removed; the command writes `<prefix>.bytecounts` and
    /// `<prefix>.metadata`.
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new EncodeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> RoiResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| RoiError::GenericError("Missing input file".to_string()))?
            .clone();

        let output_prefix = match args.get_one::<String>("output") {
            Some(prefix) => prefix.clone(),
            None => Path::new(&input_file)
                .with_extension("")
                .to_string_lossy()
                .into_owned(),
        };

        Ok(EncodeCommand {
            input_file,
            output_prefix,
            logger,
        })
    }

    /// Serialize the byte-count index as a big-endian u32 stream
    fn bytecounts_to_bytes(bytecounts: &[u32]) -> Vec<u8> {
        let mut out = Vec::with_capacity(bytecounts.len() * 4);
        for count in bytecounts {
            out.extend_from_slice(&count.to_be_bytes());
        }
        out
    }
}

impl<'a> Command for EncodeCommand<'a> {
    fn execute(&self) -> RoiResult<()> {
        info!("Encoding description: {}", self.input_file);

        let description = AnnotationDescription::load(&self.input_file)?;
        let metadata = description.build_container()?;

        let bytecounts = metadata.bytecounts();
        let stream = metadata.metadata();

        let bytecounts_path = format!("{}.bytecounts", self.output_prefix);
        let stream_path = format!("{}.metadata", self.output_prefix);

        debug!("Writing {} byte counts to {}", bytecounts.len(), bytecounts_path);
        fs::write(&bytecounts_path, Self::bytecounts_to_bytes(&bytecounts))?;

        debug!("Writing {} metadata bytes to {}", stream.len(), stream_path);
        fs::write(&stream_path, &stream)?;

        info!("Encoded {} records into {} and {}",
              metadata.record_count(), bytecounts_path, stream_path);

        self.logger.print_tag_descriptors(&metadata.tiff_extratags())?;
        self.logger.log("Encoding completed successfully")?;

        Ok(())
    }
}
