//! Annotation description analysis command
//!
//! This module implements the command for analyzing a description file and
//! displaying the container structure it would produce, without writing any
//! output buffers.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::roi::container::{BlockKind, MetadataContainer};
use crate::roi::description::AnnotationDescription;
use crate::roi::errors::{RoiError, RoiResult};
use crate::utils::format_utils;
use crate::utils::logger::Logger;
use crate::utils::roi_code_translators::block_tag_to_name;

/// Command for analyzing an annotation description
pub struct AnalyzeCommand<'a> {
    /// Path to the input description file
    input_file: String,
    /// Whether to enable verbose output
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> AnalyzeCommand<'a> {
    /// Create a new analyze command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new AnalyzeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> RoiResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| RoiError::GenericError("Missing input file".to_string()))?
            .clone();

        let verbose = args.get_flag("verbose");

        Ok(AnalyzeCommand {
            input_file,
            verbose,
            logger,
        })
    }

    /// Display what the description file declares
    ///
    /// # Arguments
    /// * `description` - The parsed description
    fn display_description_summary(&self, description: &AnnotationDescription) {
        info!("Annotation Description Analysis:");
        info!("  ROIs: {}", description.rois.len());
        info!("  Overlays: {}", description.overlays.len());
        info!("  Info block: {}", if description.info.is_some() { "yes" } else { "no" });
        info!("  Extra blocks: {}", description.extras.len());

        if self.verbose {
            for entry in description.rois.iter().chain(description.overlays.iter()) {
                debug!("    '{}' with {} points (subpixel: {})",
                       entry.kind.name(), entry.points.len(), entry.subpixel);
            }
        }
    }

    /// Display the queued blocks of the assembled container
    ///
    /// # Arguments
    /// * `metadata` - The populated container
    fn display_block_summary(&self, metadata: &MetadataContainer) {
        info!("\nContainer structure:");
        info!("  Block kinds in header: {}", metadata.kind_count());
        info!("  Records queued: {}", metadata.record_count());

        for kind in [BlockKind::Roi, BlockKind::Overlay, BlockKind::Info] {
            let count = metadata.count_of(kind);
            if count > 0 {
                info!("  {} records ('{}'): {}",
                      block_tag_to_name(&kind.tag()),
                      format_utils::format_tag(&kind.tag()),
                      count);
            }
        }
    }

    /// Display the byte-count index
    ///
    /// # Arguments
    /// * `metadata` - The populated container
    fn display_bytecounts(&self, metadata: &MetadataContainer) {
        let bytecounts = metadata.bytecounts();
        info!("  Byte counts: {:?}", bytecounts);

        let total: u32 = bytecounts.iter().skip(1).sum();
        info!("  Record bytes total: {}", total);
    }

    /// Display the produced tag descriptors and a preview of the stream
    ///
    /// # Arguments
    /// * `metadata` - The populated container
    fn display_extratags(&self, metadata: &MetadataContainer) -> RoiResult<()> {
        let extratags = metadata.tiff_extratags();

        info!("\nTIFF extra tags:");
        for extratag in &extratags {
            info!("  Tag {}: type {}, count {}",
                  extratag.tag, extratag.field_type, extratag.count);
        }

        if self.verbose {
            let stream = metadata.metadata();
            debug!("  Stream preview: {}", format_utils::format_bytes_hex(&stream, 32));
        }

        self.logger.print_tag_descriptors(&extratags)?;
        Ok(())
    }
}

impl<'a> Command for AnalyzeCommand<'a> {
    fn execute(&self) -> RoiResult<()> {
        info!("Analyzing description: {}", self.input_file);

        if self.verbose {
            debug!("Verbose mode enabled");
        }

        let description = AnnotationDescription::load(&self.input_file)?;
        let metadata = description.build_container()?;

        self.display_description_summary(&description);
        self.display_block_summary(&metadata);
        self.display_bytecounts(&metadata);
        self.display_extratags(&metadata)?;

        debug!("Analysis completed successfully");
        self.logger.log("Analysis completed successfully")?;

        Ok(())
    }
}
