use std::fs;
use std::path::Path;

use log::info;

use crate::roi::container::BlockKind;
use crate::roi::description::AnnotationDescription;
use crate::roi::errors::RoiResult;
use crate::utils::logger::Logger;
use crate::utils::roi_code_translators::block_tag_to_name;

/// Main interface to the RoiKit library
pub struct RoiKit {
    logger: Logger,
}

impl RoiKit {
    /// Create a new RoiKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "roikit.log"
    ///
    /// # Returns
    /// A RoiKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> RoiResult<Self> {
        let log_path = log_file.unwrap_or("roikit.log");
        let logger = Logger::new(log_path)?;
        Ok(RoiKit { logger })
    }

    /// Analyze an annotation description and return information about the
    /// container it would produce
    ///
    /// # Arguments
    /// * `input_path` - Path to the description file to analyze
    ///
    /// # Returns
    /// String containing analysis information or an error
    pub fn analyze(&self, input_path: &str) -> RoiResult<String> {
        // Parse the description and assemble the container directly
        let description = AnnotationDescription::load(input_path)?;
        let metadata = description.build_container()?;

        // Format a summary of the container
        let mut result = "Annotation Analysis Results:\n".to_string();
        result.push_str(&format!("  ROIs: {}\n", description.rois.len()));
        result.push_str(&format!("  Overlays: {}\n", description.overlays.len()));
        result.push_str(&format!("  Extra blocks: {}\n", description.extras.len()));
        result.push_str(&format!("  Block kinds in header: {}\n", metadata.kind_count()));

        for kind in [BlockKind::Roi, BlockKind::Overlay, BlockKind::Info] {
            let count = metadata.count_of(kind);
            if count > 0 {
                result.push_str(&format!("  {} records: {}\n",
                                         block_tag_to_name(&kind.tag()), count));
            }
        }

        result.push_str(&format!("  Byte counts: {:?}\n", metadata.bytecounts()));

        for extratag in metadata.tiff_extratags() {
            result.push_str(&format!("  Tag {}: type {}, count {}\n",
                                     extratag.tag, extratag.field_type, extratag.count));
        }

        Ok(result)
    }

    /// Encode an annotation description into the two embeddable buffers
    ///
    /// Writes `<prefix>.bytecounts` (big-endian u32 stream) and
    /// `<prefix>.metadata` (the container byte stream).
    ///
    /// # Arguments
    /// * `input_path` - Path to the description file to encode
    /// * `output_prefix` - Optional output prefix, defaults to the input
    ///   path with its extension removed
    ///
    /// # Returns
    /// Result indicating success or an error
    pub fn encode(&self, input_path: &str, output_prefix: Option<&str>) -> RoiResult<()> {
        let prefix = match output_prefix {
            Some(prefix) => prefix.to_string(),
            None => Path::new(input_path)
                .with_extension("")
                .to_string_lossy()
                .into_owned(),
        };

        let description = AnnotationDescription::load(input_path)?;
        let metadata = description.build_container()?;

        let mut bytecount_bytes = Vec::new();
        for count in metadata.bytecounts() {
            bytecount_bytes.extend_from_slice(&count.to_be_bytes());
        }

        fs::write(format!("{}.bytecounts", prefix), bytecount_bytes)?;
        fs::write(format!("{}.metadata", prefix), metadata.metadata())?;

        info!("Encoded {} records with prefix {}", metadata.record_count(), prefix);
        self.logger.log(&format!("Encoded {} with prefix {}", input_path, prefix))?;

        Ok(())
    }
}
