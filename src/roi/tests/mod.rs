//! Tests for the ROI encoding modules

#[cfg(test)]
mod fields_tests;
#[cfg(test)]
mod container_tests;
