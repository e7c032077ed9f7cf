//! `feo service-tiles-sections`: how service tiles are placed in the
//! Services dropdown.

use feo_template::guidance::SERVICE_TILE_SECTIONS;

use crate::report::ToolReport;

/// Execute the service-tiles-sections subcommand.
pub fn run_sections() -> ToolReport {
    ToolReport::ok(format!(
        "# Service Tiles Sections and Groups\n\n{SERVICE_TILE_SECTIONS}"
    ))
}
