use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::details::{transform_license_metadata, LicenseMetadataLink, LicensesDetails};
use crate::models::PackageCoordinate;

/// Render license details as a colored terminal report.
pub fn render(
    details: &LicensesDetails,
    pkg: &PackageCoordinate,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    let total = details.licenses.len();

    if quiet {
        println!("{}@{}: {} license file(s)", pkg.path, pkg.version, total);
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "license-viewr".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Package: {}@{}", pkg.path.bold(), pkg.version);
    if pkg.module_path != pkg.path {
        println!(" Module:  {}", pkg.module_path);
    }
    println!();

    if total == 0 {
        println!(
            " {}",
            "No license files recorded for this package version.".yellow()
        );
        return Ok(());
    }

    // Header line: the same (type, anchor) pairs the web page's package
    // header links from
    let links = transform_license_metadata(
        details
            .licenses
            .iter()
            .map(|s| s.license.metadata())
            .collect(),
    );
    println!(" Licenses: {}", format_links(&links));
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("File").add_attribute(Attribute::Bold),
            Cell::new("Types").add_attribute(Attribute::Bold),
            Cell::new("Anchor").add_attribute(Attribute::Bold),
        ]);

    for section in &details.licenses {
        table.add_row(vec![
            Cell::new(&section.license.file_path),
            Cell::new(section.license.types.join(", ")),
            Cell::new(format!("#{}", section.anchor)),
        ]);
    }

    println!("{}", table);

    if verbose {
        for section in &details.licenses {
            println!("\n {} {}", "──".cyan(), section.license.file_path.bold());
            println!("{}", section.license.contents);
        }
    }

    Ok(())
}

/// `MIT (#LICENSE), BSD-3-Clause (#vendor%2FLICENSE)` — one entry per
/// detected (type, file) pair.
fn format_links(links: &[LicenseMetadataLink]) -> String {
    links
        .iter()
        .map(|l| {
            format!(
                "{} ({})",
                l.license_type.green(),
                format!("#{}", l.anchor).dimmed()
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}
