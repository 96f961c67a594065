use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::license::compat::{classify_dependency, Classification};
use crate::license::registry::Registry;
use crate::models::{
    CompatibilityResult, LicenseCategory, LicenseDefinition, LicenseInfo, LicenseStats,
    LicenseSummary, ProjectScan,
};

const BAR_WIDTH: f64 = 30.0;

/// Render the license catalog.
pub fn render_list(licenses: &[LicenseSummary]) {
    println!("\n {}\n", "Available Licenses:".bold());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Key").add_attribute(Attribute::Bold),
            Cell::new("Type").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
        ]);

    for license in licenses {
        table.add_row(vec![
            Cell::new(&license.key).add_attribute(Attribute::Bold),
            Cell::new(format!("[{}]", license.category)).fg(category_color(license.category)),
            Cell::new(&license.name),
        ]);
    }

    println!("{}\n", table);
}

/// Render a single license's details.
pub fn render_info(info: &LicenseInfo) {
    println!("\n {}\n", info.name.bold());

    let kind = if info.permissive {
        "Permissive".green()
    } else if info.copyleft {
        "Copyleft".yellow()
    } else {
        "Other".blue()
    };
    println!(" Type: {}", kind);
    if info.public_domain {
        println!(" {}", "Public domain dedication".blue());
    }

    println!("\n Compatible with:");
    for key in &info.compatible {
        println!("   {} {}", "•".cyan(), key);
    }
    println!();
}

/// Render the partitioned compatibility result of a scanned project.
pub fn render_check(
    registry: &Registry,
    project: &LicenseDefinition,
    scan: &ProjectScan,
    result: &CompatibilityResult,
    verbose: bool,
    quiet: bool,
) {
    if quiet {
        println!(
            "Total: {}  Compatible: {}  Warnings: {}  Unknown: {}  Incompatible: {}",
            scan.dependencies.len(),
            result.compatible.len().to_string().green(),
            result.warnings.len().to_string().yellow(),
            result.unknown.len().to_string().dimmed(),
            result.incompatible.len().to_string().red(),
        );
        return;
    }

    println!(
        "\n {} {}",
        "Project License:".bold(),
        scan.project_license.cyan()
    );
    println!(" {} {}\n", "Total Dependencies:".bold(), scan.dependencies.len());

    if !result.incompatible.is_empty() {
        println!(
            " {} Incompatible Licenses Found ({}):\n",
            "[ERROR]".red().bold(),
            result.incompatible.len()
        );
        for finding in &result.incompatible {
            println!("   {} {} - {}", "•".red(), finding.license.red(), finding.reason);
        }
        println!();
    }

    if !result.warnings.is_empty() {
        println!(
            " {} Warnings ({}):\n",
            "[WARN]".yellow().bold(),
            result.warnings.len()
        );
        for finding in &result.warnings {
            println!("   {} {} - {}", "•".yellow(), finding.license.yellow(), finding.reason);
        }
        println!();
    }

    if !result.unknown.is_empty() {
        println!(
            " {} Unknown Licenses ({}):\n",
            "[UNKNOWN]".dimmed().bold(),
            result.unknown.len()
        );
        for license in &result.unknown {
            let shown = if license.is_empty() { "(empty)" } else { license.as_str() };
            println!("   {} {}", "•".dimmed(), shown.dimmed());
        }
        println!();
    }

    if verbose && !scan.dependencies.is_empty() {
        println!(" {} All dependencies:\n", "[DEPS]".cyan().bold());
        render_dependency_table(registry, project, scan);
        println!();
    }

    if result.is_clean() {
        println!(" {}\n", "All dependencies are compatible!".green().bold());
    } else if result.valid {
        println!(
            " {}\n",
            "No incompatible licenses found, but review warnings.".green().bold()
        );
    } else {
        println!(" {}\n", "Incompatible licenses detected!".red().bold());
    }
}

fn render_dependency_table(registry: &Registry, project: &LicenseDefinition, scan: &ProjectScan) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Version").add_attribute(Attribute::Bold),
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

    for dep in &scan.dependencies {
        let (status, color) = match classify_dependency(registry, project, &dep.license) {
            Classification::Compatible => ("✓ compatible", Color::Green),
            Classification::Warning(_) => ("⚠ warning", Color::Yellow),
            Classification::Incompatible(_) => ("✗ incompatible", Color::Red),
            Classification::Unknown => ("? unknown", Color::DarkGrey),
        };

        table.add_row(vec![
            Cell::new(&dep.name),
            Cell::new(dep.version.as_deref().unwrap_or("-")),
            Cell::new(&dep.license),
            Cell::new(status).fg(color).set_alignment(CellAlignment::Center),
        ]);
    }

    println!("{}", table);
}

/// Render the license frequency distribution.
pub fn render_stats(project_license: &str, stats: &LicenseStats, quiet: bool) {
    if quiet {
        println!("Total: {}  Unique: {}", stats.total, stats.unique);
        return;
    }

    println!("\n {} {}", "Project License:".bold(), project_license.cyan());
    println!(" {} {}", "Total Dependencies:".bold(), stats.total);
    println!(" {} {}\n", "Unique Licenses:".bold(), stats.unique);
    println!(" {}\n", "License Distribution:".bold());

    for (license, count) in stats.sorted() {
        let share = count as f64 / stats.total as f64;
        let bar = "█".repeat((share * BAR_WIDTH).ceil() as usize);
        println!(
            " {:<20} {} {} ({:.1}%)",
            license,
            bar.cyan(),
            count,
            share * 100.0
        );
    }
    println!();
}

fn category_color(category: LicenseCategory) -> Color {
    match category {
        LicenseCategory::PublicDomain => Color::Blue,
        LicenseCategory::Permissive => Color::Green,
        LicenseCategory::Copyleft => Color::Yellow,
        LicenseCategory::Other => Color::DarkGrey,
    }
}
