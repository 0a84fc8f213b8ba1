//! Report formatting and printing utilities.
//!
//! Every command returns a plain report; this module turns it into console
//! text. Separate from the checks so assetctl can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, IconsSummary, InitSummary};
use crate::{
    config::CONFIG_FILE_NAME,
    icons::TargetOutcome,
    paths::ProjectRoot,
    rules::{key_parity::AuditReport, spot_check::SpotCheckReport},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

const AUDIT_RULE_WIDTH: usize = 50;
const SPOT_CHECK_RULE_WIDTH: usize = 60;

/// Print a command's report to stdout (and load errors to stderr).
pub fn print(result: &CommandResult, verbose: bool) {
    let stdout = &mut io::stdout().lock();
    let stderr = &mut io::stderr().lock();
    match &result.summary {
        CommandSummary::Audit(report) => {
            print_audit_errors_to(report, stderr);
            print_audit_to(report, stdout);
        }
        CommandSummary::Icons(summary) => print_icons_to(summary, verbose, stdout, stderr),
        CommandSummary::SpotCheck(report) => print_spot_check_to(report, stdout),
        CommandSummary::Init(summary) => print_init_to(summary, stdout),
    }
}

fn rule(width: usize) -> String {
    "=".repeat(width)
}

fn mark(ok: bool) -> colored::ColoredString {
    if ok {
        SUCCESS_MARK.green()
    } else {
        FAILURE_MARK.red()
    }
}

pub fn print_audit_errors_to<W: Write>(report: &AuditReport, writer: &mut W) {
    for language in report.load_failures() {
        if let Some(err) = &language.load_error {
            let _ = writeln!(
                writer,
                "{} could not load {}: {}",
                "error:".bold().red(),
                language.locale.to_uppercase(),
                err
            );
        }
    }
}

pub fn print_audit_to<W: Write>(report: &AuditReport, writer: &mut W) {
    let _ = writeln!(writer, "Total unique keys found: {}", report.total_keys);
    let _ = writeln!(writer, "{}", rule(AUDIT_RULE_WIDTH));

    let gaps: Vec<_> = report.languages_with_missing().collect();
    let failed = report.load_failures().count();
    if report.is_consistent() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "All languages have consistent keys!".green()
        );
    } else if failed > 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} language file(s) failed to load", failed).red()
        );
    }
    if !gaps.is_empty() {
        let _ = writeln!(writer, "{}", "MISSING KEYS FOUND:".bold().red());
        let _ = writeln!(writer, "{}", rule(AUDIT_RULE_WIDTH));
        for language in gaps {
            let _ = writeln!(
                writer,
                "\n{} missing {} {}:",
                language.locale.to_uppercase().bold(),
                language.missing.len(),
                if language.missing.len() == 1 { "key" } else { "keys" }
            );
            for key in &language.missing {
                let _ = writeln!(writer, "  - {}", key);
            }
        }
    }

    let _ = writeln!(writer, "\n{}", rule(AUDIT_RULE_WIDTH));
    let _ = writeln!(writer, "KEY COUNTS BY LANGUAGE:");
    for language in &report.languages {
        let _ = writeln!(
            writer,
            "{}: {} keys",
            language.locale.to_uppercase(),
            language.key_count
        );
    }
}

pub fn print_icons_to<W: Write, E: Write>(
    summary: &IconsSummary,
    verbose: bool,
    writer: &mut W,
    errors: &mut E,
) {
    let run = match &summary.outcome {
        Ok(run) => run,
        Err(err) => {
            let _ = writeln!(errors, "{} {}", "error:".bold().red(), err);
            let _ = writeln!(
                writer,
                "{} {}",
                FAILURE_MARK.red(),
                "Failed to load base image. Aborting; no icons were written.".red()
            );
            return;
        }
    };

    let (width, height) = run.source_dimensions;
    let _ = writeln!(writer, "Base image: {}x{}", width, height);

    print_target_to(&run.standard, &summary.root, verbose, writer);
    for platform in &run.platforms {
        print_target_to(platform, &summary.root, verbose, writer);
    }
    if run.standard.written.is_empty() {
        let _ = writeln!(
            writer,
            "  {} platform icons skipped: no standard icon was generated",
            FAILURE_MARK.red()
        );
    }

    if run.is_success() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("All icons generated successfully! ({} files)", run.written_count()).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} ({} written, {} failed)",
            FAILURE_MARK.red(),
            "Some icons failed to generate. Check logs for details.".red(),
            run.written_count(),
            run.failure_count()
        );
    }
}

fn print_target_to<W: Write>(
    outcome: &TargetOutcome,
    root: &ProjectRoot,
    verbose: bool,
    writer: &mut W,
) {
    if outcome.failures.is_empty() {
        let _ = writeln!(
            writer,
            "  {} {}: {} icon(s) written",
            SUCCESS_MARK.green(),
            outcome.name,
            outcome.written.len()
        );
    } else {
        let _ = writeln!(
            writer,
            "  {} {}: {} icon(s) written, {} failed",
            FAILURE_MARK.red(),
            outcome.name,
            outcome.written.len(),
            outcome.failures.len()
        );
        for failure in &outcome.failures {
            let _ = writeln!(
                writer,
                "      - {} ({}px): {}",
                root.relative(&failure.path).display(),
                failure.size,
                failure.error
            );
        }
    }

    if verbose {
        for icon in &outcome.written {
            let _ = writeln!(
                writer,
                "      {} {}",
                "+".dimmed(),
                root.relative(&icon.path).display()
            );
        }
    }
}

pub fn print_spot_check_to<W: Write>(report: &SpotCheckReport, writer: &mut W) {
    let file_name = std::path::Path::new(&report.file_path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| report.file_path.clone());

    let _ = writeln!(writer, "{}", rule(SPOT_CHECK_RULE_WIDTH));
    let _ = writeln!(
        writer,
        "{} TRANSLATION VERIFICATION",
        report.locale.to_uppercase()
    );
    let _ = writeln!(writer, "{}", rule(SPOT_CHECK_RULE_WIDTH));

    let _ = writeln!(
        writer,
        "\n{} JSON is valid and properly formatted",
        SUCCESS_MARK.green()
    );
    let _ = writeln!(
        writer,
        "{} Total keys in {}: {}",
        SUCCESS_MARK.green(),
        file_name,
        report.total_keys
    );
    let duplicates = if report.duplicates.is_empty() {
        "None".to_string()
    } else {
        report.duplicates.join(", ")
    };
    let _ = writeln!(
        writer,
        "{} Duplicate keys: {} ({})",
        mark(report.duplicates.is_empty()),
        report.duplicates.len(),
        duplicates
    );
    let _ = writeln!(
        writer,
        "\n{} Expected keys: {}/{}",
        mark(report.missing.is_empty()),
        report.found.len(),
        report.expected_count()
    );

    if !report.found.is_empty() {
        let _ = writeln!(writer, "\nKeys found:");
        for found in &report.found {
            let _ = writeln!(writer, "  - {}: {}", found.key, found.value);
        }
    }
    if !report.missing.is_empty() {
        let _ = writeln!(writer, "\nKeys missing:");
        for key in &report.missing {
            let _ = writeln!(writer, "  - {}", key.red());
        }
    }

    let verdict = if report.is_ready() {
        format!("{} is production-ready!", file_name).green()
    } else {
        format!("{} is not production-ready", file_name).red()
    };
    let _ = writeln!(writer, "\n{} {}", mark(report.is_ready()), verdict);
    let _ = writeln!(writer, "{}", rule(SPOT_CHECK_RULE_WIDTH));
}

pub fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
