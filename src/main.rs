//! # linkpulse CLI
//!
//! Command-line interface for the linkpulse library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use linkpulse::cli::Args;
use linkpulse::config::EngineConfig;
use linkpulse::format::{OutputFormat, write_to_format};
use linkpulse::summary::{ComplianceStatus, compliant_members};
use linkpulse::{ComplianceEngine, LinkpulseError, Roster};

/// Logs go to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), LinkpulseError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    let output_path = adjust_output_extension(&args.output, args.format);
    let config = EngineConfig::new().with_self_support(args.self_support.into());

    println!("🔗 linkpulse v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Chat:     {}", args.input);
    println!("👥 Roster:   {}", args.roster);
    println!("💾 Output:   {}", output_path);
    println!("📄 Format:   {}", args.format);
    println!("🪞 Self-support: {}", config.self_support);
    println!();

    let roster = Roster::load(Path::new(&args.roster))?;
    println!("   Loaded {} roster members", roster.len());

    let chat = read_chat(Path::new(&args.input), args.max_size)?;

    println!("⏳ Parsing chat...");
    let parse_start = Instant::now();
    let result = ComplianceEngine::with_config(config).parse(&chat, &roster)?;
    println!(
        "   Found {} messages ({:.2}s)",
        result.total_messages,
        parse_start.elapsed().as_secs_f64()
    );

    let lib_format: OutputFormat = args.format.into();
    println!("💾 Writing {}...", lib_format);
    write_to_format(&result, &roster, &output_path, lib_format)?;

    println!();
    println!("✅ Done! Report saved to {}", output_path);

    let summary = &result.summary;
    println!();
    println!("📊 Summary:");
    println!("   Messages:   {}", summary.total_messages);
    println!("   Members:    {} active", summary.total_members);
    println!(
        "   Posts:      {} by {} members",
        summary.total_posts, summary.members_posted
    );
    println!("   Support:    {} reactions", summary.total_support);
    let members = result.member_stats(&roster);
    println!(
        "   Compliant:  {}/{}",
        compliant_members(&members),
        roster.len()
    );
    if let Some((start, end)) = summary.period() {
        println!("   Period:     {} to {}", start, end);
    }

    println!();
    println!("👥 Members:");
    for member in &members {
        let icon = match member.status {
            ComplianceStatus::Compliant => "✅",
            ComplianceStatus::Partial => "🟡",
            ComplianceStatus::NonCompliant => "❌",
        };
        println!(
            "   {} {} ({} posts, {} given, {} received)",
            icon, member.name, member.posts_count, member.support_given, member.support_received
        );
    }

    println!();
    println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

/// Reads the export, refusing files over `max_size` bytes before loading them.
///
/// A leading UTF-8 byte-order mark is dropped.
fn read_chat(path: &Path, max_size: usize) -> Result<String, LinkpulseError> {
    let size = std::fs::metadata(path)?.len() as usize;
    if size > max_size {
        return Err(LinkpulseError::input_too_large(max_size, size));
    }
    let chat = std::fs::read_to_string(path)?;
    Ok(match chat.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => chat,
    })
}

/// Adjusts output file extension based on format if using default output.
fn adjust_output_extension(output: &str, format: linkpulse::cli::OutputFormat) -> String {
    if output != "compliance_report.csv" {
        return output.to_string();
    }

    format!("compliance_report.{}", format.extension())
}
