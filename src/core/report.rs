//! Plain-text rendering of the three catalog reports.

use std::io::{self, Write};

use crate::core::models::{GENERATE_CONTENT, ModelDescriptor, generation_capable, multimodal};

/// Width of banner and separator rules.
pub const RULE_WIDTH: usize = 60;

pub const CATALOG_TITLE: &str = "📋 Available Gemini Models";
pub const MULTIMODAL_TITLE: &str = "Models that support vision/multimodal:";

pub fn generation_title() -> String {
    format!("Models that support '{}':", GENERATE_CONTENT)
}

/// Section banner: blank line, rule, title, rule, blank line.
pub fn write_banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", rule)?;
    writeln!(out)
}

fn format_limit(limit: Option<u64>) -> String {
    limit
        .map(|n| n.to_string())
        .unwrap_or_else(|| "—".to_string())
}

fn format_methods(methods: &[String]) -> String {
    format!("[{}]", methods.join(", "))
}

/// Every model with its full metadata, separated by rule lines.
pub fn write_catalog<W: Write>(out: &mut W, models: &[ModelDescriptor]) -> io::Result<()> {
    write_banner(out, CATALOG_TITLE)?;
    for m in models {
        writeln!(out, "Model: {}", m.name)?;
        writeln!(out, "  Display Name: {}", m.display_name)?;
        writeln!(out, "  Description: {}", m.description)?;
        writeln!(
            out,
            "  Supported Generation Methods: {}",
            format_methods(&m.supported_generation_methods)
        )?;
        writeln!(out, "  Input Token Limit: {}", format_limit(m.input_token_limit))?;
        writeln!(out, "  Output Token Limit: {}", format_limit(m.output_token_limit))?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    }
    Ok(())
}

/// Models supporting `generateContent`; the input limit is printed only when known.
pub fn write_generation_capable<W: Write>(
    out: &mut W,
    models: &[ModelDescriptor],
) -> io::Result<()> {
    write_banner(out, &generation_title())?;
    for m in generation_capable(models) {
        writeln!(out, "✅ {}", m.name)?;
        if let Some(limit) = m.input_token_limit {
            writeln!(out, "   Max tokens: {}", limit)?;
        }
    }
    Ok(())
}

/// Generation-capable models whose name suggests vision support.
pub fn write_multimodal<W: Write>(out: &mut W, models: &[ModelDescriptor]) -> io::Result<()> {
    write_banner(out, MULTIMODAL_TITLE)?;
    for m in multimodal(models) {
        writeln!(out, "🖼️  {}", m.name)?;
        writeln!(out, "   Display: {}", m.display_name)?;
    }
    Ok(())
}

/// All three reports, in order.
pub fn write_all<W: Write>(out: &mut W, models: &[ModelDescriptor]) -> io::Result<()> {
    write_catalog(out, models)?;
    write_generation_capable(out, models)?;
    write_multimodal(out, models)
}
