use std::path::PathBuf;

use unicode_truncate::UnicodeTruncateStr;

use crate::probe::prelude::{Http3Support, ProbeResult};

const COLUMNS: [(&str, usize); 4] = [
    ("URL", 40),
    ("HTTP/3 Support", 24),
    ("ALPN Protocol", 14),
    ("Notes", 64),
];

fn to_fixed_width(input: &str, width: usize) -> String {
    let (truncated, _) = input.unicode_truncate(width);
    format!("{:<width$}", truncated, width = width)
}

fn render_row(cells: [&str; 4]) -> String {
    cells
        .iter()
        .zip(COLUMNS.iter())
        .map(|(cell, (_, width))| to_fixed_width(cell, *width))
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end()
        .to_string()
}

/// Renders results as a fixed-width table with a header row.
pub fn render_table(results: &[ProbeResult]) -> String {
    let mut lines = Vec::with_capacity(results.len() + 1);
    lines.push(render_row(COLUMNS.map(|(name, _)| name)));
    for result in results {
        lines.push(render_row(result.fields()));
    }
    lines.join("\n")
}

/// One result on a single line, as printed when a probe completes.
pub fn format_result(result: &ProbeResult) -> String {
    let icon = match result.http3_support {
        Http3Support::Yes => "✅",
        Http3Support::Probable => "❔",
        Http3Support::No => "❌",
    };
    format!(
        "{icon} {} -> {} [{}] {}",
        result.url, result.http3_support, result.alpn_protocol, result.notes
    )
}

/// One line of input in interactive mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Probe(String),
    List,
    Export(PathBuf),
    Clear,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map(|(w, r)| (w, r.trim()))
        .unwrap_or((line, ""));

    match word {
        "" => Command::Empty,
        "list" => Command::List,
        "clear" => Command::Clear,
        "quit" | "exit" => Command::Quit,
        "export" if !rest.is_empty() => Command::Export(PathBuf::from(rest)),
        "export" => Command::Unknown("export needs a file name".to_string()),
        _ if word.contains("://") => Command::Probe(word.to_string()),
        _ => Command::Unknown(format!("unknown command '{word}'")),
    }
}
