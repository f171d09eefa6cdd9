#![forbid(unsafe_code)]

//! Chip flow demo.
//!
//! Measures a set of tag "chips" with `unicode-width`, flows them against
//! the live terminal width, and prints them row by row. Resize the terminal
//! and run again to watch the wrap points move.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.

use std::env;
use std::process;

use crossterm::style::{Color, Stylize};
use crossterm::terminal;
use unicode_width::UnicodeWidthStr;
use wrapflow::prelude::*;

const HELP_TEXT: &str = "\
wrapflow chip demo — flow-wrap tag chips across the terminal

USAGE:
    wrapflow-demo-chips [OPTIONS]

OPTIONS:
    --width=N       Container width in columns (default: terminal width)
    --spacing=N     Gap between chips in columns (default: 1)
    --center        Center each row
    --trailing      Right-align each row
    --reverse       Place chips right-to-left within rows
    --report        Print the row diagnostics table instead of chips
    --help, -h      Show this help message
";

const LABELS: [&str; 18] = [
    "rust",
    "layout",
    "flow-wrap",
    "terminal",
    "geometry",
    "no_std? not yet",
    "zero-alloc-ish",
    "naïve text metrics",
    "east-asian 宽度",
    "proptest",
    "criterion",
    "tracing",
    "benchmarks",
    "row packing",
    "lookahead",
    "leading",
    "center",
    "trailing",
];

const CHIP_COLORS: [Color; 5] = [
    Color::DarkBlue,
    Color::DarkMagenta,
    Color::DarkGreen,
    Color::DarkRed,
    Color::DarkCyan,
];

struct Options {
    width: Option<f32>,
    spacing: f32,
    alignment: HorizontalAlignment,
    direction: FlowDirection,
    report: bool,
}

fn parse_args() -> Options {
    let mut opts = Options {
        width: None,
        spacing: 1.0,
        alignment: HorizontalAlignment::Leading,
        direction: FlowDirection::Forward,
        report: false,
    };

    for arg in env::args().skip(1) {
        if let Some(value) = arg.strip_prefix("--width=") {
            match value.parse::<f32>() {
                Ok(w) if w >= 0.0 => opts.width = Some(w),
                _ => fail(&format!("invalid --width value: {value}")),
            }
        } else if let Some(value) = arg.strip_prefix("--spacing=") {
            match value.parse::<f32>() {
                Ok(s) if s >= 0.0 => opts.spacing = s,
                _ => fail(&format!("invalid --spacing value: {value}")),
            }
        } else {
            match arg.as_str() {
                "--center" => opts.alignment = HorizontalAlignment::Center,
                "--trailing" => opts.alignment = HorizontalAlignment::Trailing,
                "--reverse" => opts.direction = FlowDirection::Reverse,
                "--report" => opts.report = true,
                "--help" | "-h" => {
                    print!("{HELP_TEXT}");
                    process::exit(0);
                }
                other => fail(&format!("unknown option: {other}")),
            }
        }
    }

    opts
}

fn fail(message: &str) -> ! {
    eprintln!("error: {message}");
    eprintln!("run with --help for usage");
    process::exit(2);
}

/// A chip renders as ` label ` — one column of padding on each side.
fn chip_size(label: &str) -> Size {
    Size::new(label.width() as f32 + 2.0, 1.0)
}

fn main() {
    let opts = parse_args();

    let columns = opts.width.unwrap_or_else(|| {
        terminal::size().map(|(cols, _)| cols as f32).unwrap_or(80.0)
    });

    let layout = FlowLayout::new()
        .horizontal_spacing(opts.spacing)
        .horizontal_alignment(opts.alignment)
        .direction(opts.direction);

    let result = layout.compute_with_measurer(ProposedSize::width(columns), LABELS.len(), |i| {
        chip_size(LABELS[i])
    });
    let sizes: Vec<Size> = LABELS.iter().map(|label| chip_size(label)).collect();

    if opts.report {
        let report = wrapflow::FlowReport::new(&layout, ProposedSize::width(columns), &sizes);
        print!("{report}");
        return;
    }

    // Chip heights are all 1, so each origin's y is an exact line index.
    let line_count = result.size.height as usize;
    let mut lines: Vec<Vec<(f32, usize)>> = vec![Vec::new(); line_count];
    result.place_with(&sizes, |index, origin, _size| {
        let line = origin.y as usize;
        if line < line_count {
            lines[line].push((origin.x, index));
        }
    });

    for chips in &mut lines {
        chips.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut column = 0usize;
        for &(x, index) in chips.iter() {
            // A chip wider than the container can start left of the edge
            // under center/trailing alignment; clamp for printing.
            let target = x.max(0.0) as usize;
            if target > column {
                print!("{}", " ".repeat(target - column));
                column = target;
            }
            let label = LABELS[index];
            let color = CHIP_COLORS[index % CHIP_COLORS.len()];
            print!("{}", format!(" {label} ").with(Color::White).on(color));
            column += label.width() + 2;
        }
        println!();
    }
}
