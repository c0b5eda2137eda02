// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the wikisift CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The theme comes from
//! `WIKISIFT_THEME` if set, then `COLORFGBG`, then defaults to dark. Colour is
//! dropped entirely under `NO_COLOR` or when stdout is not a TTY, so piping
//! results into other tools gets plain text.

use std::sync::OnceLock;

use wikisift::{CorpusStats, Document, SearchHit};

/// Width between │ and │ (excluding border chars).
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("WIKISIFT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colour only when stdout is a TTY and `NO_COLOR` is unset.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, ignoring ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut to `max` visible characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border(s: &str) -> String {
    if use_colors() {
        format!("{}{}{}", GRAY(), s, RESET)
    } else {
        s.to_string()
    }
}

/// │ content          │
pub fn row(content: &str) {
    println!("{}", row_line(content));
}

fn row_line(content: &str) -> String {
    let content = truncate_visible(content, BOX_WIDTH);
    format!("{}{}{}", border("│"), pad_right(&content, BOX_WIDTH), border("│"))
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    println!("{}", labelled_rule(label, '┌', '┐'));
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", bottom_rule());
}

/// `┌─ LABEL ─┐` opens a box, `├─ LABEL ─┤` divides one.
fn labelled_rule(label: &str, left: char, right: char) -> String {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    format!(
        "{}{}{}",
        border(&left.to_string()),
        label_part,
        border(&format!("{}{}", "─".repeat(remaining), right))
    )
}

fn bottom_rule() -> String {
    border(&format!("└{}┘", "─".repeat(BOX_WIDTH)))
}

// Plain text is cut by chars; styled text is left alone.
fn truncate_visible(content: &str, max: usize) -> String {
    if visible_len(content) <= max || content.contains('\x1b') {
        content.to_string()
    } else {
        truncate(content, max)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Aggregate score, coloured by strength. Max for a three-field exact hit is 6.
pub fn score_value(score: Option<f64>) -> String {
    let Some(score) = score else {
        return themed(GRAY, &[], "     -");
    };
    let text = format!("{:>6.2}", score);
    if score >= 3.0 {
        themed(BRIGHT_GREEN, &[BOLD], &text)
    } else if score >= 1.5 {
        themed(GREEN, &[], &text)
    } else if score >= 0.75 {
        themed(YELLOW, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

pub fn type_badge(doc: &Document) -> String {
    match &doc.doc_type {
        Some(t) => themed(MAGENTA, &[], &format!("[{}]", t.name)),
        None => themed(GRAY, &[DIM], "[-]"),
    }
}

pub fn tag_list(tags: &[String]) -> String {
    tags.iter()
        .map(|t| themed(BLUE, &[], &format!("#{}", t)))
        .collect::<Vec<_>>()
        .join(" ")
}

// ═══════════════════════════════════════════════════════════════════════════
// VIEWS
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_results(query: &str, hits: &[SearchHit<'_>], total: usize) {
    let label = if query.trim().is_empty() {
        format!("ALL PAGES ({})", total)
    } else {
        format!("RESULTS FOR \"{}\" ({})", query.trim(), total)
    };
    section_top(&label);
    if hits.is_empty() {
        row(&themed(GRAY, &[], " no matching pages"));
    }
    for hit in hits {
        let doc = hit.document;
        let title = truncate(doc.title(), 40);
        row(&format!(
            " {} {} {} {}",
            score_value(hit.score),
            pad_right(&themed(YELLOW, &[BOLD], &title), 40),
            type_badge(doc),
            themed(GRAY, &[], &format!("#{}", doc.id)),
        ));
        if !doc.tags.is_empty() {
            row(&format!("        {}", tag_list(&doc.tags)));
        }
    }
    if total > hits.len() {
        row(&themed(
            GRAY,
            &[DIM],
            &format!(" … {} more (raise --limit)", total - hits.len()),
        ));
    }
    section_bot();
}

pub fn print_tags(tags: &[&str]) {
    section_top(&format!("TAGS ({})", tags.len()));
    for tag in tags {
        row(&format!(" {}", themed(BLUE, &[], tag)));
    }
    section_bot();
}

pub fn print_stats(stats: &CorpusStats, title_of: impl Fn(wikisift::DocId) -> String) {
    for line in stats_lines(stats, title_of) {
        println!("{}", line);
    }
}

/// One box, four sections.
fn stats_lines(stats: &CorpusStats, title_of: impl Fn(wikisift::DocId) -> String) -> Vec<String> {
    let mut lines = vec![labelled_rule("OVERVIEW", '┌', '┐')];
    lines.push(row_line(&format!(
        " pages      {}",
        themed(GREEN, &[BOLD], &stats.total.to_string())
    )));
    lines.push(row_line(&format!(
        " tags       {}",
        themed(GREEN, &[BOLD], &stats.total_tags.to_string())
    )));

    lines.push(labelled_rule("BY TYPE", '├', '┤'));
    for (name, count) in &stats.by_type {
        lines.push(row_line(&format!(" {} {}", pad_right(name, 24), count)));
    }

    lines.push(labelled_rule("TOP TAGS", '├', '┤'));
    for entry in &stats.top_tags {
        lines.push(row_line(&format!(
            " {} {}",
            pad_right(&themed(BLUE, &[], &format!("#{}", entry.tag)), 24),
            entry.count
        )));
    }

    lines.push(labelled_rule("RECENT", '├', '┤'));
    for id in &stats.recent {
        lines.push(row_line(&format!(" {}", title_of(*id))));
    }
    lines.push(bottom_rule());
    lines
}
