// file: src/utils/display.rs
// description: console rendering for store/file tables and grounded answers

use crate::models::{FileInfo, SearchResponse, StoreInfo};
use colored::Colorize;

const SEPARATOR_WIDTH: usize = 80;

/// Plain-text table with a colored title and header row.
pub fn render_table(title: &str, headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(idx) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    out.push_str(&format!("\n{}\n", title.bold()));

    let header = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad(h, *w).cyan().bold().to_string())
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(&header);
    out.push('\n');

    let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(total));
    out.push('\n');

    for row in rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| pad(cell, *w))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }

    if rows.is_empty() {
        out.push_str(&format!("{}\n", "(none)".dimmed()));
    }

    out
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{}{}", text, " ".repeat(fill))
}

pub fn render_stores(stores: &[StoreInfo]) -> String {
    let rows: Vec<Vec<String>> = stores
        .iter()
        .map(|store| {
            vec![
                store.name.clone(),
                store.display_name.clone().unwrap_or_else(|| "-".to_string()),
                store
                    .create_time
                    .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();

    render_table("File Search Stores", &["Name", "Display Name", "Created"], &rows)
}

pub fn render_files(files: &[FileInfo]) -> String {
    let rows: Vec<Vec<String>> = files
        .iter()
        .map(|file| {
            vec![
                file.name.clone(),
                file.display_name.clone().unwrap_or_else(|| "-".to_string()),
                file.short_state().unwrap_or("-").to_string(),
            ]
        })
        .collect();

    render_table("Files in Store", &["Name", "Display Name", "State"], &rows)
}

pub fn render_search_response(response: &SearchResponse) -> String {
    let rule = "=".repeat(SEPARATOR_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", "Answer".cyan().bold()));
    out.push_str(&format!("{}\n", rule.cyan()));
    out.push_str(response.answer.trim_end());
    out.push('\n');
    out.push_str(&format!("{}\n", rule.cyan()));

    if response.has_citations() {
        out.push_str(&format!("\n{}\n", "Sources:".yellow().bold()));
        for line in response.format_sources() {
            out.push_str(&format!(" {}\n", line));
        }
    }

    out
}
