// Plain-text listings for the command line
//
// Column widths use unicode display width (not byte length) so names with
// CJK or emoji stay aligned.

use serde_json::Value;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::docblock::BlockView;
use crate::model::{Tab, Token};

/// Truncate to `max_width` display columns, ending in an ellipsis when cut
pub fn truncate_display(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    // Leave room for the ellipsis (1 column)
    let target_width = max_width.saturating_sub(1);
    let mut current_width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        current_width += char_width;
        out.push(c);
    }
    out.push('…');
    out
}

/// Strings print bare; everything else as compact JSON
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

/// One line per tab with its category and token counts
pub fn render_tabs(tabs: &[Tab]) -> String {
    if tabs.is_empty() {
        return "No token tabs found.\n".to_string();
    }

    let width = tabs.iter().map(|t| t.label.width()).max().unwrap_or(0);
    let mut output = String::new();
    for tab in tabs {
        output.push_str(&format!(
            "{}  {} categories, {} tokens\n",
            pad(&tab.label, width),
            tab.categories.len(),
            tab.token_count()
        ));
    }
    output
}

fn token_line(token: &Token, name_width: usize, show_value: bool, value_width: usize) -> String {
    let mut line = format!("  {}", pad(&token.name, name_width));
    if show_value {
        let value = truncate_display(&format_value(&token.value), value_width);
        line.push_str(&format!("  {}", pad(&value, value_width)));
    }
    if let Some(description) = &token.description {
        line.push_str(&format!("  {}", description));
    }
    line.trim_end().to_string()
}

/// Render a doc block view as text
pub fn render_view(view: &BlockView, value_width: usize) -> String {
    let mut output = String::new();

    match view {
        BlockView::Table {
            categories,
            show_value_column,
            ..
        } => {
            if categories.is_empty() {
                return "No tokens match.\n".to_string();
            }
            let name_width = categories
                .iter()
                .flat_map(|c| c.tokens.iter())
                .map(|t| t.name.width())
                .max()
                .unwrap_or(0);

            for (i, category) in categories.iter().enumerate() {
                if i > 0 {
                    output.push('\n');
                }
                output.push_str(&format!("{}\n", category.label));
                for token in &category.tokens {
                    output.push_str(&token_line(token, name_width, *show_value_column, value_width));
                    output.push('\n');
                }
            }
        }
        BlockView::Card {
            items,
            current_page,
            total_pages,
            show_pagination,
            show_value_column,
        } => {
            if items.is_empty() {
                return "No tokens match.\n".to_string();
            }
            let name_width = items.iter().map(|t| t.name.width()).max().unwrap_or(0);
            for token in items {
                output.push_str(&token_line(token, name_width, *show_value_column, value_width));
                output.push('\n');
            }
            if *show_pagination {
                output.push_str(&format!("\nPage {} of {}\n", current_page + 1, total_pages));
            }
        }
    }

    output
}
