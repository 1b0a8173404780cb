//! Output formatting module for Quire
//!
//! Every command produces a `Response`: a human-readable message plus an
//! optional JSON payload. Text mode prints the message; `--json` prints the
//! payload.

use quire_db::{ItemNode, ItemView, ListTree, TodoList};
use serde::Serialize;
use serde_json::{Value, json};

/// Maximum width for the title column before truncation
const MAX_TITLE_WIDTH: usize = 40;

/// Result of a command, renderable as text or JSON
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Human-readable outcome
    pub message: String,
    /// Structured payload for `--json`
    pub data: Value,
}

impl Response {
    pub fn new(message: impl Into<String>, data: Value) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }

    /// A success acknowledgement with no entity, as `{"success": true, ...}`
    pub fn success(message: impl Into<String>, extra: Value) -> Self {
        let mut data = json!({ "success": true });
        if let (Some(map), Value::Object(extra)) = (data.as_object_mut(), extra) {
            map.extend(extra);
        }
        Self::new(message, data)
    }

    /// Render for the terminal
    pub fn render(&self, as_json: bool) -> String {
        if as_json {
            self.data.to_string()
        } else {
            self.message.clone()
        }
    }
}

/// JSON body printed for failures in `--json` mode
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub success: bool,
    pub kind: &'a str,
    pub message: String,
}

/// Truncate a string to the specified maximum width, adding ellipsis if needed.
fn truncate(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        let head: String = s.chars().take(max_width - 3).collect();
        format!("{}...", head)
    }
}

/// Format lists into an aligned table.
///
/// ```text
/// ID      Title     Created
/// ------  --------  ----------
/// a1b2c3  Work      2026-10-19
/// ```
pub fn format_list_table(lists: &[TodoList]) -> String {
    if lists.is_empty() {
        return "No lists found.".to_string();
    }

    let headers = ["ID", "Title", "Created"];

    let id_width = lists
        .iter()
        .map(|l| l.id.len())
        .max()
        .unwrap_or(0)
        .max(headers[0].len());

    let title_width = lists
        .iter()
        .map(|l| l.title.chars().count().min(MAX_TITLE_WIDTH))
        .max()
        .unwrap_or(0)
        .max(headers[1].len());

    let mut output = String::new();
    output.push_str(&format!(
        "{:<id_w$}  {:<title_w$}  {}\n",
        headers[0],
        headers[1],
        headers[2],
        id_w = id_width,
        title_w = title_width,
    ));
    output.push_str(&format!(
        "{:->id_w$}  {:->title_w$}  {:->10}\n",
        "",
        "",
        "",
        id_w = id_width,
        title_w = title_width,
    ));

    for list in lists {
        let created = list
            .created_at
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "{:<id_w$}  {:<title_w$}  {}\n",
            list.id,
            truncate(&list.title, MAX_TITLE_WIDTH),
            created,
            id_w = id_width,
            title_w = title_width,
        ));
    }

    output.trim_end().to_string()
}

/// One-line summary of an item: `[x] Title (id)`
pub fn format_item(view: &ItemView) -> String {
    let mark = if view.item.completed { "x" } else { " " };
    format!("[{}] {} ({})", mark, view.item.title, view.item.id)
}

/// Render a list as an indented tree.
///
/// Collapsed items show a `+` marker and hide their children.
pub fn format_tree(tree: &ListTree) -> String {
    let mut output = format!("{} ({})", tree.list.title, tree.list.id);
    if tree.roots.is_empty() {
        output.push_str("\n  (empty)");
        return output;
    }
    for node in &tree.roots {
        push_node(&mut output, node);
    }
    output
}

fn push_node(output: &mut String, node: &ItemNode) {
    let indent = "  ".repeat(node.view.level + 1);
    let fold = if !node.view.item.expanded && !node.children.is_empty() {
        " +"
    } else {
        ""
    };
    output.push('\n');
    output.push_str(&indent);
    output.push_str(&format_item(&node.view));
    output.push_str(fold);

    if node.view.item.expanded {
        for child in &node.children {
            push_node(output, child);
        }
    }
}
