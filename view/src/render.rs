//! Plain-text rendering of the todo list.

use std::io::{self, Write};

use todo_core::TodoItem;

pub const HEADING: &str = "Todos";

/// Write the heading and the titles of the first `limit` todos.
pub fn render_todos<W: Write>(out: &mut W, todos: &[TodoItem], limit: usize) -> io::Result<()> {
    writeln!(out, "{HEADING}")?;
    for todo in todos.iter().take(limit) {
        writeln!(out, "- {}", todo.title)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todos(count: i64) -> Vec<TodoItem> {
        (1..=count)
            .map(|id| TodoItem {
                id,
                user_id: 1,
                title: format!("todo {id}"),
                completed: false,
            })
            .collect()
    }

    fn render(todos: &[TodoItem], limit: usize) -> String {
        let mut out = Vec::new();
        render_todos(&mut out, todos, limit).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn truncates_to_limit() {
        let text = render(&todos(15), 10);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "Todos");
        assert_eq!(lines[1], "- todo 1");
        assert_eq!(lines[10], "- todo 10");
    }

    #[test]
    fn fewer_items_than_limit_render_all() {
        assert_eq!(render(&todos(2), 10), "Todos\n- todo 1\n- todo 2\n");
    }

    #[test]
    fn zero_limit_renders_heading_only() {
        assert_eq!(render(&todos(3), 0), "Todos\n");
    }

    #[test]
    fn empty_list_renders_heading_only() {
        assert_eq!(render(&[], 10), "Todos\n");
    }
}
