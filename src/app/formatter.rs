use crate::app::models::TodoRecord;
use std::path::Path;

pub struct OutputGenerator;

impl OutputGenerator {
    /// Renders records as rows of relative path, line number and text.
    /// Selection state belongs to whatever consumes this output, never to
    /// the records themselves.
    pub fn render(root: &Path, todos: &[TodoRecord]) -> String {
        let mut output = format!("Todos for {}\n", root.display());

        for todo in todos {
            output.push_str(&format!(
                "{}:{}  {}\n",
                todo.relative_path.display(),
                todo.line_number,
                todo.text
            ));
        }

        output
    }
}
