//! Display implementations for the plan tree.

use std::fmt;

use crate::models::{Task, TaskStatus};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Wrapper type rendering a plan's task tree.
///
/// Tasks are written depth-first in pre-order: a task's descendants form a
/// contiguous block before its next sibling. All nodes at all depths go into
/// the same flat output; nesting is conveyed purely by two-space indentation
/// per level.
///
/// The default view is collapsed — one header line per task. The detailed
/// view adds each task's content block: a status line (Completed over
/// In Progress over Pending), the command list, and the success criterion.
///
/// # Examples
///
/// ```rust
/// use planwatch_core::display::PlanTree;
/// use planwatch_core::models::Task;
///
/// let tasks = vec![Task {
///     id: 1,
///     description: "Build".to_string(),
///     completed: false,
///     in_progress: true,
///     commands: vec!["make".to_string()],
///     success_criteria: None,
///     sub_tasks: vec![],
/// }];
///
/// let output = format!("{}", PlanTree::new("42", &tasks).detailed());
/// assert!(output.contains("# Plan ID: 42"));
/// assert!(output.contains("Task 1: Build"));
/// assert!(output.contains("Status: In Progress"));
/// ```
pub struct PlanTree<'a> {
    plan_id: &'a str,
    tasks: &'a [Task],
    detailed: bool,
}

impl<'a> PlanTree<'a> {
    /// Create a collapsed tree view (header lines only).
    pub fn new(plan_id: &'a str, tasks: &'a [Task]) -> Self {
        Self {
            plan_id,
            tasks,
            detailed: false,
        }
    }

    /// Expand every task's content block.
    pub fn detailed(mut self) -> Self {
        self.detailed = true;
        self
    }

    fn fmt_task(&self, f: &mut fmt::Formatter<'_>, task: &Task, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);

        writeln!(
            f,
            "{indent}● Task {}: {} ({})",
            task.id,
            task.description,
            task.status().with_icon()
        )?;

        if self.detailed {
            writeln!(f, "{indent}  Status: {}", task.status())?;

            if !task.commands.is_empty() {
                writeln!(f, "{indent}  Commands:")?;
                for command in &task.commands {
                    writeln!(f, "{indent}  - {command}")?;
                }
            }

            if let Some(criteria) = &task.success_criteria {
                writeln!(f, "{indent}  Success Criteria: {criteria}")?;
            }
        }

        for sub_task in &task.sub_tasks {
            self.fmt_task(f, sub_task, depth + 1)?;
        }

        Ok(())
    }
}

impl<'a> fmt::Display for PlanTree<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Plan ID: {}", self.plan_id)?;
        writeln!(f)?;

        if self.tasks.is_empty() {
            writeln!(f, "No tasks in the current plan.")?;
            return Ok(());
        }

        for task in self.tasks {
            self.fmt_task(f, task, 0)?;
        }

        Ok(())
    }
}
