#[cfg(test)]
mod model_tests {
    use jiff::civil;

    use crate::{
        display::{LogLine, PlanTree},
        models::{LogCategory, LogEntry, LogLevel, PlanFixes, Task, TaskStatus},
    };

    fn create_test_task(id: u64, description: &str) -> Task {
        Task {
            id,
            description: description.to_string(),
            completed: false,
            in_progress: false,
            commands: vec![],
            success_criteria: None,
            sub_tasks: vec![],
        }
    }

    fn create_test_entry(id: u64, message: &str, level: Option<LogLevel>) -> LogEntry {
        LogEntry {
            id,
            timestamp: civil::date(2025, 3, 30).at(21, 31, 44, 713_000_000),
            message: message.to_string(),
            level,
        }
    }

    #[test]
    fn test_status_priority_completed_wins() {
        // completed beats inProgress even when both flags are set
        assert_eq!(TaskStatus::from_flags(true, true), TaskStatus::Completed);
        assert_eq!(TaskStatus::from_flags(true, false), TaskStatus::Completed);
        assert_eq!(TaskStatus::from_flags(false, true), TaskStatus::InProgress);
        assert_eq!(TaskStatus::from_flags(false, false), TaskStatus::Pending);
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(TaskStatus::Completed.as_str(), "Completed");
        assert_eq!(TaskStatus::InProgress.as_str(), "In Progress");
        assert_eq!(TaskStatus::Pending.as_str(), "Pending");
    }

    #[test]
    fn test_status_with_icon() {
        assert_eq!(TaskStatus::Completed.with_icon(), "✓ Completed");
        assert_eq!(TaskStatus::InProgress.with_icon(), "➤ In Progress");
        assert_eq!(TaskStatus::Pending.with_icon(), "○ Pending");
    }

    #[test]
    fn test_task_deserializes_camel_case_wire_format() {
        let json = r#"{
            "id": 1,
            "description": "Build",
            "completed": false,
            "inProgress": true,
            "commands": ["make"],
            "successCriteria": "binary exists",
            "subTasks": [{"id": 2, "description": "Configure"}],
            "atomic": true
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 1);
        assert_eq!(task.description, "Build");
        assert!(task.in_progress);
        assert_eq!(task.commands, vec!["make".to_string()]);
        assert_eq!(task.success_criteria.as_deref(), Some("binary exists"));
        assert_eq!(task.sub_tasks.len(), 1);
        assert_eq!(task.status(), TaskStatus::InProgress);

        // Optional fields absent on the wire default to empty
        let child = &task.sub_tasks[0];
        assert!(!child.completed);
        assert!(child.commands.is_empty());
        assert!(child.success_criteria.is_none());
        assert!(child.sub_tasks.is_empty());
        assert_eq!(child.status(), TaskStatus::Pending);
    }

    #[test]
    fn test_log_entry_parses_backend_timestamp_and_level() {
        let json = r#"{
            "id": 5,
            "timestamp": "2025-03-30T21:31:44.713",
            "message": "asked the model for a plan",
            "level": "LLM_REQUEST"
        }"#;

        let entry: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 5);
        assert_eq!(entry.timestamp, civil::date(2025, 3, 30).at(21, 31, 44, 713_000_000));
        assert_eq!(entry.level, Some(LogLevel::LlmRequest));
        assert_eq!(entry.category(), LogCategory::LlmRequest);
    }

    #[test]
    fn test_log_entry_without_level_is_classified_by_keywords() {
        let entry: LogEntry =
            serde_json::from_str(r#"{"id": 1, "timestamp": "2025-03-30T21:31:44", "message": "ok"}"#)
                .unwrap();
        assert_eq!(entry.level, None);
        assert_eq!(entry.category(), LogCategory::Info);
    }

    #[test]
    fn test_keyword_classification_vectors() {
        assert_eq!(
            LogCategory::from_message("Error: build failed"),
            LogCategory::Error
        );
        assert_eq!(
            LogCategory::from_message("Build completed successfully"),
            LogCategory::Success
        );
        assert_eq!(
            LogCategory::from_message("Executing command: ls"),
            LogCategory::Command
        );
        assert_eq!(
            LogCategory::from_message("waiting for the executor"),
            LogCategory::Info
        );
        // error keywords outrank success keywords in mixed messages
        assert_eq!(
            LogCategory::from_message("Executing command: rm failed"),
            LogCategory::Error
        );
    }

    #[test]
    fn test_category_identifiers() {
        assert_eq!(LogCategory::Error.as_str(), "error");
        assert_eq!(LogCategory::Success.as_str(), "success");
        assert_eq!(LogCategory::Command.as_str(), "command");
        assert_eq!(LogCategory::Info.as_str(), "info");
        assert_eq!(LogCategory::LlmRequest.as_str(), "llm-request");
        assert_eq!(LogCategory::LlmResponse.as_str(), "llm-response");
    }

    #[test]
    fn test_explicit_level_overrides_keywords() {
        // the message says "failed", the backend says SUCCESS
        assert_eq!(
            LogCategory::classify(Some(LogLevel::Success), "retry failed, recovered"),
            LogCategory::Success
        );
    }

    #[test]
    fn test_plan_fixes_wrapper_field_name() {
        let json = r#"{"fixLogs": [{"timestamp": "2025-03-30T21:31:44", "message": "Applied plan fixes"}]}"#;
        let fixes: PlanFixes = serde_json::from_str(json).unwrap();
        assert_eq!(fixes.fix_logs.len(), 1);
        assert_eq!(fixes.fix_logs[0].message, "Applied plan fixes");
        assert!(fixes.fix_logs[0].level.is_none());
    }

    #[test]
    fn test_plan_tree_scenario_render() {
        let mut task = create_test_task(1, "Build");
        task.in_progress = true;
        task.commands = vec!["make".to_string()];
        let tasks = vec![task];

        let output = format!("{}", PlanTree::new("42", &tasks).detailed());
        assert!(output.contains("# Plan ID: 42"));
        assert!(output.contains("Task 1: Build"));
        assert!(output.contains("Status: In Progress"));
        assert!(output.contains("- make"));
    }

    #[test]
    fn test_plan_tree_renders_depth_first_pre_order() {
        let mut root_a = create_test_task(1, "root a");
        let mut child = create_test_task(2, "child");
        child.sub_tasks = vec![create_test_task(3, "grandchild")];
        root_a.sub_tasks = vec![child];
        let root_b = create_test_task(4, "root b");
        let tasks = vec![root_a, root_b];

        let output = format!("{}", PlanTree::new("p", &tasks));
        let positions: Vec<usize> = ["Task 1:", "Task 2:", "Task 3:", "Task 4:"]
            .iter()
            .map(|needle| output.find(needle).unwrap())
            .collect();

        // Descendants form a contiguous block before the next sibling
        assert!(positions[0] < positions[1]);
        assert!(positions[1] < positions[2]);
        assert!(positions[2] < positions[3]);

        // Nesting is indentation within one flat output
        assert!(output.contains("\n  ● Task 2:"));
        assert!(output.contains("\n    ● Task 3:"));
        assert!(output.contains("\n● Task 4:"));
    }

    #[test]
    fn test_plan_tree_collapsed_hides_content_blocks() {
        let mut task = create_test_task(1, "Build");
        task.commands = vec!["make".to_string()];
        task.success_criteria = Some("binary exists".to_string());
        let tasks = vec![task];

        let output = format!("{}", PlanTree::new("42", &tasks));
        assert!(output.contains("Task 1: Build"));
        assert!(!output.contains("Status:"));
        assert!(!output.contains("- make"));
        assert!(!output.contains("Success Criteria"));
    }

    #[test]
    fn test_plan_tree_empty_placeholder() {
        let output = format!("{}", PlanTree::new("42", &[]));
        assert!(output.contains("# Plan ID: 42"));
        assert!(output.contains("No tasks in the current plan."));
    }

    #[test]
    fn test_plan_tree_detailed_success_criteria() {
        let mut task = create_test_task(7, "Verify");
        task.completed = true;
        task.success_criteria = Some("all tests green".to_string());
        let tasks = vec![task];

        let output = format!("{}", PlanTree::new("42", &tasks).detailed());
        assert!(output.contains("Status: Completed"));
        assert!(output.contains("Success Criteria: all tests green"));
        // No commands section when the task carries none
        assert!(!output.contains("Commands:"));
    }

    #[test]
    fn test_log_line_format() {
        let entry = create_test_entry(5, "Executing command: ls", Some(LogLevel::Command));
        assert_eq!(format!("{}", LogLine(&entry)), "[21:31:44] Executing command: ls");
    }
}
