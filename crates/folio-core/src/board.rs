// ABOUTME: Mock data for the ops board screen
// ABOUTME: Task list, per-task agent runs, fixed run metrics

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn label(self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Queued,
    Running,
    Completed,
    Failed,
    Paused,
}

impl TaskStatus {
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Queued => "queued",
            TaskStatus::Running => "running",
            TaskStatus::Completed => "completed",
            TaskStatus::Failed => "failed",
            TaskStatus::Paused => "paused",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Running,
    Completed,
    Failed,
    Paused,
}

impl RunStatus {
    pub fn label(self) -> &'static str {
        match self {
            RunStatus::Running => "running",
            RunStatus::Completed => "completed",
            RunStatus::Failed => "failed",
            RunStatus::Paused => "paused",
        }
    }
}

/// One log or error line attached to an agent run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunEvent {
    pub id: &'static str,
    pub message: &'static str,
}

/// One agent execution inside a task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentRun {
    pub id: &'static str,
    pub name: &'static str,
    pub status: RunStatus,
    pub progress: u8,
    pub logs: Vec<RunEvent>,
    pub errors: Vec<RunEvent>,
}

impl AgentRun {
    /// Flip between running and paused. Completed/failed runs stay put.
    pub fn toggle_paused(&mut self) {
        self.status = match self.status {
            RunStatus::Running => RunStatus::Paused,
            RunStatus::Paused => RunStatus::Running,
            other => other,
        };
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub brands: Vec<&'static str>,
    pub tags: Vec<&'static str>,
    pub agents: Vec<AgentRun>,
}

/// Fixed resource figures shown in the metrics panel. Nothing measures
/// anything; the numbers are part of the demo fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunMetrics {
    pub cpu_percent: u8,
    pub memory_percent: u8,
    pub network_percent: u8,
    pub execution_ms: u64,
    pub steps_completed: u32,
    pub steps_total: u32,
    pub screenshots_taken: u32,
    pub errors_found: u32,
}

pub const MOCK_METRICS: RunMetrics = RunMetrics {
    cpu_percent: 45,
    memory_percent: 67,
    network_percent: 23,
    execution_ms: 345_000,
    steps_completed: 12,
    steps_total: 18,
    screenshots_taken: 8,
    errors_found: 2,
};

/// The demo task list.
pub fn mock_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "task-1",
            name: "Quarterly report rollup",
            description: "Collect regional sales workbooks and produce the consolidated quarterly deck.",
            priority: TaskPriority::High,
            status: TaskStatus::Running,
            brands: vec!["Acme Retail", "Acme Wholesale"],
            tags: vec!["reporting", "finance"],
            agents: vec![
                AgentRun {
                    id: "run-1a",
                    name: "Workbook collector",
                    status: RunStatus::Completed,
                    progress: 100,
                    logs: vec![
                        RunEvent { id: "l1", message: "Fetched 14 workbooks from shared drive" },
                        RunEvent { id: "l2", message: "Normalized column headers" },
                    ],
                    errors: vec![],
                },
                AgentRun {
                    id: "run-1b",
                    name: "Deck builder",
                    status: RunStatus::Running,
                    progress: 60,
                    logs: vec![
                        RunEvent { id: "l3", message: "Rendered 9 of 15 slides" },
                    ],
                    errors: vec![
                        RunEvent { id: "e1", message: "Missing EMEA figures for week 11" },
                    ],
                },
            ],
        },
        Task {
            id: "task-2",
            name: "Contract clause audit",
            description: "Scan supplier contracts for non-standard liability clauses.",
            priority: TaskPriority::Medium,
            status: TaskStatus::Paused,
            brands: vec!["Acme Legal"],
            tags: vec!["compliance"],
            agents: vec![
                AgentRun {
                    id: "run-2a",
                    name: "Clause scanner",
                    status: RunStatus::Paused,
                    progress: 35,
                    logs: vec![
                        RunEvent { id: "l4", message: "Parsed 120 of 340 contracts" },
                    ],
                    errors: vec![],
                },
            ],
        },
        Task {
            id: "task-3",
            name: "Invoice batch generation",
            description: "Produce monthly invoices from the billing export.",
            priority: TaskPriority::Low,
            status: TaskStatus::Completed,
            brands: vec!["Acme Retail"],
            tags: vec!["billing", "templates"],
            agents: vec![
                AgentRun {
                    id: "run-3a",
                    name: "Template merger",
                    status: RunStatus::Completed,
                    progress: 100,
                    logs: vec![
                        RunEvent { id: "l5", message: "Generated 862 invoices" },
                        RunEvent { id: "l6", message: "Uploaded batch to archive" },
                    ],
                    errors: vec![
                        RunEvent { id: "e2", message: "2 customers missing billing address" },
                    ],
                },
            ],
        },
    ]
}

/// Render a millisecond duration the way the metrics panel shows it.
pub fn format_duration(ms: u64) -> String {
    let seconds = ms / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes % 60, seconds % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds % 60)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_tasks_are_stable() {
        let tasks = mock_tasks();
        assert_eq!(tasks.len(), 3);
        assert!(tasks.iter().all(|t| !t.agents.is_empty()));
    }

    #[test]
    fn test_toggle_paused_flips_only_live_runs() {
        let mut run = mock_tasks()[0].agents[1].clone();
        assert_eq!(run.status, RunStatus::Running);
        run.toggle_paused();
        assert_eq!(run.status, RunStatus::Paused);
        run.toggle_paused();
        assert_eq!(run.status, RunStatus::Running);

        let mut done = mock_tasks()[0].agents[0].clone();
        done.toggle_paused();
        assert_eq!(done.status, RunStatus::Completed);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(5_000), "5s");
        assert_eq!(format_duration(95_000), "1m 35s");
        assert_eq!(format_duration(MOCK_METRICS.execution_ms), "5m 45s");
        assert_eq!(format_duration(3_725_000), "1h 2m 5s");
    }
}
