// ABOUTME: Canned response strategies, one per known agent id
// ABOUTME: Registry replaces per-id switch tables and is open for extension

use std::collections::HashMap;

use rand::seq::SliceRandom;

use crate::types::TaskResult;

/// Produces the simulated reply material for one agent id. A real backend
/// integration would replace this seam wholesale.
pub trait Responder: Send + Sync {
    /// Canned reply lines; one is chosen uniformly at random per exchange.
    fn lines(&self) -> &'static [&'static str];

    /// Mock result payload. Depends only on the agent id, never on the
    /// user's input.
    fn result(&self) -> TaskResult;
}

struct Analyst;

impl Responder for Analyst {
    fn lines(&self) -> &'static [&'static str] {
        &[
            "I've analyzed the data you provided. Here are the key insights I found:",
            "Let me process this dataset and generate a comprehensive analysis for you.",
            "I've identified several trends in your data. Here's what stands out:",
        ]
    }

    fn result(&self) -> TaskResult {
        TaskResult::Analysis {
            insights: vec![
                "Revenue increased 23% QoQ".to_string(),
                "Customer retention improved".to_string(),
                "New market opportunities identified".to_string(),
            ],
            charts: vec![
                "Line chart showing growth trends".to_string(),
                "Pie chart of customer segments".to_string(),
            ],
        }
    }
}

struct Writer;

impl Responder for Writer {
    fn lines(&self) -> &'static [&'static str] {
        &[
            "I've crafted some engaging content based on your requirements:",
            "Here's a creative approach to your content needs:",
            "I've generated several content variations for you to choose from:",
        ]
    }

    fn result(&self) -> TaskResult {
        TaskResult::Content {
            items: vec![
                "Blog post draft (1,200 words)".to_string(),
                "Social media posts (5 variants)".to_string(),
                "Email subject lines (10 options)".to_string(),
            ],
        }
    }
}

struct Coder;

impl Responder for Coder {
    fn lines(&self) -> &'static [&'static str] {
        &[
            "I've reviewed your code and found some areas for improvement:",
            "Here's a clean, optimized solution for your programming challenge:",
            "I've identified the issue and prepared a fix along with best practices:",
        ]
    }

    fn result(&self) -> TaskResult {
        TaskResult::Code {
            improvements: vec![
                "Reduced complexity by 40%".to_string(),
                "Fixed 3 potential bugs".to_string(),
                "Added error handling".to_string(),
            ],
            files: vec![
                "main.py".to_string(),
                "utils.py".to_string(),
                "tests.py".to_string(),
            ],
        }
    }
}

fn general_result() -> TaskResult {
    TaskResult::General {
        summary: "Task completed successfully".to_string(),
        items: vec![
            "Generated comprehensive solution".to_string(),
            "Provided actionable recommendations".to_string(),
        ],
    }
}

struct Researcher;

impl Responder for Researcher {
    fn lines(&self) -> &'static [&'static str] {
        &[
            "I've conducted thorough research on your topic. Here's what I found:",
            "Based on my analysis of current market data, here are the insights:",
            "I've gathered comprehensive information from reliable sources:",
        ]
    }

    fn result(&self) -> TaskResult {
        general_result()
    }
}

struct Automator;

impl Responder for Automator {
    fn lines(&self) -> &'static [&'static str] {
        &[
            "I've designed an automated workflow to streamline this process:",
            "Here's an efficient automation solution for your needs:",
            "I've identified opportunities to optimize your workflow:",
        ]
    }

    fn result(&self) -> TaskResult {
        general_result()
    }
}

struct Support;

impl Responder for Support {
    fn lines(&self) -> &'static [&'static str] {
        &[
            "I understand your concern and I'm here to help resolve this issue:",
            "Let me guide you through the solution step by step:",
            "I've found the best approach to address your request:",
        ]
    }

    fn result(&self) -> TaskResult {
        general_result()
    }
}

struct Fallback;

impl Responder for Fallback {
    fn lines(&self) -> &'static [&'static str] {
        &[
            "I've processed your request and here's my response:",
            "Based on my analysis, here's what I recommend:",
            "I've completed the task you requested. Here are the results:",
        ]
    }

    fn result(&self) -> TaskResult {
        general_result()
    }
}

/// Maps agent ids to their response strategy, with a generic fallback for
/// ids nothing was registered for.
pub struct ResponderRegistry {
    by_id: HashMap<&'static str, Box<dyn Responder>>,
    fallback: Box<dyn Responder>,
}

impl ResponderRegistry {
    /// Registry covering the ids the demo ships canned material for.
    pub fn builtin() -> Self {
        let mut by_id: HashMap<&'static str, Box<dyn Responder>> = HashMap::new();
        by_id.insert("data-analyst", Box::new(Analyst));
        by_id.insert("content-creator", Box::new(Writer));
        by_id.insert("code-assistant", Box::new(Coder));
        by_id.insert("research-assistant", Box::new(Researcher));
        by_id.insert("automation-expert", Box::new(Automator));
        by_id.insert("customer-support", Box::new(Support));
        Self {
            by_id,
            fallback: Box::new(Fallback),
        }
    }

    /// Register or replace the strategy for an agent id.
    pub fn register(&mut self, id: &'static str, responder: Box<dyn Responder>) {
        self.by_id.insert(id, responder);
    }

    pub fn get(&self, id: &str) -> &dyn Responder {
        self.by_id
            .get(id)
            .map(|r| r.as_ref())
            .unwrap_or(self.fallback.as_ref())
    }

    /// Pick one canned line for the agent, uniformly at random.
    pub fn pick_line(&self, id: &str) -> &'static str {
        let lines = self.get(id).lines();
        let mut rng = rand::thread_rng();
        lines
            .choose(&mut rng)
            .copied()
            .unwrap_or("I've processed your request.")
    }

    /// Build the mock result payload for the agent.
    pub fn build_result(&self, id: &str) -> TaskResult {
        self.get(id).result()
    }
}

impl Default for ResponderRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ids_resolve_to_their_strategy() {
        let registry = ResponderRegistry::builtin();
        match registry.build_result("data-analyst") {
            TaskResult::Analysis { insights, charts } => {
                assert_eq!(insights.len(), 3);
                assert_eq!(charts.len(), 2);
            }
            other => panic!("expected analysis result, got {:?}", other),
        }
        assert_eq!(registry.build_result("content-creator").kind(), "content");
        assert_eq!(registry.build_result("code-assistant").kind(), "code");
    }

    #[test]
    fn test_unknown_id_falls_back_to_general() {
        let registry = ResponderRegistry::builtin();
        match registry.build_result("no-such-agent") {
            TaskResult::General { summary, items } => {
                assert_eq!(summary, "Task completed successfully");
                assert_eq!(items.len(), 2);
            }
            other => panic!("expected general result, got {:?}", other),
        }
    }

    #[test]
    fn test_pick_line_comes_from_the_table() {
        let registry = ResponderRegistry::builtin();
        let table = registry.get("data-analyst").lines();
        for _ in 0..20 {
            let line = registry.pick_line("data-analyst");
            assert!(table.contains(&line));
        }
    }

    #[test]
    fn test_every_builtin_table_has_three_lines() {
        let registry = ResponderRegistry::builtin();
        for id in [
            "data-analyst",
            "content-creator",
            "code-assistant",
            "research-assistant",
            "automation-expert",
            "customer-support",
            "unknown-id",
        ] {
            assert_eq!(registry.get(id).lines().len(), 3, "table for {}", id);
        }
    }

    #[test]
    fn test_register_overrides_builtin() {
        struct Custom;
        impl Responder for Custom {
            fn lines(&self) -> &'static [&'static str] {
                &["custom line"]
            }
            fn result(&self) -> TaskResult {
                TaskResult::General {
                    summary: "custom".to_string(),
                    items: vec![],
                }
            }
        }
        let mut registry = ResponderRegistry::builtin();
        registry.register("data-analyst", Box::new(Custom));
        assert_eq!(registry.pick_line("data-analyst"), "custom line");
    }
}
