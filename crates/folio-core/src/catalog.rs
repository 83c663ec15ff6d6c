// ABOUTME: Static agent catalog and the gallery filter
// ABOUTME: Descriptors are fixed at compile time and never mutated

use serde::Serialize;

/// Availability of an agent profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    Available,
    Busy,
    Offline,
}

impl AgentStatus {
    pub fn label(self) -> &'static str {
        match self {
            AgentStatus::Available => "Available",
            AgentStatus::Busy => "Busy",
            AgentStatus::Offline => "Offline",
        }
    }
}

/// A single advertised capability of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capability {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

/// An agent profile in the gallery. Immutable; cloning is cheap since all
/// fields borrow from the static table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgentDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub glyph: &'static str,
    pub capabilities: &'static [Capability],
    pub use_cases: &'static [&'static str],
    pub status: AgentStatus,
    pub rating: f32,
    pub total_interactions: u32,
}

/// A category entry for the gallery sidebar. `id` of `None` means "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCount {
    pub id: Option<&'static str>,
    pub label: &'static str,
    pub count: usize,
}

static CATALOG: &[AgentDescriptor] = &[
    AgentDescriptor {
        id: "data-analyst",
        name: "Data Analyst Pro",
        description: "Advanced data analysis and visualization specialist. Can process datasets, generate insights, and create compelling visualizations.",
        category: "Analytics",
        glyph: "◫",
        capabilities: &[
            Capability { id: "data-processing", name: "Data Processing", description: "Clean and transform raw data", category: "Data" },
            Capability { id: "visualization", name: "Data Visualization", description: "Create charts and graphs", category: "Visual" },
            Capability { id: "statistical-analysis", name: "Statistical Analysis", description: "Perform statistical calculations", category: "Analytics" },
        ],
        use_cases: &[
            "Analyze sales performance trends",
            "Generate quarterly business reports",
            "Create customer segmentation analysis",
            "Build predictive models for forecasting",
        ],
        status: AgentStatus::Available,
        rating: 4.8,
        total_interactions: 1247,
    },
    AgentDescriptor {
        id: "content-creator",
        name: "Content Creator",
        description: "Professional writing and content generation expert. Specializes in business documentation, technical writing, and organizational communications.",
        category: "Content",
        glyph: "✎",
        capabilities: &[
            Capability { id: "business-writing", name: "Business Writing", description: "Create professional business documents", category: "Writing" },
            Capability { id: "technical-writing", name: "Technical Writing", description: "Write clear technical documentation", category: "Writing" },
            Capability { id: "content-editing", name: "Content Editing", description: "Edit and improve existing content", category: "Editorial" },
        ],
        use_cases: &[
            "Write comprehensive project proposals",
            "Create internal communication documents",
            "Draft training materials and guides",
            "Generate executive summaries and reports",
        ],
        status: AgentStatus::Available,
        rating: 4.6,
        total_interactions: 892,
    },
    AgentDescriptor {
        id: "research-assistant",
        name: "Research Assistant",
        description: "Research and information gathering specialist. Can conduct industry research, competitive analysis, and fact verification.",
        category: "Research and Insights",
        glyph: "◎",
        capabilities: &[
            Capability { id: "industry-research", name: "Industry Research", description: "Conduct comprehensive industry analysis", category: "Research" },
            Capability { id: "competitive-analysis", name: "Competitive Analysis", description: "Analyze competitive landscape", category: "Business" },
            Capability { id: "fact-checking", name: "Fact Verification", description: "Verify information accuracy", category: "Research" },
        ],
        use_cases: &[
            "Research industry trends and opportunities",
            "Analyze competitor strategies and positioning",
            "Gather stakeholder feedback and insights",
            "Validate business assumptions with data",
        ],
        status: AgentStatus::Available,
        rating: 4.7,
        total_interactions: 743,
    },
    AgentDescriptor {
        id: "market-research-specialist",
        name: "Market Research Specialist",
        description: "Deep market intelligence and business analysis expert. Specializes in market sizing, trend analysis, and strategic insights.",
        category: "Research and Insights",
        glyph: "◔",
        capabilities: &[
            Capability { id: "market-sizing", name: "Market Sizing", description: "Calculate market size and potential", category: "Research" },
            Capability { id: "business-analysis", name: "Business Analysis", description: "Analyze business patterns and opportunities", category: "Analysis" },
            Capability { id: "trend-analysis", name: "Trend Analysis", description: "Identify industry and business trends", category: "Insights" },
        ],
        use_cases: &[
            "Calculate total addressable market (TAM)",
            "Analyze business development opportunities",
            "Identify emerging industry trends",
            "Evaluate expansion opportunities",
        ],
        status: AgentStatus::Available,
        rating: 4.5,
        total_interactions: 456,
    },
    AgentDescriptor {
        id: "automation-expert",
        name: "Automation Expert",
        description: "Process automation and workflow optimization specialist. Can design automated workflows and improve operational efficiency.",
        category: "Automation",
        glyph: "⚙",
        capabilities: &[
            Capability { id: "workflow-design", name: "Workflow Design", description: "Design automated workflows", category: "Process" },
            Capability { id: "efficiency-optimization", name: "Efficiency Optimization", description: "Optimize processes", category: "Operations" },
            Capability { id: "integration", name: "System Integration", description: "Connect different systems", category: "Technical" },
        ],
        use_cases: &[
            "Automate repetitive manual tasks",
            "Design approval workflows",
            "Create data synchronization processes",
            "Build notification and alert systems",
        ],
        status: AgentStatus::Busy,
        rating: 4.5,
        total_interactions: 567,
    },
    AgentDescriptor {
        id: "process-automation-specialist",
        name: "Process Automation Specialist",
        description: "Enterprise process automation and digital transformation expert. Focuses on large-scale process optimization and RPA implementation.",
        category: "Automation",
        glyph: "⚒",
        capabilities: &[
            Capability { id: "rpa-implementation", name: "RPA Implementation", description: "Deploy robotic process automation", category: "Automation" },
            Capability { id: "process-mapping", name: "Process Mapping", description: "Map and analyze business processes", category: "Analysis" },
            Capability { id: "digital-transformation", name: "Digital Transformation", description: "Lead digital initiatives", category: "Strategy" },
        ],
        use_cases: &[
            "Implement enterprise RPA solutions",
            "Map and optimize business processes",
            "Design digital transformation strategies",
            "Automate complex multi-step workflows",
        ],
        status: AgentStatus::Available,
        rating: 4.6,
        total_interactions: 234,
    },
    AgentDescriptor {
        id: "knowledge-extraction",
        name: "Knowledge Extraction",
        description: "Advanced document intelligence and knowledge extraction specialist. Provides access to large document repositories and extracts specific insights from diverse document datasets.",
        category: "Knowledge Extraction",
        glyph: "◈",
        capabilities: &[
            Capability { id: "document-parsing", name: "Document Parsing", description: "Extract data from various document formats", category: "Extraction" },
            Capability { id: "knowledge-mining", name: "Knowledge Mining", description: "Discover insights from document collections", category: "Intelligence" },
            Capability { id: "semantic-search", name: "Semantic Search", description: "Advanced search across document repositories", category: "Search" },
        ],
        use_cases: &[
            "Extract key information from contract databases",
            "Search across technical documentation repositories",
            "Analyze patterns in regulatory documents",
            "Generate insights from research paper collections",
        ],
        status: AgentStatus::Available,
        rating: 4.8,
        total_interactions: 678,
    },
    AgentDescriptor {
        id: "office-document-creator",
        name: "Office Document Creator",
        description: "Specialized in creating professional office documents including Word documents, Excel spreadsheets, and PowerPoint presentations using templates and structured data.",
        category: "Document Creation",
        glyph: "▤",
        capabilities: &[
            Capability { id: "word-generation", name: "Word Document Generation", description: "Create formatted Word documents", category: "Office" },
            Capability { id: "excel-automation", name: "Excel Automation", description: "Generate complex spreadsheets and calculations", category: "Office" },
            Capability { id: "powerpoint-creation", name: "PowerPoint Creation", description: "Design professional presentations", category: "Office" },
        ],
        use_cases: &[
            "Generate business proposals and contracts",
            "Create financial reports and dashboards",
            "Build presentation decks from data",
            "Automate recurring office document workflows",
        ],
        status: AgentStatus::Available,
        rating: 4.4,
        total_interactions: 523,
    },
    AgentDescriptor {
        id: "technical-document-creator",
        name: "Technical Document Creator",
        description: "Expert in creating technical documentation including High-Level Design (HLD), Low-Level Design (LLD), API documentation, and system specifications.",
        category: "Document Creation",
        glyph: "▥",
        capabilities: &[
            Capability { id: "hld-creation", name: "HLD Creation", description: "Generate high-level design documents", category: "Technical" },
            Capability { id: "lld-creation", name: "LLD Creation", description: "Create detailed low-level designs", category: "Technical" },
            Capability { id: "api-documentation", name: "API Documentation", description: "Document APIs and interfaces", category: "Technical" },
        ],
        use_cases: &[
            "Create system architecture documents",
            "Generate API specification documents",
            "Build technical requirement specifications",
            "Document software design patterns",
        ],
        status: AgentStatus::Available,
        rating: 4.7,
        total_interactions: 345,
    },
    AgentDescriptor {
        id: "pdf-report-generator",
        name: "PDF & Report Generator",
        description: "Professional PDF creation and report generation specialist. Creates formatted reports, compliance documents, and publication-ready PDFs.",
        category: "Document Creation",
        glyph: "▦",
        capabilities: &[
            Capability { id: "pdf-generation", name: "PDF Generation", description: "Create professional PDF documents", category: "Publishing" },
            Capability { id: "report-formatting", name: "Report Formatting", description: "Format complex reports with charts and tables", category: "Formatting" },
            Capability { id: "compliance-docs", name: "Compliance Documentation", description: "Generate regulatory compliance documents", category: "Compliance" },
        ],
        use_cases: &[
            "Generate annual reports and financial statements",
            "Create compliance and audit documents",
            "Build formatted research publications",
            "Design business proposals and catalogs",
        ],
        status: AgentStatus::Available,
        rating: 4.6,
        total_interactions: 287,
    },
    AgentDescriptor {
        id: "document-template-engine",
        name: "Document Template Engine",
        description: "Dynamic document generation using advanced templates and data integration. Specializes in mail merge, variable document creation, and bulk document processing.",
        category: "Document Creation",
        glyph: "▧",
        capabilities: &[
            Capability { id: "template-processing", name: "Template Processing", description: "Process dynamic document templates", category: "Templates" },
            Capability { id: "data-integration", name: "Data Integration", description: "Merge data sources into documents", category: "Integration" },
            Capability { id: "bulk-generation", name: "Bulk Generation", description: "Generate multiple documents from datasets", category: "Automation" },
        ],
        use_cases: &[
            "Generate personalized business communications",
            "Create bulk invoices and statements",
            "Process mail merge campaigns",
            "Generate variable contract documents",
        ],
        status: AgentStatus::Available,
        rating: 4.5,
        total_interactions: 412,
    },
];

/// Display order for the gallery sidebar.
static CATEGORY_ORDER: &[&str] = &[
    "Analytics",
    "Content",
    "Knowledge Extraction",
    "Research and Insights",
    "Document Creation",
    "Automation",
];

/// The full agent catalog, in gallery order.
pub fn catalog() -> &'static [AgentDescriptor] {
    CATALOG
}

/// Look up a single agent by id.
pub fn find(id: &str) -> Option<&'static AgentDescriptor> {
    CATALOG.iter().find(|a| a.id == id)
}

/// Sidebar categories with live counts. The leading entry covers the whole
/// catalog.
pub fn categories() -> Vec<CategoryCount> {
    let mut out = vec![CategoryCount {
        id: None,
        label: "All agents",
        count: CATALOG.len(),
    }];
    for &cat in CATEGORY_ORDER {
        out.push(CategoryCount {
            id: Some(cat),
            label: cat,
            count: CATALOG.iter().filter(|a| a.category == cat).count(),
        });
    }
    out
}

/// Gallery filter: case-insensitive substring match on name or description,
/// then exact category match. `None` category means all. Order-preserving.
pub fn filter<'a>(
    agents: &'a [AgentDescriptor],
    search_term: &str,
    category: Option<&str>,
) -> Vec<&'a AgentDescriptor> {
    let needle = search_term.to_lowercase();
    agents
        .iter()
        .filter(|a| {
            let matches_search = needle.is_empty()
                || a.name.to_lowercase().contains(&needle)
                || a.description.to_lowercase().contains(&needle);
            let matches_category = match category {
                None => true,
                Some(c) => a.category == c,
            };
            matches_search && matches_category
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_returns_full_catalog_in_order() {
        let all = filter(catalog(), "", None);
        assert_eq!(all.len(), catalog().len());
        for (got, want) in all.iter().zip(catalog()) {
            assert_eq!(got.id, want.id);
        }
    }

    #[test]
    fn test_search_matches_name_or_description_case_insensitive() {
        for term in ["DATA", "data", "Visualization"] {
            let hits = filter(catalog(), term, None);
            assert!(!hits.is_empty());
            let needle = term.to_lowercase();
            for agent in hits {
                assert!(
                    agent.name.to_lowercase().contains(&needle)
                        || agent.description.to_lowercase().contains(&needle),
                    "{} should not match {}",
                    agent.id,
                    term
                );
            }
        }
    }

    #[test]
    fn test_category_filter_is_exact() {
        let hits = filter(catalog(), "", Some("Automation"));
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|a| a.category == "Automation"));
        // "Research and Insights" must not leak into a partial match
        let hits = filter(catalog(), "", Some("Research"));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_search_and_category_combine() {
        let hits = filter(catalog(), "enterprise", Some("Automation"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "process-automation-specialist");
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(filter(catalog(), "zzzz-no-such-agent", None).is_empty());
    }

    #[test]
    fn test_category_counts_match_filtering() {
        let cats = categories();
        assert_eq!(cats[0].count, catalog().len());
        let sum: usize = cats.iter().skip(1).map(|c| c.count).sum();
        assert_eq!(sum, catalog().len());
        for cat in cats.iter().skip(1) {
            let hits = filter(catalog(), "", cat.id);
            assert_eq!(hits.len(), cat.count, "count mismatch for {}", cat.label);
        }
    }

    #[test]
    fn test_find_known_and_unknown() {
        assert_eq!(find("data-analyst").unwrap().name, "Data Analyst Pro");
        assert!(find("nonexistent").is_none());
    }

    #[test]
    fn test_only_automation_expert_is_busy() {
        let busy: Vec<_> = catalog()
            .iter()
            .filter(|a| a.status == AgentStatus::Busy)
            .collect();
        assert_eq!(busy.len(), 1);
        assert_eq!(busy[0].id, "automation-expert");
    }
}
