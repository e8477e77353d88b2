use serde::Serialize;

/// A known input document: its filename inside the input directory and the
/// title rendered in its section banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DocumentSpec {
    pub filename: &'static str,
    pub title: &'static str,
}

impl DocumentSpec {
    pub const fn new(filename: &'static str, title: &'static str) -> Self {
        Self { filename, title }
    }
}

/// The documents packaged by `prdpack`, in output order.
pub const PRD_DOCUMENTS: [DocumentSpec; 5] = [
    DocumentSpec::new("masterplan.md", "MASTERPLAN"),
    DocumentSpec::new("implementation-plan.md", "IMPLEMENTATION PLAN"),
    DocumentSpec::new("design-guidelines.md", "DESIGN GUIDELINES"),
    DocumentSpec::new("app-flow-pages-and-roles.md", "APP FLOW, PAGES & ROLES"),
    DocumentSpec::new("lovable-knowledge-base.md", "LOVABLE KNOWLEDGE BASE SUMMARY"),
];
