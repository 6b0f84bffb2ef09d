//! Fixed reference content shown by the infographic.
//!
//! Every table here is a `static` slice: built once, never mutated, and
//! indexed by the view state in `app.rs`.

use serde::Serialize;

/// Icon shown next to a lifecycle step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Glyph {
    Circle,
    Code,
    Monitor,
    Bug,
    Rocket,
    Document,
}

impl Glyph {
    /// Symbol for this glyph. Nerd Font code points when `nerd_font` is set,
    /// otherwise plain Unicode that renders in any terminal font.
    pub fn symbol(self, nerd_font: bool) -> &'static str {
        if nerd_font {
            match self {
                Glyph::Circle => "\u{f10c}",
                Glyph::Code => "\u{f121}",
                Glyph::Monitor => "\u{f0379}",
                Glyph::Bug => "\u{f188}",
                Glyph::Rocket => "\u{f135}",
                Glyph::Document => "\u{f15c}",
            }
        } else {
            match self {
                Glyph::Circle => "○",
                Glyph::Code => "⌘",
                Glyph::Monitor => "▣",
                Glyph::Bug => "※",
                Glyph::Rocket => "↑",
                Glyph::Document => "≡",
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Step {
    pub index: usize,
    pub title: &'static str,
    /// Hex color, `#RRGGBB`
    pub color: &'static str,
    pub glyph: Glyph,
    pub details: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct Language {
    pub name: &'static str,
    pub uses: &'static [&'static str],
    pub frameworks: &'static [&'static str],
    pub strengths: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct LanguageCategory {
    pub name: &'static str,
    pub languages: &'static [Language],
}

#[derive(Debug, Serialize)]
pub struct GlossaryEntry {
    pub term: &'static str,
    pub definition: &'static str,
}

/// One side of the No-Code / Low-Code comparison
#[derive(Debug, Serialize)]
pub struct ComparisonPanel {
    pub title: &'static str,
    /// Hex color of the bullet markers
    pub color: &'static str,
    pub points: &'static [&'static str],
}

pub const TITLE: &str = "Programming in Practice: From Concept to Code";

pub static STEPS: &[Step] = &[
    Step {
        index: 0,
        title: "1. Problem Analysis",
        color: "#3498db",
        glyph: Glyph::Circle,
        details: &["Define requirements", "Break down tasks", "Identify I/O", "Research similar solutions"],
    },
    Step {
        index: 1,
        title: "2. Planning & Design",
        color: "#e74c3c",
        glyph: Glyph::Code,
        details: &["Create flowcharts", "Choose structures", "Plan architecture", "Design patterns"],
    },
    Step {
        index: 2,
        title: "3. Development",
        color: "#2ecc71",
        glyph: Glyph::Monitor,
        details: &["Write code", "Follow standards", "Document", "Code review"],
    },
    Step {
        index: 3,
        title: "4. Testing & Debugging",
        color: "#f1c40f",
        glyph: Glyph::Bug,
        details: &["Unit testing", "Integration", "Debug", "Performance testing"],
    },
    Step {
        index: 4,
        title: "5. Deployment & Maintenance",
        color: "#9b59b6",
        glyph: Glyph::Rocket,
        details: &["Release", "Monitor", "Update", "Scale"],
    },
    Step {
        index: 5,
        title: "6. Documentation",
        color: "#1abc9c",
        glyph: Glyph::Document,
        details: &["API documentation", "User guides", "Code comments", "Technical specs"],
    },
];

pub static LANGUAGE_CATEGORIES: &[LanguageCategory] = &[
    LanguageCategory {
        name: "Web Development",
        languages: &[
            Language {
                name: "JavaScript",
                uses: &["Frontend interactivity", "Node.js backend", "Full-stack apps"],
                frameworks: &["React", "Vue", "Angular"],
                strengths: &["Huge ecosystem", "Real-time features", "Browser native"],
            },
            Language {
                name: "Python",
                uses: &["Backend APIs", "Data processing", "AI integration"],
                frameworks: &["Django", "Flask", "FastAPI"],
                strengths: &["Readable syntax", "Rich libraries", "Versatile"],
            },
            Language {
                name: "PHP",
                uses: &["Server-side rendering", "CMS development", "Web apps"],
                frameworks: &["Laravel", "Symfony", "WordPress"],
                strengths: &["Easy hosting", "Built for web", "Large community"],
            },
        ],
    },
    LanguageCategory {
        name: "Mobile Development",
        languages: &[
            Language {
                name: "Swift",
                uses: &["iOS apps", "macOS apps", "Apple ecosystem"],
                frameworks: &["UIKit", "SwiftUI", "Core Data"],
                strengths: &["Native performance", "Strong typing", "Modern syntax"],
            },
            Language {
                name: "Kotlin",
                uses: &["Android apps", "Cross-platform", "Server-side"],
                frameworks: &["Android SDK", "Jetpack Compose", "Ktor"],
                strengths: &["Java interop", "Null safety", "Concise"],
            },
        ],
    },
    LanguageCategory {
        name: "Desktop Development",
        languages: &[
            Language {
                name: "C++",
                uses: &["Game development", "System software", "Performance-critical apps"],
                frameworks: &["Qt", "wxWidgets", "JUCE"],
                strengths: &["High performance", "Hardware access", "Memory control"],
            },
            Language {
                name: "Java",
                uses: &["Enterprise software", "Cross-platform apps", "Android"],
                frameworks: &["JavaFX", "Spring", "Hibernate"],
                strengths: &["Platform independent", "Enterprise ready", "Strong typing"],
            },
            Language {
                name: "C#",
                uses: &["Windows apps", ".NET applications", "Game development"],
                frameworks: &["WPF", ".NET MAUI", "Unity"],
                strengths: &["Microsoft ecosystem", "Modern features", "Type safety"],
            },
        ],
    },
];

pub static GLOSSARY: &[GlossaryEntry] = &[
    GlossaryEntry { term: "Algorithm", definition: "Step-by-step problem-solving procedure" },
    GlossaryEntry { term: "API", definition: "Application Programming Interface" },
    GlossaryEntry { term: "CI/CD", definition: "Continuous Integration/Deployment" },
    GlossaryEntry { term: "Framework", definition: "Reusable software environment" },
    GlossaryEntry { term: "Git", definition: "Version control system" },
    GlossaryEntry { term: "IDE", definition: "Integrated Development Environment" },
    GlossaryEntry { term: "OOP", definition: "Object-Oriented Programming" },
    GlossaryEntry { term: "REST", definition: "Representational State Transfer" },
];

pub static COMPARISON: &[ComparisonPanel] = &[
    ComparisonPanel {
        title: "No-Code",
        color: "#60a5fa",
        points: &["Visual platforms", "Drag-and-drop", "Quick prototypes"],
    },
    ComparisonPanel {
        title: "Low-Code",
        color: "#f87171",
        points: &["Minimal coding", "Pre-built components", "Complex logic"],
    },
];

/// Everything above as one serializable document (for `--dump`)
#[derive(Debug, Serialize)]
pub struct Document {
    pub title: &'static str,
    pub steps: &'static [Step],
    pub languages: &'static [LanguageCategory],
    pub comparison: &'static [ComparisonPanel],
    pub glossary: &'static [GlossaryEntry],
}

pub fn document() -> Document {
    Document {
        title: TITLE,
        steps: STEPS,
        languages: LANGUAGE_CATEGORIES,
        comparison: COMPARISON,
        glossary: GLOSSARY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_ordered() {
        assert_eq!(STEPS.len(), 6);
        for (i, step) in STEPS.iter().enumerate() {
            assert_eq!(step.index, i);
            assert!(step.title.starts_with(&format!("{}. ", i + 1)));
            assert_eq!(step.details.len(), 4);
        }
        assert_eq!(STEPS[5].glyph, Glyph::Document);
    }

    #[test]
    fn test_glossary_order() {
        let terms: Vec<&str> = GLOSSARY.iter().map(|g| g.term).collect();
        assert_eq!(
            terms,
            ["Algorithm", "API", "CI/CD", "Framework", "Git", "IDE", "OOP", "REST"]
        );
        assert_eq!(GLOSSARY[3].definition, "Reusable software environment");
    }

    #[test]
    fn test_language_categories() {
        let names: Vec<&str> = LANGUAGE_CATEGORIES.iter().map(|c| c.name).collect();
        assert_eq!(names, ["Web Development", "Mobile Development", "Desktop Development"]);
        let counts: Vec<usize> = LANGUAGE_CATEGORIES.iter().map(|c| c.languages.len()).collect();
        assert_eq!(counts, [3, 2, 3]);
        assert_eq!(LANGUAGE_CATEGORIES[2].languages[2].name, "C#");
    }

    #[test]
    fn test_document_json() {
        let json = serde_json::to_value(document()).unwrap();
        assert_eq!(json["steps"][1]["glyph"], "code");
        assert_eq!(json["glossary"][7]["term"], "REST");
        assert_eq!(json["languages"][1]["languages"][0]["name"], "Swift");
    }
}
