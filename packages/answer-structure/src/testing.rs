//! Sample provider outputs for testing.
//!
//! These mirror the shapes different providers actually produce, so
//! applications can exercise their rendering against realistic input
//! without calling a model.

/// Bold section labels and `*` bullets with bold titles.
pub const GEMINI_STYLE_ANSWER: &str = "\
Hybrid bonding at fine pitch raises several process issues.

**Challenges:**
*   **Cu dishing:** Excess dishing leaves voids after anneal. [Annealing Effects in Sub-8 µm Pitch]
*   **Warpage:** Die-level warpage breaks overlay budgets. [Dielectric Stack Optimization][D2W Challenges for HBM]
*   Particle contamination reduces bonding yield.

**Solutions (process-level):**
*   Tune CMP to control recess depth. [Annealing Effects in Sub-8 µm Pitch]
*   Use low-stress dielectric stacks. [Dielectric Stack Optimization]
";

/// Intro paragraph, numbered challenges, markdown heading for solutions.
pub const GPT_STYLE_ANSWER: &str = "\
## Overview
Die-to-wafer bonding is limited mostly by alignment and surface prep.

1. **Overlay error**: Scaling error grows with die size. [Overlay scaling error reduction]
2. **Surface activation**: Hydroxyl density varies across the wafer.

### Solutions
1. Apply per-die scaling correction. [Overlay scaling error reduction]
2. Standardize plasma activation time. [Low Temperature Cu-Cu Hybrid Bonding]
";

/// Solutions paragraph without list markers.
pub const PARAGRAPH_SOLUTIONS_ANSWER: &str = "\
Challenges:
- **Throughput**: Sequential die placement is slow. [Self-assembly D2W]

Solutions:
Self-assembly can place many dies in parallel [Self-assembly D2W].
";

/// No recognizable structure.
pub const UNSTRUCTURED_ANSWER: &str = "The retrieved documents do not discuss this topic.";

/// Keyword/paper report with repeated and near-duplicate fragments.
pub const GRAPH_REPORT: &str = "\
Keyword: hybrid bonding
- Paper: Annealing Effects in Sub-8 µm Pitch Die-to-Wafer
  Summary:
    • Abstract: Annealing closes Cu dishing gaps at 300C.
    • Abstract: Annealing closes Cu dishing gaps at 300C!
  Content:
    • Results: void density drops after a two-step anneal.
Keyword: warpage
- Paper: Dielectric Stack Optimization for Die-level Warpage Reduction
  Summary:
    • Abstract Content: Stress-balanced stacks reduce die bow.
";

/// Plain paragraphs without any `Keyword:` blocks.
pub const GRAPH_WITHOUT_KEYWORDS: &str = "\
First paragraph about bonding.

Second paragraph about warpage.

first paragraph about bonding!!

Third paragraph • Fourth piece";

/// A named fixture for table-driven tests.
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub name: &'static str,
    pub raw: &'static str,
}

/// Every answer fixture, structured ones first.
pub fn answer_fixtures() -> Vec<Fixture> {
    vec![
        Fixture {
            name: "gemini",
            raw: GEMINI_STYLE_ANSWER,
        },
        Fixture {
            name: "gpt",
            raw: GPT_STYLE_ANSWER,
        },
        Fixture {
            name: "paragraph-solutions",
            raw: PARAGRAPH_SOLUTIONS_ANSWER,
        },
        Fixture {
            name: "unstructured",
            raw: UNSTRUCTURED_ANSWER,
        },
    ]
}
