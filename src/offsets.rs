use serde::Serialize;

/// kg of CO2e a single tree absorbs per year
static TREE_ABSORPTION_KG: f64 = 20.0;

/// Trees to plant to absorb `total_monthly_kg`. Exact multiples need no
/// extra tree (40 kg ⇒ 2 trees).
pub fn trees_to_offset(total_monthly_kg: f64) -> u32 {
    (total_monthly_kg / TREE_ABSORPTION_KG).ceil() as u32
}

/// A third-party program the offset recommendation links to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OffsetProgram {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

/// Indian tree-planting and solar programs shown next to the tree count.
pub static PROGRAMS: &'static [OffsetProgram] = &[
    OffsetProgram {
        name: "Grow-Trees.com",
        url: "https://www.grow-trees.com",
        description: "Plant trees across India",
    },
    OffsetProgram {
        name: "SankalpTaru",
        url: "https://www.sankalptaru.org",
        description: "Support rural tree planting",
    },
    OffsetProgram {
        name: "Tata Power Solar",
        url: "https://www.tatapower.com",
        description: "Subscribe to solar energy programs",
    },
];
