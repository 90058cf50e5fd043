use crate::PieChart;

/// The single display slot a calculation renders into. A new result
/// replaces everything shown by the previous one; nothing is merged or
/// appended, so at most one live result exists at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Screen {
    breakdown: Option<String>,
    impact: Option<String>,
    comparison: Option<String>,
    offsets: Option<String>,
    chart: Option<PieChart>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the currently shown result. The previous chart is dropped
    /// before the new one is installed.
    pub fn show(
        &mut self,
        breakdown: String,
        impact: String,
        comparison: String,
        offsets: String,
        chart: PieChart,
    ) {
        self.chart.take();
        self.breakdown = Some(breakdown);
        self.impact = Some(impact);
        self.comparison = Some(comparison);
        self.offsets = Some(offsets);
        self.chart = Some(chart);
    }

    /// Wipes every section, e.g. when the form comes back incomplete.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn breakdown(&self) -> Option<&str> {
        self.breakdown.as_deref()
    }

    pub fn impact(&self) -> Option<&str> {
        self.impact.as_deref()
    }

    pub fn comparison(&self) -> Option<&str> {
        self.comparison.as_deref()
    }

    pub fn offsets(&self) -> Option<&str> {
        self.offsets.as_deref()
    }

    pub fn chart(&self) -> Option<&PieChart> {
        self.chart.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.breakdown.is_none()
            && self.impact.is_none()
            && self.comparison.is_none()
            && self.offsets.is_none()
            && self.chart.is_none()
    }
}
