#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableOutcome {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableBand {
    Excellent,
    Good,
    NeedsImprovement,
}

impl RenderableBand {
    pub fn label(self) -> &'static str {
        match self {
            RenderableBand::Excellent => "EXCELLENT",
            RenderableBand::Good => "GOOD",
            RenderableBand::NeedsImprovement => "NEEDS IMPROVEMENT",
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            RenderableBand::Excellent => "COMPLIANT",
            RenderableBand::Good => "PARTIALLY COMPLIANT",
            RenderableBand::NeedsImprovement => "NON-COMPLIANT",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableStatus {
    Clean,
    Degraded,
    Critical,
}

impl RenderableStatus {
    pub fn label(self) -> &'static str {
        match self {
            RenderableStatus::Clean => "CLEAN",
            RenderableStatus::Degraded => "DEGRADED",
            RenderableStatus::Critical => "CRITICAL",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableResult {
    pub check_id: String,
    pub name: String,
    pub outcome: RenderableOutcome,
    pub critical: bool,
    pub details: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderableScore {
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    pub warned: u32,
    pub critical_failures: u32,
    pub score_percent: u32,
    pub band: RenderableBand,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableRun {
    /// Preformatted `YYYY-MM-DD HH:MM:SS` stamp for the header.
    pub generated: String,
    pub hostname: String,
    pub profile: String,
    pub status: RenderableStatus,
    pub score: RenderableScore,
    pub results: Vec<RenderableResult>,
}
