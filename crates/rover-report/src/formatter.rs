//! Outcome-to-text rendering.

use rover_sim::RoverOutcome;

/// Render one outcome line: `(x, y, D)`, with ` LOST` appended for a
/// rover that left the grid.
pub fn render_outcome(outcome: &RoverOutcome) -> String {
    let position = outcome.position();
    if outcome.is_lost() {
        format!("{position} LOST")
    } else {
        position.to_string()
    }
}

/// Render the full report: one line per rover, input order preserved,
/// joined with single newlines.
pub fn render_report(outcomes: &[RoverOutcome]) -> String {
    outcomes
        .iter()
        .map(render_outcome)
        .collect::<Vec<_>>()
        .join("\n")
}
