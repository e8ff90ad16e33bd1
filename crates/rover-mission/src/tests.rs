//! End-to-end tests for session building and the mission entry point.

use crate::MissionError;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A line source over a fixed script, yielding `None` once exhausted.
fn line_source<'a>(lines: &'a [&'a str]) -> impl FnMut() -> Option<String> + 'a {
    let mut iter = lines.iter();
    move || iter.next().map(|s| (*s).to_owned())
}

#[cfg(test)]
mod session {
    use super::*;
    use crate::build_setup;
    use rover_core::{Direction, GridSize, RoverPosition};

    #[test]
    fn grid_then_rovers_builds_the_setup() {
        let setup =
            build_setup(line_source(&["4 8", "(2, 3, E) LFRFF", "(0, 2, N) FF"])).unwrap();
        assert_eq!(setup.grid, GridSize::new(4, 8));
        assert_eq!(setup.rovers.len(), 2);
        assert_eq!(setup.rovers[0].start, RoverPosition::new(2, 3, Direction::East));
        assert_eq!(setup.rovers[1].start, RoverPosition::new(0, 2, Direction::North));
    }

    #[test]
    fn blank_line_terminates_early() {
        let setup =
            build_setup(line_source(&["4 8", "(2, 3, E) F", "", "(0, 0, N) F"])).unwrap();
        assert_eq!(setup.rovers.len(), 1, "lines after the blank are never read");
    }

    #[test]
    fn whitespace_only_line_counts_as_blank() {
        let setup = build_setup(line_source(&["4 8", "(2, 3, E) F", "   "])).unwrap();
        assert_eq!(setup.rovers.len(), 1);
    }

    #[test]
    fn no_lines_at_all_is_no_input() {
        let err = build_setup(line_source(&[])).unwrap_err();
        assert!(matches!(err, MissionError::NoInput));

        let err = build_setup(line_source(&[""])).unwrap_err();
        assert!(matches!(err, MissionError::NoInput));
    }

    #[test]
    fn grid_without_rovers_is_no_rovers() {
        let err = build_setup(line_source(&["4 8"])).unwrap_err();
        assert!(matches!(err, MissionError::NoRovers));

        let err = build_setup(line_source(&["4 8", ""])).unwrap_err();
        assert!(matches!(err, MissionError::NoRovers));
    }

    #[test]
    fn bad_grid_line_aborts_immediately() {
        let err = build_setup(line_source(&["four 8", "(2, 3, E) F"])).unwrap_err();
        assert!(matches!(err, MissionError::MapSize(_)));
    }

    #[test]
    fn bad_rover_line_aborts_immediately() {
        let err = build_setup(line_source(&["4 8", "(2, 3) LFR", "(0, 0, N) F"])).unwrap_err();
        assert!(matches!(err, MissionError::RoverDetails(_)));
    }

    #[test]
    fn out_of_bounds_rover_is_its_own_error() {
        let err = build_setup(line_source(&["1 1", "(2, 3, N) LFR"])).unwrap_err();
        assert!(matches!(err, MissionError::RoverOutOfBounds(_)));
    }
}

#[cfg(test)]
mod mission {
    use super::*;
    use crate::run_mission;

    #[test]
    fn reports_each_rover_in_input_order() {
        let report = run_mission(line_source(&["4 8", "(2, 3, E) LFRFF", "(0, 2, N) FFLFRFF"]));
        assert_eq!(report, "(4, 4, E)\n(0, 4, W) LOST");
    }

    #[test]
    fn empty_input_reports_missing_map() {
        let report = run_mission(line_source(&[""]));
        assert_eq!(report, "No map or rover data was entered. Please try again");
    }

    #[test]
    fn grid_only_reports_missing_rovers() {
        let report = run_mission(line_source(&["4 8"]));
        assert_eq!(report, "No rover data was entered. Please try again");
    }

    #[test]
    fn each_failure_yields_its_single_sentence() {
        let report = run_mission(line_source(&["-1 5"]));
        assert_eq!(report, "Could not parse the map size. Please try again");

        let report = run_mission(line_source(&["4 8", "(1, 1, N) FXF"]));
        assert_eq!(report, "Could not parse the rover details. Please try again");

        let report = run_mission(line_source(&["4 8", "(9, 9, N) F"]));
        assert_eq!(report, "The specified rover is out of bounds. Please try again");
    }

    #[test]
    fn lost_in_transit_is_a_report_not_an_error() {
        let report = run_mission(line_source(&["0 0", "(0, 0, N) F"]));
        assert_eq!(report, "(0, 0, N) LOST");
    }
}
