//! Unit tests for the descriptor parsers.

#[cfg(test)]
mod grid_size {
    use rover_core::GridSize;

    use crate::parse_grid_size;

    #[test]
    fn parses_two_non_negative_integers() {
        assert_eq!(parse_grid_size("4 8").unwrap(), GridSize::new(4, 8));
        assert_eq!(parse_grid_size("0 0").unwrap(), GridSize::new(0, 0));
        assert_eq!(parse_grid_size("100 1").unwrap(), GridSize::new(100, 1));
    }

    #[test]
    fn negative_dimension_rejected() {
        assert!(parse_grid_size("-1 5").is_err());
        assert!(parse_grid_size("5 -1").is_err());
    }

    #[test]
    fn wrong_token_count_rejected() {
        for line in ["", "4", "4 8 2", "4  8", " 4 8", "4 8 "] {
            assert!(parse_grid_size(line).is_err(), "line {line:?} should fail");
        }
    }

    #[test]
    fn non_integer_tokens_rejected() {
        for line in ["four eight", "4.0 8", "4 8m", "99999999999999 8"] {
            assert!(parse_grid_size(line).is_err(), "line {line:?} should fail");
        }
    }
}

#[cfg(test)]
mod rover_descriptor {
    use rover_core::{Direction, GridSize, Instruction, RoverPosition};

    use crate::{RoverParseError, parse_rover_descriptor};

    fn grid() -> GridSize {
        GridSize::new(4, 4)
    }

    #[test]
    fn parses_position_and_instructions() {
        let rover = parse_rover_descriptor("(2, 3, E) LFRFF", grid()).unwrap();
        assert_eq!(rover.start, RoverPosition::new(2, 3, Direction::East));
        assert_eq!(
            rover.instructions,
            vec![
                Instruction::TurnLeft,
                Instruction::Forward,
                Instruction::TurnRight,
                Instruction::Forward,
                Instruction::Forward,
            ]
        );
    }

    #[test]
    fn single_instruction_is_enough() {
        let rover = parse_rover_descriptor("(0, 0, N) F", grid()).unwrap();
        assert_eq!(rover.instructions, vec![Instruction::Forward]);
    }

    #[test]
    fn start_outside_grid_is_out_of_bounds() {
        let err = parse_rover_descriptor("(2, 3, N) LFR", GridSize::new(1, 1)).unwrap_err();
        assert!(matches!(err, RoverParseError::OutOfBounds { .. }));
    }

    #[test]
    fn negative_start_is_out_of_bounds_not_a_format_error() {
        // The minus sign satisfies the numeric grammar; placement fails.
        let err = parse_rover_descriptor("(-1, 3, N) F", grid()).unwrap_err();
        assert!(matches!(err, RoverParseError::OutOfBounds { .. }));
    }

    #[test]
    fn inclusive_corner_is_a_valid_start() {
        assert!(parse_rover_descriptor("(4, 4, S) F", grid()).is_ok());
    }

    #[test]
    fn wrong_shape_is_invalid_details() {
        for line in [
            "(2, 3) LFR",
            "2, 3, E LFR",
            "(2, 3, E)LFR",
            "(2, 3, E) ",
            "(2, 3, E)",
            "(2, 3, E) LFR extra",
            "(2,3,E) LFR",
            "(2, 3, EE) LFR",
            "",
        ] {
            let err = parse_rover_descriptor(line, grid()).unwrap_err();
            assert!(
                matches!(err, RoverParseError::InvalidDetails(_)),
                "line {line:?} should be a format error, got {err:?}"
            );
        }
    }

    #[test]
    fn unknown_letters_are_invalid_details() {
        let err = parse_rover_descriptor("(2, 3, Q) LFR", grid()).unwrap_err();
        assert!(matches!(err, RoverParseError::InvalidDetails(_)));

        let err = parse_rover_descriptor("(2, 3, E) LXR", grid()).unwrap_err();
        assert!(matches!(err, RoverParseError::InvalidDetails(_)));
    }

    #[test]
    fn format_checked_before_bounds() {
        // Off-grid start AND a bad instruction letter: the format error wins.
        let err = parse_rover_descriptor("(9, 9, N) FXF", grid()).unwrap_err();
        assert!(matches!(err, RoverParseError::InvalidDetails(_)));
    }
}
