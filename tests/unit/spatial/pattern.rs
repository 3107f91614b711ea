//! Tests for pattern naming and direction arithmetic

#[cfg(test)]
mod tests {
    use edgematch::spatial::pattern::{Direction, Pattern, restriction_name};

    // Codes are non-zero so zero can mean "unconstrained" inside keys
    #[test]
    fn test_codes_round_trip_and_are_nonzero() {
        for pattern in Pattern::ALL {
            assert_ne!(pattern.code(), 0);
            assert_eq!(Pattern::from_code(pattern.code()), Some(pattern));
        }
        assert_eq!(Pattern::from_code(0), None);
        assert_eq!(Pattern::from_code(9), None);
    }

    #[test]
    fn test_from_name_accepts_long_and_short_names() {
        assert_eq!(Pattern::from_name("BlueStar"), Some(Pattern::BlueStar));
        assert_eq!(Pattern::from_name("blue"), Some(Pattern::BlueStar));
        assert_eq!(Pattern::from_name("PURPLE"), Some(Pattern::PinkCircle));
        assert_eq!(Pattern::from_name("border"), Some(Pattern::Border));
        assert_eq!(Pattern::from_name("Orange"), None);
    }

    #[test]
    fn test_display_uses_short_names() {
        assert_eq!(Pattern::RedTrident.to_string(), "Red");
        assert_eq!(restriction_name(Some(Pattern::YellowCircle)), "White");
        assert_eq!(restriction_name(None), "--");
    }

    // Opposite must be an involution and flip the neighbour offset
    #[test]
    fn test_opposite_is_involution() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);

            let (d_row, d_col) = direction.offset();
            let (o_row, o_col) = direction.opposite().offset();
            assert_eq!((d_row + o_row, d_col + o_col), (0, 0));
        }
    }

    #[test]
    fn test_from_index_wraps_clockwise() {
        assert_eq!(Direction::from_index(0), Direction::North);
        assert_eq!(Direction::from_index(3), Direction::West);
        assert_eq!(Direction::from_index(5), Direction::East);
        for direction in Direction::ALL {
            assert_eq!(Direction::from_index(direction.index()), direction);
        }
    }

    #[test]
    fn test_direction_labels() {
        let letters: String = Direction::ALL.iter().map(|d| d.letter()).collect();
        assert_eq!(letters, "NESW");
        assert_eq!(Direction::South.to_string(), "South");
    }
}
