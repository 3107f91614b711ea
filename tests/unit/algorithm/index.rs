//! Tests for subset-key registration, availability counts and candidate lookup

#[cfg(test)]
mod tests {
    use edgematch::algorithm::index::{PlacementIndex, SUBSETS_PER_PLACEMENT};
    use edgematch::io::catalog::builtin_catalog;
    use edgematch::spatial::edges::{ConstraintKey, Edges};
    use edgematch::spatial::pattern::{Direction, Pattern};
    use edgematch::spatial::pieces::PieceCatalog;

    const DISTINCT: [Pattern; 4] = [
        Pattern::BlueStar,
        Pattern::PinkCircle,
        Pattern::RedTrident,
        Pattern::YellowCircle,
    ];

    const SYMMETRIC: [Pattern; 4] = [
        Pattern::BlueStar,
        Pattern::PinkTrident,
        Pattern::BlueStar,
        Pattern::PinkTrident,
    ];

    // Handles are assigned slot by slot, rotation by rotation
    #[test]
    fn test_handles_follow_catalog_then_rotation_order() {
        let index = PlacementIndex::build(&builtin_catalog());
        assert_eq!(index.placements().len(), 36 * 4);
        for (handle, placement) in index.placements().iter().enumerate() {
            assert_eq!(placement.slot(), handle / 4);
            assert_eq!(placement.orientation().index(), handle % 4);
        }
    }

    // Every non-empty subset of a piece with four distinct edges pins its rotation
    #[test]
    fn test_distinct_piece_touches_one_bucket_per_subset() {
        let index = PlacementIndex::build(&PieceCatalog::from_edges([DISTINCT]));
        let expected = 1 + 4 * (usize::from(SUBSETS_PER_PLACEMENT) - 1);
        assert_eq!(index.bucket_count(), expected);
        assert_eq!(index.buckets_touched(0), expected);
        assert_eq!(index.buckets_touched(1), 0);
        assert_eq!(index.available(ConstraintKey::EMPTY), 4);
    }

    #[test]
    fn test_full_key_finds_exact_rotation() {
        let index = PlacementIndex::build(&PieceCatalog::from_edges([DISTINCT]));
        let rotated = index.placement(2).map(|p| p.edges().key());
        let key = rotated.unwrap_or(ConstraintKey::EMPTY);

        assert_eq!(index.available(key), 1);
        assert_eq!(index.candidates(key), vec![2]);
    }

    #[test]
    fn test_unknown_key_has_no_candidates() {
        let index = PlacementIndex::build(&PieceCatalog::from_edges([DISTINCT]));
        let mut edges = Edges::UNCONSTRAINED;
        edges.set(Direction::North, Some(Pattern::Border));

        assert_eq!(index.available(edges.key()), 0);
        assert!(index.candidates(edges.key()).is_empty());
    }

    // Rotations presenting identical edges are offered once
    #[test]
    fn test_candidates_dedupe_identical_rotations() {
        let index = PlacementIndex::build(&PieceCatalog::from_edges([SYMMETRIC]));
        assert_eq!(index.available(ConstraintKey::EMPTY), 4);
        assert_eq!(index.candidates(ConstraintKey::EMPTY), vec![0, 1]);

        let mut north = Edges::UNCONSTRAINED;
        north.set(Direction::North, Some(Pattern::BlueStar));
        assert_eq!(index.available(north.key()), 2);
        assert_eq!(index.candidates(north.key()), vec![0]);
    }

    #[test]
    fn test_mark_used_hides_every_rotation() {
        let catalog = PieceCatalog::from_edges([DISTINCT, SYMMETRIC]);
        let mut index = PlacementIndex::build(&catalog);
        assert_eq!(index.available(ConstraintKey::EMPTY), 8);

        assert!(index.mark_used(1).is_ok());
        assert!(index.is_placed(0));
        assert_eq!(index.available(ConstraintKey::EMPTY), 4);
        assert_eq!(index.candidates(ConstraintKey::EMPTY), vec![4, 5]);

        let distinct_key = index.placement(3).map(|p| p.edges().key());
        assert_eq!(distinct_key.map(|k| index.available(k)), Some(0));
    }

    // Marking and unmarking restores every bucket count exactly
    #[test]
    fn test_mark_unused_is_exact_inverse() {
        let mut index = PlacementIndex::build(&builtin_catalog());
        let before = index.counts_snapshot();

        for handle in [0, 9, 42, 143] {
            assert!(index.mark_used(handle).is_ok());
        }
        assert_ne!(index.counts_snapshot(), before);
        assert_eq!(index.placed().to_vec(), vec![0, 2, 10, 35]);

        for handle in [42, 0, 143, 9] {
            assert!(index.mark_unused(handle).is_ok());
        }
        assert_eq!(index.counts_snapshot(), before);
        assert!(index.placed().is_empty());
    }

    #[test]
    fn test_double_marking_is_an_invariant_violation() {
        let mut index = PlacementIndex::build(&PieceCatalog::from_edges([DISTINCT]));

        assert!(index.mark_unused(0).is_err_and(|e| e.is_invariant_violation()));
        assert!(index.mark_used(0).is_ok());
        assert!(index.mark_used(2).is_err_and(|e| e.is_invariant_violation()));
        assert!(index.mark_used(99).is_err_and(|e| e.is_invariant_violation()));
        assert_eq!(index.available(ConstraintKey::EMPTY), 0);
    }

    // Counts must match a direct scan of unplaced placements
    #[test]
    fn test_available_matches_brute_force_count() {
        let mut index = PlacementIndex::build(&builtin_catalog());
        for handle in [4, 20, 77] {
            assert!(index.mark_used(handle).is_ok());
        }

        let mut restrictions = Edges::UNCONSTRAINED;
        restrictions.set(Direction::North, Some(Pattern::Border));
        restrictions.set(Direction::East, Some(Pattern::PinkCircle));

        let expected = index
            .placements()
            .iter()
            .filter(|p| !index.is_placed(p.slot()))
            .filter(|p| {
                Direction::ALL.iter().all(|&d| {
                    restrictions.get(d).is_none_or(|required| p.edge(d) == required)
                })
            })
            .count();

        assert!(expected > 0);
        assert_eq!(index.available(restrictions.key()), expected);
    }
}
