//! Tests for the bundled catalog and the text catalog loader

#[cfg(test)]
mod tests {
    use edgematch::SolverError;
    use edgematch::io::catalog::{BUILTIN_PIECES, builtin_catalog, load_catalog, parse_catalog};
    use edgematch::spatial::pattern::Pattern;
    use std::fs;
    use tempfile::TempDir;

    // A 6×6 puzzle has four corners, sixteen sides and sixteen interior pieces
    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 36);
        assert_eq!(catalog.side_len().ok(), Some(6));

        let border_counts: Vec<usize> = BUILTIN_PIECES
            .iter()
            .map(|edges| edges.iter().filter(|&&p| p == Pattern::Border).count())
            .collect();
        assert_eq!(border_counts.iter().filter(|&&n| n == 2).count(), 4);
        assert_eq!(border_counts.iter().filter(|&&n| n == 1).count(), 16);
        assert_eq!(border_counts.iter().filter(|&&n| n == 0).count(), 16);
    }

    #[test]
    fn test_parse_accepts_names_comments_and_blank_lines() {
        let text = "# corner pieces\n\nBorder Blue Purple Border\n  bluestar border BORDER yellowcircle  \n";
        let catalog = parse_catalog(text).expect("Failed to parse catalog");

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get(1).map(|p| p.edges()),
            Some([
                Pattern::BlueStar,
                Pattern::Border,
                Pattern::Border,
                Pattern::YellowCircle
            ])
        );
        assert_eq!(catalog.get(0).map(|p| p.id().get()), Some(1));
    }

    // Line numbers count every line, including comments
    #[test]
    fn test_parse_reports_line_of_bad_piece() {
        let text = "# header\nBorder Blue Purple Border\nBorder Blue Purple\n";
        assert!(matches!(
            parse_catalog(text),
            Err(SolverError::CatalogParse { line: 3, .. })
        ));

        let unknown = "Border Blue Orange Border";
        let err = parse_catalog(unknown).expect_err("Unknown names must fail");
        assert_eq!(err.to_string(), "Catalog line 1: unknown pattern 'Orange'");
    }

    #[test]
    fn test_parse_rejects_empty_catalog() {
        assert!(matches!(
            parse_catalog("# nothing here\n\n"),
            Err(SolverError::InvalidCatalog { .. })
        ));
    }

    #[test]
    fn test_load_catalog_from_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("pieces.txt");
        fs::write(&path, "Border Border Border Border\n").expect("Failed to write catalog");

        let catalog = load_catalog(&path).expect("Failed to load catalog");
        assert_eq!(catalog.len(), 1);

        let missing = load_catalog(&dir.path().join("missing.txt"));
        assert!(matches!(missing, Err(SolverError::FileSystem { .. })));
    }
}
