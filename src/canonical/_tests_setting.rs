#[cfg(test)]
mod _tests_setting {
    use super::super::setting::standardize;
    use crate::groups::laue_class::classify;
    use crate::symbol::digest::digest;

    fn conventional(formatted: &str) -> String {
        let symbol = digest(formatted).unwrap();
        let class = classify(symbol.centering, &symbol.operators).unwrap();
        standardize(symbol, class).format()
    }

    // ==================== Monoclinic Settings ====================

    #[test]
    fn test_monoclinic_glide_relabeling() {
        // the a glide trades places with the c glide under the a/c swap
        assert_eq!(conventional("P 21/a"), "P 21/c");
        assert_eq!(conventional("P 2/a"), "P 2/c");
        assert_eq!(conventional("P 21/c"), "P 21/c");
        // the diagonal glide has no better spelling
        assert_eq!(conventional("P 21/n"), "P 21/n");
    }

    #[test]
    fn test_monoclinic_long_spellings() {
        assert_eq!(conventional("P 1 21/c 1"), "P 21/c");
        assert_eq!(conventional("P 1 21/m 1"), "P 21/m");
        assert_eq!(conventional("C 1 2/c 1"), "C 2/c");
        assert_eq!(conventional("P 1 1 2"), "P 2");
        assert_eq!(conventional("P 2 1 1"), "P 2");
        assert_eq!(conventional("P 1 1 2/b"), "P 2/c");
    }

    #[test]
    fn test_monoclinic_centering_relabeling() {
        // unique axis c with a B lattice becomes unique axis b with C
        assert_eq!(conventional("B 1 1 2"), "C 2");
        assert_eq!(conventional("C 2/c"), "C 2/c");
    }

    // ==================== Orthorhombic Settings ====================

    #[test]
    fn test_orthorhombic_screw_placement() {
        // a lone screw belongs on c
        assert_eq!(conventional("P 21 2 2"), "P 2 2 21");
        assert_eq!(conventional("P 2 21 2"), "P 2 2 21");
        assert_eq!(conventional("P 2 2 21"), "P 2 2 21");
        // two screws leave the plain axis on c
        assert_eq!(conventional("P 21 21 2"), "P 21 21 2");
        assert_eq!(conventional("P 21 21 21"), "P 21 21 21");
    }

    #[test]
    fn test_orthorhombic_centering_relabeling() {
        assert_eq!(conventional("A 2 2 2"), "C 2 2 2");
        assert_eq!(conventional("B 2 2 2"), "C 2 2 2");
        assert_eq!(conventional("C 2 2 2"), "C 2 2 2");
        assert_eq!(conventional("I 2 2 2"), "I 2 2 2");
        assert_eq!(conventional("B m m 2"), "A m m 2");
        assert_eq!(conventional("A m m 2"), "A m m 2");
    }

    #[test]
    fn test_orthorhombic_letter_orbits() {
        // all six spellings of the same group land on one representative
        for spelling in [
            "P n m a", "P b n m", "P m n b", "P c m n", "P n a m", "P m c n",
        ] {
            assert_eq!(conventional(spelling), "P m c n", "{spelling}");
        }
        assert_eq!(conventional("P c a 21"), "P b c 21");
        assert_eq!(conventional("P n a 21"), "P b n 21");
        assert_eq!(conventional("P m c 21"), "P m c 21");
        assert_eq!(conventional("I c a b"), "I b c a");
    }

    #[test]
    fn test_glide_on_its_own_axis_blocks_relabeling() {
        // c perpendicular to c is impossible; every relabeling of this
        // spelling produces such a slot, so it comes back untouched
        assert_eq!(conventional("I b a c"), "I b a c");
    }

    // ==================== Principal Collapse ====================

    #[test]
    fn test_long_spellings_collapse() {
        assert_eq!(conventional("P 4 1 1"), "P 4");
        assert_eq!(conventional("P -4 1 1"), "P -4");
        assert_eq!(conventional("P 3 1 1"), "P 3");
        assert_eq!(conventional("R 3 1 1"), "R 3");
        assert_eq!(conventional("P 63 1 1"), "P 63");
        assert_eq!(conventional("P 1 1 1"), "P 1");
        assert_eq!(conventional("P -1 1 1"), "P -1");
        assert_eq!(conventional("P 1 -1 1"), "P -1");
    }

    // ==================== Higher Families ====================

    #[test]
    fn test_high_families_pass_through() {
        assert_eq!(conventional("P 4 2 2"), "P 4 2 2");
        assert_eq!(conventional("P -4 21 c"), "P -4 21 c");
        assert_eq!(conventional("R 3 2"), "R 3 2");
        assert_eq!(conventional("P 63/m m c"), "P 63/m m c");
        assert_eq!(conventional("P a -3"), "P a -3");
        assert_eq!(conventional("F m -3 m"), "F m -3 m");
    }
}
