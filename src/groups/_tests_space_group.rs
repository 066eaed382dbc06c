#[cfg(test)]
mod _tests_space_group {
    use nalgebra::Vector3;

    use super::super::analyzer::derive_generators;
    use super::super::laue_class::classify;
    use super::super::space_group::*;
    use crate::matrices::symmetry_matrix::{MatrixKind, SymmetryMatrix};
    use crate::symbol::digest::digest;
    use crate::symbol::symbol_types::{Centering, Direction, Reflection};

    fn build(formatted: &str) -> SpaceGroup {
        let mut symbol = digest(formatted).unwrap();
        let class = classify(symbol.centering, &symbol.operators).unwrap();
        SpaceGroup::generate(&mut symbol, class).unwrap()
    }

    fn order_of(formatted: &str) -> usize {
        build(formatted).operations.len()
    }

    fn generation_fails(formatted: &str) {
        let mut symbol = digest(formatted).unwrap();
        let class = classify(symbol.centering, &symbol.operators).unwrap();
        assert!(
            SpaceGroup::generate(&mut symbol, class).is_err(),
            "{formatted} should not generate"
        );
    }

    // ==================== Group Orders ====================

    #[test]
    fn test_low_symmetry_orders() {
        assert_eq!(order_of("P 1"), 1);
        assert_eq!(order_of("P -1"), 2);
        assert_eq!(order_of("P 2"), 2);
        assert_eq!(order_of("C 2"), 4);
        assert_eq!(order_of("P 21/c"), 4);
        assert_eq!(order_of("P m m m"), 8);
        assert_eq!(order_of("P 21 21 21"), 4);
        assert_eq!(order_of("C 2 2 21"), 8);
        assert_eq!(order_of("F 2 2 2"), 16);
    }

    #[test]
    fn test_principal_axis_orders() {
        assert_eq!(order_of("P 4 21 2"), 8);
        assert_eq!(order_of("P 41/a"), 16);
        assert_eq!(order_of("R 3"), 9);
        assert_eq!(order_of("R -3 c"), 36);
        assert_eq!(order_of("P 61 2 2"), 12);
    }

    #[test]
    fn test_cubic_orders() {
        assert_eq!(order_of("P 2 3"), 12);
        assert_eq!(order_of("I 21 3"), 24);
        assert_eq!(order_of("P 43 3 2"), 24);
        // the largest group the engine admits
        assert_eq!(order_of("F m -3 m"), 192);
    }

    // ==================== Closure ====================

    #[test]
    fn test_operations_form_a_group() {
        let group = build("P 21 21 21");
        assert!(group.operations.contains(&SymmetryMatrix::identity()));
        for left in &group.operations {
            for right in &group.operations {
                assert!(group.operations.contains(&left.times(right)));
            }
        }
    }

    #[test]
    fn test_screw_triplets() {
        let group = build("P 21 21 21");
        let triplets: Vec<String> = group
            .operations
            .iter()
            .map(|operation| operation.to_triplet())
            .collect();
        assert_eq!(triplets.len(), 4);
        assert!(triplets.contains(&"x,y,z".to_string()));
        assert!(triplets.contains(&"x+1/2,-y,-z".to_string()));
        assert!(triplets.contains(&"-x,y+1/2,-z+1/2".to_string()));
        assert!(triplets.contains(&"-x+1/2,-y+1/2,z+1/2".to_string()));
    }

    // ==================== Rejections ====================

    #[test]
    fn test_centering_outside_family() {
        // the family tables list the centerings that occur; anything else
        // is refused before generation starts
        generation_fails("C 4");
        generation_fails("I 1");
        generation_fails("I 2/m");
        generation_fails("R 2");
    }

    // ==================== Extraction ====================

    #[test]
    fn test_extraction_buckets() {
        let group = build("P 21/c");
        let extraction = group.extract().unwrap();
        assert!(extraction.has_inversion);
        assert!(extraction.translations.is_empty());

        // the screw and the glide both point along b
        let along_b = extraction.bucket(Direction::B);
        assert_eq!(along_b.len(), 2);
        assert!(along_b
            .iter()
            .any(|(operator, _)| operator.order == 2 && operator.screw == 1));
        assert!(along_b
            .iter()
            .any(|(operator, _)| operator.reflection == Some(Reflection::C)));
        assert!(extraction.bucket(Direction::A).is_empty());
        assert!(extraction.bucket(Direction::C).is_empty());
    }

    #[test]
    fn test_extraction_translations() {
        let extraction = build("C 2").extract().unwrap();
        assert_eq!(extraction.translations, vec![Vector3::new(6, 6, 0)]);
        assert!(!extraction.has_inversion);

        let extraction = build("F 2 2 2").extract().unwrap();
        assert_eq!(extraction.translations.len(), 3);
        assert_eq!(
            derive_centering(&extraction.translations).unwrap(),
            Centering::F
        );

        let extraction = build("R 3").extract().unwrap();
        assert_eq!(extraction.translations.len(), 2);
        assert_eq!(
            derive_centering(&extraction.translations).unwrap(),
            Centering::R
        );
    }

    #[test]
    fn test_operators_can_outgrow_their_centering() {
        // a 41 screw and an a glide together produce the body translation,
        // so the lattice read back off the group is I rather than P
        let group = build("P 41/a");
        let extraction = group.extract().unwrap();
        assert_eq!(
            derive_centering(&extraction.translations).unwrap(),
            Centering::I
        );
    }

    // ==================== Generator Derivation ====================

    #[test]
    fn test_derivation_writes_slot_directions() {
        let mut symbol = digest("P 21 21 21").unwrap();
        let class = classify(symbol.centering, &symbol.operators).unwrap();
        let generators = derive_generators(&mut symbol, class).unwrap();
        assert_eq!(generators.len(), 2);
        assert_eq!(symbol.operators[0].direction, Some(Direction::A));
        assert_eq!(symbol.operators[1].direction, Some(Direction::B));
        assert_eq!(symbol.operators[2].direction, Some(Direction::C));
    }

    #[test]
    fn test_triclinic_generators() {
        let mut symbol = digest("P 1").unwrap();
        let class = classify(symbol.centering, &symbol.operators).unwrap();
        assert!(derive_generators(&mut symbol, class).unwrap().is_empty());

        let mut symbol = digest("P -1").unwrap();
        let class = classify(symbol.centering, &symbol.operators).unwrap();
        let generators = derive_generators(&mut symbol, class).unwrap();
        assert_eq!(generators.len(), 1);
        assert_eq!(generators[0].kind, MatrixKind::Inversion);
    }

    // ==================== Centering Derivation ====================

    #[test]
    fn test_derive_centering_from_translations() {
        assert_eq!(derive_centering(&[]).unwrap(), Centering::P);
        assert_eq!(
            derive_centering(&[Vector3::new(0, 6, 6)]).unwrap(),
            Centering::A
        );
        assert_eq!(
            derive_centering(&[Vector3::new(6, 0, 6)]).unwrap(),
            Centering::B
        );
        assert_eq!(
            derive_centering(&[Vector3::new(6, 6, 0)]).unwrap(),
            Centering::C
        );
        assert_eq!(
            derive_centering(&[Vector3::new(6, 6, 6)]).unwrap(),
            Centering::I
        );
        assert_eq!(
            derive_centering(&[
                Vector3::new(0, 6, 6),
                Vector3::new(6, 0, 6),
                Vector3::new(6, 6, 0)
            ])
            .unwrap(),
            Centering::F
        );
        assert_eq!(
            derive_centering(&[Vector3::new(8, 4, 4), Vector3::new(4, 8, 8)]).unwrap(),
            Centering::R
        );
    }

    #[test]
    fn test_derive_centering_rejections() {
        // not a conventional lattice vector at all
        assert!(derive_centering(&[Vector3::new(1, 2, 3)]).is_err());
        // one face vector plus the body vector matches no lattice
        assert!(derive_centering(&[Vector3::new(0, 6, 6), Vector3::new(6, 6, 6)]).is_err());
        // a lone rhombohedral vector without its inverse
        assert!(derive_centering(&[Vector3::new(8, 4, 4)]).is_err());
    }
}
