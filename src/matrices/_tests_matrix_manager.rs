#[cfg(test)]
mod _tests_matrix_manager {
    use super::super::matrix_manager::*;
    use super::super::symmetry_matrix::{MatrixKind, SymmetryMatrix};
    use crate::symbol::symbol_types::{Direction, Reflection};
    use nalgebra::{Matrix3, Vector3};

    // ==================== Building Rotations ====================

    #[test]
    fn test_axial_two_folds() {
        let two_a = STANDARD.build_rotation(2, Direction::A, 0, false).unwrap();
        assert_eq!(two_a.linear, Matrix3::new(1, 0, 0, 0, -1, 0, 0, 0, -1));
        assert_eq!(two_a.translation, Vector3::zeros());

        let two_c = STANDARD.build_rotation(2, Direction::C, 0, false).unwrap();
        assert_eq!(two_c.linear, Matrix3::new(-1, 0, 0, 0, -1, 0, 0, 0, 1));
    }

    #[test]
    fn test_screw_translations() {
        let four_one = STANDARD.build_rotation(4, Direction::C, 1, false).unwrap();
        assert_eq!(four_one.translation, Vector3::new(0, 0, 3));
        assert_eq!(four_one.kind, MatrixKind::Rotation(4));

        let two_one = STANDARD.build_rotation(2, Direction::A, 1, false).unwrap();
        assert_eq!(two_one.translation, Vector3::new(6, 0, 0));

        let three_two = HEXAGONAL.build_rotation(3, Direction::C, 2, false).unwrap();
        assert_eq!(three_two.translation, Vector3::new(0, 0, 8));
    }

    #[test]
    fn test_rotoinversions_negate_the_linear_part() {
        let minus_four = STANDARD.build_rotation(4, Direction::C, 0, true).unwrap();
        assert_eq!(minus_four.linear, Matrix3::new(0, 1, 0, -1, 0, 0, 0, 0, -1));
        assert_eq!(minus_four.kind, MatrixKind::Rotoinversion(4));

        let minus_three = HEXAGONAL.build_rotation(3, Direction::C, 0, true).unwrap();
        assert_eq!(minus_three.kind, MatrixKind::Rotoinversion(3));
    }

    #[test]
    fn test_frames_reject_foreign_orders() {
        // six-folds live in the hexagonal frame only
        assert!(STANDARD.build_rotation(6, Direction::C, 0, false).is_err());
        assert!(HEXAGONAL.build_rotation(6, Direction::C, 0, false).is_ok());
        // and four-folds in the orthogonal one
        assert!(HEXAGONAL.build_rotation(4, Direction::C, 0, false).is_err());
        assert!(STANDARD.build_rotation(4, Direction::C, 0, false).is_ok());
        // no three-fold along a cube axis
        assert!(STANDARD.build_rotation(3, Direction::C, 0, false).is_err());
    }

    #[test]
    fn test_hexagonal_in_plane_axes() {
        let two_a = HEXAGONAL.build_rotation(2, Direction::A, 0, false).unwrap();
        assert_eq!(two_a.linear, Matrix3::new(1, -1, 0, 0, -1, 0, 0, 0, -1));

        let six = HEXAGONAL.build_rotation(6, Direction::C, 0, false).unwrap();
        assert_eq!(six.linear, Matrix3::new(1, -1, 0, 1, 0, 0, 0, 0, 1));
    }

    // ==================== Building Mirrors ====================

    #[test]
    fn test_glide_translations() {
        let mirror = STANDARD.build_mirror(Direction::C, Reflection::M).unwrap();
        assert_eq!(mirror.linear, Matrix3::new(1, 0, 0, 0, 1, 0, 0, 0, -1));
        assert_eq!(mirror.translation, Vector3::zeros());

        let a_glide = STANDARD.build_mirror(Direction::C, Reflection::A).unwrap();
        assert_eq!(a_glide.translation, Vector3::new(6, 0, 0));

        let b_glide = STANDARD.build_mirror(Direction::A, Reflection::B).unwrap();
        assert_eq!(b_glide.translation, Vector3::new(0, 6, 0));

        let n_glide = STANDARD.build_mirror(Direction::B, Reflection::N).unwrap();
        assert_eq!(n_glide.translation, Vector3::new(6, 0, 6));

        let diamond = STANDARD
            .build_mirror(Direction::AltFaceDiagonal, Reflection::D)
            .unwrap();
        assert_eq!(diamond.translation, Vector3::new(3, 3, 3));

        let tetragonal_d = STANDARD
            .build_mirror(Direction::FaceDiagonal, Reflection::D)
            .unwrap();
        assert_eq!(tetragonal_d.translation, Vector3::new(9, 3, 3));
    }

    #[test]
    fn test_impossible_glides() {
        // a glide never runs normal to its own plane
        assert!(STANDARD.build_mirror(Direction::C, Reflection::C).is_err());
        assert!(STANDARD.build_mirror(Direction::A, Reflection::A).is_err());
        assert!(STANDARD
            .build_mirror(Direction::FaceDiagonal, Reflection::A)
            .is_err());
        // no mirror normal to a body diagonal at all
        assert!(STANDARD
            .build_mirror(Direction::BodyDiagonal, Reflection::M)
            .is_err());
    }

    #[test]
    fn test_hexagonal_c_glides() {
        let c_glide = HEXAGONAL.build_mirror(Direction::A, Reflection::C).unwrap();
        assert_eq!(c_glide.linear, Matrix3::new(-1, 1, 0, 0, 1, 0, 0, 0, 1));
        assert_eq!(c_glide.translation, Vector3::new(0, 0, 6));

        // axial letters other than m and c do not exist here
        assert!(HEXAGONAL.build_mirror(Direction::A, Reflection::B).is_err());
    }

    // ==================== Recognizing Operations ====================

    #[test]
    fn test_round_trips_through_determine() {
        let built = STANDARD.build_rotation(4, Direction::C, 2, false).unwrap();
        let (operator, direction) = STANDARD.determine_operator(&built).unwrap();
        assert_eq!(operator.order, 4);
        assert_eq!(operator.screw, 2);
        assert!(!operator.rotoinversion);
        assert_eq!(direction, Direction::C);

        let built = STANDARD.build_rotation(4, Direction::C, 0, true).unwrap();
        let (operator, _) = STANDARD.determine_operator(&built).unwrap();
        assert!(operator.rotoinversion);
        assert_eq!(operator.order, 4);

        let built = STANDARD.build_mirror(Direction::B, Reflection::N).unwrap();
        let (operator, direction) = STANDARD.determine_operator(&built).unwrap();
        assert_eq!(operator.reflection, Some(Reflection::N));
        assert_eq!(direction, Direction::B);
    }

    #[test]
    fn test_screw_reading_ignores_axis_location() {
        let two_c = Matrix3::new(-1, 0, 0, 0, -1, 0, 0, 0, 1);

        // an in-plane offset moves the axis but adds no pitch
        let shifted = SymmetryMatrix::new(two_c, Vector3::new(6, 6, 0));
        let (operator, _) = STANDARD.determine_operator(&shifted).unwrap();
        assert_eq!(operator.screw, 0);

        let screwed = SymmetryMatrix::new(two_c, Vector3::new(0, 0, 6));
        let (operator, _) = STANDARD.determine_operator(&screwed).unwrap();
        assert_eq!(operator.screw, 1);
    }

    #[test]
    fn test_six_fold_screw_reading() {
        let six = HEXAGONAL.build_rotation(6, Direction::C, 1, false).unwrap();
        let (operator, _) = HEXAGONAL.determine_operator(&six).unwrap();
        assert_eq!(operator.screw, 1);

        // the fifth power of a 61 runs the other way with the residual pitch
        let mut fifth = six.clone();
        for _ in 1..5 {
            fifth = fifth.times(&six);
        }
        let (operator, _) = HEXAGONAL.determine_operator(&fifth).unwrap();
        assert_eq!(operator.order, 6);
        assert_eq!(operator.screw, 5);
    }

    #[test]
    fn test_glide_letter_reading() {
        let mirror_z = Matrix3::new(1, 0, 0, 0, 1, 0, 0, 0, -1);

        let n_glide = SymmetryMatrix::new(mirror_z, Vector3::new(6, 6, 0));
        let (operator, _) = STANDARD.determine_operator(&n_glide).unwrap();
        assert_eq!(operator.reflection, Some(Reflection::N));

        let diamond = SymmetryMatrix::new(mirror_z, Vector3::new(9, 3, 0));
        let (operator, _) = STANDARD.determine_operator(&diamond).unwrap();
        assert_eq!(operator.reflection, Some(Reflection::D));

        // a quarter step along one axis only fits no letter
        let stray = SymmetryMatrix::new(mirror_z, Vector3::new(3, 0, 0));
        let (operator, _) = STANDARD.determine_operator(&stray).unwrap();
        assert_eq!(operator.reflection, Some(Reflection::E));
    }

    #[test]
    fn test_diagonal_planes_read_half_steps_as_c() {
        // mirror normal to [011] with a half step along a
        let linear = Matrix3::new(1, 0, 0, 0, 0, -1, 0, -1, 0);
        let glide = SymmetryMatrix::new(linear, Vector3::new(6, 0, 0));
        let (operator, direction) = STANDARD.determine_operator(&glide).unwrap();
        assert_eq!(operator.reflection, Some(Reflection::C));
        assert_eq!(direction, Direction::FaceDiagonal);
    }

    #[test]
    fn test_diagonal_g_glides() {
        // mirror normal to [1-10] gliding a half step along [110]
        let linear = Matrix3::new(0, 1, 0, 1, 0, 0, 0, 0, 1);
        let glide = SymmetryMatrix::new(linear, Vector3::new(6, 6, 0));
        let (operator, direction) = STANDARD.determine_operator(&glide).unwrap();
        assert_eq!(operator.reflection, Some(Reflection::G));
        assert_eq!(direction, Direction::AltFaceDiagonal);
    }

    #[test]
    fn test_foreign_matrices_are_rejected() {
        let hex_six = SymmetryMatrix::new(Matrix3::new(1, -1, 0, 1, 0, 0, 0, 0, 1), Vector3::zeros());
        assert!(STANDARD.determine_operator(&hex_six).is_err());

        let cubic_three = SymmetryMatrix::new(Matrix3::new(0, 0, 1, 1, 0, 0, 0, 1, 0), Vector3::zeros());
        assert!(HEXAGONAL.determine_operator(&cubic_three).is_err());
    }

    // ==================== Screw Steps ====================

    #[test]
    fn test_screw_step_pitches() {
        assert_eq!(screw_step(2, 1), 6);
        assert_eq!(screw_step(3, 1), 4);
        assert_eq!(screw_step(3, 2), 8);
        assert_eq!(screw_step(4, 1), 3);
        assert_eq!(screw_step(4, 3), 9);
        assert_eq!(screw_step(6, 1), 2);
        assert_eq!(screw_step(6, 5), 10);
    }
}
