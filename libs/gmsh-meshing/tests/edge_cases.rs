use glam::DVec3;
use gmsh_meshing::{
    boundary_of, CurveSet, EntitySet, FieldAllocator, Field, FieldNumbering, MathEvalArgs,
    Meshing, MeshingError, PointSet,
};
use gmsh_model::Geometry;

#[test]
fn boundary_of_point_is_a_domain_error() {
    let mut geo = Geometry::new();
    let p = geo.add_point(DVec3::ZERO, None);
    match boundary_of(&[p.into()]) {
        Err(MeshingError::PointBoundary) => {}
        other => panic!("expected PointBoundary, got {other:?}"),
    }
}

#[test]
fn boundary_of_nested_curve_sets() {
    let mut geo = Geometry::new();
    let a = geo.add_point(DVec3::ZERO, None);
    let b = geo.add_point(DVec3::X, None);
    let c = geo.add_point(DVec3::Y, None);
    let ab = geo.add_line(&a, &b);
    let bc = geo.add_line(&b, &c);
    let inner = CurveSet::new(vec![bc.into()]);

    let set = boundary_of(&[ab.into(), inner.into()]).unwrap();
    match set {
        EntitySet::Points(points) => {
            assert_eq!(points.code(), "Boundary{Line{l0, l1};}");
        }
        other => panic!("expected point set, got {other:?}"),
    }
}

#[test]
fn mixed_dimensionality_input_is_rejected() {
    let mut geo = Geometry::new();
    let a = geo.add_point(DVec3::ZERO, None);
    let b = geo.add_point(DVec3::X, None);
    let line = geo.add_line(&a, &b);
    match boundary_of(&[a.into(), line.into()]) {
        Err(MeshingError::Unclassified(_)) => {}
        other => panic!("expected Unclassified, got {other:?}"),
    }
}

#[test]
fn point_set_rejects_curve_operand() {
    let mut geo = Geometry::new();
    let a = geo.add_point(DVec3::ZERO, None);
    let b = geo.add_point(DVec3::X, None);
    let line = geo.add_line(&a, &b);
    match PointSet::try_from_operands(&[a.into(), line.into()]) {
        Err(MeshingError::TypeConstraint { found, .. }) => assert_eq!(found, "curve"),
        other => panic!("expected TypeConstraint, got {other:?}"),
    }
}

#[test]
fn two_documents_number_fields_independently() {
    let mut first = Geometry::new();
    let mut second = Geometry::new();
    let mut fields = FieldAllocator::new();

    let f1 = first.add_min_field(&mut fields, &[]);
    let f2 = second.add_min_field(&mut fields, &[]);
    assert_eq!(f1.id(), 0);
    assert_eq!(f2.id(), 0);
}

#[test]
fn construction_numbering_preserves_allocator_ids_across_documents() {
    let mut geo = Geometry::new();
    let mut fields = FieldAllocator::new();

    let first = Field::min(&mut fields, &[]);
    let second = Field::min(&mut fields, &[]);
    let second = geo.add_field_numbered(second, FieldNumbering::Construction);
    let first = geo.add_field_numbered(first, FieldNumbering::Construction);
    // Registration order does not renumber; the allocator's ids stand.
    assert_eq!(first.id(), 0);
    assert_eq!(second.id(), 1);
    let code = geo.get_code();
    let second_pos = code.find("Field[1] = Min;").unwrap();
    let first_pos = code.find("Field[0] = Min;").unwrap();
    assert!(second_pos < first_pos);
}

#[test]
fn math_eval_arity_mismatch_is_rejected() {
    let mut fields = FieldAllocator::new();
    match Field::math_eval(&mut fields, "{} + {}", MathEvalArgs::None) {
        Err(MeshingError::BadExpression(_)) => {}
        other => panic!("expected BadExpression, got {other:?}"),
    }
}

#[test]
fn empty_operand_list_resolves_to_empty_boundary() {
    let set = boundary_of(&[]).unwrap();
    assert_eq!(set.code(), "Boundary{Line{};}");
}
