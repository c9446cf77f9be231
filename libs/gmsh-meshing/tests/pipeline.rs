use glam::DVec3;
use gmsh_meshing::{boundary_of, points_of, FieldAllocator, MathEvalArgs, Meshing};
use gmsh_model::Geometry;

/// Build a unit square surface and return it with its boundary curves.
fn square(geo: &mut Geometry) -> (gmsh_model::Surface, Vec<gmsh_model::Curve>) {
    let corners: Vec<_> = [
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
    ]
    .iter()
    .map(|&x| geo.add_point(x, Some(0.1)))
    .collect();
    let curves: Vec<_> = (0..4)
        .map(|i| geo.add_line(&corners[i], &corners[(i + 1) % 4]))
        .collect();
    let curve_loop = geo.add_curve_loop(&curves).unwrap();
    (geo.add_plane_surface(&curve_loop), curves)
}

#[test]
fn generates_refined_boundary_script() {
    let mut geo = Geometry::new();
    let mut fields = FieldAllocator::new();
    let (surface, _) = square(&mut geo);

    // Refine towards the surface boundary, coarsen away from it.
    let edge_curves = boundary_of(&[surface.into()]).unwrap();
    let near = geo
        .add_distance_field(&mut fields, &[edge_curves.into()], None)
        .unwrap();
    let sizing = geo
        .add_math_eval_field(
            &mut fields,
            "0.01 + 0.1 * {}",
            MathEvalArgs::Positional(&[&near]),
        )
        .unwrap();
    geo.set_background_field(&sizing);
    geo.achieve_coherence();

    let code = geo.get_code();
    let background = format!("Background Field = {};", sizing.id());
    assert!(code.contains(&background));
    assert!(code.ends_with("Coherence;"));
}

#[test]
fn field_blocks_appear_in_registration_order() {
    let mut geo = Geometry::new();
    let mut fields = FieldAllocator::new();
    let (_, curves) = square(&mut geo);

    let near_edges = geo
        .add_distance_field(
            &mut fields,
            &[curves[0].clone().into(), curves[2].clone().into()],
            Some(30),
        )
        .unwrap();
    let coarse = geo
        .add_math_eval_field(&mut fields, "0.4", MathEvalArgs::None)
        .unwrap();
    let combined = geo.add_min_field(&mut fields, &[&near_edges, &coarse]);
    geo.set_background_field(&combined);

    let code = geo.get_code();
    let near_pos = code.find("Field[0] = Distance;").unwrap();
    let coarse_pos = code.find("Field[1] = MathEval;").unwrap();
    let min_pos = code.find("Field[2] = Min;").unwrap();
    assert!(near_pos < coarse_pos && coarse_pos < min_pos);
    assert!(code.contains("Field[0].EdgesList = {l0, l2};"));
    assert!(code.contains("Field[0].NNodesByEdge = 30;"));
    assert!(code.contains("Field[2].FieldsList = {0, 1};"));
}

#[test]
fn points_of_embeds_in_distance_field() {
    let mut geo = Geometry::new();
    let mut fields = FieldAllocator::new();
    let (surface, _) = square(&mut geo);

    let anchors = points_of(&surface);
    let field = geo
        .add_distance_field(&mut fields, &[anchors.into()], Some(12))
        .unwrap();
    assert!(field
        .code()
        .contains("NodesList = {PointsOf{Surface{s0};}};"));
}

#[test]
fn entity_statements_precede_field_statements() {
    let mut geo = Geometry::new();
    let mut fields = FieldAllocator::new();
    let (_, curves) = square(&mut geo);
    geo.add_distance_field(&mut fields, &[curves[0].clone().into()], None)
        .unwrap();

    let code = geo.get_code();
    let last_entity = code.rfind("Line Loop(ll0)").unwrap();
    let first_field = code.find("Field[0]").unwrap();
    assert!(last_entity < first_field);
}
