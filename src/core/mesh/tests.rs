use super::*;
use approx::assert_relative_eq;

fn assert_binding_symmetric(mesh: &Mesh, a: TangentId) {
    let ta = mesh.tangent(a).expect("Tangente A existiert");
    let b = ta.paired_tangent().expect("Partner existiert");
    let tb = mesh.tangent(b).expect("Tangente B existiert");

    match (ta.bound_tangent(), tb.bound_tangent()) {
        (Some(x), Some(y)) => {
            assert_eq!(x, b);
            assert_eq!(y, a);
        }
        (None, None) => {}
        other => panic!("Asymmetrische Bindung: {other:?}"),
    }
}

#[test]
fn test_zero_division_count_is_rejected() {
    assert!(Mesh::new(0).is_err());
}

#[test]
fn test_division_count_above_maximum_is_rejected() {
    assert!(Mesh::new(MAX_DIVISION_COUNT + 1).is_err());
    assert!(Mesh::new(MAX_DIVISION_COUNT).is_ok());
}

#[test]
fn test_point_count_and_grid_positions() {
    for d in [1u32, 2, 3, 7] {
        let mesh = Mesh::new(d).expect("Mesh gueltig");
        let side = d as usize + 1;
        assert_eq!(mesh.point_count(), side * side);
        assert_eq!(mesh.tangent_count(), side * side * 4);

        for cp in mesh.points() {
            let GridIndex { i, j } = cp.grid_index();
            assert_relative_eq!(cp.position().x, i as f32 / d as f32);
            assert_relative_eq!(cp.position().y, j as f32 / d as f32);
        }

        let first = mesh.point_at(0, 0).expect("Ecke existiert");
        let last = mesh.point_at(d as usize, d as usize).expect("Ecke existiert");
        assert_eq!(first.position(), Vec2::ZERO);
        assert_eq!(last.position(), Vec2::ONE);
    }
}

#[test]
fn test_two_division_center_point() {
    let mesh = Mesh::new(2).expect("Mesh gueltig");
    assert_eq!(mesh.point_count(), 9);

    let center = mesh.point_at(1, 1).expect("Mitte existiert");
    assert_eq!(center.position(), Vec2::new(0.5, 0.5));
    assert_eq!(center.color(), Rgb::new(0.5, 0.5, 0.5));
}

#[test]
fn test_row_major_order_matches_grid_index() {
    let mesh = Mesh::new(3).expect("Mesh gueltig");
    for (i, row) in mesh.rows().enumerate() {
        assert_eq!(row.len(), 4);
        for (j, cp) in row.iter().enumerate() {
            assert_eq!(cp.grid_index(), GridIndex { i, j });
            assert_eq!(mesh.point_id_at(i, j), Some(cp.id()));
        }
    }
    assert!(mesh.point_at(4, 0).is_none());
    assert!(mesh.point_at(0, 4).is_none());
}

#[test]
fn test_default_colors_follow_position() {
    let mesh = Mesh::new(4).expect("Mesh gueltig");
    let cp = mesh.point_at(3, 1).expect("Punkt existiert");
    assert_eq!(cp.color(), Rgb::new(0.75, 0.25, 0.25));
}

#[test]
fn test_default_tangents_use_inverse_division_length() {
    let mesh = Mesh::new(4).expect("Mesh gueltig");
    let cp = mesh.point_at(2, 2).expect("Punkt existiert");

    for tangent in mesh.tangents_of(cp.id()) {
        assert_eq!(tangent.owner(), cp.id());
        let expected = tangent.axis().unit() * 0.25;
        assert_eq!(tangent.offset(), expected);
        assert!(tangent.is_visible());
        assert!(!tangent.is_bound());
    }
}

#[test]
fn test_every_tangent_is_paired_with_opposite_slot_on_same_point() {
    let mesh = Mesh::new(2).expect("Mesh gueltig");
    for cp in mesh.points() {
        for slot in TangentSlot::ALL {
            let id = cp.tangent(slot);
            let tangent = mesh.tangent(id).expect("Tangente existiert");
            let partner_id = tangent.paired_tangent().expect("Partner gesetzt");
            let partner = mesh.tangent(partner_id).expect("Partner existiert");
            assert_eq!(partner.owner(), cp.id());
            assert_eq!(partner.slot(), slot.opposite());
            assert_eq!(partner.paired_tangent(), Some(id));
        }
    }
}

#[test]
fn test_toggle_binding_is_symmetric_after_every_toggle() {
    let mut mesh = Mesh::new(2).expect("Mesh gueltig");
    let cp = mesh.point_at(1, 1).expect("Punkt existiert").clone();
    let a = cp.tangent(TangentSlot::HorizontalPositive);
    let b = cp.tangent(TangentSlot::HorizontalNegative);

    assert_eq!(mesh.toggle_bind_tangents(a), Some(true));
    assert_binding_symmetric(&mesh, a);
    assert_eq!(mesh.tangent(b).and_then(|t| t.bound_tangent()), Some(a));

    // Umschalten vom Partner aus löst beide Seiten
    assert_eq!(mesh.toggle_bind_tangents(b), Some(false));
    assert_binding_symmetric(&mesh, a);
    assert!(!mesh.tangent(a).expect("A").is_bound());

    assert_eq!(mesh.toggle_bind_tangents(a), Some(true));
    assert_binding_symmetric(&mesh, b);
}

#[test]
fn test_toggle_without_partner_changes_nothing() {
    let mut mesh = Mesh::new(1).expect("Mesh gueltig");
    let id = TangentId(0);
    mesh.tangents[0].paired = None;
    let before = mesh.clone();

    assert_eq!(mesh.toggle_bind_tangents(id), None);
    assert_eq!(mesh, before);
}

#[test]
fn test_toggle_unknown_tangent_is_none() {
    let mut mesh = Mesh::new(1).expect("Mesh gueltig");
    assert_eq!(mesh.toggle_bind_tangents(TangentId(999)), None);
}

#[test]
fn test_move_bound_tangent_mirrors_derived_offset() {
    let mut mesh = Mesh::new(2).expect("Mesh gueltig");
    let cp = mesh.point_at(0, 0).expect("Punkt existiert").clone();
    let a = cp.tangent(TangentSlot::HorizontalPositive);
    let b = cp.tangent(TangentSlot::HorizontalNegative);
    mesh.toggle_bind_tangents(a);

    let offset = mesh
        .move_tangent(a, Vec2::new(50.0, 0.0), 100.0)
        .expect("Bewegung gueltig");

    assert_eq!(offset, Vec2::new(0.5, 0.0));
    let ta = mesh.tangent(a).expect("A");
    let tb = mesh.tangent(b).expect("B");
    assert_eq!(ta.offset(), Vec2::new(0.5, 0.0));
    assert_eq!(tb.offset(), Vec2::new(0.5, 0.0));
    assert_eq!(ta.screen_offset(100.0), Vec2::new(50.0, 0.0));
    assert_eq!(tb.screen_offset(100.0), Vec2::new(-50.0, 0.0));
}

#[test]
fn test_move_bound_tangent_equals_direct_set_on_partner() {
    let mut bound = Mesh::new(3).expect("Mesh gueltig");
    let cp = bound.point_at(1, 2).expect("Punkt existiert").clone();
    let a = cp.tangent(TangentSlot::VerticalNegative);
    let b = cp.tangent(TangentSlot::VerticalPositive);
    bound.toggle_bind_tangents(a);

    let raw = Vec2::new(-13.0, 42.0);
    let derived = bound.move_tangent(a, raw, 80.0).expect("Bewegung gueltig");

    let mut direct = Mesh::new(3).expect("Mesh gueltig");
    direct.set_tangent(b, derived);

    assert_eq!(
        bound.tangent(b).expect("B").offset(),
        direct.tangent(b).expect("B").offset()
    );
}

#[test]
fn test_move_unbound_tangent_leaves_partner_untouched() {
    let mut mesh = Mesh::new(2).expect("Mesh gueltig");
    let cp = mesh.point_at(1, 0).expect("Punkt existiert").clone();
    let a = cp.tangent(TangentSlot::HorizontalNegative);
    let b = cp.tangent(TangentSlot::HorizontalPositive);
    let before = mesh.tangent(b).expect("B").offset();

    let offset = mesh
        .move_tangent(a, Vec2::new(30.0, 10.0), 100.0)
        .expect("Bewegung gueltig");

    // Negative Richtung dreht das Vorzeichen
    assert_relative_eq!(offset.x, -0.3);
    assert_relative_eq!(offset.y, -0.1);
    assert_eq!(mesh.tangent(b).expect("B").offset(), before);
}

#[test]
fn test_move_tangent_rejects_non_positive_scale() {
    let mut mesh = Mesh::new(1).expect("Mesh gueltig");
    let before = mesh.clone();
    assert!(mesh.move_tangent(TangentId(0), Vec2::ONE, 0.0).is_none());
    assert_eq!(mesh, before);
}

#[test]
fn test_reset_tangents_per_axis() {
    let mut mesh = Mesh::new(2).expect("Mesh gueltig");
    let cp = mesh.point_at(1, 1).expect("Punkt existiert").clone();
    for id in cp.tangent_ids() {
        mesh.set_tangent(*id, Vec2::new(9.0, 9.0));
    }

    assert!(mesh.reset_tangents(cp.id(), Some(TangentAxis::Horizontal)));
    for id in cp.tangents_on(TangentAxis::Horizontal) {
        assert_eq!(mesh.tangent(id).expect("T").offset(), Vec2::new(0.5, 0.0));
    }
    for id in cp.tangents_on(TangentAxis::Vertical) {
        assert_eq!(mesh.tangent(id).expect("T").offset(), Vec2::new(9.0, 9.0));
    }

    assert!(mesh.reset_tangents(cp.id(), None));
    for id in cp.tangents_on(TangentAxis::Vertical) {
        assert_eq!(mesh.tangent(id).expect("T").offset(), Vec2::new(0.0, 0.5));
    }
}

#[test]
fn test_toggle_handle_visibility_flips_both_handles_of_axis() {
    let mut mesh = Mesh::new(2).expect("Mesh gueltig");
    let cp = mesh.point_at(0, 1).expect("Punkt existiert").clone();

    assert_eq!(
        mesh.toggle_handle_visibility(cp.id(), TangentAxis::Vertical),
        Some(false)
    );
    for id in cp.tangents_on(TangentAxis::Vertical) {
        assert!(!mesh.tangent(id).expect("T").is_visible());
    }
    for id in cp.tangents_on(TangentAxis::Horizontal) {
        assert!(mesh.tangent(id).expect("T").is_visible());
    }

    assert_eq!(
        mesh.toggle_handle_visibility(cp.id(), TangentAxis::Vertical),
        Some(true)
    );
}

#[test]
fn test_pick_point_returns_nearest_within_radius() {
    let mesh = Mesh::new(2).expect("Mesh gueltig");
    let viewport = ViewportRect::new(10.0, 10.0, 200.0, 200.0);

    let hit = mesh.pick_point(Vec2::new(112.0, 108.0), &viewport, 8.0);
    assert_eq!(hit, mesh.point_id_at(1, 1));

    assert!(mesh
        .pick_point(Vec2::new(60.0, 60.0), &viewport, 8.0)
        .is_none());
}

#[test]
fn test_pick_tangent_ignores_hidden_handles() {
    let mut mesh = Mesh::new(2).expect("Mesh gueltig");
    let viewport = ViewportRect::new(0.0, 0.0, 400.0, 400.0);
    let cp = mesh.point_at(1, 1).expect("Punkt existiert").clone();

    // Mitte (200, 200), Handle rechts bei +0.5 * 100 px
    let handle = Vec2::new(250.0, 200.0);
    assert_eq!(
        mesh.pick_tangent(cp.id(), handle, &viewport, 6.0, 100.0),
        Some(cp.tangent(TangentSlot::HorizontalPositive))
    );

    mesh.toggle_handle_visibility(cp.id(), TangentAxis::Horizontal);
    assert!(mesh
        .pick_tangent(cp.id(), handle, &viewport, 6.0, 100.0)
        .is_none());
}
