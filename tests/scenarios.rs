// tests/scenarios.rs
//
// End-to-end walks through a session with the built-in catalogs.

use dev_compass::normalize;
use dev_compass::{
    compute_axis, Catalog, CatalogItem, CatalogSet, Category, CompassSession, SelectionSet,
};

const EPS: f64 = 1e-6;

fn session() -> CompassSession {
    CompassSession::new(CatalogSet::builtin())
}

#[test]
fn empty_selection_sits_at_center() {
    let s = session();
    let p = s.position();
    assert_eq!(p.editor_axis, 0.0);
    assert_eq!(p.language_axis, 0.0);
    assert_eq!(compute_axis(&SelectionSet::new(), &Catalog::default_editors()), 0.0);
}

#[test]
fn single_item_extremes() {
    let cat = Catalog::from_items(vec![
        CatalogItem::new("hundred", "Hundred", 100.0),
        CatalogItem::new("zero", "Zero", 0.0),
        CatalogItem::new("fifty", "Fifty", 50.0),
    ])
    .unwrap();
    for (id, expected) in [("hundred", 1.0), ("zero", -1.0), ("fifty", 0.0)] {
        let set = normalize::add(&SelectionSet::new(), id);
        assert!((compute_axis(&set, &cat) - expected).abs() < EPS, "{id}");
    }
}

#[test]
fn scenario_single_vscode() {
    let mut s = session();
    let p = s.add_item(Category::Editors, "vscode");
    assert!((p.editor_axis - 0.8).abs() < EPS);
    assert_eq!(s.selection(Category::Editors).shares(), vec![100.0]);
}

#[test]
fn scenario_vscode_and_vim_split_evenly() {
    let mut s = session();
    s.add_item(Category::Editors, "vscode");
    let p = s.add_item(Category::Editors, "vim");
    assert_eq!(s.selection(Category::Editors).shares(), vec![50.0, 50.0]);
    assert!((p.editor_axis - 0.1).abs() < EPS);
}

#[test]
fn scenario_removing_vim_restores_single_value() {
    let mut s = session();
    s.add_item(Category::Editors, "vscode");
    s.add_item(Category::Editors, "vim");
    let p = s.remove_item(Category::Editors, "vim");
    assert_eq!(s.selection(Category::Editors).shares(), vec![100.0]);
    assert!((p.editor_axis - 0.8).abs() < EPS);
}

#[test]
fn scenario_three_items_equal_thirds() {
    let editors = Catalog::from_items(vec![
        CatalogItem::new("vscode", "VS Code", 90.0),
        CatalogItem::new("vim", "Vim", 20.0),
        CatalogItem::new("fleet", "Fleet", 60.0),
    ])
    .unwrap();
    let mut s = CompassSession::new(CatalogSet::new(editors, Catalog::default_languages()));

    s.add_item(Category::Editors, "vscode");
    // Manual drag before the third add must be discarded by the reset.
    s.add_item(Category::Editors, "vim");
    s.set_breakpoints(Category::Editors, &[90.0]);
    let p = s.add_item(Category::Editors, "fleet");

    for share in s.selection(Category::Editors).shares() {
        assert!((share - 100.0 / 3.0).abs() < 1e-2);
    }
    let expected = (30.0 + 20.0 / 3.0 + 20.0 - 50.0) / 50.0;
    assert!((p.editor_axis - expected).abs() < 1e-2);
}

#[test]
fn scenario_collapsed_breakpoints_give_everything_to_first() {
    let mut s = session();
    s.add_item(Category::Languages, "java");
    s.add_item(Category::Languages, "bash");
    let p = s.set_breakpoints(Category::Languages, &[70.0, 70.0]);

    let shares = s.selection(Category::Languages).shares();
    assert!((shares[0] - 100.0).abs() < EPS);
    assert!(shares[1].abs() < EPS);
    assert!((p.language_axis - 0.8).abs() < EPS);
}

#[test]
fn slider_drag_moves_axis_and_handles() {
    let mut s = session();
    s.add_item(Category::Languages, "rust");
    s.add_item(Category::Languages, "csharp");
    assert_eq!(s.breakpoints(Category::Languages), vec![50.0]);

    let p = s.set_breakpoints(Category::Languages, &[25.0]);
    // 0.25 * 40 + 0.75 * 95 = 81.25
    assert!((p.language_axis - 0.625).abs() < EPS);
    assert_eq!(s.breakpoints(Category::Languages), vec![25.0]);

    let segs = s.selection(Category::Languages).segments();
    assert_eq!(segs[1].item_id, "csharp");
    assert!((segs[1].start - 25.0).abs() < EPS);
    assert!((segs[1].end - 100.0).abs() < EPS);
}

#[test]
fn quadrant_and_breakdown_reflect_profile() {
    let mut s = session();
    s.add_item(Category::Editors, "intellij");
    s.add_item(Category::Languages, "bash");
    let p = s.position();
    assert_eq!(p.quadrant().label(), "Authoritarian Left");

    let b = s.breakdown(Category::Editors);
    assert_eq!(b.contributions.len(), 1);
    assert_eq!(b.contributions[0].display_name, "IntelliJ IDEA");
    assert!((b.axis - 1.0).abs() < EPS);
}
