use std::collections::HashSet;

use super::*;

#[test]
fn every_age_group_has_templates() {
    let counts: Vec<usize> = AgeGroup::ALL.iter().map(|g| templates_for(*g).len()).collect();
    assert_eq!(counts, vec![22, 22, 22, 17]);
}

#[test]
fn templates_belong_to_requested_group() {
    for group in AgeGroup::ALL {
        for t in templates_for(group) {
            assert_eq!(t.age_group, group);
            assert!(t.id.starts_with(&format!("fallback-{}-", group.label())), "{}", t.id);
        }
    }
}

#[test]
fn ids_are_unique() {
    let mut seen = HashSet::new();
    for group in AgeGroup::ALL {
        for t in templates_for(group) {
            assert!(seen.insert(t.id.clone()), "duplicate id {}", t.id);
        }
    }
}

#[test]
fn first_toddler_template_resolves_to_asset_path() {
    let t = &templates_for(AgeGroup::Toddler)[0];
    assert_eq!(t.id, "fallback-3-5-kitten");
    assert_eq!(t.name, "Cute Kitten");
    assert_eq!(t.image_url, "/assets/generated/coloring-3-5-01-kitten.dim_2048x2048.png");
}

#[test]
fn teen_catalog_has_its_own_owl() {
    let teen = templates_for(AgeGroup::Teen);
    let owl = teen.iter().find(|t| t.id == "fallback-13-15-owl").unwrap();
    assert_eq!(owl.name, "Wise Owl");
    assert!(templates_for(AgeGroup::Toddler).iter().all(|t| t.id != "fallback-3-5-owl"));
}
