/// Integration test for the nib pipeline, catalog to Swift source

use std::collections::{BTreeSet, HashSet};

use resgen_codegen_lib::*;

fn view(name: &str) -> Type {
    Type::new(Module::custom("MyKit"), name)
}

fn sample_nibs() -> Vec<ResourceDescriptor> {
    vec![
        ResourceDescriptor::new("Login").with_root(view("LoginView")),
        ResourceDescriptor::new("Cell")
            .with_root(view("CellView"))
            .with_reusable("cellId", view("CellView")),
        ResourceDescriptor::new("login").with_root(view("LoginView")),
        ResourceDescriptor::new("Header-View").with_root(Type::new(Module::custom("UIKit"), "UIView")),
        ResourceDescriptor::new("header view"),
        ResourceDescriptor::new("Multi")
            .with_root(view("A"))
            .with_root(view("B"))
            .with_root(view("C")),
    ]
}

/// Duplicate groups as sets of raw names, for order-free comparison.
fn nested<'a>(root: &'a Struct, name: &str) -> &'a Struct {
    root.structs
        .iter()
        .find(|s| s.name() == name)
        .unwrap_or_else(|| panic!("no struct named {}", name))
}

fn duplicate_name_sets(nibs: &[ResourceDescriptor]) -> BTreeSet<BTreeSet<String>> {
    nib::group_nibs(nibs)
        .duplicates
        .iter()
        .map(|group| group.iter().map(|n| n.name.clone()).collect())
        .collect()
}

#[test]
fn test_login_collision_scenario() {
    let nibs = vec![
        ResourceDescriptor::new("Login").with_root(Type::host("LoginView")),
        ResourceDescriptor::new("login").with_root(Type::host("LoginView")),
    ];

    let grouped = nib::group_nibs(&nibs);
    assert!(grouped.uniques.is_empty());
    assert_eq!(grouped.duplicates.len(), 1);

    let mut warnings: Vec<String> = Vec::new();
    let tree = nib::generate(&nibs, &mut warnings);
    assert!(tree.is_empty());
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("Skipping 2 resources"));
    assert!(warnings[0].ends_with("Login, login"));
}

#[test]
fn test_cell_scenario() {
    let nibs = vec![ResourceDescriptor::new("Cell")
        .with_root(view("CellView"))
        .with_reusable("cellId", view("CellView"))];

    let mut warnings: Vec<String> = Vec::new();
    let tree = nib::generate(&nibs, &mut warnings);
    assert!(warnings.is_empty());

    assert_eq!(tree.internal.structs.len(), 1);
    let cell = nested(&tree.internal, "_Cell");
    assert_eq!(
        cell.implements.iter().map(|c| c.tag()).collect::<Vec<_>>(),
        vec!["nib-resource", "reuse-identifier-holder"]
    );
    assert_eq!(cell.var("identifier").unwrap().getter, "return \"cellId\"");
    assert!(tree.used_modules.contains(&Module::custom("MyKit")));

    assert_eq!(tree.external.vars.len(), 1);
    assert_eq!(tree.external.vars[0].name, "Cell");
}

#[test]
fn test_empty_input() {
    let grouped = nib::group_nibs(&[]);
    assert!(grouped.uniques.is_empty());
    assert!(grouped.duplicates.is_empty());

    let mut warnings: Vec<String> = Vec::new();
    let tree = nib::generate(&[], &mut warnings);
    assert!(tree.is_empty());
    assert!(tree.used_modules.is_empty());
    assert!(warnings.is_empty());
}

#[test]
fn test_reuse_needs_exactly_one_root() {
    let nibs = vec![ResourceDescriptor::new("Pair")
        .with_root(view("A"))
        .with_root(view("B"))
        .with_reusable("pair", view("A"))];

    let tree = nib::generate(&nibs, &mut Vec::<String>::new());
    let pair = nested(&tree.internal, "_Pair");
    assert!(pair.var("identifier").is_none());
    assert!(pair.typealiases.is_empty());
    assert!(tree.used_modules.is_empty());
}

#[test]
fn test_ordinal_views() {
    let nibs = vec![ResourceDescriptor::new("Multi")
        .with_root(view("A"))
        .with_root(view("B"))
        .with_root(view("C"))];

    let tree = nib::generate(&nibs, &mut Vec::<String>::new());
    let multi = nested(&tree.internal, "_Multi");
    let views: Vec<(&str, String)> = multi
        .functions
        .iter()
        .filter(|f| f.name.ends_with("View"))
        .map(|f| (f.name.as_str(), f.return_type.to_string()))
        .collect();
    assert_eq!(
        views,
        vec![
            ("firstView", "A?".to_string()),
            ("secondView", "B?".to_string()),
            ("thirdView", "C?".to_string()),
        ]
    );
    assert!(multi.function("fourthView").is_none());
}

#[test]
fn test_idempotent() {
    let nibs = sample_nibs();
    let first = nib::generate(&nibs, &mut Vec::<String>::new());
    let second = nib::generate(&nibs, &mut Vec::<String>::new());
    assert_eq!(first, second);
    assert_eq!(format!("{:?}", first), format!("{:?}", second));

    let options = swift::SwiftOptions::default();
    assert_eq!(
        swift::render_file(&first, &options).unwrap(),
        swift::render_file(&second, &options).unwrap()
    );
}

#[test]
fn test_duplicate_detection_ignores_order() {
    let nibs = sample_nibs();
    let expected = duplicate_name_sets(&nibs);
    assert_eq!(expected.len(), 2);

    let mut reversed = nibs.clone();
    reversed.reverse();
    assert_eq!(duplicate_name_sets(&reversed), expected);

    for shift in 1..nibs.len() {
        let mut rotated = nibs.clone();
        rotated.rotate_left(shift);
        assert_eq!(duplicate_name_sets(&rotated), expected);

        let mut a: Vec<String> = Vec::new();
        let mut b: Vec<String> = Vec::new();
        nib::generate(&nibs, &mut a);
        nib::generate(&rotated, &mut b);
        let a: BTreeSet<String> = a.into_iter().collect();
        let b: BTreeSet<String> = b.into_iter().collect();
        assert_eq!(a, b);
    }
}

#[test]
fn test_surviving_names_are_unique() {
    let nibs = sample_nibs();
    let grouped = nib::group_nibs(&nibs);

    let keys: HashSet<String> = grouped
        .uniques
        .iter()
        .map(|n| sanitize::sanitized_swift_name(&n.name, true))
        .collect();
    assert_eq!(keys.len(), grouped.uniques.len());

    let survivors: Vec<&str> = grouped.uniques.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(survivors, vec!["Cell", "Multi"]);

    let tree = nib::generate(&nibs, &mut Vec::<String>::new());
    assert!(tree.internal.duplicate_member_names().is_empty());
    assert!(tree.external.duplicate_member_names().is_empty());
    for nested in &tree.internal.structs {
        assert!(nested.duplicate_member_names().is_empty());
    }
}

#[test]
fn test_full_swift_codegen() {
    let catalog = catalog::parse_catalog(
        r#"{
            "nibs": [
                {
                    "name": "Cell",
                    "root_elements": [{"module": "MyKit", "name": "CellView"}],
                    "reusables": [{"identifier": "cellId", "element_type": {"module": "MyKit", "name": "CellView"}}]
                },
                {"name": "Login", "root_elements": [{"module": "UIKit", "name": "UIView"}]},
                {"name": "login", "root_elements": [{"module": "UIKit", "name": "UIView"}]}
            ]
        }"#,
    )
    .unwrap();

    let codegen = swift::SwiftCodegen::default();
    assert_eq!(codegen.language(), "swift");

    let mut warnings: Vec<String> = Vec::new();
    let code = codegen.generate(&catalog, &mut warnings).unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(code.files.len(), 1);
    println!("✅ Swift accessors generated");

    let content = &code.files[0].content;
    assert!(content.contains("import MyKit"));
    assert!(content.contains("static var cell: _R.nib._Cell { return _R.nib._Cell() }"));
    assert!(!content.contains("_Login"));
    assert!(!content.contains("_login"));

    println!("\n📝 Sample generated Swift:");
    println!("---");
    println!("{}", content.lines().take(12).collect::<Vec<_>>().join("\n"));
    println!("...");
}
