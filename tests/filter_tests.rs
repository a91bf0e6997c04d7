//! Rule precedence and default-deny tests

use modsieve::{ModuleDescriptor, ModuleFilter, ModuleOrigin, Rule, RuleChainBuilder, RuleEffect};

fn package(name: &str) -> ModuleDescriptor {
    ModuleDescriptor::new(name, "1.0.0", ModuleOrigin::Package, true)
}

fn project(name: &str) -> ModuleDescriptor {
    ModuleDescriptor::new(name, "1.0.0", ModuleOrigin::Project, true)
}

#[test]
fn exclude_all_admits_nothing() {
    let mut rules = RuleChainBuilder::new();
    rules.exclude_all();
    let filter = ModuleFilter::new(rules.freeze());

    assert!(!filter.admits(&package("Foo")));
    assert!(!filter.admits(&project("Bar")));
}

#[test]
fn later_include_overrides_blanket_exclusion() {
    let mut rules = RuleChainBuilder::new();
    rules.exclude_all().include_named("Foo");
    let filter = ModuleFilter::new(rules.freeze());

    assert!(filter.admits(&package("Foo")));
    // name matching is case-insensitive
    assert!(filter.admits(&package("foo")));
    assert!(filter.admits(&package("FOO")));
    assert!(!filter.admits(&package("Bar")));
}

#[test]
fn last_match_wins_across_three_rules() {
    let mut rules = RuleChainBuilder::new();
    rules.exclude_all().include_named("Foo").exclude_named("foo");
    let filter = ModuleFilter::new(rules.freeze());

    assert!(!filter.admits(&package("Foo")));
    assert!(!filter.admits(&package("Bar")));
}

#[test]
fn unmatched_descriptor_is_denied_by_default() {
    let empty = ModuleFilter::new(RuleChainBuilder::new().freeze());
    assert!(!empty.admits(&package("Foo")));

    // a chain with content still denies what it never matches
    let mut rules = RuleChainBuilder::new();
    rules.include_named("Foo");
    let filter = ModuleFilter::new(rules.freeze());
    assert!(!filter.admits(&package("Bar")));
}

#[test]
fn project_and_framework_carve_outs() {
    let mut rules = RuleChainBuilder::new();
    rules
        .exclude_all()
        .except_project_libraries()
        .except_framework_libraries(&["acme".to_string()]);
    let filter = ModuleFilter::new(rules.freeze());

    assert!(filter.admits(&project("anything")));
    assert!(filter.admits(&package("Acme.Widgets")));
    assert!(filter.admits(&package("ACME-tools")));
    assert!(!filter.admits(&package("serde")));
}

#[test]
fn custom_rules_override_carve_outs() {
    let mut rules = RuleChainBuilder::new();
    rules.exclude_all().except_project_libraries();
    rules.rule(Rule::new("drop-legacy", RuleEffect::Exclude, |d| {
        d.matches_name("legacy")
    }));
    let filter = ModuleFilter::new(rules.freeze());

    assert!(filter.admits(&project("widgets")));
    assert!(!filter.admits(&project("Legacy")));
}

#[test]
fn predicates_can_target_artifactless_descriptors() {
    let mut rules = RuleChainBuilder::new();
    rules.exclude_all().except_project_libraries();
    rules.rule(Rule::new("drop-artifactless", RuleEffect::Exclude, |d| {
        !d.has_loadable_artifact
    }));
    let filter = ModuleFilter::new(rules.freeze());

    let with_artifact = ModuleDescriptor::new("widgets", "1.0.0", ModuleOrigin::Project, true);
    let without_artifact = ModuleDescriptor::new("widgets", "1.0.0", ModuleOrigin::Project, false);
    assert!(filter.admits(&with_artifact));
    assert!(!filter.admits(&without_artifact));
}

#[test]
fn filtering_is_independent_across_descriptors() {
    let mut rules = RuleChainBuilder::new();
    rules.exclude_all().include_named("Foo");
    let filter = ModuleFilter::new(rules.freeze());

    // decision for one descriptor does not depend on others having been seen
    let foo = package("Foo");
    let bar = package("Bar");
    assert!(filter.admits(&foo));
    assert!(!filter.admits(&bar));
    assert!(filter.admits(&foo));
}
