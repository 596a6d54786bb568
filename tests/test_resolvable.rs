//! Resolvability of type names across a small documented namespace tree.
//!
//! ```text
//! Outer            (module)
//!   Inner          (class)
//! Other            (module)
//!   Inner          (class)
//!   Deep           (module)
//!     Leaf         (class)
//! Shapes           (module)
//!   String         (class, shadows the builtin)
//! App              (module)
//!   VERSION        (constant)
//!   Config         (class)
//!   Services       (module)
//!     Config       (class)
//!     Signup       (class)
//!       #perform   (method)
//! ```

use rstest::{fixture, rstest};
use smol_str::SmolStr;
use sord::{BuiltinError, KindSet, ObjectKind, Registry, Resolvability, Resolver, ResolverConfig};

fn builtins() -> Result<Vec<SmolStr>, BuiltinError> {
    Ok(["String", "Integer", "Hash"].into_iter().map(SmolStr::new_static).collect())
}

fn resolver() -> Resolver<fn() -> Result<Vec<SmolStr>, BuiltinError>> {
    Resolver::with_provider(builtins as fn() -> Result<Vec<SmolStr>, BuiltinError>)
}

#[fixture]
fn registry() -> Registry {
    let mut reg = Registry::new();
    for (path, kind) in [
        ("Outer", ObjectKind::Module),
        ("Outer::Inner", ObjectKind::Class),
        ("Other", ObjectKind::Module),
        ("Other::Inner", ObjectKind::Class),
        ("Other::Deep", ObjectKind::Module),
        ("Other::Deep::Leaf", ObjectKind::Class),
        ("Shapes", ObjectKind::Module),
        ("Shapes::String", ObjectKind::Class),
        ("App", ObjectKind::Module),
        ("App::VERSION", ObjectKind::Constant),
        ("App::Config", ObjectKind::Class),
        ("App::Services", ObjectKind::Module),
        ("App::Services::Config", ObjectKind::Class),
        ("App::Services::Signup", ObjectKind::Class),
        ("App::Services::Signup#perform", ObjectKind::Method),
    ] {
        reg.define_path(path, kind).unwrap();
    }
    reg
}

fn at(reg: &Registry, path: &str) -> sord::ObjectId {
    reg.at(path).unwrap_or_else(|| panic!("no object at {path}"))
}

// ============================================================================
// DECISION TABLE
// ============================================================================

#[rstest]
// Names on the enclosing path are always found
#[case("Outer::Inner", "Inner", true)]
#[case("Outer::Inner", "Outer", true)]
#[case("Other::Deep", "Other", true)]
// One structural match through the scope chain
#[case("Outer", "Inner", true)]
#[case("Outer", "Other::Inner", true)]
#[case("Other", "Deep::Leaf", true)]
#[case("Other::Deep::Leaf", "Inner", true)]
#[case("App::Services::Signup", "perform", true)]
// Nothing reachable
#[case("Outer", "Deep::Leaf", false)]
#[case("", "Inner", false)]
#[case("Outer", "Missing", false)]
#[case("App", "VERSION", false)]
// Same name reachable from two levels of the chain
#[case("App::Services::Signup", "Config", false)]
#[case("App::Services", "Config", false)]
#[case("App", "Config", true)]
// Builtins
#[case("Outer", "String", true)]
#[case("", "Integer", true)]
#[case("Shapes", "String", false)]
#[case("Outer", "Shapes::String", true)]
fn test_resolvable(
    registry: Registry,
    #[case] context: &str,
    #[case] name: &str,
    #[case] expected: bool,
) {
    let resolver = resolver();
    let ctx = at(&registry, context);
    assert_eq!(
        resolver.resolvable(&registry, name, ctx),
        expected,
        "`{name}` at `{context}`: {:?}",
        resolver.classify(&registry, name, ctx)
    );
}

// ============================================================================
// OUTCOMES
// ============================================================================

#[rstest]
fn test_fast_accept_ignores_index(registry: Registry) {
    // `Other` being a builtin would otherwise make it shadowed
    let resolver = resolver().with_config(ResolverConfig::new().with_builtin("Other"));
    let deep = at(&registry, "Other::Deep");

    assert_eq!(resolver.classify(&registry, "Other", deep), Resolvability::InScope);
    assert_eq!(resolver.classify(&registry, "Deep", deep), Resolvability::InScope);
}

#[rstest]
fn test_qualified_name_skips_fast_accept(registry: Registry) {
    let resolver = resolver();
    let inner = at(&registry, "Outer::Inner");

    assert_eq!(
        resolver.classify(&registry, "Outer::Inner", inner),
        Resolvability::Unique("Outer::Inner".into())
    );
}

#[rstest]
fn test_ambiguity_reports_every_match(registry: Registry) {
    let resolver = resolver();
    let signup = at(&registry, "App::Services::Signup");

    assert_eq!(
        resolver.classify(&registry, "Config", signup),
        Resolvability::Ambiguous(vec!["App::Services::Config".into(), "App::Config".into()])
    );
}

#[rstest]
fn test_builtin_without_shadow(registry: Registry) {
    let resolver = resolver();
    let outer = at(&registry, "Outer");
    assert_eq!(resolver.classify(&registry, "String", outer), Resolvability::Builtin);
}

#[rstest]
fn test_builtin_with_single_shadow_is_not_resolvable(registry: Registry) {
    let resolver = resolver();
    let shapes = at(&registry, "Shapes");

    let outcome = resolver.classify(&registry, "String", shapes);
    assert_eq!(outcome, Resolvability::Shadowed(vec!["Shapes::String".into()]));
    assert!(!outcome.is_resolvable());
}

#[test]
fn test_builtin_with_several_shadows_is_not_resolvable() {
    let mut reg = Registry::new();
    for (path, kind) in [
        ("A", ObjectKind::Module),
        ("A::String", ObjectKind::Class),
        ("A::B", ObjectKind::Module),
        ("A::B::String", ObjectKind::Class),
    ] {
        reg.define_path(path, kind).unwrap();
    }
    let resolver = resolver();
    let b = at(&reg, "A::B");

    let outcome = resolver.classify(&reg, "String", b);
    assert_eq!(
        outcome,
        Resolvability::Shadowed(vec!["A::B::String".into(), "A::String".into()])
    );
    assert!(!resolver.resolvable(&reg, "String", b));
}

#[rstest]
fn test_unknown_differs_from_shadowed(registry: Registry) {
    let resolver = resolver();
    let outer = at(&registry, "Outer");
    assert_eq!(resolver.classify(&registry, "Missing", outer), Resolvability::Unknown);
}

#[rstest]
fn test_lookup_kinds_from_config(registry: Registry) {
    let app = at(&registry, "App");
    let signup = at(&registry, "App::Services::Signup");

    let with_constants = resolver().with_config(ResolverConfig::new().with_lookup_kinds(KindSet::all()));
    assert!(with_constants.resolvable(&registry, "VERSION", app));

    let no_methods = resolver().with_config(
        ResolverConfig::new().with_lookup_kinds(KindSet::CLASS | KindSet::MODULE),
    );
    assert!(!no_methods.resolvable(&registry, "perform", signup));
}

#[rstest]
fn test_display_name(registry: Registry) {
    let resolver = resolver();
    let outer = at(&registry, "Outer");

    // Resolvable as written
    assert_eq!(resolver.display_name(&registry, "Other::Inner", outer), "Other::Inner");
    // Not resolvable, but the index knows exactly one Leaf
    assert_eq!(resolver.display_name(&registry, "Leaf", outer), "Other::Deep::Leaf");
    // Not resolvable and ambiguous globally
    assert_eq!(resolver.display_name(&registry, "Config", at(&registry, "App::Services")), "Config");
}

// ============================================================================
// INDEX LIFECYCLE
// ============================================================================

#[rstest]
fn test_paths_for_suffix_matching(registry: Registry) {
    let resolver = resolver();

    assert_eq!(resolver.paths_for(&registry, "Inner"), vec!["Outer::Inner", "Other::Inner"]);
    assert_eq!(resolver.paths_for(&registry, "Other::Inner"), vec!["Other::Inner"]);
    assert_eq!(resolver.paths_for(&registry, "String"), vec!["Shapes::String", "String"]);
    assert!(resolver.paths_for(&registry, "Deep").is_empty(), "modules are not indexed");
}

#[rstest]
fn test_path_for_uniqueness(registry: Registry) {
    let resolver = resolver();

    assert_eq!(resolver.path_for(&registry, "Inner"), None);
    assert_eq!(resolver.path_for(&registry, "Leaf").as_deref(), Some("Other::Deep::Leaf"));
    assert_eq!(resolver.path_for(&registry, "Hash").as_deref(), Some("Hash"));
    assert_eq!(resolver.path_for(&registry, "String"), None);
}

#[rstest]
fn test_prepare_is_idempotent(registry: Registry) {
    let resolver = resolver();
    let first = resolver.prepare(&registry);
    let second = resolver.prepare(&registry);
    assert_eq!(*first, *second);
}

#[rstest]
fn test_clear_picks_up_new_classes(mut registry: Registry) {
    let resolver = resolver();
    resolver.prepare(&registry);

    registry.define_path("Outer::Widget", ObjectKind::Class).unwrap();
    assert!(resolver.paths_for(&registry, "Widget").is_empty(), "index is still cached");

    resolver.clear();
    assert_eq!(resolver.paths_for(&registry, "Widget"), vec!["Outer::Widget"]);
}
