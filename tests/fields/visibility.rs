use classdesc::{ClassPool, FieldDefinition, FieldDescription, Modifiers};

use crate::common::{fixture, stranger};

#[test]
fn access_matrix_from_each_requester() {
    let fixture = fixture();
    let pool = &fixture.pool;
    let visible = |requester: &classdesc::TypeDescription| -> Vec<String> {
        pool.declared_fields(fixture.container)
            .visible_to(requester)
            .iter()
            .map(|field| field.name().to_owned())
            .collect()
    };

    assert_eq!(
        visible(&pool.describe(fixture.container)),
        ["shared", "secret", "items", "count"],
        "The declaring type sees everything"
    );
    assert_eq!(
        visible(&pool.describe(fixture.subclass)),
        ["shared", "items"],
        "Subclasses in other packages see public and protected"
    );
    assert_eq!(
        visible(&pool.describe(fixture.neighbour)),
        ["shared", "items", "count"],
        "Same package sees everything but private"
    );
    assert_eq!(visible(&stranger()), ["shared"], "Unrelated types only see public");
}

#[test]
fn hidden_declaring_type_hides_public_fields() {
    let mut pool = ClassPool::new();
    let hidden = pool
        .define("com.example.Hidden")
        .field(FieldDefinition::new("open", Modifiers::PUBLIC, "Z"))
        .finish()
        .expect("define hidden");
    let neighbour = pool.define("com.example.Peer").finish().expect("define peer");

    let open = pool.field(hidden, "open").expect("open field");
    assert!(!open.is_visible_to(&stranger()), "A public field of a package-private type is not reachable");
    assert!(open.is_visible_to(&pool.describe(neighbour)));
}

#[test]
fn arrays_and_primitives_as_requesters() {
    let fixture = fixture();
    let secret = fixture.pool.field(fixture.container, "secret").expect("secret field");
    let shared = fixture.pool.field(fixture.container, "shared").expect("shared field");
    let primitive = classdesc::TypeDescription::primitive(classdesc::desc::types::Primitive::Int);
    assert!(shared.is_visible_to(&primitive));
    assert!(!secret.is_visible_to(&primitive));
}
