use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use classdesc::desc::types::Primitive;
use classdesc::{FieldDescription, GenericType, LatentField, ModifierReviewable, Modifiers, TypeDescription};

use crate::common::fixture;

fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn loaded_and_latent_fields_are_interchangeable() {
    let fixture = fixture();
    let loaded = fixture.pool.field(fixture.container, "count").expect("count field");
    let latent = LatentField::new(
        fixture.pool.describe(fixture.container),
        "count",
        GenericType::raw(TypeDescription::primitive(Primitive::Boolean)),
        Modifiers::PUBLIC | Modifiers::VOLATILE,
        Vec::new(),
    );

    assert_eq!(loaded, latent, "Equality ignores type and modifiers");
    assert_eq!(latent, loaded, "Equality is symmetric across variants");
    assert_eq!(loaded.hash_code(), latent.hash_code());
    assert_eq!(hash_of(&loaded), hash_of(&latent), "Hash impls must agree with equality");

    let as_dyn: [&dyn FieldDescription; 2] = [&loaded, &latent];
    assert!(as_dyn[0] == as_dyn[1], "Trait objects compare by name and owner too");
    assert_eq!(hash_of(as_dyn[0]), hash_of(as_dyn[1]));
}

#[test]
fn owner_and_name_both_participate() {
    let fixture = fixture();
    let count = fixture.pool.field(fixture.container, "count").expect("count field");
    let shared = fixture.pool.field(fixture.container, "shared").expect("shared field");
    assert_ne!(count, shared);

    let elsewhere = LatentField::new(
        fixture.pool.describe(fixture.neighbour),
        "count",
        GenericType::raw(TypeDescription::primitive(Primitive::Long)),
        Modifiers::empty(),
        Vec::new(),
    );
    assert_ne!(count, elsewhere, "Same name on another type is another field");
}

#[test]
fn hash_code_follows_the_documented_formula() {
    let fixture = fixture();
    let count = fixture.pool.field(fixture.container, "count").expect("count field");
    let owner = fixture.pool.describe(fixture.container).hash_code();
    let expected = owner.wrapping_add(31i32.wrapping_mul(classdesc::desc::hash::string_hash_code("count")));
    assert_eq!(count.hash_code(), expected);
}

#[test]
fn to_token_preserves_the_generic_type() {
    let fixture = fixture();
    for field in &fixture.pool.declared_fields(fixture.container) {
        let token = field.to_token();
        assert_eq!(token.name(), field.name());
        assert_eq!(token.modifiers(), field.modifiers());
        assert_eq!(token.field_type(), &*field.field_type().resolve(), "NoOp must not change the type");
    }
}

#[test]
fn generic_signature_exists_only_for_generic_types() {
    let fixture = fixture();
    let fields = fixture.pool.declared_fields(fixture.container);
    let signatures: Vec<_> = fields.iter().map(|field| (field.name().to_owned(), field.generic_signature())).collect();
    assert_eq!(
        signatures,
        [
            ("shared".to_owned(), None),
            ("secret".to_owned(), None),
            ("items".to_owned(), Some("Ljava/util/List<TT;>;".to_owned())),
            ("count".to_owned(), None),
        ]
    );
    let items = fields.named("items").expect("items field");
    assert_eq!(items.descriptor(), "Ljava/util/List;", "Descriptors are always erased");
}
