use classdesc::desc::types::{Erasure, Substitution, TypeArgument};
use classdesc::{FieldDescription, GenericType, GenericTypeDescription, LatentField, TypeDescription};

use crate::common::fixture;

#[test]
fn substituted_tokens_keep_their_identity() {
    let fixture = fixture();
    let items = fixture.pool.field(fixture.container, "items").expect("items field");
    let mut bind = Substitution::new().bind("T", GenericType::raw(TypeDescription::string()));

    let token = items.accept(&mut bind);
    assert_eq!(token, items.to_token(), "Tokens match by name across substitution");

    let rebound = LatentField::from_token(fixture.pool.describe(fixture.subclass), token);
    assert_eq!(rebound.generic_signature().as_deref(), Some("Ljava/util/List<Ljava/lang/String;>;"));
    assert_eq!(rebound.descriptor(), items.descriptor(), "Substitution never changes the erasure");
    assert_ne!(rebound, items, "The rebound field lives on another type");
    assert_eq!(items.generic_signature().as_deref(), Some("Ljava/util/List<TT;>;"), "The source is untouched");
}

#[test]
fn list_rewrite_then_reattach() {
    let fixture = fixture();
    let fields = fixture.pool.declared_fields(fixture.container);
    let tokens = fields.accept(&mut Substitution::new().bind("T", GenericType::raw(TypeDescription::object())));
    tokens.validate(&fixture.pool.describe(fixture.subclass)).expect("token list is declarable");

    let latent = tokens.into_latent(&fixture.pool.describe(fixture.container));
    assert_eq!(latent.len(), fields.len());
    for (loaded, rebuilt) in fields.iter().zip(&latent) {
        assert_eq!(loaded, rebuilt, "Reattached to the same owner, every field is the same field");
    }
    let items = latent.named("items").expect("items field");
    match &*items.field_type().resolve() {
        GenericType::Parameterized(parameterized) => {
            assert_eq!(parameterized.arguments(), [TypeArgument::Exact(GenericType::raw(TypeDescription::object()))]);
        }
        other => panic!("expected a parameterized type, got {other:?}"),
    }
}

#[test]
fn erasure_produces_raw_tokens() {
    let fixture = fixture();
    let items = fixture.pool.field(fixture.container, "items").expect("items field");
    let erased = items.accept(&mut Erasure);
    assert!(erased.field_type().sort().is_raw());
    assert_eq!(erased.field_type().as_raw_type(), items.field_type().as_raw_type());
}
