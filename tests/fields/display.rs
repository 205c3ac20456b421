use classdesc::desc::annotation::AnnotationDescription;
use classdesc::desc::types::ClassType;
use classdesc::{FieldDescription, Modifiers};

use crate::common::fixture;

#[test]
fn loaded_fields_render_like_source() {
    let fixture = fixture();
    let field = |name: &str| fixture.pool.field(fixture.container, name).expect("field");

    assert_eq!(field("shared").to_string(), "public static int com.example.Container.shared");
    assert_eq!(field("count").to_string(), "long com.example.Container.count", "No prefix without keywords");
    assert_eq!(
        field("items").to_erased_string(),
        "protected java.util.List com.example.Container.items"
    );
    assert_eq!(
        field("items").to_generic_string(),
        "protected java.util.List<T> com.example.Container.items"
    );
}

#[test]
fn annotations_are_read_through() {
    let mut fixture = fixture();
    let id = fixture.pool.field(fixture.container, "secret").expect("secret field").id();
    let nullable = ClassType::new("org.example.Nullable", Modifiers::PUBLIC | Modifiers::ANNOTATION | Modifiers::INTERFACE);
    fixture.pool.annotate_field(id, AnnotationDescription::new(nullable.into()));

    let secret = fixture.pool.loaded(id);
    let rendered: Vec<String> = secret.declared_annotations().iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["@org.example.Nullable"]);
}
