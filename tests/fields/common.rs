use classdesc::desc::types::ClassType;
use classdesc::{ClassId, ClassPool, FieldDefinition, Modifiers, TypeDescription};

/// Pool holding `com.example.Container<T>` with one field per access level, a subclass in
/// another package and an unrelated class in the container's package.
pub struct Fixture {
    pub pool: ClassPool,
    pub container: ClassId,
    pub subclass: ClassId,
    pub neighbour: ClassId,
}

pub fn fixture() -> Fixture {
    let mut pool = ClassPool::new();
    let container = pool
        .define("com.example.Container")
        .modifiers(Modifiers::PUBLIC)
        .type_variable("T", TypeDescription::object())
        .field(FieldDefinition::new("shared", Modifiers::PUBLIC | Modifiers::STATIC, "I"))
        .field(FieldDefinition::new("secret", Modifiers::PRIVATE, "Ljava/lang/String;"))
        .field(
            FieldDefinition::new("items", Modifiers::PROTECTED, "Ljava/util/List;")
                .signature("Ljava/util/List<TT;>;"),
        )
        .field(FieldDefinition::new("count", Modifiers::empty(), "J"))
        .finish()
        .expect("define container");
    let subclass = pool
        .define("org.other.Special")
        .modifiers(Modifiers::PUBLIC)
        .super_class(container)
        .finish()
        .expect("define subclass");
    let neighbour = pool
        .define("com.example.Neighbour")
        .finish()
        .expect("define neighbour");
    Fixture {
        pool,
        container,
        subclass,
        neighbour,
    }
}

pub fn stranger() -> TypeDescription {
    ClassType::new("org.other.Stranger", Modifiers::PUBLIC).into()
}
