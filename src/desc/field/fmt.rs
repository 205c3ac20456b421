//! Source-like rendering of field descriptions.

use std::fmt;

use crate::desc::types::GenericTypeDescription;

use super::FieldDescription;

/// Renders `[modifiers ]type owner.name`. The modifier prefix is left out when no flag of
/// the field has a source keyword.
pub struct FieldFormatter<'a, D: ?Sized> {
    field: &'a D,
    generic: bool,
}

impl<'a, D> FieldFormatter<'a, D>
where
    D: FieldDescription + ?Sized,
{
    pub fn new(field: &'a D, generic: bool) -> Self {
        Self { field, generic }
    }
}

impl<D> fmt::Display for FieldFormatter<'_, D>
where
    D: FieldDescription + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keywords = self.field.modifiers().to_keyword_string();
        if !keywords.is_empty() {
            write!(f, "{keywords} ")?;
        }
        let field_type = self.field.field_type();
        let type_name = if self.generic {
            field_type.source_code_name()
        } else {
            field_type.as_raw_type().source_code_name()
        };
        write!(
            f,
            "{type_name} {}.{}",
            self.field.declaring_type().source_code_name(),
            self.field.name()
        )
    }
}

pub fn describe_field<D>(field: &D) -> FieldFormatter<'_, D>
where
    D: FieldDescription + ?Sized,
{
    FieldFormatter::new(field, false)
}

pub fn describe_generic_field<D>(field: &D) -> FieldFormatter<'_, D>
where
    D: FieldDescription + ?Sized,
{
    FieldFormatter::new(field, true)
}

#[cfg(test)]
mod tests {
    //! The rendered forms are what diagnostics and logs show to users.
    use super::*;
    use crate::desc::field::LatentField;
    use crate::desc::modifier::Modifiers;
    use crate::desc::types::{ClassType, GenericType, ParameterizedType, Primitive, TypeArgument, TypeDescription};

    fn owner() -> TypeDescription {
        ClassType::new("com.example.Holder", Modifiers::PUBLIC).into()
    }

    #[test]
    fn keywords_prefix_the_erased_form() {
        let field = LatentField::new(
            owner(),
            "names",
            GenericType::Parameterized(ParameterizedType::new(
                ClassType::new("java.util.List", Modifiers::PUBLIC | Modifiers::INTERFACE | Modifiers::ABSTRACT).into(),
                [TypeArgument::Exact(GenericType::raw(TypeDescription::string()))],
            )),
            Modifiers::PRIVATE | Modifiers::STATIC | Modifiers::FINAL,
            Vec::new(),
        );
        assert_eq!(
            describe_field(&field).to_string(),
            "private static final java.util.List com.example.Holder.names",
            "Erased form should drop type arguments"
        );
        assert_eq!(
            describe_generic_field(&field).to_string(),
            "private static final java.util.List<java.lang.String> com.example.Holder.names",
            "Generic form should keep type arguments"
        );
    }

    #[test]
    fn flags_without_keywords_leave_no_prefix() {
        let int = GenericType::raw(TypeDescription::primitive(Primitive::Int));
        let package_private = LatentField::new(owner(), "count", int, Modifiers::empty(), Vec::new());
        assert_eq!(describe_field(&package_private).to_string(), "int com.example.Holder.count");

        let synthetic = LatentField::new(owner(), "this$0", GenericType::raw(owner()), Modifiers::SYNTHETIC, Vec::new());
        assert_eq!(
            describe_field(&synthetic).to_string(),
            "com.example.Holder com.example.Holder.this$0",
            "Synthetic has no keyword and must not leave a stray space"
        );
    }
}
