//! Visitor that serializes a [`GenericType`] into its binary generic signature.

use crate::desc::types::{
    GenericType, GenericTypeDescription, GenericTypeVisitor, ParameterizedType, TypeArgument,
    TypeDescription, TypeKind, TypeVariable,
};

use super::writer::SignatureWriter;

#[derive(Debug, Default)]
pub struct SignatureVisitor {
    writer: SignatureWriter,
}

impl SignatureVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_signature(self) -> String {
        self.writer.finish()
    }

    fn write_raw(&mut self, raw: &TypeDescription) {
        match raw.kind() {
            TypeKind::Primitive(primitive) => self.writer.visit_base_type(primitive.descriptor_char()),
            TypeKind::Array(component) => {
                self.writer.visit_array_type();
                self.write_raw(component);
            }
            TypeKind::Class(_) => {
                self.writer.visit_class_type(&raw.internal_name());
                self.writer.visit_end();
            }
        }
    }

    fn write_ownable(&mut self, parameterized: &ParameterizedType) {
        match parameterized.owner() {
            Some(GenericType::Parameterized(owner)) => {
                self.write_ownable(owner);
                self.writer.visit_inner_class_type(&parameterized.raw().simple_name());
            }
            _ => self.writer.visit_class_type(&parameterized.raw().internal_name()),
        }
        for argument in parameterized.arguments() {
            self.write_argument(argument);
        }
    }

    fn write_argument(&mut self, argument: &TypeArgument) {
        match argument {
            TypeArgument::Unbounded => self.writer.visit_unbounded_type_argument(),
            TypeArgument::Extends(bound) => {
                self.writer.visit_type_argument('+');
                bound.accept(self);
            }
            TypeArgument::Super(bound) => {
                self.writer.visit_type_argument('-');
                bound.accept(self);
            }
            TypeArgument::Exact(ty) => {
                self.writer.visit_type_argument('=');
                ty.accept(self);
            }
        }
    }
}

impl GenericTypeVisitor for SignatureVisitor {
    type Output = ();

    fn on_raw_type(&mut self, raw: &TypeDescription) {
        self.write_raw(raw);
    }

    fn on_parameterized_type(&mut self, parameterized: &ParameterizedType) {
        self.write_ownable(parameterized);
        self.writer.visit_end();
    }

    fn on_type_variable(&mut self, variable: &TypeVariable) {
        self.writer.visit_type_variable(variable.symbol());
    }

    fn on_generic_array(&mut self, component: &GenericType) {
        self.writer.visit_array_type();
        component.accept(self);
    }
}

/// Signature of `ty`, or `None` when the type is raw and the descriptor says everything.
pub fn generic_signature_of<T>(ty: &T) -> Option<String>
where
    T: GenericTypeDescription + ?Sized,
{
    if ty.sort().is_raw() {
        return None;
    }
    let mut visitor = SignatureVisitor::new();
    ty.accept(&mut visitor);
    Some(visitor.into_signature())
}
