//! Incremental writer for the class file generic signature grammar.

use smallvec::SmallVec;

/// Appends signature fragments in visiting order. Each `visit_class_type` must be closed by
/// `visit_end`; type arguments opened after a class type are closed with it.
#[derive(Debug, Default)]
pub struct SignatureWriter {
    buffer: String,
    /// One entry per open class type: whether its `<` has been written.
    arguments_open: SmallVec<[bool; 4]>,
}

impl SignatureWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visit_base_type(&mut self, descriptor: char) {
        self.buffer.push(descriptor);
    }

    pub fn visit_type_variable(&mut self, symbol: &str) {
        self.buffer.push('T');
        self.buffer.push_str(symbol);
        self.buffer.push(';');
    }

    pub fn visit_array_type(&mut self) {
        self.buffer.push('[');
    }

    pub fn visit_class_type(&mut self, internal_name: &str) {
        self.buffer.push('L');
        self.buffer.push_str(internal_name);
        self.arguments_open.push(false);
    }

    pub fn visit_inner_class_type(&mut self, simple_name: &str) {
        self.end_arguments();
        self.buffer.push('.');
        self.buffer.push_str(simple_name);
    }

    /// `?`
    pub fn visit_unbounded_type_argument(&mut self) {
        self.open_arguments();
        self.buffer.push('*');
    }

    /// Starts a bounded argument: `+` (extends), `-` (super) or `=` (exact). The bound type
    /// is visited next.
    pub fn visit_type_argument(&mut self, wildcard: char) {
        self.open_arguments();
        if wildcard != '=' {
            self.buffer.push(wildcard);
        }
    }

    pub fn visit_end(&mut self) {
        self.end_arguments();
        self.arguments_open.pop();
        self.buffer.push(';');
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn finish(self) -> String {
        self.buffer
    }

    fn open_arguments(&mut self) {
        if let Some(open) = self.arguments_open.last_mut() {
            if !*open {
                *open = true;
                self.buffer.push('<');
            }
        }
    }

    fn end_arguments(&mut self) {
        if let Some(open) = self.arguments_open.last_mut() {
            if *open {
                *open = false;
                self.buffer.push('>');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    //! Writer sequences mirror what a visitor emits for common field types.
    use super::*;

    #[test]
    fn writes_parameterized_class() {
        let mut writer = SignatureWriter::new();
        writer.visit_class_type("java/util/Map");
        writer.visit_type_argument('=');
        writer.visit_class_type("java/lang/String");
        writer.visit_end();
        writer.visit_type_argument('+');
        writer.visit_type_variable("V");
        writer.visit_end();
        assert_eq!(writer.finish(), "Ljava/util/Map<Ljava/lang/String;+TV;>;");
    }

    #[test]
    fn inner_class_closes_owner_arguments() {
        let mut writer = SignatureWriter::new();
        writer.visit_class_type("a/Outer");
        writer.visit_type_argument('=');
        writer.visit_type_variable("T");
        writer.visit_inner_class_type("Inner");
        writer.visit_unbounded_type_argument();
        writer.visit_end();
        assert_eq!(writer.as_str(), "La/Outer<TT;>.Inner<*>;", "Owner arguments close before the dot");
    }

    #[test]
    fn arrays_prefix_components() {
        let mut writer = SignatureWriter::new();
        writer.visit_array_type();
        writer.visit_array_type();
        writer.visit_base_type('I');
        assert_eq!(writer.finish(), "[[I");
    }
}
