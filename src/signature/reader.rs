//! Recursive-descent reader for field descriptors and field type signatures.

use crate::desc::types::{GenericType, ParameterizedType, Primitive, TypeArgument, TypeDescription};

use super::error::{SignatureError, SignatureResult};
use super::resolver::TypeResolver;

/// Parses an erased field descriptor such as `[Ljava/lang/String;`.
pub fn read_descriptor<R>(input: &str, resolver: &R) -> SignatureResult<TypeDescription>
where
    R: TypeResolver + ?Sized,
{
    let mut reader = Reader::new(input, resolver);
    let ty = reader.descriptor()?;
    reader.finish()?;
    Ok(ty)
}

/// Parses a field type signature such as `Ljava/util/List<+TT;>;`.
pub fn read_field_signature<R>(input: &str, resolver: &R) -> SignatureResult<GenericType>
where
    R: TypeResolver + ?Sized,
{
    let mut reader = Reader::new(input, resolver);
    let ty = reader.reference_signature()?;
    reader.finish()?;
    Ok(ty)
}

const CLASS_TERMINATORS: [char; 3] = ['<', ';', '.'];

/// Class file limit on array dimensions.
pub const MAX_ARRAY_DIMENSIONS: usize = 255;

/// Limit on nested type argument lists, which are read recursively.
pub const MAX_ARGUMENT_NESTING: usize = 64;

struct Reader<'s, 'r, R: ?Sized> {
    input: &'s str,
    position: usize,
    nesting: usize,
    resolver: &'r R,
}

impl<'s, 'r, R> Reader<'s, 'r, R>
where
    R: TypeResolver + ?Sized,
{
    fn new(input: &'s str, resolver: &'r R) -> Self {
        Self {
            input,
            position: 0,
            nesting: 0,
            resolver,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next(&mut self) -> SignatureResult<char> {
        let next = self.peek().ok_or_else(|| self.unexpected_end())?;
        self.position += next.len_utf8();
        Ok(next)
    }

    fn expect(&mut self, expected: char) -> SignatureResult<()> {
        let position = self.position;
        let found = self.next()?;
        if found == expected {
            Ok(())
        } else {
            Err(self.unexpected(found, position))
        }
    }

    fn identifier(&mut self, terminators: &[char]) -> SignatureResult<&'s str> {
        let input = self.input;
        let start = self.position;
        let rest = &input[start..];
        let length = rest.find(terminators).ok_or_else(|| self.unexpected_end())?;
        if length == 0 {
            return Err(SignatureError::EmptyIdentifier {
                position: start,
                input: self.input.to_owned(),
            });
        }
        self.position += length;
        Ok(&rest[..length])
    }

    fn finish(&self) -> SignatureResult<()> {
        if self.position == self.input.len() {
            Ok(())
        } else {
            Err(SignatureError::TrailingInput {
                position: self.position,
                input: self.input.to_owned(),
            })
        }
    }

    fn descriptor(&mut self) -> SignatureResult<TypeDescription> {
        let dimensions = self.array_dimensions()?;
        let position = self.position;
        let component = match self.next()? {
            'L' => {
                let name = self.identifier(&[';'])?;
                self.expect(';')?;
                self.resolver.resolve_class(&name.replace('/', "."))
            }
            other => TypeDescription::primitive(self.field_primitive(other, position)?),
        };
        Ok((0..dimensions).fold(component, |ty, _| TypeDescription::array_of(ty)))
    }

    /// Consumes leading `[`s and returns how many there were.
    fn array_dimensions(&mut self) -> SignatureResult<usize> {
        let start = self.position;
        let mut dimensions = 0;
        while self.peek() == Some('[') {
            if dimensions == MAX_ARRAY_DIMENSIONS {
                return Err(SignatureError::TooManyDimensions {
                    limit: MAX_ARRAY_DIMENSIONS,
                    position: start,
                    input: self.input.to_owned(),
                });
            }
            self.position += 1;
            dimensions += 1;
        }
        Ok(dimensions)
    }

    /// A primitive that can be the type of a field; `void` cannot.
    fn field_primitive(&self, found: char, position: usize) -> SignatureResult<Primitive> {
        match Primitive::from_descriptor_char(found) {
            Some(Primitive::Void) | None => Err(self.unexpected(found, position)),
            Some(primitive) => Ok(primitive),
        }
    }

    fn reference_signature(&mut self) -> SignatureResult<GenericType> {
        match self.peek() {
            Some('L') => self.class_type_signature(),
            Some('T') => self.type_variable_signature(),
            Some('[') => self.array_signature(),
            Some(other) => Err(self.unexpected(other, self.position)),
            None => Err(self.unexpected_end()),
        }
    }

    fn type_signature(&mut self) -> SignatureResult<GenericType> {
        match self.peek() {
            Some('L' | 'T' | '[') => self.reference_signature(),
            _ => {
                let position = self.position;
                let found = self.next()?;
                Ok(GenericType::raw(self.field_primitive(found, position)?))
            }
        }
    }

    fn array_signature(&mut self) -> SignatureResult<GenericType> {
        let dimensions = self.array_dimensions()?;
        let component = match self.peek() {
            Some('L') => self.class_type_signature()?,
            Some('T') => self.type_variable_signature()?,
            _ => self.type_signature()?,
        };
        Ok((0..dimensions).fold(component, |ty, _| GenericType::array_of(ty)))
    }

    fn type_variable_signature(&mut self) -> SignatureResult<GenericType> {
        self.expect('T')?;
        let symbol = self.identifier(&[';'])?;
        self.expect(';')?;
        Ok(GenericType::variable(symbol, self.resolver.resolve_variable(symbol)))
    }

    fn class_type_signature(&mut self) -> SignatureResult<GenericType> {
        self.expect('L')?;
        let mut name = self.identifier(&CLASS_TERMINATORS)?.replace('/', ".");
        let arguments = self.type_arguments()?;
        let mut current = self.class_type(&name, None, arguments);
        while self.peek() == Some('.') {
            self.next()?;
            let simple = self.identifier(&CLASS_TERMINATORS)?;
            name.push('$');
            name.push_str(simple);
            let arguments = self.type_arguments()?;
            let owner = match current {
                GenericType::Parameterized(_) => Some(current),
                _ => None,
            };
            current = self.class_type(&name, owner, arguments);
        }
        self.expect(';')?;
        Ok(current)
    }

    fn class_type(
        &self,
        name: &str,
        owner: Option<GenericType>,
        arguments: Vec<TypeArgument>,
    ) -> GenericType {
        let raw = self.resolver.resolve_class(name);
        if owner.is_none() && arguments.is_empty() {
            return GenericType::Raw(raw);
        }
        let parameterized = ParameterizedType::new(raw, arguments);
        match owner {
            Some(owner) => parameterized.with_owner(owner).into(),
            None => parameterized.into(),
        }
    }

    fn type_arguments(&mut self) -> SignatureResult<Vec<TypeArgument>> {
        let mut arguments = Vec::new();
        if self.peek() != Some('<') {
            return Ok(arguments);
        }
        if self.nesting == MAX_ARGUMENT_NESTING {
            return Err(SignatureError::NestingTooDeep {
                limit: MAX_ARGUMENT_NESTING,
                position: self.position,
                input: self.input.to_owned(),
            });
        }
        self.next()?;
        self.nesting += 1;
        loop {
            let argument = match self.peek() {
                Some('>') if !arguments.is_empty() => break,
                Some('*') => {
                    self.next()?;
                    TypeArgument::Unbounded
                }
                Some('+') => {
                    self.next()?;
                    TypeArgument::Extends(self.reference_signature()?)
                }
                Some('-') => {
                    self.next()?;
                    TypeArgument::Super(self.reference_signature()?)
                }
                _ => TypeArgument::Exact(self.reference_signature()?),
            };
            arguments.push(argument);
        }
        self.expect('>')?;
        self.nesting -= 1;
        Ok(arguments)
    }

    fn unexpected(&self, found: char, position: usize) -> SignatureError {
        SignatureError::UnexpectedChar {
            found,
            position,
            input: self.input.to_owned(),
        }
    }

    fn unexpected_end(&self) -> SignatureError {
        SignatureError::UnexpectedEnd {
            input: self.input.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Reader coverage for every production plus the malformed inputs loaders are likely to hit.
    use super::*;
    use crate::desc::types::{GenericTypeDescription, Sort};
    use crate::signature::resolver::DetachedResolver;
    use crate::signature::visitor::generic_signature_of;

    fn reparse(signature: &str) -> Option<String> {
        let ty = read_field_signature(signature, &DetachedResolver).expect("valid signature");
        generic_signature_of(&ty)
    }

    #[test]
    fn descriptors_resolve_every_shape() {
        let ty = read_descriptor("[[Ljava/util/List;", &DetachedResolver).expect("valid descriptor");
        assert_eq!(ty.source_code_name(), "java.util.List[][]");
        let int = read_descriptor("J", &DetachedResolver).expect("valid descriptor");
        assert_eq!(int, TypeDescription::primitive(Primitive::Long));
    }

    #[test]
    fn signatures_survive_a_write_after_read() {
        for signature in [
            "Ljava/util/List<Ljava/lang/String;>;",
            "Ljava/util/Map<TK;+Ljava/util/List<-TV;>;>;",
            "La/Outer<TT;>.Inner<*>;",
            "[Ljava/util/List<[I>;",
            "TT;",
            "[[TT;",
        ] {
            assert_eq!(reparse(signature).as_deref(), Some(signature), "{signature} should re-serialize verbatim");
        }
    }

    #[test]
    fn plain_class_signature_reads_as_raw() {
        let ty = read_field_signature("Ljava/lang/String;", &DetachedResolver).expect("valid signature");
        assert_eq!(ty.sort(), Sort::Raw, "No type arguments means no generic structure");
        let nested = read_field_signature("La/Outer.Inner;", &DetachedResolver).expect("valid signature");
        assert_eq!(nested.as_raw_type().source_code_name(), "a.Outer$Inner", "Inner segments join with '$'");
        assert_eq!(nested.sort(), Sort::Raw);
    }

    #[test]
    fn generic_array_of_raw_component_folds() {
        let ty = read_field_signature("[Ljava/lang/String;", &DetachedResolver).expect("valid signature");
        assert_eq!(ty.sort(), Sort::Raw);
        assert_eq!(ty.as_raw_type().descriptor(), "[Ljava/lang/String;");
    }

    #[test]
    fn malformed_inputs_are_rejected() {
        assert!(matches!(
            read_field_signature("Ljava/util/List<>;", &DetachedResolver),
            Err(SignatureError::UnexpectedChar { found: '>', .. })
        ));
        assert!(matches!(
            read_field_signature("Ljava/util/List", &DetachedResolver),
            Err(SignatureError::UnexpectedEnd { .. })
        ));
        assert!(matches!(
            read_descriptor("II", &DetachedResolver),
            Err(SignatureError::TrailingInput { position: 1, .. })
        ));
        assert!(matches!(
            read_field_signature("I", &DetachedResolver),
            Err(SignatureError::UnexpectedChar { found: 'I', position: 0, .. })
        ));
        assert!(matches!(
            read_descriptor("L;", &DetachedResolver),
            Err(SignatureError::EmptyIdentifier { position: 1, .. })
        ));
        assert!(matches!(
            read_descriptor("V", &DetachedResolver),
            Err(SignatureError::UnexpectedChar { found: 'V', position: 0, .. })
        ));
        assert!(matches!(
            read_descriptor("[V", &DetachedResolver),
            Err(SignatureError::UnexpectedChar { found: 'V', position: 1, .. })
        ));
        assert!(matches!(
            read_field_signature("[V", &DetachedResolver),
            Err(SignatureError::UnexpectedChar { found: 'V', position: 1, .. })
        ));
    }

    #[test]
    fn array_dimensions_are_capped() {
        let deepest = format!("{}I", "[".repeat(MAX_ARRAY_DIMENSIONS));
        let ty = read_descriptor(&deepest, &DetachedResolver).expect("255 dimensions are legal");
        assert_eq!(ty.descriptor(), deepest);
        assert!(read_field_signature(&format!("{}TT;", "[".repeat(MAX_ARRAY_DIMENSIONS)), &DetachedResolver).is_ok());

        let too_deep = format!("{}I", "[".repeat(MAX_ARRAY_DIMENSIONS + 1));
        assert!(matches!(
            read_descriptor(&too_deep, &DetachedResolver),
            Err(SignatureError::TooManyDimensions { position: 0, .. })
        ));
        let huge = format!("{}I", "[".repeat(50_000));
        assert!(matches!(
            read_field_signature(&huge, &DetachedResolver),
            Err(SignatureError::TooManyDimensions { .. })
        ), "Huge dimension counts must fail cleanly instead of exhausting the stack");
    }

    #[test]
    fn argument_nesting_is_capped() {
        let nested = |depth: usize| format!("{}La;{};", "La<".repeat(depth), ">;".repeat(depth));
        let legal = nested(MAX_ARGUMENT_NESTING);
        assert_eq!(reparse(&legal).as_deref(), Some(legal.as_str()));
        assert!(matches!(
            read_field_signature(&nested(10_000), &DetachedResolver),
            Err(SignatureError::NestingTooDeep { .. })
        ));
    }
}
