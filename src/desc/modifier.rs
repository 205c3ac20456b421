//! Access flags shared by types and members plus the predicates derived from them.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// JVM access flags as they appear in a class file. The empty set is the default mask.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u16 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        const VOLATILE = 0x0040;
        const TRANSIENT = 0x0080;
        const INTERFACE = 0x0200;
        const ABSTRACT = 0x0400;
        const SYNTHETIC = 0x1000;
        const ANNOTATION = 0x2000;
        const ENUM = 0x4000;
    }
}

/// Flags that render as source keywords, in canonical declaration order.
const KEYWORDS: [(Modifiers, &str); 9] = [
    (Modifiers::PUBLIC, "public"),
    (Modifiers::PROTECTED, "protected"),
    (Modifiers::PRIVATE, "private"),
    (Modifiers::ABSTRACT, "abstract"),
    (Modifiers::STATIC, "static"),
    (Modifiers::FINAL, "final"),
    (Modifiers::TRANSIENT, "transient"),
    (Modifiers::VOLATILE, "volatile"),
    (Modifiers::INTERFACE, "interface"),
];

impl Modifiers {
    pub const EMPTY_MASK: Self = Self::empty();

    /// Iterates the source keywords of this set in canonical order.
    pub fn keywords(self) -> impl Iterator<Item = &'static str> {
        KEYWORDS
            .iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, keyword)| *keyword)
    }

    /// Space separated keyword string; empty when no flag has a keyword.
    pub fn to_keyword_string(self) -> String {
        self.keywords().collect::<Vec<_>>().join(" ")
    }

    /// Neither public, protected nor private.
    pub fn is_package_private(self) -> bool {
        !self.intersects(Self::PUBLIC | Self::PROTECTED | Self::PRIVATE)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_keyword_string())
    }
}

/// Predicates over an element's modifiers. Implementors only supply `modifiers`.
pub trait ModifierReviewable {
    fn modifiers(&self) -> Modifiers;

    fn is_public(&self) -> bool {
        self.modifiers().contains(Modifiers::PUBLIC)
    }

    fn is_protected(&self) -> bool {
        self.modifiers().contains(Modifiers::PROTECTED)
    }

    fn is_private(&self) -> bool {
        self.modifiers().contains(Modifiers::PRIVATE)
    }

    fn is_package_private(&self) -> bool {
        self.modifiers().is_package_private()
    }

    fn is_static(&self) -> bool {
        self.modifiers().contains(Modifiers::STATIC)
    }

    fn is_final(&self) -> bool {
        self.modifiers().contains(Modifiers::FINAL)
    }

    fn is_volatile(&self) -> bool {
        self.modifiers().contains(Modifiers::VOLATILE)
    }

    fn is_transient(&self) -> bool {
        self.modifiers().contains(Modifiers::TRANSIENT)
    }

    fn is_abstract(&self) -> bool {
        self.modifiers().contains(Modifiers::ABSTRACT)
    }

    fn is_interface(&self) -> bool {
        self.modifiers().contains(Modifiers::INTERFACE)
    }

    fn is_enum(&self) -> bool {
        self.modifiers().contains(Modifiers::ENUM)
    }

    fn is_synthetic(&self) -> bool {
        self.modifiers().contains(Modifiers::SYNTHETIC)
    }
}

impl ModifierReviewable for Modifiers {
    fn modifiers(&self) -> Modifiers {
        *self
    }
}
