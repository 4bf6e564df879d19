use super::{Class, Length, Tag};

/// BER object header (identifier and length)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    /// Object class: universal, application, context-specific, or private
    pub class: Class,
    /// Constructed attribute: true if constructed, else false
    pub constructed: bool,
    /// Tag number
    pub tag: Tag,
    /// Object length: definite or indefinite
    ///
    /// This is the length as read from the input. It is informational only:
    /// encoders always recompute the length from the content.
    pub length: Length,
}

impl Header {
    /// Build a new BER header
    pub const fn new(class: Class, constructed: bool, tag: Tag, length: Length) -> Self {
        Header {
            class,
            constructed,
            tag,
            length,
        }
    }

    /// Build a new universal header, with an unset (zero) length
    pub const fn universal(tag: Tag, constructed: bool) -> Self {
        Header::new(Class::Universal, constructed, tag, Length::Definite(0))
    }

    /// Update header class
    #[inline]
    pub fn with_class(self, class: Class) -> Self {
        Header { class, ..self }
    }

    /// Update header tag
    #[inline]
    pub fn with_tag(self, tag: Tag) -> Self {
        Header { tag, ..self }
    }

    /// Update header constructed flag
    #[inline]
    pub fn with_constructed(self, constructed: bool) -> Self {
        Header {
            constructed,
            ..self
        }
    }

    /// Update header length
    #[inline]
    pub fn with_length(self, length: Length) -> Self {
        Header { length, ..self }
    }

    /// Test if object class is Universal
    #[inline]
    pub fn is_universal(&self) -> bool {
        self.class == Class::Universal
    }
    /// Test if object class is Application
    #[inline]
    pub fn is_application(&self) -> bool {
        self.class == Class::Application
    }
    /// Test if object class is Context-specific
    #[inline]
    pub fn is_contextspecific(&self) -> bool {
        self.class == Class::ContextSpecific
    }
    /// Test if object class is Private
    #[inline]
    pub fn is_private(&self) -> bool {
        self.class == Class::Private
    }

    /// Test if object is primitive
    #[inline]
    pub fn is_primitive(&self) -> bool {
        !self.constructed
    }
    /// Test if object is constructed
    #[inline]
    pub fn is_constructed(&self) -> bool {
        self.constructed
    }

    /// Test if this header is an end-of-contents marker (`00 00`)
    #[inline]
    pub fn is_end_of_contents(&self) -> bool {
        self.is_universal() && self.tag == Tag::EndOfContent && !self.constructed
    }
}
