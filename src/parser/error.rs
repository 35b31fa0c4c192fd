use thiserror::Error;

use super::Marker;

/// A parse failure.
///
/// The set of failure kinds is closed; each variant carries exactly the
/// evidence needed to describe that kind of failure, as its own concrete
/// type. Values are plain copies of cursors and static text, constructed
/// once at the failure site and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A free-form failure described by a static message
    #[error(transparent)]
    Generic(#[from] GenericError),
    /// Matching a fixed literal failed partway through
    #[error(transparent)]
    ExpectedLiteral(#[from] ExpectedLiteral),
    /// A keyword matched lexically but the following input continued the identifier
    #[error(transparent)]
    ExpectedKeyword(#[from] ExpectedKeyword),
    /// A single character failed to match a named character class
    #[error(transparent)]
    ExpectedCharClass(#[from] ExpectedCharClass),
}

impl ParseError {
    /// Get the position the active failure kind is anchored at
    pub fn position(&self) -> Marker {
        match self {
            Self::Generic(error) => error.position(),
            Self::ExpectedLiteral(error) => error.position(),
            Self::ExpectedKeyword(error) => error.position(),
            Self::ExpectedCharClass(error) => error.position(),
        }
    }
}

/// A free-form failure anchored at a point or a span of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GenericError {
    begin: Marker,
    end: Marker,
    message: &'static str,
}

impl GenericError {
    /// Construct a failure anchored at a single point
    pub fn new(position: Marker, message: &'static str) -> Self {
        Self {
            begin: position,
            end: position,
            message,
        }
    }

    /// Construct a failure covering the span `[begin, end)`
    pub fn spanned(begin: Marker, end: Marker, message: &'static str) -> Self {
        debug_assert!(begin <= end);

        Self {
            begin,
            end,
            message,
        }
    }

    pub fn position(&self) -> Marker {
        self.begin
    }

    pub fn begin(&self) -> Marker {
        self.begin
    }

    pub fn end(&self) -> Marker {
        self.end
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

/// Matching a fixed literal failed after `index` of `length` characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected `{literal}`, matched {index} of {length} characters")]
pub struct ExpectedLiteral {
    position: Marker,
    literal: &'static str,
    index: usize,
    length: usize,
}

impl ExpectedLiteral {
    /// Construct a literal-mismatch failure
    ///
    /// `index` is the number of characters matched before the mismatch; the
    /// call exists because matching failed, so `index < length`.
    pub fn new(position: Marker, literal: &'static str, index: usize, length: usize) -> Self {
        debug_assert!(index < length);

        Self {
            position,
            literal,
            index,
            length,
        }
    }

    /// Get the position where matching the literal began
    pub fn position(&self) -> Marker {
        self.position
    }

    /// Get the literal that was being matched
    pub fn string(&self) -> &'static str {
        self.literal
    }

    /// Get the number of characters that matched before the mismatch
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the length of the literal in characters
    pub fn length(&self) -> usize {
        self.length
    }

    /// Get the character of the literal that failed to match
    ///
    /// Callers guarantee `index() < length()`; this is not bounds-checked
    /// beyond that contract.
    pub fn character(&self) -> char {
        self.literal
            .chars()
            .nth(self.index)
            .expect("index is within the literal")
    }
}

/// A keyword matched lexically but was disqualified by the following input
///
/// Unlike a literal mismatch, the reported span `[begin, end)` covers the
/// whole disqualifying identifier run, not just the keyword text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected keyword `{keyword}`")]
pub struct ExpectedKeyword {
    begin: Marker,
    end: Marker,
    keyword: &'static str,
    length: usize,
}

impl ExpectedKeyword {
    /// Construct a keyword-mismatch failure covering `[begin, end)`
    pub fn new(begin: Marker, end: Marker, keyword: &'static str, length: usize) -> Self {
        debug_assert!(begin <= end);

        Self {
            begin,
            end,
            keyword,
            length,
        }
    }

    /// Get the position where matching the keyword began
    pub fn position(&self) -> Marker {
        self.begin
    }

    pub fn begin(&self) -> Marker {
        self.begin
    }

    pub fn end(&self) -> Marker {
        self.end
    }

    /// Get the keyword that was being matched
    pub fn string(&self) -> &'static str {
        self.keyword
    }

    /// Get the length of the keyword in characters
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A single character failed to match a named character class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {name}")]
pub struct ExpectedCharClass {
    position: Marker,
    name: &'static str,
}

impl ExpectedCharClass {
    /// Construct a character-class failure at a single point
    pub fn new(position: Marker, name: &'static str) -> Self {
        Self { position, name }
    }

    pub fn position(&self) -> Marker {
        self.position
    }

    /// Get the human-meaningful name of the character class
    pub fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Reader, Source};

    fn markers(data: &'static str, steps: usize) -> (Marker, Marker) {
        let source = Source::new(data, "input");
        let mut reader = Reader::new(&source);
        let begin = reader.marker();
        for _ in 0..steps {
            reader.step();
        }
        (begin, reader.marker())
    }

    #[test]
    fn generic_point_form() {
        let (begin, _) = markers("abc", 0);
        let error = GenericError::new(begin, "unterminated string");

        assert_eq!(error.position(), begin);
        assert_eq!(error.begin(), begin);
        assert_eq!(error.end(), begin);
        assert_eq!(error.message(), "unterminated string");
    }

    #[test]
    fn generic_spanned_form() {
        let (begin, end) = markers("abc", 3);
        let error = GenericError::spanned(begin, end, "bad escape");

        assert_eq!(error.begin(), begin);
        assert_eq!(error.end(), end);
        assert!(error.begin() <= error.end());
        assert_eq!(error.message(), "bad escape");
    }

    #[test]
    fn expected_literal_round_trip() {
        let (begin, _) = markers("tru1", 0);
        let error = ExpectedLiteral::new(begin, "true", 3, 4);

        assert_eq!(error.position(), begin);
        assert_eq!(error.string(), "true");
        assert_eq!(error.index(), 3);
        assert_eq!(error.length(), 4);
        assert_eq!(error.character(), 'e');
    }

    #[test]
    fn expected_literal_character_is_unicode_aware() {
        let (begin, _) = markers("Mobius", 0);
        let error = ExpectedLiteral::new(begin, "Möbius", 1, 6);

        assert_eq!(error.character(), 'ö');
    }

    #[test]
    fn expected_keyword_round_trip() {
        let (begin, end) = markers("ifcond", 6);
        let error = ExpectedKeyword::new(begin, end, "if", 2);

        assert_eq!(error.position(), begin);
        assert_eq!(error.begin(), begin);
        assert_eq!(error.end(), end);
        assert!(error.begin() <= error.end());
        assert_eq!(error.string(), "if");
        assert_eq!(error.length(), 2);
    }

    #[test]
    fn expected_char_class_round_trip() {
        let (_, at) = markers("abc1", 3);
        let error = ExpectedCharClass::new(at, "digit");

        assert_eq!(error.position(), at);
        assert_eq!(error.name(), "digit");
    }

    #[test]
    fn enum_position_delegates_to_active_kind() {
        let (begin, end) = markers("ifcond", 6);

        let literal: ParseError = ExpectedLiteral::new(begin, "true", 3, 4).into();
        assert_eq!(literal.position(), begin);

        let keyword: ParseError = ExpectedKeyword::new(begin, end, "if", 2).into();
        assert_eq!(keyword.position(), begin);

        let class: ParseError = ExpectedCharClass::new(end, "digit").into();
        assert_eq!(class.position(), end);

        let generic: ParseError = GenericError::new(begin, "oops").into();
        assert_eq!(generic.position(), begin);
    }

    #[test]
    fn display_carries_the_evidence() {
        let (begin, end) = markers("ifcond", 6);

        let literal: ParseError = ExpectedLiteral::new(begin, "true", 3, 4).into();
        assert_eq!(
            literal.to_string(),
            "expected `true`, matched 3 of 4 characters"
        );

        let keyword: ParseError = ExpectedKeyword::new(begin, end, "if", 2).into();
        assert_eq!(keyword.to_string(), "expected keyword `if`");

        let class: ParseError = ExpectedCharClass::new(begin, "digit").into();
        assert_eq!(class.to_string(), "expected digit");

        let generic: ParseError = GenericError::new(begin, "unterminated string").into();
        assert_eq!(generic.to_string(), "unterminated string");
    }

    #[test]
    fn accessors_are_pure() {
        let (begin, _) = markers("tru1", 0);
        let error = ExpectedLiteral::new(begin, "true", 3, 4);

        assert_eq!(error.position(), error.position());
        assert_eq!(error.string(), error.string());
        assert_eq!(error.index(), error.index());
        assert_eq!(error.length(), error.length());
        assert_eq!(error.character(), error.character());
    }
}
