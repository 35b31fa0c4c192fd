use super::{
    ExpectedCharClass, ExpectedKeyword, ExpectedLiteral, GenericError, ParseError, Reader, Span,
};

/// Matches a fixed literal character sequence
///
/// On a mismatch the reader is rewound and the error records how many
/// characters matched before the failing one.
#[inline]
pub fn literal<'src>(
    s: &'static str,
) -> impl Fn(&mut Reader<'src>) -> Result<Span<'src>, ParseError> {
    move |reader: &mut Reader<'src>| {
        let start = reader.marker();

        for (matched, c) in s.chars().enumerate() {
            if reader.step() != Some(c) {
                reader.rewind(start);
                return Err(ExpectedLiteral::new(start, s, matched, s.chars().count()).into());
            }
        }

        Ok(reader
            .span_between(start)
            .expect("marker was taken from this reader"))
    }
}

/// Matches a keyword: the literal must not be followed by a character of the
/// identifier class given by `continues`
///
/// On failure the reader is rewound and the error spans the whole identifier
/// run starting at the keyword's begin, not just the keyword text.
#[inline]
pub fn keyword<'src>(
    s: &'static str,
    continues: impl Fn(char) -> bool,
) -> impl Fn(&mut Reader<'src>) -> Result<Span<'src>, ParseError> {
    move |reader: &mut Reader<'src>| {
        let begin = reader.marker();

        let mut matched = true;
        for c in s.chars() {
            if reader.step() != Some(c) {
                matched = false;
                break;
            }
        }

        if matched && !reader.rest().chars().next().is_some_and(&continues) {
            return Ok(reader
                .span_between(begin)
                .expect("marker was taken from this reader"));
        }

        // Walk to the end of the identifier run that disqualified the keyword
        reader.rewind(begin);
        while reader.rest().chars().next().is_some_and(&continues) {
            reader.step();
        }
        let end = reader.marker();
        reader.rewind(begin);

        Err(ExpectedKeyword::new(begin, end, s, s.chars().count()).into())
    }
}

/// Matches a single character of a named character class
#[inline]
pub fn char_class<'src>(
    f: impl Fn(char) -> bool,
    name: &'static str,
) -> impl Fn(&mut Reader<'src>) -> Result<Span<'src>, ParseError> {
    move |reader: &mut Reader<'src>| {
        let start = reader.marker();

        if let Some(c) = reader.step() {
            if f(c) {
                return Ok(reader
                    .span_between(start)
                    .expect("marker was taken from this reader"));
            }
        }

        reader.rewind(start);

        Err(ExpectedCharClass::new(start, name).into())
    }
}

/// Always fails with a free-form message at the current position
#[inline]
pub fn fail<'src, T>(
    message: &'static str,
) -> impl Fn(&mut Reader<'src>) -> Result<T, ParseError> {
    move |reader: &mut Reader<'src>| Err(GenericError::new(reader.marker(), message).into())
}

/// Runs a matcher without consuming any input
#[inline]
pub fn peek<'src, T>(
    matcher: impl Fn(&mut Reader<'src>) -> Result<T, ParseError>,
) -> impl Fn(&mut Reader<'src>) -> Result<T, ParseError> {
    move |reader: &mut Reader<'src>| {
        let start = reader.marker();
        let value = matcher(reader)?;
        reader.rewind(start);
        Ok(value)
    }
}
