/// A named piece of input text to parse.
///
/// A `Source` may be a restricted/derived view of a wider input (a lookahead
/// window or an included sub-document), in which case it keeps a reference to
/// the input it was derived from. Diagnostics are reported against the
/// outermost input of such a chain, see `ErrorContext::input`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source<'src> {
    data: &'src str,
    name: &'src str,
    parent: Option<&'src Source<'src>>,
}

impl<'src> Source<'src> {
    /// Construct a top-level input from its text and a name
    pub fn new(data: &'src str, name: &'src str) -> Self {
        Self {
            data,
            name,
            parent: None,
        }
    }

    /// Construct a derived view of this input over a slice of its text
    ///
    /// The slice must come from this input's data; derived views keep the
    /// parent relation so that diagnostics can be normalized back to the
    /// outermost input.
    pub fn subsource(&'src self, data: &'src str) -> Source<'src> {
        debug_assert!(self.data.as_ptr() as usize <= data.as_ptr() as usize);
        debug_assert!(
            data.as_ptr() as usize + data.len() <= self.data.as_ptr() as usize + self.data.len()
        );

        Source {
            data,
            name: self.name,
            parent: Some(self),
        }
    }

    /// Get the text of this input
    pub fn data(&self) -> &'src str {
        self.data
    }

    /// Get the name of this input
    pub fn name(&self) -> &'src str {
        self.name
    }

    /// Get the input this one is a derived view of, if any
    pub fn parent_input(&self) -> Option<&'src Source<'src>> {
        self.parent
    }

    /// Whether this input is a derived view of another input
    pub fn is_derived(&self) -> bool {
        self.parent.is_some()
    }
}
