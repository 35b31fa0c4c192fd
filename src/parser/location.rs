/// Holds the position of a character within a named input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'src> {
    pub column: usize,
    pub line: usize,
    pub source: &'src str,
}

/// Refers to a particular stretch of text within a named input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'src> {
    pub location: Location<'src>,
    pub data: &'src str,
}

impl<'src> Location<'src> {
    /// Construct a location from its components
    pub fn from_components(column: usize, line: usize, source: &'src str) -> Self {
        Self {
            column,
            line,
            source,
        }
    }
}

impl<'src> std::cmp::PartialOrd for Location<'src> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        // Locations in different inputs are unordered
        if self.source != other.source {
            return None;
        }

        match self.line.partial_cmp(&other.line) {
            Some(core::cmp::Ordering::Equal) => {}
            ord => return ord,
        }

        self.column.partial_cmp(&other.column)
    }
}

impl<'src> std::fmt::Display for Location<'src> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "column {} line {} in {}",
            self.column + 1,
            self.line + 1,
            self.source
        )
    }
}

impl<'src> Span<'src> {
    /// Construct a new span from its components
    pub fn from_components(location: Location<'src>, data: &'src str) -> Self {
        Self { location, data }
    }
}

impl<'src> std::fmt::Display for Span<'src> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.data)
    }
}
