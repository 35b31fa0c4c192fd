use super::{Location, Source, Span};

/// Walks through an input, producing characters one at a time
#[derive(Debug, Clone)]
pub struct Reader<'src> {
    source: &'src Source<'src>,
    byte_index: usize,
    column: usize,
    line: usize,
}

/// An opaque cursor into an input
///
/// Markers are only meaningful for the reader (and therefore the input) they
/// were taken from; they are never compared across different inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Marker {
    index: usize,
    column: usize,
    line: usize,
}

impl Marker {
    /// Get the byte offset of this cursor within its input
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the column of this cursor
    pub fn column(&self) -> usize {
        self.column
    }

    /// Get the line of this cursor
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<'src> Reader<'src> {
    /// Construct a new `Reader` positioned at the start of an input
    pub fn new(source: &'src Source<'src>) -> Self {
        Self {
            source,
            byte_index: 0,
            column: 0,
            line: 0,
        }
    }

    /// Get the input this reader walks over
    pub fn source(&self) -> &'src Source<'src> {
        self.source
    }

    /// Get the location of the currently referenced character
    pub fn current_location(&self) -> Location<'src> {
        Location::from_components(self.column, self.line, self.source.name())
    }

    /// Get a cursor to the currently referenced character
    pub fn marker(&self) -> Marker {
        Marker {
            index: self.byte_index,
            column: self.column,
            line: self.line,
        }
    }

    /// Get the not yet consumed remainder of the input
    pub fn rest(&self) -> &'src str {
        let data = self.source.data();

        if self.byte_index >= data.len() {
            ""
        } else {
            &data[self.byte_index..]
        }
    }

    /// Step forward by one character if possible, return the character stepped over, otherwise return None
    pub fn step(&mut self) -> Option<char> {
        let character = self.rest().chars().next();

        if let Some(c) = character {
            self.byte_index += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }

        character
    }

    /// Return to a previous position (using a `Marker`) and return true, if the
    /// marker does not point to the boundary of a character, return false and
    /// do not move
    pub fn rewind(&mut self, marker: Marker) -> bool {
        if self.source.data().is_char_boundary(marker.index) {
            self.byte_index = marker.index;
            self.line = marker.line;
            self.column = marker.column;
            true
        } else {
            false
        }
    }

    /// Get the span of the input from a given marker up to (not including) the
    /// currently referenced character, or None if the marker does not point to
    /// a character boundary before the cursor
    pub fn span_between(&self, marker: Marker) -> Option<Span<'src>> {
        let data = self.source.data();

        if marker.index > self.byte_index || !data.is_char_boundary(marker.index) {
            return None;
        }

        let location = Location::from_components(marker.column, marker.line, self.source.name());
        Some(Span::from_components(
            location,
            &data[marker.index..self.byte_index],
        ))
    }

    /// Get the location of a marker in the input, or None if the marker is not
    /// pointing to a character
    pub fn location_of(&self, marker: Marker) -> Option<Location<'src>> {
        if self.source.data().is_char_boundary(marker.index) {
            Some(Location::from_components(
                marker.column,
                marker.line,
                self.source.name(),
            ))
        } else {
            None
        }
    }
}
