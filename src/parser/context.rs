use super::{Marker, Source};

/// A grammar production whose name is known at compile time
pub trait Production {
    const NAME: &'static str;
}

/// The context an error occurred in: the production that was active, the
/// position its attempt began at, and the input to report against.
///
/// The context borrows the input for the duration of the parse; it never
/// owns it. The position is where the production began, the inner
/// `ParseError` carries its own position.
#[derive(Debug, Clone, Copy)]
pub struct ErrorContext<'src> {
    input: &'src Source<'src>,
    position: Marker,
    production: &'static str,
}

impl<'src> ErrorContext<'src> {
    /// Construct a context for a production only known by name at runtime
    pub fn new(production: &'static str, input: &'src Source<'src>, position: Marker) -> Self {
        Self {
            input,
            position,
            production,
        }
    }

    /// Construct a context for a statically known production
    pub fn of<P: Production>(input: &'src Source<'src>, position: Marker) -> Self {
        Self::new(P::NAME, input, position)
    }

    /// Get the input the error should be reported against
    ///
    /// Derived views are unwrapped until the outermost input is reached, so
    /// errors from nested sub-parses are always reported in one stable
    /// coordinate space. No cycle is possible, the parent relation only ever
    /// points from a derived input to the one it derives from.
    pub fn input(&self) -> &'src Source<'src> {
        let mut current = self.input;

        while let Some(parent) = current.parent_input() {
            current = parent;
        }

        current
    }

    /// Get the name of the production where the error occurred
    pub fn production(&self) -> &'static str {
        self.production
    }

    /// Get the starting position of the production
    pub fn position(&self) -> Marker {
        self.position
    }
}
