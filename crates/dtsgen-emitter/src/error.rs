use dtsgen_common::Kind;

/// Errors raised while printing declarations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmitError {
    /// A method reached the emitter with an enclosing kind that cannot own methods.
    /// This is a schema/configuration mismatch and aborts generation.
    #[error("{kind} '{owner}' cannot have methods (found '{method}')")]
    KindCannotHaveMethods {
        kind: Kind,
        owner: String,
        method: String,
    },
}

/// Errors raised while building the symbol tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("class '{0}' is declared more than once")]
    DuplicateClass(String),

    #[error("{kind} '{name}' cannot have nested symbols (found '{child}')")]
    ChildrenNotAllowed {
        kind: Kind,
        name: String,
        child: String,
    },
}
