/// Nesting state tracked by both the reader and the writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    EmptyDocument,
    NonEmptyDocument,
    EmptyArray,
    NonEmptyArray,
    EmptyObject,
    /// A name has been read or written and its value is pending.
    DanglingName,
    NonEmptyObject,
}
