/// Converts errors from their error type (of the submodule) into the
/// matching variant of another error, by default a [`tripfare::Error`](crate::Error)
/// variant, so call sites can propagate with `?` across module boundaries.
///
/// ```rust,ignore
/// use tripfare::io::IngestError;
/// tripfare::impl_err!(IngestError, Ingest);
/// tripfare::impl_err!(std::io::Error, IngestError, Io);
/// ```
pub mod err_macro {
    #[macro_export]
    macro_rules! impl_err {
        ($from:ty, $into:ident, $variant:ident) => {
            impl From<$from> for $into {
                fn from(value: $from) -> Self {
                    $into::$variant(value)
                }
            }
        };
        ($from:ty, $variant:ident) => {
            impl From<$from> for $crate::Error {
                fn from(value: $from) -> Self {
                    $crate::Error::$variant(value)
                }
            }
        };
    }

    pub use impl_err;
}
