/// Classification for fallthrough policy.
///
/// Used by the lookup chain to decide how to respond to an error from one source.
///
/// | Class | Try Next Source? |
/// |-------|------------------|
/// | `Never` | No |
/// | `NextProvider` | Yes |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// The query itself is unpriceable (unknown species, corrupt data).
    /// Asking another source won't help.
    Never,

    /// This source can't answer but another one might.
    NextProvider,
}
