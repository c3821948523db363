//! Image source lookup.

/// Loads the bytes behind an `img` element's `src`.
///
/// Closures of shape `Fn(&str) -> Option<Vec<u8>>` implement it directly.
pub trait ImageResolver {
    fn resolve(&self, src: &str) -> Option<Vec<u8>>;
}

impl<F> ImageResolver for F
where
    F: Fn(&str) -> Option<Vec<u8>>,
{
    fn resolve(&self, src: &str) -> Option<Vec<u8>> {
        self(src)
    }
}

/// Resolver that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImages;

impl ImageResolver for NoImages {
    fn resolve(&self, _src: &str) -> Option<Vec<u8>> {
        None
    }
}
