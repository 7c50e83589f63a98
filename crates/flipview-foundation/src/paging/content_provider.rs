//! Content provider trait for the page cache.
//!
//! This module defines the [`ContentProvider`] trait through which the page
//! cache materializes the renderable content of each page.

/// Supplies renderable content for pages `0..count()`.
///
/// Implementations must accept indices in any order and must be able to
/// rebuild content from an instance previously produced for another index.
pub trait ContentProvider {
    /// The renderable unit handed to the canvas.
    type Content;

    /// Number of pages this provider can produce.
    fn count(&self) -> usize;

    /// Produces the content for `index`.
    ///
    /// `reuse` carries an instance from an earlier bind that the provider may
    /// update in place instead of building from scratch.
    fn content_for(&mut self, index: usize, reuse: Option<Self::Content>) -> Self::Content;
}

/// A [`ContentProvider`] backed by a closure.
pub struct FnContentProvider<C, F> {
    count: usize,
    factory: F,
    _content: std::marker::PhantomData<fn() -> C>,
}

impl<C, F> ContentProvider for FnContentProvider<C, F>
where
    F: FnMut(usize, Option<C>) -> C,
{
    type Content = C;

    fn count(&self) -> usize {
        self.count
    }

    fn content_for(&mut self, index: usize, reuse: Option<C>) -> C {
        (self.factory)(index, reuse)
    }
}

/// Builds a provider of `count` pages from a closure.
pub fn content_provider_fn<C, F>(count: usize, factory: F) -> FnContentProvider<C, F>
where
    F: FnMut(usize, Option<C>) -> C,
{
    FnContentProvider {
        count,
        factory,
        _content: std::marker::PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_provider_passes_reuse_hint_through() {
        let mut provider = content_provider_fn(2, |index, reuse: Option<String>| match reuse {
            Some(mut previous) => {
                previous.clear();
                previous.push_str(&format!("reused {index}"));
                previous
            }
            None => format!("page {index}"),
        });
        assert_eq!(provider.count(), 2);
        assert_eq!(provider.content_for(0, None), "page 0");
        assert_eq!(provider.content_for(1, Some("page 0".into())), "reused 1");
    }
}
