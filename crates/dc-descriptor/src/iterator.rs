//! Generic enumeration protocol
//!
//! Every enumerable resource hands out its items through a cursor that
//! implements [`DcIterator`]. A cursor is lazy, finite, forward-only and
//! can't be restarted:
//!
//! - `advance` yields `Ok(Some(item))` until the sequence is exhausted, then
//!   `Ok(None)` (done) on that call and on every call after it.
//! - Releasing a cursor is dropping it. [`release`] is the explicit form and
//!   accepts an absent cursor.

use std::iter::FusedIterator;

use tracing::trace;

use crate::error::DcError;

/// Cursor over a finite sequence of items
pub trait DcIterator {
    /// The item type produced by this cursor
    type Item;

    /// Produce the next item, or `None` once the sequence is done
    fn advance(&mut self) -> Result<Option<Self::Item>, DcError>;

    /// Skip items that don't satisfy `predicate`
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter {
            inner: self,
            predicate,
            done: false,
        }
    }

    /// Bridge into a standard iterator of `Result`s
    ///
    /// The returned iterator is fused: it ends after the first error.
    fn items(self) -> Items<Self>
    where
        Self: Sized,
    {
        Items {
            inner: self,
            finished: false,
        }
    }
}

/// Owned, type-erased cursor
pub type BoxedIterator<T> = Box<dyn DcIterator<Item = T> + Send>;

impl<I: DcIterator + ?Sized> DcIterator for Box<I> {
    type Item = I::Item;

    fn advance(&mut self) -> Result<Option<Self::Item>, DcError> {
        (**self).advance()
    }
}

impl<I: DcIterator + ?Sized> DcIterator for &mut I {
    type Item = I::Item;

    fn advance(&mut self) -> Result<Option<Self::Item>, DcError> {
        (**self).advance()
    }
}

/// Release a cursor; releasing nothing is a no-op
pub fn release<I: DcIterator>(iterator: Option<I>) {
    if let Some(iterator) = iterator {
        trace!("Releasing cursor");
        drop(iterator);
    }
}

/// Cursor returned by [`DcIterator::filter`]
#[derive(Debug, Clone)]
pub struct Filter<I, P> {
    inner: I,
    predicate: P,
    done: bool,
}

impl<I, P> DcIterator for Filter<I, P>
where
    I: DcIterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn advance(&mut self) -> Result<Option<Self::Item>, DcError> {
        if self.done {
            return Ok(None);
        }
        while let Some(item) = self.inner.advance()? {
            if (self.predicate)(&item) {
                return Ok(Some(item));
            }
        }
        self.done = true;
        Ok(None)
    }
}

/// Standard iterator returned by [`DcIterator::items`]
#[derive(Debug, Clone)]
pub struct Items<I> {
    inner: I,
    finished: bool,
}

impl<I: DcIterator> Iterator for Items<I> {
    type Item = Result<I::Item, DcError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.inner.advance() {
            Ok(Some(item)) => Some(Ok(item)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<I: DcIterator> FusedIterator for Items<I> {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts up to a limit, failing once at `fail_at` if set
    struct Counter {
        next: u32,
        limit: u32,
        fail_at: Option<u32>,
    }

    impl Counter {
        fn new(limit: u32) -> Self {
            Self {
                next: 0,
                limit,
                fail_at: None,
            }
        }
    }

    impl DcIterator for Counter {
        type Item = u32;

        fn advance(&mut self) -> Result<Option<u32>, DcError> {
            if self.fail_at == Some(self.next) {
                self.fail_at = None;
                return Err(DcError::NoMemory);
            }
            if self.next >= self.limit {
                return Ok(None);
            }
            self.next += 1;
            Ok(Some(self.next - 1))
        }
    }

    #[test]
    fn test_filter_skips_and_stays_done() {
        let mut evens = Counter::new(7).filter(|n| n % 2 == 0);
        assert_eq!(evens.advance(), Ok(Some(0)));
        assert_eq!(evens.advance(), Ok(Some(2)));
        assert_eq!(evens.advance(), Ok(Some(4)));
        assert_eq!(evens.advance(), Ok(Some(6)));
        assert_eq!(evens.advance(), Ok(None));
        assert_eq!(evens.advance(), Ok(None));
    }

    #[test]
    fn test_filter_propagates_errors() {
        let mut counter = Counter::new(5);
        counter.fail_at = Some(1);
        let mut all = counter.filter(|_| true);
        assert_eq!(all.advance(), Ok(Some(0)));
        assert_eq!(all.advance(), Err(DcError::NoMemory));
        assert_eq!(all.advance(), Ok(Some(1)));
    }

    #[test]
    fn test_items_collects_in_order() {
        let items: Result<Vec<u32>, DcError> = Counter::new(4).items().collect();
        assert_eq!(items, Ok(vec![0, 1, 2, 3]));
    }

    #[test]
    fn test_items_stop_after_error() {
        let mut counter = Counter::new(5);
        counter.fail_at = Some(2);
        let items: Vec<_> = counter.items().collect();
        assert_eq!(items, vec![Ok(0), Ok(1), Err(DcError::NoMemory)]);
    }

    #[test]
    fn test_boxed_cursor_dispatches() {
        let mut boxed: BoxedIterator<u32> = Box::new(Counter::new(1));
        assert_eq!(boxed.advance(), Ok(Some(0)));
        assert_eq!(boxed.advance(), Ok(None));
        release(Some(boxed));
    }

    #[test]
    fn test_release_nothing() {
        release::<Counter>(None);
    }

    #[test]
    fn test_borrowed_cursor_keeps_position() {
        fn first<I: DcIterator>(mut it: I) -> Result<Option<I::Item>, DcError> {
            it.advance()
        }

        let mut counter = Counter::new(3);
        assert_eq!(first(&mut counter), Ok(Some(0)));
        assert_eq!(counter.advance(), Ok(Some(1)));
    }
}
