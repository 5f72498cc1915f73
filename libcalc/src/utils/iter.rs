use std::collections::VecDeque;
use std::vec::IntoIter;

/// An iterator that supports arbitrary-length peeking.
///
/// This struct is a beefed-up version of rustlib's [`Peekable`], which supports only peeking at the
/// next item in an iterator. Multi-length peeks may be required by applications that need to
/// establish a context; for example, a parser deciding whether two factors are implicitly
/// multiplied.
///
/// [`Peekable`]: core::iter::Peekable
pub struct PeekIter<T>
where
    T: Clone,
{
    iter: IntoIter<T>,
    /// A store of items we had to consume from the iterator for peeking.
    lookahead: VecDeque<Option<T>>,
}

impl<T> PeekIter<T>
where
    T: Clone,
{
    pub fn new(iter: IntoIter<T>) -> Self {
        let mut lookahead = VecDeque::new();
        lookahead.reserve(5); // optimistically we won't be peeking more than this

        Self { iter, lookahead }
    }

    /// Returns a reference to the next value in the iterator, without consuming it, or `None` if
    /// the iteration is complete.
    pub fn peek(&mut self) -> Option<&T> {
        if self.lookahead.is_empty() {
            let next = self.iter.next();
            self.lookahead.push_back(next);
        }
        self.lookahead[0].as_ref()
    }

    /// Returns a reference to the `n`th value ahead in the iterator (0-indexed), without consuming
    /// anything.
    pub fn peek_nth(&mut self, n: usize) -> Option<&T> {
        while self.lookahead.len() <= n {
            let next = self.iter.next();
            self.lookahead.push_back(next);
        }
        self.lookahead[n].as_ref()
    }

    /// Consumes and collects items while they satisfy `pred`. The first item failing `pred` is
    /// left in the iterator.
    pub fn collect_while<P, R>(&mut self, pred: P) -> R
    where
        P: Fn(&T) -> bool,
        R: std::iter::FromIterator<T>,
    {
        PeekingTakeWhile {
            peeker: self,
            predicate: pred,
        }
        .collect()
    }
}

impl<T> Iterator for PeekIter<T>
where
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.lookahead
            .pop_front()
            // Note that unwrap_or *cannot* be used here because it is eagerly evaluated, and will
            // evaluate `self.iter.next()` before the lookahead is checked!
            .unwrap_or_else(|| self.iter.next())
    }
}

/// A [`TakeWhile`]-like struct that tests a predicate by peeking rather than consuming an iterator.
///
/// rustlib's [`TakeWhile`] consumes the first item that fails its predicate. The scanner needs
/// that item back (`12+` must leave `+` for the next token), so this adapter only consumes items
/// that pass.
///
/// [`TakeWhile`]: core::iter::TakeWhile
struct PeekingTakeWhile<'a, T, P>
where
    T: Clone + 'a,
    P: Fn(&T) -> bool,
{
    peeker: &'a mut PeekIter<T>,
    predicate: P,
}

impl<'a, T, P> Iterator for PeekingTakeWhile<'a, T, P>
where
    T: Clone + 'a,
    P: Fn(&T) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if let Some(v) = self.peeker.peek() {
            if (self.predicate)(v) {
                return self.peeker.next();
            }
        }
        None
    }
}
