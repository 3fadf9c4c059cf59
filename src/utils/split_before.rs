// src/utils/split_before.rs
use std::iter::{FusedIterator, Peekable};

/// Lazily groups a stream into chunks, opening a new chunk before every
/// element that satisfies `is_boundary`.
///
/// The first element of the stream never opens a new chunk, so the first
/// chunk may start with a non-boundary element. Concatenating every chunk
/// reproduces the source stream. Once the source is exhausted `next` keeps
/// returning `None`.
pub struct SplitBefore<I, P>
where
    I: Iterator,
{
    source: Peekable<I>,
    is_boundary: P,
}

impl<I, P> SplitBefore<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    pub fn new(source: I, is_boundary: P) -> Self {
        SplitBefore {
            source: source.peekable(),
            is_boundary,
        }
    }
}

impl<I, P> Iterator for SplitBefore<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        // Whatever opens a chunk is taken unconditionally: either it is the
        // first element of the stream or the boundary that closed the last one.
        let mut chunk = vec![self.source.next()?];
        let is_boundary = &mut self.is_boundary;
        while let Some(item) = self.source.next_if(|item| !is_boundary(item)) {
            chunk.push(item);
        }
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        (lower.min(1), upper)
    }
}

impl<I, P> FusedIterator for SplitBefore<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}

/// Adds `.split_before(predicate)` to every iterator.
pub trait SplitBeforeExt: Iterator + Sized {
    fn split_before<P>(self, is_boundary: P) -> SplitBefore<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        SplitBefore::new(self, is_boundary)
    }
}

impl<I: Iterator> SplitBeforeExt for I {}
