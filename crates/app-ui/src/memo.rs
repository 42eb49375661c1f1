//! Render memoization
//!
//! Wraps a pure props-to-output render function and re-evaluates it only
//! when the props change. The host invokes components once per render
//! cycle; wrapping a component in [`Memoized`] guarantees that a cycle
//! triggered by unrelated state reuses the previous output when the
//! component's own props are unchanged.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A render function cached on its last props
///
/// Holds at most one `(props, output)` pair. Rendering with props equal to
/// the cached ones returns the cached output without re-evaluating.
pub struct Memoized<P, O> {
    render_fn: Box<dyn Fn(&P) -> O + Send + Sync>,
    cache: Mutex<Option<(P, O)>>,
    evaluations: AtomicUsize,
}

impl<P, O> Memoized<P, O>
where
    P: Clone + PartialEq,
    O: Clone,
{
    /// Wrap a render function
    pub fn new(render_fn: impl Fn(&P) -> O + Send + Sync + 'static) -> Self {
        Self {
            render_fn: Box::new(render_fn),
            cache: Mutex::new(None),
            evaluations: AtomicUsize::new(0),
        }
    }

    /// Render for the given props
    ///
    /// Equal props return the cached output; changed props evaluate the
    /// wrapped function and replace the cache.
    pub fn render(&self, props: &P) -> O {
        let mut cache = self.cache.lock();
        if let Some((cached_props, output)) = cache.as_ref() {
            if cached_props == props {
                return output.clone();
            }
        }
        let output = (self.render_fn)(props);
        self.evaluations.fetch_add(1, Ordering::Relaxed);
        *cache = Some((props.clone(), output.clone()));
        output
    }

    /// Number of times the wrapped function has run
    pub fn evaluations(&self) -> usize {
        self.evaluations.load(Ordering::Relaxed)
    }

    /// Drop the cached pair, forcing the next render to evaluate
    pub fn invalidate(&self) {
        *self.cache.lock() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_props_render_once() {
        let memo: Memoized<(String, u32), String> =
            Memoized::new(|(name, size)| format!("{name}@{size}"));

        let props = ("house".to_string(), 24);
        let first = memo.render(&props);
        let second = memo.render(&props.clone());
        assert_eq!(first, second);
        assert_eq!(memo.evaluations(), 1);
    }

    #[test]
    fn test_changed_props_reevaluate() {
        let memo: Memoized<u32, u32> = Memoized::new(|n| n * 2);

        assert_eq!(memo.render(&1), 2);
        assert_eq!(memo.render(&2), 4);
        assert_eq!(memo.evaluations(), 2);
    }

    #[test]
    fn test_cache_holds_only_last_props() {
        let memo: Memoized<u32, u32> = Memoized::new(|n| n + 1);

        memo.render(&1);
        memo.render(&2);
        // Returning to earlier props re-evaluates: only the last pair is kept
        memo.render(&1);
        assert_eq!(memo.evaluations(), 3);
    }

    #[test]
    fn test_invalidate_forces_evaluation() {
        let memo: Memoized<u32, u32> = Memoized::new(|n| *n);

        memo.render(&7);
        memo.invalidate();
        memo.render(&7);
        assert_eq!(memo.evaluations(), 2);
    }
}
