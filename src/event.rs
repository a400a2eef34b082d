/// A bare-bones subscriber list. Handlers borrow the fired argument and run
/// in subscription order.
#[derive(Clone)]
pub struct Event<'a, A> {
    subscribers: Vec<&'a (dyn Fn(&A) + Sync)>,
}

impl<'a, A> Event<'a, A> {
    pub fn new() -> Self {
        Event {
            subscribers: vec![],
        }
    }

    pub fn call(&self, arg: &A) {
        for f in &self.subscribers {
            f(arg);
        }
    }

    pub fn sub(&mut self, handler: &'a (dyn Fn(&A) + Sync)) {
        self.subscribers.push(handler);
    }
}

impl<'a, A> Default for Event<'a, A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn fires_all_subscribers() {
        let seen = AtomicU32::new(0);
        let first = |n: &u32| {
            seen.fetch_add(*n, Ordering::SeqCst);
        };
        let second = |n: &u32| {
            seen.fetch_add(*n * 10, Ordering::SeqCst);
        };
        let mut event = Event::new();
        event.sub(&first);
        event.sub(&second);
        event.call(&3);
        assert_eq!(seen.load(Ordering::SeqCst), 33);
    }

    #[test]
    fn call_without_subscribers_is_a_no_op() {
        let event: Event<u32> = Event::new();
        event.call(&1);
    }
}
