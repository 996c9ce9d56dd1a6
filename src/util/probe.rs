use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

/// A unit type for tests that need an element type without a size.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSized;

/// A test probe that increments a shared counter every time an instance is dropped.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(0)))
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|count| *count + 1);
    }
}
