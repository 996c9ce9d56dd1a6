// Each node owns its successor outright, so the chain is a straight line of ownership from the
// head link. Box is used for allocation because dereferencing it allows the value to be moved
// back out of the heap.

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}
