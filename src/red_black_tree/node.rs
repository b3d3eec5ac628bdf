use crate::entry::Entry;

/// Sentinel arena index standing in for an absent parent or child link. Fixup logic treats a
/// `NIL` child as black.
pub const NIL: usize = usize::MAX;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// A struct representing an internal node of a red black tree.
///
/// Nodes refer to each other by arena index rather than by reference so that the mutual
/// parent/child links form no aliased ownership. Rotations and fixups are index rewrites.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub color: Color,
    pub parent: usize,
    pub left: usize,
    pub right: usize,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U, parent: usize) -> Self {
        Node {
            entry: Entry { key, value },
            color: Color::Red,
            parent,
            left: NIL,
            right: NIL,
        }
    }
}
