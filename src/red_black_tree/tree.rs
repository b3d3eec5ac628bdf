use crate::arena::Arena;
use crate::entry::Entry;
use crate::red_black_tree::node::{Color, Node, NIL};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

/// The core red black tree: an arena of nodes linked by parent/left/right indices, plus the
/// index of the root.
///
/// Invariants maintained across every public operation:
///   1. every node is red or black,
///   2. the root is black,
///   3. a red node has no red child,
///   4. every path from a node to a descendant `NIL` contains the same number of black nodes,
///   5. binary search tree ordering on keys, with no duplicate keys.
pub struct Tree<T, U> {
    arena: Arena<Node<T, U>>,
    root: usize,
}

impl<T, U> Tree<T, U> {
    pub fn new() -> Self {
        Tree {
            arena: Arena::new(),
            root: NIL,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.size()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = NIL;
    }

    // `NIL` links count as black.
    fn color(&self, index: usize) -> Color {
        if index == NIL {
            Color::Black
        } else {
            self.arena[index].color
        }
    }

    fn find<V>(&self, key: &V) -> usize
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.root;
        while curr != NIL {
            curr = match key.cmp(self.arena[curr].entry.key.borrow()) {
                Ordering::Less => self.arena[curr].left,
                Ordering::Greater => self.arena[curr].right,
                Ordering::Equal => return curr,
            };
        }
        NIL
    }

    pub fn get<V>(&self, key: &V) -> Option<&Entry<T, U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        match self.find(key) {
            NIL => None,
            index => Some(&self.arena[index].entry),
        }
    }

    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut Entry<T, U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        match self.find(key) {
            NIL => None,
            index => Some(&mut self.arena[index].entry),
        }
    }

    fn min_node(&self, mut curr: usize) -> usize {
        while self.arena[curr].left != NIL {
            curr = self.arena[curr].left;
        }
        curr
    }

    /// Promotes x's right child into x's position. Relinks exactly the three affected nodes and
    /// the grandparent slot (or the root); never traverses subtrees.
    fn rotate_left(&mut self, x: usize) {
        let y = self.arena[x].right;
        let y_left = self.arena[y].left;

        self.arena[x].right = y_left;
        if y_left != NIL {
            self.arena[y_left].parent = x;
        }

        let x_parent = self.arena[x].parent;
        self.arena[y].parent = x_parent;
        if x_parent == NIL {
            self.root = y;
        } else if self.arena[x_parent].left == x {
            self.arena[x_parent].left = y;
        } else {
            self.arena[x_parent].right = y;
        }

        self.arena[y].left = x;
        self.arena[x].parent = y;
    }

    fn rotate_right(&mut self, x: usize) {
        let y = self.arena[x].left;
        let y_right = self.arena[y].right;

        self.arena[x].left = y_right;
        if y_right != NIL {
            self.arena[y_right].parent = x;
        }

        let x_parent = self.arena[x].parent;
        self.arena[y].parent = x_parent;
        if x_parent == NIL {
            self.root = y;
        } else if self.arena[x_parent].right == x {
            self.arena[x_parent].right = y;
        } else {
            self.arena[x_parent].left = y;
        }

        self.arena[y].right = x;
        self.arena[x].parent = y;
    }

    /// Inserts a key-value pair. An equal key replaces the entry in place and returns the old
    /// one; the node structure and coloring are untouched. A new key allocates a red node, links
    /// it under the located parent, and repairs the red-red violation.
    pub fn insert(&mut self, key: T, value: U) -> Option<Entry<T, U>>
    where
        T: Ord,
    {
        let mut parent = NIL;
        let mut curr = self.root;
        while curr != NIL {
            parent = curr;
            curr = match key.cmp(&self.arena[curr].entry.key) {
                Ordering::Less => self.arena[curr].left,
                Ordering::Greater => self.arena[curr].right,
                Ordering::Equal => {
                    let entry = Entry { key, value };
                    return Some(mem::replace(&mut self.arena[curr].entry, entry));
                }
            };
        }

        let goes_left = parent != NIL && key < self.arena[parent].entry.key;
        let z = self.arena.allocate(Node::new(key, value, parent));
        if parent == NIL {
            self.root = z;
        } else if goes_left {
            self.arena[parent].left = z;
        } else {
            self.arena[parent].right = z;
        }

        self.insert_fixup(z);
        None
    }

    // Restores "no red node has a red child" after linking the red node z under a possibly red
    // parent. Red uncle: recolor and ascend. Black uncle: one or two rotations terminate.
    fn insert_fixup(&mut self, mut z: usize) {
        loop {
            let parent = self.arena[z].parent;
            if parent == NIL || self.arena[parent].color == Color::Black {
                break;
            }
            // parent is red, so it is not the root and the grandparent exists
            let grandparent = self.arena[parent].parent;

            if parent == self.arena[grandparent].left {
                let uncle = self.arena[grandparent].right;
                if self.color(uncle) == Color::Red {
                    self.arena[parent].color = Color::Black;
                    self.arena[uncle].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    z = grandparent;
                } else {
                    if z == self.arena[parent].right {
                        z = parent;
                        self.rotate_left(z);
                    }
                    let parent = self.arena[z].parent;
                    let grandparent = self.arena[parent].parent;
                    self.arena[parent].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    self.rotate_right(grandparent);
                }
            } else {
                let uncle = self.arena[grandparent].left;
                if self.color(uncle) == Color::Red {
                    self.arena[parent].color = Color::Black;
                    self.arena[uncle].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    z = grandparent;
                } else {
                    if z == self.arena[parent].left {
                        z = parent;
                        self.rotate_right(z);
                    }
                    let parent = self.arena[z].parent;
                    let grandparent = self.arena[parent].parent;
                    self.arena[parent].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    self.rotate_left(grandparent);
                }
            }
        }

        let root = self.root;
        self.arena[root].color = Color::Black;
    }

    // Replaces the subtree rooted at u with the subtree rooted at v in u's parent slot, or at
    // the root if u has no parent. u itself is left dangling for the caller to free.
    fn transplant(&mut self, u: usize, v: usize) {
        let parent = self.arena[u].parent;
        if parent == NIL {
            self.root = v;
        } else if self.arena[parent].left == u {
            self.arena[parent].left = v;
        } else {
            self.arena[parent].right = v;
        }
        if v != NIL {
            self.arena[v].parent = parent;
        }
    }

    /// Removes a key, returning its entry, or `None` if the key is absent. A node with at most
    /// one child is spliced out directly; a node with two children is replaced by its in-order
    /// successor, which inherits its color. Removing a black node costs one unit of black-height
    /// at the spliced position, repaired by `remove_fixup`.
    pub fn remove<V>(&mut self, key: &V) -> Option<Entry<T, U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let z = self.find(key);
        if z == NIL {
            return None;
        }

        let mut removed_color = self.arena[z].color;
        let x;
        let x_parent;

        if self.arena[z].left == NIL {
            x = self.arena[z].right;
            x_parent = self.arena[z].parent;
            self.transplant(z, x);
        } else if self.arena[z].right == NIL {
            x = self.arena[z].left;
            x_parent = self.arena[z].parent;
            self.transplant(z, x);
        } else {
            let y = self.min_node(self.arena[z].right);
            removed_color = self.arena[y].color;
            x = self.arena[y].right;

            if self.arena[y].parent == z {
                x_parent = y;
            } else {
                x_parent = self.arena[y].parent;
                self.transplant(y, x);
                let z_right = self.arena[z].right;
                self.arena[y].right = z_right;
                self.arena[z_right].parent = y;
            }

            self.transplant(z, y);
            let z_left = self.arena[z].left;
            self.arena[y].left = z_left;
            self.arena[z_left].parent = y;
            self.arena[y].color = self.arena[z].color;
        }

        let node = self.arena.free(z);
        if removed_color == Color::Black {
            self.remove_fixup(x, x_parent);
        }
        Some(node.entry)
    }

    // Repairs the black-height deficit at x after a black node was spliced out. x may be `NIL`,
    // so its parent is threaded explicitly rather than read off x. While x carries the deficit
    // its sibling exists (the opposite path has black-height at least one).
    fn remove_fixup(&mut self, mut x: usize, mut parent: usize) {
        while x != self.root && self.color(x) == Color::Black {
            if x == self.arena[parent].left {
                let mut w = self.arena[parent].right;
                if self.arena[w].color == Color::Red {
                    self.arena[w].color = Color::Black;
                    self.arena[parent].color = Color::Red;
                    self.rotate_left(parent);
                    w = self.arena[parent].right;
                }

                let w_left = self.arena[w].left;
                let w_right = self.arena[w].right;
                if self.color(w_left) == Color::Black && self.color(w_right) == Color::Black {
                    self.arena[w].color = Color::Red;
                    x = parent;
                    parent = self.arena[x].parent;
                } else {
                    if self.color(w_right) == Color::Black {
                        // near nephew is red
                        self.arena[w_left].color = Color::Black;
                        self.arena[w].color = Color::Red;
                        self.rotate_right(w);
                        w = self.arena[parent].right;
                    }
                    self.arena[w].color = self.arena[parent].color;
                    self.arena[parent].color = Color::Black;
                    let w_right = self.arena[w].right;
                    self.arena[w_right].color = Color::Black;
                    self.rotate_left(parent);
                    x = self.root;
                }
            } else {
                let mut w = self.arena[parent].left;
                if self.arena[w].color == Color::Red {
                    self.arena[w].color = Color::Black;
                    self.arena[parent].color = Color::Red;
                    self.rotate_right(parent);
                    w = self.arena[parent].left;
                }

                let w_left = self.arena[w].left;
                let w_right = self.arena[w].right;
                if self.color(w_left) == Color::Black && self.color(w_right) == Color::Black {
                    self.arena[w].color = Color::Red;
                    x = parent;
                    parent = self.arena[x].parent;
                } else {
                    if self.color(w_left) == Color::Black {
                        self.arena[w_right].color = Color::Black;
                        self.arena[w].color = Color::Red;
                        self.rotate_left(w);
                        w = self.arena[parent].left;
                    }
                    self.arena[w].color = self.arena[parent].color;
                    self.arena[parent].color = Color::Black;
                    let w_left = self.arena[w].left;
                    self.arena[w_left].color = Color::Black;
                    self.rotate_right(parent);
                    x = self.root;
                }
            }
        }

        if x != NIL {
            self.arena[x].color = Color::Black;
        }
    }
}

impl<T, U> Default for Tree<T, U> {
    fn default() -> Self {
        Self::new()
    }
}
