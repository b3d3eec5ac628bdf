//! Fast, but limited allocator.

use std::mem;
use std::ops::{Index, IndexMut};

enum Block<T> {
    Occupied(T),
    Vacant(Option<usize>),
}

/// A fast, but limited allocator that only allocates a single type of object.
///
/// Objects are addressed by the `usize` index returned from `allocate`. Indices are stable: an
/// object never moves for as long as it is allocated, so indices may be stored inside other
/// allocated objects to form linked structures without aliased references. Freed slots are pushed
/// onto an intrusive free list and reused by subsequent allocations, so the backing `Vec` does not
/// grow under a steady allocate/free workload. All objects inside the arena are destroyed when the
/// arena is destroyed. The code uses no unsafe blocks.
///
/// # Examples
///
/// ```
/// use balanced_collections::arena::Arena;
///
/// let mut arena = Arena::new();
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena.free(x), 2);
/// ```
pub struct Arena<T> {
    blocks: Vec<Block<T>>,
    head: Option<usize>,
    size: usize,
}

impl<T> Arena<T> {
    /// Constructs a new, empty `Arena<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::Arena;
    ///
    /// let arena: Arena<u32> = Arena::new();
    /// ```
    pub fn new() -> Self {
        Arena {
            blocks: Vec::new(),
            head: None,
            size: 0,
        }
    }

    /// Allocates an object in the arena and returns the index of its slot. The index can later be
    /// used to retrieve mutable and immutable references to the object, and to deallocate it.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get(x), Some(&0));
    /// ```
    pub fn allocate(&mut self, value: T) -> usize {
        self.size += 1;
        match self.head.take() {
            None => {
                self.blocks.push(Block::Occupied(value));
                self.blocks.len() - 1
            }
            Some(index) => {
                let vacant_block = mem::replace(&mut self.blocks[index], Block::Occupied(value));
                match vacant_block {
                    Block::Vacant(next_index) => {
                        self.head = next_index;
                        index
                    }
                    Block::Occupied(_) => panic!("Expected a vacant block."),
                }
            }
        }
    }

    /// Deallocates the object at a slot and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the index corresponds to an invalid or vacant slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.free(x), 0);
    /// ```
    pub fn free(&mut self, index: usize) -> T {
        match self.blocks.get(index) {
            Some(Block::Occupied(_)) => {}
            Some(Block::Vacant(_)) => panic!("Error: attempting to free vacant block."),
            None => panic!("Error: attempting to free invalid block."),
        }
        let old_block = mem::replace(&mut self.blocks[index], Block::Vacant(self.head.take()));
        match old_block {
            Block::Occupied(value) => {
                self.size -= 1;
                self.head = Some(index);
                value
            }
            Block::Vacant(_) => unreachable!(),
        }
    }

    /// Returns an immutable reference to the object at a slot. Returns `None` if the index does
    /// not correspond to an allocated object.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get(x), Some(&0));
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        match self.blocks.get(index) {
            Some(Block::Occupied(ref value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the object at a slot. Returns `None` if the index does not
    /// correspond to an allocated object.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get_mut(x), Some(&mut 0));
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match self.blocks.get_mut(index) {
            Some(Block::Occupied(ref mut value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the number of allocated objects in the arena.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// arena.allocate(0);
    /// assert_eq!(arena.size(), 1);
    /// ```
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the arena contains no allocated objects.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Clears the arena, destroying all allocated objects and discarding the free list.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// arena.allocate(0);
    /// arena.clear();
    /// assert!(arena.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.head = None;
        self.size = 0;
    }
}

impl<T> Index<usize> for Arena<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("Error: index out of bounds.")
    }
}

impl<T> IndexMut<usize> for Arena<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).expect("Error: index out of bounds.")
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}
