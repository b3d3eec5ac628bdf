/// A struct representing a key-value pair stored in a tree node.
#[derive(Debug)]
pub struct Entry<T, U> {
    pub key: T,
    pub value: U,
}
