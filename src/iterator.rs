// Iterator: an external cursor walks a collection forwards or backwards
// without touching the collection itself.

use crate::console::Console;
use crate::error::{PatternError, Result};

//==============================================================================
// Cursor and aggregate traits
//==============================================================================

/// External traversal state over some collection.
pub trait Cursor {
    type Item;

    /// Raw cursor position; may sit one step outside the collection.
    fn key(&self) -> isize;

    fn current(&self) -> Result<Self::Item>;

    /// Step in the cursor's direction. Returns `false`, leaving the
    /// position untouched, when the step would leave the collection.
    fn advance(&mut self) -> bool;

    /// Jump to the first element for the cursor's direction.
    fn reset(&mut self);
}

/// Anything that can hand out fresh cursors over itself.
pub trait Aggregate {
    type Iter<'a>: Cursor
    where
        Self: 'a;

    fn create_cursor(&self) -> Self::Iter<'_>;
}

//==============================================================================
// Collection
//==============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<T> {
    items: Vec<T>,
    reverse: bool,
}

pub type WordsCollection = Collection<String>;

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            reverse: false,
        }
    }
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: impl Into<T>) {
        self.items.push(item.into());
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Flip the direction handed to cursors created from now on.
    pub fn reverse_direction(&mut self) {
        self.reverse = !self.reverse;
    }

    pub fn is_reversed(&self) -> bool {
        self.reverse
    }
}

impl<T> Aggregate for Collection<T> {
    type Iter<'a>
        = AlphabeticalOrderIterator<'a, T>
    where
        Self: 'a;

    fn create_cursor(&self) -> Self::Iter<'_> {
        AlphabeticalOrderIterator::new(self, self.reverse)
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = AlphabeticalOrderIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.create_cursor()
    }
}

//==============================================================================
// Concrete cursor
//==============================================================================

/// Cursor over a [`Collection`], with its direction fixed at creation.
#[derive(Debug)]
pub struct AlphabeticalOrderIterator<'a, T> {
    collection: &'a Collection<T>,
    position: isize,
    reverse: bool,
}

impl<'a, T> AlphabeticalOrderIterator<'a, T> {
    pub fn new(collection: &'a Collection<T>, reverse: bool) -> Self {
        let position = if reverse { collection.len() as isize } else { -1 };
        Self {
            collection,
            position,
            reverse,
        }
    }

    pub fn is_reversed(&self) -> bool {
        self.reverse
    }

    fn in_bounds(&self, position: isize) -> bool {
        position >= 0 && (position as usize) < self.collection.len()
    }
}

impl<'a, T> Cursor for AlphabeticalOrderIterator<'a, T> {
    type Item = &'a T;

    fn key(&self) -> isize {
        self.position
    }

    fn current(&self) -> Result<&'a T> {
        if !self.in_bounds(self.position) {
            return Err(PatternError::out_of_range(self.position, self.collection.len()));
        }
        Ok(&self.collection.items[self.position as usize])
    }

    fn advance(&mut self) -> bool {
        let step = if self.reverse { -1 } else { 1 };
        let next = self.position + step;
        if self.in_bounds(next) {
            self.position = next;
            true
        } else {
            false
        }
    }

    fn reset(&mut self) {
        self.position = if self.reverse {
            self.collection.len() as isize - 1
        } else {
            0
        };
    }
}

impl<'a, T> Iterator for AlphabeticalOrderIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.advance() {
            self.current().ok()
        } else {
            None
        }
    }
}

//==============================================================================
// Client code
//==============================================================================

pub fn run_demo(console: &mut Console) {
    let mut collection = WordsCollection::new();
    collection.add_item("First");
    collection.add_item("Second");
    collection.add_item("Third");

    console.heading("Straight traversal:");
    for word in &collection {
        console.say(word.as_str());
    }

    console.blank();
    console.heading("Reverse traversal:");

    collection.reverse_direction();

    for word in &collection {
        console.say(word.as_str());
    }
}
