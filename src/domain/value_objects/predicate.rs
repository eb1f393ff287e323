//! Predicate Value Object
//!
//! A predicate is a runtime gate on a type-erased value. `narrow` either
//! hands back the value as a `&T` or refuses; a value of the wrong type is
//! refused the same way a value the check rejects is.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Validated downcast from `&dyn Any` to `&T`
pub struct Predicate<T> {
    check: Rc<dyn Fn(&T) -> bool>,
}

impl<T: 'static> Predicate<T> {
    /// Create a predicate from a check on `&T`
    pub fn new(check: impl Fn(&T) -> bool + 'static) -> Self {
        Self {
            check: Rc::new(check),
        }
    }

    /// A predicate that accepts every `T`
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// Downcast `value` and run the check on it
    pub fn narrow<'a>(&self, value: &'a dyn Any) -> Option<&'a T> {
        value.downcast_ref::<T>().filter(|&typed| (self.check)(typed))
    }

    /// Run the check on an already-typed value
    pub fn test(&self, value: &T) -> bool {
        (self.check)(value)
    }
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            check: Rc::clone(&self.check),
        }
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predicate<{}>", std::any::type_name::<T>())
    }
}
