//! Load trigger strategy
//!
//! The controller decides *whether* another page may be loaded; a trigger
//! decides *how* the user asks for it. The DOM implementations are
//! [`crate::dom::ManualTrigger`] (load-more button) and
//! [`crate::dom::AutoScrollTrigger`] (visibility sentinel).

pub trait LoadTrigger {
    /// Results are on screen and more may follow
    fn activate(&mut self);

    /// No more pages for this query
    fn deactivate(&mut self);

    /// A new search started; nothing is on screen yet
    fn reset(&mut self);

    /// The next page failed to load and may be asked for again
    fn retry(&mut self) {
        self.activate();
    }
}

impl<T: LoadTrigger + ?Sized> LoadTrigger for Box<T> {
    fn activate(&mut self) {
        (**self).activate()
    }

    fn deactivate(&mut self) {
        (**self).deactivate()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn retry(&mut self) {
        (**self).retry()
    }
}
