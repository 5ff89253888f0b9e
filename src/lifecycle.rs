/// Holds the mounted page, if any.
///
/// At most one page is mounted at a time. Mounting again drops the current
/// page before the replacement is built, so the old page's listeners and
/// timer are gone before new ones are registered.
pub struct PageSlot<P> {
    current: Option<P>,
}

impl<P> PageSlot<P> {
    pub const fn new() -> Self {
        Self { current: None }
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.current.is_some()
    }

    /// Drop the current page, then store the result of `build`. On error the
    /// slot is left empty.
    pub fn mount_with<E>(&mut self, build: impl FnOnce() -> Result<P, E>) -> Result<(), E> {
        self.unmount();
        self.current = Some(build()?);
        Ok(())
    }

    /// Drop the current page. Returns whether one was mounted.
    pub fn unmount(&mut self) -> bool {
        self.current.take().is_some()
    }
}

impl<P> Default for PageSlot<P> {
    fn default() -> Self {
        Self::new()
    }
}
