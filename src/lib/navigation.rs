//! Page navigation helpers. The reload control goes through a hook on the host
//! target so tests can observe the trigger without a browser window.

/// Reloads the current page.
#[cfg(target_arch = "wasm32")]
pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

/// Reloads the current page by invoking the registered reload hook, if any.
#[cfg(not(target_arch = "wasm32"))]
pub fn reload_page() {
    hook::RELOAD_HOOK.with(|hook| {
        if let Some(hook) = hook.borrow().as_ref() {
            hook();
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
mod hook {
    use std::cell::RefCell;

    thread_local! {
        pub(super) static RELOAD_HOOK: RefCell<Option<Box<dyn Fn()>>> = const { RefCell::new(None) };
    }

    /// Registers a reload observer for the current thread. Test hook.
    #[allow(dead_code)]
    pub fn set_reload_hook(hook: impl Fn() + 'static) {
        RELOAD_HOOK.with(|slot| {
            *slot.borrow_mut() = Some(Box::new(hook));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{hook::set_reload_hook, reload_page};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn reload_page_fires_registered_hook() {
        let fired = Rc::new(Cell::new(0u32));
        let fired_for_hook = Rc::clone(&fired);
        set_reload_hook(move || fired_for_hook.set(fired_for_hook.get() + 1));

        reload_page();
        reload_page();

        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn reload_page_without_hook_is_a_no_op() {
        reload_page();
    }
}
