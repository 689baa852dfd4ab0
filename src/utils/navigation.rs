//! Navigation as an injected handle instead of an ambient router read, so
//! pages and component tests share one code path.

use std::rc::Rc;

#[derive(Clone)]
pub struct Navigator {
    push: Rc<dyn Fn(&str)>,
    back: Rc<dyn Fn()>,
}

impl Navigator {
    pub fn new(push: impl Fn(&str) + 'static, back: impl Fn() + 'static) -> Self {
        Self {
            push: Rc::new(push),
            back: Rc::new(back),
        }
    }

    /// Router-backed navigator. Must be created under a `<Router/>`.
    pub fn browser() -> Self {
        let navigate = leptos_router::use_navigate();
        Self::new(
            move |path: &str| navigate(path, Default::default()),
            || {
                if let Some(window) = web_sys::window() {
                    if let Ok(history) = window.history() {
                        let _ = history.back();
                    }
                }
            },
        )
    }

    pub fn push(&self, path: &str) {
        (self.push)(path);
    }

    /// Navigate back one step, with no side effects on data.
    pub fn back(&self) {
        (self.back)();
    }
}
