use std::{cell::RefCell, rc::Rc};

/// Inline style properties the scroll lock touches.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BodyStyle {
    pub position: String,
    pub top: String,
    pub width: String,
    pub overflow: String,
}

/// Page-wide body state shared by everything that can lock scrolling.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageBody {
    pub scroll_y: f64,
    pub style: BodyStyle,
}

impl PageBody {
    pub fn shared(scroll_y: f64) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            scroll_y,
            style: BodyStyle::default(),
        }))
    }

    pub fn is_locked(&self) -> bool {
        self.style.overflow == "hidden"
    }
}

/// Pins the body in place while held; dropping it restores the saved style
/// and scroll position.
#[derive(Debug)]
pub struct ScrollLock {
    body: Rc<RefCell<PageBody>>,
    saved_scroll_y: f64,
    saved_style: BodyStyle,
}

impl ScrollLock {
    pub fn acquire(body: Rc<RefCell<PageBody>>) -> Self {
        let (saved_scroll_y, saved_style) = {
            let mut page = body.borrow_mut();
            let saved = (page.scroll_y, page.style.clone());
            page.style = BodyStyle {
                position: "fixed".to_string(),
                top: format!("-{}px", page.scroll_y),
                width: "100%".to_string(),
                overflow: "hidden".to_string(),
            };
            saved
        };
        tracing::debug!(scroll_y = saved_scroll_y, "body scroll locked");
        Self {
            body,
            saved_scroll_y,
            saved_style,
        }
    }

    pub fn saved_scroll_y(&self) -> f64 {
        self.saved_scroll_y
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        match self.body.try_borrow_mut() {
            Ok(mut page) => {
                page.style = std::mem::take(&mut self.saved_style);
                page.scroll_y = self.saved_scroll_y;
                tracing::debug!(scroll_y = self.saved_scroll_y, "body scroll restored");
            }
            Err(_) => tracing::warn!("page body busy; scroll lock not restored"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/scroll_lock.rs"]
mod tests;
