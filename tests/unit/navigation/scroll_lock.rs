use super::*;

#[test]
fn lock_pins_body_at_current_offset() {
    let body = PageBody::shared(320.0);
    let lock = ScrollLock::acquire(body.clone());
    {
        let page = body.borrow();
        assert!(page.is_locked());
        assert_eq!(page.style.position, "fixed");
        assert_eq!(page.style.top, "-320px");
        assert_eq!(page.style.width, "100%");
    }
    assert_eq!(lock.saved_scroll_y(), 320.0);
}

#[test]
fn drop_restores_style_and_scroll() {
    let body = PageBody::shared(120.0);
    body.borrow_mut().style.overflow = "auto".to_string();
    let before = body.borrow().clone();

    let lock = ScrollLock::acquire(body.clone());
    // Pinned body reports a different offset while locked.
    body.borrow_mut().scroll_y = 0.0;
    drop(lock);

    assert_eq!(*body.borrow(), before);
    assert!(!body.borrow().is_locked());
}

#[test]
fn restore_happens_on_early_return() {
    fn open_and_bail(body: Rc<RefCell<PageBody>>) -> Result<(), &'static str> {
        let _lock = ScrollLock::acquire(body);
        Err("bail")
    }

    let body = PageBody::shared(75.0);
    assert!(open_and_bail(body.clone()).is_err());
    assert!(!body.borrow().is_locked());
    assert_eq!(body.borrow().scroll_y, 75.0);
}
