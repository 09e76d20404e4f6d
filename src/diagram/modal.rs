/// Demo request dialog attached to each diagram.
///
/// Nothing in the diagrams opens it; it only honors the close contract.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DemoModal {
    is_open: bool,
}

impl DemoModal {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Close callback; closing an already closed modal is a no-op.
    pub fn close(&mut self) {
        self.is_open = false;
    }
}
