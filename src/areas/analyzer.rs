use std::cell::{RefCell, RefMut};

/// Entry point for commands: owns where their output goes
pub struct Analyzer {
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Analyzer {
    pub fn new(writer: Box<dyn std::io::Write>) -> Self {
        Analyzer {
            writer: RefCell::new(writer),
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}
