use crate::error::Error;

pub trait WriterTrait {
    type Item;

    fn write(&mut self, vals: Vec<Self::Item>) -> Result<(), Error>;
    fn write_single(&mut self, val: &Self::Item) -> Result<(), Error>;
    /// Flush and finalize the underlying stream. Writing after closing is an error.
    fn close(&mut self) -> Result<(), Error>;
}
