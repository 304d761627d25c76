mod cursor;
mod iter;
mod length;
mod linked_list;
mod node;

pub use cursor::*;
pub use iter::*;
pub(crate) use length::*;
pub use linked_list::*;
pub(crate) use node::*;
