pub mod figure;
pub mod layout;
pub mod trace;

pub use figure::{Figure, FigureSource};
pub use layout::Layout;
pub use trace::Trace;
