pub mod bounded;
pub mod diagnostics;
pub mod types;
pub mod view;

pub use bounded::*;
pub use diagnostics::*;
pub use types::*;
pub use view::*;
