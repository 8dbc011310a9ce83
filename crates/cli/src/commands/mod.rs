pub mod filter;
pub mod inspect;
pub mod policy;

pub use filter::*;
pub use inspect::*;
pub use policy::*;
