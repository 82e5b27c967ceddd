mod init;
pub mod shared;
pub mod traits;

pub use shared::SharedRb;
pub use traits::RbRef;
