pub mod caching;
mod obs;

pub use caching::{Caching, CachingCons, CachingProd};
pub use obs::Obs;
