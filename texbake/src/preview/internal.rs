pub use super::super::internal::*;
