//! Testing utilities and harness for Pocket UI

pub mod testing;

pub use testing::*;

pub mod prelude {
    pub use crate::testing::*;
}
