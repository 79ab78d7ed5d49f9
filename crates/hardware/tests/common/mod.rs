//! Shared test infrastructure.



pub use builder::instruction::*;
pub use harness::TestContext;
