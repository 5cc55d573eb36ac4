pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use stub_verifier::StubVerifier;
