//! Common test utilities for auto-pr tests

#[allow(dead_code)]
pub mod fixtures;
#[allow(dead_code)]
pub mod mock_platform;
#[allow(dead_code)]
pub mod mock_vcs;
#[allow(dead_code)]
pub mod temp_repo;

// Re-exports for convenience - not all test binaries use all exports
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use mock_platform::MockPlatformService;
#[allow(unused_imports)]
pub use mock_vcs::MockVcs;
#[allow(unused_imports)]
pub use temp_repo::TempGitRepo;
