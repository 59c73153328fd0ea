pub mod guard_policy;
pub mod response;
pub mod verdict;
