//! Size and geometry constants

pub mod hash;
