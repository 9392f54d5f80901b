mod header;
mod loc;

pub use header::{
    DEFAULT_HEADER_PATTERN, HeaderChecker, HeaderMatcher, HeaderReport, RegexHeaderMatcher,
};
pub use loc::{
    DEFAULT_FAIL_THRESHOLD, DEFAULT_WARN_THRESHOLD, LocChecker, LocClass, LocEntry, LocReport,
    LocThresholds, TEST_DIR_EXCLUDE,
};
