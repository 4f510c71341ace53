pub mod probe;
pub mod result;

pub mod prelude {
    pub use super::probe::{HttpNegotiator, build_client, classify_version, failure_stage};
    pub use super::report;
    pub use super::result::NegotiationOutcome;
}

use std::fmt::Write;

/// Flattens an error and its `source()` chain into one line, which is the
/// only way to see why reqwest gave up on a connection.
pub fn report(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = format!("{}", err);
    while let Some(src) = err.source() {
        let _ = write!(s, ": {}", src);
        err = src;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Leaf;

    impl std::fmt::Display for Leaf {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "connection refused")
        }
    }

    impl std::error::Error for Leaf {}

    #[derive(Debug)]
    struct Outer(Leaf);

    impl std::fmt::Display for Outer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "error sending request")
        }
    }

    impl std::error::Error for Outer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_report_walks_source_chain() {
        let err = Outer(Leaf);
        assert_eq!(
            report(&err),
            "error sending request: connection refused"
        );
    }
}
