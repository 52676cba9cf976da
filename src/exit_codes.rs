//! Exit code constants for the cardlint CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unusable paths)
//! - 2: Input framing error (bad count line, short read)
//! - 3: I/O failure mid-run

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an input/output path that cannot be used.
pub const USER_ERROR: i32 = 1;

/// Input framing error: the batch header or line count contract was violated.
pub const INPUT_ERROR: i32 = 2;

/// I/O failure: a read or write on an already-open stream failed.
pub const IO_ERROR: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, INPUT_ERROR, IO_ERROR];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
