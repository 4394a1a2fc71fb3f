//! Optional-callback runner.

/// Invoke `callback` with `arg` if one was supplied, forwarding its result.
///
/// Lets every call site treat callbacks as optional without duplicating
/// the `if let` branch. A missing callback is not an error; it means "no
/// further action requested" and yields `None`.
pub fn run_possible_callback<A, R>(callback: Option<impl FnOnce(A) -> R>, arg: A) -> Option<R> {
    callback.map(|callback| callback(arg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_run_callback_when_present() {
        let result = run_possible_callback(Some(|n: u32| n * 2), 21);
        assert_eq!(result, Some(42));
    }

    #[test]
    fn should_be_a_no_op_when_callback_absent() {
        let callback: Option<fn(u32) -> u32> = None;
        assert_eq!(run_possible_callback(callback, 21), None);
    }

    #[test]
    fn should_forward_the_result_to_a_chained_callback() {
        let first = Some(|body: &str| body.len());
        let second = Some(|len: Option<usize>| len.unwrap_or(0) + 1);

        let intermediate = run_possible_callback(first, "four");
        let result = run_possible_callback(second, intermediate);
        assert_eq!(result, Some(5));
    }
}
