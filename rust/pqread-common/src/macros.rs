/// Unwraps a `Result` inside an `Iterator<Item = Result<T>>::next()` body.
///
/// `Ok(t)` yields `t`; `Err(e)` returns `Some(Err(e))` from the enclosing
/// `next()`, so the error is surfaced as the next item of the iterator.
///
/// With `fuse = flag`, `flag` is set to `true` before the error is returned,
/// letting a stream decoder stop at the first corrupt run instead of reading
/// on from an undefined position.
#[macro_export]
macro_rules! yield_on_err {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(err) => {
                return Some(Err(err));
            }
        }
    };
    ($expr:expr, fuse = $flag:expr) => {
        match $expr {
            Ok(value) => value,
            Err(err) => {
                $flag = true;
                return Some(Err(err));
            }
        }
    };
}
