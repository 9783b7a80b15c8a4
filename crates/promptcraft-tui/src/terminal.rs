use std::io;

/// Run `enter`, then `setup`. If `setup` fails, `leave` runs before the error
/// is returned so the terminal is not left in raw mode.
///
/// A failure in `leave` on that path is ignored; the setup error is the one
/// reported.
pub fn setup_with_rollback<T>(
    enter: impl FnOnce() -> io::Result<()>,
    setup: impl FnOnce() -> io::Result<T>,
    leave: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    enter()?;
    match setup() {
        Ok(value) => Ok(value),
        Err(e) => {
            let _ = leave();
            Err(e)
        }
    }
}
