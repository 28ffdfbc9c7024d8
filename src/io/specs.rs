/// The type of callback functions to call when warnings are raised while reading an input.
///
/// The first parameter is the line number (starting at 1), the second one is the warning message.
pub type WarningHandler = Box<dyn Fn(usize, String)>;

pub(crate) fn notify_warning(handlers: &[WarningHandler], line: usize, message: &str) {
    handlers
        .iter()
        .for_each(|h| (h)(line, message.to_string()));
}
