/// Template used when the caller gives none
pub const DEFAULT_TEMPLATE: &str = "%s";

/// Substitute `status` into a printf-style template.
///
/// The first `%s` takes the status and later ones expand to nothing, `%%` is a
/// literal percent sign, and any other `%` sequence is kept as written.
pub fn substitute(template: &str, status: &str) -> String {
    let mut out = String::with_capacity(template.len() + status.len());
    let mut status = Some(status);
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.peek() {
            Some('s') => {
                chars.next();
                out.push_str(status.take().unwrap_or_default());
            }
            Some('%') => {
                chars.next();
                out.push('%');
            }
            _ => out.push('%'),
        }
    }

    out
}
