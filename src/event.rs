//! Per-call event data and call-site capture

use crate::tag::ColorTag;
use std::fmt;

/// Where a log call was made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub file: &'a str,
    pub function: &'a str,
    pub line: u32,
}

impl<'a> CallSite<'a> {
    pub fn new(file: &'a str, function: &'a str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }

    /// File name without its directories. Handles both `/` and `\` separators
    /// so paths from `file!()` on Windows builds look the same.
    pub fn basename(&self) -> &'a str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }
}

impl fmt::Display for CallSite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}] {}", self.basename(), self.line, self.function)
    }
}

/// A single log call. Created per call and consumed immediately.
#[derive(Debug, Clone, Copy)]
pub struct LogEvent<'a> {
    pub tag: ColorTag,
    pub message: Option<&'a str>,
    pub date: Option<&'a str>,
    pub site: CallSite<'a>,
}

impl<'a> LogEvent<'a> {
    pub fn new(
        tag: ColorTag,
        message: Option<&'a str>,
        date: Option<&'a str>,
        site: CallSite<'a>,
    ) -> Self {
        Self {
            tag,
            message,
            date,
            site,
        }
    }
}

/// Name of the enclosing function, without its module path.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let path = __type_name_of(__here);
        let path = path.strip_suffix("::__here").unwrap_or(path);
        path.rsplit("::")
            .find(|segment| *segment != "{{closure}}")
            .unwrap_or(path)
    }};
}

/// [`CallSite`] for the location this macro is expanded at.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(file!(), $crate::function_name!(), line!())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename_unix_path() {
        let site = CallSite::new("src/views/login.rs", "submit", 12);
        assert_eq!(site.basename(), "login.rs");
    }

    #[test]
    fn test_basename_windows_path() {
        let site = CallSite::new(r"src\views\login.rs", "submit", 12);
        assert_eq!(site.basename(), "login.rs");
    }

    #[test]
    fn test_basename_bare_file() {
        let site = CallSite::new("main.rs", "main", 1);
        assert_eq!(site.basename(), "main.rs");
    }

    #[test]
    fn test_display() {
        let site = CallSite::new("src/app.rs", "launch", 42);
        assert_eq!(site.to_string(), "[app.rs:42] launch");
    }

    #[test]
    fn test_function_name_macro() {
        assert_eq!(crate::function_name!(), "test_function_name_macro");
    }

    #[test]
    fn test_function_name_inside_closure() {
        let name = (|| crate::function_name!())();
        assert_eq!(name, "test_function_name_inside_closure");
    }

    #[test]
    fn test_call_site_macro() {
        let site = crate::call_site!();
        assert_eq!(site.basename(), "event.rs");
        assert_eq!(site.function, "test_call_site_macro");
        assert!(site.line > 0);
    }
}
