//! Call-site capturing macros, one per tag
//!
//! Each macro takes the logger, the message, and optionally the creation
//! date. File, function and line are filled in from the expansion site.
//! Message and date accept `&str`, `String`, or an `Option` of either.
//!
//! ```
//! use ikilog::{log_critical, log_gray, TaggedLogger};
//!
//! let logger = TaggedLogger::default();
//! log_critical!(logger, "database unreachable", "2016-Jul-28");
//! log_gray!(logger, format!("{} rows", 12), "2016-Jul-28");
//!
//! let maybe: Option<&str> = None;
//! log_critical!(logger, maybe, "2016-Jul-28"); // no message, nothing printed
//! ```

/// Borrowed view of an optional string argument
pub trait OptionalStr {
    fn as_optional_str(&self) -> Option<&str>;
}

impl OptionalStr for str {
    fn as_optional_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl OptionalStr for String {
    fn as_optional_str(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: AsRef<str>> OptionalStr for Option<T> {
    fn as_optional_str(&self) -> Option<&str> {
        self.as_ref().map(|s| s.as_ref())
    }
}

impl<T: OptionalStr + ?Sized> OptionalStr for &T {
    fn as_optional_str(&self) -> Option<&str> {
        (**self).as_optional_str()
    }
}

/// Emits with an explicit [`ColorTag`](crate::ColorTag).
#[macro_export]
macro_rules! tagged {
    ($logger:expr, $tag:expr, $message:expr) => {
        $logger.emit(
            $tag,
            $crate::OptionalStr::as_optional_str(&$message),
            ::core::option::Option::None,
            $crate::call_site!(),
        )
    };
    ($logger:expr, $tag:expr, $message:expr, $date:expr) => {
        $logger.emit(
            $tag,
            $crate::OptionalStr::as_optional_str(&$message),
            $crate::OptionalStr::as_optional_str(&$date),
            $crate::call_site!(),
        )
    };
}

#[macro_export]
macro_rules! log {
    ($logger:expr, $($args:expr),+ $(,)?) => {
        $crate::tagged!($logger, $crate::ColorTag::None, $($args),+)
    };
}

#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $($args:expr),+ $(,)?) => {
        $crate::tagged!($logger, $crate::ColorTag::Critical, $($args),+)
    };
}

#[macro_export]
macro_rules! log_important {
    ($logger:expr, $($args:expr),+ $(,)?) => {
        $crate::tagged!($logger, $crate::ColorTag::Important, $($args),+)
    };
}

#[macro_export]
macro_rules! log_highlighted {
    ($logger:expr, $($args:expr),+ $(,)?) => {
        $crate::tagged!($logger, $crate::ColorTag::Highlighted, $($args),+)
    };
}

#[macro_export]
macro_rules! log_reviewed {
    ($logger:expr, $($args:expr),+ $(,)?) => {
        $crate::tagged!($logger, $crate::ColorTag::Reviewed, $($args),+)
    };
}

#[macro_export]
macro_rules! log_valuable {
    ($logger:expr, $($args:expr),+ $(,)?) => {
        $crate::tagged!($logger, $crate::ColorTag::Valuable, $($args),+)
    };
}

#[macro_export]
macro_rules! log_to_be_reviewed {
    ($logger:expr, $($args:expr),+ $(,)?) => {
        $crate::tagged!($logger, $crate::ColorTag::ToBeReviewed, $($args),+)
    };
}

#[macro_export]
macro_rules! log_gray {
    ($logger:expr, $($args:expr),+ $(,)?) => {
        $crate::tagged!($logger, $crate::ColorTag::NotImportant, $($args),+)
    };
}

#[cfg(test)]
mod tests {
    use super::OptionalStr;
    use crate::{ColorTag, LoggerConfig, MemorySink, TaggedLogger};
    use std::sync::Arc;

    fn memory_logger() -> (TaggedLogger, MemorySink) {
        let sink = MemorySink::new();
        let logger = TaggedLogger::with_sinks(LoggerConfig::default(), vec![Arc::new(sink.clone())]);
        (logger, sink)
    }

    #[test]
    fn test_optional_str_impls() {
        assert_eq!("a".as_optional_str(), Some("a"));
        assert_eq!(String::from("b").as_optional_str(), Some("b"));
        assert_eq!(Some("c").as_optional_str(), Some("c"));
        assert_eq!(None::<String>.as_optional_str(), None);
    }

    #[test]
    fn test_macro_captures_call_site() {
        let (logger, sink) = memory_logger();
        crate::log!(logger, "hello", "2016-Jul-28");

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert!(records[0].starts_with("ikiApps -[macros.rs:"));
        assert!(records[0].ends_with("] test_macro_captures_call_site - hello"));
    }

    #[test]
    fn test_macro_without_date_uses_policy() {
        let (logger, sink) = memory_logger();
        crate::log_critical!(logger, "undated");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_every_tag_macro_emits() {
        let (logger, sink) = memory_logger();
        logger.set_use_color(true);
        let date = "2016-Jul-28";

        crate::log!(logger, "m", date);
        crate::log_critical!(logger, "m", date);
        crate::log_important!(logger, "m", date);
        crate::log_highlighted!(logger, "m", date);
        crate::log_reviewed!(logger, "m", date);
        crate::log_valuable!(logger, "m", date);
        crate::log_to_be_reviewed!(logger, "m", date);
        crate::log_gray!(logger, "m", date);

        let records = sink.records();
        assert_eq!(records.len(), ColorTag::ALL.len());
        for (record, tag) in records.iter().zip(ColorTag::ALL) {
            assert!(record.starts_with(&format!("ikiApps {} -[", tag.glyph())), "{}", record);
        }
    }

    #[test]
    fn test_tagged_macro_with_owned_strings() {
        let (logger, sink) = memory_logger();
        let message = String::from("owned");
        let date = Some(String::from("2016-Jul-28"));
        crate::tagged!(logger, ColorTag::Valuable, message, date);
        assert_eq!(sink.len(), 1);
    }
}
