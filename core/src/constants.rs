//! Constant values.

/// Default maximum width of a single tag, in visual width units.
pub static DEFAULT_TAG_MAX_LENGTH: usize = 64;

/// Message shown when a tag exceeds the maximum width.
pub static TAG_TOO_LONG_MESSAGE: &str = "标签过长，最多为32个汉字";

/// Characters, other than whitespace, separating tags in raw text.
pub static TAG_SEPARATORS: [char; 4] = [',', ';', '，', '；'];

/// Default number of page slots between the first and last page.
pub static DEFAULT_MIDDLE_PAGE: usize = 10;

/// Smallest accepted number of middle page slots.
pub static MIN_MIDDLE_PAGE: usize = 2;

// page control classes
pub static PAGE_LIST_CLASS: &str = "pagelist";
pub static PAGE_PREVIOUS_CLASS: &str = "page-pre";
pub static PAGE_NEXT_CLASS: &str = "page-next";
pub static PAGE_NUMBER_CLASS: &str = "page-number";
pub static PAGE_MORE_CLASS: &str = "page-more";
pub static PAGE_CURRENT_CLASS: &str = "page-current";
pub static PAGE_DISABLED_CLASS: &str = "page-disabled";

// tag editor classes
pub static HIDDEN_CLASS: &str = "hidden";
pub static TAGS_DISABLED_CLASS: &str = "tags-disabled";
