mod featured;
mod filter;
mod locale;
mod meta;
mod record;

pub use self::{
    featured::{FeaturedConfig, cycle_key, select_daily_featured, select_daily_featured_with},
    filter::{ShowcaseFilters, apply_filters},
    locale::{ListField, Locale, TextField, localized_list, localized_text, resolve_locale},
    meta::{PageMeta, compose_title, normalize_description, normalize_title, showcase_meta},
    record::{ShowcaseRecord, SortOrder, recency_timestamp, sort_by_recency},
};

pub(crate) use self::record::parse_timestamp_millis;
