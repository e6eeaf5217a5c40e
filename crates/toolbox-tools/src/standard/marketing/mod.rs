//! # SEO, Marketing and Media Tools

#[cfg(feature = "network")]
pub mod domain_age;
pub mod meta_tags;
pub mod utm;
pub mod youtube;

#[cfg(feature = "network")]
pub use domain_age::{DEFAULT_RDAP_URL, DomainAge, DomainAgeCheckerTool, normalize_domain};
pub use meta_tags::{MetaTagConfig, MetaTagGeneratorTool, generate_meta_tags};
pub use utm::{UtmConfig, UtmLinkGeneratorTool, build_utm_url};
pub use youtube::{Thumbnail, YoutubeThumbnailTool, extract_video_id, thumbnails};
