//! Upload Provider Implementations
//!
//! | Provider | Platform | Credentials |
//! |----------|----------|-------------|
//! | `none` | local (upload skipped) | none |
//! | `youtube` | YouTube Data API v3 | OAuth access token |

pub mod none;
pub mod youtube;

pub use none::NoUploadProvider;
pub use youtube::YouTubeUploadProvider;
