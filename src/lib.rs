//! age-github - use GitHub users as age recipients.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── mod           # Argument collection and orchestration
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # Environment-driven settings
//!     ├── constants     # Limits and defaults
//!     ├── handle        # GitHub handle grammar
//!     ├── keys          # `.keys` payload scanning
//!     ├── cache/        # Payload cache
//!     │   ├── mod       # Cache trait
//!     │   ├── fs        # On-disk cache with one hour expiry
//!     │   └── memory    # In-memory cache
//!     ├── resolver      # Handle to key lookup over HTTP
//!     ├── rewrite       # `-r @handle` argument substitution
//!     └── launch        # Tool lookup and exec
//! ```
//!
//! # Flow
//!
//! ```text
//! argv -> rewrite -> resolver -> cache / https://github.com/<user>.keys
//!      -> exec age
//! ```

pub mod cli;
pub mod core;
pub mod error;
