pub mod auth;
pub mod dp_configurations;
pub mod pagination;
pub mod serde_time;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use dp_configurations::{DpConfigurationDto, DpRenderDto};
pub use pagination::CursorPage;
pub use users::{CapabilityView, UserDto, UserProfileDto};
