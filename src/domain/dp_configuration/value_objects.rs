// src/domain/dp_configuration/value_objects.rs
use crate::domain::dp_configuration::slug::is_url_safe_slug;
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::{fmt, str::FromStr};

pub const MIN_OVERLAY_SIZE: i32 = 50;
pub const MAX_SLUG_LENGTH: usize = 80;
pub const MAX_IMAGE_ID_LENGTH: usize = 255;
pub const MAX_TEMPLATE_NAME_LENGTH: usize = 120;
pub const FULL_RADIUS_TOKEN: &str = "max";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DpConfigurationId(i64);

impl DpConfigurationId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "configuration id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<DpConfigurationId> for i64 {
    fn from(value: DpConfigurationId) -> Self {
        value.0
    }
}

/// A slug that already satisfies the URL-safety rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DpSlug(String);

impl DpSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !is_url_safe_slug(&value) {
            return Err(DomainError::Validation(format!(
                "'{value}' is not a valid slug (lowercase letters, digits and single hyphens)"
            )));
        }
        if value.len() > MAX_SLUG_LENGTH {
            return Err(DomainError::Validation(format!(
                "slug must be at most {MAX_SLUG_LENGTH} characters"
            )));
        }
        Ok(Self(value))
    }

    /// Append a numeric collision suffix: `base` becomes `base-{counter}`.
    pub fn with_suffix(&self, counter: u32) -> Self {
        Self(format!("{}-{counter}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DpSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Public id of an asset held by the image CDN. Opaque to this service, but it
/// is embedded in transformation URLs, so separators are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageId(String);

impl ImageId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("image id cannot be empty".into()));
        }
        if value.len() > MAX_IMAGE_ID_LENGTH {
            return Err(DomainError::Validation(format!(
                "image id must be at most {MAX_IMAGE_ID_LENGTH} characters"
            )));
        }
        if value
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == ',')
        {
            return Err(DomainError::Validation(
                "image id cannot contain whitespace or commas".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Size and offset of the overlay graphic, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayPlacement {
    width: i32,
    height: i32,
    x: i32,
    y: i32,
}

impl OverlayPlacement {
    pub fn new(width: i32, height: i32, x: i32, y: i32) -> DomainResult<Self> {
        if width < MIN_OVERLAY_SIZE {
            return Err(DomainError::Validation(format!(
                "width must be at least {MIN_OVERLAY_SIZE}px"
            )));
        }
        if height < MIN_OVERLAY_SIZE {
            return Err(DomainError::Validation(format!(
                "height must be at least {MIN_OVERLAY_SIZE}px"
            )));
        }
        Ok(Self {
            width,
            height,
            x,
            y,
        })
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    pub const fn x(&self) -> i32 {
        self.x
    }

    pub const fn y(&self) -> i32 {
        self.y
    }
}

/// Corner rounding of the overlay: a pixel radius or fully rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radius {
    Pixels(u32),
    Full,
}

impl Default for Radius {
    fn default() -> Self {
        Self::Pixels(0)
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(px) => write!(f, "{px}"),
            Self::Full => f.write_str(FULL_RADIUS_TOKEN),
        }
    }
}

impl FromStr for Radius {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(FULL_RADIUS_TOKEN) {
            return Ok(Self::Full);
        }
        trimmed.parse::<u32>().map(Self::Pixels).map_err(|_| {
            DomainError::Validation(format!(
                "radius must be a non-negative integer or '{FULL_RADIUS_TOKEN}'"
            ))
        })
    }
}

impl Serialize for Radius {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Pixels(px) => serializer.serialize_u32(*px),
            Self::Full => serializer.serialize_str(FULL_RADIUS_TOKEN),
        }
    }
}

impl<'de> Deserialize<'de> for Radius {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RadiusVisitor;

        impl de::Visitor<'_> for RadiusVisitor {
            type Value = Radius;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a non-negative integer or \"{FULL_RADIUS_TOKEN}\"")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Radius, E> {
                u32::try_from(value)
                    .map(Radius::Pixels)
                    .map_err(|_| E::custom("radius is too large"))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Radius, E> {
                u64::try_from(value)
                    .map_err(|_| E::custom("radius cannot be negative"))
                    .and_then(|v| self.visit_u64(v))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Radius, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(RadiusVisitor)
    }
}

/// Optional display label, trimmed. Blank labels are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateName(String);

impl TemplateName {
    pub fn parse(value: Option<String>) -> DomainResult<Option<Self>> {
        let Some(raw) = value else {
            return Ok(None);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        if trimmed.chars().count() > MAX_TEMPLATE_NAME_LENGTH {
            return Err(DomainError::Validation(format!(
                "template name must be at most {MAX_TEMPLATE_NAME_LENGTH} characters"
            )));
        }
        Ok(Some(Self(trimmed.to_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
