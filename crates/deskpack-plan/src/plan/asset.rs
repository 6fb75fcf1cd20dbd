//! Asset naming and inlining.
//!
//! Static assets (images, media, fonts) are either inlined into the bundle as
//! a base64 data URI or emitted as separate files whose names embed the
//! original basename and the immediate containing directory.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::plan::helpers::DEFAULT_INLINE_LIMIT;
use crate::plan::rule::Transform;

/// Loader that decides between inlining and emitting.
pub const URL_LOADER: &str = "url-loader";

/// Output namespace an asset is emitted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetNamespace {
    Imgs,
    Media,
    Fonts,
}

impl AssetNamespace {
    pub const ALL: [AssetNamespace; 3] = [Self::Imgs, Self::Media, Self::Fonts];

    pub fn dir(self) -> &'static str {
        match self {
            Self::Imgs => "imgs",
            Self::Media => "media",
            Self::Fonts => "fonts",
        }
    }

    /// Rule pattern source for this namespace. Tolerates a `?query` suffix.
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Imgs => r"\.(png|jpe?g|gif|svg)(\?.*)?$",
            Self::Media => r"\.(mp4|webm|ogg|mp3|wav|flac|aac)(\?.*)?$",
            Self::Fonts => r"\.(woff2?|eot|ttf|otf)(\?.*)?$",
        }
    }

    /// Naming template, e.g. `imgs/[name]--[folder].[ext]`.
    pub fn template(self) -> String {
        format!("{}/[name]--[folder].[ext]", self.dir())
    }

    pub fn for_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "svg" => Some(Self::Imgs),
            "mp4" | "webm" | "ogg" | "mp3" | "wav" | "flac" | "aac" => Some(Self::Media),
            "woff" | "woff2" | "eot" | "ttf" | "otf" => Some(Self::Fonts),
            _ => None,
        }
    }

    /// The `url-loader` transform used by this namespace's rule.
    pub fn transform(self, limit: u64) -> Transform {
        Transform::new(URL_LOADER)
            .with_option("limit", limit)
            .with_option("name", self.template())
    }
}

/// How an asset ends up in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AssetOutput {
    /// Embedded as a `data:` URI
    Inline { data_uri: String },
    /// Written as a separate file under this output-relative name
    Emit { file_name: String },
}

/// Decide inline vs. emit for an asset.
///
/// Assets strictly smaller than `limit` bytes are inlined.
pub fn emit_asset(path: &str, contents: &[u8], limit: u64, template: &str) -> AssetOutput {
    if (contents.len() as u64) < limit {
        AssetOutput::Inline {
            data_uri: data_uri(path, contents),
        }
    } else {
        AssetOutput::Emit {
            file_name: render_asset_name(template, path),
        }
    }
}

/// Apply a `url-loader` transform to an asset. Returns `None` for other loaders.
pub fn apply_url_loader(transform: &Transform, path: &str, contents: &[u8]) -> Option<AssetOutput> {
    if transform.loader != URL_LOADER {
        return None;
    }

    let limit = transform
        .option("limit")
        .and_then(Value::as_u64)
        .unwrap_or(DEFAULT_INLINE_LIMIT);
    let template = transform
        .option("name")
        .and_then(Value::as_str)
        .unwrap_or("[name].[ext]");

    Some(emit_asset(path, contents, limit, template))
}

/// Substitute `[name]`, `[folder]` and `[ext]` for `path`.
pub fn render_asset_name(template: &str, path: &str) -> String {
    let path = strip_query(path).replace('\\', "/");
    let path = Path::new(&path);

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let folder = path
        .parent()
        .and_then(Path::file_name)
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    template
        .replace("[name]", &name)
        .replace("[folder]", &folder)
        .replace("[ext]", &ext)
}

fn strip_query(path: &str) -> &str {
    path.split_once('?').map_or(path, |(head, _)| head)
}

fn data_uri(path: &str, contents: &[u8]) -> String {
    let ext = Path::new(strip_query(path))
        .extension()
        .map(|s| s.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    format!("data:{};base64,{}", mime_for_extension(&ext), STANDARD.encode(contents))
}

fn mime_for_extension(ext: &str) -> &'static str {
    match ext {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "ogg" => "audio/ogg",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "flac" => "audio/flac",
        "aac" => "audio/aac",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",
        "eot" => "application/vnd.ms-fontobject",
        _ => "application/octet-stream",
    }
}
