//! Serialization of packed planes into icon resource output
//!
//! A plane is written either as raw bytes or as the quoted-hex block grammar
//! of a resource-definition (Rez) source file, optionally surrounded by the
//! `resource 'ICN#' (128)` / `resource 'icl4' (128)` declaration
//! boilerplate.

use std::io::Write;

use bon::Builder;
use strum::IntoStaticStr;

use crate::{image::Plane, Error};

/// Resource id given to application icons in the resource files this
/// output targets
const RESOURCE_ID: u16 = 128;
/// Bytes emitted per quoted hex line
const HEX_BYTES_PER_LINE: usize = 20;

#[derive(IntoStaticStr, Debug, Eq, PartialEq, Copy, Clone)]
/// The icon resource variants this serializer can emit
pub enum ResourceType {
    /// 1-bit icon bitmap followed by its 1-bit opacity mask
    #[strum(serialize = "ICN#")]
    MonoIconAndMask,
    /// 4-bit color icon; on screen it reuses the mono resource's mask, so
    /// no mask plane is written for this variant
    #[strum(serialize = "icl4")]
    ColorIcon4,
}

impl ResourceType {
    /// The literal resource type written inside the declaration quotes
    #[must_use]
    pub fn as_str(self) -> &'static str {
        Into::<&'static str>::into(self)
    }
}

/// Per-call serialization settings
#[derive(Builder, Debug, Copy, Clone)]
#[non_exhaustive]
pub struct RezConfig {
    /// Emit a quoted hex block instead of raw bytes
    #[builder(default)]
    pub textual: bool,
    /// Surround the planes with a resource declaration (textual mode only)
    #[builder(default)]
    pub resource_wrapper: bool,
    /// Which resource variant is being written
    pub resource_type: ResourceType,
    /// Append a comma after the closing quote of a textual block
    #[builder(default)]
    pub trailing_comma: bool,
}

fn emit(dest: &mut impl Write, text: &str) -> Result<(), Error> {
    dest.write_all(text.as_bytes()).map_err(Error::WriteFailure)
}

/// Writes one packed plane to `dest`
///
/// Raw mode passes the plane's bytes through verbatim. Textual mode opens
/// with `$"`, emits each byte as two lowercase hex digits with a space after
/// every second byte, wraps to a fresh quoted segment every 20 bytes, and
/// closes with `"` plus an optional trailing comma. No space is emitted
/// immediately before a wrap or after the final byte.
///
/// # Errors
///
/// Returns [`Error::WriteFailure`] if `dest` rejects a write.
pub fn write_plane(plane: &Plane, dest: &mut impl Write, config: &RezConfig) -> Result<(), Error> {
    if !config.textual {
        return dest.write_all(plane.bytes()).map_err(Error::WriteFailure);
    }

    let total = plane.len();
    let mut text = String::with_capacity(total * 3);
    text.push_str("$\"");
    for (line, bytes) in plane.bytes().chunks(HEX_BYTES_PER_LINE).enumerate() {
        if line > 0 {
            text.push_str("\"\n$\"");
        }
        for (i, byte) in bytes.iter().enumerate() {
            let idx = line * HEX_BYTES_PER_LINE + i;
            text.push_str(&format!("{byte:02x}"));
            // Bytes group in pairs; the pair separator is dropped at line
            // ends and after the last byte of the plane.
            if i % 2 == 1 && i + 1 != HEX_BYTES_PER_LINE && idx + 1 != total {
                text.push(' ');
            }
        }
    }
    text.push('"');
    if config.trailing_comma {
        text.push(',');
    }
    text.push('\n');
    emit(dest, &text)
}

/// Writes a complete icon resource to `dest`
///
/// For [`ResourceType::MonoIconAndMask`] the color plane is written first
/// and the mask plane second: raw mode concatenates their bytes, textual
/// mode gives the color block a trailing comma and the mask block none,
/// and the optional wrapper nests both blocks inside one extra brace pair.
/// For [`ResourceType::ColorIcon4`] only the color plane is written and
/// `mask` goes untouched.
///
/// # Errors
///
/// Returns [`Error::WriteFailure`] if `dest` rejects a write.
pub fn write_icon(
    dest: &mut impl Write,
    color: &Plane,
    mask: &Plane,
    config: &RezConfig,
) -> Result<(), Error> {
    let wrap = config.textual && config.resource_wrapper;
    match config.resource_type {
        ResourceType::MonoIconAndMask => {
            if wrap {
                emit(
                    dest,
                    &format!(
                        "resource '{}' ({RESOURCE_ID}) {{\n{{\n",
                        config.resource_type.as_str()
                    ),
                )?;
            }
            let color_config = RezConfig {
                trailing_comma: config.textual,
                ..*config
            };
            write_plane(color, dest, &color_config)?;
            let mask_config = RezConfig {
                trailing_comma: false,
                ..*config
            };
            write_plane(mask, dest, &mask_config)?;
            if wrap {
                emit(dest, "}\n};\n\n")?;
            }
        }
        ResourceType::ColorIcon4 => {
            if wrap {
                emit(
                    dest,
                    &format!(
                        "resource '{}' ({RESOURCE_ID}) {{\n",
                        config.resource_type.as_str()
                    ),
                )?;
            }
            let color_config = RezConfig {
                trailing_comma: false,
                ..*config
            };
            write_plane(color, dest, &color_config)?;
            if wrap {
                emit(dest, "};\n\n")?;
            }
        }
    }
    Ok(())
}
