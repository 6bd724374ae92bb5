//! von Luschan reference scale and nearest-tone matching

mod matcher;
mod von_luschan;

pub use matcher::find_nearest;
pub use von_luschan::{ReferenceEntry, ReferenceScale, SCALE_LEN, VON_LUSCHAN};
