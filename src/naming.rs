//! Centralized path construction for the output tree.
//!
//! Every generated file has a single deterministic location derived from the
//! source path and the level/tile indices:
//!
//! ```text
//! textures/
//! ├── rock.png
//! └── rock_Mipmaps/
//!     ├── Mip_0/
//!     │   ├── mip_0.png
//!     │   ├── tile_0_0_0.png      # tile_<level>_<col>_<row>
//!     │   └── tile_0_1_0.png
//!     └── Mip_1/
//!         └── mip_1.png
//! ```
//!
//! The folder sits next to the source and is named from the file stem, so
//! `rock.diffuse.png` becomes `rock.diffuse_Mipmaps/`.

use std::path::{Path, PathBuf};

/// Root folder of the pyramid for a given source file.
pub fn mipmaps_dir(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let parent = source.parent().unwrap_or_else(|| Path::new(""));
    parent.join(format!("{stem}_Mipmaps"))
}

/// Folder holding one level's files.
pub fn level_dir(mipmaps_dir: &Path, level: u32) -> PathBuf {
    mipmaps_dir.join(format!("Mip_{level}"))
}

/// File name of a level's full raster.
pub fn mip_file_name(level: u32) -> String {
    format!("mip_{level}.png")
}

/// File name of one tile.
pub fn tile_file_name(level: u32, column: u32, row: u32) -> String {
    format!("tile_{level}_{column}_{row}.png")
}
